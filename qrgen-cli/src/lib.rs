//! # qrgen-cli
//!
//! Library surface of the `qrgen` binary: the pure pieces of the command
//! pipeline (file export, record checking) live here so integration tests
//! can drive them directly. Argument parsing, terminal color, and process
//! exit codes stay in the binary.

pub mod check;
pub mod export;
