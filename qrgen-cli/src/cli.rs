//! Argument parsing and command dispatch for the `qrgen` binary.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Result, bail};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;

use qrgen::{
    ContentKind, ContentRecord, EmailContent, LocationContent, SmsContent, ValidationReport,
    VcardContent, WifiContent, WifiSecurity, encode, validate,
};
use qrgen_cli::{check, export};
use qrgen_render::{Color, DEFAULT_MARGIN, DEFAULT_PIXEL_WIDTH, EcLevel, RenderOptions};

use crate::logging;

#[derive(Parser)]
#[command(name = "qrgen", version, about = "Generate and validate QR code payloads")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Encode plain text
    Text(TextArgs),
    /// Encode a web address (https:// is assumed when the scheme is missing)
    Url(UrlArgs),
    /// Encode a mailto: message
    Email(EmailArgs),
    /// Encode a tel: phone number
    Phone(PhoneArgs),
    /// Encode an sms: message
    Sms(SmsArgs),
    /// Encode WiFi network credentials
    Wifi(WifiArgs),
    /// Encode geographic coordinates
    Location(LocationArgs),
    /// Encode a vCard contact
    Vcard(VcardArgs),
    /// Validate a JSON content record without rendering
    Check(CheckArgs),
}

/// Render and export options shared by every content subcommand.
#[derive(Args)]
struct RenderArgs {
    /// Error correction level (L, M, Q, or H)
    #[arg(long, default_value_t = EcLevel::M, value_parser = EcLevel::from_str)]
    ec_level: EcLevel,

    /// Output edge length in pixels
    #[arg(long, default_value_t = DEFAULT_PIXEL_WIDTH)]
    size: u32,

    /// Quiet zone width in modules
    #[arg(long, default_value_t = DEFAULT_MARGIN)]
    margin: u32,

    /// Module color as #RRGGBB
    #[arg(long, default_value_t = Color::BLACK, value_parser = Color::from_str)]
    dark: Color,

    /// Background color as #RRGGBB
    #[arg(long, default_value_t = Color::WHITE, value_parser = Color::from_str)]
    light: Color,

    /// Output file path (a .svg extension selects SVG markup)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the QR code to stdout as Unicode blocks instead of writing a file
    #[arg(long, conflicts_with = "output")]
    print: bool,

    /// Print the encoded payload string only, without rendering
    #[arg(long, conflicts_with_all = ["print", "output"])]
    payload: bool,
}

impl RenderArgs {
    fn options(&self) -> RenderOptions {
        RenderOptions {
            ec_level: self.ec_level,
            pixel_width: self.size,
            margin: self.margin,
            dark: self.dark,
            light: self.light,
        }
    }
}

#[derive(Args)]
struct TextArgs {
    /// The text to encode verbatim
    text: String,

    #[command(flatten)]
    render: RenderArgs,
}

#[derive(Args)]
struct UrlArgs {
    /// The web address
    url: String,

    #[command(flatten)]
    render: RenderArgs,
}

#[derive(Args)]
struct EmailArgs {
    /// Recipient address
    #[arg(long)]
    to: String,

    /// Message subject (at most 100 characters)
    #[arg(long)]
    subject: Option<String>,

    /// Message body
    #[arg(long)]
    body: Option<String>,

    #[command(flatten)]
    render: RenderArgs,
}

#[derive(Args)]
struct PhoneArgs {
    /// The phone number
    number: String,

    #[command(flatten)]
    render: RenderArgs,
}

#[derive(Args)]
struct SmsArgs {
    /// Recipient number
    #[arg(long)]
    number: String,

    /// Prefilled message (at most 160 characters)
    #[arg(long)]
    message: Option<String>,

    #[command(flatten)]
    render: RenderArgs,
}

/// WiFi authentication scheme.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum SecurityArg {
    Wpa,
    Wep,
    Nopass,
}

impl From<SecurityArg> for WifiSecurity {
    fn from(security: SecurityArg) -> Self {
        match security {
            SecurityArg::Wpa => Self::Wpa,
            SecurityArg::Wep => Self::Wep,
            SecurityArg::Nopass => Self::Nopass,
        }
    }
}

#[derive(Args)]
struct WifiArgs {
    /// Network name (at most 32 characters)
    #[arg(long)]
    ssid: String,

    /// Network password (at least 8 characters unless security is nopass)
    #[arg(long)]
    password: Option<String>,

    /// Authentication scheme
    #[arg(long, value_enum, default_value = "wpa")]
    security: SecurityArg,

    /// Mark the network as hidden
    #[arg(long)]
    hidden: bool,

    #[command(flatten)]
    render: RenderArgs,
}

#[derive(Args)]
struct LocationArgs {
    /// Latitude in decimal degrees (-90 to 90)
    #[arg(long)]
    latitude: String,

    /// Longitude in decimal degrees (-180 to 180)
    #[arg(long)]
    longitude: String,

    #[command(flatten)]
    render: RenderArgs,
}

#[derive(Args)]
struct VcardArgs {
    #[arg(long)]
    first_name: Option<String>,

    #[arg(long)]
    last_name: Option<String>,

    #[arg(long)]
    organization: Option<String>,

    #[arg(long)]
    phone: Option<String>,

    #[arg(long)]
    email: Option<String>,

    #[arg(long)]
    url: Option<String>,

    #[command(flatten)]
    render: RenderArgs,
}

#[derive(Args)]
struct CheckArgs {
    /// Path to a JSON content record
    #[arg(long)]
    record: PathBuf,

    /// Content kind to validate (text, url, email, phone, sms, wifi, location, vcard)
    #[arg(long, value_parser = ContentKind::from_str)]
    kind: ContentKind,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

/// Parse arguments and dispatch the selected subcommand.
///
/// # Errors
///
/// Returns an error when validation fails, rendering fails, or the output
/// cannot be written; `main` maps any error to exit code 1.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Command::Text(args) => {
            let record = ContentRecord {
                text: args.text,
                ..ContentRecord::default()
            };
            generate(ContentKind::Text, &record, &args.render)
        }
        Command::Url(args) => {
            let record = ContentRecord {
                url: args.url,
                ..ContentRecord::default()
            };
            generate(ContentKind::Url, &record, &args.render)
        }
        Command::Email(args) => {
            let record = ContentRecord {
                email: EmailContent {
                    to: args.to,
                    subject: args.subject.unwrap_or_default(),
                    body: args.body.unwrap_or_default(),
                },
                ..ContentRecord::default()
            };
            generate(ContentKind::Email, &record, &args.render)
        }
        Command::Phone(args) => {
            let record = ContentRecord {
                phone: args.number,
                ..ContentRecord::default()
            };
            generate(ContentKind::Phone, &record, &args.render)
        }
        Command::Sms(args) => {
            let record = ContentRecord {
                sms: SmsContent {
                    number: args.number,
                    message: args.message.unwrap_or_default(),
                },
                ..ContentRecord::default()
            };
            generate(ContentKind::Sms, &record, &args.render)
        }
        Command::Wifi(args) => {
            let record = ContentRecord {
                wifi: WifiContent {
                    ssid: args.ssid,
                    password: args.password.unwrap_or_default(),
                    security: args.security.into(),
                    hidden: args.hidden,
                },
                ..ContentRecord::default()
            };
            generate(ContentKind::Wifi, &record, &args.render)
        }
        Command::Location(args) => {
            let record = ContentRecord {
                location: LocationContent {
                    latitude: args.latitude,
                    longitude: args.longitude,
                },
                ..ContentRecord::default()
            };
            generate(ContentKind::Location, &record, &args.render)
        }
        Command::Vcard(args) => {
            let record = ContentRecord {
                vcard: VcardContent {
                    first_name: args.first_name.unwrap_or_default(),
                    last_name: args.last_name.unwrap_or_default(),
                    organization: args.organization.unwrap_or_default(),
                    phone: args.phone.unwrap_or_default(),
                    email: args.email.unwrap_or_default(),
                    url: args.url.unwrap_or_default(),
                },
                ..ContentRecord::default()
            };
            generate(ContentKind::Vcard, &record, &args.render)
        }
        Command::Check(args) => {
            let mut stdout = std::io::stdout();
            let report = check::check_record_file(&args.record, args.kind, args.json, &mut stdout)?;
            if !report.valid {
                bail!("record is not valid for kind '{}'", args.kind);
            }
            Ok(())
        }
    }
}

/// Validate, encode, and hand the payload to the requested output.
fn generate(kind: ContentKind, record: &ContentRecord, args: &RenderArgs) -> Result<()> {
    let report = validate(kind, record);
    if !report.valid {
        report_failure(kind, &report);
        if report.errors_count() > 0 {
            bail!("{} field error(s) found", report.errors_count());
        }
        bail!("no content to encode for '{kind}'");
    }

    let payload = encode(kind, record);
    if args.payload {
        println!("{payload}");
        return Ok(());
    }

    let options = args.options();
    if args.print {
        let art = qrgen_render::render_terminal(&payload, &options)?;
        println!("{art}");
        return Ok(());
    }

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| export::default_output_path(kind));
    let outcome = export::export_file(&payload, &options, &path)?;
    println!(
        "{} Saved {} ({} bytes)",
        "\u{2713}".green(),
        outcome.path.display(),
        outcome.bytes_written
    );
    Ok(())
}

fn report_failure(kind: ContentKind, report: &ValidationReport) {
    eprintln!();
    if !report.has_content {
        let line = format!("\u{2717} No content to encode for '{kind}'");
        eprintln!("{}", line.red());
    }
    for error in &report.errors {
        eprintln!("  {} {}", "\u{2717}".red(), error.format_human_readable());
    }
    eprintln!();
}
