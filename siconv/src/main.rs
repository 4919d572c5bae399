//! siconv - interactive SI unit converter
//!
//! Reads one query per line from stdin and prints the converted quantity.
//!
//! Commands:
//! - `<number> <unit> = <unit>`: convert, e.g. `1 kg = g`
//! - `units`: list root units and prefixes
//! - `q`: quit
//!
//! Flags:
//! - `--json`: one JSON object per answer
//! - `--quiet`: no welcome, instruction or farewell messages
//!
//! Logging goes to stderr, filtered by `RUST_LOG` (default `warn`).

use std::env;
use std::io::{self, BufRead, Write};
use serde_json::json;
use siconv_core::{convert_line, prefixes, root_units, ConvertError, Conversion};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

const WELCOME_MESSAGE: &str = "\nWelcome to the Metric Unit Converter!";
const INSTRUCTIONS_MESSAGE: &str = "\nPlease enter \"q\" to quit or enter a metric conversion query. \
The metric conversion query should be in the format:\n\
Number UnitToConvertFrom = UnitToConvertTo\n\n\
For example, a valid metric conversion query for converting 1 kilogram to grams is:\n\
1 kg = g\n\n\
Note that UnitToConvertFrom and UnitToConvertTo must use prefixes and symbols from the \
International System of Units (SI). Enter \"units\" to list them.";
const FAREWELL_MESSAGE: &str = "\nThank you for using the Metric Unit Converter. Goodbye!";
const USAGE: &str = "Usage: siconv [--json] [--quiet] [--help]";

const QUIT_COMMAND: &str = "q";
const UNITS_COMMAND: &str = "units";

/// How answers are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Driver settings from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct DriverConfig {
    output: OutputFormat,
    quiet: bool,
}

impl DriverConfig {
    /// Parse flags (program name already skipped). `Ok(None)` means help was requested.
    fn from_args<I>(args: I) -> Result<Option<Self>, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = DriverConfig::default();
        for arg in args {
            match arg.as_str() {
                "--json" => config.output = OutputFormat::Json,
                "--quiet" | "-q" => config.quiet = true,
                "--help" | "-h" => return Ok(None),
                other => return Err(format!("Unknown argument: {}", other)),
            }
        }
        Ok(Some(config))
    }

    /// Banners are only shown in interactive text mode
    fn show_banners(&self) -> bool {
        self.output == OutputFormat::Text && !self.quiet
    }
}

/// What the loop does after a line
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

fn main() {
    init_logging();

    let config = match DriverConfig::from_args(env::args().skip(1)) {
        Ok(Some(config)) => config,
        Ok(None) => {
            println!("{}", USAGE);
            return;
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    info!(version = env!("CARGO_PKG_VERSION"), ?config, "siconv started");

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run(stdin.lock(), stdout.lock(), &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    info!("siconv stopped");
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Read-convert-print loop. Ends on `q` or end of input.
fn run<R: BufRead, W: Write>(mut reader: R, mut out: W, config: &DriverConfig) -> io::Result<()> {
    if config.show_banners() {
        writeln!(out, "{}", WELCOME_MESSAGE)?;
    }

    loop {
        if config.show_banners() {
            writeln!(out, "{}", INSTRUCTIONS_MESSAGE)?;
        }
        out.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            debug!("end of input");
            break;
        }

        let line = line.trim_end_matches(['\n', '\r']);
        if handle_line(line, config, &mut out)? == Step::Quit {
            break;
        }
    }

    if config.show_banners() {
        writeln!(out, "{}", FAREWELL_MESSAGE)?;
    }
    out.flush()
}

/// Handle one input line, writing the answer to `out`
fn handle_line<W: Write>(line: &str, config: &DriverConfig, out: &mut W) -> io::Result<Step> {
    match line {
        QUIT_COMMAND => return Ok(Step::Quit),
        "" => return Ok(Step::Continue),
        UNITS_COMMAND => {
            write_units(config, out)?;
            return Ok(Step::Continue);
        }
        _ => {}
    }

    match convert_line(line) {
        Ok(conversion) => write_conversion(&conversion, config, out)?,
        Err(e) => {
            warn!(query = line, code = e.code(), "query rejected");
            write_error(&e, config, out)?;
        }
    }
    Ok(Step::Continue)
}

fn write_conversion<W: Write>(conversion: &Conversion, config: &DriverConfig, out: &mut W) -> io::Result<()> {
    match config.output {
        OutputFormat::Text => writeln!(out, "\n{}", conversion),
        OutputFormat::Json => {
            let response = json!({
                "ok": true,
                "display": conversion.to_string(),
                "conversion": conversion,
            });
            writeln!(out, "{}", response)
        }
    }
}

fn write_error<W: Write>(err: &ConvertError, config: &DriverConfig, out: &mut W) -> io::Result<()> {
    match config.output {
        OutputFormat::Text => {
            writeln!(out, "\n[{}] {} (suggestion: {})", err.code(), err, err.suggestion())
        }
        OutputFormat::Json => {
            let response = json!({
                "ok": false,
                "error": err.report(),
            });
            writeln!(out, "{}", response)
        }
    }
}

fn write_units<W: Write>(config: &DriverConfig, out: &mut W) -> io::Result<()> {
    // The empty prefix is listed once, as the bare root unit
    let mut listed: Vec<_> = prefixes().filter(|p| !p.symbol.is_empty()).collect();
    listed.sort_by_key(|p| p.power);

    match config.output {
        OutputFormat::Text => {
            writeln!(out, "\nRoot units:")?;
            for root in root_units() {
                writeln!(out, "  {:<4} {} ({})", root.symbol(), root.name(), root.quantity())?;
            }
            writeln!(out, "Prefixes:")?;
            for prefix in listed {
                writeln!(out, "  {:<4} {} (10^{})", prefix.symbol, prefix.name, prefix.power)?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            let roots: Vec<_> = root_units()
                .map(|root| json!({ "symbol": root.symbol(), "name": root.name(), "quantity": root.quantity() }))
                .collect();
            let response = json!({
                "ok": true,
                "root_units": roots,
                "prefixes": listed,
            });
            writeln!(out, "{}", response)
        }
    }
}
