//! wide_echo - draw a mixed-width string through the widepad bridge
//!
//! Writes the given text onto a pad one character at a time and shows the
//! resulting rows together with the cursor accounting. With `--raw` the
//! pad is presented through crossterm instead, escape sequences and all.

use std::env;
use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use widepad::{char_width, handle_size, render, write_str, Config, Encoding, Pad};

/// Version string from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

struct DemoConfig {
    /// Encoding label override (otherwise from config file or default)
    encoding: Option<String>,
    /// Optional config file path
    config_path: Option<PathBuf>,
    /// Present the pad with raw escape sequences
    raw: bool,
    /// Text to draw
    text: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            encoding: None,
            config_path: None,
            raw: false,
            text: "wide: 中文 narrow: é!".to_string(),
        }
    }
}

fn print_version() {
    eprintln!("wide_echo {}", VERSION);
}

fn print_help() {
    eprintln!("wide_echo {} - draw a string through the widepad bridge", VERSION);
    eprintln!();
    eprintln!("Usage: wide_echo [OPTIONS] [TEXT]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -e, --encoding <LABEL>  Encoding label (default: utf-8)");
    eprintln!("  -c, --config <PATH>     Read encoding from a TOML config file");
    eprintln!("  -r, --raw               Present with raw escape sequences");
    eprintln!("  -v, --version           Show version");
    eprintln!("  -h, --help              Show this help");
    eprintln!();
    eprintln!("Logging: set RUST_LOG (e.g. RUST_LOG=widepad=trace) for decode traces");
}

fn parse_args() -> Result<DemoConfig, String> {
    let args: Vec<String> = env::args().collect();
    let mut config = DemoConfig::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                std::process::exit(0);
            }
            "-e" | "--encoding" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing encoding argument".to_string());
                }
                config.encoding = Some(args[i].clone());
            }
            "-c" | "--config" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing config path argument".to_string());
                }
                config.config_path = Some(PathBuf::from(&args[i]));
            }
            "-r" | "--raw" => {
                config.raw = true;
            }
            arg if arg.starts_with('-') => {
                return Err(format!("Unknown argument: {}. Use -h for help.", arg));
            }
            text => {
                config.text = text.to_string();
            }
        }
        i += 1;
    }

    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let demo = match parse_args() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    // Command line overrides config file, config file overrides default.
    let encoding = match demo.encoding {
        Some(label) => Encoding::from_label(&label),
        None => demo
            .config_path
            .map(|p| Config::load(&p))
            .unwrap_or_default()
            .encoding(),
    };
    info!("Encoding: {}", encoding.label());

    let bytes = demo.text.as_bytes();
    let mut pad = Pad::new(40, 3);
    let written = write_str(&mut pad, &encoding, bytes)?;
    let (row, col) = pad.cursor();

    if demo.raw {
        render::present(&pad, &mut std::io::stdout())?;
        println!();
    } else {
        for r in 0..pad.rows() {
            println!("|{}|", pad.row_text(r));
        }
    }

    println!();
    println!(
        "{} characters drawn, cursor at row {}, column {}",
        written, row, col
    );
    println!(
        "leading character width: {} column(s)",
        char_width(&encoding, bytes)
    );
    println!("pad handle size: {} bytes", handle_size());

    Ok(())
}
