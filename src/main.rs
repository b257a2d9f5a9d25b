//! plusnav - render priority-plus navigation styles from block attributes

use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing::Level;

use plusnav::{BlockAttributes, render_style};

#[derive(Parser)]
#[command(name = "plusnav")]
#[command(version, about = "Render priority-plus navigation CSS from block attributes", long_about = None)]
#[command(after_help = "EXAMPLES:
    plusnav attrs.json                  Print an inline style attribute value
    plusnav attrs.json -s '.nav'        Print a rule block for a selector
    echo '{...}' | plusnav -            Read attributes from stdin")]
struct Cli {
    /// Block attributes JSON file, or `-` for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    input: String,

    /// Wrap the declarations in a rule for this selector
    #[arg(short, long, value_name = "SELECTOR")]
    selector: Option<String>,

    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> plusnav::Result<()> {
    let attrs = if cli.input == "-" {
        BlockAttributes::from_reader(io::stdin().lock())?
    } else {
        tracing::info!(path = %cli.input, "reading block attributes");
        BlockAttributes::from_reader(BufReader::new(File::open(&cli.input)?))?
    };

    let style = render_style(&attrs);
    tracing::info!(declarations = style.len(), "rendered style");

    match &cli.selector {
        Some(selector) => println!("{}", style.to_rule(selector)),
        None => println!("{}", style.to_inline_style()),
    }

    Ok(())
}
