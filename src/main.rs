use std::io;
use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand, ValueEnum};
use line_coder_rs::phy::{BitString, InitialLevel, LineEncoder, Scheme};
use line_coder_rs::ui::{self, plot, prompt};
use line_coder_rs::utils::consts::{
    DEFAULT_COLS_PER_BIT, DEFAULT_INITIAL_LEVEL, MAX_COLS_PER_BIT,
    MIN_COLS_PER_BIT,
};
use line_coder_rs::utils::dump::{Report, write_output, write_report};
use line_coder_rs::utils::logging::init_logging;
use tracing::{info, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Plot,
    Json,
}

fn cols_per_bit_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::<usize>::new()
        .range(MIN_COLS_PER_BIT as u64..=MAX_COLS_PER_BIT as u64)
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a bit string
    Encode {
        bits: String,
        #[arg(
            short,
            long,
            value_enum,
            default_value_t = DEFAULT_INITIAL_LEVEL
        )]
        initial: InitialLevel,
        /// Repeat to select several; all six when omitted
        #[arg(short, long, value_enum)]
        scheme: Vec<Scheme>,
        #[arg(short, long, value_enum, default_value_t = Format::Plot)]
        format: Format,
        /// Write the charts or JSON report to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(
            long,
            default_value_t = DEFAULT_COLS_PER_BIT,
            value_parser = cols_per_bit_parser()
        )]
        cols_per_bit: usize,
        /// Run each line coder on its own thread
        #[arg(long)]
        parallel: bool,
    },
    /// Prompt for input and plot all six encodings
    Interactive {
        #[arg(
            long,
            default_value_t = DEFAULT_COLS_PER_BIT,
            value_parser = cols_per_bit_parser()
        )]
        cols_per_bit: usize,
    },
    /// List supported schemes
    Schemes,
}

struct EncodeArgs {
    initial: InitialLevel,
    schemes: Vec<Scheme>,
    format: Format,
    output: Option<PathBuf>,
    cols_per_bit: usize,
    parallel: bool,
}

/// Encode validated bits and emit charts or JSON to stdout or `output`.
fn run_encode(bits: &BitString, args: &EncodeArgs) -> io::Result<()> {
    let encoder = LineEncoder::new(&args.schemes, args.initial);
    let signals = if args.parallel {
        encoder.encode_parallel(bits)
    } else {
        encoder.encode(bits)
    };

    match args.format {
        Format::Plot => {
            let chart = plot::render_all(bits, &signals, args.cols_per_bit);
            write_output(&chart, args.output.as_deref())
        }
        Format::Json => {
            let report = Report::new(bits, encoder.initial_level(), signals);
            write_report(&report, args.output.as_deref())
        }
    }
}

fn main() -> io::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            bits,
            initial,
            scheme,
            format,
            output,
            cols_per_bit,
            parallel,
        } => {
            let bits = match BitString::parse(&bits) {
                Ok(bits) => bits,
                Err(e) => {
                    warn!("Rejected input: {}", e);
                    eprintln!("{}", e.user_message());
                    std::process::exit(1);
                }
            };
            info!("Input Digital Data: {}", bits);

            let args = EncodeArgs {
                initial,
                schemes: scheme,
                format,
                output,
                cols_per_bit,
                parallel,
            };
            run_encode(&bits, &args)?;
        }
        Commands::Interactive { cols_per_bit } => {
            ui::print_banner();
            prompt::run_interactive(cols_per_bit)?;
        }
        Commands::Schemes => {
            for scheme in Scheme::ALL {
                let value = scheme
                    .to_possible_value()
                    .map(|v| v.get_name().to_string())
                    .unwrap_or_default();
                println!("{:<24} {}", value, scheme.title());
            }
        }
    }

    info!("Exiting gracefully...");
    Ok(())
}
