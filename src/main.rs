//! Smart Coach CLI
//!
//! Usage:
//!   smart-coach --results 1101101111 --snr 10     # Single evaluation
//!   smart-coach --interactive                     # One block per line
//!   smart-coach --serve                           # HTTP API server
//!   smart-coach --results "y y n y" --json        # JSON output

use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::error;

use smart_coach::config::CoachConfig;
use smart_coach::core::{run_server, StaircaseEvaluator, StaircaseSession, TrialParser};
use smart_coach::logging::{init_cli_logger, init_server_logger};
use smart_coach::types::{EvaluationResult, SessionSummary};
use smart_coach::{Result, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "smart-coach",
    version = VERSION,
    about = "Smart Coach - adaptive SNR staircase for listening exercises",
    long_about = "Smart Coach adjusts the Signal-to-Noise Ratio (SNR) of a listening\n\
                  exercise from block-wise accuracy.\n\n\
                  Rules:\n  \
                  accuracy >= 80%  lower SNR by 5 dB (harder)\n  \
                  accuracy <= 50%  raise SNR by 5 dB (easier)\n  \
                  otherwise        keep SNR\n\n\
                  SNR is kept within [-10, 20] dB.\n\n\
                  Trial blocks: 1101100111, or tokens like 'y n y', 'correct wrong', '+ - +'"
)]
struct Args {
    /// Trial block to evaluate (single mode)
    #[arg(short, long)]
    results: Option<String>,

    /// Current SNR in dB (defaults to the configured starting SNR)
    #[arg(long, allow_negative_numbers = true)]
    snr: Option<f64>,

    /// Interactive mode - one trial block per stdin line
    #[arg(short, long)]
    interactive: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address (overrides config file)
    #[arg(long)]
    addr: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let outcome = if args.serve {
        run_serve(&args, &config).await
    } else if args.interactive {
        init_cli_logger(args.verbose || config.logging.verbose);
        run_interactive(&args, &config)
    } else if let Some(ref text) = args.results {
        init_cli_logger(args.verbose || config.logging.verbose);
        run_single(text, &args, &config)
    } else {
        // Default to interactive if no mode specified
        init_cli_logger(args.verbose || config.logging.verbose);
        run_interactive(&args, &config)
    };

    if let Err(e) = outcome {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_config(args: &Args) -> Result<CoachConfig> {
    let mut config = match args.config {
        Some(ref path) => CoachConfig::from_file(path)?,
        None => CoachConfig::default(),
    };
    if let Some(ref addr) = args.addr {
        config.server.addr = addr.clone();
    }
    Ok(config)
}

/// Run single block evaluation
fn run_single(text: &str, args: &Args, config: &CoachConfig) -> Result<()> {
    let evaluator = StaircaseEvaluator::with_config(config.staircase)?;
    let results = TrialParser::new().parse(text)?;
    let current = args.snr.unwrap_or(config.staircase.default_snr);

    let result = evaluator.evaluate(current, &results)?;
    print_result(&result, args)
}

/// Run interactive session
fn run_interactive(args: &Args, config: &CoachConfig) -> Result<()> {
    let parser = TrialParser::new();
    let mut session = match args.snr {
        Some(snr) => StaircaseSession::with_start(config.staircase, snr)?,
        None => StaircaseSession::new(config.staircase)?,
    };

    print_header();
    println!("Enter one block of trials per line (e.g. 1101101111). Type 'quit' to exit.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{} ", format!("[SNR {:+.1} dB] >", session.current_snr()).bold());
        stdout.flush()?;

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                error!("stdin read failed: {}", e);
                break;
            }
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }
        if line.is_empty() {
            continue;
        }

        let results = match parser.parse(line) {
            Ok(results) => results,
            Err(e) => {
                println!("{}", format!("  {}", e).yellow());
                continue;
            }
        };

        let result = session.record_block(&results)?;
        print_result(&result, args)?;
    }

    println!();
    print_summary(&session.summary(), args)
}

/// Run HTTP API server
async fn run_serve(args: &Args, config: &CoachConfig) -> Result<()> {
    init_server_logger(
        args.verbose || config.logging.verbose,
        args.json || config.logging.json,
    );
    tracing::info!("Starting Smart Coach API v{}", VERSION);
    run_server(&config.server.addr, config.staircase).await
}

fn print_result(result: &EvaluationResult, args: &Args) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else if args.no_color {
        println!("{}", result.to_parseable_string());
    } else {
        println!("{}", result.to_terminal_string());
    }
    Ok(())
}

fn print_summary(summary: &SessionSummary, args: &Args) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }
    println!("{}", "Session summary".bold());
    println!("  blocks:     {}", summary.blocks);
    match summary.overall_accuracy {
        Some(acc) => println!("  accuracy:   {:.1}% ({}/{})", acc, summary.correct, summary.trials),
        None => println!("  accuracy:   n/a"),
    }
    println!("  SNR now:    {:+.1} dB", summary.current_snr);
    println!("  SNR range:  {:+.1} .. {:+.1} dB", summary.lowest_snr, summary.highest_snr);
    println!("  reversals:  {}", summary.reversals);
    Ok(())
}

fn print_header() {
    println!("{}", "========================================".bold());
    println!("{}", format!("  Smart Coach v{} - Interactive", VERSION).bold());
    println!("{}", "========================================".bold());
    println!();
}
