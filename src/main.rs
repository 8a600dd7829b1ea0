//! Floating Placement CLI
//!
//! Usage:
//!   floating-placement [OPTIONS] [FILE]
//!
//! Options:
//!   --gap <PX>               Override the anchor gap
//!   --skip-overflow-check    Report raw positions without rotation
//!   -d, --debug              Print every attempted placement to stderr
//!   -h, --help               Print help

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use floating_placement::{Evaluation, RequestFile};

#[derive(Parser)]
#[command(name = "floating-placement")]
#[command(about = "Resolve tooltip and popover placements against a viewport")]
struct Cli {
    /// Request file in TOML format (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Gap between anchor and floating element, overriding the file
    #[arg(long)]
    gap: Option<f64>,

    /// Return raw positions for the requested placements
    #[arg(long)]
    skip_overflow_check: bool,

    /// Debug mode: print every attempted placement
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let loaded = match &cli.input {
        Some(path) => RequestFile::from_file(path).map_err(|e| {
            format!("Error loading request file '{}': {}", path.display(), e)
        }),
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => RequestFile::from_str(&buffer)
                    .map_err(|e| format!("Error loading requests from stdin: {}", e)),
                Err(e) => Err(format!("Error reading from stdin: {}", e)),
            }
        }
    };

    let mut file = match loaded {
        Ok(file) => file,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
    };

    let mut config = file.config;
    if let Some(gap) = cli.gap {
        config = config.with_gap(gap);
    }
    if cli.skip_overflow_check {
        config = config.with_skip_overflow_check(true);
    }
    file = file.with_config(config);

    let results = file.evaluate();
    if cli.debug {
        eprintln!("=== Placement Debug ===");
        for result in &results {
            print_trace(result);
        }
        eprintln!("=======================");
    }

    for result in &results {
        println!("{}", result.summary());
    }
}

fn print_trace(result: &Evaluation) {
    eprintln!("[{}] requested {}", result.name, result.resolution.requested);
    for (i, attempt) in result.resolution.attempts.iter().enumerate() {
        let status = match attempt.overflow {
            Some(dir) => format!("overflows {}", dir),
            None => "fits".to_string(),
        };
        eprintln!(
            "  #{} {} top={:.1} left={:.1} {}",
            i + 1,
            attempt.placement,
            attempt.position.top,
            attempt.position.left,
            status
        );
    }
}

fn print_intro() {
    println!(
        r#"Floating Placement - resolve tooltip and popover placements

USAGE:
    floating-placement [OPTIONS] [FILE]
    cat requests.toml | floating-placement

OPTIONS:
    --gap <PX>               Override the anchor gap (default 4)
    --skip-overflow-check    Report raw positions without rotation
    -d, --debug              Print every attempted placement
    -h, --help               Print help

REQUEST FILE:
    [viewport]
    width = 800
    height = 600

    [[request]]
    name = "corner"
    placement = "top"
    anchor = {{ top = 10, left = 10, width = 100, height = 20 }}
    floating = {{ width = 50, height = 30 }}

PLACEMENTS:
    top, top-start, top-end, bottom, bottom-start, bottom-end,
    left, left-start, left-end, right, right-start, right-end"#
    );
}
