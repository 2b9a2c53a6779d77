extern crate ansi_term;
extern crate linefeed;
use ansi_term::Style;
use bcode::lang::{lex, parse, Error};
use bcode::mach::codegen;
use clap::Parser;
use linefeed::{Interface, ReadResult};
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Compile a line-numbered teaching BASIC program to B_code
#[derive(Debug, Parser)]
#[command(name = "bcode")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Source file to compile, `-` reads standard input.
    /// Without a file, lines are entered interactively until an empty line.
    file: Option<PathBuf>,

    /// Print the scanned token sequence before the B_code
    #[arg(long)]
    tokens: bool,

    /// Print the parsed program before the B_code
    #[arg(long)]
    ast: bool,

    /// Print diagnostics without terminal styling
    #[arg(long)]
    no_color: bool,
}

enum Failure {
    Io(String),
    Compile(Error),
}

impl From<Error> for Failure {
    fn from(error: Error) -> Self {
        Failure::Compile(error)
    }
}

pub fn main() {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("BCODE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let status = match run(&cli) {
        Ok(()) => 0,
        Err(Failure::Compile(error)) => {
            report(&cli, &error.to_string());
            1
        }
        Err(Failure::Io(msg)) => {
            report(&cli, &msg);
            2
        }
    };
    std::process::exit(status);
}

fn report(cli: &Cli, msg: &str) {
    if cli.no_color {
        eprintln!("?{}", msg);
    } else {
        eprintln!("{}", Style::new().bold().paint(format!("?{}", msg)));
    }
}

fn run(cli: &Cli) -> Result<(), Failure> {
    let source = match &cli.file {
        Some(path) if path.as_os_str() == "-" => {
            let mut s = String::new();
            std::io::stdin()
                .read_to_string(&mut s)
                .map_err(|e| Failure::Io(format!("STANDARD INPUT: {}", e)))?;
            s
        }
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| Failure::Io(format!("{}: {}", path.display(), e)))?,
        None => enter().map_err(|e| Failure::Io(e.to_string()))?,
    };
    debug!(chars = source.chars().count(), "read source");
    if cli.tokens {
        for (col, token) in lex(&source)? {
            println!("{:<8} {:<5} ({}..{})", token.kind(), token.value(), col.start, col.end);
        }
    }
    let program = parse(&source)?;
    if cli.ast {
        println!("{:#?}", program);
    }
    println!("{}", codegen(&program));
    Ok(())
}

/// Interactive entry: one source line per prompt, an empty line finishes.
fn enter() -> std::io::Result<String> {
    let interface = Interface::new("bcode")?;
    interface.set_prompt("] ")?;
    let mut lines = vec![];
    loop {
        match interface.read_line()? {
            ReadResult::Input(line) => {
                if line.is_empty() {
                    break;
                }
                interface.add_history_unique(line.clone());
                lines.push(line);
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        }
    }
    Ok(lines.join("\n"))
}
