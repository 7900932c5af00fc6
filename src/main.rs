mod app;
mod command;
mod config;
mod consts;
mod difficulty;
mod game;
mod history;
mod start;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::history::ScoreHistory;
use crate::util::Globals;
use anyhow::Context;
use lexopt::prelude::*;
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Args::parse() {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("termsnake: {e}");
            return ExitCode::from(2);
        }
    };
    let globals = match startup(&args) {
        Ok(globals) => globals,
        Err(e) => {
            eprintln!("termsnake: {e:#}");
            return ExitCode::from(2);
        }
    };
    let terminal = ratatui::init();
    let r = App::new(globals).run(terminal);
    ratatui::restore();
    io_exit(r)
}

fn startup(args: &Args) -> anyhow::Result<Globals> {
    let (path, allow_missing) = match &args.config {
        Some(p) => (p.clone(), false),
        None => (Config::default_path()?, true),
    };
    let config = Config::load(&path, allow_missing)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    // A broken history file shouldn't keep anyone from playing; start empty
    // and surface the problem once on the start screen.
    let (history, notice) = match config.load_history() {
        Ok(history) => (history, None),
        Err(e) => (ScoreHistory::default(), Some(e.to_string())),
    };
    Ok(Globals::new(config, history, notice))
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Args {
    config: Option<PathBuf>,
}

impl Args {
    /// Parse the command line.  Returns `Ok(None)` if the program should
    /// exit successfully without running (`--help`/`--version`).
    fn parse() -> Result<Option<Args>, lexopt::Error> {
        let mut args = Args::default();
        let mut parser = lexopt::Parser::from_env();
        while let Some(arg) = parser.next()? {
            match arg {
                Short('c') | Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Short('h') | Long("help") => {
                    println!("Usage: termsnake [-c <file>]");
                    println!();
                    println!("Options:");
                    println!("  -c, --config <file>  Read configuration from <file>");
                    println!("  -h, --help           Print this help and exit");
                    println!("  -V, --version        Print the program version and exit");
                    return Ok(None);
                }
                Short('V') | Long("version") => {
                    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                    return Ok(None);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Some(args))
    }
}
