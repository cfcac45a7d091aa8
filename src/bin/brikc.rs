//! Command-line front end for brik files.
//!
//! Usage:
//!   brikc tetris                      - compile config/games/Tetris.brik to build/arbol.ast
//!   brikc path/to/game.brik -o -      - print the tree to stdout
//!   brikc snake --mode tokens         - token summary and the first tokens
//!   brikc snake --mode json           - JSON export of the tree
use std::path::PathBuf;
use std::process::ExitCode;

use brik::lexer::{TokenSummary, tokenize};
use brik::source::resolve_input;
use brik::{BrikError, SourceFile};
use clap::{ArgAction, Parser, ValueEnum};
use log::{LevelFilter, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Canonical tree form
    Tree,
    /// Token summary and listing
    Tokens,
    /// JSON export of the tree
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "brikc", version, about = "Compile brik game configuration files")]
struct App {
    /// Path to a .brik file, or a game short name (tetris, t, snake, s)
    input: String,

    #[arg(long, value_enum, default_value_t = Mode::Tree)]
    mode: Mode,

    /// Where to write the tree; `-` writes to stdout
    #[arg(short, long, default_value = "build/arbol.ast")]
    output: String,

    /// Directory searched for game short names
    #[arg(long, default_value = "config/games")]
    games_dir: PathBuf,

    /// Number of tokens listed in tokens mode
    #[arg(long, default_value_t = 30)]
    limit: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let app = App::parse();
    init_logging(app.verbose);

    match run(&app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(app: &App) -> Result<(), BrikError> {
    let path = resolve_input(&app.input, &app.games_dir);
    info!("compiling {}", path.display());
    let source = SourceFile::from_file(&path)?;

    match app.mode {
        Mode::Tokens => {
            let tokens = tokenize(source.content())?;
            let summary = TokenSummary::from_tokens(&tokens);
            print!("{}", summary.render(&tokens, app.limit));
        }
        Mode::Json => {
            let program = source.parse()?;
            println!("{}", brik::export::export_program_to_json(&program)?);
        }
        Mode::Tree => {
            let program = source.parse()?;
            if app.output == "-" {
                let stdout = std::io::stdout();
                brik::serialize(&program, &mut stdout.lock())?;
            } else {
                brik::serialize_to_file(&program, &app.output)?;
                info!("tree written to {}", app.output);
            }
        }
    }

    Ok(())
}
