mod config;
mod console_runner;
mod input;
mod render;

use std::io;

use clap::{Parser, ValueEnum};
use common::log;
use common::logger::{self, LogLevel};
use console_runner::ConsoleGame;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevelArg {
    Debug,
    Info,
    Warn,
}

impl From<LogLevelArg> for LogLevel {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Debug => LogLevel::Debug,
            LogLevelArg::Info => LogLevel::Info,
            LogLevelArg::Warn => LogLevel::Warn,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against a minimax opponent")]
struct Args {
    /// Path to the YAML config file; defaults to one next to the executable.
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Overrides the level from the config file.
    #[arg(long, value_enum)]
    log_level: Option<LogLevelArg>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_path = args.config.unwrap_or_else(config::get_config_path);
    let config = config::get_config_manager(&config_path).get_config()?;

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    let level = args.log_level.map(LogLevel::from).unwrap_or(config.log_level);
    logger::init_logger(prefix, level);

    log!("Tic-tac-toe client starting, config: {}", config_path);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut game = ConsoleGame::new(stdin.lock(), stdout.lock(), &config);
    game.run()?;

    Ok(())
}
