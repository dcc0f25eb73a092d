use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use todo_list::cli::{self, Cli, Command};
use todo_list::config::{self, Config};
use todo_list::{api, BoardError, TaskBoard, TaskStore};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("todo_list=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<BoardError>() {
            Some(warning) if warning.is_warning() => {
                eprintln!("Warning: {}", warning);
                ExitCode::from(1)
            }
            _ => {
                eprintln!("Error: {:#}", e);
                ExitCode::from(2)
            }
        },
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command() {
        Command::Serve => {
            let config = Config::from_env()?;
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(api::serve(config))
        }
        command => {
            let board = TaskBoard::new(TaskStore::new(config::default_todo_file()));
            let stdout = std::io::stdout();
            cli::execute(&command, &board, &mut stdout.lock())
        }
    }
}
