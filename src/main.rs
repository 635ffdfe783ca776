use clap::Parser;
use tick::cli::commands::{Cli, Commands};
use tick::cli::handlers;

fn main() {
    let cli = Cli::parse();
    let store_dir = cli.store_dir.clone();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            if let Err(e) = tick::tui::run(store_dir.as_deref()) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Path) => {
            // Resolved without touching the store
            handlers::cmd_path(store_dir.as_deref());
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
