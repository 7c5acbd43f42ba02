use clap::Parser;
use snaptab::cli::dispatcher::Dispatcher;
use snaptab::cli::main_types::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = Dispatcher::dispatch(cli).await {
        eprintln!("Error: {}", err);
        if let Some(hint) = err.troubleshooting_hint() {
            eprintln!("Hint: {}", hint);
        }
        std::process::exit(1);
    }
}
