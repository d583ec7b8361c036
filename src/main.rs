use clap::Parser;
use colored::Colorize;
use once_cell::sync::Lazy;
use sort_strategy::Cli;

static CMD_ARGS: Lazy<Cli> = Lazy::new(|| {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    Cli::parse()
});

fn main() -> anyhow::Result<()> {
    let cli = &*CMD_ARGS;
    env_logger::init();
    if let Err(err) = sort_strategy::entry(cli) {
        eprintln!("❌ {}: {}", "ERROR".red().bold(), err.to_string().red());
        std::process::exit(1);
    }
    Ok(())
}
