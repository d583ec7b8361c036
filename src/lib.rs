//! The Strategy pattern over sorting algorithms.
//!
//! A [`Sorter`] holds one [`SortStrategy`] at a time and forwards every
//! sort request to it. The strategy can be swapped between calls:
//!
//! ```
//! use sort_strategy::{Algorithm, MergeSort, Sorter};
//!
//! let mut sorter = Sorter::with_algorithm(Algorithm::Bubble);
//! assert_eq!(sorter.sort_data(&[-5, -1, -3, 0, 2, -2]), vec![-5, -3, -2, -1, 0, 2]);
//! sorter.set_strategy(MergeSort);
//! assert_eq!(sorter.strategy_name(), "Merge Sort");
//! ```
//!
//! [`discount`] applies the same shape to checkout pricing.

use clap::{Parser, Subcommand};

pub mod bencher;
mod commands;
pub mod config;
pub mod discount;
mod sorter;
pub mod strategy;
pub mod utils;

pub use sorter::Sorter;
pub use strategy::{Algorithm, BubbleSort, MergeSort, QuickSort, SortStrategy};
pub use utils::is_sorted;

/// Sorting strategy playground
#[derive(Parser)]
#[command(name = "sort-strategy", version)]
pub struct Cli {
    /// Path to a config file. Default to ./sort-strategy.toml if present
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,
    /// Config profile to use
    #[arg(long, global = true, default_value = config::DEFAULT_PROFILE)]
    pub profile: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Demo(commands::demo::DemoArgs),
    Sort(commands::sort::SortArgs),
    Compare(commands::compare::CompareArgs),
    Checkout(commands::checkout::CheckoutArgs),
}

#[doc(hidden)]
pub fn entry(cli: &Cli) -> anyhow::Result<()> {
    let config = config::Config::load_or_default(cli.config.as_deref())?;
    let profile = config.profile(&cli.profile)?;
    match &cli.command {
        Commands::Demo(cmd) => cmd.run(profile),
        Commands::Sort(cmd) => cmd.run(profile),
        Commands::Compare(cmd) => cmd.run(profile),
        Commands::Checkout(cmd) => cmd.run(profile),
    }
}
