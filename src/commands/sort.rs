use clap::Parser;
use colored::Colorize;

use crate::{config::Profile, strategy::Algorithm, utils::format_list, Sorter};

/// Sort a list of integers
#[derive(Parser)]
pub struct SortArgs {
    /// Strategy to sort with (bubble, quick or merge). Default to the profile's strategy
    #[arg(short = 's', long, value_parser = str::parse::<Algorithm>)]
    pub strategy: Option<Algorithm>,
    /// Sort with every strategy and check that they agree
    #[arg(long, default_value = "false", conflicts_with = "strategy")]
    pub all: bool,
    /// Print the result as JSON
    #[arg(long, default_value = "false")]
    pub json: bool,
    /// Values to sort. Default to the profile's sample data
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<i64>,
}

impl SortArgs {
    fn algorithms(&self, profile: &Profile) -> Vec<Algorithm> {
        if self.all {
            Algorithm::ALL.to_vec()
        } else {
            vec![self.strategy.unwrap_or(profile.strategy)]
        }
    }

    pub fn run(&self, profile: &Profile) -> anyhow::Result<()> {
        let data = if self.values.is_empty() {
            profile.sample.as_slice()
        } else {
            self.values.as_slice()
        };
        let mut results = Vec::new();
        for algorithm in self.algorithms(profile) {
            let sorter = Sorter::with_algorithm(algorithm);
            results.push((algorithm, sorter.sort_data(data)));
        }
        if let Some((first, expected)) = results.first() {
            for (algorithm, sorted) in &results[1..] {
                if sorted != expected {
                    anyhow::bail!("{} disagrees with {}", algorithm, first);
                }
            }
        }
        if self.json {
            let json = results
                .iter()
                .map(|(algorithm, sorted)| (*algorithm, sorted))
                .collect::<Vec<_>>();
            println!("{}", serde_json::to_string(&json)?);
            return Ok(());
        }
        for (algorithm, sorted) in &results {
            println!("{}: {}", algorithm.to_string().bold(), format_list(sorted));
        }
        Ok(())
    }
}
