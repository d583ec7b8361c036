use clap::Parser;
use colored::Colorize;

use crate::{
    config::Profile,
    strategy::{Algorithm, BubbleSort, QuickSort},
    utils::format_list,
    Sorter,
};

const SWITCHING_SAMPLE: [i64; 8] = [3, 1, 4, 1, 5, 9, 2, 6];

/// Walk through every strategy on the sample data
#[derive(Parser)]
pub struct DemoArgs {
    /// Skip the checkout part of the demo
    #[arg(long, default_value = "false")]
    pub skip_checkout: bool,
}

impl DemoArgs {
    pub fn run(&self, profile: &Profile) -> anyhow::Result<()> {
        let data = profile.sample.as_slice();
        println!("Original data: {}\n", format_list(data));

        for algorithm in Algorithm::ALL {
            println!("{}", format!("=== Using {} ===", algorithm).bold());
            let sorter = Sorter::with_algorithm(algorithm);
            let sorted = sorter.sort_data(data);
            println!("Strategy: {}", sorter.strategy_name());
            println!("Result: {}\n", format_list(&sorted));
        }

        println!("{}", "=== Switching strategy at runtime ===".bold());
        let mut sorter: Sorter<i64> = Sorter::new(BubbleSort);
        println!("Initial strategy: {}", sorter.strategy_name());
        sorter.set_strategy(QuickSort);
        println!("New strategy: {}", sorter.strategy_name().cyan());
        let sorted = sorter.sort_data(&SWITCHING_SAMPLE);
        println!("Result: {}\n", format_list(&sorted));

        if !self.skip_checkout {
            super::checkout::print_totals(profile.price, &profile.discounts)?;
        }
        Ok(())
    }
}
