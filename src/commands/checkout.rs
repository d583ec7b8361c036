use clap::Parser;
use colored::Colorize;

use crate::{
    config::Profile,
    discount::{Checkout, NoDiscount, PercentageDiscount},
};

/// Apply discount strategies to a price
#[derive(Parser)]
pub struct CheckoutArgs {
    /// Price before discounts. Default to the profile's price
    #[arg(long)]
    pub price: Option<f64>,
    /// Percentage discount to try. Can be given more than once
    #[arg(short = 'd', long = "discount")]
    pub discounts: Vec<f64>,
}

impl CheckoutArgs {
    pub fn run(&self, profile: &Profile) -> anyhow::Result<()> {
        let price = self.price.unwrap_or(profile.price);
        let discounts = if self.discounts.is_empty() {
            &profile.discounts
        } else {
            &self.discounts
        };
        print_totals(price, discounts)
    }
}

/// Print the total for `price` with no discount, then with each of `discounts`.
pub fn print_totals(price: f64, discounts: &[f64]) -> anyhow::Result<()> {
    if !price.is_finite() || price < 0.0 {
        anyhow::bail!("Price must be a non-negative number, got {}", price);
    }
    // Validate everything before printing anything.
    let discounts = discounts
        .iter()
        .map(|&percent| PercentageDiscount::new(percent))
        .collect::<anyhow::Result<Vec<_>>>()?;
    println!("{}", "=== Checkout ===".bold());
    let mut checkout = Checkout::new(NoDiscount);
    println!("{}: {:.2}", checkout.strategy_name(), checkout.total(price));
    for discount in discounts {
        checkout.set_strategy(discount);
        println!("{}: {:.2}", checkout.strategy_name(), checkout.total(price));
    }
    Ok(())
}
