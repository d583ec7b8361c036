//! Pricing strategies, the same pattern applied to a checkout total.

use std::fmt;

/// Adjusts a price.
pub trait DiscountStrategy {
    fn name(&self) -> String;

    fn apply(&self, price: f64) -> f64;
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct NoDiscount;

impl DiscountStrategy for NoDiscount {
    fn name(&self) -> String {
        "No discount".to_owned()
    }

    fn apply(&self, price: f64) -> f64 {
        price
    }
}

/// Takes a fixed percentage off the price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentageDiscount {
    percent: f64,
}

impl PercentageDiscount {
    /// `percent` must be a finite value in `0..=100`.
    pub fn new(percent: f64) -> anyhow::Result<Self> {
        if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
            anyhow::bail!("Discount must be between 0 and 100 percent, got {}", percent);
        }
        Ok(Self { percent })
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }
}

impl DiscountStrategy for PercentageDiscount {
    fn name(&self) -> String {
        format!("{}% discount", self.percent)
    }

    fn apply(&self, price: f64) -> f64 {
        price * (1.0 - self.percent / 100.0)
    }
}

/// Computes totals with the currently selected discount.
pub struct Checkout {
    strategy: Box<dyn DiscountStrategy>,
}

impl Checkout {
    pub fn new(strategy: impl DiscountStrategy + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    pub fn set_strategy(&mut self, strategy: impl DiscountStrategy + 'static) {
        log::debug!(
            "switching discount: {} -> {}",
            self.strategy.name(),
            strategy.name()
        );
        self.strategy = Box::new(strategy);
    }

    pub fn total(&self, price: f64) -> f64 {
        self.strategy.apply(price)
    }

    pub fn strategy_name(&self) -> String {
        self.strategy.name()
    }
}

impl Default for Checkout {
    fn default() -> Self {
        Self::new(NoDiscount)
    }
}

impl fmt::Debug for Checkout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checkout")
            .field("strategy", &self.strategy.name())
            .finish()
    }
}
