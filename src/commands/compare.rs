use clap::Parser;

use crate::{
    bencher::{self, Measurement},
    config::Profile,
    strategy::Algorithm,
    utils::md::{measurements_table, MarkdownPrinter},
};

/// Time every strategy on the same random input
#[derive(Parser)]
pub struct CompareArgs {
    /// Number of elements to sort
    #[arg(long)]
    pub len: Option<usize>,
    #[arg(short = 'n', long)]
    /// Number of iterations per strategy. Only the last one is timed
    pub iterations: Option<usize>,
    /// Random seed used to generate the input
    #[arg(long)]
    pub seed: Option<u64>,
    /// Print the measurements as JSON
    #[arg(long, default_value = "false")]
    pub json: bool,
}

impl CompareArgs {
    pub fn measure(&self, profile: &Profile) -> anyhow::Result<Vec<Measurement>> {
        let len = self.len.unwrap_or(profile.len);
        let iterations = self.iterations.unwrap_or(profile.iterations);
        let seed = self.seed.unwrap_or(profile.seed);
        log::info!(
            "comparing {} strategies on {} elements (seed {}, {} iterations)",
            Algorithm::ALL.len(),
            len,
            seed,
            iterations
        );
        let input = bencher::random_input(len, seed);
        bencher::compare(&Algorithm::ALL, &input, iterations)
    }

    pub fn run(&self, profile: &Profile) -> anyhow::Result<()> {
        let measurements = self.measure(profile)?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&measurements)?);
            return Ok(());
        }
        let mut printer = MarkdownPrinter::new();
        printer.add("# Strategy comparison\n\n");
        printer.add(measurements_table(&measurements));
        printer.dump();
        Ok(())
    }
}
