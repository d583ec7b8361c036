use std::io::IsTerminal;

use crate::bencher::Measurement;

/// Buffers markdown and prints it, styled on a terminal and raw otherwise.
pub struct MarkdownPrinter {
    content: String,
}

impl MarkdownPrinter {
    pub fn new() -> Self {
        Self {
            content: String::new(),
        }
    }

    pub fn add(&mut self, s: impl AsRef<str>) {
        self.content.push_str(s.as_ref());
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn dump(&self) {
        if std::io::stdout().is_terminal() {
            let mut skin = termimad::MadSkin::default();
            for header in skin.headers.iter_mut() {
                header.align = termimad::Alignment::Left;
                header.add_attr(termimad::crossterm::style::Attribute::Bold);
                header.set_fg(termimad::crossterm::style::Color::Blue);
            }
            skin.print_text(&self.content);
        } else {
            println!("{}", self.content);
        }
    }
}

impl Default for MarkdownPrinter {
    fn default() -> Self {
        Self::new()
    }
}

/// One row per strategy, with each time relative to the fastest.
pub fn measurements_table(measurements: &[Measurement]) -> String {
    let fastest = measurements
        .iter()
        .map(|m| m.elapsed_ms)
        .fold(f64::INFINITY, f64::min);
    let mut table = String::new();
    table.push_str("| Strategy | Elements | Time (ms) | Relative |\n");
    table.push_str("|:-|-:|-:|-:|\n");
    for m in measurements {
        let relative = if fastest > 0.0 {
            format!("{:.2}x", m.elapsed_ms / fastest)
        } else {
            "-".to_owned()
        };
        table.push_str(&format!(
            "| {} | {} | {:.3} | {} |\n",
            m.algorithm, m.len, m.elapsed_ms, relative
        ));
    }
    table
}
