//! Output formatting for the CLI.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use catalog_core::{CardView, DetailView};

/// Output handler for CLI messages.
#[derive(Debug, Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            let body = serde_json::json!({ "error": msg });
            eprintln!("{}", body);
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print one product card.
    pub fn card(&self, card: &CardView) {
        if self.json {
            return;
        }
        println!(
            "  {} {}  {}",
            style(format!("#{:<4}", card.id)).dim(),
            style(terminal_text(&card.title)).bold(),
            style(format!("${}", terminal_text(&card.price))).green()
        );
        println!(
            "        {}  ⭐ {} ({})",
            style(terminal_text(&card.category)).cyan(),
            terminal_text(&card.rating),
            card.rating_count
        );
    }

    /// Print a product's details.
    pub fn detail(&self, view: &DetailView) {
        if self.json {
            return;
        }
        self.header(&terminal_text(&view.title));
        println!("  {}", style(terminal_text(&view.category)).cyan());
        println!(
            "  ⭐ {} / 5.0  {} ({} reseñas)",
            view.rate_display(),
            rating_bar(view.rating_percentage),
            view.count_display()
        );
        println!("  {}", style(view.price_display()).green().bold());
        println!("  {}", style("Precio incluye impuestos").dim());
        println!();
        println!("  {}", terminal_text(&view.description));
        println!();
        for (label, value) in view.facts() {
            self.kv(label, &terminal_text(&value));
        }
        if let Some(image) = &view.image {
            self.kv("Imagen:", &terminal_text(image));
        }
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Catalog text made safe to print: escape sequences and control
/// characters are removed, line breaks and tabs become spaces.
pub fn terminal_text(s: &str) -> String {
    console::strip_ansi_codes(s)
        .chars()
        .map(|c| if c == '\n' || c == '\t' { ' ' } else { c })
        .filter(|c| !c.is_control())
        .collect()
}

/// Ten-cell bar for a 0-100 rating percentage.
pub fn rating_bar(percentage: f64) -> String {
    let filled = (percentage.clamp(0.0, 100.0) / 10.0).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}
