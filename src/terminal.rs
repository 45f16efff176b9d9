//! Terminal rendition of the widget surface: an `indicatif` spinner for the
//! loading indicator and a boxed panel for the results.

use crate::output;
use crate::view::ViewModel;
use crate::widget::Surface;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::time::Duration;
use terminal_size::{terminal_size, Width};
use unicode_width::UnicodeWidthStr;

const DEFAULT_WIDTH: usize = 60;
const MAX_WIDTH: usize = 72;

#[derive(Default)]
pub struct TerminalSurface {
    spinner: Option<ProgressBar>,
    view: Option<ViewModel>,
    results_visible: bool,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.spinner.is_some()
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    /// The view the panel shows when results are visible.
    pub fn view(&self) -> Option<&ViewModel> {
        self.view.as_ref()
    }

    fn panel_width() -> usize {
        terminal_size()
            .map(|(Width(w), _)| usize::from(w).min(MAX_WIDTH))
            .unwrap_or(DEFAULT_WIDTH)
    }

    fn print_panel(&self) {
        let Some(view) = &self.view else {
            return;
        };

        let width = Self::panel_width().max(20);
        let inner = width - 4;
        let label_width = view
            .visible()
            .map(|row| row.slot.label().width())
            .max()
            .unwrap_or(0);

        println!();
        println!("{}", format!("┌{}┐", "─".repeat(width - 2)).green());
        for row in view.visible() {
            let label = row.slot.label();
            let pad = label_width - label.width();
            let line = format!("{}{}  {}", label, " ".repeat(pad), row.text);
            let fill = inner.saturating_sub(line.width());
            println!(
                "{} {}{}  {}{} {}",
                "│".green(),
                label.bright_white().bold(),
                " ".repeat(pad),
                row.text.bright_cyan(),
                " ".repeat(fill),
                "│".green()
            );
        }
        println!("{}", format!("└{}┘", "─".repeat(width - 2)).green());
    }
}

impl Surface for TerminalSurface {
    fn notify(&mut self, message: &str) {
        if let Some(spinner) = &self.spinner {
            spinner.suspend(|| output::alert(message));
        } else {
            output::alert(message);
        }
    }

    fn set_loading(&mut self, visible: bool) {
        if visible {
            if self.spinner.is_none() {
                let spinner = ProgressBar::new_spinner();
                if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
                    spinner.set_style(style);
                }
                spinner.set_message("Searching...");
                spinner.enable_steady_tick(Duration::from_millis(100));
                self.spinner = Some(spinner);
            }
        } else if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    fn set_results_visible(&mut self, visible: bool) {
        let was_visible = self.results_visible;
        self.results_visible = visible;
        if visible && !was_visible {
            match &self.spinner {
                Some(spinner) => spinner.suspend(|| self.print_panel()),
                None => self.print_panel(),
            }
        }
    }

    fn apply(&mut self, view: &ViewModel) {
        self.view = Some(view.clone());
    }
}
