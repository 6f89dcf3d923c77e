//! Sectioned text rendering of grouped transaction feeds.

use std::fmt::Write;

use colored::Colorize;

use pocket_domain::TransactionRecord;
use pocket_engine::{GoalProgress, GroupedResult};

use super::{
    amount::{format_amount_for, LocaleFormat},
    category::category_style,
};

pub const EMPTY_FEED_MESSAGE: &str = "No transactions found.";

const TITLE_WIDTH: usize = 24;
const LABEL_WIDTH: usize = 14;
const AMOUNT_WIDTH: usize = 12;
const BAR_WIDTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub currency: String,
    pub locale: LocaleFormat,
    pub color: bool,
    pub icons: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            currency: "USD".into(),
            locale: LocaleFormat::default(),
            color: false,
            icons: false,
        }
    }
}

/// Renders month headings, day headings, and one line per record.
pub fn render_feed(result: &GroupedResult, options: &RenderOptions) -> String {
    if result.is_empty() {
        return format!("{EMPTY_FEED_MESSAGE}\n");
    }

    let mut out = String::new();
    for (idx, month) in result.months.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        let heading = format!("== {} ==", month.key);
        let heading = if options.color {
            heading.bold().to_string()
        } else {
            heading
        };
        let _ = writeln!(out, "{heading}");
        for day in &month.days {
            let _ = writeln!(out, "  {}", day.key);
            for record in &day.records {
                let _ = writeln!(out, "    {}", record_line(record, options));
            }
        }
    }
    out
}

fn record_line(record: &TransactionRecord, options: &RenderOptions) -> String {
    let style = category_style(record.category);
    let title = truncate(&record.title, TITLE_WIDTH);
    let amount = format!(
        "{:>width$}",
        format_amount_for(record.amount, &options.currency, &options.locale),
        width = AMOUNT_WIDTH
    );
    let label = format!("{:<width$}", style.label, width = LABEL_WIDTH);

    let (label, amount) = if options.color {
        let amount = if record.is_income() {
            amount.bright_green().to_string()
        } else {
            amount
        };
        (label.color(style.color).to_string(), amount)
    } else {
        (label, amount)
    };

    let icon = if options.icons {
        format!("{} ", style.icon)
    } else {
        String::new()
    };
    format!("{icon}{title:<width$} {label} {amount}", width = TITLE_WIDTH)
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Text progress bar such as `[#######-------------] 35%`.
pub fn progress_bar(progress: &GoalProgress) -> String {
    let percent = usize::from(progress.percent());
    let filled = percent * BAR_WIDTH / 100;
    format!(
        "[{}{}] {}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        percent
    )
}
