//! Shell session state passed explicitly to the engine on every command.

use std::path::PathBuf;

use rust_decimal::Decimal;

use pocket_config::{default_base_dir, Config, ConfigManager};
use pocket_domain::{CategoryFilter, FeedOrder, TransactionRecord};
use pocket_engine::{FilterSelection, GroupedResult, TransactionFeed};

use crate::cli::error::CliError;
use crate::cli::output::{OutputPreferences, Printer};
use crate::presentation::{format_amount_for, LocaleFormat, RenderOptions};
use crate::sample_data;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub struct ShellContext {
    pub running: bool,
    pub feed: TransactionFeed,
    pub selection: FilterSelection,
    pub config: Config,
    pub config_manager: ConfigManager,
    pub printer: Printer,
    /// File the current records were loaded from; `None` for the bundled sample.
    pub source: Option<PathBuf>,
}

impl ShellContext {
    /// Builds a session from the stored config and the bundled sample data.
    pub fn new() -> Result<Self, CliError> {
        let config_manager = ConfigManager::with_base_dir(default_base_dir())?;
        let config = config_manager.load()?;
        let records = sample_data::sample_transactions()?;
        Ok(Self::with_parts(config, config_manager, records))
    }

    pub fn with_parts(
        config: Config,
        config_manager: ConfigManager,
        records: Vec<TransactionRecord>,
    ) -> Self {
        let feed = TransactionFeed::new(records).with_order(config.feed_order);
        let selection = FilterSelection::starting_at(config.default_filter);
        let printer = Printer::new(OutputPreferences::from_config(&config));
        Self {
            running: true,
            feed,
            selection,
            config,
            config_manager,
            printer,
            source: None,
        }
    }

    pub fn prompt(&self) -> String {
        format!("pocket [{}]> ", self.selection.current())
    }

    pub fn current_filter(&self) -> CategoryFilter {
        self.selection.current()
    }

    pub fn grouped(&self) -> GroupedResult {
        self.feed.grouped(self.current_filter())
    }

    pub fn replace_records(&mut self, records: Vec<TransactionRecord>, source: Option<PathBuf>) {
        self.feed = TransactionFeed::new(records).with_order(self.feed.order());
        self.source = source;
    }

    pub fn set_order(&mut self, order: FeedOrder) {
        self.feed = std::mem::take(&mut self.feed).with_order(order);
    }

    /// Human-readable origin of the current records.
    pub fn source_label(&self) -> String {
        match &self.source {
            Some(path) => path.display().to_string(),
            None => "sample data".to_string(),
        }
    }

    /// Formats an amount with the configured currency and locale separators.
    pub fn money(&self, amount: Decimal) -> String {
        format_amount_for(
            amount,
            &self.config.currency,
            &LocaleFormat::for_tag(&self.config.locale),
        )
    }

    pub fn render_options(&self) -> RenderOptions {
        let prefs = self.printer.preferences();
        RenderOptions {
            currency: self.config.currency.clone(),
            locale: LocaleFormat::for_tag(&self.config.locale),
            color: prefs.color && !prefs.plain_mode,
            icons: !prefs.plain_mode,
        }
    }

    /// Re-applies session-visible settings after the config changed.
    pub fn apply_config(&mut self) {
        self.printer
            .set_preferences(OutputPreferences::from_config(&self.config));
        self.set_order(self.config.feed_order);
    }
}
