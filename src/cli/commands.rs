//! Command registry and handlers for the shell.

use std::{fs, path::PathBuf};

use colored::Colorize;
use rust_decimal::Decimal;
use strsim::levenshtein;

use pocket_config::{Config, ConfigError};
use pocket_domain::{CategoryCode, CategoryFilter, FeedOrder};
use pocket_engine::{
    category_shares, compute_category_totals, records_from_json, summarize_flow, FilterSelection,
    GoalProgress,
};

use crate::cli::context::{LoopControl, ShellContext};
use crate::cli::error::CommandError;
use crate::presentation::{category_style, progress_bar, render_feed};
use crate::sample_data;

pub type CommandResult = Result<LoopControl, CommandError>;

pub struct CommandSpec {
    pub name: &'static str,
    pub usage: &'static str,
    pub summary: &'static str,
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec { name: "feed", usage: "feed", summary: "Show transactions grouped by month and day" },
    CommandSpec { name: "list", usage: "list", summary: "Alias for `feed`" },
    CommandSpec { name: "filter", usage: "filter [<category>|all]", summary: "Show or change the category filter" },
    CommandSpec { name: "categories", usage: "categories", summary: "List category codes and record counts" },
    CommandSpec { name: "totals", usage: "totals", summary: "Per-category totals for the current filter" },
    CommandSpec { name: "order", usage: "order [as-supplied|newest-first|oldest-first]", summary: "Show or change feed ordering" },
    CommandSpec { name: "load", usage: "load <path>", summary: "Replace records with a JSON transaction list" },
    CommandSpec { name: "export", usage: "export <path>", summary: "Write the grouped feed for the current filter as JSON" },
    CommandSpec { name: "sample", usage: "sample", summary: "Restore the bundled sample transactions" },
    CommandSpec { name: "goal", usage: "goal <saved> <target>", summary: "Show savings goal progress" },
    CommandSpec { name: "config", usage: "config [show|set <key> <value>]", summary: "Show or change preferences" },
    CommandSpec { name: "version", usage: "version", summary: "Show build information" },
    CommandSpec { name: "help", usage: "help [command]", summary: "Show available commands" },
    CommandSpec { name: "exit", usage: "exit", summary: "Leave the shell" },
    CommandSpec { name: "quit", usage: "quit", summary: "Alias for `exit`" },
];

pub fn command_names() -> Vec<&'static str> {
    COMMANDS.iter().map(|spec| spec.name).collect()
}

impl ShellContext {
    pub fn dispatch(&mut self, command: &str, raw: &str, args: &[&str]) -> CommandResult {
        match command {
            "feed" | "list" => self.cmd_feed(),
            "filter" => self.cmd_filter(args),
            "categories" => self.cmd_categories(),
            "totals" => self.cmd_totals(),
            "order" => self.cmd_order(args),
            "load" => self.cmd_load(args),
            "export" => self.cmd_export(args),
            "sample" => self.cmd_sample(),
            "goal" => self.cmd_goal(args),
            "config" => self.cmd_config(args),
            "version" => self.cmd_version(),
            "help" => self.cmd_help(args),
            "exit" | "quit" => Ok(LoopControl::Exit),
            _ => {
                self.suggest_command(raw);
                Ok(LoopControl::Continue)
            }
        }
    }

    pub fn suggest_command(&self, input: &str) {
        self.printer.warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_ascii_lowercase();
        let best = COMMANDS
            .iter()
            .map(|spec| (levenshtein(spec.name, &needle), spec.name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                self.printer.info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub fn report_error(&self, err: CommandError) {
        match err {
            CommandError::InvalidArguments(message) => {
                self.printer.error(message);
                self.printer.info("Use `help <command>` for usage details.");
            }
            other => self.printer.error(other),
        }
    }

    fn cmd_feed(&mut self) -> CommandResult {
        let grouped = self.grouped();
        self.printer.section(format!(
            "Transactions ({}, {}) from {}",
            self.current_filter(),
            self.feed.order(),
            self.source_label()
        ));
        self.printer.raw(&render_feed(&grouped, &self.render_options()));
        Ok(LoopControl::Continue)
    }

    fn cmd_filter(&mut self, args: &[&str]) -> CommandResult {
        let Some(code) = args.first() else {
            self.printer
                .info(format!("Current filter: {}", self.current_filter()));
            let states: Vec<String> = FilterSelection::states().map(|f| f.to_string()).collect();
            self.printer.info(format!("Available: {}", states.join(", ")));
            return Ok(LoopControl::Continue);
        };
        self.selection.select_code(code)?;
        let count = self.feed.filtered(self.current_filter()).len();
        self.printer.success(format!(
            "Filter set to `{}` ({} {}).",
            self.current_filter(),
            count,
            plural(count, "transaction")
        ));
        Ok(LoopControl::Continue)
    }

    fn cmd_categories(&mut self) -> CommandResult {
        self.printer.section("Categories");
        for code in CategoryCode::ALL {
            let style = category_style(code);
            let count = self.feed.filtered(CategoryFilter::Only(code)).len();
            let marker = if self.current_filter() == CategoryFilter::Only(code) {
                "*"
            } else {
                " "
            };
            let label = format!("{} {:<14}", style.icon, style.label);
            let label = if self.render_options().color {
                label.color(style.color).to_string()
            } else {
                label
            };
            self.printer
                .info(format!("{marker} {:<10} {label} {count}", code.as_str()));
        }
        Ok(LoopControl::Continue)
    }

    fn cmd_totals(&mut self) -> CommandResult {
        let filter = self.current_filter();
        let records = self.feed.filtered(filter);
        self.printer.section(format!("Totals ({filter})"));
        if records.is_empty() {
            self.printer.info(crate::presentation::EMPTY_FEED_MESSAGE);
            return Ok(LoopControl::Continue);
        }

        let totals = compute_category_totals(records.iter().copied())?;
        for (code, total) in &totals {
            self.printer.info(format!(
                "{:<14} {:>14}",
                category_style(*code).label,
                self.money(*total)
            ));
        }

        let flow = summarize_flow(records.iter().copied())?;
        self.printer.info(format!("{:<14} {:>14}", "Income", self.money(flow.income)));
        self.printer.info(format!("{:<14} {:>14}", "Spending", self.money(flow.expenses)));
        self.printer.info(format!("{:<14} {:>14}", "Net", self.money(flow.net)));

        let shares = category_shares(records.iter().copied())?;
        if !shares.is_empty() {
            let breakdown: Vec<String> = shares
                .iter()
                .map(|share| format!("{} {}%", share.category, share.percent))
                .collect();
            self.printer.info(format!("Spending split: {}", breakdown.join(", ")));
        }
        Ok(LoopControl::Continue)
    }

    fn cmd_order(&mut self, args: &[&str]) -> CommandResult {
        let Some(value) = args.first() else {
            self.printer.info(format!("Current order: {}", self.feed.order()));
            return Ok(LoopControl::Continue);
        };
        let order: FeedOrder = value.parse()?;
        self.set_order(order);
        self.printer.success(format!("Feed order set to `{order}`."));
        Ok(LoopControl::Continue)
    }

    fn cmd_load(&mut self, args: &[&str]) -> CommandResult {
        let path = args
            .first()
            .map(PathBuf::from)
            .ok_or_else(|| CommandError::InvalidArguments("Usage: load <path>".into()))?;
        let document = fs::read_to_string(&path)?;
        let records = records_from_json(&document)?;
        let count = records.len();
        self.replace_records(records, Some(path.clone()));
        self.printer.success(format!(
            "Loaded {} {} from {}.",
            count,
            plural(count, "transaction"),
            path.display()
        ));
        Ok(LoopControl::Continue)
    }

    fn cmd_export(&mut self, args: &[&str]) -> CommandResult {
        let path = args
            .first()
            .map(PathBuf::from)
            .ok_or_else(|| CommandError::InvalidArguments("Usage: export <path>".into()))?;
        let grouped = self.grouped();
        let document = serde_json::to_string_pretty(&grouped)?;
        fs::write(&path, document)?;
        let count = grouped.record_count();
        tracing::info!(path = %path.display(), records = count, "exported grouped feed");
        self.printer.success(format!(
            "Exported {} {} in {} day {} to {}.",
            count,
            plural(count, "transaction"),
            grouped.day_count(),
            plural(grouped.day_count(), "group"),
            path.display()
        ));
        Ok(LoopControl::Continue)
    }

    fn cmd_sample(&mut self) -> CommandResult {
        let records = sample_data::sample_transactions()?;
        let count = records.len();
        self.replace_records(records, None);
        self.printer
            .success(format!("Restored {count} sample transactions."));
        Ok(LoopControl::Continue)
    }

    fn cmd_goal(&mut self, args: &[&str]) -> CommandResult {
        let [saved, target] = args else {
            return Err(CommandError::InvalidArguments(
                "Usage: goal <saved> <target>".into(),
            ));
        };
        let saved = parse_decimal(saved)?;
        let target = parse_decimal(target)?;
        let progress = GoalProgress::new(saved, target);
        self.printer.info(format!(
            "{} {} of {}, {} to go",
            progress_bar(&progress),
            self.money(progress.saved).trim_start_matches('+'),
            self.money(progress.target).trim_start_matches('+'),
            self.money(progress.remaining()).trim_start_matches('+'),
        ));
        if progress.is_complete() {
            self.printer.success("Goal reached!");
        }
        Ok(LoopControl::Continue)
    }

    fn cmd_config(&mut self, args: &[&str]) -> CommandResult {
        match args {
            [] | ["show"] => {
                self.printer.section("Configuration");
                for (key, value) in self.config.entries() {
                    self.printer.info(format!("{key:<18} {value}"));
                }
                self.printer
                    .info(format!("(stored at {})", self.config_manager.config_path().display()));
            }
            ["set", key, value] => {
                let mut updated = self.config.clone();
                if let Err(err) = updated.set(key, value) {
                    if matches!(err, ConfigError::UnknownKey(_)) {
                        self.suggest_setting(key);
                    }
                    return Err(err.into());
                }
                self.config_manager.save(&updated)?;
                self.config = updated;
                self.apply_config();
                self.printer.success(format!("Set `{key}` to `{value}`."));
            }
            _ => {
                return Err(CommandError::InvalidArguments(
                    "Usage: config [show|set <key> <value>]".into(),
                ))
            }
        }
        Ok(LoopControl::Continue)
    }

    fn suggest_setting(&self, key: &str) {
        let needle = key.to_ascii_lowercase();
        let best = Config::KEYS
            .iter()
            .map(|name| (levenshtein(name, &needle), *name))
            .min_by_key(|(distance, _)| *distance);
        match best {
            Some((distance, name)) if distance <= 3 => {
                self.printer.info(format!("Suggestion: `{name}`?"))
            }
            _ => self
                .printer
                .info(format!("Settings: {}", Config::KEYS.join(", "))),
        }
    }

    fn cmd_version(&mut self) -> CommandResult {
        self.printer.info(format!(
            "pocket_core {} ({}, {}, built {})",
            env!("CARGO_PKG_VERSION"),
            env!("POCKET_CORE_BUILD_HASH"),
            env!("POCKET_CORE_BUILD_PROFILE"),
            env!("POCKET_CORE_BUILD_TIMESTAMP"),
        ));
        Ok(LoopControl::Continue)
    }

    fn cmd_help(&mut self, args: &[&str]) -> CommandResult {
        if let Some(name) = args.first() {
            let needle = name.to_ascii_lowercase();
            match COMMANDS.iter().find(|spec| spec.name == needle) {
                Some(spec) => self.printer.info(format!("{}\n  {}", spec.usage, spec.summary)),
                None => self.suggest_command(name),
            }
            return Ok(LoopControl::Continue);
        }

        self.printer.section("Commands");
        let width = COMMANDS.iter().map(|spec| spec.usage.len()).max().unwrap_or(0);
        for spec in COMMANDS {
            self.printer
                .info(format!("  {:<width$}  {}", spec.usage, spec.summary));
        }
        Ok(LoopControl::Continue)
    }
}

fn parse_decimal(value: &str) -> Result<Decimal, CommandError> {
    value
        .trim()
        .replace(',', "")
        .parse::<Decimal>()
        .map_err(|_| CommandError::InvalidArguments(format!("`{value}` is not a number")))
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{noun}s")
    }
}
