#![doc(test(attr(deny(warnings))))]

//! Pocket Core groups a personal-finance transaction list by month and day,
//! narrows it by category, and renders it for the terminal.

pub mod cli;
pub mod presentation;
pub mod sample_data;
pub mod utils;

pub use pocket_config as config;
pub use pocket_domain as domain;
pub use pocket_engine as engine;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Pocket Core tracing initialized.");
    });
}
