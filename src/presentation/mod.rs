//! Display concerns kept outside the engine: category metadata, amount
//! formatting, and text rendering of grouped feeds.

pub mod amount;
pub mod category;
pub mod render;

pub use amount::{format_amount, format_amount_for, minor_units_for, symbol_for, LocaleFormat};
pub use category::{category_style, CategoryStyle};
pub use render::{progress_bar, render_feed, RenderOptions, EMPTY_FEED_MESSAGE};
