//! pocket-domain
//!
//! Pure domain models (transaction records, categories, filters).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod category;
pub mod common;
pub mod error;
pub mod transaction;

pub use category::*;
pub use common::*;
pub use error::ValidationError;
pub use transaction::*;
