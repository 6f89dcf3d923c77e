//! pocket-engine
//!
//! Transaction categorization, filtering, and chronological grouping.
//! Depends on pocket-domain. Stateless: no CLI, no terminal I/O, no storage.

pub mod error;
pub mod feed;
pub mod filter;
pub mod goals;
pub mod grouping;
pub mod ingest;
pub mod selection;
pub mod summary;
pub mod totals;

pub use error::EngineError;
pub use feed::*;
pub use filter::*;
pub use goals::*;
pub use grouping::*;
pub use ingest::*;
pub use selection::*;
pub use summary::*;
pub use totals::*;
