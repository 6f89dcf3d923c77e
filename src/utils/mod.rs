use std::sync::Once;

use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const CRATE_DIRECTIVE: &str = "pocket_core=info";

/// Builds the log filter: `RUST_LOG` directives plus `pocket_core=info`.
pub fn log_filter() -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    match CRATE_DIRECTIVE.parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Installs the global tracing subscriber, writing to stderr.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = fmt()
            .with_env_filter(log_filter())
            .with_writer(std::io::stderr)
            .try_init();
    });
}
