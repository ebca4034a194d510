use std::sync::Once;

/// Filter directives for keylint's own logging, e.g. `keylint_rules=trace`.
pub const LOG_ENV: &str = "KEYLINT_LOG";

/// When set, logs render as an indented span tree.
pub const LOG_TREE_ENV: &str = "KEYLINT_LOG_TREE";

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Reads filter directives from `KEYLINT_LOG`, falling back to `RUST_LOG`.
/// Installs nothing when neither is set. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Some(directives) = select_directives(
            std::env::var(LOG_ENV).ok(),
            std::env::var("RUST_LOG").ok(),
        ) else {
            return;
        };
        let filter = EnvFilter::new(directives);

        if std::env::var_os(LOG_TREE_ENV).is_some() {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}

fn select_directives(keylint: Option<String>, rust: Option<String>) -> Option<String> {
    keylint.or(rust)
}
