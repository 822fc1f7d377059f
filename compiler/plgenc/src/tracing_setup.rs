use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
///
/// ```text
/// RUST_LOG=plgen_codegen=debug plgen routine funcs.py pymax
/// RUST_LOG=plgenc=debug,plgen_source=trace plgen flush funcs.py --defer=pymax
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        }
    });
}
