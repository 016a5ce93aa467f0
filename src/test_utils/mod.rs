//! Test utilities for showoff
//!
//! Helpers shared by unit and integration tests:
//! - [`init_test_logging`] - one-time tracing setup that respects `RUST_LOG`
//! - [`ViewsFixture`] - a temporary views directory with its own templates
//!
//! # Example
//!
//! ```rust,no_run
//! use showoff::slide::{SectionRegistry, Slide};
//! use showoff::test_utils::ViewsFixture;
//!
//! let views = ViewsFixture::with_slide_template("<section>{{ id }}</section>").unwrap();
//! let mut renderer = views.renderer(true);
//! let html = renderer.render(&Slide::new(), &SectionRegistry::new()).unwrap();
//! assert_eq!(html, "<section></section>");
//! ```

pub mod fixtures;

pub use fixtures::ViewsFixture;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has any effect. With `Some(level)` that level is used,
/// otherwise `RUST_LOG` is honored, and without either logging stays off.
///
/// ```bash
/// RUST_LOG=showoff=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}
