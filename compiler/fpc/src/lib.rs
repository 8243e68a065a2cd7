//! FPC - demo programs and benchmark driver for the FP forms engine.
//!
//! Each demo program is built twice, once per execution policy, and run on
//! the same input. The driver checks that both runs agree and reports the
//! runtimes.
//!
//! | demo     | program                                         |
//! |----------|-------------------------------------------------|
//! | `matmul` | `α(α IP) ∘ α distl ∘ distr ∘ [1, trans ∘ 2]`     |
//! | `evens`  | `/+ ∘ α toInt ∘ α isEven`                        |
//! | `sort`   | `α(α sort)` over rows of random strings         |

pub mod driver;
pub mod input;
pub mod programs;

use std::sync::Once;

pub use driver::{parse_args, run, Demo, DriverError, Report, RunOptions};

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set. `FP_LOG_TREE=1` switches from
/// flat output to an indented span tree. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let registry = tracing_subscriber::registry().with(filter);
        if std::env::var("FP_LOG_TREE").is_ok_and(|v| v == "1") {
            registry
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .init();
        } else {
            registry
                .with(fmt::layer().with_target(true).with_level(true))
                .init();
        }
    });
}
