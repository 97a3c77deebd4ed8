pub mod diagnostics;
pub mod error;
pub mod graph;
pub mod io;
pub mod math;
pub mod model;
pub mod plot;
pub mod timing;

pub use error::{NumericsError, Result};
pub use graph::{Graph, Topology};
pub use math::linalg::{pseudoinverse, PinvMethod, DEFAULT_TOLERANCE};
pub use math::resistance::effective_resistance;

/// Initialise `env_logger` for the command-line tools: `info` unless
/// `RUST_LOG` says otherwise. Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .try_init();
}
