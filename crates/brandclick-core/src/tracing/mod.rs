pub mod setup;

pub use setup::{init_tracing, set_log_level};
