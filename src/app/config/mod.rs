//! Configuration file loading.
//!
//! Pure schema/model parsing lives in `domain::configuration`.

mod load_config;

pub use load_config::{load_config, parse_config_content};
