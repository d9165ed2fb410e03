pub mod metrics_config;

pub use metrics_config::{ConfigError, MetricsConfig};
