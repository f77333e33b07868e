pub mod analyze;
pub mod cache;
pub mod chat;
pub mod config;
pub mod plan;

use studyai_core::{Config, Locale, ScheduleConfig, ServiceConfig};

/// Build the engine config from stored settings plus CLI overrides.
pub fn schedule_config(config: &Config, seed: Option<u64>, locale: Option<String>) -> ScheduleConfig {
    let locale = locale
        .as_deref()
        .and_then(Locale::parse)
        .unwrap_or(config.locale);
    ScheduleConfig {
        seed: seed.or(config.seed),
        locale,
    }
}

/// Build the service config from stored settings plus CLI overrides.
pub fn service_config(config: &Config, seed: Option<u64>, locale: Option<String>) -> ServiceConfig {
    ServiceConfig {
        schedule: schedule_config(config, seed, locale),
        simulated_latency: config.simulated_latency,
    }
}

/// Single-threaded runtime for the async service calls.
pub fn runtime() -> Result<tokio::runtime::Runtime, Box<dyn std::error::Error>> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?)
}
