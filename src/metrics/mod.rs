//! Prometheus metrics for the routing core and the content-API client
//!
//! This module provides metrics tracking for:
//! - Locale switching: switches, fallbacks by reason, discarded stale resolutions
//! - Content API: request counts by endpoint/status, request durations
//!
//! # Usage
//!
//! Call `init_metrics()` at application startup to register all metrics.
//! If initialization fails, metrics operations become no-ops.

use prometheus::{
    register_counter, register_counter_vec, register_histogram_vec, Counter, CounterVec, Encoder,
    HistogramVec, TextEncoder,
};
use std::sync::OnceLock;

/// Container for locale-switch metrics
struct SwitchMetrics {
    switches: CounterVec,
    fallbacks: CounterVec,
    stale_resolutions: Counter,
}

/// Container for content-API client metrics
struct ApiMetrics {
    requests: CounterVec,
    duration: HistogramVec,
}

/// Global storage for switch metrics
static SWITCH_METRICS: OnceLock<SwitchMetrics> = OnceLock::new();

/// Global storage for API metrics
static API_METRICS: OnceLock<ApiMetrics> = OnceLock::new();

/// Flag to track if initialization was attempted
static METRICS_INIT_ATTEMPTED: OnceLock<bool> = OnceLock::new();

/// Initialize all Prometheus metrics
///
/// This function should be called once at application startup.
/// If metric registration fails, errors are logged and subsequent
/// metric operations become no-ops.
pub fn init_metrics() -> Result<(), Box<dyn std::error::Error>> {
    // Prevent double initialization
    if METRICS_INIT_ATTEMPTED.get().is_some() {
        return Ok(());
    }
    METRICS_INIT_ATTEMPTED.set(true).ok();

    let switch = SwitchMetrics {
        switches: register_counter_vec!(
            "vitrin_locale_switches_total",
            "Total locale switch requests by source and target locale",
            &["from", "to"]
        )?,
        fallbacks: register_counter_vec!(
            "vitrin_switch_fallbacks_total",
            "Total locale switches that did not land on a translated item, by reason",
            &["reason"]
        )?,
        stale_resolutions: register_counter!(
            "vitrin_stale_resolutions_total",
            "Total locale-switch resolutions discarded because a newer request superseded them"
        )?,
    };

    let api = ApiMetrics {
        requests: register_counter_vec!(
            "vitrin_api_requests_total",
            "Total content-API requests by endpoint and status (status 0 = transport failure)",
            &["endpoint", "status"]
        )?,
        duration: register_histogram_vec!(
            "vitrin_api_request_duration_seconds",
            "Content-API request duration in seconds",
            &["endpoint"],
            vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
        )?,
    };

    SWITCH_METRICS
        .set(switch)
        .map_err(|_| "Switch metrics already initialized")?;
    API_METRICS
        .set(api)
        .map_err(|_| "API metrics already initialized")?;

    tracing::info!("Prometheus metrics initialized successfully");
    Ok(())
}

/// Check if metrics have been initialized
pub fn metrics_initialized() -> bool {
    SWITCH_METRICS.get().is_some() && API_METRICS.get().is_some()
}

/// Record a locale switch request
pub fn record_locale_switch(from: &str, to: &str) {
    if let Some(m) = SWITCH_METRICS.get() {
        m.switches.with_label_values(&[from, to]).inc();
    }
}

/// Record a switch that fell back instead of landing on a translated item
///
/// Reasons: `missing_langslug`, `fetch_error`, `structural`, `unclassified`,
/// `invalid_slug`, `route_table`.
pub fn record_switch_fallback(reason: &str) {
    if let Some(m) = SWITCH_METRICS.get() {
        m.fallbacks.with_label_values(&[reason]).inc();
    }
}

/// Record a resolution discarded as stale
pub fn record_stale_resolution() {
    if let Some(m) = SWITCH_METRICS.get() {
        m.stale_resolutions.inc();
    }
}

/// Record a content-API request outcome (status 0 = transport failure)
pub fn record_api_request(endpoint: &str, status: u16) {
    if let Some(m) = API_METRICS.get() {
        m.requests
            .with_label_values(&[endpoint, &status.to_string()])
            .inc();
    }
}

/// Observe a content-API request duration
pub fn observe_api_duration(endpoint: &str, seconds: f64) {
    if let Some(m) = API_METRICS.get() {
        m.duration.with_label_values(&[endpoint]).observe(seconds);
    }
}

/// Render all registered metrics in Prometheus text exposition format
pub fn gather() -> String {
    let encoder = TextEncoder::new();
    let families = prometheus::gather();
    let mut buffer = Vec::new();
    if encoder.encode(&families, &mut buffer).is_err() {
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_before_init_is_noop() {
        // Must not panic even when init_metrics was never called
        record_locale_switch("en", "tr");
        record_switch_fallback("fetch_error");
        record_stale_resolution();
        record_api_request("/api/menuitems/", 200);
        observe_api_duration("/api/menuitems/", 0.05);
    }

    #[test]
    fn test_init_and_record() {
        // Initialization may race with the no-op test; both orders are fine
        let _ = init_metrics();
        if metrics_initialized() {
            record_locale_switch("en", "tr");
            record_switch_fallback("missing_langslug");
            let rendered = gather();
            assert!(rendered.contains("vitrin_locale_switches_total"));
        }
    }
}
