//! Prometheus-compatible metrics for the weekgrid engine.
//!
//! Counts drag-session activity and the proposals emitted to the host, so a
//! clinic deployment can watch interaction volume next to its other metrics.

use prometheus::{IntCounter, IntGauge, Registry};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};

/// Global metrics instance.
static METRICS: OnceLock<Arc<Metrics>> = OnceLock::new();

/// Get or initialize the global metrics instance.
pub fn get_metrics() -> Arc<Metrics> {
    METRICS.get_or_init(|| Arc::new(Metrics::new())).clone()
}

/// All metrics for the weekgrid engine.
pub struct Metrics {
    /// Prometheus registry for all metrics.
    pub registry: Registry,

    // =========================================================================
    // Counters
    // =========================================================================
    /// Total number of drag sessions started.
    pub drag_sessions_started_total: IntCounter,
    /// Total number of create proposals committed.
    pub appointments_created_total: IntCounter,
    /// Total number of update proposals emitted during move/resize.
    pub appointment_updates_emitted_total: IntCounter,
    /// Total number of snapshot records skipped as malformed.
    pub malformed_appointments_skipped_total: IntCounter,

    // =========================================================================
    // Gauges
    // =========================================================================
    /// 1 while a drag session is active, 0 otherwise.
    pub active_drag_session: IntGauge,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics instance with all metrics registered.
    pub fn new() -> Self {
        let registry = Registry::new();

        let drag_sessions_started_total = IntCounter::new(
            "weekgrid_drag_sessions_started_total",
            "Total number of drag sessions started",
        )
        .expect("failed to create counter");

        let appointments_created_total = IntCounter::new(
            "weekgrid_appointments_created_total",
            "Total number of create proposals committed",
        )
        .expect("failed to create counter");

        let appointment_updates_emitted_total = IntCounter::new(
            "weekgrid_appointment_updates_emitted_total",
            "Total number of update proposals emitted during move/resize",
        )
        .expect("failed to create counter");

        let malformed_appointments_skipped_total = IntCounter::new(
            "weekgrid_malformed_appointments_skipped_total",
            "Total number of snapshot records skipped as malformed",
        )
        .expect("failed to create counter");

        let active_drag_session = IntGauge::new(
            "weekgrid_active_drag_session",
            "1 while a drag session is active, 0 otherwise",
        )
        .expect("failed to create gauge");

        registry
            .register(Box::new(drag_sessions_started_total.clone()))
            .expect("failed to register counter");
        registry
            .register(Box::new(appointments_created_total.clone()))
            .expect("failed to register counter");
        registry
            .register(Box::new(appointment_updates_emitted_total.clone()))
            .expect("failed to register counter");
        registry
            .register(Box::new(malformed_appointments_skipped_total.clone()))
            .expect("failed to register counter");
        registry
            .register(Box::new(active_drag_session.clone()))
            .expect("failed to register gauge");

        Self {
            registry,
            drag_sessions_started_total,
            appointments_created_total,
            appointment_updates_emitted_total,
            malformed_appointments_skipped_total,
            active_drag_session,
        }
    }

    /// Export metrics in Prometheus text format.
    pub fn export_prometheus(&self) -> String {
        use prometheus::Encoder;

        let encoder = prometheus::TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder
            .encode(&metric_families, &mut buffer)
            .expect("failed to encode metrics");
        String::from_utf8(buffer).expect("metrics output was not UTF-8")
    }

    /// Export metrics as a serializable snapshot.
    pub fn export_json(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            drag_sessions_started_total: self.drag_sessions_started_total.get(),
            appointments_created_total: self.appointments_created_total.get(),
            appointment_updates_emitted_total: self.appointment_updates_emitted_total.get(),
            malformed_appointments_skipped_total: self.malformed_appointments_skipped_total.get(),
            active_drag_session: self.active_drag_session.get(),
        }
    }
}

/// Snapshot of all metrics for serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub drag_sessions_started_total: u64,
    pub appointments_created_total: u64,
    pub appointment_updates_emitted_total: u64,
    pub malformed_appointments_skipped_total: u64,
    pub active_drag_session: i64,
}
