use std::time::Instant;

use vista_telemetry::{Counter, Histogram, KeyValue, metrics};

use crate::outcome::Outcome;

/// Instruments recorded once per proxied generation
pub(crate) struct GenerationMetrics {
    requests: Counter<u64>,
    duration: Histogram<f64>,
}

impl GenerationMetrics {
    pub fn new() -> Self {
        let meter = vista_telemetry::meter();

        Self {
            requests: meter.u64_counter(metrics::IMAGEGEN_REQUEST_COUNT).build(),
            duration: meter
                .f64_histogram(metrics::IMAGEGEN_REQUEST_DURATION)
                .with_unit("s")
                .build(),
        }
    }

    pub fn record(&self, provider: &str, outcome: &Outcome, start: Instant) {
        let attributes = [
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("outcome", outcome.label()),
        ];

        self.requests.add(1, &attributes);
        metrics::record_duration(&self.duration, start, &attributes);
    }
}
