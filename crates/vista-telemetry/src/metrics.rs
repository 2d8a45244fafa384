//! Metric name constants and recording helpers

use std::time::Instant;

use opentelemetry::metrics::Histogram;

/// Record a duration measurement on a histogram
pub fn record_duration(histogram: &Histogram<f64>, start: Instant, attributes: &[opentelemetry::KeyValue]) {
    histogram.record(start.elapsed().as_secs_f64(), attributes);
}

// Image generation metric names
pub const IMAGEGEN_REQUEST_COUNT: &str = "vista.imagegen.request.count";
pub const IMAGEGEN_REQUEST_DURATION: &str = "vista.imagegen.request.duration";
