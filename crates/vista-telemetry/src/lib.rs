//! Telemetry for Vista
//!
//! Console logging through `tracing-subscriber`, plus OTLP traces and
//! metrics when an exporter is configured

mod metadata;
pub mod metrics;

use std::time::Duration;

use opentelemetry::global;
use opentelemetry::trace::TracerProvider;
use opentelemetry_sdk::metrics::SdkMeterProvider;
use opentelemetry_sdk::trace::SdkTracerProvider;
use vista_config::TelemetryConfig;
use vista_config::telemetry::exporters::{ExportProtocol, ExporterConfig};

pub use opentelemetry::{
    KeyValue,
    metrics::{Counter, Histogram, Meter},
};

/// Instrumentation scope shared by every Vista meter and tracer
const SCOPE: &str = "vista";

/// Meter for Vista instruments
///
/// Backed by a no-op provider until `init` installs an exporter.
pub fn meter() -> Meter {
    global::meter(SCOPE)
}

/// Guard that shuts telemetry providers down on drop
pub struct TelemetryGuard {
    meter_provider: Option<SdkMeterProvider>,
    tracer_provider: Option<SdkTracerProvider>,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.meter_provider.take()
            && let Err(e) = provider.shutdown()
        {
            eprintln!("failed to shutdown meter provider: {e}");
        }
        if let Some(provider) = self.tracer_provider.take()
            && let Err(e) = provider.shutdown()
        {
            eprintln!("failed to shutdown tracer provider: {e}");
        }
    }
}

/// Initialize telemetry from configuration
///
/// `RUST_LOG` takes precedence over `default_filter` when set. Returns a
/// guard that must be held for the lifetime of the application.
///
/// # Errors
///
/// Returns an error if OTLP exporter initialization fails
pub fn init(config: Option<&TelemetryConfig>, default_filter: &str) -> anyhow::Result<TelemetryGuard> {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let mut guard = TelemetryGuard {
        meter_provider: None,
        tracer_provider: None,
    };

    let Some((telemetry_config, exporter)) = config.and_then(|c| c.exporter.as_ref().map(|e| (c, e))) else {
        tracing_subscriber::registry().with(filter).with(fmt_layer).init();
        return Ok(guard);
    };

    let resource = metadata::build_resource(telemetry_config);

    let meter_provider = init_metrics(exporter, resource.clone())?;
    global::set_meter_provider(meter_provider.clone());
    guard.meter_provider = Some(meter_provider);

    let tracer_provider = init_tracer(telemetry_config, exporter, resource)?;
    let otel_layer = tracing_opentelemetry::layer().with_tracer(tracer_provider.tracer(SCOPE));
    global::set_tracer_provider(tracer_provider.clone());
    guard.tracer_provider = Some(tracer_provider);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(otel_layer)
        .init();

    tracing::debug!(endpoint = %exporter.endpoint, "OTLP export enabled");

    Ok(guard)
}

/// Initialize OTLP metrics export
fn init_metrics(
    exporter_config: &ExporterConfig,
    resource: opentelemetry_sdk::Resource,
) -> anyhow::Result<SdkMeterProvider> {
    use opentelemetry_otlp::{MetricExporter, WithExportConfig};
    use opentelemetry_sdk::metrics::PeriodicReader;

    let endpoint = exporter_config.endpoint.as_str();
    let exporter = match exporter_config.protocol {
        ExportProtocol::Grpc => MetricExporter::builder().with_tonic().with_endpoint(endpoint).build(),
        ExportProtocol::HttpProto => MetricExporter::builder().with_http().with_endpoint(endpoint).build(),
    }
    .map_err(|e| anyhow::anyhow!("failed to build metrics exporter: {e}"))?;

    let reader = PeriodicReader::builder(exporter)
        .with_interval(Duration::from_secs(exporter_config.export_interval))
        .build();

    Ok(SdkMeterProvider::builder()
        .with_resource(resource)
        .with_reader(reader)
        .build())
}

/// Initialize OTLP trace export
fn init_tracer(
    config: &TelemetryConfig,
    exporter_config: &ExporterConfig,
    resource: opentelemetry_sdk::Resource,
) -> anyhow::Result<SdkTracerProvider> {
    use opentelemetry_otlp::{SpanExporter, WithExportConfig};
    use opentelemetry_sdk::trace::Sampler;

    let endpoint = exporter_config.endpoint.as_str();
    let exporter = match exporter_config.protocol {
        ExportProtocol::Grpc => SpanExporter::builder().with_tonic().with_endpoint(endpoint).build(),
        ExportProtocol::HttpProto => SpanExporter::builder().with_http().with_endpoint(endpoint).build(),
    }
    .map_err(|e| anyhow::anyhow!("failed to build span exporter: {e}"))?;

    let sampling_rate = config.tracing.as_ref().map_or(1.0, |t| t.sampling_rate);

    let sampler = if sampling_rate >= 1.0 {
        Sampler::AlwaysOn
    } else if sampling_rate <= 0.0 {
        Sampler::AlwaysOff
    } else {
        Sampler::TraceIdRatioBased(sampling_rate)
    };

    let sampler = if config.tracing.as_ref().is_none_or(|t| t.parent_based) {
        Sampler::ParentBased(Box::new(sampler))
    } else {
        sampler
    };

    Ok(SdkTracerProvider::builder()
        .with_resource(resource)
        .with_sampler(sampler)
        .with_batch_exporter(exporter)
        .build())
}
