use http::Method;
use http::header::HeaderName;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use vista_config::{AnyOrArray, CorsConfig};

/// Build a Tower CORS layer from configuration
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins = match &config.origins {
        AnyOrArray::Any => AllowOrigin::any(),
        AnyOrArray::List(origins) => AllowOrigin::list(origins.iter().filter_map(|o| o.parse().ok())),
    };

    let methods = match &config.methods {
        AnyOrArray::Any => AllowMethods::any(),
        AnyOrArray::List(methods) => {
            AllowMethods::list(methods.iter().filter_map(|m| m.parse::<Method>().ok()))
        }
    };

    let headers = match &config.headers {
        AnyOrArray::Any => AllowHeaders::any(),
        AnyOrArray::List(headers) => {
            AllowHeaders::list(headers.iter().filter_map(|h| h.parse::<HeaderName>().ok()))
        }
    };

    let mut layer = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers);

    if config.credentials {
        layer = layer.allow_credentials(true);
    }

    if !config.expose_headers.is_empty() {
        let exposed: Vec<HeaderName> = config.expose_headers.iter().filter_map(|h| h.parse().ok()).collect();
        layer = layer.expose_headers(exposed);
    }

    if let Some(duration) = config.max_age_duration() {
        layer = layer.max_age(duration);
    }

    layer
}
