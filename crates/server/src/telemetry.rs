use axum::{body::Body, http::Request, response::Response};
use opentelemetry::{
    global,
    trace::{SpanKind, TraceContextExt, Tracer},
    Context, KeyValue,
};
use opentelemetry_otlp::WithExportConfig;
use std::{
    future::Future,
    pin::Pin,
    sync::OnceLock,
    task::{Context as TaskContext, Poll},
};
use tower::{Layer, Service};

use crate::auth::jwt::Claims;
use crate::lang::negotiate;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Runtime for the OTLP gRPC exporter. Tonic's lazy channel spawns onto
/// the current tokio runtime, which may not be entered yet when
/// `dioxus::serve` runs the init closure.
static OTEL_RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

/// Configure the OTLP span exporter and register it as the global tracer
/// provider. Dioxus owns the `tracing` subscriber; this only feeds
/// `OtelTraceLayer` spans to the collector.
///
/// Environment:
///   - `OTEL_EXPORTER_OTLP_ENDPOINT`: collector gRPC address (required)
///   - `OTEL_SERVICE_NAME`: service name tag (default `job-board`)
///   - `OTEL_INGESTION_KEY`: optional header for hosted collectors
///   - `DEPLOY_ENV`: deployment environment tag (default `development`)
pub fn init_telemetry() {
    let _ = dotenvy::dotenv();

    let Ok(endpoint) = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT") else {
        eprintln!("OTEL_EXPORTER_OTLP_ENDPOINT not set, skipping OTLP telemetry");
        return;
    };

    let service_name =
        std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| "job-board".to_string());
    let environment = std::env::var("DEPLOY_ENV").unwrap_or_else(|_| "development".to_string());

    let rt = match OTEL_RUNTIME.get() {
        Some(rt) => rt,
        None => match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .worker_threads(1)
            .build()
        {
            Ok(rt) => OTEL_RUNTIME.get_or_init(|| rt),
            Err(e) => {
                eprintln!("Failed to create OTEL runtime: {e}");
                return;
            }
        },
    };
    let _guard = rt.enter();

    use opentelemetry_otlp::WithTonicConfig;

    let mut builder = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&endpoint);

    if endpoint.starts_with("https://") {
        builder = builder.with_tls_config(
            opentelemetry_otlp::tonic_types::transport::ClientTlsConfig::new().with_native_roots(),
        );
    }

    if let Some(key) = std::env::var("OTEL_INGESTION_KEY")
        .ok()
        .filter(|k| !k.is_empty())
    {
        match key.parse() {
            Ok(value) => {
                let mut metadata = opentelemetry_otlp::tonic_types::metadata::MetadataMap::new();
                metadata.insert("ingestion-key", value);
                builder = builder.with_metadata(metadata);
            }
            Err(_) => eprintln!("OTEL_INGESTION_KEY is not a valid header value, ignoring"),
        }
    }

    let exporter = match builder.build() {
        Ok(exporter) => exporter,
        Err(e) => {
            eprintln!("Failed to create OTLP exporter: {e}");
            return;
        }
    };

    let resource = opentelemetry_sdk::Resource::builder()
        .with_service_name(service_name)
        .with_attribute(KeyValue::new("service.version", APP_VERSION))
        .with_attribute(KeyValue::new("deployment.environment", environment))
        .build();

    let provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_resource(resource)
        .build();

    global::set_tracer_provider(provider);

    eprintln!("Telemetry initialized v{APP_VERSION}, traces exporting to {endpoint}");
}

/// Collapse id segments so spans group by route: numeric and UUID path
/// segments become `{id}`.
pub fn route_template(path: &str) -> String {
    if path == "/" {
        return path.to_string();
    }
    path.split('/')
        .map(|segment| {
            let is_numeric = !segment.is_empty() && segment.chars().all(|c| c.is_ascii_digit());
            if is_numeric || uuid::Uuid::parse_str(segment).is_ok() {
                "{id}"
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Tower layer opening one OpenTelemetry span per HTTP request.
///
/// Span attributes: method, route template, negotiated language, caller
/// role (when authenticated), request id and response status.
#[derive(Clone)]
pub struct OtelTraceLayer;

impl<S> Layer<S> for OtelTraceLayer {
    type Service = OtelTraceService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        OtelTraceService { inner }
    }
}

#[derive(Clone)]
pub struct OtelTraceService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for OtelTraceService<S>
where
    S: Service<Request<Body>, Response = Response> + Send + Clone + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let tracer = global::tracer("job-board");
        let method = req.method().to_string();
        let route = route_template(req.uri().path());
        let lang = negotiate(req.uri().query(), req.headers());

        let request_id = req
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let mut attributes = vec![
            KeyValue::new("http.method", method.clone()),
            KeyValue::new("http.route", route.clone()),
            KeyValue::new("http.request_id", request_id),
            KeyValue::new("app.lang", lang.code()),
        ];
        match req.extensions().get::<Claims>() {
            Some(claims) => {
                attributes.push(KeyValue::new("user.id", claims.sub));
                attributes.push(KeyValue::new("user.role", claims.role.clone()));
                attributes.push(KeyValue::new("auth.status", "authenticated"));
            }
            None => attributes.push(KeyValue::new("auth.status", "anonymous")),
        }

        let span = tracer
            .span_builder(format!("{method} {route}"))
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        let cx = Context::current_with_span(span);
        let mut inner = self.inner.clone();

        let guard = cx.clone().attach();
        let future = inner.call(req);
        drop(guard);

        Box::pin(async move {
            let response = future.await?;

            let span = cx.span();
            let status = response.status();
            span.set_attribute(KeyValue::new("http.status_code", status.as_u16() as i64));

            if status.is_server_error() {
                span.set_status(opentelemetry::trace::Status::error(status.to_string()));
            } else if status.is_client_error() {
                span.set_attribute(KeyValue::new("error.type", "client_error"));
            }

            Ok(response)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_routes_are_unchanged() {
        assert_eq!(route_template("/"), "/");
        assert_eq!(route_template("/api/jobs"), "/api/jobs");
        assert_eq!(route_template("/api/jobs/categories"), "/api/jobs/categories");
    }

    #[test]
    fn uuid_segments_collapse() {
        assert_eq!(
            route_template("/api/admin/jobs/6f1c2a9e-3d4b-4c5a-9e8f-0a1b2c3d4e5f/approve"),
            "/api/admin/jobs/{id}/approve"
        );
    }

    #[test]
    fn numeric_segments_collapse() {
        assert_eq!(
            route_template("/api/admin/users/42/status"),
            "/api/admin/users/{id}/status"
        );
    }

    #[test]
    fn mixed_segments_are_kept() {
        assert_eq!(route_template("/api/v2/jobs"), "/api/v2/jobs");
    }
}
