pub mod config;

pub mod handlers {
    mod post_webhook;
    pub use post_webhook::webhook_handler;
    mod root;
    pub use root::root_handler;
}

pub mod models {
    pub mod error;
    pub use error::{Configuration, Webhook};

    pub mod locations;
    pub use locations::Locations;

    pub mod message;
    pub use message::SendMessage;

    pub mod update;
    pub use update::Update;

    pub mod report;
}

pub mod services {
    pub mod breakfast;
    pub mod telegram;
}

use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::{Request, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::{get, post, Router};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use color_eyre::eyre::Result;
use handlers::{root_handler, webhook_handler};
use models::Locations;
use opentelemetry::KeyValue;
use opentelemetry_sdk::{trace, Resource};
use secrecy::SecretString;
use std::env;
use std::sync::Arc;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{debug_span, error, info, warn, Span};
use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};
use tracing_tree::HierarchicalLayer;

#[tracing::instrument]
#[allow(clippy::expect_used, clippy::redundant_pub_crate)]
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
        info!("Ctrl-C received");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Signal is received");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Starting graceful shutdown");
}

#[tracing::instrument]
async fn fallback(uri: Uri) -> impl IntoResponse {
    let status = StatusCode::NOT_FOUND;
    warn!(
        %status,
        %uri,
        "Failed to serve",
    );
    (status, format!("No route {uri}"))
}

/// Read-only data shared by every request.
#[derive(Clone, Debug)]
pub struct State {
    pub token: SecretString,
    pub locations: Arc<Locations>,
    pub timezone: Tz,
    pub api_url: String,
    pub reqwest_client: reqwest::Client,
    pub clock: fn() -> DateTime<Utc>,
}

impl State {
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built.
    #[tracing::instrument(skip_all)]
    pub fn from_config(settings: &crate::config::Application) -> Result<Self> {
        let timezone = parse_timezone(&settings.base.timezone);
        info!(%timezone, "Will use timezone");

        let reqwest_client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        info!("Created reqwest client");

        Ok(Self {
            token: settings.token.clone(),
            locations: Arc::new(settings.locations.clone()),
            timezone,
            api_url: settings.base.api_url.trim_end_matches('/').to_string(),
            reqwest_client,
            clock: Utc::now,
        })
    }
}

/// Unknown zone names are logged and replaced by Hong Kong time.
fn parse_timezone(name: &str) -> Tz {
    name.parse().unwrap_or_else(|err| {
        error!(name, %err, "Failed to obtain timezone, falling back");
        chrono_tz::Asia::Hong_Kong
    })
}

#[allow(clippy::missing_errors_doc)]
pub fn setup_tracing() -> Result<()> {
    // Create env filter
    let env_filter = EnvFilter::try_from_default_env()
        .map_or_else(|_| EnvFilter::new("info"), |env_filter| env_filter);

    // Export spans only when a collector is configured
    let telemetry_layer = if env::var_os("OTEL_EXPORTER_OTLP_ENDPOINT").is_some() {
        let tracer = opentelemetry_otlp::new_pipeline()
            .tracing()
            .with_exporter(opentelemetry_otlp::new_exporter().tonic())
            .with_trace_config(
                trace::config().with_resource(Resource::new(vec![KeyValue::new(
                    "service.name",
                    "tgmbk",
                )])),
            )
            .install_batch(opentelemetry_sdk::runtime::Tokio)?;
        Some(tracing_opentelemetry::layer().with_tracer(tracer))
    } else {
        None
    };

    Registry::default()
        .with(env_filter)
        .with(
            HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true),
        )
        .with(ErrorLayer::default())
        .with(telemetry_layer)
        .init();

    info!("Initialized tracing and logging systems");

    Ok(())
}

/// Same answer as [`fallback`] for any other method on the webhook path,
/// without putting the path in the logs.
async fn webhook_not_found(uri: Uri) -> impl IntoResponse {
    let status = StatusCode::NOT_FOUND;
    warn!(%status, "Failed to serve");
    (status, format!("No route {uri}"))
}

/// Request span keyed by route template, so the webhook token stays out of it.
fn request_span(request: &Request<Body>) -> Span {
    let matched_path = request
        .extensions()
        .get::<MatchedPath>()
        .map(MatchedPath::as_str);
    debug_span!(
        "request",
        method = %request.method(),
        matched_path,
        version = ?request.version(),
    )
}

pub fn router(state: State) -> Router {
    Router::new()
        .fallback(fallback)
        .route("/", get(root_handler).post(root_handler))
        .route("/:token", post(webhook_handler).fallback(webhook_not_found))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .with_state(state)
}

/// # Errors
///
/// See [`State::from_config`].
#[tracing::instrument(skip_all)]
pub fn setup_app(settings: &crate::config::Application) -> Result<Router> {
    let state = State::from_config(settings)?;
    Ok(router(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Asia/Hong_Kong" => chrono_tz::Asia::Hong_Kong; "when known")]
    #[test_case("Europe/Berlin" => chrono_tz::Europe::Berlin; "when another zone")]
    #[test_case("Mars/Olympus_Mons" => chrono_tz::Asia::Hong_Kong; "when unknown")]
    #[test_case("" => chrono_tz::Asia::Hong_Kong; "when empty")]
    fn timezone(name: &str) -> Tz {
        parse_timezone(name)
    }
}
