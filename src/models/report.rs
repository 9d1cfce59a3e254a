use super::error::Webhook;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

pub type Result<T, E = Webhook> = std::result::Result<T, E>;

impl IntoResponse for Webhook {
    fn into_response(self) -> Response {
        let status = self.status();
        if matches!(self, Self::UnknownPath) {
            warn!(%status, "{self}");
        } else {
            error!(%status, "{self}");
        }
        status.into_response()
    }
}
