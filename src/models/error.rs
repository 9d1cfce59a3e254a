use axum::http::StatusCode;
use config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Webhook {
    #[error("no webhook is registered at this path")]
    UnknownPath,
    #[error("error unmarshaling update: {source}")]
    Decode {
        #[from]
        source: serde_json::Error,
    },
    #[error("update {update_id} carries no message")]
    NoMessage { update_id: i64 },
    #[error("error sending message: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },
    #[error("Telegram rejected the message (status: {status}, body: {body})")]
    Rejected { status: StatusCode, body: String },
}

impl Webhook {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::UnknownPath => StatusCode::NOT_FOUND,
            Self::Decode { .. } => StatusCode::BAD_REQUEST,
            Self::NoMessage { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Transport { .. } | Self::Rejected { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

#[derive(Error, Debug)]
pub enum Configuration {
    #[error("required environment variable {variable} is missing or empty")]
    Missing { variable: String },
    #[error("error reading configuration: {source}")]
    Source {
        #[from]
        source: ConfigError,
    },
}
