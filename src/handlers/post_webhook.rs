use crate::models::{error::Webhook, message::SendMessage, report::Result, Update};
use crate::services::{breakfast, telegram};
use crate::State as AppState;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use secrecy::ExposeSecret;
use tracing::info;

#[tracing::instrument(skip_all)]
pub async fn webhook_handler(
    State(state): State<AppState>,
    Path(token): Path<String>,
    body: Bytes,
) -> Result<StatusCode> {
    if token != *state.token.expose_secret() {
        return Err(Webhook::UnknownPath);
    }

    let update: Update = serde_json::from_slice(&body)?;
    let message = update
        .message
        .ok_or(Webhook::NoMessage {
            update_id: update.id,
        })?;
    info!(
        update_id = update.id,
        chat_id = message.chat.id,
        message_id = message.id,
        "Got update"
    );

    let now = (state.clock)().with_timezone(&state.timezone);
    let text = breakfast::reply(now, message.text(), &state.locations);
    info!(text, "Derived reply");

    let reply = SendMessage::reply_to(&message, text);
    telegram::post(&state.reqwest_client, &state.api_url, &state.token, &reply).await?;
    Ok(StatusCode::OK)
}
