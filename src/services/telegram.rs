use crate::models::{error::Webhook, message::SendMessage};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info};

/// Posts `message` as a form to `sendMessage` of the bot behind `token`.
///
/// # Errors
///
/// `Webhook::Transport` if the request could not be made,
/// `Webhook::Rejected` if the Bot API answered with a non-2xx status.
#[tracing::instrument(skip(client, token))]
pub async fn post(
    client: &reqwest::Client,
    api_url: &str,
    token: &SecretString,
    message: &SendMessage,
) -> Result<(), Webhook> {
    let url = format!("{api_url}/bot{}/sendMessage", token.expose_secret());

    debug!(?message, "Sending message");
    let response = client
        .post(&url)
        .form(message)
        .send()
        .await
        .map_err(reqwest::Error::without_url)?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)?;
        return Err(Webhook::Rejected { status, body });
    }
    info!(%status, chat_id = message.chat_id, "Sent message");
    Ok(())
}
