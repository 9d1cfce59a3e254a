use super::update;
use serde::Serialize;

/// Form body of a `sendMessage` call.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SendMessage {
    pub chat_id: i64,
    pub text: String,
    pub reply_to_message_id: i64,
}

impl SendMessage {
    /// Reply with `text` to `message`, in the chat it was sent to.
    #[must_use]
    pub fn reply_to(message: &update::Message, text: String) -> Self {
        Self {
            chat_id: message.chat.id,
            text,
            reply_to_message_id: message.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Update;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_strategy::proptest;

    #[proptest]
    fn reply_keeps_ids(update_id: i64, message_id: i64, chat_id: i64) {
        let body = json!({
            "update_id": update_id,
            "message": {"message_id": message_id, "chat": {"id": chat_id}, "text": "breakfast?"},
        });
        let update: Update = serde_json::from_value(body).unwrap();
        let reply = SendMessage::reply_to(&update.message.unwrap(), "L2".to_string());
        assert_eq!(reply.chat_id, chat_id);
        assert_eq!(reply.reply_to_message_id, message_id);
    }
}
