use serde::Deserialize;

/// A chat message with text, as handed to the intent router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub chat_id: i64,
    pub text: String,
}

// Telegram Bot API wire types

#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Option<Chat>,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Chat {
    pub id: i64,
}

impl Update {
    pub fn into_inbound(self) -> Option<InboundMessage> {
        let message = self.message?;
        let chat = message.chat?;
        let text = message.text?;
        Some(InboundMessage {
            chat_id: chat.id,
            text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_updates_envelope() {
        let json = r#"{"ok":true,"result":[
            {"update_id":10,"message":{"message_id":1,"chat":{"id":42},"text":"are you alive"}},
            {"update_id":11,"poll":{"id":"p1"}},
            {"update_id":12,"message":{"message_id":2,"chat":{"id":42}}}
        ]}"#;
        let resp: ApiResponse<Vec<Update>> = serde_json::from_str(json).unwrap();
        assert!(resp.ok);
        let messages: Vec<InboundMessage> = resp
            .result
            .unwrap()
            .into_iter()
            .filter_map(Update::into_inbound)
            .collect();
        assert_eq!(
            messages,
            vec![InboundMessage {
                chat_id: 42,
                text: "are you alive".to_string(),
            }]
        );
    }
}
