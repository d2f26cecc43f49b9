use serde::{Deserialize, Serialize};

/// Who authored a message in the conversation.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Sender {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "bot")]
    Bot,
}

/// A single conversation entry. Immutable once appended.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

/// The ordered conversation history.
///
/// Append-only: messages are never reordered or edited after the fact,
/// and insertion order is display order. Owned by the core `App`; torn
/// down with it (no persistence).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message and returns a reference to it.
    fn add(&mut self, message: ChatMessage) -> &ChatMessage {
        self.messages.push(message);
        self.messages
            .last()
            .expect("just pushed a message so it must exist")
    }

    pub fn add_user(&mut self, text: String) -> &ChatMessage {
        self.add(ChatMessage {
            sender: Sender::User,
            text,
        })
    }

    pub fn add_bot(&mut self, text: String) -> &ChatMessage {
        self.add(ChatMessage {
            sender: Sender::Bot,
            text,
        })
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChatMessage> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn get(&self, index: usize) -> Option<&ChatMessage> {
        self.messages.get(index)
    }
}

/// Request body for the `/chat` endpoint.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub message: String,
    pub user_email: String,
}

/// Expected response body from the `/chat` endpoint.
/// Any other shape is treated as a failure by the client.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ChatResponse {
    pub response: String,
}
