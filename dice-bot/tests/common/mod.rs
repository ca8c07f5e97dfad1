//! Helpers shared by the integration tests.

#![allow(dead_code)]

pub mod mock_bot;

use chrono::Utc;
use dice_bot::{Chat, Message, User};

pub fn user(id: i64, username: Option<&str>, first_name: Option<&str>, last_name: Option<&str>) -> User {
    User {
        id,
        username: username.map(str::to_string),
        first_name: first_name.map(str::to_string),
        last_name: last_name.map(str::to_string),
    }
}

pub fn create_message(chat_id: i64, user: User, content: &str) -> Message {
    Message {
        id: format!("{}-{}", chat_id, user.id),
        user,
        chat: Chat {
            id: chat_id,
            chat_type: "group".to_string(),
        },
        content: content.to_string(),
        created_at: Utc::now(),
    }
}
