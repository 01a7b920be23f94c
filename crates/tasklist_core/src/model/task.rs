use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    pub done: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    // Serialized as `null` while pending so every stored record carries
    // all four fields.
    #[serde(with = "time::serde::rfc3339::option")]
    pub completed_at: Option<OffsetDateTime>,
}

impl Task {
    pub fn new<T: Into<String>>(text: T) -> Self {
        Self {
            text: text.into(),
            done: false,
            created_at: OffsetDateTime::now_utc(),
            completed_at: None,
        }
    }
}
