use serde::{Deserialize, Serialize};
use validator::Validate;

/// The greeting served by `GET /hello`.
pub const HELLO_MESSAGE: &str = "hello world";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct HelloResponse {
    pub message: String,
}

impl Default for HelloResponse {
    fn default() -> Self {
        Self {
            message: HELLO_MESSAGE.to_string(),
        }
    }
}
