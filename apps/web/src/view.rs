use std::fmt;

use shared::HelloResponse;

use crate::query::QueryState;

pub const APP_TITLE: &str = "Hello World App";
pub const LOADING_TEXT: &str = "Loading...";
pub const ERROR_TEXT: &str = "Error loading message";

/// Renders the hello query as a single line of text.
pub struct HelloView<'a>(pub &'a QueryState<HelloResponse>);

impl fmt::Display for HelloView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            QueryState::Loading => f.write_str(LOADING_TEXT),
            QueryState::Error(_) => f.write_str(ERROR_TEXT),
            QueryState::Success(hello) => f.write_str(&hello.message),
        }
    }
}

/// The whole screen: heading, then the hello view.
pub fn render_app(state: &QueryState<HelloResponse>) -> String {
    format!("{APP_TITLE}\n{}", HelloView(state))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_text() {
        assert_eq!(HelloView(&QueryState::Loading).to_string(), "Loading...");
    }

    #[test]
    fn test_error_text_hides_cause() {
        let state = QueryState::Error("connection refused".to_string());
        assert_eq!(HelloView(&state).to_string(), "Error loading message");
    }

    #[test]
    fn test_success_shows_message() {
        let state = QueryState::Success(HelloResponse::default());
        assert_eq!(HelloView(&state).to_string(), "hello world");
    }

    #[test]
    fn test_app_has_heading() {
        let screen = render_app(&QueryState::Loading);
        assert_eq!(screen, "Hello World App\nLoading...");
    }
}
