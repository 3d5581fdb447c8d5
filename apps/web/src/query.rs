//! Observable fetch state for the hello message.
//!
//! The query starts in `Loading` and moves to `Success` or `Error` exactly
//! once, when the single request settles.

use shared::HelloResponse;
use tokio::sync::watch;
use tracing::warn;

use crate::client::HelloClient;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState<T> {
    Loading,
    Success(T),
    Error(String),
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }
}

/// Starts fetching `/hello` in the background and returns a handle that
/// observes the state transitions.
pub fn spawn_hello_query(client: HelloClient) -> watch::Receiver<QueryState<HelloResponse>> {
    let (tx, rx) = watch::channel(QueryState::Loading);

    tokio::spawn(async move {
        let next = match client.fetch_hello().await {
            Ok(hello) => QueryState::Success(hello),
            Err(e) => {
                warn!("hello query failed: {e}");
                QueryState::Error(e.to_string())
            }
        };
        // Nobody listening any more is fine.
        let _ = tx.send(next);
    });

    rx
}

/// Waits until the query has left `Loading`.
pub async fn settled<T: Clone>(rx: &mut watch::Receiver<QueryState<T>>) -> QueryState<T> {
    match rx.wait_for(|state| !state.is_loading()).await {
        Ok(state) => state.clone(),
        Err(_) => QueryState::Error("query ended without a result".to_string()),
    }
}
