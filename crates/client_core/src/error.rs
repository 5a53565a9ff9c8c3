use thiserror::Error;

/// Text shown for every failed query or deletion.
pub const QUERY_FAILED_MESSAGE: &str = "Unable to load questions. Please try your request again";

/// The only failure the controller reports. Transport errors, 4xx and 5xx
/// responses all collapse into it; `source` keeps the cause for logs.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("{}", QUERY_FAILED_MESSAGE)]
    QueryFailed { source: anyhow::Error },
}

impl QueryError {
    pub fn user_message(&self) -> &'static str {
        QUERY_FAILED_MESSAGE
    }
}
