use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    // Stream interrupted while reading the response body
    #[error("Data download failed")]
    DownloadIo(#[from] std::io::Error),

    #[error("Failed to parse JSON data")]
    JsonParse(#[from] serde_json::Error),

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl FetchError {
    /// Transport failures and non-success statuses.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            FetchError::NetworkRequest(..) | FetchError::HttpStatus { .. } | FetchError::DownloadIo(_)
        )
    }

    /// The response arrived but its body is not a list of records.
    pub fn is_parse(&self) -> bool {
        matches!(self, FetchError::JsonParse(_))
    }
}
