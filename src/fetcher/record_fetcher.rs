use crate::fetcher::error::FetchError;
use crate::types::station_record::StationRecord;
use futures_util::TryStreamExt;
use log::{info, warn};
use reqwest::Client;
use std::io;
use tokio::io::AsyncReadExt;
use tokio_util::io::StreamReader;

/// Open-data endpoint publishing the hydrological and weather station observations.
pub const DATA_URL: &str = "https://www.datos.gov.co/resource/57sv-p2fu.json";

/// Downloads the station observations with a single `GET` request.
///
/// No caching, pagination or retry is performed: every call issues exactly one request.
#[derive(Debug, Clone)]
pub struct RecordFetcher {
    client: Client,
    url: String,
}

impl Default for RecordFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordFetcher {
    pub fn new() -> Self {
        Self::with_endpoint(DATA_URL)
    }

    pub(crate) fn with_endpoint(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches and decodes every record from the endpoint.
    ///
    /// The decoded records are returned unmodified; interpreting coordinates and
    /// categories is left to the consumers.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::NetworkRequest`] or [`FetchError::DownloadIo`] on transport
    /// failures, [`FetchError::HttpStatus`] for status codes of 400 and above, and
    /// [`FetchError::JsonParse`] when the body is not a JSON array of objects.
    pub async fn fetch_records(&self) -> Result<Vec<StationRecord>, FetchError> {
        match self.download().await {
            Ok(records) => {
                info!("Fetched {} records from {}", records.len(), self.url);
                Ok(records)
            }
            Err(e) => {
                warn!("Fetching records from {} failed: {:?}", self.url, e);
                Err(e)
            }
        }
    }

    async fn download(&self) -> Result<Vec<StationRecord>, FetchError> {
        info!("Downloading data from {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(self.url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                return Err(if let Some(status) = e.status() {
                    FetchError::HttpStatus {
                        url: self.url.clone(),
                        status,
                        source: e,
                    }
                } else {
                    FetchError::NetworkRequest(self.url.clone(), e)
                });
            }
        };

        let stream = response
            .bytes_stream()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e));
        let mut reader = StreamReader::new(stream);
        let mut body = Vec::new();
        reader.read_to_end(&mut body).await?;

        let parse_start = std::time::Instant::now();
        let records = tokio::task::spawn_blocking(move || parse_records(&body)).await??;
        info!(
            "Parsed {} records from JSON in {:?}",
            records.len(),
            parse_start.elapsed()
        );
        Ok(records)
    }
}

/// Decodes a response body into records.
pub fn parse_records(body: &[u8]) -> Result<Vec<StationRecord>, FetchError> {
    serde_json::from_slice::<Vec<StationRecord>>(body).map_err(FetchError::from)
}
