//! reqwest-backed page source for the menu challenge API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::PageSource;
use crate::error::RepositoryError;
use crate::model::{Page, parse_page};

pub const DEFAULT_ENDPOINT: &str =
    "https://backend-challenge-summer-2018.herokuapp.com/challenges.json";

pub struct HttpPageSource {
    client: Client,
    endpoint: String,
    challenge_id: u32,
}

impl HttpPageSource {
    pub fn new(
        endpoint: impl Into<String>,
        challenge_id: u32,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            challenge_id,
        })
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_page(&self, page: u64) -> Result<Page, RepositoryError> {
        debug!(endpoint = %self.endpoint, challenge_id = self.challenge_id, page, "GET page");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("id", u64::from(self.challenge_id)), ("page", page)])
            .send()
            .await
            .map_err(|source| RepositoryError::Unreachable { page, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RepositoryError::HttpStatus {
                page,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| RepositoryError::Unreachable { page, source })?;

        parse_page(&body, page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn non_success_status_reports_page_and_status() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 2048];
            let _ = socket.read(&mut request).await;
            let response = "HTTP/1.1 503 Service Unavailable\r\n\
                            content-length: 0\r\n\
                            connection: close\r\n\r\n";
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });

        let endpoint = format!("http://{}/challenges.json", addr);
        let source = HttpPageSource::new(endpoint, 1, Duration::from_secs(5)).unwrap();
        let err = source.fetch_page(1).await.unwrap_err();
        assert!(
            matches!(err, RepositoryError::HttpStatus { page: 1, status: 503 }),
            "{}",
            err
        );
    }

    #[tokio::test]
    async fn unreachable_host_reports_page() {
        // Nothing listens on port 9 (discard) locally.
        let endpoint = "http://127.0.0.1:9/challenges.json";
        let source = HttpPageSource::new(endpoint, 1, Duration::from_secs(2)).unwrap();
        let err = source.fetch_page(3).await.unwrap_err();
        assert!(
            matches!(err, RepositoryError::Unreachable { page: 3, .. }),
            "{}",
            err
        );
    }
}
