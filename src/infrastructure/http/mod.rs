// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the prediction endpoint.
//!
//! Each call to [`HttpPredictionClient::send`] performs one multipart
//! `POST` with a single `file` part. No authentication headers are sent.
//! Status interpretation is left to the submission controller; this adapter
//! only distinguishes "got a response" from "got nothing".

use crate::application::port::{PredictionTransport, TransportError, TransportResponse};
use crate::domain::scan::SelectedImage;
use reqwest::multipart::{Form, Part};
use reqwest::Url;
use std::time::Duration;

/// Name of the multipart field carrying the image.
pub const FILE_FIELD: &str = "file";

/// reqwest client bound to one prediction endpoint.
#[derive(Debug, Clone)]
pub struct HttpPredictionClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpPredictionClient {
    /// Builds a client for `endpoint`.
    ///
    /// `timeout` bounds each attempt; `None` lets a request wait forever.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Request`] if the URL does not parse or the
    /// TLS backend cannot be initialised.
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Result<Self, TransportError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| TransportError::Request(format!("{endpoint}: {e}")))?;

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("PawFeel/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn form(image: &SelectedImage) -> Result<Form, TransportError> {
        let part = Part::bytes(image.bytes().to_vec())
            .file_name(image.file_name().to_string())
            .mime_str(image.media_type())
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Ok(Form::new().part(FILE_FIELD, part))
    }
}

fn classify(err: &reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_builder() {
        TransportError::Request(err.to_string())
    } else {
        TransportError::Unreachable(err.to_string())
    }
}

impl PredictionTransport for HttpPredictionClient {
    async fn send(&self, image: &SelectedImage) -> Result<TransportResponse, TransportError> {
        let form = Self::form(image)?;

        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| classify(&e))?;

        let status = response.status().as_u16();
        // A response was received; a broken body just fails to parse later.
        let body = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(err) => {
                log::warn!("Failed to read response body (HTTP {status}): {err}");
                Vec::new()
            }
        };

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn image() -> SelectedImage {
        SelectedImage::new("dog.png", "image/png", b"\x89PNG fake".to_vec()).unwrap()
    }

    fn header_end(buf: &[u8]) -> Option<usize> {
        buf.windows(4).position(|w| w == b"\r\n\r\n").map(|p| p + 4)
    }

    fn content_length(headers: &str) -> Option<usize> {
        headers.lines().find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse().ok())
                .flatten()
        })
    }

    /// Accepts one connection, captures the raw request and answers with `response`.
    async fn serve_once(response: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/predict", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];
            loop {
                let n = stream.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
                if let Some(end) = header_end(&buf) {
                    let headers = String::from_utf8_lossy(&buf[..end]).to_string();
                    match content_length(&headers) {
                        Some(len) if buf.len() >= end + len => break,
                        None if buf.ends_with(b"--\r\n") => break,
                        _ => {}
                    }
                }
            }
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
            String::from_utf8_lossy(&buf).to_string()
        });

        (url, handle)
    }

    #[test]
    fn invalid_endpoint_is_rejected() {
        let err = HttpPredictionClient::new("not a url", None).unwrap_err();
        assert!(matches!(err, TransportError::Request(_)));
    }

    #[test]
    fn keeps_configured_endpoint() {
        let client =
            HttpPredictionClient::new("https://example.com/predict", Some(Duration::from_secs(5)))
                .unwrap();
        assert_eq!(client.endpoint().as_str(), "https://example.com/predict");
    }

    #[tokio::test]
    async fn posts_multipart_file_field() {
        let (url, server) = serve_once(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 2\r\nconnection: close\r\n\r\n{}",
        )
        .await;
        let client = HttpPredictionClient::new(&url, None).unwrap();

        let response = client.send(&image()).await.unwrap();
        let request = server.await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, b"{}");
        assert!(request.starts_with("POST /predict HTTP/1.1"));
        assert!(request.contains("multipart/form-data; boundary="));
        assert!(request.contains(r#"name="file"; filename="dog.png""#));
        assert!(request.contains("image/png"));
        assert!(request.contains("PNG fake"));
        assert!(!request.to_ascii_lowercase().contains("authorization:"));
    }

    #[tokio::test]
    async fn rate_limited_status_is_a_response() {
        let (url, server) = serve_once(
            "HTTP/1.1 429 Too Many Requests\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
        )
        .await;
        let client = HttpPredictionClient::new(&url, None).unwrap();

        let response = client.send(&image()).await.unwrap();
        server.await.unwrap();

        assert!(response.is_rate_limited());
        assert!(response.body.is_empty());
    }

    #[tokio::test]
    async fn refused_connection_is_unreachable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/predict", listener.local_addr().unwrap());
        drop(listener);

        let client = HttpPredictionClient::new(&url, None).unwrap();
        let err = client.send(&image()).await.unwrap_err();

        assert!(matches!(err, TransportError::Unreachable(_)));
    }
}
