use std::future::Future;

use reqwest::Client as HttpClient;
pub use reqwest::header::{self, HeaderMap, HeaderValue};
use url::Url;

/// Specialized error types for the transport layer.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request could not be sent to the remote node.
    #[error(transparent)]
    FailedToSend(reqwest::Error),

    /// The remote node failed to reply with the body of the response.
    #[error("The response text was corrupted: {0}.")]
    CorruptedResponse(reqwest::Error),

    /// The server returned an error status code.
    #[error("The Http server returned error status code: {0}")]
    HttpStatus(reqwest::Error),
}

/// Transport over which serialized JSON-RPC requests are exchanged with
/// a node.
///
/// Each invocation of [`Transport::post`] must perform exactly one
/// round-trip; retrying is left to callers.
pub trait Transport: Send + Sync {
    /// The URL requests are sent to.
    fn url(&self) -> &Url;

    /// Sends the body of one request and returns the body of the
    /// response.
    fn post(&self, request_body: String)
        -> impl Future<Output = Result<String, TransportError>> + Send;
}

/// A [`Transport`] that sends each request in a single HTTP POST over a
/// shared connection pool.
#[derive(Debug)]
pub struct HttpTransport {
    client: HttpClient,
    url: Url,
}

impl HttpTransport {
    /// Creates a new instance for the provided URL, attaching the
    /// provided headers to every request.
    pub fn new(url: &str, extra_headers: Option<HeaderMap>) -> Result<Self, url::ParseError> {
        let url = url.parse()?;

        let mut headers = extra_headers.unwrap_or_default();
        headers.append(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.append(
            header::USER_AGENT,
            HeaderValue::from_static(concat!("edc ", env!("CARGO_PKG_VERSION"))),
        );

        let client = HttpClient::builder()
            .default_headers(headers)
            .build()
            .expect("Default construction nor setting default headers can cause an error");

        Ok(Self { client, url })
    }
}

impl Transport for HttpTransport {
    fn url(&self) -> &Url {
        &self.url
    }

    fn post(
        &self,
        request_body: String,
    ) -> impl Future<Output = Result<String, TransportError>> + Send {
        async move {
            self.client
                .post(self.url.clone())
                .body(request_body)
                .send()
                .await
                .map_err(TransportError::FailedToSend)?
                .error_for_status()
                .map_err(TransportError::HttpStatus)?
                .text()
                .await
                .map_err(TransportError::CorruptedResponse)
        }
    }
}
