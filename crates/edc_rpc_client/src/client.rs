use std::{
    marker::PhantomData,
    sync::atomic::{AtomicU64, Ordering},
};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::Url;

use crate::{
    jsonrpc,
    transport::{HeaderMap, HttpTransport, Transport, TransportError},
};

/// Trait for JSON-RPC method invocations.
pub trait RpcMethod: Serialize {
    /// The name of the method, used for diagnostics.
    fn name(&self) -> &'static str;
}

/// Specialized error types
#[derive(Debug, thiserror::Error)]
pub enum RpcClientError {
    /// The transport failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The request cannot be serialized as JSON.
    #[error(transparent)]
    InvalidJsonRequest(serde_json::Error),

    /// The server returned a response that does not parse as the
    /// expected type.
    #[error("Response '{response}' failed to parse with expected type '{expected_type}', due to error: '{error}'")]
    InvalidResponse {
        /// The response text
        response: String,
        /// The expected type of the response
        expected_type: &'static str,
        /// The parse error
        error: serde_json::Error,
    },

    /// The server returned an id that does not match the request.
    #[error("The server returned an invalid id: '{id:?}' in response: '{response}'")]
    InvalidId {
        /// The response text
        response: String,
        /// The id returned by the server
        id: jsonrpc::Id,
    },

    /// Invalid URL format
    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),

    /// The JSON-RPC call failed.
    #[error("{error}. Request: {request}")]
    JsonRpcError {
        /// The JSON-RPC error
        error: jsonrpc::Error,
        /// The request JSON
        request: String,
    },
}

/// A client for executing JSON-RPC methods on a remote node.
///
/// Every call performs exactly one round-trip over the transport; the
/// client never retries on its own.
#[derive(Debug)]
pub struct RpcClient<MethodT: RpcMethod, TransportT: Transport = HttpTransport> {
    transport: TransportT,
    next_id: AtomicU64,
    _phantom: PhantomData<MethodT>,
}

impl<MethodT: RpcMethod> RpcClient<MethodT, HttpTransport> {
    /// Creates a new instance that connects to the provided URL over
    /// HTTP, sending the provided headers with every request.
    pub fn new(url: &str, extra_headers: Option<HeaderMap>) -> Result<Self, RpcClientError> {
        let transport = HttpTransport::new(url, extra_headers)?;
        Ok(Self::with_transport(transport))
    }
}

impl<MethodT: RpcMethod, TransportT: Transport> RpcClient<MethodT, TransportT> {
    /// Creates a new instance that exchanges requests over the provided
    /// transport.
    pub fn with_transport(transport: TransportT) -> Self {
        Self {
            transport,
            next_id: AtomicU64::new(0),
            _phantom: PhantomData,
        }
    }

    /// The URL of the remote node.
    pub fn url(&self) -> &Url {
        self.transport.url()
    }

    /// Calls the provided JSON-RPC method and returns the result.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all, fields(method = method.name())))]
    pub async fn call<SuccessT: DeserializeOwned>(
        &self,
        method: MethodT,
    ) -> Result<SuccessT, RpcClientError> {
        let id = jsonrpc::Id::Num(self.next_id.fetch_add(1, Ordering::Relaxed));
        let request = Self::serialize_request_with_id(&method, id.clone())?;

        log::trace!("Calling method `{}`", method.name());

        self.send_request_and_extract_result(id, request).await
    }

    fn serialize_request_with_id(
        method: &MethodT,
        id: jsonrpc::Id,
    ) -> Result<SerializedRequest, RpcClientError> {
        let request = serde_json::to_value(jsonrpc::Request {
            version: jsonrpc::Version::V2_0,
            id,
            method,
        })
        .map_err(RpcClientError::InvalidJsonRequest)?;

        Ok(SerializedRequest(request))
    }

    async fn send_request_and_extract_result<SuccessT: DeserializeOwned>(
        &self,
        id: jsonrpc::Id,
        request: SerializedRequest,
    ) -> Result<SuccessT, RpcClientError> {
        let response = self.send_request_body(&request).await?;
        let parsed: jsonrpc::Response<SuccessT> = Self::parse_response_str(&response)?;

        if parsed.id != id {
            return Err(RpcClientError::InvalidId {
                response,
                id: parsed.id,
            });
        }

        parsed.data.into_result().map_err(|error| RpcClientError::JsonRpcError {
            error,
            request: request.to_json_string(),
        })
    }

    async fn send_request_body(
        &self,
        request_body: &SerializedRequest,
    ) -> Result<String, RpcClientError> {
        let request_body = request_body.to_json_string();

        log::trace!("Sending request: {request_body}");

        let response = self.transport.post(request_body).await?;

        log::trace!("Received response: {response}");

        Ok(response)
    }

    fn parse_response_str<SuccessT: DeserializeOwned>(
        response: &str,
    ) -> Result<jsonrpc::Response<SuccessT>, RpcClientError> {
        serde_json::from_str(response).map_err(|error| RpcClientError::InvalidResponse {
            response: response.to_string(),
            expected_type: std::any::type_name::<jsonrpc::Response<SuccessT>>(),
            error,
        })
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[repr(transparent)]
#[serde(transparent)]
struct SerializedRequest(serde_json::Value);

impl SerializedRequest {
    fn to_json_string(&self) -> String {
        self.0.to_string()
    }
}
