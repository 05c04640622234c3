use serde::{Deserialize, Serialize};

/// JSON-RPC protocol version
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum Version {
    /// Version 2.0 of the JSON-RPC specification
    #[serde(rename = "2.0")]
    V2_0,
}

/// Identifier of a JSON-RPC request
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Id {
    /// A numerical id
    Num(u64),
    /// A string id
    Str(String),
}

/// A JSON-RPC request
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Request<MethodT> {
    /// JSON-RPC protocol version
    #[serde(rename = "jsonrpc")]
    pub version: Version,
    /// The id of the request, to be matched against the response
    pub id: Id,
    /// The method invocation: its name and parameters
    #[serde(flatten)]
    pub method: MethodT,
}

/// A JSON-RPC response
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Response<T> {
    /// JSON-RPC protocol version
    pub jsonrpc: Version,
    /// The id of the request this response answers
    pub id: Id,
    /// The outcome of the request
    #[serde(flatten)]
    pub data: ResponseData<T>,
}

/// The payload of a JSON-RPC response: either a result or an error.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ResponseData<T> {
    /// The request failed
    Error {
        /// The error reported by the server
        error: Error,
    },
    /// The request succeeded
    Success {
        /// The result of the request
        result: T,
    },
}

impl<T> ResponseData<T> {
    /// Converts the response payload into a `Result`.
    pub fn into_result(self) -> Result<T, Error> {
        match self {
            ResponseData::Error { error } => Err(error),
            ResponseData::Success { result } => Ok(result),
        }
    }
}

/// A JSON-RPC error object
#[derive(Clone, Debug, PartialEq, thiserror::Error, Deserialize, Serialize)]
#[error("JSON-RPC error {code}: {message}")]
pub struct Error {
    /// The error code
    pub code: i64,
    /// A short description of the error
    pub message: String,
    /// Additional information about the error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}
