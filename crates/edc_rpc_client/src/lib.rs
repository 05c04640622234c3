#![warn(missing_docs)]

//! JSON-RPC client with a pluggable HTTP transport

mod client;
/// Types specific to JSON-RPC
pub mod jsonrpc;
mod transport;

pub use self::{
    client::{RpcClient, RpcClientError, RpcMethod},
    transport::{header, HeaderMap, HeaderValue, HttpTransport, Transport, TransportError},
};
