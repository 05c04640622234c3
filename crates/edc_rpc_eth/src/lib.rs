#![warn(missing_docs)]

//! Typed client for the JSON-RPC interface of an Ethereum-style node

/// Types for JSON-RPC blocks
pub mod block;
mod call_request;
/// The typed RPC client
pub mod client;
/// Search for the lowest block satisfying a predicate
pub mod finder;
mod request_methods;
mod transaction;
mod transaction_request;

pub use edc_rpc_client::{
    header, HeaderMap, HeaderValue, HttpTransport, RpcClientError, Transport, TransportError,
};

pub use self::{
    block::Block,
    call_request::CallRequest,
    client::{ClientConfig, EthRpcClient},
    finder::{BlockFinder, BlockFinderError},
    request_methods::RequestMethod,
    transaction::Transaction,
    transaction_request::TransactionRequest,
};
