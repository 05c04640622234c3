use alloy_primitives::{Address, Bytes, B256};
use serde::{Deserialize, Serialize};

/// A log entry returned by filter and log queries.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterLog {
    /// The address that emitted the log
    pub address: Address,
    /// Hash of the block containing the log. `None` when the log is
    /// pending.
    pub block_hash: Option<B256>,
    /// Number of the block containing the log. `None` when the log is
    /// pending.
    #[serde(default, with = "crate::serde::optional_u64")]
    pub block_number: Option<u64>,
    /// The non-indexed arguments of the log
    pub data: Bytes,
    /// Index of the log within its block. `None` when the log is
    /// pending.
    #[serde(default, with = "crate::serde::optional_u64")]
    pub log_index: Option<u64>,
    /// The indexed arguments of the log
    pub topics: Vec<B256>,
    /// Hash of the transaction that emitted the log. `None` when the
    /// log is pending.
    pub transaction_hash: Option<B256>,
    /// Index of the emitting transaction within its block. `None` when
    /// the log is pending.
    #[serde(default, with = "crate::serde::optional_u64")]
    pub transaction_index: Option<u64>,
}
