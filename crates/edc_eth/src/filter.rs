use alloy_primitives::{Address, B256};
use serde::{Deserialize, Serialize};

use crate::{log::FilterLog, BlockSpec};

/// Either a single value or a list of values.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum OneOrMore<T> {
    /// A single value
    One(T),
    /// A list of values
    Many(Vec<T>),
}

/// The filter criteria accepted by `eth_newFilter`.
///
/// Block endpoints are forwarded to the node uninterpreted; the node
/// resolves tags such as `pending` against its own chain state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogFilterOptions {
    /// The lower endpoint of the block range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_block: Option<BlockSpec>,
    /// The upper endpoint of the block range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_block: Option<BlockSpec>,
    /// One or more addresses that emitted the logs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<OneOrMore<Address>>,
    /// Topic filters, position by position. `None` at a position
    /// matches any topic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<Option<OneOrMore<B256>>>>,
}

/// The events reported by `eth_getFilterChanges`.
///
/// A log filter reports log objects; block and pending transaction
/// filters report hashes. An empty result is indistinguishable on the
/// wire and parses as an empty set of logs.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FilteredEvents {
    /// Logs matched by a log filter
    Logs(Vec<FilterLog>),
    /// Hashes of new blocks or new pending transactions
    NewHashes(Vec<B256>),
}

impl FilteredEvents {
    /// Returns the logs, if the events are logs.
    pub fn into_logs(self) -> Option<Vec<FilterLog>> {
        match self {
            FilteredEvents::Logs(logs) => Some(logs),
            FilteredEvents::NewHashes(_) => None,
        }
    }

    /// Returns the hashes, if the events are block or transaction
    /// hashes.
    pub fn into_hashes(self) -> Option<Vec<B256>> {
        match self {
            FilteredEvents::Logs(_) => None,
            FilteredEvents::NewHashes(hashes) => Some(hashes),
        }
    }
}
