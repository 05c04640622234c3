use edc_eth::{Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};

/// Transaction object returned by `eth_getBlockByNumber` when full
/// transaction data is requested.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Hash of the transaction
    pub hash: B256,
    /// The number of transactions made by the sender prior to this one
    #[serde(with = "edc_eth::serde::u64")]
    pub nonce: u64,
    /// Hash of the block containing the transaction. `None` when it's
    /// pending.
    pub block_hash: Option<B256>,
    /// Number of the block containing the transaction. `None` when
    /// it's pending.
    #[serde(with = "edc_eth::serde::optional_u64")]
    pub block_number: Option<u64>,
    /// Index of the transaction within its block. `None` when it's
    /// pending.
    #[serde(with = "edc_eth::serde::optional_u64")]
    pub transaction_index: Option<u64>,
    /// Address of the sender
    pub from: Address,
    /// Address of the receiver. `None` when it's a contract creation
    /// transaction.
    pub to: Option<Address>,
    /// Value transferred, in wei
    pub value: U256,
    /// Gas price provided by the sender, in wei
    pub gas_price: U256,
    /// Gas provided by the sender
    pub gas: U256,
    /// The data sent along with the transaction
    pub input: Bytes,
}
