use edc_eth::{Address, Bloom, Bytes, B256, B64, U256};
use serde::{Deserialize, Serialize};

/// Block object returned by `eth_getBlockByNumber`.
///
/// The generic parameter is the representation of transactions: hashes
/// only, or full transaction objects.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Block<TransactionT> {
    /// Hash of the block. `None` when it's a pending block.
    pub hash: Option<B256>,
    /// Hash of the parent block
    pub parent_hash: B256,
    /// SHA3 of the uncles data in the block
    pub sha3_uncles: B256,
    /// The root of the final state trie of the block
    pub state_root: B256,
    /// The root of the transaction trie of the block
    pub transactions_root: B256,
    /// The root of the receipts trie of the block
    pub receipts_root: B256,
    /// The block number. `None` when it's a pending block.
    #[serde(with = "edc_eth::serde::optional_u64")]
    pub number: Option<u64>,
    /// The total gas used by all transactions in this block
    #[serde(with = "edc_eth::serde::u64")]
    pub gas_used: u64,
    /// The maximum gas allowed in this block
    #[serde(with = "edc_eth::serde::u64")]
    pub gas_limit: u64,
    /// The "extra data" field of this block
    pub extra_data: Bytes,
    /// The bloom filter for the logs of the block
    pub logs_bloom: Bloom,
    /// The unix timestamp for when the block was collated
    #[serde(with = "edc_eth::serde::u64")]
    pub timestamp: u64,
    /// Integer of the difficulty of this block
    pub difficulty: U256,
    /// Integer of the total difficulty of the chain until this block
    pub total_difficulty: Option<U256>,
    /// Array of uncle hashes
    #[serde(default)]
    pub uncles: Vec<B256>,
    /// Array of transaction objects, or 32-byte transaction hashes
    #[serde(default)]
    pub transactions: Vec<TransactionT>,
    /// The length of the RLP encoding of this block, in bytes
    #[serde(with = "edc_eth::serde::u64")]
    pub size: u64,
    /// The address of the beneficiary to whom the mining rewards were
    /// given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub miner: Option<Address>,
    /// Mix hash. `None` when it's a pending block.
    pub mix_hash: Option<B256>,
    /// Hash of the generated proof-of-work. `None` when it's a pending
    /// block.
    pub nonce: Option<B64>,
}
