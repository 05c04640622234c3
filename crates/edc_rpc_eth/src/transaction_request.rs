use edc_eth::{Address, Bytes, U256};

/// Transaction object submitted via `eth_sendTransaction`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    /// from address
    pub from: Address,
    /// to address. `None` for a contract creation transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
    /// gas. When absent, the client fills in its default transaction
    /// gas before submission.
    #[serde(
        default,
        with = "edc_eth::serde::optional_u64",
        skip_serializing_if = "Option::is_none"
    )]
    pub gas: Option<u64>,
    /// gas price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<U256>,
    /// value of the tx in wei
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<U256>,
    /// any additional data sent
    #[serde(default, alias = "input", skip_serializing_if = "Option::is_none")]
    pub data: Option<Bytes>,
    /// transaction nonce. When absent, the node assigns the next nonce
    /// of the sender; the client performs no nonce management.
    #[serde(
        default,
        with = "edc_eth::serde::optional_u64",
        skip_serializing_if = "Option::is_none"
    )]
    pub nonce: Option<u64>,
}

impl TransactionRequest {
    /// Creates a request transferring the provided value, with all
    /// optional fields left for the client and node to fill in.
    pub fn transfer(from: Address, to: Address, value: U256) -> Self {
        Self {
            from,
            to: Some(to),
            gas: None,
            gas_price: None,
            value: Some(value),
            data: None,
            nonce: None,
        }
    }
}
