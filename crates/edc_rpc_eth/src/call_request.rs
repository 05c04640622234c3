use edc_eth::{Address, Bytes, U256};

/// For specifying input to methods requiring a transaction object, like
/// `eth_call` and `eth_estimateGas`
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRequest {
    /// the address from which the transaction should be sent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    /// the address to which the transaction should be sent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
    /// gas
    #[serde(
        default,
        with = "edc_eth::serde::optional_u64",
        skip_serializing_if = "Option::is_none"
    )]
    pub gas: Option<u64>,
    /// gas price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<U256>,
    /// transaction value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<U256>,
    /// transaction data
    #[serde(default, alias = "input", skip_serializing_if = "Option::is_none")]
    pub data: Option<Bytes>,
}
