use edc_eth::{filter::LogFilterOptions, Address, BlockSpec, U256};
use edc_rpc_client::RpcMethod;
use serde::{Deserialize, Serialize};

use crate::{call_request::CallRequest, transaction_request::TransactionRequest};

/// Methods for requests to a remote node.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "method", content = "params")]
pub enum RequestMethod {
    /// `eth_accounts`
    #[serde(rename = "eth_accounts", with = "edc_eth::serde::empty_params")]
    Accounts(()),
    /// `eth_blockNumber`
    #[serde(rename = "eth_blockNumber", with = "edc_eth::serde::empty_params")]
    BlockNumber(()),
    /// `eth_call`
    #[serde(rename = "eth_call")]
    Call(CallRequest, BlockSpec),
    /// `eth_coinbase`
    #[serde(rename = "eth_coinbase", with = "edc_eth::serde::empty_params")]
    Coinbase(()),
    /// `eth_estimateGas`
    #[serde(rename = "eth_estimateGas")]
    EstimateGas(CallRequest, BlockSpec),
    /// `eth_gasLimit`
    #[serde(rename = "eth_gasLimit", with = "edc_eth::serde::empty_params")]
    GasLimit(()),
    /// `eth_getBalance`
    #[serde(rename = "eth_getBalance")]
    GetBalance(Address, BlockSpec),
    /// `eth_getBlockByNumber`
    #[serde(rename = "eth_getBlockByNumber")]
    GetBlockByNumber(BlockSpec, bool),
    /// `eth_getFilterChanges`
    #[serde(rename = "eth_getFilterChanges", with = "edc_eth::serde::sequence")]
    GetFilterChanges(U256),
    /// `eth_getFilterLogs`
    #[serde(rename = "eth_getFilterLogs", with = "edc_eth::serde::sequence")]
    GetFilterLogs(U256),
    /// `eth_getTransactionCount`
    #[serde(rename = "eth_getTransactionCount")]
    GetTransactionCount(Address, BlockSpec),
    /// `eth_lastGasPrice`
    #[serde(rename = "eth_lastGasPrice", with = "edc_eth::serde::empty_params")]
    LastGasPrice(()),
    /// `eth_newBlockFilter`
    #[serde(rename = "eth_newBlockFilter", with = "edc_eth::serde::empty_params")]
    NewBlockFilter(()),
    /// `eth_newFilter`
    #[serde(rename = "eth_newFilter", with = "edc_eth::serde::sequence")]
    NewFilter(LogFilterOptions),
    /// `eth_newPendingTransactionFilter`
    #[serde(
        rename = "eth_newPendingTransactionFilter",
        with = "edc_eth::serde::empty_params"
    )]
    NewPendingTransactionFilter(()),
    /// `eth_sendTransaction`
    #[serde(rename = "eth_sendTransaction", with = "edc_eth::serde::sequence")]
    SendTransaction(TransactionRequest),
    /// `eth_uninstallFilter`
    #[serde(rename = "eth_uninstallFilter", with = "edc_eth::serde::sequence")]
    UninstallFilter(U256),
}

impl RpcMethod for RequestMethod {
    fn name(&self) -> &'static str {
        match self {
            RequestMethod::Accounts(_) => "eth_accounts",
            RequestMethod::BlockNumber(_) => "eth_blockNumber",
            RequestMethod::Call(_, _) => "eth_call",
            RequestMethod::Coinbase(_) => "eth_coinbase",
            RequestMethod::EstimateGas(_, _) => "eth_estimateGas",
            RequestMethod::GasLimit(_) => "eth_gasLimit",
            RequestMethod::GetBalance(_, _) => "eth_getBalance",
            RequestMethod::GetBlockByNumber(_, _) => "eth_getBlockByNumber",
            RequestMethod::GetFilterChanges(_) => "eth_getFilterChanges",
            RequestMethod::GetFilterLogs(_) => "eth_getFilterLogs",
            RequestMethod::GetTransactionCount(_, _) => "eth_getTransactionCount",
            RequestMethod::LastGasPrice(_) => "eth_lastGasPrice",
            RequestMethod::NewBlockFilter(_) => "eth_newBlockFilter",
            RequestMethod::NewFilter(_) => "eth_newFilter",
            RequestMethod::NewPendingTransactionFilter(_) => "eth_newPendingTransactionFilter",
            RequestMethod::SendTransaction(_) => "eth_sendTransaction",
            RequestMethod::UninstallFilter(_) => "eth_uninstallFilter",
        }
    }
}
