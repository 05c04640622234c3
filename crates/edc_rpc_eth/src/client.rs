use edc_eth::{
    filter::{FilteredEvents, LogFilterOptions, OneOrMore},
    log::FilterLog,
    Address, BlockSpec, Bytes, B256, U256, U64,
};
use edc_rpc_client::{HeaderMap, HttpTransport, RpcClient, RpcClientError, Transport};
use tokio::sync::OnceCell;

use crate::{
    block::Block, call_request::CallRequest, request_methods::RequestMethod,
    transaction::Transaction, transaction_request::TransactionRequest,
};

/// The host the node listens on by default.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// The port the node's JSON-RPC interface listens on by default.
pub const DEFAULT_PORT: u16 = 4000;

/// Configuration of an [`EthRpcClient`].
///
/// The endpoint derived from `host`, `port`, and `use_tls` is fixed for
/// the lifetime of the client.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// The host of the remote node
    pub host: String,
    /// The port of the remote node's JSON-RPC interface
    pub port: u16,
    /// Whether to connect over HTTPS
    pub use_tls: bool,
    /// The account transactions are sent from. When absent, the node's
    /// coinbase is used.
    pub sender: Option<Address>,
    /// The gas filled into transactions that carry none. When absent,
    /// it is derived from the genesis block's gas limit.
    pub default_tx_gas: Option<u64>,
    /// Additional headers to send with every request
    pub extra_headers: Option<HeaderMap>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            use_tls: false,
            sender: None,
            default_tx_gas: None,
            extra_headers: None,
        }
    }
}

impl ClientConfig {
    /// The URL of the node's JSON-RPC endpoint.
    #[must_use]
    pub fn endpoint(&self) -> String {
        let scheme = if self.use_tls { "https" } else { "http" };
        format!("{scheme}://{}:{}", self.host, self.port)
    }
}

/// A client for the JSON-RPC interface of a remote Ethereum-style node.
///
/// Each method performs one RPC call and decodes the result; the only
/// state kept across calls are the coinbase, sender, and default
/// transaction gas values, each computed at most once per client
/// lifetime. The client never retries; callers own all retry and
/// timeout policy.
#[derive(Debug)]
pub struct EthRpcClient<TransportT: Transport = HttpTransport> {
    inner: RpcClient<RequestMethod, TransportT>,
    configured_sender: Option<Address>,
    configured_default_tx_gas: Option<u64>,
    cached_coinbase: OnceCell<Address>,
    cached_sender: OnceCell<Address>,
    cached_default_tx_gas: OnceCell<u64>,
}

impl EthRpcClient<HttpTransport> {
    /// Creates a new instance that connects to the configured endpoint
    /// over HTTP.
    pub fn new(config: ClientConfig) -> Result<Self, RpcClientError> {
        let inner = RpcClient::new(&config.endpoint(), config.extra_headers.clone())?;
        Ok(Self::with_inner(inner, &config))
    }
}

impl<TransportT: Transport> EthRpcClient<TransportT> {
    /// Creates a new instance that exchanges requests over the provided
    /// transport. The configured host and port are ignored.
    pub fn with_transport(transport: TransportT, config: &ClientConfig) -> Self {
        Self::with_inner(RpcClient::with_transport(transport), config)
    }

    fn with_inner(inner: RpcClient<RequestMethod, TransportT>, config: &ClientConfig) -> Self {
        Self {
            inner,
            configured_sender: config.sender,
            configured_default_tx_gas: config.default_tx_gas,
            cached_coinbase: OnceCell::new(),
            cached_sender: OnceCell::new(),
            cached_default_tx_gas: OnceCell::new(),
        }
    }

    /// Calls `eth_accounts` and returns the accounts managed by the
    /// node.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn accounts(&self) -> Result<Vec<Address>, RpcClientError> {
        self.inner.call(RequestMethod::Accounts(())).await
    }

    /// Calls `eth_blockNumber` and returns the block number. A reply
    /// that does not fit 64 bits fails as an invalid response.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn block_number(&self) -> Result<u64, RpcClientError> {
        let block_number: U64 = self.inner.call(RequestMethod::BlockNumber(())).await?;
        Ok(block_number.to::<u64>())
    }

    /// Calls `eth_call` and returns the return data of the executed
    /// message call. The block defaults to `pending`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn call(
        &self,
        call_request: CallRequest,
        block: Option<BlockSpec>,
    ) -> Result<Bytes, RpcClientError> {
        self.inner
            .call(RequestMethod::Call(
                call_request,
                block.unwrap_or_else(BlockSpec::pending),
            ))
            .await
    }

    /// Calls `eth_coinbase` and returns the node's coinbase address,
    /// computed at most once per client lifetime.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn coinbase(&self) -> Result<Address, RpcClientError> {
        self.cached_coinbase
            .get_or_try_init(|| async { self.inner.call(RequestMethod::Coinbase(())).await })
            .await
            .copied()
    }

    /// Returns the gas filled into transactions that carry none: the
    /// configured value if one was supplied, otherwise one less than
    /// the genesis block's gas limit. Computed at most once per client
    /// lifetime.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn default_tx_gas(&self) -> Result<u64, RpcClientError> {
        if let Some(gas) = self.configured_default_tx_gas {
            return Ok(gas);
        }

        self.cached_default_tx_gas
            .get_or_try_init(|| async {
                // A functioning node always has a genesis block; a
                // `null` reply fails to parse and surfaces as an
                // invalid response.
                let genesis: Block<B256> = self
                    .inner
                    .call(RequestMethod::GetBlockByNumber(BlockSpec::earliest(), false))
                    .await?;

                Ok(genesis.gas_limit.saturating_sub(1))
            })
            .await
            .copied()
    }

    /// Calls `eth_estimateGas` and returns the estimate. The block
    /// defaults to `pending`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn estimate_gas(
        &self,
        call_request: CallRequest,
        block: Option<BlockSpec>,
    ) -> Result<u64, RpcClientError> {
        let estimate: U64 = self
            .inner
            .call(RequestMethod::EstimateGas(
                call_request,
                block.unwrap_or_else(BlockSpec::pending),
            ))
            .await?;

        Ok(estimate.to::<u64>())
    }

    /// Calls `eth_gasLimit` and returns the current block gas limit.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn gas_limit(&self) -> Result<u64, RpcClientError> {
        let gas_limit: U64 = self.inner.call(RequestMethod::GasLimit(())).await?;
        Ok(gas_limit.to::<u64>())
    }

    /// Calls `eth_getBalance` and returns the account's balance. The
    /// block defaults to `pending`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_balance(
        &self,
        address: Address,
        block: Option<BlockSpec>,
    ) -> Result<U256, RpcClientError> {
        self.inner
            .call(RequestMethod::GetBalance(
                address,
                block.unwrap_or_else(BlockSpec::pending),
            ))
            .await
    }

    /// Calls `eth_getBlockByNumber` and returns the block with
    /// transaction hashes, or `None` when no block exists at that
    /// height.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_block_by_number(
        &self,
        spec: BlockSpec,
    ) -> Result<Option<Block<B256>>, RpcClientError> {
        self.inner
            .call(RequestMethod::GetBlockByNumber(spec, false))
            .await
    }

    /// Calls `eth_getBlockByNumber` and returns the block with full
    /// transaction objects, or `None` when no block exists at that
    /// height.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_block_by_number_with_transaction_data(
        &self,
        spec: BlockSpec,
    ) -> Result<Option<Block<Transaction>>, RpcClientError> {
        self.inner
            .call(RequestMethod::GetBlockByNumber(spec, true))
            .await
    }

    /// Calls `eth_getFilterChanges` and returns the events that
    /// occurred since the last poll of the filter.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_filter_changes(
        &self,
        filter_id: U256,
    ) -> Result<FilteredEvents, RpcClientError> {
        self.inner
            .call(RequestMethod::GetFilterChanges(filter_id))
            .await
    }

    /// Calls `eth_getFilterLogs` and returns all logs matching the
    /// filter.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_filter_logs(&self, filter_id: U256) -> Result<Vec<FilterLog>, RpcClientError> {
        self.inner.call(RequestMethod::GetFilterLogs(filter_id)).await
    }

    /// Calls `eth_getTransactionCount` and returns the account's nonce.
    /// The block defaults to `pending`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_transaction_count(
        &self,
        address: Address,
        block: Option<BlockSpec>,
    ) -> Result<U256, RpcClientError> {
        self.inner
            .call(RequestMethod::GetTransactionCount(
                address,
                block.unwrap_or_else(BlockSpec::pending),
            ))
            .await
    }

    /// Calls `eth_lastGasPrice` and returns the gas price of the last
    /// mined block.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn last_gas_price(&self) -> Result<U256, RpcClientError> {
        self.inner.call(RequestMethod::LastGasPrice(())).await
    }

    /// Calls `eth_newBlockFilter` and returns the id of the created
    /// filter.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn new_block_filter(&self) -> Result<U256, RpcClientError> {
        self.inner.call(RequestMethod::NewBlockFilter(())).await
    }

    /// Calls `eth_newFilter` with the provided criteria and returns the
    /// id of the created filter. Block endpoints are forwarded to the
    /// node uninterpreted; the id is the only state the caller holds.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn new_log_filter(
        &self,
        from_block: BlockSpec,
        to_block: BlockSpec,
        address: Option<OneOrMore<Address>>,
        topics: Option<Vec<Option<OneOrMore<B256>>>>,
    ) -> Result<U256, RpcClientError> {
        self.inner
            .call(RequestMethod::NewFilter(LogFilterOptions {
                from_block: Some(from_block),
                to_block: Some(to_block),
                address,
                topics,
            }))
            .await
    }

    /// Calls `eth_newPendingTransactionFilter` and returns the id of
    /// the created filter.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn new_pending_transaction_filter(&self) -> Result<U256, RpcClientError> {
        self.inner
            .call(RequestMethod::NewPendingTransactionFilter(()))
            .await
    }

    /// Calls `eth_sendTransaction` and returns the hash of the
    /// submitted transaction. A request without gas is filled in with
    /// [`Self::default_tx_gas`] before submission.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self, transaction_request)))]
    pub async fn send_transaction(
        &self,
        mut transaction_request: TransactionRequest,
    ) -> Result<B256, RpcClientError> {
        if transaction_request.gas.is_none() {
            transaction_request.gas = Some(self.default_tx_gas().await?);
        }

        self.inner
            .call(RequestMethod::SendTransaction(transaction_request))
            .await
    }

    /// Returns the account transactions are sent from: the configured
    /// sender if one was supplied, otherwise the node's coinbase.
    /// Computed at most once per client lifetime.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn sender(&self) -> Result<Address, RpcClientError> {
        if let Some(sender) = self.configured_sender {
            return Ok(sender);
        }

        self.cached_sender
            .get_or_try_init(|| self.coinbase())
            .await
            .copied()
    }

    /// Calls `eth_uninstallFilter` and returns whether the node had the
    /// filter registered.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn uninstall_filter(&self, filter_id: U256) -> Result<bool, RpcClientError> {
        self.inner
            .call(RequestMethod::UninstallFilter(filter_id))
            .await
    }

    /// The URL of the remote node.
    pub fn url(&self) -> &url::Url {
        self.inner.url()
    }
}
