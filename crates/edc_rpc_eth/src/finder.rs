use edc_eth::{BlockSpec, B256};
use edc_rpc_client::{RpcClientError, Transport};

use crate::{block::Block, client::EthRpcClient, transaction::Transaction};

/// Specialized error types for block searches.
#[derive(Debug, thiserror::Error)]
pub enum BlockFinderError {
    /// The underlying RPC call failed.
    #[error(transparent)]
    Client(#[from] RpcClientError),

    /// The node reported no block at a height at or below the chain
    /// head.
    #[error("The node reported no block at height {number}")]
    MissingBlock {
        /// The height of the missing block
        number: u64,
    },

    /// No block within the searched range satisfies the predicate.
    #[error("No block in the range 0..={searched} satisfies the predicate")]
    NotFound {
        /// The chain head at the time of the search
        searched: u64,
    },
}

/// Searches the chain for the lowest block satisfying a predicate.
///
/// The predicate must be monotonic over the block number: false for
/// every block below some threshold and true at and above it. The
/// search bisects the range from the genesis block to the current
/// chain head, so it issues a number of queries logarithmic in the
/// chain height. Non-monotonic predicates select an unspecified
/// matching block.
///
/// The finder never waits for the chain to grow; callers that expect a
/// future block own the retry loop.
#[derive(Debug)]
pub struct BlockFinder<'client, TransportT: Transport> {
    client: &'client EthRpcClient<TransportT>,
}

impl<'client, TransportT: Transport> BlockFinder<'client, TransportT> {
    /// Creates a new instance that searches through the provided
    /// client.
    pub fn new(client: &'client EthRpcClient<TransportT>) -> Self {
        Self { client }
    }

    /// Returns the lowest block, with transaction hashes, that
    /// satisfies the predicate.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
    pub async fn find_block<PredicateT>(
        &self,
        predicate: PredicateT,
    ) -> Result<Block<B256>, BlockFinderError>
    where
        PredicateT: Fn(&Block<B256>) -> bool,
    {
        self.bisect(predicate, |number| {
            self.client.get_block_by_number(BlockSpec::Number(number))
        })
        .await
    }

    /// Returns the lowest block, with full transaction objects, that
    /// satisfies the predicate.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
    pub async fn find_block_with_transaction_data<PredicateT>(
        &self,
        predicate: PredicateT,
    ) -> Result<Block<Transaction>, BlockFinderError>
    where
        PredicateT: Fn(&Block<Transaction>) -> bool,
    {
        self.bisect(predicate, |number| {
            self.client
                .get_block_by_number_with_transaction_data(BlockSpec::Number(number))
        })
        .await
    }

    async fn bisect<BlockT, PredicateT, GetBlockT, GetBlockFutureT>(
        &self,
        predicate: PredicateT,
        get_block: GetBlockT,
    ) -> Result<BlockT, BlockFinderError>
    where
        PredicateT: Fn(&BlockT) -> bool,
        GetBlockT: Fn(u64) -> GetBlockFutureT,
        GetBlockFutureT: std::future::Future<Output = Result<Option<BlockT>, RpcClientError>>,
    {
        let chain_head = self.client.block_number().await?;

        let mut low = 0;
        let mut high = chain_head;
        let mut lowest_match = None;

        while low <= high {
            let midpoint = low + (high - low) / 2;

            let block = get_block(midpoint)
                .await?
                .ok_or(BlockFinderError::MissingBlock { number: midpoint })?;

            if predicate(&block) {
                lowest_match = Some(block);
                if midpoint == 0 {
                    break;
                }
                high = midpoint - 1;
            } else {
                low = midpoint + 1;
            }
        }

        lowest_match.ok_or(BlockFinderError::NotFound {
            searched: chain_head,
        })
    }
}
