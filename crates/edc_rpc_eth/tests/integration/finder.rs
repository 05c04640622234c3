use std::{
    future::Future,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use edc_rpc_eth::{BlockFinder, BlockFinderError, ClientConfig, EthRpcClient, Transport};
use edc_rpc_client::TransportError;
use url::Url;

/// Serves a synthetic chain of empty blocks, counting how many block
/// queries it answers.
#[derive(Debug)]
struct ChainStubTransport {
    url: Url,
    chain_head: u64,
    /// Heights above this answer `null`, emulating a node that
    /// advertises blocks it cannot serve.
    highest_stored: u64,
    block_queries: Arc<AtomicUsize>,
}

impl ChainStubTransport {
    fn new(chain_head: u64) -> Self {
        Self {
            url: "http://127.0.0.1:4000"
                .parse()
                .expect("hardcoded URL is valid"),
            chain_head,
            highest_stored: chain_head,
            block_queries: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn block_json(number: u64) -> serde_json::Value {
        serde_json::json!({
            "number": format!("0x{number:x}"),
            "hash": "0x7c5a35e9cb3e8ae0e221ab470abae9d446c3a5626ce6689fc777dcffcab52c70",
            "parentHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
            "nonce": "0x0000000000000042",
            "mixHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
            "sha3Uncles": "0x1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347",
            "logsBloom": format!("0x{}", "0".repeat(512)),
            "transactionsRoot": "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421",
            "stateRoot": "0xd7f8974fb5ac78d9ac099b9ad5018bedc2ce0a72dad1827a1709da30580f0544",
            "receiptsRoot": "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421",
            "miner": "0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae",
            "difficulty": "0x20000",
            "totalDifficulty": "0x20000",
            "extraData": "0x",
            "size": "0x21c",
            "gasLimit": "0x2fefd8",
            "gasUsed": "0x0",
            // One second per block, so that time is monotonic by height.
            "timestamp": format!("0x{:x}", 0x54e3_4e8eu64 + number),
            "transactions": [],
            "uncles": []
        })
    }

    fn respond(&self, request: &serde_json::Value) -> serde_json::Value {
        match request["method"].as_str() {
            Some("eth_blockNumber") => serde_json::json!(format!("0x{:x}", self.chain_head)),
            Some("eth_getBlockByNumber") => {
                self.block_queries.fetch_add(1, Ordering::Relaxed);

                let number = request["params"][0]
                    .as_str()
                    .and_then(|number| number.strip_prefix("0x"))
                    .and_then(|digits| u64::from_str_radix(digits, 16).ok())
                    .expect("finder queries blocks by number");

                if number <= self.highest_stored {
                    Self::block_json(number)
                } else {
                    serde_json::Value::Null
                }
            }
            method => unreachable!("Unexpected method: {method:?}"),
        }
    }
}

impl Transport for ChainStubTransport {
    fn url(&self) -> &Url {
        &self.url
    }

    fn post(
        &self,
        request_body: String,
    ) -> impl Future<Output = Result<String, TransportError>> + Send {
        let request: serde_json::Value =
            serde_json::from_str(&request_body).expect("request is JSON");

        let response = serde_json::json!({
            "jsonrpc": "2.0",
            "id": request["id"],
            "result": self.respond(&request),
        })
        .to_string();

        async move { Ok(response) }
    }
}

fn client_for(chain_head: u64) -> EthRpcClient<ChainStubTransport> {
    EthRpcClient::with_transport(ChainStubTransport::new(chain_head), &ClientConfig::default())
}

#[tokio::test]
async fn find_block_returns_the_lowest_match() {
    let client = client_for(32);
    let finder = BlockFinder::new(&client);

    let block = finder
        .find_block(|block| block.number.is_some_and(|number| number >= 17))
        .await
        .expect("should have found a block");

    assert_eq!(block.number, Some(17));
}

#[tokio::test]
async fn find_block_reaches_the_genesis_block() {
    let client = client_for(32);
    let finder = BlockFinder::new(&client);

    let block = finder
        .find_block(|_block| true)
        .await
        .expect("should have found a block");

    assert_eq!(block.number, Some(0));
}

#[tokio::test]
async fn find_block_reaches_the_chain_head() {
    let client = client_for(32);
    let finder = BlockFinder::new(&client);

    let block = finder
        .find_block(|block| block.number.is_some_and(|number| number >= 32))
        .await
        .expect("should have found a block");

    assert_eq!(block.number, Some(32));
}

#[tokio::test]
async fn find_block_searches_on_any_monotonic_block_property() {
    let client = client_for(32);
    let finder = BlockFinder::new(&client);

    let threshold = 0x54e3_4e8eu64 + 21;
    let block = finder
        .find_block(move |block| block.timestamp >= threshold)
        .await
        .expect("should have found a block");

    assert_eq!(block.number, Some(21));
}

#[tokio::test]
async fn find_block_reports_when_no_block_matches() {
    let client = client_for(32);
    let finder = BlockFinder::new(&client);

    let error = finder
        .find_block(|_block| false)
        .await
        .expect_err("no block should match");

    assert!(matches!(
        error,
        BlockFinderError::NotFound { searched: 32 }
    ));
}

#[tokio::test]
async fn find_block_issues_logarithmically_many_queries() {
    let transport = ChainStubTransport::new(1024);
    let block_queries = Arc::clone(&transport.block_queries);

    let client = EthRpcClient::with_transport(transport, &ClientConfig::default());
    let finder = BlockFinder::new(&client);

    let block = finder
        .find_block(|block| block.number.is_some_and(|number| number >= 1000))
        .await
        .expect("should have found a block");

    assert_eq!(block.number, Some(1000));

    // A bisection of 1025 candidates inspects at most ceil(log2(1025))
    // of them.
    assert!(block_queries.load(Ordering::Relaxed) <= 11);
}

#[tokio::test]
async fn missing_blocks_below_the_head_are_reported() {
    let mut transport = ChainStubTransport::new(32);
    transport.highest_stored = 10;

    let client = EthRpcClient::with_transport(transport, &ClientConfig::default());
    let finder = BlockFinder::new(&client);

    let error = finder
        .find_block(|_block| false)
        .await
        .expect_err("the node cannot serve the midpoint block");

    assert!(matches!(error, BlockFinderError::MissingBlock { .. }));
}

#[tokio::test]
async fn find_block_with_transaction_data_mirrors_the_search() {
    let client = client_for(32);
    let finder = BlockFinder::new(&client);

    let block = finder
        .find_block_with_transaction_data(|block| {
            block.number.is_some_and(|number| number >= 5)
        })
        .await
        .expect("should have found a block");

    assert_eq!(block.number, Some(5));
    assert!(block.transactions.is_empty());
}
