use edc_eth::{Address, BlockSpec, B256, U256};
use edc_rpc_eth::{
    ClientConfig, EthRpcClient, HttpTransport, RpcClientError, TransactionRequest, TransportError,
};
use mockito::{Matcher, ServerGuard};
use reqwest::StatusCode;

fn client_for(server: &ServerGuard, config: &ClientConfig) -> EthRpcClient {
    let transport = HttpTransport::new(&server.url(), None).expect("server URL is valid");
    EthRpcClient::with_transport(transport, config)
}

/// A genesis-shaped block with the provided gas limit.
fn block_json(gas_limit: u64) -> serde_json::Value {
    serde_json::json!({
        "number": "0x0",
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
        "gasLimit": format!("0x{gas_limit:x}"),
        "gasUsed": "0x0",
        "timestamp": "0x54e34e8e",
        "transactions": [],
        "uncles": []
    })
}

fn result_json(id: u64, result: serde_json::Value) -> String {
    serde_json::json!({"jsonrpc": "2.0", "id": id, "result": result}).to_string()
}

#[tokio::test]
async fn block_number_reports_the_chain_head() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(
            serde_json::json!({"method": "eth_blockNumber"}),
        ))
        .with_body(result_json(0, serde_json::json!("0x20")))
        .create_async()
        .await;

    let block_number = client_for(&server, &ClientConfig::default())
        .block_number()
        .await
        .expect("should have succeeded");

    assert_eq!(block_number, 32);
    mock.assert_async().await;
}

#[tokio::test]
async fn balance_of_an_unfunded_address_is_zero() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "method": "eth_getBalance",
            "params": ["0xffffffffffffffffffffffffffffffffffffffff", "pending"]
        })))
        .with_body(result_json(0, serde_json::json!("0x0")))
        .create_async()
        .await;

    let address = Address::repeat_byte(0xff);
    let balance = client_for(&server, &ClientConfig::default())
        .get_balance(address, None)
        .await
        .expect("should have succeeded");

    assert_eq!(balance, U256::ZERO);
    mock.assert_async().await;
}

#[tokio::test]
async fn default_tx_gas_is_derived_from_the_genesis_block_once() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "method": "eth_getBlockByNumber",
            "params": ["earliest", false]
        })))
        .with_body(result_json(0, block_json(3_141_592)))
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server, &ClientConfig::default());

    let first = client
        .default_tx_gas()
        .await
        .expect("should have succeeded");
    let second = client
        .default_tx_gas()
        .await
        .expect("should have succeeded");

    assert_eq!(first, 3_141_591);
    assert_eq!(second, 3_141_591);
    mock.assert_async().await;
}

#[tokio::test]
async fn block_numbers_above_64_bits_are_an_invalid_response() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(
            serde_json::json!({"method": "eth_blockNumber"}),
        ))
        .with_body(result_json(0, serde_json::json!("0x10000000000000000")))
        .create_async()
        .await;

    let error = client_for(&server, &ClientConfig::default())
        .block_number()
        .await
        .expect_err("the chain head must fit 64 bits");

    assert!(matches!(error, RpcClientError::InvalidResponse { .. }));
    mock.assert_async().await;
}

#[tokio::test]
async fn default_tx_gas_does_not_underflow_on_a_zero_gas_limit() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "method": "eth_getBlockByNumber",
            "params": ["earliest", false]
        })))
        .with_body(result_json(0, block_json(0)))
        .create_async()
        .await;

    let gas = client_for(&server, &ClientConfig::default())
        .default_tx_gas()
        .await
        .expect("should have succeeded");

    assert_eq!(gas, 0);
    mock.assert_async().await;
}

#[tokio::test]
async fn default_tx_gas_prefers_the_configured_value() {
    // No mocks: any request would fail the test.
    let server = mockito::Server::new_async().await;

    let config = ClientConfig {
        default_tx_gas: Some(30_000),
        ..ClientConfig::default()
    };

    let gas = client_for(&server, &config)
        .default_tx_gas()
        .await
        .expect("should have succeeded");

    assert_eq!(gas, 30_000);
}

#[tokio::test]
async fn send_transaction_fills_in_the_default_gas() {
    let mut server = mockito::Server::new_async().await;

    const HASH: &str = "0x3dc91b98249fa9f2c5c37486a2427a3a7825be240c1c84961dfb3063d9c04d50";

    let genesis_mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(
            serde_json::json!({"method": "eth_getBlockByNumber"}),
        ))
        .with_body(result_json(0, block_json(3_141_592)))
        .create_async()
        .await;

    let send_mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "method": "eth_sendTransaction",
            "params": [{"gas": "0x2fefd7"}]
        })))
        .with_body(result_json(1, serde_json::json!(HASH)))
        .create_async()
        .await;

    let request = TransactionRequest::transfer(
        "0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae"
            .parse()
            .expect("hardcoded address is valid"),
        Address::repeat_byte(0xff),
        U256::from(100u64),
    );

    let hash = client_for(&server, &ClientConfig::default())
        .send_transaction(request)
        .await
        .expect("should have succeeded");

    assert_eq!(hash, HASH.parse::<B256>().expect("hardcoded hash is valid"));
    genesis_mock.assert_async().await;
    send_mock.assert_async().await;
}

#[tokio::test]
async fn send_transaction_keeps_explicit_gas() {
    let mut server = mockito::Server::new_async().await;

    const HASH: &str = "0x3dc91b98249fa9f2c5c37486a2427a3a7825be240c1c84961dfb3063d9c04d50";

    let send_mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "method": "eth_sendTransaction",
            "params": [{"gas": "0x5208"}]
        })))
        .with_body(result_json(0, serde_json::json!(HASH)))
        .create_async()
        .await;

    let request = TransactionRequest {
        gas: Some(21_000),
        ..TransactionRequest::transfer(
            "0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae"
                .parse()
                .expect("hardcoded address is valid"),
            Address::repeat_byte(0xff),
            U256::from(100u64),
        )
    };

    client_for(&server, &ClientConfig::default())
        .send_transaction(request)
        .await
        .expect("should have succeeded");

    send_mock.assert_async().await;
}

#[tokio::test]
async fn sender_falls_back_to_the_coinbase_once() {
    let mut server = mockito::Server::new_async().await;

    const COINBASE: &str = "0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae";

    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(
            serde_json::json!({"method": "eth_coinbase"}),
        ))
        .with_body(result_json(0, serde_json::json!(COINBASE)))
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server, &ClientConfig::default());

    let first = client.sender().await.expect("should have succeeded");
    let second = client.sender().await.expect("should have succeeded");

    let coinbase: Address = COINBASE.parse().expect("hardcoded address is valid");
    assert_eq!(first, coinbase);
    assert_eq!(second, coinbase);
    mock.assert_async().await;
}

#[tokio::test]
async fn sender_prefers_the_configured_value() {
    // No mocks: any request would fail the test.
    let server = mockito::Server::new_async().await;

    let configured = Address::repeat_byte(0x11);
    let config = ClientConfig {
        sender: Some(configured),
        ..ClientConfig::default()
    };

    let sender = client_for(&server, &config)
        .sender()
        .await
        .expect("should have succeeded");

    assert_eq!(sender, configured);
}

#[tokio::test]
async fn filters_are_created_and_uninstalled_by_id() {
    let mut server = mockito::Server::new_async().await;

    let new_filter_mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "method": "eth_newFilter",
            "params": [{"fromBlock": "0x0", "toBlock": "latest"}]
        })))
        .with_body(result_json(0, serde_json::json!("0x1")))
        .create_async()
        .await;

    let uninstall_mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "method": "eth_uninstallFilter",
            "params": ["0x1"]
        })))
        .with_body(result_json(1, serde_json::json!(true)))
        .create_async()
        .await;

    let client = client_for(&server, &ClientConfig::default());

    let filter_id = client
        .new_log_filter(BlockSpec::Number(0), BlockSpec::latest(), None, None)
        .await
        .expect("should have succeeded");
    assert_eq!(filter_id, U256::from(1u64));

    let uninstalled = client
        .uninstall_filter(filter_id)
        .await
        .expect("should have succeeded");
    assert!(uninstalled);

    new_filter_mock.assert_async().await;
    uninstall_mock.assert_async().await;
}

#[tokio::test]
async fn polling_a_quiet_filter_reports_no_events() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "method": "eth_getFilterChanges",
            "params": ["0x1"]
        })))
        .with_body(result_json(0, serde_json::json!([])))
        .create_async()
        .await;

    let events = client_for(&server, &ClientConfig::default())
        .get_filter_changes(U256::from(1u64))
        .await
        .expect("should have succeeded");

    assert_eq!(events.into_logs(), Some(Vec::new()));
    mock.assert_async().await;
}

#[tokio::test]
async fn http_status_errors_are_reported() {
    const STATUS_CODE: u16 = 400;

    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .with_status(STATUS_CODE.into())
        .with_header("content-type", "text/plain")
        .create_async()
        .await;

    let error = client_for(&server, &ClientConfig::default())
        .block_number()
        .await
        .expect_err("should have failed due to a HTTP status error");

    if let RpcClientError::Transport(TransportError::HttpStatus(error)) = error {
        assert_eq!(
            error.status(),
            Some(StatusCode::from_u16(STATUS_CODE).unwrap())
        );
    } else {
        unreachable!("Invalid error: {error}");
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn node_rejections_are_reported_with_code_and_message() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .with_body(
            serde_json::json!({
                "jsonrpc": "2.0",
                "id": 0,
                "error": {"code": -32602, "message": "Invalid params"}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let error = client_for(&server, &ClientConfig::default())
        .block_number()
        .await
        .expect_err("should have failed with a JSON-RPC error");

    if let RpcClientError::JsonRpcError { error, .. } = error {
        assert_eq!(error.code, -32602);
        assert_eq!(error.message, "Invalid params");
    } else {
        unreachable!("Invalid error: {error}");
    }

    mock.assert_async().await;
}
