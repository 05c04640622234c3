#![warn(missing_docs)]

//! ABI-driven proxy for calling on-chain contracts
//!
//! A [`Contract`] binds an ABI description and a contract address to a
//! client. Each ABI function becomes invocable by name: arguments are
//! ABI-encoded into calldata, submitted through the client, and the
//! return data is decoded against the function's declared outputs.

use std::collections::HashMap;

use alloy_dyn_abi::{DynSolValue, FunctionExt, JsonAbiExt};
use alloy_json_abi::{Function, JsonAbi, StateMutability};
use edc_eth::{Address, B256};
use edc_rpc_eth::{
    CallRequest, EthRpcClient, HttpTransport, RpcClientError, TransactionRequest, Transport,
};

/// Specialized error types for contract invocations.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// The arguments do not match the function's declared inputs.
    #[error("Invalid arguments for function '{name}': {source}")]
    Arguments {
        /// The name of the invoked function
        name: String,
        /// The encoding error
        source: alloy_dyn_abi::Error,
    },

    /// The underlying RPC call failed.
    #[error(transparent)]
    Client(#[from] RpcClientError),

    /// The return data does not match the function's declared outputs.
    #[error("Failed to decode the return data of function '{name}': {source}")]
    Decode {
        /// The name of the invoked function
        name: String,
        /// The decoding error
        source: alloy_dyn_abi::Error,
    },

    /// The ABI declares no function with the invoked name.
    #[error("The contract has no function named '{0}'")]
    UnknownFunction(String),
}

/// The outcome of [`Contract::invoke`].
#[derive(Clone, Debug, PartialEq)]
pub enum Invocation {
    /// The decoded return values of a read-only call, in declaration
    /// order.
    Returned(Vec<DynSolValue>),
    /// The hash of the transaction submitted for a state-changing
    /// call.
    Submitted(B256),
}

/// A contract bound to an on-chain address.
///
/// The name-to-function table is built once at bind time; invocations
/// are stateless beyond that table. When the ABI overloads a name, the
/// first declaration wins.
#[derive(Debug)]
pub struct Contract<'client, TransportT: Transport = HttpTransport> {
    address: Address,
    functions: HashMap<String, Function>,
    client: &'client EthRpcClient<TransportT>,
}

impl<'client, TransportT: Transport> Contract<'client, TransportT> {
    /// Binds the provided ABI and contract address to a client.
    pub fn new(abi: &JsonAbi, address: Address, client: &'client EthRpcClient<TransportT>) -> Self {
        let mut functions = HashMap::new();
        for function in abi.functions() {
            functions
                .entry(function.name.clone())
                .or_insert_with(|| function.clone());
        }

        Self {
            address,
            functions,
            client,
        }
    }

    /// The address the contract is bound to.
    pub fn address(&self) -> Address {
        self.address
    }

    /// The names of the contract's invocable functions, in no
    /// particular order.
    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    /// Invokes the named function, routing by its state mutability:
    /// read-only functions execute as a message call, state-changing
    /// functions are submitted as a transaction.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self, arguments)))]
    pub async fn invoke(
        &self,
        name: &str,
        arguments: &[DynSolValue],
    ) -> Result<Invocation, ContractError> {
        let function = self.function(name)?;

        match function.state_mutability {
            StateMutability::Pure | StateMutability::View => {
                self.call(name, arguments).await.map(Invocation::Returned)
            }
            StateMutability::NonPayable | StateMutability::Payable => self
                .transact(name, arguments)
                .await
                .map(Invocation::Submitted),
        }
    }

    /// Executes the named function as a read-only message call and
    /// returns its decoded return values, in declaration order.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self, arguments)))]
    pub async fn call(
        &self,
        name: &str,
        arguments: &[DynSolValue],
    ) -> Result<Vec<DynSolValue>, ContractError> {
        let function = self.function(name)?;
        let calldata = Self::encode_input(function, arguments)?;

        let return_data = self
            .client
            .call(
                CallRequest {
                    to: Some(self.address),
                    data: Some(calldata.into()),
                    ..CallRequest::default()
                },
                None,
            )
            .await?;

        function
            .abi_decode_output(&return_data)
            .map_err(|source| ContractError::Decode {
                name: function.name.clone(),
                source,
            })
    }

    /// Submits the named function as a state-changing transaction from
    /// the client's sender account and returns the transaction hash.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self, arguments)))]
    pub async fn transact(
        &self,
        name: &str,
        arguments: &[DynSolValue],
    ) -> Result<B256, ContractError> {
        let function = self.function(name)?;
        let calldata = Self::encode_input(function, arguments)?;

        let sender = self.client.sender().await?;

        let transaction_hash = self
            .client
            .send_transaction(TransactionRequest {
                from: sender,
                to: Some(self.address),
                gas: None,
                gas_price: None,
                value: None,
                data: Some(calldata.into()),
                nonce: None,
            })
            .await?;

        Ok(transaction_hash)
    }

    fn function(&self, name: &str) -> Result<&Function, ContractError> {
        self.functions
            .get(name)
            .ok_or_else(|| ContractError::UnknownFunction(name.to_string()))
    }

    /// Encodes the selector and arguments into one calldata payload.
    /// Argument count and type mismatches surface as encoding errors.
    fn encode_input(
        function: &Function,
        arguments: &[DynSolValue],
    ) -> Result<Vec<u8>, ContractError> {
        function
            .abi_encode_input(arguments)
            .map_err(|source| ContractError::Arguments {
                name: function.name.clone(),
                source,
            })
    }
}
