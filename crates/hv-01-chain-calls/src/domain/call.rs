//! # Call Descriptors
//!
//! Value types describing contract reads, writes and batched reads.

use serde::{Deserialize, Serialize};
use shared_types::{Address, BlockNumber, TxHash, U256};

use super::errors::ChainCallError;

/// A typed contract-call argument.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallArg {
    /// Unsigned integer (uint256 and narrower).
    Uint(U256),
    /// Address argument.
    Address(Address),
    /// Boolean argument.
    Bool(bool),
}

impl From<U256> for CallArg {
    fn from(value: U256) -> Self {
        CallArg::Uint(value)
    }
}

impl From<u64> for CallArg {
    fn from(value: u64) -> Self {
        CallArg::Uint(U256::from(value))
    }
}

impl From<Address> for CallArg {
    fn from(value: Address) -> Self {
        CallArg::Address(value)
    }
}

/// A decoded contract-call return value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallValue {
    /// Unsigned integer.
    Uint(U256),
    /// Address.
    Address(Address),
    /// Boolean.
    Bool(bool),
    /// Raw bytes.
    Bytes(Vec<u8>),
}

impl CallValue {
    /// Interpret as an unsigned integer.
    pub fn as_u256(&self, method: &str) -> Result<U256, ChainCallError> {
        match self {
            CallValue::Uint(value) => Ok(*value),
            other => Err(ChainCallError::Decode {
                method: method.to_string(),
                reason: format!("expected uint, got {other:?}"),
            }),
        }
    }
}

/// Transaction options passed explicitly to every write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxOptions {
    /// Gas limit for the transaction.
    pub gas_limit: u64,
    /// Native value attached to the call.
    pub value: Option<U256>,
}

impl TxOptions {
    /// Attach native value (builder style).
    pub fn with_value(mut self, value: U256) -> Self {
        self.value = Some(value);
        self
    }
}

/// Handle to a submitted transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingTransaction {
    /// Transaction hash.
    pub hash: TxHash,
}

/// Mined transaction receipt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxReceipt {
    /// Transaction hash.
    pub hash: TxHash,
    /// Block the transaction was included in.
    pub block_number: BlockNumber,
    /// `true` when execution succeeded.
    pub status: bool,
}

/// Method names available on a contract interface.
///
/// Only the names matter to the batch reader; encoding is the adapter's job.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AbiDescriptor {
    methods: Vec<String>,
}

impl AbiDescriptor {
    /// Create from method names.
    pub fn new<I, S>(methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            methods: methods.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if the interface exposes `method`.
    pub fn has_method(&self, method: &str) -> bool {
        self.methods.iter().any(|m| m == method)
    }

    /// Read-only views of the v2 sous chef contract.
    pub fn sous_chef_v2() -> Self {
        Self::new(["startBlock", "bonusEndBlock", "rewardPerBlock", "poolLimitPerUser"])
    }
}

/// One unit of a batched read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchCallSpec {
    /// Target contract.
    pub target: Address,
    /// Method name.
    pub method: String,
    /// Call arguments.
    pub args: Vec<CallArg>,
}

impl BatchCallSpec {
    /// Spec without arguments.
    pub fn new(target: Address, method: impl Into<String>) -> Self {
        Self {
            target,
            method: method.into(),
            args: Vec::new(),
        }
    }

    /// Attach arguments (builder style).
    pub fn with_args(mut self, args: Vec<CallArg>) -> Self {
        self.args = args;
        self
    }
}

/// Outcome of one batched call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BatchCallResult {
    /// Call succeeded.
    Success(CallValue),
    /// Call reverted or failed to decode.
    Failure(ChainCallError),
}

impl BatchCallResult {
    /// Check if this call succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, BatchCallResult::Success(_))
    }

    /// Successful value, if any.
    pub fn value(&self) -> Option<&CallValue> {
        match self {
            BatchCallResult::Success(value) => Some(value),
            BatchCallResult::Failure(_) => None,
        }
    }
}

/// Options for a batched read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchOptions {
    /// Fail the whole batch on the first failing call.
    pub require_success: bool,
    /// Pin every call to this block; `None` means the current head.
    pub block_number: Option<BlockNumber>,
}

impl BatchOptions {
    /// Tolerate per-call failures.
    pub fn permissive() -> Self {
        Self::default()
    }

    /// Fail on any per-call failure.
    pub fn strict() -> Self {
        Self {
            require_success: true,
            block_number: None,
        }
    }

    /// Pin to a block (builder style).
    pub fn at_block(mut self, block: BlockNumber) -> Self {
        self.block_number = Some(block);
        self
    }
}
