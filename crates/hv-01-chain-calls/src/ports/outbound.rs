//! # Outbound Ports
//!
//! Traits for the external chain client. The transport, ABI encoding and
//! any timeout policy live behind these traits.

use async_trait::async_trait;
use shared_types::{Address, BlockNumber};

use crate::domain::{
    AbiDescriptor, BatchCallResult, BatchCallSpec, BatchOptions, CallArg, CallValue,
    ChainCallError, PendingTransaction, TxOptions, TxReceipt,
};

/// Chain call adapter - outbound port.
///
/// Reads may be pinned to a historical block; writes carry explicit
/// [`TxOptions`].
#[async_trait]
pub trait ChainCallAdapter: Send + Sync {
    /// Invoke a read-only method.
    async fn read(
        &self,
        contract: Address,
        method: &str,
        args: &[CallArg],
        block: Option<BlockNumber>,
    ) -> Result<CallValue, ChainCallError>;

    /// Submit a state-changing transaction.
    async fn write(
        &self,
        contract: Address,
        method: &str,
        args: &[CallArg],
        options: &TxOptions,
    ) -> Result<PendingTransaction, ChainCallError>;

    /// Wait until the transaction is mined.
    async fn wait_for_receipt(
        &self,
        tx: &PendingTransaction,
    ) -> Result<TxReceipt, ChainCallError>;

    /// Current chain head.
    async fn block_number(&self) -> Result<BlockNumber, ChainCallError>;
}

/// Batched read - outbound port.
///
/// Results are aligned index-for-index with `specs`.
#[async_trait]
pub trait BatchCaller: Send + Sync {
    /// Execute all specs as one logical batch at a single block height.
    async fn batch_read(
        &self,
        abi: &AbiDescriptor,
        specs: &[BatchCallSpec],
        options: BatchOptions,
    ) -> Result<Vec<BatchCallResult>, ChainCallError>;

    /// Current chain head.
    async fn block_number(&self) -> Result<BlockNumber, ChainCallError>;
}
