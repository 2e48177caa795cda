//! In-Memory Chain Adapter
//!
//! Implements `ChainCallAdapter` against a scripted contract table.
//! Used by tests across the workspace in place of a live node.

use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{Address, BlockNumber, TxHash, U256};
use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::domain::{
    CallArg, CallValue, ChainCallError, PendingTransaction, TxOptions, TxReceipt,
};
use crate::ports::ChainCallAdapter;

/// A write captured by [`InMemoryChain`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedWrite {
    /// Target contract.
    pub contract: Address,
    /// Method name.
    pub method: String,
    /// Arguments as passed.
    pub args: Vec<CallArg>,
    /// Options as passed.
    pub options: TxOptions,
}

/// In-memory chain for testing.
///
/// In production this port is backed by a JSON-RPC client.
pub struct InMemoryChain {
    head: RwLock<BlockNumber>,
    /// (contract, method, pinned block) -> value returned by reads.
    /// `None` answers at every block without a pinned entry.
    values: RwLock<HashMap<(Address, String, Option<BlockNumber>), CallValue>>,
    /// Contracts whose every read and write reverts.
    reverting: RwLock<HashSet<Address>>,
    /// Receipts report failure when set.
    failing_receipts: RwLock<bool>,
    writes: RwLock<Vec<RecordedWrite>>,
    read_blocks: RwLock<Vec<Option<BlockNumber>>>,
}

impl InMemoryChain {
    /// Create a chain at the given head.
    pub fn new(head: BlockNumber) -> Self {
        Self {
            head: RwLock::new(head),
            values: RwLock::new(HashMap::new()),
            reverting: RwLock::new(HashSet::new()),
            failing_receipts: RwLock::new(false),
            writes: RwLock::new(Vec::new()),
            read_blocks: RwLock::new(Vec::new()),
        }
    }

    /// Script the value returned by `contract.method()` at any block.
    pub fn set_value(&self, contract: Address, method: &str, value: CallValue) {
        self.values
            .write()
            .insert((contract, method.to_string(), None), value);
    }

    /// Script the value returned by `contract.method()` for reads pinned
    /// to `block`. Overrides the any-block value there.
    pub fn set_value_at(
        &self,
        contract: Address,
        method: &str,
        block: BlockNumber,
        value: CallValue,
    ) {
        self.values
            .write()
            .insert((contract, method.to_string(), Some(block)), value);
    }

    /// Script a uint return value.
    pub fn set_uint(&self, contract: Address, method: &str, value: u64) {
        self.set_value(contract, method, CallValue::Uint(U256::from(value)));
    }

    /// Script a uint return value for reads pinned to `block`.
    pub fn set_uint_at(&self, contract: Address, method: &str, block: BlockNumber, value: u64) {
        self.set_value_at(contract, method, block, CallValue::Uint(U256::from(value)));
    }

    /// Make every call to `contract` revert.
    pub fn set_reverting(&self, contract: Address) {
        self.reverting.write().insert(contract);
    }

    /// Make receipts report a failed status.
    pub fn set_failing_receipts(&self, failing: bool) {
        *self.failing_receipts.write() = failing;
    }

    /// Move the chain head.
    pub fn set_head(&self, head: BlockNumber) {
        *self.head.write() = head;
    }

    /// Writes submitted so far.
    pub fn writes(&self) -> Vec<RecordedWrite> {
        self.writes.read().clone()
    }

    /// Block pin of every read so far, in call order.
    pub fn read_blocks(&self) -> Vec<Option<BlockNumber>> {
        self.read_blocks.read().clone()
    }

    fn revert(contract: Address, method: &str) -> ChainCallError {
        ChainCallError::Reverted {
            contract,
            method: method.to_string(),
            reason: "execution reverted".to_string(),
        }
    }
}

impl Default for InMemoryChain {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Deterministic transaction hash from the write sequence number.
fn make_tx_hash(seq: usize) -> TxHash {
    let mut hash = [0u8; 32];
    hash[24..].copy_from_slice(&(seq as u64).to_be_bytes());
    hash
}

#[async_trait]
impl ChainCallAdapter for InMemoryChain {
    async fn read(
        &self,
        contract: Address,
        method: &str,
        _args: &[CallArg],
        block: Option<BlockNumber>,
    ) -> Result<CallValue, ChainCallError> {
        debug!("[hv-01] read {}.{} at {:?}", contract, method, block);
        self.read_blocks.write().push(block);

        if self.reverting.read().contains(&contract) {
            return Err(Self::revert(contract, method));
        }

        let values = self.values.read();
        block
            .and_then(|b| values.get(&(contract, method.to_string(), Some(b))))
            .or_else(|| values.get(&(contract, method.to_string(), None)))
            .cloned()
            .ok_or_else(|| Self::revert(contract, method))
    }

    async fn write(
        &self,
        contract: Address,
        method: &str,
        args: &[CallArg],
        options: &TxOptions,
    ) -> Result<PendingTransaction, ChainCallError> {
        debug!("[hv-01] write {}.{} gas={}", contract, method, options.gas_limit);

        if self.reverting.read().contains(&contract) {
            return Err(Self::revert(contract, method));
        }

        let mut writes = self.writes.write();
        writes.push(RecordedWrite {
            contract,
            method: method.to_string(),
            args: args.to_vec(),
            options: options.clone(),
        });

        Ok(PendingTransaction {
            hash: make_tx_hash(writes.len()),
        })
    }

    async fn wait_for_receipt(
        &self,
        tx: &PendingTransaction,
    ) -> Result<TxReceipt, ChainCallError> {
        let mut head = self.head.write();
        *head += 1;

        Ok(TxReceipt {
            hash: tx.hash,
            block_number: *head,
            status: !*self.failing_receipts.read(),
        })
    }

    async fn block_number(&self) -> Result<BlockNumber, ChainCallError> {
        Ok(*self.head.read())
    }
}
