//! # Batch Reader
//!
//! Aggregates independent read calls, possibly against different contracts,
//! into one logical batch pinned to a single block height.
//!
//! ## Semantics
//!
//! - When no block is given the chain head is resolved once and every call
//!   is pinned to it, so a batch never straddles two blocks.
//! - All calls fan out concurrently and the reader waits for every outcome.
//! - Results are aligned index-for-index with the input specs.
//! - `require_success = false`: a revert or decode failure becomes a
//!   [`BatchCallResult::Failure`] at that index.
//! - `require_success = true`: the first failing index fails the batch.

use async_trait::async_trait;
use futures::future::join_all;
use shared_types::BlockNumber;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::{
    AbiDescriptor, BatchCallResult, BatchCallSpec, BatchOptions, ChainCallError,
};
use crate::ports::{BatchCaller, ChainCallAdapter};

/// Batch reader over a [`ChainCallAdapter`].
pub struct BatchReader<C: ChainCallAdapter> {
    chain: Arc<C>,
}

impl<C: ChainCallAdapter> Clone for BatchReader<C> {
    fn clone(&self) -> Self {
        Self {
            chain: Arc::clone(&self.chain),
        }
    }
}

impl<C: ChainCallAdapter> BatchReader<C> {
    /// Create a reader sharing the given chain client.
    pub fn new(chain: Arc<C>) -> Self {
        Self { chain }
    }

    /// Underlying chain client.
    pub fn chain(&self) -> &Arc<C> {
        &self.chain
    }

    async fn resolve_block(&self, options: BatchOptions) -> Result<BlockNumber, ChainCallError> {
        match options.block_number {
            Some(block) => Ok(block),
            None => self.chain.block_number().await,
        }
    }
}

#[async_trait]
impl<C: ChainCallAdapter> BatchCaller for BatchReader<C> {
    async fn batch_read(
        &self,
        abi: &AbiDescriptor,
        specs: &[BatchCallSpec],
        options: BatchOptions,
    ) -> Result<Vec<BatchCallResult>, ChainCallError> {
        if specs.is_empty() {
            return Ok(Vec::new());
        }

        let block = self.resolve_block(options).await?;
        debug!(
            calls = specs.len(),
            block,
            require_success = options.require_success,
            "[hv-01] Executing batch read"
        );

        let chain = &self.chain;
        let calls = specs.iter().map(|spec| async move {
            if !abi.has_method(&spec.method) {
                return BatchCallResult::Failure(ChainCallError::UnknownMethod(
                    spec.method.clone(),
                ));
            }
            match chain
                .read(spec.target, &spec.method, &spec.args, Some(block))
                .await
            {
                Ok(value) => BatchCallResult::Success(value),
                Err(err) => BatchCallResult::Failure(err),
            }
        });

        let results = join_all(calls).await;

        let failed = results.iter().filter(|r| !r.is_success()).count();
        if failed > 0 {
            debug!(failed, total = results.len(), "[hv-01] Batch had failing calls");
        }

        if options.require_success {
            let first_failure = results.iter().enumerate().find_map(|(index, result)| {
                match result {
                    BatchCallResult::Failure(err) => Some((index, err)),
                    BatchCallResult::Success(_) => None,
                }
            });
            if let Some((index, err)) = first_failure {
                warn!(index, error = %err, "[hv-01] Strict batch aborted");
                return Err(ChainCallError::BatchFailed {
                    index,
                    reason: err.to_string(),
                });
            }
        }

        Ok(results)
    }

    async fn block_number(&self) -> Result<BlockNumber, ChainCallError> {
        self.chain.block_number().await
    }
}
