//! # Staking Call Helpers
//!
//! Thin wrappers over the master chef (farms, pid-indexed) and sous chef
//! (single-token pools) contracts. Each helper converts the display amount
//! exactly, sends one transaction with the configured options, waits for the
//! receipt and reports its status.
//!
//! pid `0` on the master chef is the main staking pool and uses the
//! dedicated `enterStaking`/`leaveStaking` methods.

use shared_types::{Address, U256};
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::domain::{to_base_units, CallArg, CallConfig, ChainCallError, TxOptions, TxReceipt};
use crate::ports::ChainCallAdapter;

/// Master chef pid of the main staking pool.
pub const MAIN_STAKING_PID: u64 = 0;

/// Staking helpers bound to one chain client and one immutable config.
pub struct StakingCalls<C: ChainCallAdapter> {
    chain: Arc<C>,
    config: CallConfig,
}

impl<C: ChainCallAdapter> StakingCalls<C> {
    /// Create helpers with an explicit configuration.
    pub fn new(chain: Arc<C>, config: CallConfig) -> Self {
        Self { chain, config }
    }

    /// Active configuration.
    pub fn config(&self) -> &CallConfig {
        &self.config
    }

    /// Approve `spender` for the maximum allowance on `token`.
    pub async fn approve(
        &self,
        token: Address,
        spender: Address,
    ) -> Result<TxReceipt, ChainCallError> {
        self.send(
            token,
            "approve",
            vec![CallArg::Address(spender), CallArg::Uint(U256::MAX)],
            self.config.tx_options(),
        )
        .await
    }

    /// Stake farm tokens into master chef pool `pid`.
    #[instrument(skip(self, amount))]
    pub async fn stake<A: Display + Send>(
        &self,
        master_chef: Address,
        pid: u64,
        amount: A,
    ) -> Result<bool, ChainCallError> {
        let value = to_base_units(amount, self.config.token_decimals)?;
        let receipt = if pid == MAIN_STAKING_PID {
            self.send(master_chef, "enterStaking", vec![value.into()], self.config.tx_options())
                .await?
        } else {
            self.send(
                master_chef,
                "deposit",
                vec![pid.into(), value.into()],
                self.config.tx_options(),
            )
            .await?
        };
        Ok(receipt.status)
    }

    /// Stake into a sous chef pool whose token has `decimals` precision.
    pub async fn sous_stake<A: Display + Send>(
        &self,
        sous_chef: Address,
        amount: A,
        decimals: u32,
    ) -> Result<bool, ChainCallError> {
        let value = to_base_units(amount, decimals)?;
        let receipt = self
            .send(sous_chef, "deposit", vec![value.into()], self.config.tx_options())
            .await?;
        Ok(receipt.status)
    }

    /// Stake native currency into a sous chef pool (value-carrying deposit).
    pub async fn sous_stake_native<A: Display + Send>(
        &self,
        sous_chef: Address,
        amount: A,
    ) -> Result<bool, ChainCallError> {
        let value = to_base_units(amount, self.config.token_decimals)?;
        let options = self.config.tx_options().with_value(value);
        let receipt = self.send(sous_chef, "deposit", Vec::new(), options).await?;
        Ok(receipt.status)
    }

    /// Withdraw farm tokens from master chef pool `pid`.
    #[instrument(skip(self, amount))]
    pub async fn unstake<A: Display + Send>(
        &self,
        master_chef: Address,
        pid: u64,
        amount: A,
    ) -> Result<bool, ChainCallError> {
        let value = to_base_units(amount, self.config.token_decimals)?;
        let receipt = if pid == MAIN_STAKING_PID {
            self.send(master_chef, "leaveStaking", vec![value.into()], self.config.tx_options())
                .await?
        } else {
            self.send(
                master_chef,
                "withdraw",
                vec![pid.into(), value.into()],
                self.config.tx_options(),
            )
            .await?
        };
        Ok(receipt.status)
    }

    /// Withdraw from a sous chef pool whose token has `decimals` precision.
    pub async fn sous_unstake<A: Display + Send>(
        &self,
        sous_chef: Address,
        amount: A,
        decimals: u32,
    ) -> Result<bool, ChainCallError> {
        let value = to_base_units(amount, decimals)?;
        let receipt = self
            .send(sous_chef, "withdraw", vec![value.into()], self.config.tx_options())
            .await?;
        Ok(receipt.status)
    }

    /// Withdraw everything from a sous chef pool, forfeiting rewards.
    pub async fn sous_emergency_unstake(&self, sous_chef: Address) -> Result<bool, ChainCallError> {
        let receipt = self
            .send(sous_chef, "emergencyWithdraw", Vec::new(), self.config.tx_options())
            .await?;
        Ok(receipt.status)
    }

    /// Claim pending rewards from master chef pool `pid`.
    pub async fn harvest(&self, master_chef: Address, pid: u64) -> Result<bool, ChainCallError> {
        let receipt = if pid == MAIN_STAKING_PID {
            self.send(master_chef, "leaveStaking", vec![U256::zero().into()], self.config.tx_options())
                .await?
        } else {
            self.send(
                master_chef,
                "deposit",
                vec![pid.into(), U256::zero().into()],
                self.config.tx_options(),
            )
            .await?
        };
        Ok(receipt.status)
    }

    /// Claim pending rewards from a sous chef pool.
    pub async fn sous_harvest(&self, sous_chef: Address) -> Result<bool, ChainCallError> {
        let receipt = self
            .send(sous_chef, "deposit", vec![U256::zero().into()], self.config.tx_options())
            .await?;
        Ok(receipt.status)
    }

    async fn send(
        &self,
        contract: Address,
        method: &str,
        args: Vec<CallArg>,
        options: TxOptions,
    ) -> Result<TxReceipt, ChainCallError> {
        debug!("[hv-01] Sending {}.{} ({} args)", contract, method, args.len());
        let tx = self.chain.write(contract, method, &args, &options).await?;
        let receipt = self.chain.wait_for_receipt(&tx).await?;
        info!(
            contract = %contract,
            method,
            block = receipt.block_number,
            status = receipt.status,
            "[hv-01] Transaction mined"
        );
        Ok(receipt)
    }
}
