// Copyright 2025 RISC Zero, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Seams through which the projector reads chain state and prices assets.

use alloy::primitives::{Address, BlockNumber, U256};

use crate::{
    accumulator::{AccountStakeRecord, AccumulatorState, CurrencyClass},
    error::ChainReadError,
    fee_split::Fraction,
};

/// Pool-wide (L1) parameters of the NFT staking contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StakePoolState {
    /// Emission per block
    pub token_per_block: U256,
    /// Block of the last pool update
    pub last_reward_block: BlockNumber,
    /// End of the current L1 epoch
    pub end_block_of_epoch: BlockNumber,
}

/// L1 staking totals for one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct L1Pool {
    /// Total value staked for the currency
    pub total_staked: U256,
    /// Accumulated reward per share for the currency
    pub acc_per_share: U256,
}

impl StakePoolState {
    /// Combine with a currency's L1 totals into an accumulator snapshot.
    pub fn accumulator(&self, pool: &L1Pool) -> AccumulatorState {
        AccumulatorState {
            token_per_block: self.token_per_block,
            last_reward_block: self.last_reward_block,
            acc_per_share: pool.acc_per_share,
            total_staked: pool.total_staked,
        }
    }
}

/// An app's (L2) staking record, as stored by `stakingOfNFT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppStakingRecord {
    /// Value staked on behalf of the app
    pub tvl: U256,
    /// ERC7527 points staked in the app
    pub points: U256,
    /// Block of the app's last update
    pub last_reward_block: BlockNumber,
    /// App-level accumulated reward per point
    pub acc_per_share: U256,
    /// L1 accumulator value at the app's last settlement
    pub reward_debt: U256,
    /// App-level emission per block
    pub token_per_block: U256,
    /// Rewards carried into the current cycle, accumulator-scaled
    pub unspent_rewards: U256,
    /// End of the app's L2 epoch
    pub end_block_of_epoch: BlockNumber,
}

impl AppStakingRecord {
    /// The app viewed as an account of the L1 pool.
    pub fn account_record(&self) -> AccountStakeRecord {
        AccountStakeRecord {
            staked_amount: self.tvl,
            reward_debt: self.reward_debt,
            unspent_rewards: self.unspent_rewards,
            points: self.points,
            end_block_of_epoch: self.end_block_of_epoch,
        }
    }
}

/// The ERC7527 strategy of an agency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgencyStrategy {
    /// App (ERC7527 token) paired with the agency
    pub app: Address,
    /// Currency the agency is denominated in; zero for the native asset
    pub currency: Address,
}

/// Parameters of the LP staking contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LpStakePoolState {
    /// Emission per block, scaled by [crate::pool::LP_REWARD_SCALE]
    pub reward_per_block: U256,
    /// LP tokens deposited in the contract
    pub lp_supply: U256,
    /// End of the current LP epoch
    pub end_block_of_epoch: BlockNumber,
}

/// Source of current block height and decoded contract fields.
///
/// Implementations only read; they never sign or submit transactions.
#[async_trait::async_trait]
pub trait ChainStateReader: Send + Sync {
    /// Current chain head.
    async fn current_block(&self) -> Result<BlockNumber, ChainReadError>;

    /// Pool-wide parameters of the NFT staking contract.
    async fn stake_pool(&self, stake: Address) -> Result<StakePoolState, ChainReadError>;

    /// L1 totals for one currency.
    async fn l1_pool(
        &self,
        stake: Address,
        currency: CurrencyClass,
    ) -> Result<L1Pool, ChainReadError>;

    /// An app's staking record.
    async fn app_staking(
        &self,
        stake: Address,
        app: Address,
    ) -> Result<AppStakingRecord, ChainReadError>;

    /// The strategy of an agency.
    async fn agency_strategy(&self, agency: Address) -> Result<AgencyStrategy, ChainReadError>;

    /// The agency behind an app.
    async fn agency_of_app(&self, app: Address) -> Result<Address, ChainReadError>;

    /// ERC721/ERC20 `name()` of a contract.
    async fn contract_name(&self, contract: Address) -> Result<String, ChainReadError>;

    /// ERC20 balance.
    async fn token_balance(&self, token: Address, holder: Address)
        -> Result<U256, ChainReadError>;

    /// Native asset balance.
    async fn native_balance(&self, holder: Address) -> Result<U256, ChainReadError>;

    /// ERC20 total supply.
    async fn total_supply(&self, token: Address) -> Result<U256, ChainReadError>;

    /// Parameters of the LP staking contract.
    async fn lp_stake_pool(&self, lp_stake: Address) -> Result<LpStakePoolState, ChainReadError>;

    /// LP tokens deposited by `user`.
    async fn lp_deposit(&self, lp_stake: Address, user: Address) -> Result<U256, ChainReadError>;
}

/// Quotes swap output along a path of assets.
///
/// Quotes are trusted as returned; no staleness or slippage check is applied.
#[async_trait::async_trait]
pub trait PriceQuoter: Send + Sync {
    /// Amount of the last asset in `path` received for `amount_in` of the first.
    async fn quote_amount_out(
        &self,
        amount_in: U256,
        path: &[Address],
    ) -> Result<U256, ChainReadError>;
}

/// A quoter that converts at a fixed rate regardless of path.
#[derive(Debug, Clone, Copy)]
pub struct StaticQuoter {
    rate: Fraction,
}

impl StaticQuoter {
    /// Convert at `rate` (output per unit of input).
    pub fn new(rate: Fraction) -> Self {
        Self { rate }
    }
}

#[async_trait::async_trait]
impl PriceQuoter for StaticQuoter {
    async fn quote_amount_out(
        &self,
        amount_in: U256,
        _path: &[Address],
    ) -> Result<U256, ChainReadError> {
        self.rate.apply(amount_in).map_err(|err| ChainReadError::Decode(err.to_string()))
    }
}
