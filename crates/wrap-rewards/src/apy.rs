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

//! Naive annualized yield from a per-block emission rate.
//!
//! Yields are whole percentages: the division truncates, so a pool yielding 114.975%
//! reports 114.

use alloy::primitives::U256;

use crate::{
    error::RewardError,
    fee_split::{EmissionSplit, Fraction},
    pool::LP_REWARD_SCALE,
};

/// Blocks per year assuming 12 second blocks.
pub const BLOCKS_PER_YEAR: u64 = 2_628_000;

/// Converts emission rates into annual percentage yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnualizedYieldEstimator {
    /// Blocks per year used to annualize a per-block rate
    pub blocks_per_year: u64,
}

impl Default for AnnualizedYieldEstimator {
    fn default() -> Self {
        Self { blocks_per_year: BLOCKS_PER_YEAR }
    }
}

/// Yields of the two sides of the dual-currency (WRAP / ETH) staking pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DualCurrencyApy {
    /// Annual emission of the whole pool
    pub annual_reward: U256,
    /// Yield on the WRAP side, in whole percent
    pub currency_apy: U256,
    /// Yield on the ETH side, in whole percent
    pub native_apy: U256,
}

impl AnnualizedYieldEstimator {
    /// Create an estimator with a custom block rate.
    pub fn new(blocks_per_year: u64) -> Self {
        Self { blocks_per_year }
    }

    /// `tokenPerBlock * blocksPerYear`
    pub fn annual_reward(&self, token_per_block: U256) -> Result<U256, RewardError> {
        token_per_block
            .checked_mul(U256::from(self.blocks_per_year))
            .ok_or(RewardError::Overflow("annual reward"))
    }

    /// Yield of the `tier` share of emissions over `pool_tvl`, in whole percent.
    pub fn apy(
        &self,
        token_per_block: U256,
        tier: Fraction,
        pool_tvl: U256,
    ) -> Result<U256, RewardError> {
        let tier_reward = tier.apply(self.annual_reward(token_per_block)?)?;
        percent_of(tier_reward, pool_tvl)
    }

    /// Yields of the dual-currency pool.
    ///
    /// `native_tvl_in_currency` is the ETH side's TVL already converted to WRAP, so both
    /// sides are measured in the reward currency.
    pub fn dual_currency_apy(
        &self,
        token_per_block: U256,
        currency_tvl: U256,
        native_tvl_in_currency: U256,
    ) -> Result<DualCurrencyApy, RewardError> {
        let split = EmissionSplit::DUAL_CURRENCY;
        Ok(DualCurrencyApy {
            annual_reward: self.annual_reward(token_per_block)?,
            currency_apy: self.apy(token_per_block, split.currency, currency_tvl)?,
            native_apy: self.apy(token_per_block, split.native, native_tvl_in_currency)?,
        })
    }

    /// Yield of the LP staking pool; `reward_per_block` carries [LP_REWARD_SCALE].
    pub fn lp_apy(&self, reward_per_block: U256, lp_tvl: U256) -> Result<U256, RewardError> {
        let annual = self.annual_reward(reward_per_block)? / LP_REWARD_SCALE;
        percent_of(annual, lp_tvl)
    }
}

fn percent_of(reward: U256, tvl: U256) -> Result<U256, RewardError> {
    if tvl.is_zero() {
        return Err(RewardError::ZeroTvl);
    }
    let scaled = reward.checked_mul(U256::from(100u64)).ok_or(RewardError::Overflow("apy"))?;
    Ok(scaled / tvl)
}
