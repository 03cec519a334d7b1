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

//! Forward-looking epoch pool projections.
//!
//! These estimate what a position will earn through the end of the current epoch window,
//! or, once the window has ended, from the reward balance waiting for the next one.

use alloy::primitives::{BlockNumber, U256};

use crate::{
    accumulator::{AccountStakeRecord, CurrencyClass, RewardScale},
    epoch::EpochWindow,
    error::RewardError,
    fee_split::{FeeShares, FeeSplitPolicy, Fraction},
};

/// LP staking emission rates are scaled by 1e40.
pub const LP_REWARD_SCALE: U256 =
    U256::from_limbs([0xb9f5_6100_0000_0000, 0x6329_f1c3_5ca4_bfab, 0x1d, 0]);

/// Basis points denominator for stake shares.
pub const BASIS_POINTS: u64 = 10_000;

impl CurrencyClass {
    /// Fraction of block emission a currency's agencies share while an epoch is active.
    pub const fn active_pool_fraction(&self) -> Fraction {
        match self {
            Self::Primary => Fraction::from_u64(7, 8),
            Self::Native => Fraction::from_u64(125, 1000),
        }
    }

    /// Fraction of the pending reward balance a currency receives once an epoch has ended.
    pub const fn ended_pool_fraction(&self) -> Fraction {
        match self {
            Self::Primary => Fraction::from_u64(875, 1000),
            Self::Native => Fraction::from_u64(125, 1000),
        }
    }
}

/// Snapshot behind an agency's epoch pool projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpochPoolInput {
    /// Currency of the agency
    pub currency: CurrencyClass,
    /// Pool-wide emission per block
    pub token_per_block: U256,
    /// Pool-wide (L1) epoch window
    pub window: EpochWindow,
    /// Value locked in the agency, in its currency
    pub agency_tvl: U256,
    /// Total staked in the L1 pool for the agency's currency
    pub pool_total_staked: U256,
    /// Amount the agency's app already has staked
    pub account_staked: U256,
    /// Balance of the reward holder funding the next epoch
    pub reward_pool_balance: U256,
}

/// Expected reward for an agency over the current (or next) epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpochPoolProjection {
    /// End block of the epoch being priced; estimated when the current one has ended
    pub end_block: BlockNumber,
    /// Whether the current window had already ended
    pub is_ended: bool,
    /// Stake denominator used for the agency's share
    pub stake_tvl: U256,
    /// Reward expected for the whole agency over the epoch
    pub epoch_reward: U256,
    /// Projected split of `epoch_reward`
    pub shares: FeeShares,
}

/// Stake denominator for a pool-level projection.
///
/// An agency that has not staked yet is counted on top of the pool total, so that the
/// projection shows what it would earn after joining.
pub fn bootstrap_stake_tvl(
    account_staked: U256,
    agency_tvl: U256,
    pool_total_staked: U256,
) -> Result<U256, RewardError> {
    if account_staked.is_zero() {
        agency_tvl.checked_add(pool_total_staked).ok_or(RewardError::Overflow("stake TVL"))
    } else {
        Ok(pool_total_staked)
    }
}

/// Project an agency's reward for the epoch.
pub fn project_epoch_pool(
    input: &EpochPoolInput,
    epoch_length: u64,
) -> Result<EpochPoolProjection, RewardError> {
    let stake_tvl =
        bootstrap_stake_tvl(input.account_staked, input.agency_tvl, input.pool_total_staked)?;

    let (end_block, epoch_reward) = if input.window.is_ended() {
        let fraction = input.currency.ended_pool_fraction();
        let reward = fraction.apply(input.reward_pool_balance / U256::from(100u64))?;
        (input.window.next_end_estimate(epoch_length), reward)
    } else {
        if stake_tvl.is_zero() {
            return Err(RewardError::ZeroStake);
        }
        let fraction = input.currency.active_pool_fraction();
        let emitted = input
            .token_per_block
            .checked_mul(U256::from(input.window.remaining_blocks()))
            .ok_or(RewardError::Overflow("epoch emission"))?;
        let reward = fraction
            .apply(emitted)?
            .checked_mul(input.agency_tvl)
            .ok_or(RewardError::Overflow("epoch reward"))?
            / stake_tvl;
        (input.window.end_block, reward)
    };

    Ok(EpochPoolProjection {
        end_block,
        is_ended: input.window.is_ended(),
        stake_tvl,
        epoch_reward,
        shares: FeeSplitPolicy::PROJECTED.split(epoch_reward)?,
    })
}

/// Reward a newly staked ERC7527 position earns through the end of its app's epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppStakeProjection {
    /// End block of the epoch being priced; estimated when the current one has ended
    pub end_block: BlockNumber,
    /// Whether the app's window had already ended
    pub is_ended: bool,
    /// Reward for one additional staked point
    pub reward_per_point: U256,
}

/// Project the reward of one more point staked in an app.
///
/// Returns `None` if the app never started an epoch (`endBlockOfEpoch == 0`).
pub fn project_app_stake(
    record: &AccountStakeRecord,
    token_per_block: U256,
    current_block: BlockNumber,
    scale: RewardScale,
    epoch_length: u64,
) -> Result<Option<AppStakeProjection>, RewardError> {
    if record.end_block_of_epoch == 0 {
        return Ok(None);
    }
    let window = EpochWindow::new(record.end_block_of_epoch, current_block);
    let points =
        record.points.checked_add(U256::from(1u64)).ok_or(RewardError::Overflow("points"))?;

    let (end_block, scaled) = if window.is_ended() {
        (window.next_end_estimate(epoch_length), record.unspent_rewards)
    } else {
        let emitted = U256::from(window.remaining_blocks())
            .checked_mul(token_per_block)
            .ok_or(RewardError::Overflow("app emission"))?;
        (window.end_block, emitted)
    };

    Ok(Some(AppStakeProjection {
        end_block,
        is_ended: window.is_ended(),
        reward_per_point: scaled / points / scale.value(),
    }))
}

/// A user's share of the LP staking pool and its expected reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LpStakeProjection {
    /// Amount of LP tokens the user has deposited
    pub amount: U256,
    /// Total LP tokens deposited in the pool
    pub total_staked: U256,
    /// User share of the pool, in basis points
    pub share_bps: U256,
    /// Reward expected through the end of the epoch
    pub reward: U256,
    /// End block of the LP epoch
    pub end_block: BlockNumber,
}

/// Project a user's LP staking reward.
///
/// While the epoch is active the reward is the user's share of the remaining emission
/// (`rewardPerBlock` carries [LP_REWARD_SCALE]); afterwards it is the user's share of the
/// reward balance funding the next epoch.
pub fn project_lp_stake(
    amount: U256,
    total_staked: U256,
    reward_per_block: U256,
    window: &EpochWindow,
    reward_pool_balance: U256,
) -> Result<LpStakeProjection, RewardError> {
    if total_staked.is_zero() {
        return Err(RewardError::ZeroStake);
    }
    let share_bps = amount
        .checked_mul(U256::from(BASIS_POINTS))
        .ok_or(RewardError::Overflow("LP share"))?
        / total_staked;

    let reward = if window.is_ended() {
        reward_pool_balance.checked_mul(amount).ok_or(RewardError::Overflow("LP reward"))?
            / total_staked
    } else {
        reward_per_block
            .checked_mul(U256::from(window.remaining_blocks()))
            .and_then(|v| v.checked_mul(amount))
            .ok_or(RewardError::Overflow("LP reward"))?
            / total_staked
            / LP_REWARD_SCALE
    };

    Ok(LpStakeProjection { amount, total_staked, share_bps, reward, end_block: window.end_block })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ether(n: u64) -> U256 {
        U256::from(n) * U256::from(10u64).pow(U256::from(18u64))
    }

    fn input(window: EpochWindow, account_staked: U256) -> EpochPoolInput {
        EpochPoolInput {
            currency: CurrencyClass::Primary,
            token_per_block: ether(8),
            window,
            agency_tvl: ether(100),
            pool_total_staked: ether(300),
            account_staked,
            reward_pool_balance: ether(1_000),
        }
    }

    #[test]
    fn lp_scale_is_1e40() {
        assert_eq!(LP_REWARD_SCALE, U256::from(10u64).pow(U256::from(40u64)));
    }

    #[test]
    fn bootstrap_adds_agency_tvl() {
        assert_eq!(bootstrap_stake_tvl(U256::ZERO, ether(1), ether(3)).unwrap(), ether(4));
        assert_eq!(bootstrap_stake_tvl(ether(1), ether(1), ether(3)).unwrap(), ether(3));
    }

    #[test]
    fn active_epoch_with_bootstrap() {
        let projection =
            project_epoch_pool(&input(EpochWindow::new(1_100, 1_000), U256::ZERO), 42_000)
                .unwrap();
        // 8 * 100 blocks * 7/8 = 700, scaled by 100 / (100 + 300)
        assert_eq!(projection.stake_tvl, ether(400));
        assert_eq!(projection.epoch_reward, ether(175));
        assert_eq!(projection.end_block, 1_100);
        assert!(!projection.is_ended);
        assert_eq!(projection.shares.dot_agency, ether(14));
        assert_eq!(projection.shares.app, U256::from(157_500_000_000_000_000_000u128));
    }

    #[test]
    fn active_epoch_already_staked() {
        let projection =
            project_epoch_pool(&input(EpochWindow::new(1_100, 1_000), ether(5)), 42_000).unwrap();
        assert_eq!(projection.stake_tvl, ether(300));
        assert_eq!(projection.epoch_reward, U256::from(233_333_333_333_333_333_333u128));
    }

    #[test]
    fn native_active_fraction() {
        let mut native = input(EpochWindow::new(1_100, 1_000), ether(5));
        native.currency = CurrencyClass::Native;
        native.pool_total_staked = ether(100);
        let projection = project_epoch_pool(&native, 42_000).unwrap();
        // 800 * 125/1000
        assert_eq!(projection.epoch_reward, ether(100));
    }

    #[test]
    fn ended_epoch_uses_pool_balance() {
        let projection =
            project_epoch_pool(&input(EpochWindow::new(900, 1_000), ether(5)), 42_000).unwrap();
        assert!(projection.is_ended);
        assert_eq!(projection.end_block, 43_000);
        // 1000 / 100 * 875 / 1000
        assert_eq!(projection.epoch_reward, U256::from(8_750_000_000_000_000_000u128));

        let mut native = input(EpochWindow::new(900, 1_000), ether(5));
        native.currency = CurrencyClass::Native;
        let projection = project_epoch_pool(&native, 42_000).unwrap();
        assert_eq!(projection.epoch_reward, U256::from(1_250_000_000_000_000_000u128));
    }

    #[test]
    fn ended_epoch_truncates_before_scaling() {
        let mut small = input(EpochWindow::new(900, 1_000), ether(5));
        small.reward_pool_balance = U256::from(199u64);
        // 199 / 100 = 1, 1 * 875 / 1000 = 0
        assert_eq!(project_epoch_pool(&small, 42_000).unwrap().epoch_reward, U256::ZERO);
    }

    #[test]
    fn empty_pool_is_zero_stake() {
        let mut empty = input(EpochWindow::new(1_100, 1_000), ether(5));
        empty.pool_total_staked = U256::ZERO;
        assert_eq!(project_epoch_pool(&empty, 42_000), Err(RewardError::ZeroStake));
    }

    #[test]
    fn app_stake_active_and_ended() {
        let record = AccountStakeRecord {
            points: U256::from(3u64),
            unspent_rewards: U256::from(8_000_000_000_000_000u64),
            end_block_of_epoch: 1_100,
            ..Default::default()
        };
        let active = project_app_stake(
            &record,
            U256::from(4_000_000_000_000u64),
            1_000,
            RewardScale::E12,
            42_000,
        )
        .unwrap()
        .unwrap();
        // 100 * 4e12 / 4 / 1e12
        assert_eq!(active.reward_per_point, U256::from(100u64));
        assert_eq!(active.end_block, 1_100);

        let ended = project_app_stake(&record, U256::ZERO, 2_000, RewardScale::E12, 42_000)
            .unwrap()
            .unwrap();
        assert!(ended.is_ended);
        assert_eq!(ended.end_block, 44_000);
        assert_eq!(ended.reward_per_point, U256::from(2_000u64));
    }

    #[test]
    fn app_stake_not_started() {
        let record = AccountStakeRecord::default();
        assert_eq!(
            project_app_stake(&record, U256::from(1u64), 10, RewardScale::E12, 42_000).unwrap(),
            None
        );
    }

    #[test]
    fn lp_stake_active_epoch() {
        let reward_per_block = ether(2) * LP_REWARD_SCALE;
        let projection = project_lp_stake(
            U256::from(25u64),
            U256::from(100u64),
            reward_per_block,
            &EpochWindow::new(1_100, 1_000),
            U256::ZERO,
        )
        .unwrap();
        assert_eq!(projection.share_bps, U256::from(2_500u64));
        assert_eq!(projection.reward, ether(50));
    }

    #[test]
    fn lp_stake_ended_epoch() {
        let projection = project_lp_stake(
            U256::from(25u64),
            U256::from(100u64),
            U256::ZERO,
            &EpochWindow::new(900, 1_000),
            ether(40),
        )
        .unwrap();
        assert_eq!(projection.reward, ether(10));
    }

    #[test]
    fn lp_stake_empty_pool() {
        assert_eq!(
            project_lp_stake(
                U256::ZERO,
                U256::ZERO,
                U256::ZERO,
                &EpochWindow::new(1, 0),
                U256::ZERO
            ),
            Err(RewardError::ZeroStake)
        );
    }
}
