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

//! Off-chain replica of the staking contract's accumulated-per-share reward accounting.
//!
//! All arithmetic is unsigned 256-bit with floor division, in the same order the contract
//! evaluates it, so results match the contract's own bookkeeping to the wei.

use alloy::primitives::{Address, BlockNumber, U256};

use crate::{epoch::EpochResolution, error::RewardError, fee_split::Fraction};

/// Fixed-point scale of `accPerShare`.
///
/// The scale differs between staking contract versions, so it is carried as configuration
/// rather than hardcoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardScale(U256);

impl RewardScale {
    /// 1e12
    pub const E12: Self = Self(U256::from_limbs([1_000_000_000_000, 0, 0, 0]));
    /// 1e20
    pub const E20: Self = Self(U256::from_limbs([7_766_279_631_452_241_920, 5, 0, 0]));

    /// Create a scale, rejecting zero.
    pub fn new(value: U256) -> Result<Self, RewardError> {
        if value.is_zero() {
            return Err(RewardError::snapshot("accumulator scale must be non-zero"));
        }
        Ok(Self(value))
    }

    /// Create a scale of `10^exponent`.
    pub fn from_exponent(exponent: u8) -> Result<Self, RewardError> {
        let value = U256::from(10u64)
            .checked_pow(U256::from(exponent))
            .ok_or(RewardError::Overflow("scale exponent"))?;
        Self::new(value)
    }

    /// The raw scale factor.
    pub fn value(&self) -> U256 {
        self.0
    }
}

/// Which of the two reward currencies an agency is denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyClass {
    /// The protocol's own reward token (WRAP)
    Primary,
    /// The chain's native asset (ETH), identified by the zero address
    Native,
}

impl CurrencyClass {
    /// Classify an agency currency, `None` if it earns no staking rewards.
    pub fn from_currency(currency: Address, primary_token: Address) -> Option<Self> {
        if currency == primary_token {
            Some(Self::Primary)
        } else if currency == Address::ZERO {
            Some(Self::Native)
        } else {
            None
        }
    }

    /// Fraction of pool emissions credited to this currency's L1 accumulator.
    pub const fn accumulator_fraction(&self) -> Fraction {
        match self {
            Self::Primary => Fraction::from_u64(37, 40),
            Self::Native => Fraction::from_u64(3, 40),
        }
    }

    /// Display symbol
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Primary => "WRAP",
            Self::Native => "ETH",
        }
    }
}

/// Pool-level accumulator snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccumulatorState {
    /// Emission per block
    pub token_per_block: U256,
    /// Block of the last accumulator update
    pub last_reward_block: BlockNumber,
    /// Accumulated reward per staked unit, scaled by [RewardScale]
    pub acc_per_share: U256,
    /// Total value staked in the pool
    pub total_staked: U256,
}

/// Per-account staking record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccountStakeRecord {
    /// Amount staked by the account
    pub staked_amount: U256,
    /// `accPerShare` at the account's last settlement
    pub reward_debt: U256,
    /// Rewards carried over from an unsettled cycle, in accumulator-scaled units
    pub unspent_rewards: U256,
    /// Number of staked points (ERC7527 positions) behind the record
    pub points: U256,
    /// End block of the account's own epoch window
    pub end_block_of_epoch: BlockNumber,
}

/// Projects `accPerShare` forward and derives an account's realized reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccumulatorProjector {
    /// Currency whose emission fraction feeds the accumulator
    pub currency: CurrencyClass,
    /// Fixed-point scale of the accumulator
    pub scale: RewardScale,
}

impl AccumulatorProjector {
    /// Create a projector for one currency and contract scale.
    pub fn new(currency: CurrencyClass, scale: RewardScale) -> Self {
        Self { currency, scale }
    }

    /// Accumulator value as the contract would compute it at `effective_end_block`.
    pub fn acc_per_share(
        &self,
        state: &AccumulatorState,
        effective_end_block: BlockNumber,
    ) -> Result<U256, RewardError> {
        let blocks_elapsed =
            effective_end_block.checked_sub(state.last_reward_block).ok_or_else(|| {
                RewardError::snapshot(format!(
                    "last reward block {} is after effective end block {}",
                    state.last_reward_block, effective_end_block
                ))
            })?;
        if state.total_staked.is_zero() {
            return Err(RewardError::ZeroStake);
        }

        let fraction = self.currency.accumulator_fraction();
        let token_reward = U256::from(blocks_elapsed)
            .checked_mul(state.token_per_block)
            .ok_or(RewardError::Overflow("token reward"))?;
        let increment = token_reward
            .checked_mul(fraction.numerator)
            .and_then(|v| v.checked_mul(self.scale.value()))
            .ok_or(RewardError::Overflow("accumulator increment"))?
            / fraction.denominator
            / state.total_staked;

        state.acc_per_share.checked_add(increment).ok_or(RewardError::Overflow("accumulator"))
    }

    /// Reward the account could claim at the resolved end block, in token units.
    ///
    /// `((newAccPerShare - rewardDebt) * stakedAmount + unspentRewards) / scale`
    pub fn realized_reward(
        &self,
        state: &AccumulatorState,
        record: &AccountStakeRecord,
        resolution: &EpochResolution,
    ) -> Result<U256, RewardError> {
        let new_acc_per_share = self.acc_per_share(state, resolution.effective_end_block)?;
        let pending_per_share =
            new_acc_per_share.checked_sub(record.reward_debt).ok_or_else(|| {
                RewardError::snapshot(format!(
                    "reward debt {} exceeds accumulator {}",
                    record.reward_debt, new_acc_per_share
                ))
            })?;

        let scaled = pending_per_share
            .checked_mul(record.staked_amount)
            .and_then(|v| v.checked_add(record.unspent_rewards))
            .ok_or(RewardError::Overflow("realized reward"))?;

        Ok(scaled / self.scale.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::epoch::{EpochWindow, ProjectionMode};
    use proptest::prelude::*;

    fn state(total_staked: u64) -> AccumulatorState {
        AccumulatorState {
            token_per_block: U256::from(1_000_000_000u64),
            last_reward_block: 100,
            acc_per_share: U256::ZERO,
            total_staked: U256::from(total_staked),
        }
    }

    fn record(staked: u64) -> AccountStakeRecord {
        AccountStakeRecord { staked_amount: U256::from(staked), ..Default::default() }
    }

    fn at(block: BlockNumber) -> EpochResolution {
        EpochResolution { effective_end_block: block, is_ended: false }
    }

    #[test]
    fn scale_constants() {
        assert_eq!(RewardScale::E12, RewardScale::from_exponent(12).unwrap());
        assert_eq!(RewardScale::E20, RewardScale::from_exponent(20).unwrap());
        assert!(RewardScale::new(U256::ZERO).is_err());
    }

    #[test]
    fn primary_currency_hundred_blocks() {
        let projector = AccumulatorProjector::new(CurrencyClass::Primary, RewardScale::E12);

        let acc = projector.acc_per_share(&state(1_000_000_000), 200).unwrap();
        assert_eq!(acc, U256::from(92_500_000_000_000u64));
        let reward =
            projector.realized_reward(&state(1_000_000_000), &record(10_000), &at(200)).unwrap();
        assert_eq!(reward, U256::from(925_000u64));

        let acc = projector.acc_per_share(&state(1_000_000), 200).unwrap();
        assert_eq!(acc, U256::from(92_500_000_000_000_000u64));
        let reward =
            projector.realized_reward(&state(1_000_000), &record(10_000), &at(200)).unwrap();
        assert_eq!(reward, U256::from(925_000_000u64));
    }

    #[test]
    fn native_currency_uses_smaller_fraction() {
        let projector = AccumulatorProjector::new(CurrencyClass::Native, RewardScale::E12);
        // 100 blocks * 1e9 * 3 * 1e12 / 40 / 1e9
        let acc = projector.acc_per_share(&state(1_000_000_000), 200).unwrap();
        assert_eq!(acc, U256::from(7_500_000_000_000u64));
    }

    #[test]
    fn larger_scale_keeps_precision() {
        let e12 = AccumulatorProjector::new(CurrencyClass::Native, RewardScale::E12);
        let e20 = AccumulatorProjector::new(CurrencyClass::Native, RewardScale::E20);
        let thin = AccumulatorState {
            token_per_block: U256::from(1u64),
            last_reward_block: 0,
            acc_per_share: U256::ZERO,
            total_staked: U256::from(10u64).pow(U256::from(18u64)),
        };
        assert_eq!(e12.acc_per_share(&thin, 1).unwrap(), U256::ZERO);
        assert_eq!(e20.acc_per_share(&thin, 1).unwrap(), U256::from(7u64));
    }

    #[test]
    fn zero_stake_is_an_error() {
        let projector = AccumulatorProjector::new(CurrencyClass::Primary, RewardScale::E12);
        assert_eq!(projector.acc_per_share(&state(0), 200), Err(RewardError::ZeroStake));
        assert_eq!(
            projector.realized_reward(&state(0), &record(10), &at(200)),
            Err(RewardError::ZeroStake)
        );
    }

    #[test]
    fn stale_snapshot_is_rejected() {
        let projector = AccumulatorProjector::new(CurrencyClass::Primary, RewardScale::E12);
        assert!(matches!(
            projector.acc_per_share(&state(1), 99),
            Err(RewardError::InvalidStateSnapshot(_))
        ));
    }

    #[test]
    fn reward_debt_above_accumulator_is_rejected() {
        let projector = AccumulatorProjector::new(CurrencyClass::Primary, RewardScale::E12);
        let record = AccountStakeRecord {
            staked_amount: U256::from(1u64),
            reward_debt: U256::MAX,
            ..Default::default()
        };
        assert!(matches!(
            projector.realized_reward(&state(1), &record, &at(100)),
            Err(RewardError::InvalidStateSnapshot(_))
        ));
    }

    #[test]
    fn unspent_rewards_are_descaled_with_the_accumulator() {
        let projector = AccumulatorProjector::new(CurrencyClass::Primary, RewardScale::E12);
        let record = AccountStakeRecord {
            staked_amount: U256::from(10_000u64),
            unspent_rewards: U256::from(3_000_000_000_000u64),
            ..Default::default()
        };
        let reward = projector.realized_reward(&state(1_000_000_000), &record, &at(200)).unwrap();
        assert_eq!(reward, U256::from(925_003u64));
    }

    #[test]
    fn realized_so_far_stops_at_head() {
        let projector = AccumulatorProjector::new(CurrencyClass::Primary, RewardScale::E12);
        let window = EpochWindow::new(300, 200);
        let so_far = projector
            .realized_reward(
                &state(1_000_000_000),
                &record(10_000),
                &window.resolve(ProjectionMode::RealizedSoFar),
            )
            .unwrap();
        let to_end = projector
            .realized_reward(
                &state(1_000_000_000),
                &record(10_000),
                &window.resolve(ProjectionMode::ProjectedToEnd),
            )
            .unwrap();
        assert_eq!(so_far, U256::from(925_000u64));
        assert_eq!(to_end, U256::from(1_850_000u64));
    }

    #[test]
    fn currency_classification() {
        let wrap = Address::repeat_byte(0x11);
        assert_eq!(CurrencyClass::from_currency(wrap, wrap), Some(CurrencyClass::Primary));
        assert_eq!(CurrencyClass::from_currency(Address::ZERO, wrap), Some(CurrencyClass::Native));
        assert_eq!(CurrencyClass::from_currency(Address::repeat_byte(0x22), wrap), None);
    }

    fn arb_state() -> impl Strategy<Value = AccumulatorState> {
        (any::<u64>(), 0u64..1_000_000, any::<u64>(), 1u64..u64::MAX).prop_map(
            |(tpb, last, acc, total)| AccumulatorState {
                token_per_block: U256::from(tpb),
                last_reward_block: last,
                acc_per_share: U256::from(acc),
                total_staked: U256::from(total),
            },
        )
    }

    proptest! {
        #[test]
        fn projection_is_deterministic(
            state in arb_state(),
            elapsed in 0u64..1_000_000,
            staked in any::<u64>()
        ) {
            let projector = AccumulatorProjector::new(CurrencyClass::Primary, RewardScale::E12);
            let record =
                AccountStakeRecord { staked_amount: U256::from(staked), ..Default::default() };
            let end = at(state.last_reward_block + elapsed);
            prop_assert_eq!(
                projector.realized_reward(&state, &record, &end),
                projector.realized_reward(&state, &record, &end)
            );
        }

        #[test]
        fn later_end_never_earns_less(
            state in arb_state(),
            a in 0u64..1_000_000,
            b in 0u64..1_000_000,
            staked in any::<u64>()
        ) {
            let projector = AccumulatorProjector::new(CurrencyClass::Native, RewardScale::E20);
            let record =
                AccountStakeRecord { staked_amount: U256::from(staked), ..Default::default() };
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let early = projector
                .realized_reward(&state, &record, &at(state.last_reward_block + lo))
                .unwrap();
            let late = projector
                .realized_reward(&state, &record, &at(state.last_reward_block + hi))
                .unwrap();
            prop_assert!(early <= late);
        }

        #[test]
        fn zero_elapsed_only_pays_unspent(
            state in arb_state(),
            staked in any::<u64>(),
            unspent in any::<u128>()
        ) {
            let projector = AccumulatorProjector::new(CurrencyClass::Primary, RewardScale::E12);
            let record = AccountStakeRecord {
                staked_amount: U256::from(staked),
                reward_debt: state.acc_per_share,
                unspent_rewards: U256::from(unspent),
                ..Default::default()
            };
            let end = at(state.last_reward_block);
            prop_assert_eq!(
                projector.acc_per_share(&state, end.effective_end_block).unwrap(),
                state.acc_per_share
            );
            prop_assert_eq!(
                projector.realized_reward(&state, &record, &end).unwrap(),
                U256::from(unspent) / RewardScale::E12.value()
            );
        }
    }
}
