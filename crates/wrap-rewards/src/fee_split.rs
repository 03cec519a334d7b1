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

//! Fixed-ratio division of a reward pool across beneficiary tiers.
//!
//! Every share is `floor(total * numerator / denominator)`. Shares are never rounded up and
//! the remainder is never redistributed: the protocol keeps the dust.

use alloy::primitives::U256;

use crate::error::RewardError;

/// An integer ratio applied with floor division.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    /// Numerator
    pub numerator: U256,
    /// Denominator, never zero for the protocol constants below
    pub denominator: U256,
}

impl Fraction {
    /// Create a fraction from small integer constants.
    pub const fn from_u64(numerator: u64, denominator: u64) -> Self {
        Self {
            numerator: U256::from_limbs([numerator, 0, 0, 0]),
            denominator: U256::from_limbs([denominator, 0, 0, 0]),
        }
    }

    /// `floor(amount * numerator / denominator)`
    pub fn apply(&self, amount: U256) -> Result<U256, RewardError> {
        if self.denominator.is_zero() {
            return Err(RewardError::InvalidFraction {
                numerator: self.numerator,
                denominator: self.denominator,
            });
        }
        let scaled = amount.checked_mul(self.numerator).ok_or(RewardError::Overflow("fraction"))?;
        Ok(scaled / self.denominator)
    }
}

/// A two-tier split between the dotAgency holder and the ERC7527 (app) holders.
///
/// The realized and projected families are not interchangeable: the realized family is
/// applied to accumulator-based rewards, the projected one to epoch pool estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSplitPolicy {
    /// Share of the dotAgency (registration NFT) holder
    pub dot_agency: Fraction,
    /// Share of the ERC7527 holders of the agency's app
    pub app: Fraction,
}

impl FeeSplitPolicy {
    /// Split of a realized accumulator reward: 5243/65536 and 58982/65536.
    pub const REALIZED: Self = Self {
        dot_agency: Fraction::from_u64(5243, 65536),
        app: Fraction::from_u64(58982, 65536),
    };

    /// Split of a projected epoch pool reward: 8/100 and 90/100.
    pub const PROJECTED: Self =
        Self { dot_agency: Fraction::from_u64(8, 100), app: Fraction::from_u64(90, 100) };

    /// Divide `total` across both tiers.
    pub fn split(&self, total: U256) -> Result<FeeShares, RewardError> {
        let dot_agency = self.dot_agency.apply(total)?;
        let app = self.app.apply(total)?;
        // Policies whose tiers sum past the pool would pay out more than exists.
        let paid = dot_agency.checked_add(app).ok_or(RewardError::Overflow("fee split"))?;
        let dust = total.checked_sub(paid).ok_or_else(|| {
            RewardError::snapshot(format!("fee split pays {paid} out of a pool of {total}"))
        })?;
        Ok(FeeShares { total, dot_agency, app, dust })
    }
}

/// Emission split between the reward currency stakers and native-asset stakers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmissionSplit {
    /// Share of emissions paid to the reward-currency (WRAP) staking side
    pub currency: Fraction,
    /// Share of emissions paid to the native-asset (ETH) staking side
    pub native: Fraction,
}

impl EmissionSplit {
    /// 7/8 to the WRAP side, 1/8 to the ETH side.
    pub const DUAL_CURRENCY: Self =
        Self { currency: Fraction::from_u64(7, 8), native: Fraction::from_u64(1, 8) };
}

/// Result of a [FeeSplitPolicy::split].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeShares {
    /// The pool that was divided
    pub total: U256,
    /// dotAgency share
    pub dot_agency: U256,
    /// ERC7527 holder share
    pub app: U256,
    /// Remainder retained by the protocol
    pub dust: U256,
}
