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

//! Valuation of liquidity pool positions in a single denomination.

use alloy::primitives::{Address, U256};

use crate::error::RewardError;

/// Reserves of a two-asset constant-product pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairReserves {
    /// Balance of the primary asset held by the pair
    pub primary_reserve: U256,
    /// Balance of the secondary asset held by the pair
    pub secondary_reserve: U256,
    /// Total supply of the pair's LP token
    pub lp_total_supply: U256,
}

/// Constituent amounts redeemable for an LP position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnderlyingAmounts {
    /// Amount of the primary asset
    pub primary: U256,
    /// Amount of the secondary asset
    pub secondary: U256,
}

impl PairReserves {
    /// Proportional share of each reserve for `lp_amount`.
    pub fn underlying(&self, lp_amount: U256) -> Result<UnderlyingAmounts, RewardError> {
        if self.lp_total_supply.is_zero() {
            return Err(RewardError::ZeroSupply);
        }
        let share = |reserve: U256| {
            lp_amount
                .checked_mul(reserve)
                .map(|v| v / self.lp_total_supply)
                .ok_or(RewardError::Overflow("LP share"))
        };
        Ok(UnderlyingAmounts {
            primary: share(self.primary_reserve)?,
            secondary: share(self.secondary_reserve)?,
        })
    }
}

/// Combine the primary leg with the secondary leg already quoted in the primary asset.
pub fn common_denomination_tvl(
    underlying: &UnderlyingAmounts,
    secondary_in_primary: U256,
) -> Result<U256, RewardError> {
    underlying.primary.checked_add(secondary_in_primary).ok_or(RewardError::Overflow("LP TVL"))
}

/// Swap path used to quote the secondary asset in the primary one.
pub fn quote_path(secondary: Address, primary: Address) -> [Address; 2] {
    [secondary, primary]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proportional_share() {
        let reserves = PairReserves {
            primary_reserve: U256::from(1_000u64),
            secondary_reserve: U256::from(10u64),
            lp_total_supply: U256::from(100u64),
        };
        let amounts = reserves.underlying(U256::from(33u64)).unwrap();
        assert_eq!(amounts.primary, U256::from(330u64));
        // 33 * 10 / 100 truncates
        assert_eq!(amounts.secondary, U256::from(3u64));
        assert_eq!(
            common_denomination_tvl(&amounts, U256::from(300u64)).unwrap(),
            U256::from(630u64)
        );
    }

    #[test]
    fn empty_pair() {
        let reserves = PairReserves {
            primary_reserve: U256::ZERO,
            secondary_reserve: U256::ZERO,
            lp_total_supply: U256::ZERO,
        };
        assert_eq!(reserves.underlying(U256::from(1u64)), Err(RewardError::ZeroSupply));
    }
}
