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

//! Explicit settings for reward projection.

use derive_builder::Builder;

use crate::{accumulator::RewardScale, apy::BLOCKS_PER_YEAR, deployment::StakeVersion};

/// Estimated length of an epoch, used to date the next epoch once the current one ended.
pub const DEFAULT_EPOCH_LENGTH: u64 = 42_000;

/// Explicit projection settings, passed into every [crate::RewardProjector] call path.
#[derive(Clone, Debug, PartialEq, Eq, Builder)]
pub struct RewardsSettings {
    /// Revision of the NFT staking contract to read.
    #[builder(default)]
    pub stake_version: StakeVersion,

    /// Accumulator scale; derived from `stake_version` when unset.
    #[builder(setter(into, strip_option), default)]
    pub accumulator_scale: Option<RewardScale>,

    /// Blocks per year used for yields.
    #[builder(default = "BLOCKS_PER_YEAR")]
    pub blocks_per_year: u64,

    /// Length of an epoch, in blocks.
    #[builder(default = "DEFAULT_EPOCH_LENGTH")]
    pub epoch_length: u64,
}

impl Default for RewardsSettings {
    fn default() -> Self {
        Self {
            stake_version: StakeVersion::default(),
            accumulator_scale: None,
            blocks_per_year: BLOCKS_PER_YEAR,
            epoch_length: DEFAULT_EPOCH_LENGTH,
        }
    }
}

impl RewardsSettings {
    /// Accumulator scale in effect.
    pub fn scale(&self) -> RewardScale {
        self.accumulator_scale.unwrap_or_else(|| self.stake_version.default_scale())
    }
}
