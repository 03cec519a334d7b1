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

//! Read-only commands projecting WRAP staking rewards and yields.

mod apy;
mod app_stake;
mod epoch_reward;
mod epoch_status;
mod lp_apy;
mod lp_stake;
mod realized;

pub use apy::RewardsApy;
pub use app_stake::RewardsAppStake;
pub use epoch_reward::RewardsEpochReward;
pub use epoch_status::{wait_for_active_epoch, RewardsEpochStatus};
pub use lp_apy::RewardsLpApy;
pub use lp_stake::RewardsLpStake;
pub use realized::RewardsRealized;

use clap::Subcommand;

use crate::config::GlobalConfig;

/// Commands for reward projection
#[derive(Subcommand, Clone, Debug)]
pub enum RewardsCommands {
    /// Expected reward of an app's agency over the current epoch
    #[command(name = "epoch-reward")]
    EpochReward(RewardsEpochReward),
    /// Reward an agency has accrued so far and the dotAgency share of it
    Realized(RewardsRealized),
    /// Reward for staking one more ERC7527 position in an app
    #[command(name = "app-stake")]
    AppStake(RewardsAppStake),
    /// A user's LP staking position and expected reward
    #[command(name = "lp-stake")]
    LpStake(RewardsLpStake),
    /// Yields of the WRAP and ETH agency staking pools
    Apy(RewardsApy),
    /// Yield of the LP staking pool
    #[command(name = "lp-apy")]
    LpApy(RewardsLpApy),
    /// Whether the pool-wide and an app's epochs are active
    #[command(name = "epoch-status")]
    EpochStatus(RewardsEpochStatus),
}

impl RewardsCommands {
    /// Run the command
    pub async fn run(&self, global_config: &GlobalConfig) -> anyhow::Result<()> {
        match self {
            Self::EpochReward(cmd) => cmd.run(global_config).await,
            Self::Realized(cmd) => cmd.run(global_config).await,
            Self::AppStake(cmd) => cmd.run(global_config).await,
            Self::LpStake(cmd) => cmd.run(global_config).await,
            Self::Apy(cmd) => cmd.run(global_config).await,
            Self::LpApy(cmd) => cmd.run(global_config).await,
            Self::EpochStatus(cmd) => cmd.run(global_config).await,
        }
    }
}
