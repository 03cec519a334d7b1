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

use alloy::primitives::Address;
use anyhow::{Context, Result};
use clap::Args;

use crate::{
    config::{GlobalConfig, RewardsConfig},
    display::{format_bps, DisplayManager},
};

/// Show a user's LP staking position
#[derive(Args, Clone, Debug)]
pub struct RewardsLpStake {
    /// Address holding the LP stake
    pub user: Address,

    /// Rewards configuration (RPC URL, stake version, addresses)
    #[clap(flatten)]
    pub rewards_config: RewardsConfig,
}

impl RewardsLpStake {
    /// Run the lp-stake command
    pub async fn run(&self, _global_config: &GlobalConfig) -> Result<()> {
        let rewards_config = self.rewards_config.clone().load_from_files()?;
        let projector = rewards_config.projector()?;

        let report =
            projector.lp_stake_report(self.user).await.context("Failed to read LP stake")?;
        let projection = &report.projection;

        let display = DisplayManager::with_network("Ethereum Mainnet");
        display.header("LP Stake");
        display.address("User", report.user);
        display.balance("Deposited", projection.amount, "WRAP/WETH LP", "cyan");
        display.balance("Pool total", projection.total_staked, "WRAP/WETH LP", "cyan");
        display.item("Pool share", format_bps(projection.share_bps));
        display.item("Epoch end", projection.end_block);
        display.balance("Expected reward", projection.reward, "WRAP", "green");

        Ok(())
    }
}
