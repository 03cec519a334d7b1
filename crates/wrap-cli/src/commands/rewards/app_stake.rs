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
    display::DisplayManager,
};

/// Project the reward of staking one more ERC7527 position in an app
#[derive(Args, Clone, Debug)]
pub struct RewardsAppStake {
    /// App (ERC7527) contract
    pub app: Address,

    /// Rewards configuration (RPC URL, stake version, addresses)
    #[clap(flatten)]
    pub rewards_config: RewardsConfig,
}

impl RewardsAppStake {
    /// Run the app-stake command
    pub async fn run(&self, _global_config: &GlobalConfig) -> Result<()> {
        let rewards_config = self.rewards_config.clone().load_from_files()?;
        let projector = rewards_config.projector()?;

        let report =
            projector.app_stake_report(self.app).await.context("Failed to project app stake")?;

        let display = DisplayManager::with_network("Ethereum Mainnet");
        display.header(&format!("Staking in {}", report.name));
        display.address("App", report.app);
        display.address("Agency", report.agency);
        display.item("Currency", report.currency.symbol());
        display.item("Points staked", report.points);
        if report.projection.is_ended {
            display.status("Epoch", "ended", "yellow");
            display.item("Next epoch end", format!("~{}", report.projection.end_block));
        } else {
            display.status("Epoch", "active", "green");
            display.item("Epoch end", report.projection.end_block);
        }
        display.balance("Reward per point", report.projection.reward_per_point, "WRAP", "green");

        Ok(())
    }
}
