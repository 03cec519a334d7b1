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

/// Project an agency's reward over the current epoch
#[derive(Args, Clone, Debug)]
pub struct RewardsEpochReward {
    /// App (ERC7527) contract of the agency
    pub app: Address,

    /// Rewards configuration (RPC URL, stake version, addresses)
    #[clap(flatten)]
    pub rewards_config: RewardsConfig,
}

impl RewardsEpochReward {
    /// Run the epoch-reward command
    pub async fn run(&self, _global_config: &GlobalConfig) -> Result<()> {
        let rewards_config = self.rewards_config.clone().load_from_files()?;
        let projector = rewards_config.projector()?;

        let report = projector
            .dot_agency_epoch_report(self.app)
            .await
            .context("Failed to project agency epoch reward")?;
        let projection = &report.projection;

        let display = DisplayManager::with_network("Ethereum Mainnet");
        display.header("Agency Epoch Reward");
        display.address("App", report.app);
        display.address("Agency", report.agency);
        display.balance("Agency TVL", report.agency_tvl, report.currency.symbol(), "cyan");
        display.balance("Stake TVL", projection.stake_tvl, report.currency.symbol(), "cyan");
        if projection.is_ended {
            display.status("Epoch", "ended", "yellow");
            display.item("Next epoch end", format!("~{}", projection.end_block));
        } else {
            display.status("Epoch", "active", "green");
            display.item("Epoch end", projection.end_block);
        }
        display.balance("Epoch reward", projection.epoch_reward, "WRAP", "green");
        display.balance("dotAgency (8%)", projection.shares.dot_agency, "WRAP", "green");
        display.balance("ERC7527 (90%)", projection.shares.app, "WRAP", "green");
        if projection.is_ended {
            display.note("Estimated from the reward pool balance funding the next epoch");
        }

        Ok(())
    }
}
