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
    config_file::Config,
    display::DisplayManager,
};

/// Show the reward an agency has accrued so far
#[derive(Args, Clone, Debug)]
pub struct RewardsRealized {
    /// Agency contract
    pub agency: Address,

    /// Rewards configuration (RPC URL, stake version, addresses)
    #[clap(flatten)]
    pub rewards_config: RewardsConfig,
}

impl RewardsRealized {
    /// Run the realized command
    pub async fn run(&self, _global_config: &GlobalConfig) -> Result<()> {
        let file = Config::load()?;
        let rewards_config = self.rewards_config.clone().merge_file(&file)?;
        let projector = rewards_config.projector()?;

        let report = projector
            .dot_agency_realized_reward(self.agency)
            .await
            .context("Failed to compute realized agency reward")?;

        let display = DisplayManager::with_network("Ethereum Mainnet");
        display.header("Realized Agency Reward");
        display.address("Agency", report.agency);
        if let Some(saved) = file.agency(self.agency) {
            if !saved.description.is_empty() {
                display.item("Description", &saved.description);
            }
        }
        display.address("App", report.app);
        display.item("Currency", report.currency.symbol());
        display.item("Priced at block", report.resolution.effective_end_block);
        if report.resolution.is_ended {
            display.status("Epoch", "ended", "yellow");
        }
        display.balance("Accrued", report.realized_reward, "WRAP", "green");
        display.balance("dotAgency share", report.shares.dot_agency, "WRAP", "green");
        display.balance("ERC7527 share", report.shares.app, "WRAP", "cyan");

        Ok(())
    }
}
