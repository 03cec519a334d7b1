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

use anyhow::{Context, Result};
use clap::Args;

use crate::{
    config::{GlobalConfig, RewardsConfig},
    display::DisplayManager,
};

/// Show the yield of the LP staking pool
#[derive(Args, Clone, Debug)]
pub struct RewardsLpApy {
    /// Rewards configuration (RPC URL, stake version, addresses)
    #[clap(flatten)]
    pub rewards_config: RewardsConfig,
}

impl RewardsLpApy {
    /// Run the lp-apy command
    pub async fn run(&self, _global_config: &GlobalConfig) -> Result<()> {
        let rewards_config = self.rewards_config.clone().load_from_files()?;
        let projector = rewards_config.projector()?;

        let report = projector.lp_apy().await.context("Failed to compute LP staking APY")?;

        let display = DisplayManager::with_network("Ethereum Mainnet");
        display.header("LP Staking APY");
        display.balance("LP staked", report.staked_lp, "WRAP/WETH LP", "cyan");
        display.balance("WRAP leg", report.underlying.primary, "WRAP", "cyan");
        display.balance("WETH leg", report.underlying.secondary, "WETH", "cyan");
        display.balance("TVL", report.lp_tvl, "WRAP", "cyan");
        display.percent("APY", report.apy);
        display.note("WETH is valued with an unchecked Uniswap V2 quote");

        Ok(())
    }
}
