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
    display::{format_token, DisplayManager},
};

/// Show the yields of the agency staking pool
#[derive(Args, Clone, Debug)]
pub struct RewardsApy {
    /// Rewards configuration (RPC URL, stake version, addresses)
    #[clap(flatten)]
    pub rewards_config: RewardsConfig,
}

impl RewardsApy {
    /// Run the apy command
    pub async fn run(&self, _global_config: &GlobalConfig) -> Result<()> {
        let rewards_config = self.rewards_config.clone().load_from_files()?;
        let projector = rewards_config.projector()?;

        let report = projector.dot_agency_apy().await.context("Failed to compute staking APY")?;

        let display = DisplayManager::with_network("Ethereum Mainnet");
        display.header("dotAgency Staking APY");
        display.balance("Emission / block", report.token_per_block, "WRAP", "cyan");
        display.balance("Annual emission", report.apy.annual_reward, "WRAP", "cyan");
        display.balance("WRAP staked", report.currency_tvl, "WRAP", "cyan");
        display.item(
            "ETH staked",
            format!(
                "{} ETH (~{} WRAP)",
                format_token(report.native_tvl),
                format_token(report.native_tvl_in_currency)
            ),
        );
        display.percent("WRAP APY", report.apy.currency_apy);
        display.percent("ETH APY", report.apy.native_apy);
        display.note("ETH is valued with an unchecked Uniswap V2 quote");

        Ok(())
    }
}
