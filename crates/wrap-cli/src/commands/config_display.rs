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

//! Display of the effective configuration.

use anyhow::Result;
use clap::{Args, Subcommand};
use wrap_rewards::Deployment;

use crate::{
    config::{GlobalConfig, RewardsConfig},
    config_file::Config,
    display::{obscure_url, DisplayManager},
};

/// Commands for inspecting configuration
#[derive(Subcommand, Clone, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration and where each value comes from
    Show(ConfigShow),
}

impl ConfigCommands {
    /// Run the command
    pub async fn run(&self, global_config: &GlobalConfig) -> Result<()> {
        match self {
            Self::Show(cmd) => cmd.run(global_config).await,
        }
    }
}

/// Show the effective configuration
#[derive(Args, Clone, Debug)]
pub struct ConfigShow {
    /// Rewards configuration (RPC URL, stake version, addresses)
    #[clap(flatten)]
    pub rewards_config: RewardsConfig,
}

/// Where a configuration value came from
fn source(from_cli_or_env: bool, from_file: bool) -> &'static str {
    match (from_cli_or_env, from_file) {
        (true, _) => "cli/env",
        (false, true) => "config file",
        (false, false) => "default",
    }
}

impl ConfigShow {
    /// Run the config show command
    pub async fn run(&self, global_config: &GlobalConfig) -> Result<()> {
        let path = Config::path()?;
        let file = Config::load()?;
        let file_rewards = file.rewards.clone().unwrap_or_default();
        let config = self.rewards_config.clone().merge_file(&file)?;
        let settings = config.settings()?;

        let display = DisplayManager::new();
        display.header("WRAP CLI Configuration");
        display.item_colored("Config file", path.display(), "dimmed");
        display.item("Log level", global_config.log_level);

        match &config.rpc_url {
            Some(url) => display.item_colored(
                "RPC URL",
                format!(
                    "{} [{}]",
                    obscure_url(url),
                    source(self.rewards_config.rpc_url.is_some(), file_rewards.rpc_url.is_some())
                ),
                "dimmed",
            ),
            None => display.status("RPC URL", "not configured (set WRAP_RPC_URL)", "yellow"),
        }
        display.item(
            "Stake version",
            format!(
                "{} [{}]",
                settings.stake_version,
                source(
                    self.rewards_config.stake_version.is_some(),
                    file_rewards.stake_version.is_some()
                )
            ),
        );
        display.item(
            "Accumulator scale",
            format!(
                "{} [{}]",
                settings.scale().value(),
                source(
                    self.rewards_config.accumulator_scale.is_some(),
                    file_rewards.accumulator_scale.is_some()
                )
            ),
        );

        show_deployment(&display, &config.deployment());

        if !file.agencies.is_empty() {
            display.header("Saved Agencies");
            for agency in &file.agencies {
                let label =
                    if agency.description.is_empty() { "Agency" } else { &agency.description };
                display.address(label, agency.address);
            }
        }

        Ok(())
    }
}

fn show_deployment(display: &DisplayManager, deployment: &Deployment) {
    display.header("Contracts");
    display.address("NFT stake v1", deployment.nft_stake_v1_address);
    match deployment.nft_stake_v2_address {
        Some(addr) => display.address("NFT stake v2", addr),
        None => display.status("NFT stake v2", "not configured", "yellow"),
    }
    match deployment.lp_stake_address {
        Some(addr) => display.address("LP stake", addr),
        None => display.status("LP stake", "not configured", "yellow"),
    }
    display.address("WRAP", deployment.wrap_token_address);
    display.address("WETH", deployment.weth_address);
    display.address("Uniswap V2 router", deployment.uniswap_router_address);
    display.address("WRAP/WETH pair", deployment.wrap_weth_pair_address);
    display.address("Agency reward pool", deployment.agency_reward_pool_address);
    display.address("LP reward pool", deployment.lp_reward_pool_address);
}
