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

//! Common configuration options for commands in the WRAP CLI.

use std::path::Path;

use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use anyhow::{Context, Result};
use clap::Args;
use tracing::level_filters::LevelFilter;
use url::Url;
use wrap_rewards::{
    Deployment, RewardProjector, RewardScale, RewardsSettings, RewardsSettingsBuilder,
    RpcChainReader, StakeVersion, UniswapV2Quoter, MAINNET,
};

use crate::config_file::{AddressOverrides, Config};

/// Projector reading chain state over JSON-RPC.
pub type RpcRewardProjector =
    RewardProjector<RpcChainReader<DynProvider>, UniswapV2Quoter<DynProvider>>;

/// Common configuration options for all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalConfig {
    /// Log level (error, warn, info, debug, trace)
    #[clap(long, env = "LOG_LEVEL", global = true, default_value = "warn")]
    pub log_level: LevelFilter,
}

/// Configuration for rewards commands
#[derive(Args, Debug, Clone, Default)]
pub struct RewardsConfig {
    /// RPC URL of an Ethereum mainnet node
    #[clap(long, env = "WRAP_RPC_URL")]
    pub rpc_url: Option<Url>,

    /// NFT staking contract revision (v1 or v2)
    #[clap(long, env = "STAKE_VERSION")]
    pub stake_version: Option<StakeVersion>,

    /// Accumulator scale as a power of ten; defaults to 12 for v1 and 20 for v2
    #[clap(long, env = "ACCUMULATOR_SCALE")]
    pub accumulator_scale: Option<u8>,

    /// Contract address overrides (loaded from config)
    #[clap(skip)]
    pub addresses: AddressOverrides,
}

impl RewardsConfig {
    /// Load configuration from ~/.wrap/config.toml
    pub fn load_from_files(self) -> Result<Self> {
        self.load_from_path(&Config::path()?)
    }

    /// Load configuration from the config file at `path`
    pub fn load_from_path(self, path: &Path) -> Result<Self> {
        let config = Config::load_from(path)?;
        self.merge_file(&config)
    }

    /// Fill in values not given on the command line or in the environment from `config`
    pub fn merge_file(mut self, config: &Config) -> Result<Self> {
        let file = config.rewards.clone().unwrap_or_default();

        if self.rpc_url.is_none() {
            if let Some(ref rpc_url) = file.rpc_url {
                self.rpc_url = Some(
                    Url::parse(rpc_url)
                        .with_context(|| format!("Invalid RPC URL in config file: {rpc_url}"))?,
                );
            }
        }
        if self.stake_version.is_none() {
            self.stake_version = file.stake_version;
        }
        if self.accumulator_scale.is_none() {
            self.accumulator_scale = file.accumulator_scale;
        }
        if self.addresses.is_empty() {
            self.addresses = config.addresses.clone();
        }

        Ok(self)
    }

    /// Access [Self::rpc_url] or return an error that can be shown to the user.
    pub fn require_rpc_url(&self) -> Result<Url> {
        self.rpc_url.clone().context(
            "RPC URL not provided.\n\n\
             To configure: set rpc_url under [rewards] in ~/.wrap/config.toml\n\
             Or set WRAP_RPC_URL env var",
        )
    }

    /// Projection settings for this configuration
    pub fn settings(&self) -> Result<RewardsSettings> {
        let mut builder = RewardsSettingsBuilder::default();
        builder.stake_version(self.stake_version.unwrap_or_default());
        if let Some(exponent) = self.accumulator_scale {
            builder.accumulator_scale(
                RewardScale::from_exponent(exponent).context("Invalid accumulator scale")?,
            );
        }
        builder.build().context("Failed to build rewards settings")
    }

    /// Mainnet deployment with the configured overrides applied
    pub fn deployment(&self) -> Deployment {
        self.addresses.apply(MAINNET)
    }

    /// Connect to the node and create a projector
    pub fn projector(&self) -> Result<RpcRewardProjector> {
        let rpc_url = self.require_rpc_url()?;
        let provider = ProviderBuilder::new().connect_http(rpc_url).erased();
        let deployment = self.deployment();
        let quoter = UniswapV2Quoter::new(provider.clone(), deployment.uniswap_router_address);

        Ok(RewardProjector::new(
            RpcChainReader::new(provider),
            quoter,
            deployment,
            self.settings()?,
        ))
    }
}
