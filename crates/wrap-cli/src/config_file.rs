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

//! Configuration file management for the WRAP CLI.

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::primitives::Address;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use wrap_rewards::{Deployment, StakeVersion};

/// Get the configuration directory path (~/.wrap)
pub fn config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".wrap"))
}

/// Main configuration file (config.toml)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Rewards configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewards: Option<RewardsFileConfig>,

    /// Contract address overrides
    #[serde(default, skip_serializing_if = "AddressOverrides::is_empty")]
    pub addresses: AddressOverrides,

    /// Agencies the operator keeps track of
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub agencies: Vec<SavedAgency>,
}

/// Rewards configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RewardsFileConfig {
    /// RPC URL of an Ethereum node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpc_url: Option<String>,

    /// NFT staking contract revision
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stake_version: Option<StakeVersion>,

    /// Accumulator scale as a power of ten
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accumulator_scale: Option<u8>,
}

/// Replacements for the mainnet contract addresses
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AddressOverrides {
    /// NFT staking contract, first revision
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nft_stake_v1: Option<Address>,
    /// NFT staking contract, second revision
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nft_stake_v2: Option<Address>,
    /// LP staking contract
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lp_stake: Option<Address>,
    /// WRAP token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap_token: Option<Address>,
    /// WETH token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weth: Option<Address>,
    /// Uniswap V2 router
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uniswap_router: Option<Address>,
    /// WRAP/WETH pair
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap_weth_pair: Option<Address>,
    /// Agency epoch reward holder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency_reward_pool: Option<Address>,
    /// LP epoch reward holder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lp_reward_pool: Option<Address>,
}

impl AddressOverrides {
    /// Whether no address is overridden
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Replace the addresses of `deployment` that are set here
    pub fn apply(&self, mut deployment: Deployment) -> Deployment {
        if let Some(addr) = self.nft_stake_v1 {
            deployment.nft_stake_v1_address = addr;
        }
        if let Some(addr) = self.nft_stake_v2 {
            deployment.nft_stake_v2_address = Some(addr);
        }
        if let Some(addr) = self.lp_stake {
            deployment.lp_stake_address = Some(addr);
        }
        if let Some(addr) = self.wrap_token {
            deployment.wrap_token_address = addr;
        }
        if let Some(addr) = self.weth {
            deployment.weth_address = addr;
        }
        if let Some(addr) = self.uniswap_router {
            deployment.uniswap_router_address = addr;
        }
        if let Some(addr) = self.wrap_weth_pair {
            deployment.wrap_weth_pair_address = addr;
        }
        if let Some(addr) = self.agency_reward_pool {
            deployment.agency_reward_pool_address = addr;
        }
        if let Some(addr) = self.lp_reward_pool {
            deployment.lp_reward_pool_address = addr;
        }
        deployment
    }
}

/// An agency saved by the operator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedAgency {
    /// Agency contract address
    pub address: Address,
    /// Free-form description
    #[serde(default)]
    pub description: String,
}

impl Config {
    /// Load config from ~/.wrap/config.toml
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load config from `path`, or the default config if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to `path`, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Get the path to the config file
    pub fn path() -> Result<PathBuf> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Look up a saved agency
    pub fn agency(&self, address: Address) -> Option<&SavedAgency> {
        self.agencies.iter().find(|a| a.address == address)
    }
}
