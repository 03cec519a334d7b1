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

//! Contract addresses and staking contract revisions.

use std::{fmt, str::FromStr};

use alloy::primitives::{address, Address};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::{accumulator::RewardScale, error::ProjectionError};

/// Revision of the NFT staking contract.
///
/// The revisions differ in the fixed-point scale of their accumulators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StakeVersion {
    /// First revision, accumulator scaled by 1e12
    #[default]
    V1,
    /// Second revision, accumulator scaled by 1e20
    V2,
}

impl StakeVersion {
    /// Accumulator scale used by this revision.
    pub const fn default_scale(&self) -> RewardScale {
        match self {
            Self::V1 => RewardScale::E12,
            Self::V2 => RewardScale::E20,
        }
    }
}

impl fmt::Display for StakeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1 => write!(f, "v1"),
            Self::V2 => write!(f, "v2"),
        }
    }
}

impl FromStr for StakeVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "v1" | "1" => Ok(Self::V1),
            "v2" | "2" => Ok(Self::V2),
            other => Err(format!("unknown stake version: {other} (expected v1 or v2)")),
        }
    }
}

/// Contract addresses of a WRAP deployment.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, Builder)]
pub struct Deployment {
    /// NFT staking contract, first revision.
    pub nft_stake_v1_address: Address,

    /// NFT staking contract, second revision.
    #[builder(setter(into, strip_option), default)]
    pub nft_stake_v2_address: Option<Address>,

    /// LP token staking contract.
    #[builder(setter(into, strip_option), default)]
    pub lp_stake_address: Option<Address>,

    /// WRAP token; the primary reward currency.
    pub wrap_token_address: Address,

    /// Wrapped native asset.
    pub weth_address: Address,

    /// Uniswap V2 router used for quotes.
    pub uniswap_router_address: Address,

    /// WRAP/WETH Uniswap V2 pair, which is also the staked LP token.
    pub wrap_weth_pair_address: Address,

    /// Holder of the WRAP funding the next agency staking epoch.
    pub agency_reward_pool_address: Address,

    /// Holder of the WRAP funding the next LP staking epoch.
    pub lp_reward_pool_address: Address,
}

impl Deployment {
    /// NFT staking contract for a revision.
    pub fn nft_stake_address(&self, version: StakeVersion) -> Result<Address, ProjectionError> {
        match version {
            StakeVersion::V1 => Ok(self.nft_stake_v1_address),
            StakeVersion::V2 => {
                self.nft_stake_v2_address.ok_or(ProjectionError::MissingDeployment("nft stake v2"))
            }
        }
    }

    /// LP staking contract.
    pub fn lp_stake(&self) -> Result<Address, ProjectionError> {
        self.lp_stake_address.ok_or(ProjectionError::MissingDeployment("lp stake"))
    }
}

/// [Deployment] on Ethereum mainnet.
///
/// The second staking revision and the LP staking contract have no canonical address;
/// set them through [DeploymentBuilder] or the CLI config.
pub const MAINNET: Deployment = Deployment {
    nft_stake_v1_address: address!("0x89eb45962e758e7603cfd843f1b563b97cb84da8"),
    nft_stake_v2_address: None,
    lp_stake_address: None,
    wrap_token_address: address!("0x989436e4194af162546f595afc6336a15b3dca7d"),
    weth_address: address!("0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"),
    uniswap_router_address: address!("0x7a250d5630b4cf539739df2c5dacb4c659f2488d"),
    wrap_weth_pair_address: address!("0x5ff788f688650d3b0cb37e976e71d604d8229064"),
    agency_reward_pool_address: address!("0xc1d65a61955ae7a0194b05cc53f05d9275c553b0"),
    lp_reward_pool_address: address!("0xe3c6ef4ccf39e117a5504653b5a704abd091c7d3"),
};
