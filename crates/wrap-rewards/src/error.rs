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

//! Error types for reward projection.

use alloy::primitives::{Address, U256};
use thiserror::Error;

/// Errors raised by the pure reward math.
///
/// None of these are retried by the projector; the caller decides whether to re-fetch a
/// snapshot, special-case a bootstrap scenario, or abort.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RewardError {
    /// The snapshot violates a monotonicity invariant of the on-chain accumulator.
    #[error("invalid state snapshot: {0}")]
    InvalidStateSnapshot(String),

    /// Per-share accounting was requested against a pool with nothing staked.
    #[error("total staked is zero")]
    ZeroStake,

    /// Yield was requested against a pool with zero value locked.
    #[error("pool TVL is zero, yield is undefined")]
    ZeroTvl,

    /// A liquidity pool reported zero LP token supply.
    #[error("LP token total supply is zero")]
    ZeroSupply,

    /// An intermediate value exceeded 256 bits.
    #[error("arithmetic overflow in {0}")]
    Overflow(&'static str),

    /// A fraction with a zero denominator.
    #[error("fraction {numerator}/{denominator} has a zero denominator")]
    InvalidFraction {
        /// Numerator of the rejected fraction
        numerator: U256,
        /// Denominator of the rejected fraction
        denominator: U256,
    },
}

impl RewardError {
    pub(crate) fn snapshot(msg: impl Into<String>) -> Self {
        Self::InvalidStateSnapshot(msg.into())
    }
}

/// Errors raised while reading chain state or quoting prices.
#[derive(Error, Debug)]
pub enum ChainReadError {
    /// Contract call failed
    #[error("RPC error: {0}")]
    Rpc(#[from] alloy::contract::Error),

    /// Transport level failure talking to the node
    #[error("transport error: {0}")]
    Transport(#[from] alloy::transports::TransportError),

    /// A returned value could not be interpreted
    #[error("decode error: {0}")]
    Decode(String),

    /// The value is not available from this reader
    #[error("unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised by [crate::RewardProjector].
#[derive(Error, Debug)]
pub enum ProjectionError {
    /// Reading the snapshot failed
    #[error(transparent)]
    Read(#[from] ChainReadError),

    /// The snapshot was read but the math rejected it
    #[error(transparent)]
    Reward(#[from] RewardError),

    /// The agency is denominated in a currency that earns no staking rewards
    #[error("agency currency {0} is neither WRAP nor the native asset")]
    UnsupportedCurrency(Address),

    /// The app has never started an L2 staking epoch
    #[error("staking has not been initiated for app {0}")]
    StakingNotStarted(Address),

    /// A contract address required by the operation is not configured
    #[error("deployment is missing the {0} address")]
    MissingDeployment(&'static str),
}
