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

//! Off-chain projection of WRAP agency staking rewards.
//!
//! The staking contracts distribute emissions with MasterChef-style accumulators. This
//! crate replays their fixed-point integer arithmetic from a point-in-time snapshot to
//! answer three questions for an operator: what an agency (or a new ERC7527 position) will
//! earn through the end of an epoch, what it has accrued so far, and what the pools yield
//! per year.
//!
//! The math lives in plain functions over snapshot structs ([accumulator], [pool],
//! [fee_split], [apy], [liquidity]). [RewardProjector] reads those snapshots through the
//! [ChainStateReader] and [PriceQuoter] seams, with alloy-backed implementations in [rpc].

#![deny(missing_docs)]

pub mod accumulator;
pub mod apy;
pub mod contracts;
pub mod deployment;
pub mod epoch;
pub mod error;
pub mod fee_split;
pub mod liquidity;
pub mod pool;
pub mod projector;
pub mod reader;
pub mod rpc;
pub mod settings;

pub use accumulator::{
    AccountStakeRecord, AccumulatorProjector, AccumulatorState, CurrencyClass, RewardScale,
};
pub use apy::{AnnualizedYieldEstimator, DualCurrencyApy, BLOCKS_PER_YEAR};
pub use deployment::{Deployment, DeploymentBuilder, StakeVersion, MAINNET};
pub use epoch::{EpochResolution, EpochWindow, ProjectionMode};
pub use error::{ChainReadError, ProjectionError, RewardError};
pub use fee_split::{EmissionSplit, FeeShares, FeeSplitPolicy, Fraction};
pub use projector::{
    AppEpochStatus, AppStakeReport, DotAgencyApyReport, EpochRewardReport, EpochStatus,
    LpApyReport, LpStakeReport, RealizedRewardReport, RewardProjector,
};
pub use reader::{ChainStateReader, PriceQuoter, StaticQuoter};
pub use rpc::{RpcChainReader, UniswapV2Quoter};
pub use settings::{RewardsSettings, RewardsSettingsBuilder, DEFAULT_EPOCH_LENGTH};
