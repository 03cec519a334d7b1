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

//! Orchestration of snapshot reads and reward math into operator-facing reports.
//!
//! Every report is computed from one fresh snapshot; nothing is cached between calls.

use alloy::primitives::{Address, BlockNumber, U256};

use crate::{
    accumulator::{AccumulatorProjector, CurrencyClass},
    apy::{AnnualizedYieldEstimator, DualCurrencyApy},
    deployment::Deployment,
    epoch::{EpochResolution, EpochWindow, ProjectionMode},
    error::ProjectionError,
    fee_split::{FeeShares, FeeSplitPolicy},
    liquidity::{common_denomination_tvl, quote_path, PairReserves, UnderlyingAmounts},
    pool::{
        project_app_stake, project_epoch_pool, project_lp_stake, AppStakeProjection,
        EpochPoolInput, EpochPoolProjection, LpStakeProjection,
    },
    reader::{ChainStateReader, PriceQuoter},
    settings::RewardsSettings,
};

/// Pool-wide and per-app epoch state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpochStatus {
    /// Chain head the status was read at
    pub current_block: BlockNumber,
    /// Pool-wide (L1) epoch
    pub pool: EpochWindow,
    /// The app's (L2) epoch, if an app was requested
    pub app: Option<AppEpochStatus>,
}

/// An app's (L2) epoch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppEpochStatus {
    /// The app
    pub app: Address,
    /// Its epoch window; `end_block == 0` if staking never started
    pub window: EpochWindow,
}

impl AppEpochStatus {
    /// Whether the app has ever started an epoch.
    pub fn started(&self) -> bool {
        self.window.end_block != 0
    }
}

/// An agency's expected reward over the current (or next) epoch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpochRewardReport {
    /// The app the report was requested for
    pub app: Address,
    /// The app's agency
    pub agency: Address,
    /// Currency the agency is denominated in
    pub currency: CurrencyClass,
    /// Value locked in the agency
    pub agency_tvl: U256,
    /// The projection itself
    pub projection: EpochPoolProjection,
}

/// Reward an agency's app has accrued so far and the dotAgency holder's share of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealizedRewardReport {
    /// The agency
    pub agency: Address,
    /// Its app
    pub app: Address,
    /// Currency the agency is denominated in
    pub currency: CurrencyClass,
    /// Block the reward was priced at
    pub resolution: EpochResolution,
    /// Accrued reward, in WRAP
    pub realized_reward: U256,
    /// Realized split of `realized_reward`
    pub shares: FeeShares,
}

/// Reward for staking one more ERC7527 position in an app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppStakeReport {
    /// The app
    pub app: Address,
    /// `name()` of the app
    pub name: String,
    /// The app's agency
    pub agency: Address,
    /// Currency the agency is denominated in
    pub currency: CurrencyClass,
    /// Points currently staked in the app
    pub points: U256,
    /// The projection itself
    pub projection: AppStakeProjection,
}

/// A user's LP staking position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LpStakeReport {
    /// The user
    pub user: Address,
    /// The projection itself
    pub projection: LpStakeProjection,
}

/// Yields of the agency staking pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotAgencyApyReport {
    /// Pool-wide emission per block
    pub token_per_block: U256,
    /// WRAP staked
    pub currency_tvl: U256,
    /// ETH staked
    pub native_tvl: U256,
    /// ETH staked, quoted in WRAP
    pub native_tvl_in_currency: U256,
    /// The yields
    pub apy: DualCurrencyApy,
}

/// Yield of the LP staking pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LpApyReport {
    /// Emission per block, scaled by [crate::pool::LP_REWARD_SCALE]
    pub reward_per_block: U256,
    /// LP tokens staked
    pub staked_lp: U256,
    /// Assets redeemable for the staked LP tokens
    pub underlying: UnderlyingAmounts,
    /// Staked LP valued in WRAP
    pub lp_tvl: U256,
    /// Yield in whole percent
    pub apy: U256,
}

/// Reads snapshots through a [ChainStateReader] and turns them into reports.
#[derive(Clone)]
pub struct RewardProjector<R, Q> {
    reader: R,
    quoter: Q,
    deployment: Deployment,
    settings: RewardsSettings,
}

impl<R, Q> RewardProjector<R, Q>
where
    R: ChainStateReader,
    Q: PriceQuoter,
{
    /// Create a projector over a reader and quoter.
    pub fn new(reader: R, quoter: Q, deployment: Deployment, settings: RewardsSettings) -> Self {
        Self { reader, quoter, deployment, settings }
    }

    /// Settings in effect.
    pub fn settings(&self) -> &RewardsSettings {
        &self.settings
    }

    /// Deployment being read.
    pub fn deployment(&self) -> &Deployment {
        &self.deployment
    }

    fn nft_stake(&self) -> Result<Address, ProjectionError> {
        self.deployment.nft_stake_address(self.settings.stake_version)
    }

    fn currency_class(&self, currency: Address) -> Result<CurrencyClass, ProjectionError> {
        CurrencyClass::from_currency(currency, self.deployment.wrap_token_address)
            .ok_or(ProjectionError::UnsupportedCurrency(currency))
    }

    async fn balance_in(
        &self,
        currency: CurrencyClass,
        holder: Address,
    ) -> Result<U256, ProjectionError> {
        let balance = match currency {
            CurrencyClass::Primary => {
                self.reader.token_balance(self.deployment.wrap_token_address, holder).await?
            }
            CurrencyClass::Native => self.reader.native_balance(holder).await?,
        };
        Ok(balance)
    }

    /// Quote an amount of the native asset in WRAP.
    async fn native_in_currency(&self, amount: U256) -> Result<U256, ProjectionError> {
        if amount.is_zero() {
            return Ok(U256::ZERO);
        }
        tracing::warn!(
            "Using AMM quote for {amount} wei of ETH without a staleness or slippage check"
        );
        let path = quote_path(self.deployment.weth_address, self.deployment.wrap_token_address);
        Ok(self.quoter.quote_amount_out(amount, &path).await?)
    }

    /// Classify the pool-wide epoch and, optionally, an app's epoch.
    pub async fn epoch_status(&self, app: Option<Address>) -> Result<EpochStatus, ProjectionError> {
        let stake = self.nft_stake()?;
        let current_block = self.reader.current_block().await?;
        let pool = self.reader.stake_pool(stake).await?;

        let app = match app {
            Some(app) => {
                let record = self.reader.app_staking(stake, app).await?;
                Some(AppEpochStatus {
                    app,
                    window: EpochWindow::new(record.end_block_of_epoch, current_block),
                })
            }
            None => None,
        };

        Ok(EpochStatus {
            current_block,
            pool: EpochWindow::new(pool.end_block_of_epoch, current_block),
            app,
        })
    }

    /// Expected reward of an app's agency over the current epoch, or the next one once the
    /// current epoch has ended.
    pub async fn dot_agency_epoch_report(
        &self,
        app: Address,
    ) -> Result<EpochRewardReport, ProjectionError> {
        let stake = self.nft_stake()?;
        let agency = self.reader.agency_of_app(app).await?;
        let strategy = self.reader.agency_strategy(agency).await?;
        let currency = self.currency_class(strategy.currency)?;

        let current_block = self.reader.current_block().await?;
        let pool = self.reader.stake_pool(stake).await?;
        let l1 = self.reader.l1_pool(stake, currency).await?;
        let record = self.reader.app_staking(stake, app).await?;
        let agency_tvl = self.balance_in(currency, agency).await?;
        let reward_pool_balance = self
            .reader
            .token_balance(
                self.deployment.wrap_token_address,
                self.deployment.agency_reward_pool_address,
            )
            .await?;

        tracing::debug!(
            %app,
            %agency,
            current_block,
            end_block = pool.end_block_of_epoch,
            %agency_tvl,
            pool_total_staked = %l1.total_staked,
            account_staked = %record.tvl,
            "Read epoch pool snapshot"
        );

        let input = EpochPoolInput {
            currency,
            token_per_block: pool.token_per_block,
            window: EpochWindow::new(pool.end_block_of_epoch, current_block),
            agency_tvl,
            pool_total_staked: l1.total_staked,
            account_staked: record.tvl,
            reward_pool_balance,
        };
        let projection = project_epoch_pool(&input, self.settings.epoch_length)?;
        tracing::info!(
            "Projected {} WRAP for agency {agency} through block {}",
            projection.epoch_reward,
            projection.end_block
        );

        Ok(EpochRewardReport { app, agency, currency, agency_tvl, projection })
    }

    /// Reward an agency's app has accrued up to now, and the dotAgency share of it.
    pub async fn dot_agency_realized_reward(
        &self,
        agency: Address,
    ) -> Result<RealizedRewardReport, ProjectionError> {
        let stake = self.nft_stake()?;
        let strategy = self.reader.agency_strategy(agency).await?;
        let currency = self.currency_class(strategy.currency)?;

        let current_block = self.reader.current_block().await?;
        let pool = self.reader.stake_pool(stake).await?;
        let l1 = self.reader.l1_pool(stake, currency).await?;
        let record = self.reader.app_staking(stake, strategy.app).await?;

        let state = pool.accumulator(&l1);
        let resolution = EpochWindow::new(pool.end_block_of_epoch, current_block)
            .resolve(ProjectionMode::RealizedSoFar);
        tracing::debug!(
            %agency,
            app = %strategy.app,
            effective_end_block = resolution.effective_end_block,
            last_reward_block = state.last_reward_block,
            acc_per_share = %state.acc_per_share,
            reward_debt = %record.reward_debt,
            "Read accumulator snapshot"
        );

        let projector = AccumulatorProjector::new(currency, self.settings.scale());
        let realized_reward =
            projector.realized_reward(&state, &record.account_record(), &resolution)?;
        let shares = FeeSplitPolicy::REALIZED.split(realized_reward)?;

        Ok(RealizedRewardReport {
            agency,
            app: strategy.app,
            currency,
            resolution,
            realized_reward,
            shares,
        })
    }

    /// Reward one more ERC7527 position staked in `app` would earn.
    pub async fn app_stake_report(&self, app: Address) -> Result<AppStakeReport, ProjectionError> {
        let stake = self.nft_stake()?;
        let agency = self.reader.agency_of_app(app).await?;
        let strategy = self.reader.agency_strategy(agency).await?;
        let currency = self.currency_class(strategy.currency)?;

        let current_block = self.reader.current_block().await?;
        let record = self.reader.app_staking(stake, app).await?;

        let projection = project_app_stake(
            &record.account_record(),
            record.token_per_block,
            current_block,
            self.settings.scale(),
            self.settings.epoch_length,
        )?
        .ok_or(ProjectionError::StakingNotStarted(app))?;
        let name = self.reader.contract_name(app).await?;

        Ok(AppStakeReport { app, name, agency, currency, points: record.points, projection })
    }

    /// A user's LP staking position and expected reward.
    pub async fn lp_stake_report(&self, user: Address) -> Result<LpStakeReport, ProjectionError> {
        let lp_stake = self.deployment.lp_stake()?;
        let current_block = self.reader.current_block().await?;
        let pool = self.reader.lp_stake_pool(lp_stake).await?;
        let amount = self.reader.lp_deposit(lp_stake, user).await?;
        let reward_pool_balance = self
            .reader
            .token_balance(
                self.deployment.wrap_token_address,
                self.deployment.lp_reward_pool_address,
            )
            .await?;

        let projection = project_lp_stake(
            amount,
            pool.lp_supply,
            pool.reward_per_block,
            &EpochWindow::new(pool.end_block_of_epoch, current_block),
            reward_pool_balance,
        )?;
        Ok(LpStakeReport { user, projection })
    }

    /// Yields of the WRAP and ETH sides of the agency staking pool.
    pub async fn dot_agency_apy(&self) -> Result<DotAgencyApyReport, ProjectionError> {
        let stake = self.nft_stake()?;
        let pool = self.reader.stake_pool(stake).await?;
        let currency_tvl = self.reader.l1_pool(stake, CurrencyClass::Primary).await?.total_staked;
        let native_tvl = self.reader.l1_pool(stake, CurrencyClass::Native).await?.total_staked;
        let native_tvl_in_currency = self.native_in_currency(native_tvl).await?;

        let estimator = AnnualizedYieldEstimator::new(self.settings.blocks_per_year);
        let apy = estimator.dual_currency_apy(
            pool.token_per_block,
            currency_tvl,
            native_tvl_in_currency,
        )?;

        Ok(DotAgencyApyReport {
            token_per_block: pool.token_per_block,
            currency_tvl,
            native_tvl,
            native_tvl_in_currency,
            apy,
        })
    }

    /// Yield of the LP staking pool, with the staked LP valued in WRAP.
    pub async fn lp_apy(&self) -> Result<LpApyReport, ProjectionError> {
        let lp_stake = self.deployment.lp_stake()?;
        let pair = self.deployment.wrap_weth_pair_address;
        let pool = self.reader.lp_stake_pool(lp_stake).await?;
        let reserves = PairReserves {
            primary_reserve: self
                .reader
                .token_balance(self.deployment.wrap_token_address, pair)
                .await?,
            secondary_reserve: self
                .reader
                .token_balance(self.deployment.weth_address, pair)
                .await?,
            lp_total_supply: self.reader.total_supply(pair).await?,
        };

        let underlying = reserves.underlying(pool.lp_supply)?;
        let secondary_in_primary = self.native_in_currency(underlying.secondary).await?;
        let lp_tvl = common_denomination_tvl(&underlying, secondary_in_primary)?;

        let estimator = AnnualizedYieldEstimator::new(self.settings.blocks_per_year);
        let apy = estimator.lp_apy(pool.reward_per_block, lp_tvl)?;

        Ok(LpApyReport {
            reward_per_block: pool.reward_per_block,
            staked_lp: pool.lp_supply,
            underlying,
            lp_tvl,
            apy,
        })
    }
}
