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

//! [ChainStateReader] and [PriceQuoter] backed by a JSON-RPC provider.

use alloy::{
    primitives::{Address, BlockNumber, U256},
    providers::Provider,
};

use crate::{
    accumulator::CurrencyClass,
    contracts::{IERC20, IERC7527Agency, IERC7527App, ILpStake, INftStake, IUniswapV2Router02},
    error::ChainReadError,
    reader::{
        AgencyStrategy, AppStakingRecord, ChainStateReader, L1Pool, LpStakePoolState,
        PriceQuoter, StakePoolState,
    },
};

fn block_number(value: U256, field: &str) -> Result<BlockNumber, ChainReadError> {
    u64::try_from(value)
        .map_err(|_| ChainReadError::Decode(format!("{field} {value} does not fit a block number")))
}

/// Reads staking state through `eth_call`.
#[derive(Clone)]
pub struct RpcChainReader<P> {
    provider: P,
}

impl<P> RpcChainReader<P> {
    /// Create a reader over a connected provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

#[async_trait::async_trait]
impl<P: Provider + Clone> ChainStateReader for RpcChainReader<P> {
    async fn current_block(&self) -> Result<BlockNumber, ChainReadError> {
        Ok(self.provider.get_block_number().await?)
    }

    async fn stake_pool(&self, stake: Address) -> Result<StakePoolState, ChainReadError> {
        let contract = INftStake::new(stake, &self.provider);
        let token_per_block = contract.tokenPerBlock();
        let last_reward_block = contract.lastRewardBlock();
        let end_block_of_epoch = contract.endBlockOfEpoch();
        let (token_per_block, last_reward_block, end_block_of_epoch) = tokio::try_join!(
            token_per_block.call(),
            last_reward_block.call(),
            end_block_of_epoch.call()
        )?;

        Ok(StakePoolState {
            token_per_block,
            last_reward_block: block_number(last_reward_block, "lastRewardBlock")?,
            end_block_of_epoch: block_number(end_block_of_epoch, "endBlockOfEpoch")?,
        })
    }

    async fn l1_pool(
        &self,
        stake: Address,
        currency: CurrencyClass,
    ) -> Result<L1Pool, ChainReadError> {
        let contract = INftStake::new(stake, &self.provider);
        let (total_staked, acc_per_share) = match currency {
            CurrencyClass::Primary => {
                let pool = contract.l1StakingOfERC20().call().await?;
                (pool.tvl, pool.accTokenPerShare)
            }
            CurrencyClass::Native => {
                let pool = contract.l1StakingOfETH().call().await?;
                (pool.tvl, pool.accTokenPerShare)
            }
        };
        Ok(L1Pool { total_staked, acc_per_share })
    }

    async fn app_staking(
        &self,
        stake: Address,
        app: Address,
    ) -> Result<AppStakingRecord, ChainReadError> {
        let record = INftStake::new(stake, &self.provider).stakingOfNFT(app).call().await?;
        Ok(AppStakingRecord {
            tvl: record.tvl,
            points: record.points,
            last_reward_block: block_number(record.lastRewardBlock, "lastRewardBlock")?,
            acc_per_share: record.accTokenPerShare,
            reward_debt: record.rewardDebt,
            token_per_block: record.tokenPerBlock,
            unspent_rewards: record.unspentRewards,
            end_block_of_epoch: block_number(record.endBlockOfEpoch, "endBlockOfEpoch")?,
        })
    }

    async fn agency_strategy(&self, agency: Address) -> Result<AgencyStrategy, ChainReadError> {
        let strategy = IERC7527Agency::new(agency, &self.provider).getStrategy().call().await?;
        Ok(AgencyStrategy { app: strategy.app, currency: strategy.asset.currency })
    }

    async fn agency_of_app(&self, app: Address) -> Result<Address, ChainReadError> {
        Ok(IERC7527App::new(app, &self.provider).getAgency().call().await?)
    }

    async fn contract_name(&self, contract: Address) -> Result<String, ChainReadError> {
        Ok(IERC20::new(contract, &self.provider).name().call().await?)
    }

    async fn token_balance(
        &self,
        token: Address,
        holder: Address,
    ) -> Result<U256, ChainReadError> {
        Ok(IERC20::new(token, &self.provider).balanceOf(holder).call().await?)
    }

    async fn native_balance(&self, holder: Address) -> Result<U256, ChainReadError> {
        Ok(self.provider.get_balance(holder).await?)
    }

    async fn total_supply(&self, token: Address) -> Result<U256, ChainReadError> {
        Ok(IERC20::new(token, &self.provider).totalSupply().call().await?)
    }

    async fn lp_stake_pool(&self, lp_stake: Address) -> Result<LpStakePoolState, ChainReadError> {
        let contract = ILpStake::new(lp_stake, &self.provider);
        let reward_per_block = contract.rewardPerBlock();
        let lp_supply = contract.LPSupply();
        let end_block_of_epoch = contract.endBlockOfEpoch();
        let (reward_per_block, lp_supply, end_block_of_epoch) = tokio::try_join!(
            reward_per_block.call(),
            lp_supply.call(),
            end_block_of_epoch.call()
        )?;

        Ok(LpStakePoolState {
            reward_per_block,
            lp_supply,
            end_block_of_epoch: block_number(end_block_of_epoch, "endBlockOfEpoch")?,
        })
    }

    async fn lp_deposit(&self, lp_stake: Address, user: Address) -> Result<U256, ChainReadError> {
        Ok(ILpStake::new(lp_stake, &self.provider).userInfo(user).call().await?.amount)
    }
}

/// Quotes through a Uniswap V2 router's `getAmountsOut`.
#[derive(Clone)]
pub struct UniswapV2Quoter<P> {
    provider: P,
    router: Address,
}

impl<P> UniswapV2Quoter<P> {
    /// Create a quoter for `router`.
    pub fn new(provider: P, router: Address) -> Self {
        Self { provider, router }
    }
}

#[async_trait::async_trait]
impl<P: Provider + Clone> PriceQuoter for UniswapV2Quoter<P> {
    async fn quote_amount_out(
        &self,
        amount_in: U256,
        path: &[Address],
    ) -> Result<U256, ChainReadError> {
        let amounts = IUniswapV2Router02::new(self.router, &self.provider)
            .getAmountsOut(amount_in, path.to_vec())
            .call()
            .await?;
        amounts
            .last()
            .copied()
            .ok_or_else(|| ChainReadError::Decode("getAmountsOut returned no amounts".into()))
    }
}
