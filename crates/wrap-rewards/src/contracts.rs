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

//! Contract interfaces read by the projector.

#![allow(missing_docs)]

alloy::sol! {
    /// NFT (ERC7527) staking contract with L1 pool accounting per currency.
    #[sol(rpc)]
    interface INftStake {
        function tokenPerBlock() external view returns (uint256);
        function lastRewardBlock() external view returns (uint256);
        function endBlockOfEpoch() external view returns (uint256);
        function l1StakingOfERC20() external view returns (uint256 tvl, uint256 accTokenPerShare);
        function l1StakingOfETH() external view returns (uint256 tvl, uint256 accTokenPerShare);
        function stakingOfNFT(address app) external view returns (
            uint256 tvl,
            uint256 points,
            uint256 lastRewardBlock,
            uint256 accTokenPerShare,
            uint256 rewardDebt,
            uint256 tokenPerBlock,
            uint256 unspentRewards,
            uint256 endBlockOfEpoch
        );
    }
}

alloy::sol! {
    /// LP token staking contract.
    #[sol(rpc)]
    interface ILpStake {
        function rewardPerBlock() external view returns (uint256);
        function LPSupply() external view returns (uint256);
        function endBlockOfEpoch() external view returns (uint256);
        function userInfo(address user) external view returns (uint256 amount, uint256 rewardDebt);
    }
}

alloy::sol! {
    /// Subset of ERC20 read by the projector.
    #[sol(rpc)]
    interface IERC20 {
        function name() external view returns (string);
        function balanceOf(address account) external view returns (uint256);
        function totalSupply() external view returns (uint256);
    }
}

alloy::sol! {
    /// ERC7527 agency.
    #[sol(rpc)]
    interface IERC7527Agency {
        struct Asset {
            address currency;
            uint256 basePremium;
            address feeRecipient;
            uint16 mintFeePercent;
            uint16 burnFeePercent;
        }

        function getStrategy()
            external
            view
            returns (address app, Asset memory asset, bytes memory attributeData);
    }
}

alloy::sol! {
    /// ERC7527 app.
    #[sol(rpc)]
    interface IERC7527App {
        function getAgency() external view returns (address);
    }
}

alloy::sol! {
    /// Uniswap V2 router quoting.
    #[sol(rpc)]
    interface IUniswapV2Router02 {
        function getAmountsOut(uint256 amountIn, address[] calldata path)
            external
            view
            returns (uint256[] memory amounts);
    }
}
