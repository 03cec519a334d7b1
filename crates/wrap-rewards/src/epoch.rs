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

//! Epoch window classification.
//!
//! An epoch is a block window whose emission rate is fixed by the staking contract. It is
//! active while `current_block < end_block` and ended otherwise.

use alloy::primitives::BlockNumber;

/// Which end block a projection is priced against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionMode {
    /// Reward earned so far: an active epoch is bounded by the current block.
    RealizedSoFar,
    /// Reward through the end of the window: an active epoch is bounded by its end block.
    ProjectedToEnd,
}

/// A point-in-time view of an epoch window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpochWindow {
    /// Block at which the contract closes the epoch
    pub end_block: BlockNumber,
    /// Chain head at the time of the snapshot
    pub current_block: BlockNumber,
}

/// The block a projection should be priced against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpochResolution {
    /// Effective end block for the requested [ProjectionMode]
    pub effective_end_block: BlockNumber,
    /// Whether the window has already closed
    pub is_ended: bool,
}

impl EpochWindow {
    /// Create a window snapshot.
    pub fn new(end_block: BlockNumber, current_block: BlockNumber) -> Self {
        Self { end_block, current_block }
    }

    /// Whether the epoch has closed at the snapshot block.
    pub fn is_ended(&self) -> bool {
        self.current_block >= self.end_block
    }

    /// Blocks left until the window closes, zero once ended.
    pub fn remaining_blocks(&self) -> u64 {
        self.end_block.saturating_sub(self.current_block)
    }

    /// Pick the effective end block for a projection.
    ///
    /// Once the epoch has ended both modes are priced against `end_block`, since the
    /// contract stops accruing there.
    pub fn resolve(&self, mode: ProjectionMode) -> EpochResolution {
        if self.is_ended() {
            return EpochResolution { effective_end_block: self.end_block, is_ended: true };
        }
        let effective_end_block = match mode {
            ProjectionMode::RealizedSoFar => self.current_block,
            ProjectionMode::ProjectedToEnd => self.end_block,
        };
        EpochResolution { effective_end_block, is_ended: false }
    }

    /// Estimated end of the next window once this one has ended.
    pub fn next_end_estimate(&self, epoch_length: u64) -> BlockNumber {
        self.current_block.saturating_add(epoch_length)
    }
}
