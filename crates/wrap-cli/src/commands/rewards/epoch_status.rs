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

use std::{future::Future, num::ParseIntError, time::Duration};

use alloy::primitives::Address;
use anyhow::{bail, Context, Result};
use clap::Args;
use tokio::time::Instant;
use wrap_rewards::{EpochStatus, EpochWindow};

use crate::{
    config::{GlobalConfig, RewardsConfig},
    display::DisplayManager,
};

fn parse_secs(arg: &str) -> Result<Duration, ParseIntError> {
    Ok(Duration::from_secs(arg.parse()?))
}

/// Show whether the pool-wide epoch, and optionally an app's epoch, is active
#[derive(Args, Clone, Debug)]
pub struct RewardsEpochStatus {
    /// App (ERC7527) contract whose epoch to include
    #[clap(long)]
    pub app: Option<Address>,

    /// Poll until the epoch is active again
    #[clap(long)]
    pub wait: bool,

    /// Seconds between polls while waiting
    #[clap(long, default_value = "12", value_parser = parse_secs)]
    pub poll_interval: Duration,

    /// Seconds to wait before giving up
    #[clap(long, default_value = "3600", value_parser = parse_secs)]
    pub timeout: Duration,

    /// Rewards configuration (RPC URL, stake version, addresses)
    #[clap(flatten)]
    pub rewards_config: RewardsConfig,
}

/// The epoch a status is watched for: the app's if one was requested, else the pool's.
fn watched(status: &EpochStatus) -> EpochWindow {
    status.app.as_ref().map(|app| app.window).unwrap_or(status.pool)
}

/// Poll until the watched epoch is active, or fail once `timeout` has passed.
///
/// Fails on the first poll if the watched app has never started staking.
pub async fn wait_for_active_epoch<F, Fut>(
    mut poll: F,
    interval: Duration,
    timeout: Duration,
) -> Result<EpochStatus>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<EpochStatus>>,
{
    let deadline = Instant::now() + timeout;
    loop {
        let status = poll().await?;
        if let Some(app) = status.app.as_ref().filter(|app| !app.started()) {
            bail!("Staking not started for app {}, its epoch will not roll over", app.app);
        }
        let window = watched(&status);
        if !window.is_ended() {
            return Ok(status);
        }
        if Instant::now() + interval > deadline {
            bail!(
                "Epoch ending at block {} did not roll over within {}s",
                window.end_block,
                timeout.as_secs()
            );
        }
        tracing::info!(
            "Epoch ended at block {} (current {}), polling again in {}s",
            window.end_block,
            window.current_block,
            interval.as_secs()
        );
        tokio::time::sleep(interval).await;
    }
}

impl RewardsEpochStatus {
    /// Run the epoch-status command
    pub async fn run(&self, _global_config: &GlobalConfig) -> Result<()> {
        let rewards_config = self.rewards_config.clone().load_from_files()?;
        let projector = rewards_config.projector()?;

        let status = if self.wait {
            wait_for_active_epoch(
                || async {
                    projector.epoch_status(self.app).await.context("Failed to read epoch status")
                },
                self.poll_interval,
                self.timeout,
            )
            .await?
        } else {
            projector.epoch_status(self.app).await.context("Failed to read epoch status")?
        };

        let display = DisplayManager::with_network("Ethereum Mainnet");
        display.header("Epoch Status");
        display.item("Current block", status.current_block);
        show_window(&display, "Pool epoch", &status.pool);
        if let Some(app) = &status.app {
            display.address("App", app.app);
            if app.started() {
                show_window(&display, "App epoch", &app.window);
            } else {
                display.status("App epoch", "not started", "yellow");
            }
        }

        Ok(())
    }
}

fn show_window(display: &DisplayManager, label: &str, window: &EpochWindow) {
    if window.is_ended() {
        display.status(label, &format!("ended at block {}", window.end_block), "yellow");
    } else {
        display.status(
            label,
            &format!(
                "active until block {} ({} left)",
                window.end_block,
                window.remaining_blocks()
            ),
            "green",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use wrap_rewards::AppEpochStatus;

    fn status(current_block: u64, app_end: u64) -> EpochStatus {
        EpochStatus {
            current_block,
            pool: EpochWindow::new(5_000, current_block),
            app: Some(AppEpochStatus {
                app: Address::repeat_byte(1),
                window: EpochWindow::new(app_end, current_block),
            }),
        }
    }

    #[tokio::test]
    async fn returns_once_app_epoch_rolls_over() {
        let polls = AtomicU64::new(0);
        let result = wait_for_active_epoch(
            || {
                let n = polls.fetch_add(1, Ordering::SeqCst);
                // The app epoch is renewed on the third poll.
                let end = if n < 2 { 1_000 } else { 43_000 };
                async move { Ok(status(1_000 + n, end)) }
            },
            Duration::from_millis(1),
            Duration::from_secs(5),
        )
        .await
        .unwrap();

        assert_eq!(polls.load(Ordering::SeqCst), 3);
        assert_eq!(result.app.unwrap().window.end_block, 43_000);
    }

    #[tokio::test]
    async fn times_out_while_epoch_stays_ended() {
        let err = wait_for_active_epoch(
            || async { Ok(status(2_000, 1_000)) },
            Duration::from_millis(5),
            Duration::from_millis(20),
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("did not roll over"));
    }

    #[tokio::test]
    async fn app_without_staking_fails_immediately() {
        let polls = AtomicU64::new(0);
        let err = wait_for_active_epoch(
            || {
                polls.fetch_add(1, Ordering::SeqCst);
                async { Ok(status(2_000, 0)) }
            },
            Duration::from_millis(1),
            Duration::from_secs(5),
        )
        .await
        .unwrap_err();

        assert!(err.to_string().contains("Staking not started"));
        assert_eq!(polls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn read_errors_stop_polling() {
        let err = wait_for_active_epoch(
            || async { Err(anyhow::anyhow!("node unavailable")) },
            Duration::from_millis(1),
            Duration::from_secs(5),
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("node unavailable"));
    }

    #[test]
    fn pool_epoch_is_watched_without_app() {
        let status = EpochStatus { current_block: 10, pool: EpochWindow::new(20, 10), app: None };
        assert_eq!(watched(&status), status.pool);
    }
}
