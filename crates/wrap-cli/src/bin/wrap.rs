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

//! The WRAP CLI projects agency staking rewards and yields from mainnet state.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wrap_cli::{
    commands::{config_display::ConfigCommands, rewards::RewardsCommands},
    config::GlobalConfig,
};

#[derive(Subcommand, Clone, Debug)]
enum Command {
    /// Project staking rewards, realized rewards and yields
    #[command(subcommand)]
    Rewards(Box<RewardsCommands>),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Read-only reward projection for WRAP agencies",
    arg_required_else_help = true
)]
struct MainArgs {
    /// Subcommand to run
    #[command(subcommand)]
    command: Command,

    #[command(flatten, next_help_heading = "Global Options")]
    config: GlobalConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = MainArgs::parse();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(args.config.log_level.into())
                .from_env_lossy(),
        )
        .init();

    match &args.command {
        Command::Rewards(cmd) => cmd.run(&args.config).await,
        Command::Config(cmd) => cmd.run(&args.config).await,
    }
}
