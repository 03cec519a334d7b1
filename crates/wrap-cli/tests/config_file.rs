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

use alloy::primitives::Address;
use wrap_cli::{
    config::RewardsConfig,
    config_file::{AddressOverrides, Config, RewardsFileConfig, SavedAgency},
};
use wrap_rewards::{StakeVersion, MAINNET};

#[test]
fn missing_file_loads_default() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".wrap").join("config.toml");
    let config = Config {
        rewards: Some(RewardsFileConfig {
            rpc_url: Some("http://localhost:8545".to_string()),
            stake_version: Some(StakeVersion::V2),
            accumulator_scale: Some(20),
        }),
        addresses: AddressOverrides {
            nft_stake_v2: Some(Address::repeat_byte(0x22)),
            ..Default::default()
        },
        agencies: vec![SavedAgency {
            address: Address::repeat_byte(0xaa),
            description: "my agency".to_string(),
        }],
    };

    config.save_to(&path).unwrap();
    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.agency(Address::repeat_byte(0xaa)).unwrap().description, "my agency");
    assert!(loaded.agency(Address::repeat_byte(0xbb)).is_none());
}

#[test]
fn parses_hand_written_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[rewards]
rpc_url = "https://eth.example/v2/key"
stake_version = "v2"

[addresses]
lp_stake = "0x0707070707070707070707070707070707070707"

[[agencies]]
address = "0x0101010101010101010101010101010101010101"
"#,
    )
    .unwrap();

    let file = Config::load_from(&path).unwrap();
    assert_eq!(file.agencies[0].description, "");

    let config = RewardsConfig::default().merge_file(&file).unwrap();
    let deployment = config.deployment();
    assert_eq!(deployment.lp_stake_address, Some(Address::repeat_byte(7)));
    assert_eq!(deployment.wrap_token_address, MAINNET.wrap_token_address);
    assert_eq!(config.settings().unwrap().stake_version, StakeVersion::V2);
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[rewards\nrpc_url = 1").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn rewards_config_rejects_unparseable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[rewards]
rpc_url = "http://x:8545"
stake_version = "v3"
"#,
    )
    .unwrap();

    let err = RewardsConfig::default().load_from_path(&path).unwrap_err();
    assert!(format!("{err:#}").contains("unknown variant"));
}

#[test]
fn rewards_config_loads_from_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[rewards]\nrpc_url = \"http://x:8545\"\nstake_version = \"v2\"\n")
        .unwrap();

    let config = RewardsConfig::default().load_from_path(&path).unwrap();
    assert_eq!(config.rpc_url.unwrap().host_str(), Some("x"));
    assert_eq!(config.stake_version, Some(StakeVersion::V2));

    let missing = RewardsConfig::default().load_from_path(&dir.path().join("none.toml")).unwrap();
    assert!(missing.rpc_url.is_none());
}
