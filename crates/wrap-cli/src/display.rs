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

//! Display utilities for consistent CLI output formatting

use std::fmt::Display;

use alloy::primitives::{utils::format_units, Address, U256};
use colored::Colorize;
use url::Url;

/// Decimals of WRAP, WETH and the WRAP/WETH LP token
pub const TOKEN_DECIMALS: u8 = 18;

/// Standard display formatter for CLI output
pub struct DisplayManager {
    /// Optional network name to display in headers
    network: Option<String>,
}

impl DisplayManager {
    /// Create a new display manager
    pub fn new() -> Self {
        Self { network: None }
    }

    /// Create a display manager with network context
    pub fn with_network(network: impl Into<String>) -> Self {
        Self { network: Some(network.into()) }
    }

    /// Print a section header with optional network badge
    pub fn header(&self, title: &str) {
        match &self.network {
            Some(network) => println!("\n{} [{}]", title.bold(), network.blue().bold()),
            None => println!("\n{}", title.bold()),
        }
    }

    /// Print a labeled value with standard indentation
    pub fn item(&self, label: &str, value: impl Display) {
        println!("  {:<20} {}", format!("{}:", label), value);
    }

    /// Print a labeled value with custom color
    pub fn item_colored(&self, label: &str, value: impl Display, color: &str) {
        let colored_value = match color {
            "green" => value.to_string().green().to_string(),
            "cyan" => value.to_string().cyan().to_string(),
            "yellow" => value.to_string().yellow().to_string(),
            "dimmed" => value.to_string().dimmed().to_string(),
            _ => value.to_string(),
        };
        println!("  {:<20} {}", format!("{}:", label), colored_value);
    }

    /// Print an address with standard formatting
    pub fn address(&self, label: &str, address: Address) {
        self.item_colored(label, format_address(address), "dimmed");
    }

    /// Print a token amount with its symbol
    pub fn balance(&self, label: &str, amount: U256, symbol: &str, color: &str) {
        let amount = format_token(amount);
        let (colored_amount, colored_symbol) = match color {
            "green" => (amount.green().bold().to_string(), symbol.green().to_string()),
            "cyan" => (amount.cyan().bold().to_string(), symbol.cyan().to_string()),
            "yellow" => (amount.yellow().bold().to_string(), symbol.yellow().to_string()),
            _ => (amount, symbol.to_string()),
        };
        println!("  {:<20} {} {}", format!("{}:", label), colored_amount, colored_symbol);
    }

    /// Print a whole-percent yield
    pub fn percent(&self, label: &str, percent: U256) {
        self.item_colored(label, format!("{percent}%"), "green");
    }

    /// Print a status update
    pub fn status(&self, label: &str, status: &str, color: &str) {
        let colored_status = match color {
            "green" => status.green().bold().to_string(),
            "yellow" => status.yellow().to_string(),
            "cyan" => status.cyan().to_string(),
            _ => status.to_string(),
        };
        self.item(label, colored_status);
    }

    /// Print a note or additional info
    pub fn note(&self, message: &str) {
        println!("  {}", message.dimmed());
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Format an amount for display (removes trailing zeros)
pub fn format_amount(amount: &str) -> String {
    if !amount.contains('.') {
        return amount.to_string();
    }
    amount.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Format an 18-decimal token amount
pub fn format_token(amount: U256) -> String {
    match format_units(amount, TOKEN_DECIMALS) {
        Ok(formatted) => format_amount(&formatted),
        Err(_) => amount.to_string(),
    }
}

/// Format basis points as a percentage with two decimals
pub fn format_bps(bps: U256) -> String {
    let hundred = U256::from(100u64);
    format!("{}.{:0>2}%", bps / hundred, (bps % hundred).to_string())
}

/// Format an address for display
pub fn format_address(address: Address) -> String {
    format!("{:#x}", address)
}

/// Hide the path and query of an RPC URL, which often carry an API key
pub fn obscure_url(url: &Url) -> String {
    match url.host_str() {
        Some(host) => {
            let path = if url.path().len() > 1 || url.query().is_some() { "/***" } else { "" };
            format!("{}://{}{}", url.scheme(), host, path)
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount("1.500000"), "1.5");
        assert_eq!(format_amount("0.100000"), "0.1");
        assert_eq!(format_amount("10.000000"), "10");
        assert_eq!(format_amount("100"), "100");
    }

    #[test]
    fn test_format_token() {
        let amount = U256::from(1_500_000_000_000_000_000u64);
        assert_eq!(format_token(amount), "1.5");
        assert_eq!(format_token(U256::from(925_000u64)), "0.000000000000925");
        assert_eq!(format_token(U256::ZERO), "0");
    }

    #[test]
    fn test_format_bps() {
        assert_eq!(format_bps(U256::from(2_500u64)), "25.00%");
        assert_eq!(format_bps(U256::from(7u64)), "0.07%");
        assert_eq!(format_bps(U256::from(10_000u64)), "100.00%");
    }

    #[test]
    fn test_obscure_url() {
        let url = Url::parse("https://eth-mainnet.example.com/v2/secret-key").unwrap();
        assert_eq!(obscure_url(&url), "https://eth-mainnet.example.com/***");
        let url = Url::parse("http://localhost:8545").unwrap();
        assert_eq!(obscure_url(&url), "http://localhost");
    }
}
