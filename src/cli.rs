//! Command-line interface parsing for the shopfront client
//!
//! This module handles parsing of CLI arguments using clap, including the
//! --product flag for opening directly on a product detail page and the
//! --backend-url override.

use clap::Parser;
use thiserror::Error;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The product id argument was empty
    #[error("Invalid product id: '{0}'. Product ids must be non-empty")]
    InvalidProductId(String),
}

/// Shopfront - browse a storefront backend from the terminal
#[derive(Parser, Debug)]
#[command(name = "shopfront")]
#[command(about = "Browse featured products, categories, and product details")]
#[command(version)]
pub struct Cli {
    /// Open directly on a product detail page
    ///
    /// Examples:
    ///   shopfront --product 64a1f0c2e8b4a52f9c1d7a31
    #[arg(long, value_name = "PRODUCT_ID")]
    pub product: Option<String>,

    /// Override the backend base URL from the config file
    #[arg(long, value_name = "URL")]
    pub backend_url: Option<String>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    /// Product detail page to open after the initial load, if any
    pub initial_product: Option<String>,
    /// Backend base URL override, if any
    pub backend_url: Option<String>,
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with appropriate settings
    /// * `Err(CliError)` if an invalid product id was specified
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let initial_product = match &cli.product {
            None => None,
            Some(id) => {
                let trimmed = id.trim();
                if trimmed.is_empty() {
                    return Err(CliError::InvalidProductId(id.clone()));
                }
                Some(trimmed.to_string())
            }
        };

        Ok(StartupConfig {
            initial_product,
            backend_url: cli.backend_url.clone(),
        })
    }
}
