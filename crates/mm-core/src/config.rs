use crate::error::{IndexerError, Result};
use alloy_primitives::Address;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Deployment configuration loaded from JSON file
#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentConfig {
    /// Address of the batched market-maker contract
    #[serde(rename = "marketMaker")]
    pub market_maker: Address,
    #[serde(rename = "startBlock", default)]
    pub start_block: u64,
}

/// Runtime configuration from environment variables
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub chain_id: u64,
    pub event_log: PathBuf,
}

/// Complete indexer configuration
#[derive(Debug, Clone)]
pub struct IndexerConfig {
    pub chain_id: u64,
    pub market_maker: Address,
    pub start_block: u64,
    /// NDJSON file of `eth_getLogs`-shaped records to replay
    pub event_log: PathBuf,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        let chain_id = env::var("CHAIN_ID")
            .map_err(|_| IndexerError::MissingEnvVar("CHAIN_ID".to_string()))?
            .parse::<u64>()
            .map_err(|_| IndexerError::MissingEnvVar("CHAIN_ID (invalid format)".to_string()))?;

        let event_log = env::var("EVENT_LOG")
            .map_err(|_| IndexerError::MissingEnvVar("EVENT_LOG".to_string()))?;

        Ok(Self {
            chain_id,
            event_log: PathBuf::from(event_log.trim()),
        })
    }
}

impl DeploymentConfig {
    /// Load deployment configuration from JSON file
    pub fn load(chain_id: u64) -> Result<Self> {
        let path = Self::deployment_path(chain_id);
        let content = fs::read_to_string(&path)
            .map_err(|_| IndexerError::DeploymentFileNotFound(path.display().to_string()))?;

        serde_json::from_str(&content).map_err(|e| IndexerError::DeploymentParseError(e.to_string()))
    }

    fn deployment_path(chain_id: u64) -> PathBuf {
        PathBuf::from(format!("deployments/{}.json", chain_id))
    }
}

impl IndexerConfig {
    /// Load complete configuration from environment and deployment file
    pub fn load() -> Result<Self> {
        let env_config = EnvConfig::load()?;
        let deployment = DeploymentConfig::load(env_config.chain_id)?;

        Ok(Self {
            chain_id: env_config.chain_id,
            market_maker: deployment.market_maker,
            start_block: deployment.start_block,
            event_log: env_config.event_log,
        })
    }
}
