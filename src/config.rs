use crate::prelude::*;
use crate::commands::refresh::{DEFAULT_MAX_BATTERIES, MAX_BATTERIES};

use serde::Deserialize;
use std::collections::HashSet;

/// Device topology and logging settings for the planning tool.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_loglevel")]
    pub loglevel: String,

    /// Inverter family; leave unset when it isn't known yet.
    pub model: Option<Model>,

    #[serde(default = "Config::default_number_batteries")]
    pub number_batteries: u8,

    #[serde(default = "Config::default_max_batteries")]
    pub max_batteries: u8,

    #[serde(default = "Vec::new")]
    pub additional_holding_registers: Vec<u16>,
}

impl Config {
    pub fn new(file: String) -> Result<Self> {
        info!("Reading configuration from {}", file);
        let content = std::fs::read_to_string(&file)
            .map_err(|err| anyhow!("config.rs:error reading {}: {}", file, err))?;

        let config = Self::from_yaml(&content)?;

        info!("Configuration loaded successfully:");
        info!(
            "  Model: {}",
            config.model.map(|m| m.to_string()).unwrap_or_else(|| "unspecified".to_string())
        );
        info!("  Batteries: {} (max {})", config.number_batteries, config.max_batteries);
        info!(
            "  Additional holding registers: {:?}",
            config.additional_holding_registers
        );
        info!("  Log Level: {}", config.loglevel);

        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn command_builder(&self) -> CommandBuilder {
        CommandBuilder::new(self.model)
    }

    pub fn refresh_plan(&self, complete: bool) -> RefreshPlan {
        RefreshPlan {
            complete,
            number_batteries: self.number_batteries,
            max_batteries: self.max_batteries,
            additional_holding_registers: self.additional_holding_registers.clone(),
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.loglevel.parse().unwrap_or(log::LevelFilter::Info)
    }

    fn validate(&self) -> Result<()> {
        if self.loglevel.parse::<log::LevelFilter>().is_err() {
            bail!("loglevel {} is not one of off, error, warn, info, debug, trace", self.loglevel);
        }
        if self.max_batteries == 0 {
            bail!("max_batteries must be at least 1");
        }
        if self.max_batteries > MAX_BATTERIES {
            bail!("max_batteries must be at most {}", MAX_BATTERIES);
        }
        if self.number_batteries > self.max_batteries {
            bail!(
                "number_batteries ({}) cannot exceed max_batteries ({})",
                self.number_batteries,
                self.max_batteries
            );
        }

        let mut seen = HashSet::new();
        for register in &self.additional_holding_registers {
            if !seen.insert(register) {
                return Err(anyhow!(
                    "config.rs:additional holding register {} listed more than once",
                    register
                ));
            }
        }

        Ok(())
    }

    fn default_loglevel() -> String {
        "info".to_string()
    }

    fn default_number_batteries() -> u8 {
        1
    }

    fn default_max_batteries() -> u8 {
        DEFAULT_MAX_BATTERIES
    }
}
