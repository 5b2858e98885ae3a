//! Pipeline configuration from YAML

use crate::core::{discipline::Discipline, model::{Address, CustomerId}};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level pipeline configuration loaded from YAML
///
/// Every field has a default, so an empty document describes the stock
/// stand-in workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Propagation discipline used by the orchestrator
    #[serde(default)]
    pub discipline: Discipline,

    /// Stand-in customer directory
    #[serde(default)]
    pub directory: DirectoryConfig,

    /// Names classified as business customers
    #[serde(default = "default_business_customers")]
    pub business_customers: Vec<String>,

    /// Home address handed out to every customer
    #[serde(default = "default_home_address")]
    pub home_address: AddressConfig,

    /// Work address for business customers (`null` = no work address)
    #[serde(default = "default_work_address")]
    pub work_address: Option<AddressConfig>,

    /// Stand-in mail dispatcher
    #[serde(default)]
    pub sender: SenderConfig,
}

/// Stand-in customer directory configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Name given to every customer the directory finds
    #[serde(default = "default_customer_name")]
    pub customer_name: String,

    /// The identifier the directory never finds
    #[serde(default)]
    pub missing_customer_id: CustomerId,
}

/// Address as written in YAML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressConfig {
    pub street: String,
    pub house_number: i32,
    pub city: String,
}

/// Stand-in mail dispatcher configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderConfig {
    /// Status text returned for every dispatched letter
    #[serde(default = "default_sender_status")]
    pub status: String,
}

fn default_customer_name() -> String {
    "Robbert".to_string()
}

fn default_business_customers() -> Vec<String> {
    vec![default_customer_name()]
}

fn default_home_address() -> AddressConfig {
    AddressConfig {
        street: "privestraat".to_string(),
        house_number: 1,
        city: "Adam".to_string(),
    }
}

fn default_work_address() -> Option<AddressConfig> {
    Some(AddressConfig {
        street: "werkstraat".to_string(),
        house_number: 2,
        city: "Rdam".to_string(),
    })
}

fn default_sender_status() -> String {
    "ok".to_string()
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            customer_name: default_customer_name(),
            missing_customer_id: 0,
        }
    }
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            status: default_sender_status(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            discipline: Discipline::default(),
            directory: DirectoryConfig::default(),
            business_customers: default_business_customers(),
            home_address: default_home_address(),
            work_address: default_work_address(),
            sender: SenderConfig::default(),
        }
    }
}

impl From<&AddressConfig> for Address {
    fn from(config: &AddressConfig) -> Self {
        Address::new(config.street.clone(), config.house_number, config.city.clone())
    }
}

impl AddressConfig {
    fn validate(&self, field: &str) -> Result<()> {
        if self.street.trim().is_empty() {
            anyhow::bail!("{}: street must not be empty", field);
        }
        if self.city.trim().is_empty() {
            anyhow::bail!("{}: city must not be empty", field);
        }
        if self.house_number <= 0 {
            anyhow::bail!(
                "{}: house number must be positive, got {}",
                field,
                self.house_number
            );
        }
        Ok(())
    }
}

impl PipelineConfig {
    /// Load pipeline configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse pipeline configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_yaml rejects an empty document, which we treat as all defaults
        let config: PipelineConfig = if yaml.trim().is_empty() {
            PipelineConfig::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the pipeline configuration
    pub fn validate(&self) -> Result<()> {
        if self.directory.customer_name.trim().is_empty() {
            anyhow::bail!("directory.customer_name must not be empty");
        }

        for name in &self.business_customers {
            if name.trim().is_empty() {
                anyhow::bail!("business_customers must not contain empty names");
            }
        }

        self.home_address.validate("home_address")?;
        if let Some(work) = &self.work_address {
            work.validate("work_address")?;
        }

        if self.sender.status.trim().is_empty() {
            anyhow::bail!("sender.status must not be empty");
        }

        Ok(())
    }

    /// Same configuration with another discipline
    pub fn with_discipline(mut self, discipline: Discipline) -> Self {
        self.discipline = discipline;
        self
    }
}
