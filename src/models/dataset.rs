//! Dataset case model

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{constants::cases, error::AppError};

/// Input distribution shape of a generated dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetCase {
    /// Generation order, unmodified
    #[default]
    Random,
    /// Ascending order
    Sorted,
    /// Descending order
    Reversed,
}

impl DatasetCase {
    /// Canonical name used in configuration and output
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetCase::Random => cases::RANDOM,
            DatasetCase::Sorted => cases::SORTED,
            DatasetCase::Reversed => cases::REVERSED,
        }
    }
}

impl FromStr for DatasetCase {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            cases::RANDOM => Ok(DatasetCase::Random),
            cases::SORTED => Ok(DatasetCase::Sorted),
            cases::REVERSED => Ok(DatasetCase::Reversed),
            _ => Err(AppError::InvalidCase(format!(
                "'{}' (expected one of: {})",
                s,
                cases::ALL.join(", ")
            ))),
        }
    }
}

impl std::fmt::Display for DatasetCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
