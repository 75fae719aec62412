// crates/storewatch-core/src/types.rs

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Brand {
    #[serde(rename = "MLB")]
    Mlb,
    #[serde(rename = "MLB KIDS")]
    MlbKids,
    #[serde(rename = "Discovery")]
    Discovery,
}

impl Brand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Brand::Mlb => "MLB",
            Brand::MlbKids => "MLB KIDS",
            Brand::Discovery => "Discovery",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "HIGH_RISK")]
    HighRisk,
    #[serde(rename = "RISK")]
    Risk,
    #[serde(rename = "WATCH")]
    Watch,
    #[serde(rename = "NORMAL")]
    Normal,
    #[serde(rename = "NEW_STORE")]
    NewStore,
    #[serde(rename = "INSUFFICIENT_DATA")]
    InsufficientData,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::HighRisk => "HIGH_RISK",
            RiskLevel::Risk => "RISK",
            RiskLevel::Watch => "WATCH",
            RiskLevel::Normal => "NORMAL",
            RiskLevel::NewStore => "NEW_STORE",
            RiskLevel::InsufficientData => "INSUFFICIENT_DATA",
        }
    }

    /// Sort rank for operator-facing listings, most urgent first.
    pub fn severity_rank(&self) -> u8 {
        match self {
            RiskLevel::HighRisk => 1,
            RiskLevel::Risk => 2,
            RiskLevel::Watch => 3,
            RiskLevel::NewStore => 4,
            RiskLevel::Normal => 5,
            RiskLevel::InsufficientData => 6,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fiscal year's figures for a store. A `None` means the export had no
/// usable value, which is distinct from a reported zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearMetrics {
    pub net_sales: Option<f64>,
    pub return_rate: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YoyMetrics {
    pub sales_amount: Option<f64>,
    pub sales_pct: Option<f64>,
    pub return_rate: Option<f64>,
}

/// The unit of pipeline output: one classified store, immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedRecord {
    pub channel: String,
    pub shop_name: String,
    pub brand: Brand,
    pub year_2025: YearMetrics,
    pub year_2024: YearMetrics,
    pub yoy: YoyMetrics,
    pub risk_level: RiskLevel,
    pub suggestion: String,
    pub is_new_store: bool,
}
