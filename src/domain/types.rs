// ==========================================
// Manufacturing Operations KPI Backend - Domain type definitions
// ==========================================
// Serialization format: snake_case (matches the stored values)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Production line status
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStatus {
    Active,
    Inactive,
    Maintenance,
}

impl fmt::Display for LineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineStatus::Active => write!(f, "active"),
            LineStatus::Inactive => write!(f, "inactive"),
            LineStatus::Maintenance => write!(f, "maintenance"),
        }
    }
}

impl LineStatus {
    /// Parse a status from its stored string form
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "active" => LineStatus::Active,
            "inactive" => LineStatus::Inactive,
            "maintenance" => LineStatus::Maintenance,
            _ => LineStatus::Inactive, // unknown statuses are treated as out of service
        }
    }

    /// String form stored in the database
    pub fn to_db_str(&self) -> &'static str {
        match self {
            LineStatus::Active => "active",
            LineStatus::Inactive => "inactive",
            LineStatus::Maintenance => "maintenance",
        }
    }
}

// ==========================================
// Kaizen idea category
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KaizenCategory {
    Productivity,
    Quality,
    Safety,
    CostReduction,
    Environment,
}

impl fmt::Display for KaizenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

impl KaizenCategory {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "productivity" => KaizenCategory::Productivity,
            "quality" => KaizenCategory::Quality,
            "safety" => KaizenCategory::Safety,
            "cost_reduction" => KaizenCategory::CostReduction,
            "environment" => KaizenCategory::Environment,
            _ => KaizenCategory::Productivity,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            KaizenCategory::Productivity => "productivity",
            KaizenCategory::Quality => "quality",
            KaizenCategory::Safety => "safety",
            KaizenCategory::CostReduction => "cost_reduction",
            KaizenCategory::Environment => "environment",
        }
    }
}

// ==========================================
// Kaizen idea priority
// ==========================================
// Order: Low < Medium < High
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KaizenPriority {
    Low,
    Medium,
    High,
}

impl fmt::Display for KaizenPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

impl KaizenPriority {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "low" => KaizenPriority::Low,
            "medium" => KaizenPriority::Medium,
            "high" => KaizenPriority::High,
            _ => KaizenPriority::Medium,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            KaizenPriority::Low => "low",
            KaizenPriority::Medium => "medium",
            KaizenPriority::High => "high",
        }
    }
}

// ==========================================
// Kaizen idea lifecycle status
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KaizenStatus {
    Submitted,
    UnderReview,
    Approved,
    Implemented,
    Rejected,
}

impl fmt::Display for KaizenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

impl KaizenStatus {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "submitted" => KaizenStatus::Submitted,
            "under_review" => KaizenStatus::UnderReview,
            "approved" => KaizenStatus::Approved,
            "implemented" => KaizenStatus::Implemented,
            "rejected" => KaizenStatus::Rejected,
            _ => KaizenStatus::Submitted,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            KaizenStatus::Submitted => "submitted",
            KaizenStatus::UnderReview => "under_review",
            KaizenStatus::Approved => "approved",
            KaizenStatus::Implemented => "implemented",
            KaizenStatus::Rejected => "rejected",
        }
    }

    /// Whether the idea is still open for review decisions
    pub fn is_open(&self) -> bool {
        matches!(self, KaizenStatus::Submitted | KaizenStatus::UnderReview)
    }
}
