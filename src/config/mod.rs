//! @acp:module "Configuration"
//! @acp:summary "Calibration constants for scoring, estimation and quick-win selection"
//! @acp:domain roadmap
//! @acp:layer config
//!
//! Every field has a default, so a config file only needs the values it
//! overrides. Files may be JSON or YAML (picked by extension).

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, RoadmapError};
use crate::model::{Effort, RecommendationType};

/// @acp:summary "Top-level roadmap engine configuration"
/// @acp:lock normal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RoadmapConfig {
    /// Scoring weights and the medium/low cutoff
    pub scoring: ScoringConfig,

    /// Day ranges, multipliers and confidence thresholds
    pub estimation: EstimationConfig,

    /// Quick-win selection limits
    pub quick_wins: QuickWinConfig,

    /// Extra co-evolving package pairs, merged with the built-in table
    pub related_packages: Vec<[String; 2]>,
}

impl RoadmapConfig {
    /// @acp:summary "Load config from a JSON or YAML file"
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Self = match file_format(path)? {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Yaml => serde_yaml::from_str(&content)?,
        };
        Ok(config.normalized())
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = match file_format(path)? {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Yaml => serde_yaml::to_string(self)?,
        };
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @acp:summary "Load from a path if present, otherwise defaults"
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable roadmap config {:?}: {}", path, e);
            Self::default()
        })
    }

    /// Repair inconsistent values so the engine stays total
    pub fn normalized(mut self) -> Self {
        self.scoring = self.scoring.normalized();
        self.estimation = self.estimation.normalized();

        if self.quick_wins.limit == 0 {
            tracing::warn!("quickWins.limit of 0 replaced with default");
            self.quick_wins.limit = QuickWinConfig::default().limit;
        }

        self.related_packages
            .retain(|[a, b]| !a.trim().is_empty() && !b.trim().is_empty());

        self
    }
}

enum FileFormat {
    Json,
    Yaml,
}

fn file_format(path: &Path) -> Result<FileFormat> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Ok(FileFormat::Json),
        Some("yaml") | Some("yml") => Ok(FileFormat::Yaml),
        other => Err(RoadmapError::UnsupportedFormat(format!(
            "{:?} (expected .json, .yaml or .yml)",
            other.unwrap_or("")
        ))),
    }
}

/// Security-flagged items always score at least this much
pub const MIN_SECURITY_BONUS: f64 = 100.0;

/// @acp:summary "Weights of the recommendation score"
///
/// Score = security bonus (if any benefit mentions security)
///       + type weight + effort weight + benefit weight * min(benefits, cap)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringConfig {
    pub security_bonus: f64,
    pub framework_weight: f64,
    pub dependency_weight: f64,
    pub pattern_weight: f64,
    pub low_effort_weight: f64,
    pub medium_effort_weight: f64,
    pub high_effort_weight: f64,
    pub benefit_weight: f64,
    pub benefit_cap: usize,
    /// Scores at or above this map to `medium`, below to `low`
    pub medium_threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            security_bonus: 100.0,
            framework_weight: 30.0,
            dependency_weight: 20.0,
            pattern_weight: 10.0,
            low_effort_weight: 30.0,
            medium_effort_weight: 15.0,
            high_effort_weight: 5.0,
            benefit_weight: 5.0,
            benefit_cap: 5,
            medium_threshold: 60.0,
        }
    }
}

impl ScoringConfig {
    pub fn type_weight(&self, kind: RecommendationType) -> f64 {
        match kind {
            RecommendationType::Framework => self.framework_weight,
            RecommendationType::Dependency => self.dependency_weight,
            RecommendationType::Pattern => self.pattern_weight,
        }
    }

    pub fn effort_weight(&self, effort: Effort) -> f64 {
        match effort {
            Effort::Low => self.low_effort_weight,
            Effort::Medium => self.medium_effort_weight,
            Effort::High => self.high_effort_weight,
        }
    }

    /// Highest score reachable without the security bonus
    pub fn max_regular_score(&self) -> f64 {
        let type_max = self
            .framework_weight
            .max(self.dependency_weight)
            .max(self.pattern_weight);
        let effort_max = self
            .low_effort_weight
            .max(self.medium_effort_weight)
            .max(self.high_effort_weight);
        type_max + effort_max + self.benefit_weight * self.benefit_cap as f64
    }

    /// Smallest security bonus this config accepts
    pub fn min_security_bonus(&self) -> f64 {
        // f64::max ignores NaN, so non-finite weights still yield 100
        MIN_SECURITY_BONUS.max(self.max_regular_score() + 1.0)
    }

    fn normalized(mut self) -> Self {
        let minimum = self.min_security_bonus();
        if !self.security_bonus.is_finite() || self.security_bonus < minimum {
            tracing::warn!(
                "scoring.securityBonus {} does not dominate regular scores, raised to {}",
                self.security_bonus,
                minimum
            );
            self.security_bonus = minimum;
        }
        self
    }
}

/// Inclusive day range for one effort level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRange {
    pub min: f64,
    pub max: f64,
}

impl DayRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn normalized(self, label: &str) -> Self {
        let min = if self.min.is_finite() { self.min.max(0.0) } else { 0.0 };
        let max = if self.max.is_finite() { self.max.max(0.0) } else { 0.0 };
        if min > max {
            tracing::warn!("estimation.{} range inverted, swapping bounds", label);
            Self::new(max, min)
        } else {
            Self::new(min, max)
        }
    }
}

/// @acp:summary "Time estimation constants"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EstimationConfig {
    pub low_effort_days: DayRange,
    pub medium_effort_days: DayRange,
    pub high_effort_days: DayRange,
    pub framework_multiplier: f64,
    /// Pattern multiplier = min(1 + occurrences / divisor, cap)
    pub pattern_occurrence_divisor: f64,
    pub pattern_multiplier_cap: f64,
    /// Phases with at most this many items grade `high`
    pub phase_high_confidence_max_items: usize,
    /// Phases with more than this many items grade `low`
    pub phase_low_confidence_above_items: usize,
    /// Roadmaps with at most this many phases grade `high`
    pub total_high_confidence_max_phases: usize,
    /// Roadmaps with more than this many phases grade `low`
    pub total_low_confidence_above_phases: usize,
}

impl Default for EstimationConfig {
    fn default() -> Self {
        Self {
            low_effort_days: DayRange::new(0.5, 1.0),
            medium_effort_days: DayRange::new(1.0, 3.0),
            high_effort_days: DayRange::new(3.0, 7.0),
            framework_multiplier: 1.5,
            pattern_occurrence_divisor: 10.0,
            pattern_multiplier_cap: 3.0,
            phase_high_confidence_max_items: 3,
            phase_low_confidence_above_items: 10,
            total_high_confidence_max_phases: 2,
            total_low_confidence_above_phases: 5,
        }
    }
}

impl EstimationConfig {
    pub fn days_for(&self, effort: Effort) -> DayRange {
        match effort {
            Effort::Low => self.low_effort_days,
            Effort::Medium => self.medium_effort_days,
            Effort::High => self.high_effort_days,
        }
    }

    fn normalized(mut self) -> Self {
        self.low_effort_days = self.low_effort_days.normalized("lowEffortDays");
        self.medium_effort_days = self.medium_effort_days.normalized("mediumEffortDays");
        self.high_effort_days = self.high_effort_days.normalized("highEffortDays");

        let defaults = Self::default();
        if !(self.framework_multiplier.is_finite() && self.framework_multiplier > 0.0) {
            tracing::warn!("estimation.frameworkMultiplier invalid, using default");
            self.framework_multiplier = defaults.framework_multiplier;
        }
        if !(self.pattern_occurrence_divisor.is_finite() && self.pattern_occurrence_divisor > 0.0) {
            tracing::warn!("estimation.patternOccurrenceDivisor invalid, using default");
            self.pattern_occurrence_divisor = defaults.pattern_occurrence_divisor;
        }
        if !(self.pattern_multiplier_cap.is_finite() && self.pattern_multiplier_cap >= 1.0) {
            tracing::warn!("estimation.patternMultiplierCap invalid, using default");
            self.pattern_multiplier_cap = defaults.pattern_multiplier_cap;
        }
        self
    }
}

/// @acp:summary "Quick-win selection limits"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuickWinConfig {
    /// Maximum number of quick wins returned
    pub limit: usize,
    /// Non-urgent candidates need at least this many benefits
    pub min_benefits: usize,
}

impl Default for QuickWinConfig {
    fn default() -> Self {
        Self {
            limit: 5,
            min_benefits: 3,
        }
    }
}
