//! @acp:module "Roadmap Types"
//! @acp:summary "Phases, time estimates and the assembled roadmap"
//! @acp:domain roadmap
//! @acp:layer model
//!
//! These types serialize directly to the JSON consumed by the report
//! and compatibility collaborators.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use super::types::{Priority, Recommendation, RecommendationType};
use crate::error::Result;

/// @acp:summary "Coarse reliability grade of a time estimate"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    #[default]
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }

    /// One step down; `low` stays `low`
    pub fn downgrade(self) -> Self {
        match self {
            Confidence::High => Confidence::Medium,
            Confidence::Medium | Confidence::Low => Confidence::Low,
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// @acp:summary "Day range with a confidence grade"
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TimeEstimate {
    pub min_days: f64,
    pub max_days: f64,
    pub confidence: Confidence,
}

impl TimeEstimate {
    pub fn new(min_days: f64, max_days: f64, confidence: Confidence) -> Self {
        Self {
            min_days,
            max_days,
            confidence,
        }
    }

    /// Zero-length estimate
    pub fn zero(confidence: Confidence) -> Self {
        Self::new(0.0, 0.0, confidence)
    }
}

/// @acp:summary "A batch of recommendations executed together"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    /// 1-based, contiguous
    pub number: usize,
    pub name: String,
    pub description: String,
    pub recommendations: Vec<Recommendation>,
    pub estimated_time: TimeEstimate,
    /// Phase numbers that must complete first
    pub prerequisites: Vec<usize>,
}

impl Phase {
    pub fn contains(&self, id: &str) -> bool {
        self.recommendations.iter().any(|r| r.id == id)
    }
}

/// @acp:summary "Complete phased modernization roadmap"
/// @acp:lock normal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    pub phases: Vec<Phase>,
    /// Elementwise sum of every phase estimate
    pub total_estimated_time: TimeEstimate,
    /// Recommendation titles along the longest dependency chain
    pub critical_path: Vec<String>,
    /// At most the configured quick-win limit (5 by default)
    pub quick_wins: Vec<Recommendation>,
}

impl Roadmap {
    /// @acp:summary "Phase number holding the given recommendation id"
    pub fn phase_of(&self, id: &str) -> Option<usize> {
        self.phases.iter().find(|p| p.contains(id)).map(|p| p.number)
    }

    /// Iterate every recommendation across all phases, in phase order
    pub fn recommendations(&self) -> impl Iterator<Item = &Recommendation> + '_ {
        self.phases.iter().flat_map(|p| p.recommendations.iter())
    }

    /// @acp:summary "Aggregate statistics for report generation"
    pub fn stats(&self) -> RoadmapStats {
        let mut stats = RoadmapStats {
            phase_count: self.phases.len(),
            quick_win_count: self.quick_wins.len(),
            critical_path_length: self.critical_path.len(),
            ..RoadmapStats::default()
        };

        for rec in self.recommendations() {
            stats.total_recommendations += 1;
            stats.by_priority.record(rec.priority);
            stats.by_type.record(rec.kind);
        }

        stats
    }

    /// @acp:summary "Serialize roadmap as pretty JSON"
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// @acp:summary "Write roadmap JSON to a file"
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

/// Counts per priority class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PriorityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl PriorityCounts {
    fn record(&mut self, priority: Priority) {
        match priority {
            Priority::Critical => self.critical += 1,
            Priority::High => self.high += 1,
            Priority::Medium => self.medium += 1,
            Priority::Low => self.low += 1,
        }
    }
}

/// Counts per recommendation type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TypeCounts {
    pub dependency: usize,
    pub framework: usize,
    pub pattern: usize,
}

impl TypeCounts {
    fn record(&mut self, kind: RecommendationType) {
        match kind {
            RecommendationType::Dependency => self.dependency += 1,
            RecommendationType::Framework => self.framework += 1,
            RecommendationType::Pattern => self.pattern += 1,
        }
    }
}

/// @acp:summary "Roadmap statistics"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapStats {
    pub total_recommendations: usize,
    pub phase_count: usize,
    pub by_priority: PriorityCounts,
    pub by_type: TypeCounts,
    pub quick_win_count: usize,
    pub critical_path_length: usize,
}
