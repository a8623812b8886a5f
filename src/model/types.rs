//! @acp:module "Recommendation Types"
//! @acp:summary "Recommendation records and the dependency facts derived from them"
//! @acp:domain roadmap
//! @acp:layer model
//!
//! Recommendations arrive from an upstream generator. Every collection and
//! label is optional on the wire and defaults to empty, so loosely formed
//! input still deserializes.

use serde::{Deserialize, Deserializer, Serialize};

/// @acp:summary "Kind of modernization action"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationType {
    /// Library/package version update
    Dependency,
    /// Framework upgrade (e.g. a UI framework major version)
    Framework,
    /// Code pattern modernization
    Pattern,
}

impl RecommendationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationType::Dependency => "dependency",
            RecommendationType::Framework => "framework",
            RecommendationType::Pattern => "pattern",
        }
    }

    /// Ordering used inside a phase: frameworks first, then dependencies, then patterns
    pub fn precedence(&self) -> u8 {
        match self {
            RecommendationType::Framework => 0,
            RecommendationType::Dependency => 1,
            RecommendationType::Pattern => 2,
        }
    }
}

impl std::str::FromStr for RecommendationType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dependency" => Ok(RecommendationType::Dependency),
            "framework" => Ok(RecommendationType::Framework),
            "pattern" => Ok(RecommendationType::Pattern),
            _ => Err(format!("Unknown recommendation type: {}", s)),
        }
    }
}

impl std::fmt::Display for RecommendationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// @acp:summary "Effort required to carry out a recommendation"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Effort {
    Low,
    #[default]
    Medium,
    High,
}

impl Effort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Effort::Low => "low",
            Effort::Medium => "medium",
            Effort::High => "high",
        }
    }
}

impl std::str::FromStr for Effort {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Effort::Low),
            "medium" => Ok(Effort::Medium),
            "high" => Ok(Effort::High),
            _ => Err(format!("Unknown effort: {}", s)),
        }
    }
}

impl std::fmt::Display for Effort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// @acp:summary "Computed priority class of a recommendation"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Ascending rank, `critical` = 0
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Critical => 0,
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }

    /// True for `critical` and `high`
    pub fn is_urgent(&self) -> bool {
        matches!(self, Priority::Critical | Priority::High)
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "critical" => Ok(Priority::Critical),
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Treat an explicit `null` like an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// @acp:summary "A proposed modernization action"
/// @acp:lock normal
///
/// `priority` is derived from the content fields by
/// [`crate::scoring::calculate_priority`]; a value supplied on input is
/// ignored by the roadmap pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: RecommendationType,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Current state label, e.g. `react@16.14.0`
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_state: String,

    /// Suggested state label, e.g. `react@18.2.0`
    #[serde(default, deserialize_with = "null_as_default")]
    pub suggested_state: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub benefits: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub effort: Effort,

    #[serde(default, deserialize_with = "null_as_default")]
    pub priority: Priority,

    #[serde(default, deserialize_with = "null_as_default")]
    pub migration_steps: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub resources: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub automated_tools: Vec<String>,
}

impl Recommendation {
    /// @acp:summary "Create a recommendation with empty content fields"
    pub fn new(id: impl Into<String>, kind: RecommendationType, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            description: String::new(),
            current_state: String::new(),
            suggested_state: String::new(),
            benefits: Vec::new(),
            effort: Effort::default(),
            priority: Priority::default(),
            migration_steps: Vec::new(),
            resources: Vec::new(),
            automated_tools: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_states(mut self, current: impl Into<String>, suggested: impl Into<String>) -> Self {
        self.current_state = current.into();
        self.suggested_state = suggested.into();
        self
    }

    pub fn with_benefits<I, S>(mut self, benefits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.benefits = benefits.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_effort(mut self, effort: Effort) -> Self {
        self.effort = effort;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_migration_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.migration_steps = steps.into_iter().map(Into::into).collect();
        self
    }

    /// True if any benefit mentions security or a vulnerability
    pub fn has_security_benefit(&self) -> bool {
        self.benefits.iter().any(|b| {
            let lower = b.to_lowercase();
            lower.contains("security") || lower.contains("vulnerability")
        })
    }
}

/// @acp:summary "Derived fact: one recommendation depends on others"
///
/// Recomputed on every roadmap generation and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    pub recommendation_id: String,
    pub depends_on: Vec<String>,
    /// Reasons from every triggered rule, joined with `; `
    pub reason: String,
}

impl Dependency {
    pub fn new(recommendation_id: impl Into<String>, depends_on: Vec<String>, reason: impl Into<String>) -> Self {
        Self {
            recommendation_id: recommendation_id.into(),
            depends_on,
            reason: reason.into(),
        }
    }
}
