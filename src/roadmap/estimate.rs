//! @acp:module "Time Estimator"
//! @acp:summary "Per-recommendation day ranges aggregated per phase and overall"
//! @acp:domain roadmap
//! @acp:layer logic

use regex::Regex;
use std::sync::LazyLock;

use crate::config::EstimationConfig;
use crate::model::{Confidence, Effort, Phase, Recommendation, RecommendationType, TimeEstimate};

/// Regex for occurrence counts in pattern titles, e.g. "(14 occurrences)"
static OCCURRENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d+)\s+(?:occurrences?|instances?|usages?|locations?|places?|files?)\b")
        .unwrap()
});

/// Occurrence count parsed from a title, if present
pub fn occurrence_count(title: &str) -> Option<f64> {
    OCCURRENCE_PATTERN
        .captures(title)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Effort multiplier for a recommendation
pub fn multiplier(rec: &Recommendation, config: &EstimationConfig) -> f64 {
    match rec.kind {
        RecommendationType::Framework => config.framework_multiplier,
        RecommendationType::Pattern => match occurrence_count(&rec.title) {
            Some(count) => (1.0 + count / config.pattern_occurrence_divisor)
                .min(config.pattern_multiplier_cap),
            None => 1.0,
        },
        RecommendationType::Dependency => 1.0,
    }
}

/// (min, max) days for one recommendation
pub fn estimate_recommendation(rec: &Recommendation, config: &EstimationConfig) -> (f64, f64) {
    let range = config.days_for(rec.effort);
    let factor = multiplier(rec, config);
    (range.min * factor, range.max * factor)
}

/// @acp:summary "Sum member ranges and grade confidence by batch size and effort"
pub fn estimate_phase(recs: &[Recommendation], config: &EstimationConfig) -> TimeEstimate {
    let (min_days, max_days) = recs
        .iter()
        .map(|rec| estimate_recommendation(rec, config))
        .fold((0.0, 0.0), |(min, max), (a, b)| (min + a, max + b));

    let mut confidence = Confidence::Medium;
    if recs.len() <= config.phase_high_confidence_max_items {
        confidence = Confidence::High;
    } else if recs.len() > config.phase_low_confidence_above_items {
        confidence = Confidence::Low;
    }

    if recs.iter().any(|rec| rec.effort == Effort::High) {
        confidence = confidence.downgrade();
    }

    TimeEstimate::new(min_days, max_days, confidence)
}

/// @acp:summary "Elementwise sum of phase estimates, graded by phase count"
pub fn estimate_total(phases: &[Phase], config: &EstimationConfig) -> TimeEstimate {
    let (min_days, max_days) = phases.iter().fold((0.0, 0.0), |(min, max), phase| {
        (
            min + phase.estimated_time.min_days,
            max + phase.estimated_time.max_days,
        )
    });

    let confidence = if phases.len() <= config.total_high_confidence_max_phases {
        Confidence::High
    } else if phases.len() > config.total_low_confidence_above_phases {
        Confidence::Low
    } else {
        Confidence::Medium
    };

    TimeEstimate::new(min_days, max_days, confidence)
}
