//! @acp:module "Scoring"
//! @acp:summary "Deterministic priority classification, scoring and ranking"
//! @acp:domain roadmap
//! @acp:layer feature

pub mod rank;
pub mod rules;
pub mod score;

pub use rank::{prioritize, prioritize_with, rank_recommendations, rank_with};
pub use rules::{Matcher, PriorityRule, TextScope, PRIORITY_RULES};
pub use score::{calculate_priority, classify_with, score_recommendation, score_with};
