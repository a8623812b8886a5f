//! @acp:module "Model"
//! @acp:summary "Data model for recommendations, dependencies, phases and roadmaps"
//! @acp:domain roadmap
//! @acp:layer model
//! @acp:stability stable

mod roadmap;
mod types;

pub use roadmap::{
    Confidence, Phase, PriorityCounts, Roadmap, RoadmapStats, TimeEstimate, TypeCounts,
};
pub use types::{Dependency, Effort, Priority, Recommendation, RecommendationType};
