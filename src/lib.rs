#![forbid(unsafe_code)]

//! @acp:module "Roadmap Library"
//! @acp:summary "Deterministic prioritization and phased roadmaps for modernization recommendations"
//! @acp:domain roadmap
//! @acp:layer api
//! @acp:stability stable
//!
//! # Modernization Roadmap Engine
//!
//! Turns a flat list of modernization recommendations into an ordered,
//! phased plan.
//!
//! ## Features
//!
//! - **Scoring**: Rule-table priority classification and weighted scores
//! - **Dependency Inference**: Heuristic depends-on edges from content
//! - **Cycle Tolerance**: Cyclic input still yields a complete roadmap
//! - **Estimates**: Day ranges with confidence grades per phase and overall
//! - **Quick Wins**: Low-effort, unblocked, high-value items up front
//!
//! ## Example
//!
//! ```rust,no_run
//! use roadmap::{generate_roadmap, input};
//!
//! fn main() -> anyhow::Result<()> {
//!     let recs = input::load_recommendations("recommendations.json")?;
//!
//!     let roadmap = generate_roadmap(&recs);
//!     for phase in &roadmap.phases {
//!         println!("{}. {} ({} items)", phase.number, phase.name, phase.recommendations.len());
//!     }
//!
//!     roadmap.write_json("roadmap.json")?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dependencies;
pub mod error;
pub mod graph;
pub mod input;
pub mod model;
pub mod roadmap;
pub mod scoring;

// Re-exports
pub use config::{DayRange, EstimationConfig, QuickWinConfig, RoadmapConfig, ScoringConfig};
pub use dependencies::{identify_dependencies, DependencyExtractor, DependencyRule, RelatedPackages};
pub use error::{Result, RoadmapError};
pub use graph::{critical_path, topological_order, DependencyGraph, TopologicalOrder};
pub use model::{
    Confidence, Dependency, Effort, Phase, Priority, PriorityCounts, Recommendation,
    RecommendationType, Roadmap, RoadmapStats, TimeEstimate, TypeCounts,
};
pub use roadmap::{build_roadmap, generate_roadmap, RoadmapGenerator};
pub use scoring::{calculate_priority, prioritize, rank_recommendations, score_recommendation};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
