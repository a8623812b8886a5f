//! @acp:module "Dependencies"
//! @acp:summary "Heuristic inference of depends-on relationships between recommendations"
//! @acp:domain roadmap
//! @acp:layer feature

pub mod extractor;
pub mod package;
pub mod rules;

pub use extractor::{identify_dependencies, DependencyExtractor};
pub use package::{package_name, RelatedPackages};
pub use rules::{
    default_rules, DependencyRule, ExplicitMentionRule, ExtractionContext, FrameworkMentionRule,
    InferredEdge, RelatedPackageRule,
};
