// Core algorithm exports
pub mod matcher;
pub mod parties;
pub mod profile;
pub mod regions;
pub mod scoring;
pub mod tribes;

pub use matcher::{ScoreOutcome, Scorer};
pub use parties::match_parties;
pub use profile::complete_profile;
pub use regions::{match_regions, region_distance};
pub use scoring::{dynamic_max_distance, match_percentage, similarity_band, similarity_index};
pub use tribes::{classify_tribe, tribe_distance};
