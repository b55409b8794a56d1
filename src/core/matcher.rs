use crate::core::{
    parties::match_parties,
    profile::complete_profile,
    regions::match_regions,
    scoring::{category_summary, dynamic_max_distance, similarity_band, similarity_index},
    tribes::classify_tribe,
};
use crate::models::{
    CategoryComparison, PartyMatch, PoliticalPosition, Profile, ReferenceData, RegionMatch,
    SimilarityBand, TribeMatch,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Everything one scoring request produces.
#[derive(Debug, Clone)]
pub struct ScoreOutcome {
    /// The completed 28-dimension profile that was scored.
    pub profile: Profile,
    /// Full region ranking, ascending by raw distance.
    pub regions: Vec<RegionMatch>,
    /// 90th-percentile ceiling used to normalize region percentages.
    pub max_distance: f64,
    /// Chosen archetype. `None` only if the archetype table is empty, which
    /// dataset validation rules out.
    pub tribe: Option<TribeMatch>,
    /// Top 3 parties for the best region; empty when there is no best region.
    pub parties: Vec<PartyMatch>,
    pub similarity_index: u8,
    pub similarity_band: SimilarityBand,
    pub summary: Vec<CategoryComparison>,
    pub political: PoliticalPosition,
}

/// Scoring orchestrator: completes the profile, then runs the region, tribe
/// and party matchers independently over the shared reference tables.
///
/// Cheap to clone; the tables are behind an `Arc` and never written.
#[derive(Debug, Clone)]
pub struct Scorer {
    data: Arc<ReferenceData>,
}

impl Scorer {
    pub fn new(data: Arc<ReferenceData>) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &ReferenceData {
        &self.data
    }

    /// Score one set of quiz answers.
    pub fn score(&self, answers: &HashMap<String, f64>) -> ScoreOutcome {
        let profile = complete_profile(answers, &self.data.national.profile);

        let regions = match_regions(&profile, &self.data.regions);
        let distances: Vec<f64> = regions.iter().map(|m| m.distance).collect();
        let max_distance = dynamic_max_distance(&distances);

        let tribe = classify_tribe(&profile, &self.data.tribes);

        let parties = match regions.first() {
            Some(best) => match_parties(
                &profile,
                &self.data.parties,
                &best.region_id,
                &self.data.region_flags,
            ),
            None => Vec::new(),
        };

        let index = similarity_index(&profile, &self.data.national.profile);
        let summary = category_summary(&profile, &self.data.national.profile);
        let political = PoliticalPosition {
            left_right: profile.politics_leftright,
            authority: profile.values_authority,
        };

        ScoreOutcome {
            regions,
            max_distance,
            tribe,
            parties,
            similarity_index: index,
            similarity_band: similarity_band(index),
            summary,
            political,
            profile,
        }
    }
}
