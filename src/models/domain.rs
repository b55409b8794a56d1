use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Semantic category a profile dimension belongs to.
///
/// Every dimension is assigned to exactly one category; the region matcher
/// weights all dimensions of a category identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Music,
    Food,
    Mobility,
    Politics,
    Values,
    Social,
    Culture,
    Identity,
    Religion,
    Socioeconomic,
}

/// Complete cultural profile: 28 named dimensions, each valued in [0, 10].
///
/// All fields are mandatory. Reference tables with missing dimensions fail
/// at deserialization time, so no matcher ever sees a partial entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub music_rock: f64,
    pub music_pop: f64,
    pub music_reggaeton: f64,
    pub music_classical: f64,
    pub music_traditional: f64,
    pub food_adventurous: f64,
    pub food_social: f64,
    pub mobility_car: f64,
    pub mobility_public: f64,
    pub mobility_active: f64,
    pub politics_leftright: f64,
    pub politics_environment: f64,
    pub politics_equality: f64,
    pub values_care: f64,
    pub values_authority: f64,
    pub values_purity: f64,
    pub social_immigration: f64,
    pub social_lgbt: f64,
    pub social_abortion: f64,
    pub social_feminism: f64,
    pub culture_reading: f64,
    pub culture_sports: f64,
    pub culture_museums: f64,
    pub identity_spanish: f64,
    pub identity_regional: f64,
    pub religiosity: f64,
    pub socioeconomic_education: f64,
    pub socioeconomic_income: f64,
}

impl Profile {
    /// Number of profile dimensions.
    pub const DIMENSIONS: usize = 28;

    /// All dimensions with their category, in declaration order.
    ///
    /// This is the canonical iteration order for distance computations.
    pub fn components(&self) -> [(Category, f64); Self::DIMENSIONS] {
        use Category::*;
        [
            (Music, self.music_rock),
            (Music, self.music_pop),
            (Music, self.music_reggaeton),
            (Music, self.music_classical),
            (Music, self.music_traditional),
            (Food, self.food_adventurous),
            (Food, self.food_social),
            (Mobility, self.mobility_car),
            (Mobility, self.mobility_public),
            (Mobility, self.mobility_active),
            (Politics, self.politics_leftright),
            (Politics, self.politics_environment),
            (Politics, self.politics_equality),
            (Values, self.values_care),
            (Values, self.values_authority),
            (Values, self.values_purity),
            (Social, self.social_immigration),
            (Social, self.social_lgbt),
            (Social, self.social_abortion),
            (Social, self.social_feminism),
            (Culture, self.culture_reading),
            (Culture, self.culture_sports),
            (Culture, self.culture_museums),
            (Identity, self.identity_spanish),
            (Identity, self.identity_regional),
            (Religion, self.religiosity),
            (Socioeconomic, self.socioeconomic_education),
            (Socioeconomic, self.socioeconomic_income),
        ]
    }
}

/// Reference profile for one geographic region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionalProfile {
    pub id: String,
    pub name: String,
    /// Survey sample size behind this profile.
    pub count: u32,
    pub profile: Profile,
}

/// National average profile, used both as the default-fill source and as the
/// similarity-index reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NationalAverage {
    pub count: u32,
    pub profile: Profile,
}

/// A predefined cultural persona, defined as a reference point in profile
/// space. The classifier reads a fixed subset of the dimensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TribeArchetype {
    pub id: String,
    pub profile: Profile,
}

/// Electoral scope of a party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyScope {
    National,
    Regional,
}

/// Party position over the 8 dimensions the party matcher reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartyPosition {
    pub politics_leftright: f64,
    pub values_authority: f64,
    pub politics_environment: f64,
    pub politics_equality: f64,
    pub social_immigration: f64,
    pub social_lgbt: f64,
    pub identity_spanish: f64,
    pub identity_regional: f64,
}

/// A political party with its position vector and display metadata.
///
/// `color` and `logo` are passed through to the presentation layer and play
/// no role in scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyProfile {
    pub id: String,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub logo: Option<String>,
    pub scope: PartyScope,
    /// Regions where a regional-scope party is a candidate. Empty for
    /// national parties.
    #[serde(default)]
    pub regions: Vec<String>,
    pub position: PartyPosition,
}

impl PartyProfile {
    /// Whether the party is eligible when `region_id` is the best match.
    pub fn runs_in(&self, region_id: &str) -> bool {
        match self.scope {
            PartyScope::National => true,
            PartyScope::Regional => self.regions.iter().any(|r| r == region_id),
        }
    }
}

/// Per-region metadata flags.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RegionFlags {
    /// Regions with salient sub-national identity politics. Triggers the
    /// identity-weight amplification and the local-party bonus in the party
    /// matcher.
    #[serde(default)]
    pub nationalist: bool,
}

/// One entry of the region matcher output: raw weighted L1 distance to a
/// reference region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionMatch {
    #[serde(rename = "regionId")]
    pub region_id: String,
    pub name: String,
    pub distance: f64,
}

/// Tribe classification result: the arg-min archetype and its distance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TribeMatch {
    #[serde(rename = "tribeId")]
    pub tribe_id: String,
    pub distance: f64,
}

/// One ranked party with its normalized similarity percentage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyMatch {
    #[serde(rename = "partyId")]
    pub party_id: String,
    pub name: String,
    pub color: String,
    pub distance: f64,
    pub similarity: f64,
}

/// Discrete similarity band derived from the similarity index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityBand {
    VeryClose,
    Close,
    Moderate,
    Distant,
    VeryDistant,
}

/// User-vs-national comparison over one aggregated category axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryComparison {
    pub axis: String,
    pub user: f64,
    pub national: f64,
}

/// Position on the two-axis political quadrant, a passthrough of two profile
/// dimensions for display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PoliticalPosition {
    #[serde(rename = "leftRight")]
    pub left_right: f64,
    pub authority: f64,
}

/// All static reference tables, loaded once at startup and shared read-only
/// for the process lifetime. Matchers receive these by reference; nothing
/// ever mutates them after load.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    /// Region table; array order is the tie-break iteration order.
    pub regions: Vec<RegionalProfile>,
    pub national: NationalAverage,
    /// Archetype table; array order is the tie-break iteration order.
    pub tribes: Vec<TribeArchetype>,
    /// Party table; array order is the tie-break iteration order.
    pub parties: Vec<PartyProfile>,
    pub region_flags: HashMap<String, RegionFlags>,
}
