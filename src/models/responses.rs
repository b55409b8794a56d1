use crate::core::scoring::match_percentage;
use crate::core::ScoreOutcome;
use crate::models::domain::{
    CategoryComparison, PoliticalPosition, SimilarityBand, TribeMatch,
};
use serde::{Deserialize, Serialize};

/// One ranked region with its display percentage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionScore {
    #[serde(rename = "regionId")]
    pub region_id: String,
    pub name: String,
    pub distance: f64,
    #[serde(rename = "matchPercent")]
    pub match_percent: f64,
}

/// One ranked party.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyScore {
    #[serde(rename = "partyId")]
    pub party_id: String,
    pub name: String,
    pub color: String,
    pub similarity: f64,
}

/// Response for the score endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub tribe: Option<TribeMatch>,
    #[serde(rename = "bestRegion")]
    pub best_region: Option<String>,
    pub regions: Vec<RegionScore>,
    #[serde(rename = "maxDistance")]
    pub max_distance: f64,
    #[serde(rename = "similarityIndex")]
    pub similarity_index: u8,
    #[serde(rename = "similarityBand")]
    pub similarity_band: SimilarityBand,
    pub parties: Vec<PartyScore>,
    pub summary: Vec<CategoryComparison>,
    pub political: PoliticalPosition,
}

impl From<ScoreOutcome> for ScoreResponse {
    fn from(outcome: ScoreOutcome) -> Self {
        let max_distance = outcome.max_distance;
        let regions: Vec<RegionScore> = outcome
            .regions
            .into_iter()
            .map(|m| RegionScore {
                match_percent: match_percentage(m.distance, max_distance),
                region_id: m.region_id,
                name: m.name,
                distance: m.distance,
            })
            .collect();

        Self {
            best_region: regions.first().map(|r| r.region_id.clone()),
            tribe: outcome.tribe,
            regions,
            max_distance,
            similarity_index: outcome.similarity_index,
            similarity_band: outcome.similarity_band,
            parties: outcome
                .parties
                .into_iter()
                .map(|p| PartyScore {
                    party_id: p.party_id,
                    name: p.name,
                    color: p.color,
                    similarity: p.similarity,
                })
                .collect(),
            summary: outcome.summary,
            political: outcome.political,
        }
    }
}

/// Reference region listing entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionSummary {
    pub id: String,
    pub name: String,
    pub count: u32,
}

/// Reference archetype listing entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TribeSummary {
    pub id: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
