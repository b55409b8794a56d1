// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Category, CategoryComparison, NationalAverage, PartyMatch, PartyPosition, PartyProfile,
    PartyScope, PoliticalPosition, Profile, ReferenceData, RegionFlags, RegionMatch,
    RegionalProfile, SimilarityBand, TribeArchetype, TribeMatch,
};
pub use requests::ScoreRequest;
pub use responses::{
    ErrorResponse, HealthResponse, PartyScore, RegionScore, RegionSummary, ScoreResponse,
    TribeSummary,
};
