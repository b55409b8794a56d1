use crate::models::{
    NationalAverage, PartyProfile, PartyScope, ReferenceData, RegionFlags, RegionalProfile,
    TribeArchetype,
};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading the static reference tables.
///
/// All of these are startup-fatal: a dataset that fails validation is a
/// deployment bug, not a runtime condition to recover from.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("invalid dataset: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize)]
struct RegionalProfilesFile {
    national: NationalAverage,
    regions: Vec<RegionalProfile>,
}

#[derive(Debug, Deserialize)]
struct TribesFile {
    tribes: Vec<TribeArchetype>,
}

#[derive(Debug, Deserialize)]
struct PartiesFile {
    parties: Vec<PartyProfile>,
}

#[derive(Debug, Deserialize)]
struct RegionConfigFile {
    regions: HashMap<String, RegionFlags>,
}

fn load_file<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, DatasetError> {
    let display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| DatasetError::Parse {
        path: display,
        source,
    })
}

/// Load and validate all reference tables from `dir`.
///
/// Expects four files: `regional_profiles.json`, `cultural_tribes.json`,
/// `political_parties.json` and `region_config.json`. Array order inside the
/// files is preserved; it is the tie-break iteration order of the matchers.
pub fn load_reference_data(dir: &Path) -> Result<ReferenceData, DatasetError> {
    let profiles: RegionalProfilesFile = load_file(&dir.join("regional_profiles.json"))?;
    let tribes: TribesFile = load_file(&dir.join("cultural_tribes.json"))?;
    let parties: PartiesFile = load_file(&dir.join("political_parties.json"))?;
    let config: RegionConfigFile = load_file(&dir.join("region_config.json"))?;

    let data = ReferenceData {
        regions: profiles.regions,
        national: profiles.national,
        tribes: tribes.tribes,
        parties: parties.parties,
        region_flags: config.regions,
    };

    validate(&data)?;

    tracing::info!(
        "Reference data loaded: {} regions, {} tribes, {} parties",
        data.regions.len(),
        data.tribes.len(),
        data.parties.len()
    );

    Ok(data)
}

/// Structural checks beyond what deserialization already guarantees.
///
/// The tribe classifier and party matcher require non-empty tables (arg-min
/// over an empty set is undefined); enforcing that here keeps the matchers
/// free of defensive paths.
fn validate(data: &ReferenceData) -> Result<(), DatasetError> {
    if data.regions.is_empty() {
        return Err(DatasetError::Invalid("region table is empty".to_string()));
    }
    if data.tribes.is_empty() {
        return Err(DatasetError::Invalid(
            "archetype table is empty".to_string(),
        ));
    }
    if data.parties.is_empty() {
        return Err(DatasetError::Invalid("party table is empty".to_string()));
    }

    let region_ids: HashSet<&str> = data.regions.iter().map(|r| r.id.as_str()).collect();

    for region in &data.regions {
        if !data.region_flags.contains_key(&region.id) {
            return Err(DatasetError::Invalid(format!(
                "region '{}' has no entry in region config",
                region.id
            )));
        }
    }

    for party in &data.parties {
        match party.scope {
            PartyScope::Regional if party.regions.is_empty() => {
                return Err(DatasetError::Invalid(format!(
                    "regional party '{}' lists no regions",
                    party.id
                )));
            }
            _ => {}
        }
        for region in &party.regions {
            if !region_ids.contains(region.as_str()) {
                return Err(DatasetError::Invalid(format!(
                    "party '{}' references unknown region '{}'",
                    party.id, region
                )));
            }
        }
    }

    Ok(())
}
