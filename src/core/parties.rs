use crate::models::{PartyMatch, PartyPosition, PartyProfile, Profile, RegionFlags};
use std::collections::HashMap;

/// Fixed divisor of the similarity rescale. Empirically chosen, not derived
/// from the party table.
const SIMILARITY_SCALE: f64 = 50.0;

/// Identity-axis amplification applied when the best region is nationalist.
const NATIONALIST_IDENTITY_MULTIPLIER: f64 = 15.0;

/// Flat discount on the final distance of a regional party running in the
/// user's nationalist best region. Without it, an identity-aligned regional
/// party could still lose to a national party on pure left-right proximity.
const HOME_BIAS_DISCOUNT: f64 = 0.85;

/// Number of parties returned.
const TOP_PARTIES: usize = 3;

/// Axis weights of the party matcher. The left-right axis is deliberately
/// dominant; the authoritarian-libertarian axis is secondary; everything else
/// is near-decorative. Identity axes are further scaled by the nationalist
/// multiplier at call time.
struct PartyWeights {
    politics_leftright: f64,
    values_authority: f64,
    politics_environment: f64,
    politics_equality: f64,
    social_immigration: f64,
    social_lgbt: f64,
    identity_spanish: f64,
    identity_regional: f64,
}

const PARTY_WEIGHTS: PartyWeights = PartyWeights {
    politics_leftright: 200.0,
    values_authority: 30.0,
    politics_environment: 0.5,
    politics_equality: 0.5,
    social_immigration: 0.3,
    social_lgbt: 0.3,
    identity_spanish: 2.0,
    identity_regional: 3.0,
};

/// Weighted Euclidean distance between the user profile and one party
/// position, with the identity axes amplified by `identity_multiplier`.
#[inline]
fn party_distance(user: &Profile, position: &PartyPosition, identity_multiplier: f64) -> f64 {
    let sq = |d: f64| d * d;
    let w = &PARTY_WEIGHTS;

    let sum = sq(user.politics_leftright - position.politics_leftright) * w.politics_leftright
        + sq(user.values_authority - position.values_authority) * w.values_authority
        + sq(user.politics_environment - position.politics_environment) * w.politics_environment
        + sq(user.politics_equality - position.politics_equality) * w.politics_equality
        + sq(user.social_immigration - position.social_immigration) * w.social_immigration
        + sq(user.social_lgbt - position.social_lgbt) * w.social_lgbt
        + sq(user.identity_spanish - position.identity_spanish)
            * w.identity_spanish
            * identity_multiplier
        + sq(user.identity_regional - position.identity_regional)
            * w.identity_regional
            * identity_multiplier;

    sum.sqrt()
}

/// Linear rescale of an adjusted distance into a [0, 100] similarity.
#[inline]
fn similarity_percent(distance: f64) -> f64 {
    (100.0 - (distance / SIMILARITY_SCALE) * 100.0).clamp(0.0, 100.0)
}

/// Rank the parties most affine to the user and return the top 3.
///
/// Regional-scope parties are eligible only when they run in `best_region`.
/// If the best region is flagged nationalist, the identity axes of every
/// party distance are amplified, and regional parties running there get the
/// home-bias discount on their final distance. Ties keep table order.
pub fn match_parties(
    user: &Profile,
    parties: &[PartyProfile],
    best_region: &str,
    region_flags: &HashMap<String, RegionFlags>,
) -> Vec<PartyMatch> {
    let nationalist = region_flags
        .get(best_region)
        .map(|flags| flags.nationalist)
        .unwrap_or(false);

    let identity_multiplier = if nationalist {
        NATIONALIST_IDENTITY_MULTIPLIER
    } else {
        1.0
    };

    let mut ranked: Vec<PartyMatch> = parties
        .iter()
        .filter(|party| party.runs_in(best_region))
        .map(|party| {
            let home_bias = if nationalist
                && party.scope == crate::models::PartyScope::Regional
                && party.regions.iter().any(|r| r == best_region)
            {
                HOME_BIAS_DISCOUNT
            } else {
                1.0
            };

            let distance = party_distance(user, &party.position, identity_multiplier) * home_bias;

            PartyMatch {
                party_id: party.id.clone(),
                name: party.name.clone(),
                color: party.color.clone(),
                distance,
                similarity: similarity_percent(distance),
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(TOP_PARTIES);

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PartyScope;

    fn flat_profile(value: f64) -> Profile {
        Profile {
            music_rock: value,
            music_pop: value,
            music_reggaeton: value,
            music_classical: value,
            music_traditional: value,
            food_adventurous: value,
            food_social: value,
            mobility_car: value,
            mobility_public: value,
            mobility_active: value,
            politics_leftright: value,
            politics_environment: value,
            politics_equality: value,
            values_care: value,
            values_authority: value,
            values_purity: value,
            social_immigration: value,
            social_lgbt: value,
            social_abortion: value,
            social_feminism: value,
            culture_reading: value,
            culture_sports: value,
            culture_museums: value,
            identity_spanish: value,
            identity_regional: value,
            religiosity: value,
            socioeconomic_education: value,
            socioeconomic_income: value,
        }
    }

    fn position(leftright: f64, spanish: f64, regional: f64) -> PartyPosition {
        PartyPosition {
            politics_leftright: leftright,
            values_authority: 5.0,
            politics_environment: 5.0,
            politics_equality: 5.0,
            social_immigration: 5.0,
            social_lgbt: 5.0,
            identity_spanish: spanish,
            identity_regional: regional,
        }
    }

    fn uniform_position(value: f64) -> PartyPosition {
        PartyPosition {
            politics_leftright: value,
            values_authority: value,
            politics_environment: value,
            politics_equality: value,
            social_immigration: value,
            social_lgbt: value,
            identity_spanish: value,
            identity_regional: value,
        }
    }

    fn national_party(id: &str, pos: PartyPosition) -> PartyProfile {
        PartyProfile {
            id: id.to_string(),
            name: id.to_string(),
            color: "#888888".to_string(),
            logo: None,
            scope: PartyScope::National,
            regions: vec![],
            position: pos,
        }
    }

    fn regional_party(id: &str, region: &str, pos: PartyPosition) -> PartyProfile {
        PartyProfile {
            id: id.to_string(),
            name: id.to_string(),
            color: "#888888".to_string(),
            logo: None,
            scope: PartyScope::Regional,
            regions: vec![region.to_string()],
            position: pos,
        }
    }

    fn flags(nationalist_regions: &[&str]) -> HashMap<String, RegionFlags> {
        nationalist_regions
            .iter()
            .map(|id| (id.to_string(), RegionFlags { nationalist: true }))
            .collect()
    }

    #[test]
    fn test_top_three_ascending_by_distance() {
        let user = flat_profile(5.0);
        let parties = vec![
            national_party("far", position(9.5, 5.0, 5.0)),
            national_party("close", position(5.2, 5.0, 5.0)),
            national_party("mid", position(6.5, 5.0, 5.0)),
            national_party("exact", position(5.0, 5.0, 5.0)),
        ];

        let ranked = match_parties(&user, &parties, "madrid", &HashMap::new());

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].party_id, "exact");
        assert_eq!(ranked[1].party_id, "close");
        assert_eq!(ranked[2].party_id, "mid");
        assert!(ranked.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn test_regional_party_excluded_outside_its_regions() {
        let user = flat_profile(5.0);
        // The regional party is an exact match, but does not run in madrid
        let parties = vec![
            regional_party("local", "catalunya", position(5.0, 5.0, 5.0)),
            national_party("a", position(7.0, 5.0, 5.0)),
            national_party("b", position(8.0, 5.0, 5.0)),
            national_party("c", position(9.0, 5.0, 5.0)),
        ];

        let ranked = match_parties(&user, &parties, "madrid", &HashMap::new());

        assert_eq!(ranked.len(), 3);
        assert!(ranked.iter().all(|p| p.party_id != "local"));
    }

    #[test]
    fn test_similarity_bounds() {
        let user = flat_profile(0.0);
        let parties = vec![
            national_party("exact", uniform_position(0.0)),
            national_party("opposite", uniform_position(10.0)),
        ];

        let ranked = match_parties(&user, &parties, "madrid", &HashMap::new());

        assert_eq!(ranked[0].similarity, 100.0);
        assert_eq!(ranked[0].distance, 0.0);
        assert_eq!(ranked[1].similarity, 0.0);
    }

    #[test]
    fn test_nationalist_toggle_boosts_matching_regional_party() {
        // User leans slightly right of the regional party but is strongly
        // region-identified.
        let mut user = flat_profile(5.0);
        user.identity_spanish = 2.0;
        user.identity_regional = 9.0;

        let parties = vec![
            national_party("national", position(5.0, 8.0, 3.0)),
            regional_party("local", "catalunya", position(6.0, 2.0, 9.0)),
        ];

        let neutral = match_parties(&user, &parties, "catalunya", &HashMap::new());
        let nationalist = match_parties(&user, &parties, "catalunya", &flags(&["catalunya"]));

        // Left-right dominates while the region is not nationalist
        assert_eq!(neutral[0].party_id, "national");
        // Identity amplification plus home bias flips the ranking
        assert_eq!(nationalist[0].party_id, "local");

        let neutral_local = neutral.iter().find(|p| p.party_id == "local").unwrap();
        let nationalist_local = nationalist.iter().find(|p| p.party_id == "local").unwrap();
        let neutral_national = neutral.iter().find(|p| p.party_id == "national").unwrap();
        let nationalist_national = nationalist
            .iter()
            .find(|p| p.party_id == "national")
            .unwrap();

        // The regional party's relative standing must improve
        let neutral_gap = neutral_local.distance - neutral_national.distance;
        let nationalist_gap = nationalist_local.distance - nationalist_national.distance;
        assert!(nationalist_gap < neutral_gap);
    }

    #[test]
    fn test_home_bias_only_for_parties_of_that_region() {
        // Both regional parties run somewhere nationalist, but only the one
        // registered for the best region gets the discount.
        let user = flat_profile(5.0);
        let pos = position(5.0, 5.0, 5.0);
        let parties = vec![
            regional_party("elsewhere", "euskadi", pos.clone()),
            regional_party("home", "catalunya", pos),
        ];

        let ranked = match_parties(
            &user,
            &parties,
            "catalunya",
            &flags(&["catalunya", "euskadi"]),
        );

        // "elsewhere" does not run in catalunya at all
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].party_id, "home");
    }

    #[test]
    fn test_ties_keep_table_order() {
        let user = flat_profile(5.0);
        let pos = position(6.0, 5.0, 5.0);
        let parties = vec![
            national_party("first", pos.clone()),
            national_party("second", pos.clone()),
            national_party("third", pos),
        ];

        let ranked = match_parties(&user, &parties, "madrid", &HashMap::new());

        assert_eq!(ranked[0].party_id, "first");
        assert_eq!(ranked[1].party_id, "second");
        assert_eq!(ranked[2].party_id, "third");
    }

    #[test]
    fn test_leftright_dominates_other_axes() {
        let user = flat_profile(5.0);
        // One party disagrees only on left-right, the other only on the four
        // near-decorative axes.
        let leftright_off = position(6.0, 5.0, 5.0);
        let mut decorative_off = position(5.0, 5.0, 5.0);
        decorative_off.politics_environment = 0.0;
        decorative_off.politics_equality = 0.0;
        decorative_off.social_immigration = 0.0;
        decorative_off.social_lgbt = 0.0;

        let parties = vec![
            national_party("leftright", leftright_off),
            national_party("decorative", decorative_off),
        ];

        let ranked = match_parties(&user, &parties, "madrid", &HashMap::new());

        // 1 point of left-right (200 * 1) outweighs 5 points on each of the
        // 0.3-0.5 weighted axes (sum 40)
        assert_eq!(ranked[0].party_id, "decorative");
    }
}
