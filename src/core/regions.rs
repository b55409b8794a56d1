use crate::models::{Category, Profile, RegionMatch, RegionalProfile};

/// Per-category weight applied by the region matcher.
///
/// Politics and moral values dominate: regional identity correlates most with
/// political and moral stance and least with socioeconomic status. The table
/// is fixed; it is not runtime configuration.
#[inline]
pub fn category_weight(category: Category) -> f64 {
    match category {
        Category::Music => 1.0,
        Category::Politics => 4.0,
        Category::Food => 0.8,
        Category::Mobility => 1.2,
        Category::Values => 3.5,
        Category::Social => 3.0,
        Category::Culture => 1.5,
        Category::Identity => 2.5,
        Category::Religion => 2.0,
        Category::Socioeconomic => 0.3,
    }
}

/// Weighted L1 distance between a user profile and one regional profile.
///
/// Each dimension contributes `weight(category) * |user - region| / 10`.
/// L1 rather than Euclidean: contributions stay linear, so a single large
/// axis difference cannot dominate beyond what its category weight says.
#[inline]
pub fn region_distance(user: &Profile, region: &Profile) -> f64 {
    user.components()
        .iter()
        .zip(region.components().iter())
        .map(|((cat, u), (_, r))| category_weight(*cat) * (u - r).abs() / 10.0)
        .sum()
}

/// Rank every reference region by distance to the user profile.
///
/// Returns one entry per region, ascending by distance. The sort is stable:
/// regions at equal distance keep table order. An empty table yields an
/// empty ranking.
pub fn match_regions(user: &Profile, regions: &[RegionalProfile]) -> Vec<RegionMatch> {
    let mut matches: Vec<RegionMatch> = regions
        .iter()
        .map(|region| RegionMatch {
            region_id: region.id.clone(),
            name: region.name.clone(),
            distance: region_distance(user, &region.profile),
        })
        .collect();

    matches.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn region(id: &str, profile: Profile) -> RegionalProfile {
        RegionalProfile {
            id: id.to_string(),
            name: id.to_string(),
            count: 100,
            profile,
        }
    }

    #[test]
    fn test_identical_profile_has_zero_distance() {
        let user = flat_profile(5.0);
        let regions = vec![region("a", flat_profile(5.0)), region("b", flat_profile(7.0))];

        let matches = match_regions(&user, &regions);

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].region_id, "a");
        assert_eq!(matches[0].distance, 0.0);
        assert!(matches[1].distance > 0.0);
    }

    #[test]
    fn test_every_region_appears_once_sorted() {
        let user = flat_profile(5.0);
        let regions = vec![
            region("far", flat_profile(9.0)),
            region("near", flat_profile(5.5)),
            region("mid", flat_profile(7.0)),
        ];

        let matches = match_regions(&user, &regions);

        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].region_id, "near");
        assert_eq!(matches[1].region_id, "mid");
        assert_eq!(matches[2].region_id, "far");
        assert!(matches.windows(2).all(|w| w[0].distance <= w[1].distance));
        assert!(matches.iter().all(|m| m.distance >= 0.0));
    }

    #[test]
    fn test_ties_keep_table_order() {
        let user = flat_profile(5.0);
        let regions = vec![
            region("first", flat_profile(6.0)),
            region("second", flat_profile(6.0)),
        ];

        let matches = match_regions(&user, &regions);

        assert_eq!(matches[0].region_id, "first");
        assert_eq!(matches[1].region_id, "second");
    }

    #[test]
    fn test_empty_table_yields_empty_ranking() {
        let user = flat_profile(5.0);
        let matches = match_regions(&user, &[]);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_single_axis_distance_uses_politics_weight() {
        // Two synthetic regions differing only on politics_leftright: the
        // distance difference must equal 4.0 * |delta| / 10.
        let mut user = flat_profile(5.0);
        user.politics_leftright = 0.0;

        let mut left = flat_profile(5.0);
        left.politics_leftright = 1.0;
        let mut right = flat_profile(5.0);
        right.politics_leftright = 9.0;

        let regions = vec![region("right", right), region("left", left)];
        let matches = match_regions(&user, &regions);

        assert_eq!(matches[0].region_id, "left");
        let expected_gap = 4.0 * ((9.0f64 - 0.0).abs() - (1.0f64 - 0.0).abs()) / 10.0;
        let gap = matches[1].distance - matches[0].distance;
        assert!((gap - expected_gap).abs() < 1e-12);
    }

    #[test]
    fn test_idempotent() {
        let user = flat_profile(3.0);
        let regions = vec![region("a", flat_profile(5.0)), region("b", flat_profile(2.0))];

        let first = match_regions(&user, &regions);
        let second = match_regions(&user, &regions);

        assert_eq!(first.len(), second.len());
        for (x, y) in first.iter().zip(second.iter()) {
            assert_eq!(x.region_id, y.region_id);
            assert_eq!(x.distance, y.distance);
        }
    }
}
