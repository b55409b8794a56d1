use crate::models::{CategoryComparison, Profile, SimilarityBand};

/// Ceiling used when the region table is empty and no percentile can be taken.
pub const FALLBACK_MAX_DISTANCE: f64 = 45.0;

/// Floor of the displayed match percentage.
pub const MIN_MATCH_PERCENT: f64 = 30.0;

/// Dynamic ceiling for percentage normalization: the 90th-percentile raw
/// distance of the current ranking.
///
/// Floor-indexed selection over the ascending sort (`index = floor(n * 0.9)`),
/// so the scale adapts to how tightly the reference regions cluster instead
/// of relying on a hardcoded constant.
pub fn dynamic_max_distance(distances: &[f64]) -> f64 {
    if distances.is_empty() {
        return FALLBACK_MAX_DISTANCE;
    }

    let mut sorted = distances.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let index = (sorted.len() as f64 * 0.9).floor() as usize;
    sorted[index]
}

/// Map a raw distance to a display percentage in [30, 100].
///
/// Inverse-quadratic: `95 - 65 * (d / max)^2`, clamped. Small distances decay
/// slowly from 95%, larger ones fall off faster, and the floor keeps every
/// region from displaying near-zero affinity. A zero ceiling (all distances
/// identical) returns 100% for zero distance instead of propagating NaN.
#[inline]
pub fn match_percentage(distance: f64, max_distance: f64) -> f64 {
    if max_distance <= 0.0 {
        return if distance <= 0.0 { 100.0 } else { MIN_MATCH_PERCENT };
    }

    let n = distance / max_distance;
    (95.0 - 65.0 * n * n).clamp(MIN_MATCH_PERCENT, 100.0)
}

/// Aggregate the profile into the 7 display axes (category means).
///
/// The same aggregation feeds the radar-style comparison and the similarity
/// index, so both always agree.
fn category_axes(profile: &Profile) -> [f64; 7] {
    [
        // music
        (profile.music_rock
            + profile.music_pop
            + profile.music_reggaeton
            + profile.music_classical
            + profile.music_traditional)
            / 5.0,
        // politics (left-right axis alone)
        profile.politics_leftright,
        // social
        (profile.social_lgbt
            + profile.social_immigration
            + profile.social_abortion
            + profile.social_feminism)
            / 4.0,
        // identity
        (profile.identity_spanish + profile.identity_regional) / 2.0,
        // culture
        (profile.culture_reading + profile.culture_sports + profile.culture_museums) / 3.0,
        // mobility
        (profile.mobility_public + profile.mobility_car + profile.mobility_active) / 3.0,
        // food
        profile.food_adventurous,
    ]
}

const AXIS_NAMES: [&str; 7] = [
    "music",
    "politics",
    "social",
    "identity",
    "culture",
    "mobility",
    "food",
];

/// User-vs-national comparison over the 7 aggregated axes.
pub fn category_summary(user: &Profile, national: &Profile) -> Vec<CategoryComparison> {
    let user_axes = category_axes(user);
    let national_axes = category_axes(national);

    AXIS_NAMES
        .iter()
        .zip(user_axes.iter().zip(national_axes.iter()))
        .map(|(axis, (u, n))| CategoryComparison {
            axis: axis.to_string(),
            user: *u,
            national: *n,
        })
        .collect()
}

/// Coarse 1-10 similarity index against the national average.
///
/// Averages the absolute axis differences, then rescales:
/// `round(clamp(10 - (avg_diff / 5) * 9, 1, 10))`.
pub fn similarity_index(user: &Profile, national: &Profile) -> u8 {
    let user_axes = category_axes(user);
    let national_axes = category_axes(national);

    let avg_diff = user_axes
        .iter()
        .zip(national_axes.iter())
        .map(|(u, n)| (u - n).abs())
        .sum::<f64>()
        / user_axes.len() as f64;

    (10.0 - (avg_diff / 5.0) * 9.0).clamp(1.0, 10.0).round() as u8
}

/// Map a similarity index to its display band.
pub fn similarity_band(index: u8) -> SimilarityBand {
    match index {
        9..=10 => SimilarityBand::VeryClose,
        7..=8 => SimilarityBand::Close,
        5..=6 => SimilarityBand::Moderate,
        3..=4 => SimilarityBand::Distant,
        _ => SimilarityBand::VeryDistant,
    }
}
