use crate::models::{Profile, TribeArchetype, TribeMatch};

/// The dimensions the classifier reads, with their weights.
///
/// Reduced 15-dimension scheme: political, moral and social axes weigh 2-3x
/// the lifestyle axes, so an archetype that strongly disagrees on one salient
/// axis is excluded quickly (hence Euclidean rather than L1).
const TRIBE_DIMENSION_WEIGHTS: [(fn(&Profile) -> f64, f64); 15] = [
    (|p| p.politics_leftright, 3.0),
    (|p| p.politics_equality, 3.0),
    (|p| p.politics_environment, 2.0),
    (|p| p.values_authority, 3.0),
    (|p| p.values_purity, 2.0),
    (|p| p.values_care, 2.0),
    (|p| p.social_lgbt, 2.5),
    (|p| p.social_abortion, 2.5),
    (|p| p.social_immigration, 2.0),
    (|p| p.identity_spanish, 2.0),
    (|p| p.religiosity, 2.0),
    (|p| p.music_traditional, 1.0),
    (|p| p.culture_reading, 1.0),
    (|p| p.mobility_car, 1.0),
    (|p| p.food_adventurous, 1.0),
];

/// Weighted Euclidean distance between a user profile and one archetype.
#[inline]
pub fn tribe_distance(user: &Profile, archetype: &Profile) -> f64 {
    TRIBE_DIMENSION_WEIGHTS
        .iter()
        .map(|(dim, weight)| {
            let diff = dim(user) - dim(archetype);
            weight * diff * diff
        })
        .sum::<f64>()
        .sqrt()
}

/// Pick the closest archetype.
///
/// Arg-min with strict `<` comparison: when two archetypes are equally close,
/// the one appearing first in the table wins. Returns `None` only for an
/// empty table, which callers must rule out (enforced at dataset load).
pub fn classify_tribe(user: &Profile, archetypes: &[TribeArchetype]) -> Option<TribeMatch> {
    let mut best: Option<TribeMatch> = None;

    for archetype in archetypes {
        let distance = tribe_distance(user, &archetype.profile);
        let closer = match &best {
            Some(current) => distance < current.distance,
            None => true,
        };
        if closer {
            best = Some(TribeMatch {
                tribe_id: archetype.id.clone(),
                distance,
            });
        }
    }

    best
}
