use crate::models::Profile;
use std::collections::HashMap;

/// Build a complete profile from sparse quiz answers.
///
/// Every dimension takes the user's answer when one was given, and the
/// national-average default otherwise. Keys that are not profile dimensions
/// are ignored. Values are taken as-is: range enforcement is the input
/// layer's job, not the engine's.
pub fn complete_profile(answers: &HashMap<String, f64>, defaults: &Profile) -> Profile {
    let pick = |key: &str, default: f64| answers.get(key).copied().unwrap_or(default);

    Profile {
        music_rock: pick("music_rock", defaults.music_rock),
        music_pop: pick("music_pop", defaults.music_pop),
        music_reggaeton: pick("music_reggaeton", defaults.music_reggaeton),
        music_classical: pick("music_classical", defaults.music_classical),
        music_traditional: pick("music_traditional", defaults.music_traditional),
        food_adventurous: pick("food_adventurous", defaults.food_adventurous),
        food_social: pick("food_social", defaults.food_social),
        mobility_car: pick("mobility_car", defaults.mobility_car),
        mobility_public: pick("mobility_public", defaults.mobility_public),
        mobility_active: pick("mobility_active", defaults.mobility_active),
        politics_leftright: pick("politics_leftright", defaults.politics_leftright),
        politics_environment: pick("politics_environment", defaults.politics_environment),
        politics_equality: pick("politics_equality", defaults.politics_equality),
        values_care: pick("values_care", defaults.values_care),
        values_authority: pick("values_authority", defaults.values_authority),
        values_purity: pick("values_purity", defaults.values_purity),
        social_immigration: pick("social_immigration", defaults.social_immigration),
        social_lgbt: pick("social_lgbt", defaults.social_lgbt),
        social_abortion: pick("social_abortion", defaults.social_abortion),
        social_feminism: pick("social_feminism", defaults.social_feminism),
        culture_reading: pick("culture_reading", defaults.culture_reading),
        culture_sports: pick("culture_sports", defaults.culture_sports),
        culture_museums: pick("culture_museums", defaults.culture_museums),
        identity_spanish: pick("identity_spanish", defaults.identity_spanish),
        identity_regional: pick("identity_regional", defaults.identity_regional),
        religiosity: pick("religiosity", defaults.religiosity),
        socioeconomic_education: pick("socioeconomic_education", defaults.socioeconomic_education),
        socioeconomic_income: pick("socioeconomic_income", defaults.socioeconomic_income),
    }
}
