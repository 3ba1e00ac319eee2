//! Signup credit estimate.
//!
//! When a farmer registers, the platform shows a rough yearly credit
//! potential computed from the practices declared on the signup form.
//! This is a marketing-grade estimate, entirely separate from the real
//! footprint calculator: it never replaces a computed record.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Tillage practice
// ---------------------------------------------------------------------------

/// How the farm works its soil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TillagePractice {
    #[serde(rename = "conventionnel")]
    Conventional,
    #[serde(rename = "simplifié")]
    Simplified,
    #[serde(rename = "semis_direct")]
    DirectSeeding,
}

impl TillagePractice {
    /// Flat credit bonus for this practice.
    pub fn bonus(self) -> f64 {
        match self {
            Self::Conventional => 0.0,
            Self::Simplified => SIMPLIFIED_TILLAGE_BONUS,
            Self::DirectSeeding => DIRECT_SEEDING_BONUS,
        }
    }
}

impl Default for TillagePractice {
    fn default() -> Self {
        Self::Conventional
    }
}

// ---------------------------------------------------------------------------
// Practice profile
// ---------------------------------------------------------------------------

/// Practices declared on the farmer signup form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FarmPracticeProfile {
    #[serde(default)]
    pub farm_size_hectares: f64,
    #[serde(default)]
    pub tillage_practice: TillagePractice,
    #[serde(default)]
    pub cover_crops: bool,
    #[serde(default)]
    pub crop_rotation: bool,
    #[serde(default)]
    pub organic_farming: bool,
    #[serde(default)]
    pub precision_farming: bool,
    /// Yearly synthetic fertilizer use, kg.
    #[serde(default)]
    pub fertilizer_kg: f64,
    /// Yearly pesticide use, kg.
    #[serde(default)]
    pub pesticide_kg: f64,
    /// Length of maintained hedgerows, metres.
    #[serde(default)]
    pub hedgerow_meters: f64,
    /// Surface under agroforestry, hectares.
    #[serde(default)]
    pub agroforestry_hectares: f64,
    /// Organic matter returned to the soil, tonnes per year.
    #[serde(default)]
    pub organic_matter_tonnes: f64,
}

// ---------------------------------------------------------------------------
// Estimate
// ---------------------------------------------------------------------------

/// Credits per hectare of farm size.
pub const SIZE_CREDITS_PER_HECTARE: f64 = 0.1;
/// Bonus for no-till seeding.
pub const DIRECT_SEEDING_BONUS: f64 = 50.0;
/// Bonus for simplified tillage.
pub const SIMPLIFIED_TILLAGE_BONUS: f64 = 25.0;
/// Bonus for cover crops.
pub const COVER_CROPS_BONUS: f64 = 30.0;
/// Bonus for crop rotation.
pub const CROP_ROTATION_BONUS: f64 = 20.0;
/// Bonus for certified organic farming.
pub const ORGANIC_FARMING_BONUS: f64 = 40.0;
/// Bonus for precision farming equipment.
pub const PRECISION_FARMING_BONUS: f64 = 15.0;
/// Credits per metre of hedgerow.
pub const HEDGEROW_CREDITS_PER_METER: f64 = 0.02;
/// Credits per hectare of agroforestry.
pub const AGROFORESTRY_CREDITS_PER_HECTARE: f64 = 0.5;
/// Credits per tonne of organic matter returned.
pub const ORGANIC_MATTER_CREDITS_PER_TONNE: f64 = 0.01;
/// Malus per kg of synthetic fertilizer.
pub const FERTILIZER_MALUS_PER_KG: f64 = 0.05;
/// Malus per kg of pesticide.
pub const PESTICIDE_MALUS_PER_KG: f64 = 0.1;

/// Estimate the yearly credit potential of a declared practice profile.
///
/// Rounded to a whole number of credits and floored at zero: an intensive
/// profile estimates zero, never a debt.
pub fn estimate_signup_credits(profile: &FarmPracticeProfile) -> f64 {
    let mut credits = profile.farm_size_hectares * SIZE_CREDITS_PER_HECTARE;

    credits += profile.tillage_practice.bonus();
    if profile.cover_crops {
        credits += COVER_CROPS_BONUS;
    }
    if profile.crop_rotation {
        credits += CROP_ROTATION_BONUS;
    }
    if profile.organic_farming {
        credits += ORGANIC_FARMING_BONUS;
    }
    if profile.precision_farming {
        credits += PRECISION_FARMING_BONUS;
    }

    credits += profile.hedgerow_meters * HEDGEROW_CREDITS_PER_METER;
    credits += profile.agroforestry_hectares * AGROFORESTRY_CREDITS_PER_HECTARE;
    credits += profile.organic_matter_tonnes * ORGANIC_MATTER_CREDITS_PER_TONNE;

    credits -= profile.fertilizer_kg * FERTILIZER_MALUS_PER_KG;
    credits -= profile.pesticide_kg * PESTICIDE_MALUS_PER_KG;

    credits.round().max(0.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> FarmPracticeProfile {
        FarmPracticeProfile::default()
    }

    #[test]
    fn empty_profile_estimates_zero() {
        assert_eq!(estimate_signup_credits(&profile()), 0.0);
    }

    #[test]
    fn farm_size_earns_a_tenth_of_a_credit_per_hectare() {
        let mut p = profile();
        p.farm_size_hectares = 100.0;
        assert_eq!(estimate_signup_credits(&p), 10.0);
    }

    // -- tillage -----------------------------------------------------------

    #[test]
    fn tillage_bonuses_follow_the_practice() {
        assert_eq!(TillagePractice::Conventional.bonus(), 0.0);
        assert_eq!(TillagePractice::Simplified.bonus(), 25.0);
        assert_eq!(TillagePractice::DirectSeeding.bonus(), 50.0);
    }

    #[test]
    fn direct_seeding_earns_fifty() {
        let mut p = profile();
        p.tillage_practice = TillagePractice::DirectSeeding;
        assert_eq!(estimate_signup_credits(&p), 50.0);
    }

    // -- flags and per-unit terms ------------------------------------------

    #[test]
    fn every_practice_flag_adds_its_bonus() {
        let mut p = profile();
        p.cover_crops = true;
        p.crop_rotation = true;
        p.organic_farming = true;
        p.precision_farming = true;
        assert_eq!(estimate_signup_credits(&p), 30.0 + 20.0 + 40.0 + 15.0);
    }

    #[test]
    fn landscape_features_accumulate_per_unit() {
        let mut p = profile();
        p.hedgerow_meters = 500.0;
        p.agroforestry_hectares = 4.0;
        p.organic_matter_tonnes = 100.0;
        // 10 + 2 + 1
        assert_eq!(estimate_signup_credits(&p), 13.0);
    }

    #[test]
    fn inputs_subtract_their_malus() {
        let mut p = profile();
        p.farm_size_hectares = 1000.0;
        p.fertilizer_kg = 200.0;
        p.pesticide_kg = 100.0;
        // 100 - 10 - 10
        assert_eq!(estimate_signup_credits(&p), 80.0);
    }

    // -- rounding and clamp ------------------------------------------------

    #[test]
    fn estimate_rounds_to_whole_credits() {
        let mut p = profile();
        p.farm_size_hectares = 16.0;
        // 1.6 rounds to 2
        assert_eq!(estimate_signup_credits(&p), 2.0);
        p.farm_size_hectares = 14.0;
        // 1.4 rounds to 1
        assert_eq!(estimate_signup_credits(&p), 1.0);
    }

    #[test]
    fn intensive_profile_floors_at_zero() {
        let mut p = profile();
        p.fertilizer_kg = 5000.0;
        p.pesticide_kg = 1000.0;
        assert_eq!(estimate_signup_credits(&p), 0.0);
    }

    // -- serde -------------------------------------------------------------

    #[test]
    fn tillage_uses_the_form_values_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&TillagePractice::DirectSeeding).unwrap(),
            "\"semis_direct\""
        );
        let parsed: TillagePractice = serde_json::from_str("\"simplifié\"").unwrap();
        assert_eq!(parsed, TillagePractice::Simplified);
    }

    #[test]
    fn profile_deserializes_from_a_sparse_form() {
        let json = r#"{"farmSizeHectares":50,"coverCrops":true}"#;
        let p: FarmPracticeProfile = serde_json::from_str(json).unwrap();
        assert_eq!(p.tillage_practice, TillagePractice::Conventional);
        assert!(p.cover_crops);
        assert_eq!(estimate_signup_credits(&p), 35.0);
    }
}
