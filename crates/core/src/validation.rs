//! Questionnaire validation.
//!
//! The calculator itself is total over all float inputs; these checks run
//! at the boundary, before a questionnaire is accepted from a form or
//! submitted to the platform. Messages carry the wire field name so a
//! caller can point at the offending input.

use crate::activity::FarmActivity;
use crate::error::CoreError;

/// Reject NaN, infinities and negative quantities.
pub fn validate_non_negative(value: f64, name: &str) -> Result<(), CoreError> {
    if !value.is_finite() {
        return Err(CoreError::Validation(format!(
            "{name} must be a finite number, got {value}"
        )));
    }
    if value < 0.0 {
        return Err(CoreError::Validation(format!(
            "{name} must not be negative, got {value}"
        )));
    }
    Ok(())
}

/// Parcel names must carry at least one visible character.
pub fn validate_parcel_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "parcelName must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate a full activity questionnaire before it is accepted.
pub fn validate_activity(activity: &FarmActivity) -> Result<(), CoreError> {
    validate_parcel_name(&activity.parcel_name)?;
    validate_non_negative(activity.surface_hectares, "surfaceHectares")?;
    validate_non_negative(activity.diesel_liters, "dieselLiters")?;
    validate_non_negative(activity.gas_bottles, "gasBottles")?;
    validate_non_negative(activity.electricity_kwh, "electricityKWh")?;
    validate_non_negative(activity.fertilizer_kg, "fertilizerKg")?;
    validate_non_negative(activity.compost_tonnes, "compostTonnes")?;
    validate_non_negative(activity.cow_count, "cowCount")?;
    validate_non_negative(activity.sheep_count, "sheepCount")?;
    validate_non_negative(activity.chicken_count, "chickenCount")?;
    validate_non_negative(activity.transport_distance_km, "transportDistanceKm")?;
    validate_non_negative(activity.trips_per_year, "tripsPerYear")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn named_activity() -> FarmActivity {
        FarmActivity {
            parcel_name: "Parcelle Nord".to_string(),
            ..FarmActivity::default()
        }
    }

    #[test]
    fn zero_and_positive_quantities_pass() {
        assert!(validate_non_negative(0.0, "x").is_ok());
        assert!(validate_non_negative(12.5, "x").is_ok());
    }

    #[test]
    fn negative_quantity_is_rejected_with_the_field_name() {
        let err = validate_non_negative(-1.0, "dieselLiters").unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("dieselLiters"));
    }

    #[test]
    fn nan_and_infinity_are_rejected() {
        assert!(validate_non_negative(f64::NAN, "x").is_err());
        assert!(validate_non_negative(f64::INFINITY, "x").is_err());
        assert!(validate_non_negative(f64::NEG_INFINITY, "x").is_err());
    }

    #[test]
    fn blank_parcel_name_is_rejected() {
        assert!(validate_parcel_name("").is_err());
        assert!(validate_parcel_name("   ").is_err());
        assert!(validate_parcel_name("Parcelle Nord").is_ok());
    }

    #[test]
    fn a_clean_questionnaire_validates() {
        assert!(validate_activity(&named_activity()).is_ok());
    }

    #[test]
    fn default_questionnaire_fails_on_the_empty_name() {
        let err = validate_activity(&FarmActivity::default()).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("parcelName"));
    }

    #[test]
    fn one_bad_quantity_fails_the_whole_questionnaire() {
        let mut activity = named_activity();
        activity.chicken_count = -3.0;
        let err = validate_activity(&activity).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("chickenCount"));
    }
}
