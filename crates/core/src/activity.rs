//! Farm activity questionnaire record.
//!
//! One [`FarmActivity`] captures everything a farmer declares for a parcel
//! over a reporting year: the parcel itself, energy and input use, herd
//! sizes and transport. It is the sole input of the footprint calculator
//! and the payload of the carbon record endpoints.

use serde::{Deserialize, Serialize};

use crate::crop::{CropType, SoilType};

/// Declared activity for one parcel over one year.
///
/// Quantities default to zero and flags to `false` so partially filled
/// questionnaires deserialize cleanly; crop and soil have no meaningful
/// default on the wire and must always be present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmActivity {
    /// Free-form parcel name, e.g. "Parcelle Nord".
    #[serde(default)]
    pub parcel_name: String,
    /// Cultivated surface in hectares.
    #[serde(default)]
    pub surface_hectares: f64,
    pub crop_type: CropType,
    pub soil_type: SoilType,
    /// Organic certification or equivalent practices on this parcel.
    #[serde(default)]
    pub organic_practices: bool,

    /// Diesel burned by machinery, litres per year.
    #[serde(default)]
    pub diesel_liters: f64,
    /// Butane/propane bottles consumed per year.
    #[serde(default)]
    pub gas_bottles: f64,
    /// Grid electricity drawn, kWh per year.
    #[serde(default, rename = "electricityKWh")]
    pub electricity_kwh: f64,

    /// Synthetic fertilizer spread, kg per year.
    #[serde(default)]
    pub fertilizer_kg: f64,
    /// Compost applied, tonnes per year.
    #[serde(default)]
    pub compost_tonnes: f64,

    #[serde(default)]
    pub cow_count: f64,
    #[serde(default)]
    pub sheep_count: f64,
    #[serde(default)]
    pub chicken_count: f64,

    /// One-way distance of a typical produce run, km.
    #[serde(default)]
    pub transport_distance_km: f64,
    #[serde(default)]
    pub trips_per_year: f64,

    /// Whether the parcel is irrigated at all.
    #[serde(default)]
    pub irrigation_used: bool,
}

impl Default for FarmActivity {
    fn default() -> Self {
        Self {
            parcel_name: String::new(),
            surface_hectares: 0.0,
            crop_type: CropType::Wheat,
            soil_type: SoilType::Clay,
            organic_practices: false,
            diesel_liters: 0.0,
            gas_bottles: 0.0,
            electricity_kwh: 0.0,
            fertilizer_kg: 0.0,
            compost_tonnes: 0.0,
            cow_count: 0.0,
            sheep_count: 0.0,
            chicken_count: 0.0,
            transport_distance_km: 0.0,
            trips_per_year: 0.0,
            irrigation_used: false,
        }
    }
}
