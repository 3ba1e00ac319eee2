//! Carbon footprint calculator.
//!
//! Turns one [`FarmActivity`] questionnaire into a [`CarbonFootprint`]
//! record: per-source emissions in kg of CO₂e, the annual total, carbon
//! stored by the crop, the net balance and its monetary value in Tunisian
//! dinars. Pure arithmetic; the only non-deterministic part is the
//! timestamp stamped by [`compute_footprint`], and [`compute_footprint_at`]
//! removes even that.

use serde::{Deserialize, Serialize};

use crate::activity::FarmActivity;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Emission factors
// ---------------------------------------------------------------------------

/// kg CO₂e per litre of diesel burned.
pub const DIESEL_KG_CO2E_PER_LITER: f64 = 2.68;
/// kg CO₂e per gas bottle consumed.
pub const GAS_KG_CO2E_PER_BOTTLE: f64 = 12.0;
/// kg CO₂e per kWh of grid electricity.
pub const ELECTRICITY_KG_CO2E_PER_KWH: f64 = 0.5;
/// kg CO₂e per kg of synthetic fertilizer spread.
pub const FERTILIZER_KG_CO2E_PER_KG: f64 = 4.0;

/// Fertilizer emission discount granted for organic practices.
pub const ORGANIC_PRACTICES_REDUCTION: f64 = 0.2;
/// Fertilizer emission discount granted when any compost is applied.
pub const COMPOST_REDUCTION: f64 = 0.2;
/// Ceiling on the combined fertilizer discount.
pub const MAX_FERTILIZER_REDUCTION: f64 = 0.4;

/// Irrigation overhead, as a fraction of fuel plus electricity emissions.
pub const IRRIGATION_OVERHEAD: f64 = 0.05;

/// kg CO₂e per cow per year.
pub const COW_KG_CO2E_PER_YEAR: f64 = 2000.0;
/// kg CO₂e per sheep per year.
pub const SHEEP_KG_CO2E_PER_YEAR: f64 = 300.0;
/// kg CO₂e per chicken per year.
pub const CHICKEN_KG_CO2E_PER_YEAR: f64 = 20.0;

/// kg CO₂e per km of produce transport.
pub const TRANSPORT_KG_CO2E_PER_KM: f64 = 0.25;

/// Converts total kg of CO₂e into the emitted-tonnes figure on records,
/// applying the 12/44 carbon mass fraction on top of the kg-to-tonne
/// division. Storage rates and credit pricing are calibrated against this
/// scale, so it must not be replaced with a plain `/ 1000.0`.
pub const EMITTED_TONNES_PER_KG_CO2E: f64 = 12.0 / 44_000.0;

/// Price of one net tonne, in Tunisian dinars.
pub const CREDIT_PRICE_DT_PER_TONNE: f64 = 32.0;

// ---------------------------------------------------------------------------
// Emission breakdown
// ---------------------------------------------------------------------------

/// Per-source annual emissions, all in kg of CO₂e.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionBreakdown {
    #[serde(rename = "fuelCO2")]
    pub fuel_co2: f64,
    #[serde(rename = "gasCO2")]
    pub gas_co2: f64,
    #[serde(rename = "electricityCO2")]
    pub electricity_co2: f64,
    #[serde(rename = "fertilizerCO2")]
    pub fertilizer_co2: f64,
    #[serde(rename = "irrigationCO2")]
    pub irrigation_co2: f64,
    #[serde(rename = "livestockCO2")]
    pub livestock_co2: f64,
    #[serde(rename = "transportCO2")]
    pub transport_co2: f64,
}

impl EmissionBreakdown {
    /// Evaluate every emission source for one activity record.
    pub fn from_activity(activity: &FarmActivity) -> Self {
        let fuel_co2 = activity.diesel_liters * DIESEL_KG_CO2E_PER_LITER;
        let gas_co2 = activity.gas_bottles * GAS_KG_CO2E_PER_BOTTLE;
        let electricity_co2 = activity.electricity_kwh * ELECTRICITY_KG_CO2E_PER_KWH;

        let mut reduction = 0.0;
        if activity.organic_practices {
            reduction += ORGANIC_PRACTICES_REDUCTION;
        }
        if activity.compost_tonnes > 0.0 {
            reduction += COMPOST_REDUCTION;
        }
        let reduction = reduction.min(MAX_FERTILIZER_REDUCTION);
        let fertilizer_co2 = activity.fertilizer_kg * FERTILIZER_KG_CO2E_PER_KG * (1.0 - reduction);

        let irrigation_co2 = if activity.irrigation_used {
            (fuel_co2 + electricity_co2) * IRRIGATION_OVERHEAD
        } else {
            0.0
        };

        let livestock_co2 = activity.cow_count * COW_KG_CO2E_PER_YEAR
            + activity.sheep_count * SHEEP_KG_CO2E_PER_YEAR
            + activity.chicken_count * CHICKEN_KG_CO2E_PER_YEAR;

        let transport_co2 =
            activity.transport_distance_km * activity.trips_per_year * TRANSPORT_KG_CO2E_PER_KM;

        Self {
            fuel_co2,
            gas_co2,
            electricity_co2,
            fertilizer_co2,
            irrigation_co2,
            livestock_co2,
            transport_co2,
        }
    }

    /// Sum of every source, kg CO₂e per year.
    pub fn total(&self) -> f64 {
        self.fuel_co2
            + self.gas_co2
            + self.electricity_co2
            + self.fertilizer_co2
            + self.irrigation_co2
            + self.livestock_co2
            + self.transport_co2
    }
}

// ---------------------------------------------------------------------------
// Footprint record
// ---------------------------------------------------------------------------

/// A computed carbon record: the declared activity plus every figure the
/// platform derives from it. Flattened on the wire so the record reads as
/// one flat JSON object, inputs and outputs side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonFootprint {
    #[serde(flatten)]
    pub activity: FarmActivity,

    #[serde(flatten)]
    pub breakdown: EmissionBreakdown,

    /// Annual emissions across all sources, kg CO₂e.
    #[serde(rename = "totalEmissionsCO2kg")]
    pub total_emissions_co2_kg: f64,
    /// Carbon stored by the crop over the declared surface, tonnes.
    pub carbon_stored_tonnes: f64,
    /// Emitted tonnes on the record scale (12/44 applied).
    pub carbon_emitted_tonnes: f64,
    /// Stored minus emitted. Negative when the parcel is a net emitter.
    pub net_carbon_tonnes: f64,
    /// Net balance priced in Tunisian dinars. Negative nets price negative.
    pub estimated_value: f64,
    pub calculation_timestamp: Timestamp,
}

/// Compute the footprint of one activity record, stamped with the current
/// UTC time.
pub fn compute_footprint(activity: &FarmActivity) -> CarbonFootprint {
    compute_footprint_at(activity, chrono::Utc::now())
}

/// Compute the footprint of one activity record with an explicit timestamp.
/// Same inputs and same timestamp always produce the same record.
pub fn compute_footprint_at(activity: &FarmActivity, at: Timestamp) -> CarbonFootprint {
    let breakdown = EmissionBreakdown::from_activity(activity);
    let total_emissions_co2_kg = breakdown.total();

    let carbon_stored_tonnes = activity.crop_type.storage_rate() * activity.surface_hectares;
    let carbon_emitted_tonnes = total_emissions_co2_kg * EMITTED_TONNES_PER_KG_CO2E;
    let net_carbon_tonnes = carbon_stored_tonnes - carbon_emitted_tonnes;
    let estimated_value = net_carbon_tonnes * CREDIT_PRICE_DT_PER_TONNE;

    CarbonFootprint {
        activity: activity.clone(),
        breakdown,
        total_emissions_co2_kg,
        carbon_stored_tonnes,
        carbon_emitted_tonnes,
        net_carbon_tonnes,
        estimated_value,
        calculation_timestamp: at,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
