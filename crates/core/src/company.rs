//! Company emissions questionnaire.
//!
//! Companies declare their activity across the three GHG Protocol scopes
//! when they sign up. The questionnaire is collected for later assessment;
//! nothing is derived from it yet, so this module is data only.

use serde::{Deserialize, Serialize};

/// Where the company's purchased energy comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EnergySource {
    #[serde(rename = "fossile")]
    Fossil,
    #[serde(rename = "renouvelable")]
    Renewable,
    #[serde(rename = "mixte")]
    Mixed,
    #[serde(rename = "inconnu")]
    #[default]
    Unknown,
}

/// Direct emissions from owned or controlled sources.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Scope1Emissions {
    /// Natural gas burned on site, kWh per year.
    #[serde(default)]
    pub gas_consumption_kwh: f64,
    /// Diesel for owned equipment, litres per year.
    #[serde(default)]
    pub diesel_liters: f64,
    /// Gasoline for owned equipment, litres per year.
    #[serde(default)]
    pub gasoline_liters: f64,
    /// Vehicles in the company fleet.
    #[serde(default)]
    pub internal_vehicles: f64,
    /// Refrigerant refills, kg per year.
    #[serde(default)]
    pub refrigerant_kg: f64,
    /// Industrial process emissions, tonnes CO₂e per year.
    #[serde(default)]
    pub process_emissions_tonnes: f64,
}

/// Indirect emissions from purchased energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Scope2Emissions {
    #[serde(default, rename = "electricityKWh")]
    pub electricity_kwh: f64,
    #[serde(default)]
    pub energy_source: EnergySource,
    /// District or purchased heating, kWh per year.
    #[serde(default)]
    pub heating_kwh: f64,
}

/// Value-chain emissions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Scope3Emissions {
    #[serde(default)]
    pub raw_material_transport_km: f64,
    #[serde(default)]
    pub employee_travel_km: f64,
    #[serde(default)]
    pub business_travel_km: f64,
    /// Purchased goods and services, dinars per year.
    #[serde(default)]
    pub purchased_goods_dt: f64,
    /// Capital goods, dinars per year.
    #[serde(default)]
    pub capital_goods_dt: f64,
    #[serde(default)]
    pub recycled_waste_kg: f64,
    #[serde(default)]
    pub non_recycled_waste_kg: f64,
    /// Water drawn, cubic metres per year.
    #[serde(default)]
    pub water_consumption_m3: f64,
}

/// The full three-scope declaration of one company.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct CompanyFootprint {
    #[serde(default)]
    pub scope1: Scope1Emissions,
    #[serde(default)]
    pub scope2: Scope2Emissions,
    #[serde(default)]
    pub scope3: Scope3Emissions,
}
