//! Closed crop and soil enumerations for the farm questionnaire.
//!
//! Crop types carry the per-hectare carbon storage rate used by the
//! footprint calculator. Soil type is carried on records for display only
//! and does not enter the arithmetic. Both serialize as the French labels
//! the platform exchanges on the wire.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Crop type
// ---------------------------------------------------------------------------

/// The ten crop categories a parcel can be registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CropType {
    #[serde(rename = "Blé")]
    Wheat,
    #[serde(rename = "Olives")]
    Olives,
    #[serde(rename = "Tomates")]
    Tomatoes,
    #[serde(rename = "Avoine")]
    Oats,
    #[serde(rename = "Luzerne")]
    Alfalfa,
    #[serde(rename = "Arbres fruitiers")]
    FruitTrees,
    #[serde(rename = "Pâturage naturel")]
    NaturalPasture,
    #[serde(rename = "Dattes")]
    Dates,
    #[serde(rename = "Agrumes")]
    Citrus,
    #[serde(rename = "Raisin")]
    Grapes,
}

/// All crop types, in the order the registration form lists them.
pub const ALL_CROPS: &[CropType] = &[
    CropType::Wheat,
    CropType::Olives,
    CropType::Tomatoes,
    CropType::Oats,
    CropType::Alfalfa,
    CropType::FruitTrees,
    CropType::NaturalPasture,
    CropType::Dates,
    CropType::Citrus,
    CropType::Grapes,
];

impl CropType {
    /// Assumed carbon storage for this crop, in tonnes of CO₂e sequestered
    /// per hectare per year.
    pub fn storage_rate(self) -> f64 {
        match self {
            Self::Wheat => 0.5,
            Self::Olives => 3.0,
            Self::Tomatoes => 0.3,
            Self::Oats => 0.5,
            Self::Alfalfa => 1.5,
            Self::FruitTrees => 2.0,
            Self::NaturalPasture => 1.0,
            Self::Dates => 2.5,
            Self::Citrus => 2.2,
            Self::Grapes => 1.8,
        }
    }

    /// Display label, identical to the wire value.
    pub fn label(self) -> &'static str {
        match self {
            Self::Wheat => "Blé",
            Self::Olives => "Olives",
            Self::Tomatoes => "Tomates",
            Self::Oats => "Avoine",
            Self::Alfalfa => "Luzerne",
            Self::FruitTrees => "Arbres fruitiers",
            Self::NaturalPasture => "Pâturage naturel",
            Self::Dates => "Dattes",
            Self::Citrus => "Agrumes",
            Self::Grapes => "Raisin",
        }
    }

    /// Parse a wire/display label into a crop type.
    ///
    /// The enumeration is closed: anything outside the ten known labels is
    /// a [`CoreError::UnknownCrop`], never a silent zero-storage fallback.
    pub fn parse_label(label: &str) -> Result<Self, CoreError> {
        ALL_CROPS
            .iter()
            .copied()
            .find(|crop| crop.label() == label)
            .ok_or_else(|| CoreError::UnknownCrop(label.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Soil type
// ---------------------------------------------------------------------------

/// Soil category of a parcel. Metadata only; the calculator ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilType {
    #[serde(rename = "Argileux")]
    Clay,
    #[serde(rename = "Sableux")]
    Sandy,
    #[serde(rename = "Calcaire")]
    Limestone,
    #[serde(rename = "Limoneux")]
    Loam,
}

/// All soil types, in form order.
pub const ALL_SOILS: &[SoilType] = &[
    SoilType::Clay,
    SoilType::Sandy,
    SoilType::Limestone,
    SoilType::Loam,
];

impl SoilType {
    /// Display label, identical to the wire value.
    pub fn label(self) -> &'static str {
        match self {
            Self::Clay => "Argileux",
            Self::Sandy => "Sableux",
            Self::Limestone => "Calcaire",
            Self::Loam => "Limoneux",
        }
    }

    /// Parse a wire/display label into a soil type.
    pub fn parse_label(label: &str) -> Result<Self, CoreError> {
        ALL_SOILS
            .iter()
            .copied()
            .find(|soil| soil.label() == label)
            .ok_or_else(|| CoreError::UnknownSoil(label.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
