//! Farmer and company account profiles.
//!
//! Closed records mirroring what the platform stores about an account
//! holder. Contact details the signup form leaves optional stay `Option`
//! here; the platform never invents placeholder values for them.

use serde::{Deserialize, Serialize};

use crate::crop::CropType;

// ---------------------------------------------------------------------------
// Farmer
// ---------------------------------------------------------------------------

/// A farmer account as returned by the profile endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmerProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub farm_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub farm_size_hectares: Option<f64>,
    pub main_crop_type: Option<CropType>,
}

impl FarmerProfile {
    /// Name as shown in the dashboard header.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// ---------------------------------------------------------------------------
// Company
// ---------------------------------------------------------------------------

/// Legal structure options on the company signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegalStructure {
    #[serde(rename = "sas")]
    Sas,
    #[serde(rename = "sarl")]
    Sarl,
    #[serde(rename = "sa")]
    Sa,
    #[serde(rename = "ei")]
    SoleProprietorship,
    #[serde(rename = "autres")]
    Other,
}

impl LegalStructure {
    pub fn label(self) -> &'static str {
        match self {
            Self::Sas => "SAS",
            Self::Sarl => "SARL",
            Self::Sa => "SA",
            Self::SoleProprietorship => "Entreprise individuelle",
            Self::Other => "Autres",
        }
    }
}

/// Business sector options on the company signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BusinessSector {
    #[serde(rename = "industrie")]
    Industry,
    #[serde(rename = "transport")]
    Transport,
    #[serde(rename = "services")]
    Services,
    #[serde(rename = "agriculture")]
    Agriculture,
    #[serde(rename = "energie")]
    Energy,
    #[serde(rename = "batiment")]
    Construction,
    #[serde(rename = "commerce")]
    Commerce,
}

impl BusinessSector {
    pub fn label(self) -> &'static str {
        match self {
            Self::Industry => "Industrie",
            Self::Transport => "Transport",
            Self::Services => "Services",
            Self::Agriculture => "Agriculture",
            Self::Energy => "Énergie",
            Self::Construction => "Bâtiment",
            Self::Commerce => "Commerce",
        }
    }
}

/// A company account, as declared on the signup form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub company_name: String,
    pub email: String,
    pub legal_structure: LegalStructure,
    pub sector: BusinessSector,
    pub siret: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub employee_count: Option<u32>,
    /// Yearly turnover, dinars.
    pub annual_turnover: Option<f64>,
    pub foundation_year: Option<i32>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn farmer() -> FarmerProfile {
        FarmerProfile {
            first_name: "Ahmed".to_string(),
            last_name: "Ben Salah".to_string(),
            email: "ahmed@ferme.tn".to_string(),
            phone: Some("+216 20 123 456".to_string()),
            farm_name: Some("Ferme des Oliviers".to_string()),
            address: None,
            city: Some("Sfax".to_string()),
            postal_code: None,
            farm_size_hectares: Some(12.0),
            main_crop_type: Some(CropType::Olives),
        }
    }

    #[test]
    fn display_name_joins_first_and_last() {
        assert_eq!(farmer().display_name(), "Ahmed Ben Salah");
    }

    #[test]
    fn farmer_profile_round_trips() {
        let profile = farmer();
        let json = serde_json::to_string(&profile).unwrap();
        let back: FarmerProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn absent_optional_fields_deserialize_as_none() {
        let json = r#"{
            "firstName": "Leila",
            "lastName": "Trabelsi",
            "email": "leila@exemple.tn"
        }"#;
        let profile: FarmerProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.phone, None);
        assert_eq!(profile.farm_size_hectares, None);
        assert_eq!(profile.main_crop_type, None);
    }

    // -- form enums --------------------------------------------------------

    #[test]
    fn legal_structures_use_the_form_values() {
        assert_eq!(serde_json::to_string(&LegalStructure::Sas).unwrap(), "\"sas\"");
        assert_eq!(
            serde_json::to_string(&LegalStructure::SoleProprietorship).unwrap(),
            "\"ei\""
        );
        let parsed: LegalStructure = serde_json::from_str("\"autres\"").unwrap();
        assert_eq!(parsed, LegalStructure::Other);
    }

    #[test]
    fn sectors_use_the_form_values() {
        assert_eq!(
            serde_json::to_string(&BusinessSector::Energy).unwrap(),
            "\"energie\""
        );
        assert_eq!(
            serde_json::to_string(&BusinessSector::Construction).unwrap(),
            "\"batiment\""
        );
        let parsed: BusinessSector = serde_json::from_str("\"commerce\"").unwrap();
        assert_eq!(parsed, BusinessSector::Commerce);
    }

    #[test]
    fn sector_labels_are_display_ready() {
        assert_eq!(BusinessSector::Construction.label(), "Bâtiment");
        assert_eq!(LegalStructure::SoleProprietorship.label(), "Entreprise individuelle");
    }

    #[test]
    fn company_profile_round_trips() {
        let company = CompanyProfile {
            company_name: "TransLog SARL".to_string(),
            email: "contact@translog.tn".to_string(),
            legal_structure: LegalStructure::Sarl,
            sector: BusinessSector::Transport,
            siret: Some("123 456 789".to_string()),
            phone: None,
            address: None,
            city: Some("Tunis".to_string()),
            postal_code: Some("1001".to_string()),
            employee_count: Some(42),
            annual_turnover: Some(1_500_000.0),
            foundation_year: Some(2009),
        };
        let json = serde_json::to_string(&company).unwrap();
        let back: CompanyProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, company);
    }
}
