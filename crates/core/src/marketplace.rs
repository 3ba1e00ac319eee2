//! Company marketplace dashboard types.
//!
//! Stats tiles and the recent-activity feed of the company dashboard.
//! The marketplace backend is not wired up yet, so [`sample_stats`] and
//! [`sample_activities`] provide the placeholder feed the dashboard shows
//! in the meantime.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Stats tiles
// ---------------------------------------------------------------------------

/// Headline figures across the top of the company dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDashboardStats {
    /// Credits held by the company.
    pub total_credits: f64,
    /// Declared footprint, tonnes CO₂e per year.
    pub carbon_footprint: f64,
    /// Share of the footprint already compensated, 0 to 100.
    pub compensation_rate: f64,
    pub active_projects: u32,
    /// Estimated savings this month, dinars.
    pub monthly_savings: f64,
}

// ---------------------------------------------------------------------------
// Activity feed
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Compensation,
    Purchase,
    Verification,
    Report,
}

impl ActivityKind {
    /// Icon shown next to the feed entry.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Compensation => "🌱",
            Self::Purchase => "💰",
            Self::Verification => "✅",
            Self::Report => "📄",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Completed,
    Pending,
    Failed,
}

impl ActivityStatus {
    /// Badge text on the feed entry.
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Terminé",
            Self::Pending => "En attente",
            Self::Failed => "Échec",
        }
    }
}

/// One entry of the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceActivity {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub description: String,
    pub date: NaiveDate,
    /// Credits moved by this activity, absent for non-trading entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub status: ActivityStatus,
}

// ---------------------------------------------------------------------------
// Placeholder feed
// ---------------------------------------------------------------------------

/// Stats shown while the marketplace backend is not wired up.
pub fn sample_stats() -> CompanyDashboardStats {
    CompanyDashboardStats {
        total_credits: 1250.0,
        carbon_footprint: 45.2,
        compensation_rate: 78.0,
        active_projects: 3,
        monthly_savings: 12_500.0,
    }
}

/// Activity feed shown while the marketplace backend is not wired up.
pub fn sample_activities() -> Vec<MarketplaceActivity> {
    vec![
        MarketplaceActivity {
            id: 1,
            kind: ActivityKind::Compensation,
            description: "Compensation projet agricole Tunisie".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
            amount: Some(250.0),
            status: ActivityStatus::Completed,
        },
        MarketplaceActivity {
            id: 2,
            kind: ActivityKind::Purchase,
            description: "Achat crédits carbone".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 12).unwrap_or_default(),
            amount: Some(500.0),
            status: ActivityStatus::Completed,
        },
        MarketplaceActivity {
            id: 3,
            kind: ActivityKind::Verification,
            description: "Vérification impact mensuel".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap_or_default(),
            amount: None,
            status: ActivityStatus::Completed,
        },
        MarketplaceActivity {
            id: 4,
            kind: ActivityKind::Report,
            description: "Génération rapport RSE".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap_or_default(),
            amount: None,
            status: ActivityStatus::Pending,
        },
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_feed_has_four_entries_in_reverse_chronology() {
        let activities = sample_activities();
        assert_eq!(activities.len(), 4);
        for pair in activities.windows(2) {
            assert!(pair[0].date > pair[1].date);
        }
    }

    #[test]
    fn trading_entries_carry_amounts_and_others_do_not() {
        let activities = sample_activities();
        assert_eq!(activities[0].amount, Some(250.0));
        assert_eq!(activities[1].amount, Some(500.0));
        assert_eq!(activities[2].amount, None);
        assert_eq!(activities[3].amount, None);
    }

    #[test]
    fn status_labels_match_the_badges() {
        assert_eq!(ActivityStatus::Completed.label(), "Terminé");
        assert_eq!(ActivityStatus::Pending.label(), "En attente");
        assert_eq!(ActivityStatus::Failed.label(), "Échec");
    }

    // -- wire format -------------------------------------------------------

    #[test]
    fn activity_kind_serializes_under_the_type_key() {
        let json = serde_json::to_value(&sample_activities()[0]).unwrap();
        assert_eq!(json["type"], "compensation");
        assert_eq!(json["date"], "2024-01-15");
        assert_eq!(json["status"], "completed");
    }

    #[test]
    fn absent_amount_is_omitted_from_json() {
        let json = serde_json::to_value(&sample_activities()[2]).unwrap();
        assert!(json.get("amount").is_none());
    }

    #[test]
    fn stats_round_trip_with_camel_case_keys() {
        let stats = sample_stats();
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["totalCredits"], 1250.0);
        assert_eq!(json["monthlySavings"], 12500.0);
        let back: CompanyDashboardStats = serde_json::from_value(json).unwrap();
        assert_eq!(back, stats);
    }

    #[test]
    fn feed_deserializes_without_amount_key() {
        let json = r#"{
            "id": 9,
            "type": "report",
            "description": "Rapport trimestriel",
            "date": "2024-02-01",
            "status": "pending"
        }"#;
        let activity: MarketplaceActivity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.kind, ActivityKind::Report);
        assert_eq!(activity.amount, None);
    }
}
