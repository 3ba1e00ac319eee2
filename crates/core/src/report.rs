//! Report figures derived from a computed footprint.
//!
//! These are the numbers behind the farmer's report page: the emission
//! source split, the stored-versus-emitted comparison and the credit
//! summary shown next to the balance badge.

use serde::Serialize;

use crate::footprint::{CarbonFootprint, EmissionBreakdown, CREDIT_PRICE_DT_PER_TONNE};

// ---------------------------------------------------------------------------
// Emission source split
// ---------------------------------------------------------------------------

/// One slice of the emission split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionSource {
    pub label: &'static str,
    pub kg_co2e: f64,
    /// Share of the annual total, 0 to 100.
    pub share_pct: f64,
}

/// Split a breakdown into labelled sources, largest first.
///
/// Sources that contributed nothing are dropped, and a breakdown with no
/// emissions at all yields an empty split rather than a division by zero.
pub fn emission_sources(breakdown: &EmissionBreakdown) -> Vec<EmissionSource> {
    let total = breakdown.total();
    if total <= 0.0 {
        return Vec::new();
    }

    let raw = [
        ("Diesel", breakdown.fuel_co2),
        ("Gaz", breakdown.gas_co2),
        ("Électricité", breakdown.electricity_co2),
        ("Engrais", breakdown.fertilizer_co2),
        ("Irrigation", breakdown.irrigation_co2),
        ("Élevage", breakdown.livestock_co2),
        ("Transport", breakdown.transport_co2),
    ];

    let mut sources: Vec<EmissionSource> = raw
        .into_iter()
        .filter(|(_, kg)| *kg > 0.0)
        .map(|(label, kg_co2e)| EmissionSource {
            label,
            kg_co2e,
            share_pct: kg_co2e / total * 100.0,
        })
        .collect();
    sources.sort_by(|a, b| b.kg_co2e.total_cmp(&a.kg_co2e));
    sources
}

// ---------------------------------------------------------------------------
// Storage comparison and credit summary
// ---------------------------------------------------------------------------

/// Stored versus emitted tonnes, the two bars of the comparison chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageComparison {
    pub stored_tonnes: f64,
    pub emitted_tonnes: f64,
}

pub fn storage_comparison(footprint: &CarbonFootprint) -> StorageComparison {
    StorageComparison {
        stored_tonnes: footprint.carbon_stored_tonnes,
        emitted_tonnes: footprint.carbon_emitted_tonnes,
    }
}

/// Which side of zero the net balance fell on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CarbonBalance {
    Credit,
    Deficit,
}

impl CarbonBalance {
    /// Badge text on the report page.
    pub fn label(self) -> &'static str {
        match self {
            Self::Credit => "Crédit",
            Self::Deficit => "Débit",
        }
    }
}

/// Credit figures shown on the report page.
///
/// The raw net keeps its sign, but tradable credits and their value are
/// clamped at zero: a net-emitting parcel generates no credits, it does
/// not owe negative ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditSummary {
    pub net_tonnes: f64,
    pub credit_tonnes: f64,
    pub credit_value_dt: f64,
    pub balance: CarbonBalance,
}

pub fn credit_summary(footprint: &CarbonFootprint) -> CreditSummary {
    let net_tonnes = footprint.net_carbon_tonnes;
    let credit_tonnes = net_tonnes.max(0.0);
    CreditSummary {
        net_tonnes,
        credit_tonnes,
        credit_value_dt: credit_tonnes * CREDIT_PRICE_DT_PER_TONNE,
        balance: if net_tonnes >= 0.0 {
            CarbonBalance::Credit
        } else {
            CarbonBalance::Deficit
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::FarmActivity;
    use crate::crop::CropType;
    use crate::footprint::compute_footprint;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // -- emission split ----------------------------------------------------

    #[test]
    fn zero_breakdown_yields_an_empty_split() {
        let breakdown = EmissionBreakdown::from_activity(&FarmActivity::default());
        assert!(emission_sources(&breakdown).is_empty());
    }

    #[test]
    fn silent_sources_are_dropped_from_the_split() {
        let mut a = FarmActivity::default();
        a.diesel_liters = 10.0;
        a.cow_count = 1.0;
        let sources = emission_sources(&EmissionBreakdown::from_activity(&a));
        assert_eq!(sources.len(), 2);
        let labels: Vec<&str> = sources.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Élevage", "Diesel"]);
    }

    #[test]
    fn irrigation_appears_as_its_own_slice() {
        let mut a = FarmActivity::default();
        a.diesel_liters = 100.0;
        a.irrigation_used = true;
        let sources = emission_sources(&EmissionBreakdown::from_activity(&a));
        assert!(sources.iter().any(|s| s.label == "Irrigation"));
    }

    #[test]
    fn shares_cover_the_whole_total() {
        let mut a = FarmActivity::default();
        a.diesel_liters = 100.0;
        a.gas_bottles = 5.0;
        a.electricity_kwh = 200.0;
        a.fertilizer_kg = 50.0;
        a.sheep_count = 3.0;
        a.transport_distance_km = 10.0;
        a.trips_per_year = 4.0;
        a.irrigation_used = true;
        let sources = emission_sources(&EmissionBreakdown::from_activity(&a));
        let total_share: f64 = sources.iter().map(|s| s.share_pct).sum();
        assert!(close(total_share, 100.0));
    }

    #[test]
    fn split_is_ordered_largest_first() {
        let mut a = FarmActivity::default();
        a.diesel_liters = 1.0;
        a.cow_count = 2.0;
        a.electricity_kwh = 30.0;
        let sources = emission_sources(&EmissionBreakdown::from_activity(&a));
        for pair in sources.windows(2) {
            assert!(pair[0].kg_co2e >= pair[1].kg_co2e);
        }
    }

    // -- storage comparison ------------------------------------------------

    #[test]
    fn comparison_mirrors_the_footprint_figures() {
        let mut a = FarmActivity::default();
        a.crop_type = CropType::Olives;
        a.surface_hectares = 2.0;
        a.gas_bottles = 10.0;
        let footprint = compute_footprint(&a);
        let cmp = storage_comparison(&footprint);
        assert!(close(cmp.stored_tonnes, 6.0));
        assert!(close(cmp.emitted_tonnes, footprint.carbon_emitted_tonnes));
    }

    // -- credit summary ----------------------------------------------------

    #[test]
    fn positive_net_prices_credits_at_the_market_rate() {
        let mut a = FarmActivity::default();
        a.crop_type = CropType::Olives;
        a.surface_hectares = 5.0;
        let summary = credit_summary(&compute_footprint(&a));
        assert!(close(summary.net_tonnes, 15.0));
        assert!(close(summary.credit_tonnes, 15.0));
        assert!(close(summary.credit_value_dt, 480.0));
        assert_eq!(summary.balance, CarbonBalance::Credit);
    }

    #[test]
    fn negative_net_clamps_credits_to_zero() {
        let mut a = FarmActivity::default();
        a.cow_count = 5.0;
        let summary = credit_summary(&compute_footprint(&a));
        assert!(summary.net_tonnes < 0.0);
        assert!(close(summary.credit_tonnes, 0.0));
        assert!(close(summary.credit_value_dt, 0.0));
        assert_eq!(summary.balance, CarbonBalance::Deficit);
    }

    #[test]
    fn exactly_zero_net_still_reads_as_credit() {
        let summary = credit_summary(&compute_footprint(&FarmActivity::default()));
        assert_eq!(summary.balance, CarbonBalance::Credit);
        assert_eq!(summary.balance.label(), "Crédit");
    }

    #[test]
    fn deficit_badge_reads_debit() {
        assert_eq!(CarbonBalance::Deficit.label(), "Débit");
    }
}
