//! Text rendering of reports and dashboards.
//!
//! Everything returns a `String` so output stays testable; commands
//! decide where it goes.

use agrocarbon_core::footprint::CarbonFootprint;
use agrocarbon_core::marketplace::{CompanyDashboardStats, MarketplaceActivity};
use agrocarbon_core::profile::FarmerProfile;
use agrocarbon_core::report::{credit_summary, emission_sources, storage_comparison};

/// Shown when the backend has no carbon record for the farmer.
pub const NO_RECORD_MESSAGE: &str =
    "Aucune donnée carbone enregistrée. Veuillez d'abord remplir le calculateur.";

/// Full text report for one computed footprint.
pub fn footprint_report(footprint: &CarbonFootprint) -> String {
    let mut out = String::new();
    let activity = &footprint.activity;

    let parcel = if activity.parcel_name.is_empty() {
        "(parcelle sans nom)"
    } else {
        activity.parcel_name.as_str()
    };
    out.push_str(&format!("Bilan carbone : {parcel}\n"));
    out.push_str(&format!(
        "  Surface : {} ha, culture : {}, sol : {}\n",
        activity.surface_hectares,
        activity.crop_type.label(),
        activity.soil_type.label(),
    ));
    out.push_str(&format!(
        "  Calculé le {}\n\n",
        footprint.calculation_timestamp.format("%Y-%m-%d %H:%M UTC"),
    ));

    out.push_str(&format!(
        "Émissions annuelles : {:.1} kg CO2e\n",
        footprint.total_emissions_co2_kg
    ));
    let sources = emission_sources(&footprint.breakdown);
    if sources.is_empty() {
        out.push_str("  Aucune émission détectée\n");
    } else {
        for source in &sources {
            out.push_str(&format!(
                "  {:<12} {:>9.1} kg  {:>5.1} %\n",
                source.label, source.kg_co2e, source.share_pct,
            ));
        }
    }
    out.push('\n');

    let comparison = storage_comparison(footprint);
    let summary = credit_summary(footprint);
    out.push_str("Stockage et bilan\n");
    out.push_str(&format!(
        "  {:<16} {:>9.3} t\n",
        "Carbone stocké", comparison.stored_tonnes
    ));
    out.push_str(&format!(
        "  {:<16} {:>9.3} t\n",
        "Carbone émis", comparison.emitted_tonnes
    ));
    out.push_str(&format!(
        "  {:<16} {:>9.3} t ({})\n",
        "Bilan net",
        summary.net_tonnes,
        summary.balance.label(),
    ));
    out.push_str(&format!(
        "  {:<16} {:>9.3} t\n",
        "Crédits", summary.credit_tonnes
    ));
    out.push_str(&format!(
        "  {:<16} {:>9.2} DT\n",
        "Valeur estimée", summary.credit_value_dt
    ));
    out
}

/// One-line signup estimate.
pub fn estimate_line(credits: f64) -> String {
    format!("Estimation : {credits:.0} crédits carbone par an")
}

/// Dashboard-style header for a farmer profile.
pub fn profile_header(farmer: &FarmerProfile) -> String {
    let mut out = format!(
        "Agriculteur : {} ({})",
        farmer.display_name(),
        farmer.email
    );

    let mut farm_parts = Vec::new();
    if let Some(name) = &farmer.farm_name {
        farm_parts.push(name.clone());
    }
    if let Some(size) = farmer.farm_size_hectares {
        farm_parts.push(format!("{size} ha"));
    }
    if let Some(crop) = farmer.main_crop_type {
        farm_parts.push(format!("culture principale : {}", crop.label()));
    }
    if !farm_parts.is_empty() {
        out.push_str(&format!("\nExploitation : {}", farm_parts.join(", ")));
    }
    out
}

/// Company dashboard: stats tiles plus the recent-activity feed.
pub fn company_overview(
    stats: &CompanyDashboardStats,
    activities: &[MarketplaceActivity],
) -> String {
    let mut out = String::new();
    out.push_str("Tableau de bord entreprise\n");
    out.push_str(&format!(
        "  {:<20} {:.0}\n",
        "Crédits totaux", stats.total_credits
    ));
    out.push_str(&format!(
        "  {:<20} {:.1} t CO2e\n",
        "Empreinte carbone", stats.carbon_footprint
    ));
    out.push_str(&format!(
        "  {:<20} {:.0} %\n",
        "Taux de compensation", stats.compensation_rate
    ));
    out.push_str(&format!(
        "  {:<20} {}\n",
        "Projets actifs", stats.active_projects
    ));
    out.push_str(&format!(
        "  {:<20} {:.0} DT\n",
        "Économies du mois", stats.monthly_savings
    ));
    out.push('\n');

    out.push_str("Activités récentes\n");
    for activity in activities {
        let amount = match activity.amount {
            Some(amount) => format!("{amount:>6.0} crédits"),
            None => " ".repeat(14),
        };
        out.push_str(&format!(
            "  {} {}  {:<40} {}  [{}]\n",
            activity.kind.icon(),
            activity.date,
            activity.description,
            amount,
            activity.status.label(),
        ));
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
