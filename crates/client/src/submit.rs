//! Create-or-update flow for carbon records.
//!
//! The backend keeps at most one carbon record per farmer: the first
//! save creates it, every save after that replaces it. This module
//! wraps that decision so callers never pick the wrong verb.

use serde::Serialize;

use agrocarbon_core::footprint::CarbonFootprint;

use crate::api::{PlatformApi, PlatformApiError};
use crate::session::Session;

/// What a save actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveOutcome {
    Created,
    Updated,
}

impl SaveOutcome {
    /// Which way a save goes given whether a record already exists.
    pub fn for_existing(has_existing: bool) -> Self {
        if has_existing {
            Self::Updated
        } else {
            Self::Created
        }
    }
}

/// Save a computed record, creating or updating as the backend requires.
///
/// Looks up the existing record first: absent means `POST`, present
/// means `PATCH`.
pub async fn submit_footprint(
    api: &PlatformApi,
    session: &Session,
    footprint: &CarbonFootprint,
) -> Result<SaveOutcome, PlatformApiError> {
    let existing = api.fetch_carbon_record(session).await?;

    let outcome = SaveOutcome::for_existing(existing.is_some());
    match outcome {
        SaveOutcome::Updated => api.update_carbon_record(session, footprint).await?,
        SaveOutcome::Created => api.create_carbon_record(session, footprint).await?,
    }

    tracing::info!(
        parcel = %footprint.activity.parcel_name,
        outcome = ?outcome,
        "Saved carbon record",
    );
    Ok(outcome)
}
