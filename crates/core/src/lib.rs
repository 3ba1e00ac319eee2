//! AgroCarbon domain library.
//!
//! Pure types and calculations behind the carbon-credit marketplace:
//! the farm activity questionnaire, the footprint calculator and its
//! report figures, the signup credit estimate, account profiles and the
//! company-side questionnaire. No I/O lives here; everything is plain
//! data in, plain data out.

pub mod activity;
pub mod company;
pub mod crop;
pub mod enrollment;
pub mod error;
pub mod footprint;
pub mod marketplace;
pub mod profile;
pub mod report;
pub mod types;
pub mod validation;
