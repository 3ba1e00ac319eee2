//! Authenticated session state.

use agrocarbon_core::profile::FarmerProfile;

/// A signed-in session: the bearer token plus, when it came from a
/// sign-in rather than a pre-issued token, the farmer it belongs to.
///
/// Sessions are passed explicitly to every authenticated call; there is
/// no ambient current-session global.
#[derive(Debug, Clone)]
pub struct Session {
    access_token: String,
    farmer: Option<FarmerProfile>,
}

impl Session {
    /// Session established by a sign-in.
    pub fn new(access_token: String, farmer: FarmerProfile) -> Self {
        Self {
            access_token,
            farmer: Some(farmer),
        }
    }

    /// Session from a pre-issued token, e.g. `AGROCARBON_TOKEN`.
    pub fn from_token(access_token: String) -> Self {
        Self {
            access_token,
            farmer: None,
        }
    }

    /// Bearer token for the `Authorization` header.
    pub fn token(&self) -> &str {
        &self.access_token
    }

    /// The signed-in farmer, when known locally.
    pub fn farmer(&self) -> Option<&FarmerProfile> {
        self.farmer.as_ref()
    }
}
