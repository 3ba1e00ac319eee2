//! REST API client for the farmer endpoints.
//!
//! Wraps the platform HTTP API (sign-in, profile, carbon record CRUD)
//! using [`reqwest`]. One [`PlatformApi`] targets one backend; all
//! authenticated calls take the [`Session`] explicitly.

use serde::Deserialize;

use agrocarbon_core::footprint::CarbonFootprint;
use agrocarbon_core::profile::FarmerProfile;

use crate::config::ClientConfig;
use crate::session::Session;

/// HTTP client for one platform backend.
pub struct PlatformApi {
    client: reqwest::Client,
    api_url: String,
}

/// Body returned by `POST /agriculteur/signin`.
#[derive(Debug, Deserialize)]
pub struct SigninResponse {
    /// Bearer token for subsequent calls.
    pub access_token: String,
    /// The signed-in farmer.
    pub agriculteur: FarmerProfile,
}

/// Errors from the platform REST layer.
#[derive(Debug, thiserror::Error)]
pub enum PlatformApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend rejected the bearer token.
    #[error("session expired, sign in again")]
    SessionExpired,

    /// The backend returned any other non-2xx status.
    #[error("platform API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl PlatformApi {
    /// Build a client from configuration, applying its request timeout.
    pub fn new(config: &ClientConfig) -> Result<Self, PlatformApiError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            api_url: config.api_url.clone(),
        })
    }

    /// Build a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }

    /// Base API URL this client targets.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Full URL for a path under the API base.
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// Sign a farmer in with email and password.
    ///
    /// Sends `POST /agriculteur/signin` and turns the returned token and
    /// profile into a [`Session`].
    pub async fn signin(&self, email: &str, password: &str) -> Result<Session, PlatformApiError> {
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });

        let response = self
            .client
            .post(self.endpoint("/agriculteur/signin"))
            .json(&body)
            .send()
            .await?;

        let signin: SigninResponse = Self::parse_response(response).await?;
        tracing::info!(email = %signin.agriculteur.email, "Signed in");
        Ok(Session::new(signin.access_token, signin.agriculteur))
    }

    /// Fetch the signed-in farmer's profile.
    ///
    /// Sends `GET /agriculteur/me` with the session's bearer token.
    pub async fn fetch_profile(&self, session: &Session) -> Result<FarmerProfile, PlatformApiError> {
        let response = self
            .client
            .get(self.endpoint("/agriculteur/me"))
            .bearer_auth(session.token())
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch the farmer's carbon record, if one has been saved.
    ///
    /// Sends `GET /agriculteur/co2`. A `404` means the farmer has never
    /// saved a record and maps to `Ok(None)`, not an error.
    pub async fn fetch_carbon_record(
        &self,
        session: &Session,
    ) -> Result<Option<CarbonFootprint>, PlatformApiError> {
        let response = self
            .client
            .get(self.endpoint("/agriculteur/co2"))
            .bearer_auth(session.token())
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let record = Self::parse_response(response).await?;
        Ok(Some(record))
    }

    /// Save a first carbon record for this farmer.
    ///
    /// Sends `POST /agriculteur/co2` with the full computed record.
    pub async fn create_carbon_record(
        &self,
        session: &Session,
        record: &CarbonFootprint,
    ) -> Result<(), PlatformApiError> {
        let response = self
            .client
            .post(self.endpoint("/agriculteur/co2"))
            .bearer_auth(session.token())
            .json(record)
            .send()
            .await?;

        Self::check_status(response).await
    }

    /// Replace the farmer's existing carbon record.
    ///
    /// Sends `PATCH /agriculteur/co2` with the full computed record.
    pub async fn update_carbon_record(
        &self,
        session: &Session,
        record: &CarbonFootprint,
    ) -> Result<(), PlatformApiError> {
        let response = self
            .client
            .patch(self.endpoint("/agriculteur/co2"))
            .bearer_auth(session.token())
            .json(record)
            .send()
            .await?;

        Self::check_status(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. `401` becomes
    /// [`PlatformApiError::SessionExpired`]; any other failure keeps the
    /// status and body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, PlatformApiError> {
        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(PlatformApiError::SessionExpired);
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(PlatformApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, PlatformApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), PlatformApiError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}
