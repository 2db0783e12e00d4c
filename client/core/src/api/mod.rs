//! Site API client
//!
//! HTTP client for the department backend (`/api/*`).

pub mod models;

use crate::{ClientConfig, ClientError, ContactSubmission};
use models::*;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

/// Department site API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create new client
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.normalized_base_url().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =========================================================================
    // Contact
    // =========================================================================

    /// Submit the contact form
    pub async fn submit_contact(&self, submission: &ContactSubmission) -> Result<WriteReceipt, ClientError> {
        let envelope: ApiEnvelope<serde_json::Value> =
            self.send(Method::POST, "/contact", Some(submission)).await?;
        Ok(receipt(envelope))
    }

    /// List every stored contact message, newest first
    pub async fn list_contacts(&self) -> Result<Vec<ContactMessage>, ClientError> {
        self.get_data("/contact", &[]).await
    }

    // =========================================================================
    // Faculty
    // =========================================================================

    /// List faculty, head of department first
    pub async fn list_faculty(&self) -> Result<Vec<FacultyMember>, ClientError> {
        self.get_data("/faculty", &[]).await
    }

    pub async fn get_faculty(&self, id: i64) -> Result<FacultyMember, ClientError> {
        self.get_data(&format!("/faculty/{id}"), &[]).await
    }

    pub async fn create_faculty(&self, draft: &FacultyDraft) -> Result<WriteReceipt, ClientError> {
        draft.validate()?;
        self.write(Method::POST, "/faculty", Some(draft)).await
    }

    pub async fn update_faculty(&self, id: i64, draft: &FacultyDraft) -> Result<WriteReceipt, ClientError> {
        draft.validate()?;
        self.write(Method::PUT, &format!("/faculty/{id}"), Some(draft)).await
    }

    pub async fn delete_faculty(&self, id: i64) -> Result<WriteReceipt, ClientError> {
        self.write::<()>(Method::DELETE, &format!("/faculty/{id}"), None).await
    }

    // =========================================================================
    // Achievements
    // =========================================================================

    /// List achievements; inactive ones only when `include_inactive` is set
    pub async fn list_achievements(&self, include_inactive: bool) -> Result<Vec<Achievement>, ClientError> {
        self.get_data("/achievements", all_query(include_inactive)).await
    }

    pub async fn create_achievement(&self, draft: &AchievementDraft) -> Result<WriteReceipt, ClientError> {
        draft.validate()?;
        self.write(Method::POST, "/achievements", Some(draft)).await
    }

    pub async fn update_achievement(&self, id: i64, draft: &AchievementDraft) -> Result<WriteReceipt, ClientError> {
        draft.validate()?;
        self.write(Method::PUT, &format!("/achievements/{id}"), Some(draft)).await
    }

    pub async fn delete_achievement(&self, id: i64) -> Result<WriteReceipt, ClientError> {
        self.write::<()>(Method::DELETE, &format!("/achievements/{id}"), None).await
    }

    // =========================================================================
    // Gallery
    // =========================================================================

    pub async fn list_gallery(&self, include_inactive: bool) -> Result<Vec<GalleryImage>, ClientError> {
        self.get_data("/gallery", all_query(include_inactive)).await
    }

    pub async fn create_gallery_image(&self, draft: &GalleryDraft) -> Result<WriteReceipt, ClientError> {
        draft.validate()?;
        self.write(Method::POST, "/gallery", Some(draft)).await
    }

    pub async fn update_gallery_image(&self, id: i64, draft: &GalleryDraft) -> Result<WriteReceipt, ClientError> {
        draft.validate()?;
        self.write(Method::PUT, &format!("/gallery/{id}"), Some(draft)).await
    }

    pub async fn delete_gallery_image(&self, id: i64) -> Result<WriteReceipt, ClientError> {
        self.write::<()>(Method::DELETE, &format!("/gallery/{id}"), None).await
    }

    // =========================================================================
    // Staff login
    // =========================================================================

    pub async fn login(&self, credentials: &Credentials) -> Result<LoginSession, ClientError> {
        let envelope: ApiEnvelope<serde_json::Value> =
            self.send(Method::POST, "/login", Some(credentials)).await?;

        let user = envelope
            .user
            .ok_or_else(|| ClientError::Decode("login response has no user".into()))?;
        Ok(LoginSession { user, message: envelope.message })
    }

    // =========================================================================
    // HTTP Helpers
    // =========================================================================

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    async fn get_data<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, ClientError> {
        let response = self.client.get(self.endpoint(path)).query(query).send().await?;
        let envelope: ApiEnvelope<T> = read_envelope(response).await?;
        envelope
            .data
            .ok_or_else(|| ClientError::Decode(format!("response from {path} has no data")))
    }

    async fn write<B: Serialize>(&self, method: Method, path: &str, body: Option<&B>) -> Result<WriteReceipt, ClientError> {
        let envelope: ApiEnvelope<serde_json::Value> = self.send(method, path, body).await?;
        Ok(receipt(envelope))
    }

    async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiEnvelope<T>, ClientError> {
        let mut request = self.client.request(method.clone(), self.endpoint(path));
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(method = %method, path = path, "Sending API request");
        let response = request.send().await?;
        read_envelope(response).await
    }
}

async fn read_envelope<T: DeserializeOwned>(response: reqwest::Response) -> Result<ApiEnvelope<T>, ClientError> {
    let status = response.status();
    let body = response.bytes().await?;

    let envelope: ApiEnvelope<T> = serde_json::from_slice(&body)
        .map_err(|e| ClientError::Decode(format!("{status}: {e}")))?;

    if envelope.success {
        return Ok(envelope);
    }

    let message = envelope
        .error
        .unwrap_or_else(|| format!("request failed with status {status}"));
    if status == StatusCode::NOT_FOUND {
        return Err(ClientError::NotFound(message));
    }
    Err(ClientError::Rejected { status: status.as_u16(), message })
}

fn receipt<T>(envelope: ApiEnvelope<T>) -> WriteReceipt {
    WriteReceipt {
        id: envelope.id,
        message: envelope.message,
    }
}

fn all_query(include_inactive: bool) -> &'static [(&'static str, &'static str)] {
    if include_inactive {
        &[("all", "true")]
    } else {
        &[]
    }
}
