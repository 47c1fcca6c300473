use crate::{
    ADMIN_RESET_USERS_PATH, ADMIN_SECRET_HEADER, ClientError, ClientResult, PROFILE_PATH,
    SessionContext, UNSUBSCRIBE_PATH,
};

use lead_config::ApiConfig;
use lead_core::{
    AuthResponse, ForgotPasswordForm, LoginForm, ProfileEnvelope, ProfileLookup,
    ResetPasswordForm, SaveResponse, SignupForm,
};

use log::debug;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Value, json};

/// Backend answer passed through untouched, for the web proxy.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Value,
}

/// HTTP client for the LeadSite backend API
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    auth_prefix: String,
    session: SessionContext,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "http://127.0.0.1:5000")
    /// * `auth_prefix` - Prefix of the auth endpoints (e.g., "/api/auth")
    /// * `session` - Where the bearer token is read from
    pub fn new(base_url: &str, auth_prefix: &str, session: SessionContext) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_prefix: auth_prefix.trim_end_matches('/').to_string(),
            session,
            client: ReqwestClient::new(),
        }
    }

    pub fn from_config(config: &ApiConfig, session: SessionContext) -> Self {
        Self::new(&config.base_url, &config.auth_prefix, session)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    fn auth_path(&self, endpoint: &str) -> String {
        format!("{}/{}", self.auth_prefix, endpoint)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Build a request carrying the stored bearer token.
    ///
    /// Fails before any network traffic when there is no token.
    fn authed_request(&self, method: Method, path: &str) -> ClientResult<RequestBuilder> {
        let token = self.session.token()?.ok_or_else(ClientError::no_token)?;
        Ok(self.request(method, path).bearer_auth(token))
    }

    /// Execute request and map the response into the failure taxonomy
    async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        debug!("Backend responded {status} ({} bytes)", bytes.len());

        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::unauthorized(error_message(&bytes)));
        }

        if !status.is_success() {
            let message = error_message(&bytes).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });
            return Err(ClientError::http(status.as_u16(), message));
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    // =========================================================================
    // Generic calls
    // =========================================================================

    /// Authenticated GET
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.authed_request(Method::GET, path)?;
        self.execute(req).await
    }

    /// Authenticated POST with a JSON body
    pub async fn post<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.authed_request(Method::POST, path)?.json(body);
        self.execute(req).await
    }

    /// Unauthenticated POST with a JSON body
    pub async fn post_public<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.request(Method::POST, path).json(body);
        self.execute(req).await
    }

    /// Send with an explicit bearer token and extra headers, returning the
    /// backend status and body as-is.
    ///
    /// Only transport failures are errors. A body that is not JSON comes
    /// back wrapped as `{"message": <text>}`.
    pub async fn send_raw(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        headers: &[(&str, &str)],
        body: Option<&Value>,
    ) -> ClientResult<RawResponse> {
        let mut req = self.request(method, path);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        for (name, value) in headers {
            req = req.header(*name, *value);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or_else(|_| json!({ "message": text }))
        };

        Ok(RawResponse { status, body })
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    pub async fn signup(&self, form: &SignupForm) -> ClientResult<AuthResponse> {
        self.post_public(&self.auth_path("signup"), form).await
    }

    pub async fn login(&self, form: &LoginForm) -> ClientResult<AuthResponse> {
        self.post_public(&self.auth_path("login"), form).await
    }

    pub async fn forgot_password(&self, form: &ForgotPasswordForm) -> ClientResult<Value> {
        self.post_public(&self.auth_path("forgot-password"), form)
            .await
    }

    pub async fn reset_password(&self, form: &ResetPasswordForm) -> ClientResult<Value> {
        self.post_public(&self.auth_path("reset-password"), form)
            .await
    }

    // =========================================================================
    // Profile Operations
    // =========================================================================

    /// Fetch the profile and classify the body.
    pub async fn fetch_profile(&self) -> ClientResult<ProfileLookup> {
        let envelope: ProfileEnvelope = self.get(PROFILE_PATH).await?;
        Ok(ProfileLookup::from(envelope))
    }

    /// Create or update the profile.
    pub async fn save_profile<B: Serialize + ?Sized>(&self, body: &B) -> ClientResult<SaveResponse> {
        self.post(PROFILE_PATH, body).await
    }

    // =========================================================================
    // Outreach / Admin Operations
    // =========================================================================

    pub async fn unsubscribe(&self, email: &str, token: Option<&str>) -> ClientResult<Value> {
        #[derive(Serialize)]
        struct UnsubscribeRequest<'a> {
            email: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            token: Option<&'a str>,
        }

        let body = UnsubscribeRequest { email, token };
        self.post_public(UNSUBSCRIBE_PATH, &body).await
    }

    /// Delete every user account. The shared secret is sent alongside the
    /// session's bearer token.
    pub async fn reset_users(&self, admin_secret: &str) -> ClientResult<Value> {
        let req = self
            .authed_request(Method::POST, ADMIN_RESET_USERS_PATH)?
            .header(ADMIN_SECRET_HEADER, admin_secret)
            .json(&json!({}));
        self.execute(req).await
    }
}

/// Pull a human-readable message out of an error body.
///
/// Accepts `{"message": ..}`, `{"error": ".."}` and `{"error": {"message": ..}}`.
pub(crate) fn error_message(bytes: &[u8]) -> Option<String> {
    let body: Value = serde_json::from_slice(bytes).ok()?;

    let message = body
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| body.get("error").and_then(Value::as_str))
        .or_else(|| {
            body.get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
        })?;

    let message = message.trim();
    (!message.is_empty()).then(|| message.to_string())
}
