use gloo::net::http::{Request, Response};
use shared::{
    CreateExpenseRequest, CreateIncomeRequest, Expense, Income, LoginRequest, LoginResponse,
    MessageResponse, RegisterRequest, SessionInfo, Summary,
};
use thiserror::Error;
use web_sys::RequestCredentials;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Failure of a single backend request. Validation never reaches this layer;
/// everything here is transport, backend status, or response decoding.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl From<gloo::net::Error> for ApiError {
    fn from(error: gloo::net::Error) -> Self {
        ApiError::Network(error.to_string())
    }
}

impl ApiError {
    /// The backend-provided message, if the failure carried one.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

/// API client for the expense tracker backend.
///
/// One method per endpoint, each a single request with the session cookie
/// attached. No retries, caching, or deduplication; mutation methods return
/// nothing and callers refetch the read endpoints afterwards.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a new API client with a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    async fn status_error(response: Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        // Backend errors usually carry a {"message": ...} body
        let message = serde_json::from_str::<MessageResponse>(&body)
            .map(|m| m.message)
            .unwrap_or(body);
        ApiError::Status { status, message }
    }

    /// Create a new account.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let response = Request::post(&format!("{}/register", self.base_url))
            .credentials(RequestCredentials::Include)
            .json(request)?
            .send()
            .await?;
        if response.ok() {
            Ok(())
        } else {
            Err(Self::status_error(response).await)
        }
    }

    /// Establish a session.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = Request::post(&format!("{}/login", self.base_url))
            .credentials(RequestCredentials::Include)
            .json(request)?
            .send()
            .await?;
        if response.ok() {
            response
                .json::<LoginResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            Err(Self::status_error(response).await)
        }
    }

    /// End the current session.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let response = Request::post(&format!("{}/logout", self.base_url))
            .credentials(RequestCredentials::Include)
            .send()
            .await?;
        if response.ok() {
            Ok(())
        } else {
            Err(Self::status_error(response).await)
        }
    }

    /// Ask the backend whether a session is active.
    pub async fn check_session(&self) -> Result<SessionInfo, ApiError> {
        let response = Request::get(&format!("{}/check-session", self.base_url))
            .credentials(RequestCredentials::Include)
            .send()
            .await?;
        if response.ok() {
            response
                .json::<SessionInfo>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            Err(Self::status_error(response).await)
        }
    }

    /// Create an expense.
    pub async fn add_expense(&self, request: &CreateExpenseRequest) -> Result<(), ApiError> {
        let response = Request::post(&format!("{}/expense", self.base_url))
            .credentials(RequestCredentials::Include)
            .json(request)?
            .send()
            .await?;
        if response.ok() {
            Ok(())
        } else {
            Err(Self::status_error(response).await)
        }
    }

    /// List all expenses.
    pub async fn get_expenses(&self) -> Result<Vec<Expense>, ApiError> {
        let response = Request::get(&format!("{}/expenses", self.base_url))
            .credentials(RequestCredentials::Include)
            .send()
            .await?;
        if response.ok() {
            response
                .json::<Vec<Expense>>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            Err(Self::status_error(response).await)
        }
    }

    /// Update an existing expense by id.
    pub async fn update_expense(
        &self,
        id: i64,
        request: &CreateExpenseRequest,
    ) -> Result<(), ApiError> {
        let response = Request::put(&format!("{}/expense/{}", self.base_url, id))
            .credentials(RequestCredentials::Include)
            .json(request)?
            .send()
            .await?;
        if response.ok() {
            Ok(())
        } else {
            Err(Self::status_error(response).await)
        }
    }

    /// Delete an expense by id.
    pub async fn delete_expense(&self, id: i64) -> Result<(), ApiError> {
        let response = Request::delete(&format!("{}/expense/{}", self.base_url, id))
            .credentials(RequestCredentials::Include)
            .send()
            .await?;
        if response.ok() {
            Ok(())
        } else {
            Err(Self::status_error(response).await)
        }
    }

    /// Create an income record.
    pub async fn add_income(&self, request: &CreateIncomeRequest) -> Result<(), ApiError> {
        let response = Request::post(&format!("{}/income", self.base_url))
            .credentials(RequestCredentials::Include)
            .json(request)?
            .send()
            .await?;
        if response.ok() {
            Ok(())
        } else {
            Err(Self::status_error(response).await)
        }
    }

    /// List all income records.
    pub async fn get_income(&self) -> Result<Vec<Income>, ApiError> {
        let response = Request::get(&format!("{}/income", self.base_url))
            .credentials(RequestCredentials::Include)
            .send()
            .await?;
        if response.ok() {
            response
                .json::<Vec<Income>>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            Err(Self::status_error(response).await)
        }
    }

    /// Fetch the server-computed balance summary.
    pub async fn get_summary(&self) -> Result<Summary, ApiError> {
        let response = Request::get(&format!("{}/summary", self.base_url))
            .credentials(RequestCredentials::Include)
            .send()
            .await?;
        if response.ok() {
            response
                .json::<Summary>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            Err(Self::status_error(response).await)
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
