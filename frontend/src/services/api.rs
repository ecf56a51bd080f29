use gloo_net::http::Request;
use shared::api::MeetingsResponse;
use thiserror::Error;

const MEETINGS_URL: &str = "/meetings";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure or a body that does not decode as the expected
    /// shape; both are opaque failures to the caller.
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),

    #[error("HTTP error: {0}")]
    Status(u16),
}

pub struct ApiService;

impl ApiService {
    pub async fn fetch_meetings(user_id: &str) -> Result<MeetingsResponse, ApiError> {
        let url = format!("{}?user_id={}", MEETINGS_URL, user_id);

        let response = Request::get(&url).send().await?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}
