use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum MealPlanError {
    #[error("meal plan request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("meal plan service returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("invalid meal plan base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl MealPlanError {
    /// Builds a status error from the response body, preferring the JSON
    /// `detail`, `error` or `message` field over the raw text.
    pub(crate) fn from_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| {
                ["detail", "error", "message"]
                    .iter()
                    .find_map(|field| value.get(field)?.as_str().map(str::to_owned))
            })
            .unwrap_or_else(|| body.trim().to_owned());

        Self::Status { status, message }
    }
}
