use std::time::Duration;

use platewise_shared::mealplan::{GenerateMealPlanRequest, MealPlan};
use reqwest::Client;
use url::Url;

use crate::MealPlanError;

const USER_AGENT: &str = concat!("platewise/", env!("CARGO_PKG_VERSION"));

/// Client for the remote meal-plan generation endpoint.
#[derive(Clone, Debug)]
pub struct MealPlanClient {
    client: Client,
    base_url: Url,
}

impl MealPlanClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, MealPlanError> {
        let invalid = |reason: String| MealPlanError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason,
        };

        let parsed = Url::parse(base_url).map_err(|err| invalid(err.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", parsed.scheme())));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/meal-plans/generate",
            self.base_url.as_str().trim_end_matches('/')
        )
    }

    /// Ask the service for a new meal plan on behalf of the token's owner.
    #[tracing::instrument(skip(self, token, request), fields(start = %request.start_date, days = request.days))]
    pub async fn generate(
        &self,
        token: &str,
        request: &GenerateMealPlanRequest,
    ) -> Result<MealPlan, MealPlanError> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "meal plan generation rejected");

            return Err(MealPlanError::from_body(status.as_u16(), &body));
        }

        let plan: MealPlan = response.json().await?;
        tracing::info!(plan_id = %plan.id, days = plan.days.len(), "meal plan generated");

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base() {
        let client = MealPlanClient::new("https://api.platewise.test/v1/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.endpoint(), "https://api.platewise.test/v1/meal-plans/generate");

        let client = MealPlanClient::new("http://localhost:8080", Duration::from_secs(5)).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8080/meal-plans/generate");
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(matches!(
            MealPlanClient::new("not a url", Duration::from_secs(5)),
            Err(MealPlanError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            MealPlanClient::new("ftp://example.com", Duration::from_secs(5)),
            Err(MealPlanError::InvalidBaseUrl { .. })
        ));
    }
}
