use std::time::Duration;

use platewise_mealplan::{GenerateMealPlanRequest, MealPlanClient};

use crate::{AppError, config::Config};

/// Generate a plan through the configured service, as pretty JSON.
pub async fn run(
    config: &Config,
    token: &str,
    request: &GenerateMealPlanRequest,
) -> Result<String, AppError> {
    if request.days == 0 {
        return Err(AppError::InvalidInput("days must be at least 1".to_owned()));
    }
    if request.household_size == 0 {
        return Err(AppError::InvalidInput(
            "household size must be at least 1".to_owned(),
        ));
    }

    let client = MealPlanClient::new(
        &config.api.base_url,
        Duration::from_secs(config.api.timeout_secs),
    )?;
    let plan = client.generate(token, request).await?;

    Ok(serde_json::to_string_pretty(&plan)?)
}
