use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::{Value, json};

/// What the fake service saw, and how it should answer.
#[derive(Clone, Default)]
pub struct FakeService {
    pub requests: Arc<Mutex<Vec<(Option<String>, Value)>>>,
    pub reply: Arc<Mutex<Option<(StatusCode, String)>>>,
}

impl FakeService {
    #[allow(dead_code)]
    pub fn reply_with(&self, status: StatusCode, body: impl Into<String>) {
        *self.reply.lock().unwrap() = Some((status, body.into()));
    }

    pub fn requests(&self) -> Vec<(Option<String>, Value)> {
        self.requests.lock().unwrap().clone()
    }
}

async fn generate(
    State(service): State<FakeService>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    service.requests.lock().unwrap().push((token, body.clone()));

    if let Some((status, body)) = service.reply.lock().unwrap().clone() {
        return (status, body).into_response();
    }

    Json(json!({
        "id": "plan-1",
        "startDate": body["startDate"],
        "days": [{
            "date": body["startDate"],
            "meals": [
                {"slot": "lunch", "recipeId": "r-1", "recipeName": "Lentil soup", "servings": 2},
                {"slot": "dinner", "recipeId": "r-2", "recipeName": "Tomato risotto", "servings": 2}
            ]
        }],
        "shoppingList": {
            "planId": "plan-1",
            "generatedAt": "2024-06-10T07:00:00Z",
            "items": [{
                "ingredientId": "ing-rice",
                "displayName": "rice",
                "totalQuantity": 400,
                "unit": "g",
                "estimatedPriceInCurrency": 1.1
            }]
        }
    }))
    .into_response()
}

/// Serves the fake generation endpoint on an ephemeral local port.
pub async fn spawn_service() -> anyhow::Result<(String, FakeService)> {
    let service = FakeService::default();
    let app = Router::new()
        .route("/api/meal-plans/generate", post(generate))
        .with_state(service.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok((format!("http://{addr}/api"), service))
}
