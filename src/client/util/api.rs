//! Requests against the `/api` routes, only compiled for the browser.

#[cfg(feature = "web")]
use reqwasm::http::{Request, RequestCredentials, Response};

#[cfg(feature = "web")]
use crate::model::{
    build_order::{BuildOrderDto, CreateBuildOrderDto},
    user::UserDto,
};

/// Formats a failed response using the `ErrorDto` body when the server sent one
#[cfg(feature = "web")]
async fn error_message(response: Response) -> String {
    use crate::model::api::ErrorDto;

    if let Ok(error_dto) = response.json::<ErrorDto>().await {
        format!(
            "Request failed with status {}: {}",
            response.status(),
            error_dto.error
        )
    } else {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        format!(
            "Request failed with status {}: {}",
            response.status(),
            error_text
        )
    }
}

/// Retrieve the signed in user, `None` when there is no session
#[cfg(feature = "web")]
pub async fn get_current_user() -> Result<Option<UserDto>, String> {
    let response = Request::get("/api/auth/user")
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => {
            let user = response
                .json::<UserDto>()
                .await
                .map_err(|e| format!("Failed to parse user data: {}", e))?;
            Ok(Some(user))
        }
        401 | 404 => Ok(None),
        _ => Err(error_message(response).await),
    }
}

/// Retrieve build orders, newest first
#[cfg(feature = "web")]
pub async fn list_build_orders(
    public_only: bool,
    limit: Option<u64>,
) -> Result<Vec<BuildOrderDto>, String> {
    let mut query = Vec::new();
    if public_only {
        query.push("public=true".to_string());
    }
    if let Some(limit) = limit {
        query.push(format!("limit={}", limit));
    }

    let url = if query.is_empty() {
        "/api/build-orders".to_string()
    } else {
        format!("/api/build-orders?{}", query.join("&"))
    };

    let response = Request::get(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<Vec<BuildOrderDto>>()
            .await
            .map_err(|e| format!("Failed to parse build orders: {}", e)),
        _ => Err(error_message(response).await),
    }
}

/// Retrieve a single build order, `None` when it does not exist
///
/// Every successful retrieval counts as a view.
#[cfg(feature = "web")]
pub async fn get_build_order(id: i32) -> Result<Option<BuildOrderDto>, String> {
    let response = Request::get(&format!("/api/build-orders/{}", id))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => {
            let build_order = response
                .json::<BuildOrderDto>()
                .await
                .map_err(|e| format!("Failed to parse build order: {}", e))?;
            Ok(Some(build_order))
        }
        404 => Ok(None),
        _ => Err(error_message(response).await),
    }
}

#[cfg(feature = "web")]
pub async fn create_build_order(payload: &CreateBuildOrderDto) -> Result<BuildOrderDto, String> {
    let body = serde_json::to_string(payload)
        .map_err(|e| format!("Failed to serialize build order: {}", e))?;

    let response = Request::post("/api/build-orders")
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        201 => response
            .json::<BuildOrderDto>()
            .await
            .map_err(|e| format!("Failed to parse created build order: {}", e)),
        _ => Err(error_message(response).await),
    }
}

#[cfg(feature = "web")]
pub async fn delete_build_order(id: i32) -> Result<(), String> {
    let response = Request::delete(&format!("/api/build-orders/{}", id))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => Ok(()),
        _ => Err(error_message(response).await),
    }
}
