// region:    --- Imports
use crate::command::commands::{CreateItemCommand, CreateUserCommand, PlaceBidCommand};
use crate::error::AppResult;
use crate::store::AuctionStore;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

// endregion: --- Imports

pub type SharedStore = Arc<dyn AuctionStore>;

fn created(message: &str) -> impl IntoResponse {
    (StatusCode::CREATED, Json(json!({ "message": message })))
}

pub async fn handle_index() -> &'static str {
    "Welcome to the Online Auction System API!"
}

// region:    --- Command Handlers

pub async fn handle_create_user(
    State(store): State<SharedStore>,
    payload: Result<Json<CreateUserCommand>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(cmd) = payload?;
    info!("{:<12} --> create user: {}", "Handler", cmd.name);
    store.create_user(cmd).await?;
    Ok(created("User created successfully!"))
}

pub async fn handle_create_item(
    State(store): State<SharedStore>,
    payload: Result<Json<CreateItemCommand>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(cmd) = payload?;
    info!("{:<12} --> create item: {}", "Handler", cmd.name);
    store.create_item(cmd).await?;
    Ok(created("Item created successfully!"))
}

pub async fn handle_place_bid(
    State(store): State<SharedStore>,
    payload: Result<Json<PlaceBidCommand>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(cmd) = payload?;
    info!("{:<12} --> place bid: {:?}", "Handler", cmd);
    store.place_bid(cmd).await?;
    Ok(created("Bid placed successfully!"))
}

// endregion: --- Command Handlers

// region:    --- Query Handlers

pub async fn handle_get_users(State(store): State<SharedStore>) -> AppResult<impl IntoResponse> {
    info!("{:<12} --> all users", "Handler");
    Ok(Json(store.list_users().await?))
}

pub async fn handle_get_items(State(store): State<SharedStore>) -> AppResult<impl IntoResponse> {
    info!("{:<12} --> all items", "Handler");
    Ok(Json(store.list_items().await?))
}

pub async fn handle_get_auctions(State(store): State<SharedStore>) -> AppResult<impl IntoResponse> {
    info!("{:<12} --> all auctions", "Handler");
    Ok(Json(store.list_auctions().await?))
}

pub async fn handle_get_winners(State(store): State<SharedStore>) -> AppResult<impl IntoResponse> {
    info!("{:<12} --> all winners", "Handler");
    Ok(Json(store.list_winners().await?))
}

// endregion: --- Query Handlers

// endregion: --- Tests
