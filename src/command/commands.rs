/// Write side: one statement or procedure call per command
/// 1. create user
/// 2. create item
/// 3. place bid
// region:    --- Imports
use super::statements;
use crate::database::DatabaseManager;
use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
// endregion: --- Imports

// region:    --- Commands
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateUserCommand {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateItemCommand {
    pub seller_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub starting_price: f64,
    /// `YYYY-MM-DD HH24:MI:SS`, handed to the database unparsed
    pub auction_end_time: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlaceBidCommand {
    pub auction_id: i64,
    pub buyer_id: i64,
    pub bid_amount: f64,
}

/// 1. create user
pub async fn create_user(db_manager: &DatabaseManager, cmd: CreateUserCommand) -> AppResult<()> {
    info!("{:<12} --> create user: {}", "Command", cmd.name);
    debug!("{:<12} --> create user email: {}", "Command", cmd.email);
    db_manager
        .with_connection(|conn| {
            Box::pin(async move {
                sqlx::query(statements::INSERT_USER)
                    .bind(&cmd.name)
                    .bind(&cmd.email)
                    .bind(&cmd.password)
                    .bind(&cmd.role)
                    .execute(&mut *conn)
                    .await?;
                Ok::<_, AppError>(())
            })
        })
        .await
}

/// 2. create item
pub async fn create_item(db_manager: &DatabaseManager, cmd: CreateItemCommand) -> AppResult<()> {
    info!(
        "{:<12} --> create item: {} (seller {})",
        "Command", cmd.name, cmd.seller_id
    );
    db_manager
        .with_connection(|conn| {
            Box::pin(async move {
                sqlx::query(statements::INSERT_ITEM)
                    .bind(cmd.seller_id)
                    .bind(&cmd.name)
                    .bind(&cmd.description)
                    .bind(cmd.starting_price)
                    .bind(&cmd.auction_end_time)
                    .execute(&mut *conn)
                    .await?;
                Ok::<_, AppError>(())
            })
        })
        .await
}

/// 3. place bid
///
/// Validation and the highest bid update happen inside `add_bid`. Success only
/// means the call returned without raising.
pub async fn place_bid(db_manager: &DatabaseManager, cmd: PlaceBidCommand) -> AppResult<()> {
    info!("{:<12} --> place bid: {:?}", "Command", cmd);
    db_manager
        .with_connection(|conn| {
            Box::pin(async move {
                sqlx::query(statements::CALL_ADD_BID)
                    .bind(cmd.auction_id)
                    .bind(cmd.buyer_id)
                    .bind(cmd.bid_amount)
                    .execute(&mut *conn)
                    .await
                    .map_err(AppError::from_procedure)?;
                Ok::<_, AppError>(())
            })
        })
        .await
}
// endregion: --- Commands
