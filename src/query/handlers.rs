// region:    --- Imports
use super::queries;
use crate::auction::model::{Auction, Item, User, Winner};
use crate::database::DatabaseManager;
use sqlx::Error as SqlxError;
use tracing::info;

// endregion: --- Imports

// region:    --- Query Handlers

/// All users
pub async fn get_all_users(db_manager: &DatabaseManager) -> Result<Vec<User>, SqlxError> {
    info!("{:<12} --> all users", "Query");
    db_manager
        .with_connection(|conn| {
            Box::pin(async move {
                sqlx::query_as::<_, User>(queries::GET_ALL_USERS)
                    .fetch_all(&mut *conn)
                    .await
            })
        })
        .await
}

/// All items
pub async fn get_all_items(db_manager: &DatabaseManager) -> Result<Vec<Item>, SqlxError> {
    info!("{:<12} --> all items", "Query");
    db_manager
        .with_connection(|conn| {
            Box::pin(async move {
                sqlx::query_as::<_, Item>(queries::GET_ALL_ITEMS)
                    .fetch_all(&mut *conn)
                    .await
            })
        })
        .await
}

/// All auctions
pub async fn get_all_auctions(db_manager: &DatabaseManager) -> Result<Vec<Auction>, SqlxError> {
    info!("{:<12} --> all auctions", "Query");
    db_manager
        .with_connection(|conn| {
            Box::pin(async move {
                sqlx::query_as::<_, Auction>(queries::GET_ALL_AUCTIONS)
                    .fetch_all(&mut *conn)
                    .await
            })
        })
        .await
}

/// All winners
pub async fn get_all_winners(db_manager: &DatabaseManager) -> Result<Vec<Winner>, SqlxError> {
    info!("{:<12} --> all winners", "Query");
    db_manager
        .with_connection(|conn| {
            Box::pin(async move {
                sqlx::query_as::<_, Winner>(queries::GET_ALL_WINNERS)
                    .fetch_all(&mut *conn)
                    .await
            })
        })
        .await
}

// endregion: --- Query Handlers
