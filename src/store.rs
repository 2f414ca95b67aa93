// region:    --- Imports
use crate::auction::model::{Auction, Item, User, Winner};
use crate::command::commands::{self, CreateItemCommand, CreateUserCommand, PlaceBidCommand};
use crate::database::DatabaseManager;
use crate::error::AppResult;
use crate::query;
use async_trait::async_trait;

// endregion: --- Imports

// region:    --- Auction Store Trait
/// Data operations behind the HTTP routes
#[async_trait]
pub trait AuctionStore: Send + Sync {
    async fn create_user(&self, cmd: CreateUserCommand) -> AppResult<()>;
    async fn list_users(&self) -> AppResult<Vec<User>>;
    async fn create_item(&self, cmd: CreateItemCommand) -> AppResult<()>;
    async fn list_items(&self) -> AppResult<Vec<Item>>;
    async fn list_auctions(&self) -> AppResult<Vec<Auction>>;
    async fn place_bid(&self, cmd: PlaceBidCommand) -> AppResult<()>;
    async fn list_winners(&self) -> AppResult<Vec<Winner>>;
}
// endregion: --- Auction Store Trait

// region:    --- Postgres Store
pub struct PostgresAuctionStore {
    db_manager: DatabaseManager,
}

impl PostgresAuctionStore {
    pub fn new(db_manager: DatabaseManager) -> Self {
        Self { db_manager }
    }
}

#[async_trait]
impl AuctionStore for PostgresAuctionStore {
    async fn create_user(&self, cmd: CreateUserCommand) -> AppResult<()> {
        commands::create_user(&self.db_manager, cmd).await
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(query::handlers::get_all_users(&self.db_manager).await?)
    }

    async fn create_item(&self, cmd: CreateItemCommand) -> AppResult<()> {
        commands::create_item(&self.db_manager, cmd).await
    }

    async fn list_items(&self) -> AppResult<Vec<Item>> {
        Ok(query::handlers::get_all_items(&self.db_manager).await?)
    }

    async fn list_auctions(&self) -> AppResult<Vec<Auction>> {
        Ok(query::handlers::get_all_auctions(&self.db_manager).await?)
    }

    async fn place_bid(&self, cmd: PlaceBidCommand) -> AppResult<()> {
        commands::place_bid(&self.db_manager, cmd).await
    }

    async fn list_winners(&self) -> AppResult<Vec<Winner>> {
        Ok(query::handlers::get_all_winners(&self.db_manager).await?)
    }
}
// endregion: --- Postgres Store
