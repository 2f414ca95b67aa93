use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

/// Wire format of `auction_end_time`, both directions.
pub const AUCTION_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn serialize_auction_time<S>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&time.format(AUCTION_TIME_FORMAT))
}

/// User projection, password is never selected
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Item model
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Item {
    pub item_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub starting_price: f64,
    #[serde(serialize_with = "serialize_auction_time")]
    pub auction_end_time: NaiveDateTime,
}

/// Auction model
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Auction {
    pub auction_id: i64,
    pub item_id: i64,
    pub status: String,
    pub highest_bid: Option<f64>,
}

/// Winner joined with the winning user's name
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Winner {
    pub winner_id: i64,
    pub auction_id: i64,
    pub winner_user_id: i64,
    pub winning_bid: f64,
    pub winner_name: String,
}
