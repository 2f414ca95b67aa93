/// All users, password excluded
pub const GET_ALL_USERS: &str = "SELECT user_id, name, email, role FROM users";

/// All items
pub const GET_ALL_ITEMS: &str =
    "SELECT item_id, name, description, starting_price, auction_end_time FROM items";

/// All auctions
pub const GET_ALL_AUCTIONS: &str = "SELECT auction_id, item_id, status, highest_bid FROM auctions";

/// Winners with the winning user's name
pub const GET_ALL_WINNERS: &str = r#"
    SELECT w.winner_id, w.auction_id, w.winner_user_id, w.winning_bid, u.name AS winner_name
    FROM winners w
    JOIN users u ON w.winner_user_id = u.user_id
"#;
