/// Create user
pub const INSERT_USER: &str = r#"
    INSERT INTO users (user_id, name, email, password, role)
    VALUES (nextval('seq_users'), $1, $2, $3, $4)
"#;

/// Create item; the end time string is converted by the database
pub const INSERT_ITEM: &str = r#"
    INSERT INTO items (item_id, seller_id, name, description, starting_price, auction_end_time)
    VALUES (nextval('seq_items'), $1, $2, $3, $4, TO_TIMESTAMP($5, 'YYYY-MM-DD HH24:MI:SS')::timestamp)
"#;

/// Place bid
pub const CALL_ADD_BID: &str = "CALL add_bid($1, $2, $3)";
