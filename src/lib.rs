pub mod app;
pub mod auction;
pub mod command;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod query;
pub mod store;
