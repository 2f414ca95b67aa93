pub mod commands;
pub mod statements;
