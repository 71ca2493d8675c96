pub mod auth;
pub mod config;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod ingest;
pub mod state;

#[cfg(test)]
pub mod testing;
