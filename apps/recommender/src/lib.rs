pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod logging;
pub mod models;
pub mod recommend;
pub mod routes;
pub mod state;
pub mod store;
