//! Film festival site: landing page, simulated film submission flow and the
//! file metadata API behind it.

pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod site;
pub mod submission;

pub use routes::routes::app;
