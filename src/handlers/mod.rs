pub mod health_handlers;
pub mod metadata_handlers;
pub mod site_handlers;
