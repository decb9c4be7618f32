pub mod metadata_service;
