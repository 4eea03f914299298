pub mod aggregation_service;
pub mod registration_service;
