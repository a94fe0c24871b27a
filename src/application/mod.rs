// Application layer - Use case services
pub mod chart_service;
pub mod dashboard_service;
pub mod dataset_repository;
pub mod metrics_service;
