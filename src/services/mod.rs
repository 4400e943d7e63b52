pub mod aggregation_service;
pub mod analysis_service;
pub mod correlation_service;
pub mod forecasting_service;
pub mod sentiment_service;
pub mod tagging_service;
