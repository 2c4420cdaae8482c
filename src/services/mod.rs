pub mod activity_service;
pub mod auth_service;
pub mod company_service;
pub mod group_service;
pub mod http;
pub mod product_service;
pub mod user_service;
