//! HTTP API handlers for the gateway

pub mod contact;
pub mod health;
pub mod pages;
pub mod revalidate;

pub use contact::submit_contact;
pub use health::health_routes;
pub use pages::{
    blog_post, industry_detail, page_view, product_detail, service_detail, solution_detail,
};
pub use revalidate::revalidate;
