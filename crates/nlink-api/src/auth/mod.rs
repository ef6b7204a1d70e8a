pub mod client;
pub mod routes;

pub use client::{NotionOAuthClient, authorize_url, create_oauth_client, exchange_code};
pub use routes::routes;
