pub mod api;
pub mod auth;
pub mod config;
pub mod contact;
pub mod credentials;
pub mod error;
pub mod middleware;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use contact::ContactForm;
