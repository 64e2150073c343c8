//! Gamification Networking - request pipeline, resource client and endpoints

pub mod api;
pub mod auth;
pub mod config;
pub mod fixtures;
pub mod http;

pub use api::{ApiManager, RequestOptions, Resource};
pub use auth::Authenticator;
pub use config::{SdkConfig, DEFAULT_API_VERSION};
pub use fixtures::FixtureBundle;
pub use http::{Fetcher, NetworkManager, RequestBuilder, ResourceClient};
