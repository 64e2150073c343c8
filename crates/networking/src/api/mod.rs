//! High-level gamification endpoints
//!
//! `ApiManager` knows the resource paths, assembles requests and picks
//! between the live client and local fixtures for each call.

mod manager;
mod options;
mod resource;

pub use manager::*;
pub use options::*;
pub use resource::*;
