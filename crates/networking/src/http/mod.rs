//! Request construction, transport, classification and the resource client

pub(crate) mod classify;
mod client;
mod network;
mod request;
pub(crate) mod transport;

pub use classify::classify;
pub use client::{Fetcher, ResourceClient};
pub use network::{decode_json, NetworkManager};
pub use request::{HttpMethod, HttpRequest, RequestBuilder};
pub use transport::{HttpResponse, ReqwestTransport, Transport, TransportError};
