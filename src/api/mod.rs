//! Typed network-result protocol.
//!
//! ```text
//! Repository ──→ ApiClient ──→ Transport ──→ classify ──→ Outcome<Payload>
//! ```

mod classifier;
mod client;
pub mod endpoints;
mod outcome;
mod transport;

pub use classifier::{classify, classify_result};
pub use client::ApiClient;
pub use outcome::{FieldErrors, Outcome, Payload};
pub use transport::{
    HttpMethod, HttpRequest, RawResponse, ReqwestTransport, TimeoutConfig, Transport,
    TransportError,
};
