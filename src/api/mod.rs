//! Transport: HTTP calls to the configuration service and their failures.
pub mod client;
pub mod error;
pub mod value;

pub use client::{ConfigApi, HttpTransport, API_KEY_HEADER};
pub use error::{Operation, RequestError};
pub use value::parse_value;
