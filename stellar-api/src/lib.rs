pub mod client;
pub mod lookup;
pub mod model;

pub use client::{ProfileClient, ProfileClientConfig};
pub use lookup::{Lookup, RawResponse, ResponseBody};
