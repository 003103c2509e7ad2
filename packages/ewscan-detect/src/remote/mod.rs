mod client;

pub use client::{RemoteEngine, DEFAULT_API_BASE};
