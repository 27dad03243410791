// Service exports
pub mod persona;
pub mod upstream;

pub use persona::PersonaStore;
pub use upstream::{UpstreamClient, UpstreamError};
