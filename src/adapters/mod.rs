// Adapters layer: concrete implementations behind the domain ports and the HTTP surface.

pub mod http;
pub mod memory;
