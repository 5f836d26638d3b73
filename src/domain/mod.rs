// Domain layer: records, request drafts and the storage port. No I/O here.

pub mod model;
pub mod ports;
pub mod seed;
