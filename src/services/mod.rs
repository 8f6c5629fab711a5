// Service exports
pub mod alerts;
pub mod index_cache;

pub use alerts::{AlertBroadcast, AlertDraft, DEFAULT_ALERT_MESSAGE};
pub use index_cache::IndexCache;
