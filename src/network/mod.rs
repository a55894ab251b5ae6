//! Network helpers outside the chain RPC path.

pub mod proxy;

pub use proxy::resolve_proxy;
