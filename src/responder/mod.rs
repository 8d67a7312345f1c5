//! HTTP status pages, one per protocol family.
//!
//! Every request runs a fresh probe and renders its outcome. Nothing is
//! cached between requests.

pub mod constants;
pub mod impls;
pub mod types;
