//! Networking modules for the identity provider and the summarization webhook.
//!
//! SYSTEM CONTEXT
//! ==============
//! `identity` defines the provider boundary, `nhost` implements it against
//! Nhost Auth, `webhook` posts video URLs for summarization, and `types`
//! defines the shared wire schema.

pub mod identity;
pub mod nhost;
pub mod types;
pub mod webhook;
