//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `dashboard`) so individual components can
//! depend on small focused models. Controllers (`session`, `dashboard`) write
//! through [`cell::StateCell`] so the same logic drives a Leptos signal in the
//! browser and a plain mutex-backed cell in tests.

pub mod auth;
pub mod cell;
pub mod dashboard;
pub mod session;

#[cfg(test)]
pub(crate) mod fake_identity;
