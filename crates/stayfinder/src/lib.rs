//! Explainable hotel recommendations: a catalog of hotels, a preference
//! quiz, and a deterministic scorer that turns the two into a ranked,
//! reason-annotated shortlist.
//!
//! The crate is split along the request path: [`catalog`] owns the hotel
//! inventory and its importers, [`recommend`] scores and ranks it against a
//! [`recommend::PreferenceQuery`], [`profile`] persists quiz answers and
//! wishlists per user, and [`auth`] issues the session tokens profile
//! routes require. [`router`] wires all of it into an HTTP API, while
//! [`config`], [`telemetry`], and [`error`] carry the service plumbing.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod profile;
pub mod recommend;
pub mod router;
pub mod telemetry;
