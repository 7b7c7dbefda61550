//! # btpair-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `PairingBackend` — the four backend endpoints (driven/outbound)
//!   - `PageRenderer` — draws a `PageView` onto some surface
//! - Define the **driving/inbound** use-case:
//!   - `PageController` — page load, selection changes, form edits, submit
//! - Sequence asynchronous work without knowing *how* HTTP or rendering work
//!
//! ## Dependency rule
//! Depends on `btpair-domain` only (plus `tokio` macros for joining futures).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
