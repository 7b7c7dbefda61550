//! # btpair-domain
//!
//! Pure domain model for the btpair device-pairing page.
//!
//! ## Responsibilities
//! - Define the **device directory** (pairable devices keyed by address) and
//!   its wire formats
//! - Define the **security classification** of a device and the **field
//!   visibility** policy derived from it
//! - Define the **connect form** submitted to the backend
//! - Define the **submission lifecycle** state machine
//! - Hold the whole page as an explicit [`page::PageState`] updated by a
//!   single reducer, and project it into a [`view::PageView`] of named regions
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod device;
pub mod form;
pub mod page;
pub mod submission;
pub mod view;
pub mod visibility;
