//! Shared types for the poster site.
//!
//! Holds everything that does not touch the DOM: the selected-view enum and
//! the static page content, so both can be checked on the host.

pub mod enums;
pub mod poster;
