//! rotbar
//!
//! Display and toggle screen rotation (horizontal/vertical) from a status
//! bar, delegating all query and rotation work to xrandr.

pub mod backends;
pub mod config;
pub mod error;
pub mod rotation;
pub mod widget;
