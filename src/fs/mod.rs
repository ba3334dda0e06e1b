//! # Filesystem Collaborators
//!
//! Everything that touches the disk or is derived from what's on it:
//!
//! - [`snapshot`]: capped, sorted directory listings
//! - [`order`]: directories-first natural comparator
//! - [`classify`]: pure (name, kind, exec) → color/icon tables
//! - [`preview`]: directory/text/binary preview building
//!
//! Nothing here knows about the terminal; the `tui` module renders what
//! these produce.

pub mod classify;
pub mod order;
pub mod preview;
pub mod snapshot;
