//! Adapters implementing the port traits.

pub mod dry_run;
pub mod live;
pub mod recording;
