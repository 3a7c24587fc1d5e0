//! Background Tasks Module
//!
//! Tasks that run alongside the REPL for the lifetime of the session.
//!
//! # Tasks
//! - TTL Reaper: removes expired cache entries once per TTL period

mod reaper;

pub use reaper::{spawn_reaper, ReaperHandle};
