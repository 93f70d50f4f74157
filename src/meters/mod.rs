//! Nature meter, impact tiers, build observers, and the global block supply.
//!
//! Every successful build costs the acting player `ImpactLevel::impact()`
//! points of nature; every removal refunds the same amount. The block
//! supply is global across both players.

mod counters;
mod impact;
mod nature;
mod observer;

pub use counters::BuildCounters;
pub use impact::ImpactLevel;
pub use nature::{MeterKind, MeterStrategy, NatureMeter};
pub use observer::{BuildObserver, MeterManager};
