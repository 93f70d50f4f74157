//! Player clocks and the tick source that drives them.

mod clock;
mod ticker;

pub use clock::PlayerClock;
pub use ticker::Ticker;
