//! Daily word selection
//!
//! The provider plus the clock and randomness seams it is built on.

mod clock;
mod provider;
mod random;

pub use clock::{Clock, ManualClock, SystemClock, next_midnight};
pub use provider::{DAILY_WORD_KEY, DailyWordProvider, LEGACY_DATE_KEY, ProviderError};
pub use random::{CyclingIndex, FixedIndex, RandomIndex, ThreadRandom};
