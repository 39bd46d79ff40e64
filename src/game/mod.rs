//! Game rules
//!
//! [`GuessEngine`] is the entry point. The other components hold one concern
//! each and are exposed for front ends that want to show their state:
//! - `WordBank`: picks unplayed words and records completed ones
//! - `LivesTracker`: lives with a once-a-day refill
//! - `ProgressStore`: lifetime win/loss counters
//! - `Round`: the grid, reveals and answer slots of the current word

mod ads;
mod clock;
mod config;
mod engine;
mod error;
mod events;
mod lives;
mod progress;
mod round;
mod word_bank;

pub use ads::{AdRequest, AdSink, LoggingAds, NoAds};
pub use clock::{Clock, FixedClock, SystemClock, date_key};
pub use config::{ConfigError, DEFAULT_INTERSTITIAL_EVERY, DEFAULT_MAX_LIVES, GameConfig};
pub use engine::{Events, GuessEngine};
pub use error::GameError;
pub use events::{GameEvent, LossCause};
pub use lives::LivesTracker;
pub use progress::{ProgressStore, win_rate};
pub use round::{CellView, GuessBuffer, RevealState, Round, RoundOutcome};
pub use word_bank::WordBank;
