pub mod block;
pub mod profile;
pub mod time;

pub use block::{normalize_occupant, InvalidTimeRange, TimeBlock, UNBOOKED_SENTINEL};
pub use profile::{ExperienceLevel, Gender, Preferences, UserProfile};
pub use time::{ClockTime, ParseClockTimeError};
