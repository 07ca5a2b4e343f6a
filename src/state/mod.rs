pub mod clock;

pub use clock::TurnClock;
