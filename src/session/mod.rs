//! Game session controller and the ports it talks through

mod controller;
mod ports;
mod random;

pub use controller::{GameSession, RoundSummary, SessionStats};
pub use ports::{GuessSource, Renderer, ReplaySource, WordSource};
pub use random::RandomWordSource;
