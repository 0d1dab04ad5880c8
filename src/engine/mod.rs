mod random;
mod scheduler;

pub use random::{RandomSource, SeededRandom, choose, shuffle};
pub use scheduler::{Completed, DelayedSlot, Ticket};

#[cfg(test)]
pub(crate) use random::ScriptedRandom;
