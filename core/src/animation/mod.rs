//! Hero text animations, as tick-driven state machines.
//!
//! The browser side owns the timers; these types only answer "what does the
//! next tick change" and "how long until the next tick".

pub mod rotation;
pub mod typewriter;
