//! Clock abstraction, filesystem helpers and the stateless derivation services.

pub mod clock;
pub mod services;
pub mod utils;

pub use clock::{Clock, FixedClock, SystemClock};
