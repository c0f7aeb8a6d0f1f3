//! Core session types: identifiers, RNG, and the error taxonomy.
//!
//! Everything in here is independent of the game rules proper. The RNG hosts
//! the single sampling primitive (`draw`) that dealing, shuffling, and seat
//! randomization all share.

pub mod error;
pub mod ids;
pub mod rng;

pub use error::GameError;
pub use ids::{generate_slug, PlayerId};
pub use rng::GameRng;
