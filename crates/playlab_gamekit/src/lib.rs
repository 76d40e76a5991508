//! Playlab game kit - the shared contract for turn-based game engines.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] trait, one implementation per game
//! - **Registry**: [`EngineRegistry`] maps game ids to type-erased engines
//! - **Random**: [`SeededRandom`], a replayable Mulberry32 stream
//!
//! # Example
//!
//! ```
//! use playlab_gamekit::SeededRandom;
//!
//! let mut a = SeededRandom::new(7);
//! let mut b = SeededRandom::from_state(a.state());
//! assert_eq!(a.random(), b.random());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod registry;
mod rng;

pub use engine::{GameConfig, GameEngine, PlayerId};
pub use error::{EmptyInputError, EngineError, InvalidActionError, SetupError, UnknownGameError};
pub use registry::{EngineRegistry, ErasedEngine};
pub use rng::SeededRandom;
