//! rl-frame - Columnar in-memory table for Repolens
//!
//! Provides the `Frame` abstraction used throughout the pipeline: an
//! immutable-once-built table of named columns over a string row key,
//! with strict one-to-one joins, column selection/renaming, and CSV I/O.

pub mod csv_io;
pub mod error;
pub mod frame;
pub mod value;

pub use error::{FrameError, FrameResult};
pub use frame::{Frame, FrameBuilder};
pub use value::Value;
