//! Gosper curve (flowsnake) generation for pen-plotter and animation work.
//!
//! This library is the deterministic core behind the drawings: a small
//! L-system rewriter ([`crate::l_system::LSystem`]) paired with a turtle
//! ([`crate::turtle::Turtle`]) that converts the expanded symbol string
//! into an ordered list of 2D line segments. What happens to those
//! segments afterwards (SVG, nannou, animation scenes) is entirely up to
//! the renderer; see `demos/gosper_svg.rs` for one way to consume them.
//!
//! ```rust
//! use flowsnake::prelude::*;
//!
//! let gosper = LSystem::default();
//! let pattern = gosper.expand(4).unwrap();
//! let segments = Turtle::new()
//!     .walk_pattern(&pattern, gosper.angle)
//!     .into_segments();
//! assert_eq!(segments.len(), 343);
//! ```

/// Extensions/Traits for geo_types geometry. Also includes the vector
/// rotation helper the turtle steers with.
pub mod geo_types;

/// Turtle graphics implementation, including integration with L-systems
pub mod turtle;

/// L-system implementation, with expansion/recursion
pub mod l_system;

/// Error types for the library
pub mod errors;

/// Make your life easy! Just import prelude::* and ignore all the warnings!
pub mod prelude {

    pub use crate::errors::LSystemError;
    pub use crate::geo_types::{degrees, rotate_vector, PointDistance};
    pub use crate::l_system::LSystem;
    pub use crate::turtle::{Turtle, TurtleTrait};
}
