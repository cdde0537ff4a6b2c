//! Relay selectors.
//!
//! - [`freestyle`] - fastest block-start lead-off, then the three fastest
//!   remaining swimmers
//! - [`medley`] - four-stroke assignment minimizing total time

pub mod freestyle;
pub mod medley;


pub use freestyle::select_freestyle;
pub use medley::{MedleySearchStats, MedleySelection, MedleySelector};
