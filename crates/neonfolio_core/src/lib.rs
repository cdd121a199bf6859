//! Pure logic behind the neonfolio resume page: size classes, clip shapes,
//! waveforms, palettes, scroll targets and page state.
//! No renderer dependency, easy to test.

pub mod animation;
pub mod config;
pub mod content;
pub mod error;
pub mod layout;
pub mod links;
pub mod scroll;
pub mod shapes;
pub mod size_class;
pub mod theme;

pub use error::NeonError;
