//! Navigation domain.
//!
//! - [`screen::Screen`]: every view of the application
//! - [`group::NavigationGroup`]: the two mutually exclusive screen groups
//! - [`group::Tab`]: a bottom-tab entry inside a group

pub mod group;
pub mod screen;

pub use group::{NavigationGroup, Tab};
pub use screen::Screen;
