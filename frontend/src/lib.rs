//! Neonfolio frontend library: themed widgets, the resume page, and the
//! host glue they run on.

pub mod app;
pub mod config;
pub mod platform;
pub mod screens;
pub mod theme;
pub mod widgets;
