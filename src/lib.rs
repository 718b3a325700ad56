//! snips - a three-pane terminal snippet manager
//!
//! Library crate exposing the components used by the binary.
//!
//! Tests live close to the modules they exercise as unit tests.

pub mod config;
pub mod editor;
pub mod error;
pub mod keymap;
pub mod snippet;

pub mod ui;
