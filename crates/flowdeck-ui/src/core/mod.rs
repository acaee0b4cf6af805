//! Core UI infrastructure: theming.

pub mod theme;
