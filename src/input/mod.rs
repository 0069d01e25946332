//! Keyboard input decoding.
//!
//! Translates raw key presses into domain commands; the terminal adapter
//! that produces the key presses lives with the other presenters.

pub mod keymap;
