//! Full-screen terminal front end for Yahtzee.
//!
//! Draws the dice, the action button, and the score sheet with ratatui
//! and turns crossterm key and mouse input into engine events.

pub mod keys;
pub mod layout;
pub mod terminal;
pub mod view;

pub use terminal::TerminalAdapter;
