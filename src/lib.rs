//! Maze chase simulation library crate.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg_attr(coverage_nightly, coverage(off))]
pub mod formatter;

pub mod constants;
pub mod error;
pub mod events;
pub mod game;
pub mod input;
pub mod map;
pub mod systems;
