//! The Entity-Component-System (ECS) module.
//!
//! This module contains the components, resources and per-tick systems of the simulation.

pub mod collision;
pub mod components;
pub mod ghost;
pub mod item;
pub mod movement;
pub mod player;
pub mod state;

pub use self::collision::*;
pub use self::components::*;
pub use self::ghost::*;
pub use self::item::*;
pub use self::movement::*;
pub use self::player::*;
pub use self::state::*;
