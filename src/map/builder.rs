//! Turns a parsed layout into the hitboxes the simulation runs on.

use bevy_ecs::resource::Resource;
use bevy_ecs::world::World;
use glam::{IVec2, UVec2};
use tracing::debug;

use crate::constants::{PELLET_OFFSET, PELLET_SIZE, TILE_SIZE};
use crate::error::ParseError;
use crate::map::parser::{MapTile, MapTileParser};
use crate::systems::components::{
    Body, EntityType, Ghost, GhostBundle, Hitbox, Pellet, PelletBundle, PlayerBundle, PlayerControlled, Wall, WallBundle,
};

/// Static maze geometry together with the spawn placements of every entity.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct Map {
    /// The board size, in tiles.
    pub size: UVec2,
    pub walls: Vec<Hitbox>,
    pub pellets: Vec<Hitbox>,
    pub ghosts: Vec<(Ghost, Hitbox)>,
    pub player: Hitbox,
}

impl Map {
    /// Parses a raw board layout into walls, pellets and spawn points.
    ///
    /// Placements keep layout order (row by row), so identical input yields identical maps.
    pub fn new(raw_board: &[&str]) -> Result<Map, ParseError> {
        let parsed = MapTileParser::parse_board(raw_board)?;

        let mut walls = Vec::new();
        let mut pellets = Vec::new();
        let mut ghosts = Vec::new();

        for (cell, tile) in parsed.iter_tiles() {
            match tile {
                MapTile::Wall => walls.push(tile_hitbox(cell)),
                MapTile::Pellet => pellets.push(pellet_hitbox(cell)),
                MapTile::GhostStart(ghost) => ghosts.push((ghost, tile_hitbox(cell))),
                MapTile::PlayerStart | MapTile::Empty => {}
            }
        }

        Ok(Map {
            size: parsed.size,
            walls,
            pellets,
            ghosts,
            player: tile_hitbox(parsed.player_start),
        })
    }

    /// Spawns a fresh entity for every wall, pellet, ghost and the player.
    pub fn spawn_entities(&self, world: &mut World) {
        debug!(
            walls = self.walls.len(),
            pellets = self.pellets.len(),
            ghosts = self.ghosts.len(),
            "Spawning map entities"
        );

        world.spawn_batch(self.walls.iter().map(|&hitbox| WallBundle {
            wall: Wall,
            hitbox,
            entity_type: EntityType::Wall,
        }));
        world.spawn_batch(self.pellets.iter().map(|&hitbox| PelletBundle {
            pellet: Pellet,
            hitbox,
            entity_type: EntityType::Pellet,
        }));
        world.spawn_batch(self.ghosts.iter().map(|&(ghost, hitbox)| GhostBundle {
            ghost,
            body: Body::new(hitbox),
            entity_type: EntityType::Ghost,
        }));
        world.spawn(PlayerBundle {
            player: PlayerControlled,
            body: Body::new(self.player),
            entity_type: EntityType::Player,
        });
    }
}

/// Converts a tile coordinate to its pixel-space origin.
pub fn tile_to_pixel(cell: UVec2) -> IVec2 {
    cell.as_ivec2() * TILE_SIZE
}

/// Converts a pixel position to the tile it is mostly in.
pub fn pixel_to_tile(position: IVec2) -> IVec2 {
    (position + IVec2::splat(TILE_SIZE / 2)).div_euclid(IVec2::splat(TILE_SIZE))
}

fn tile_hitbox(cell: UVec2) -> Hitbox {
    Hitbox::new(tile_to_pixel(cell), IVec2::splat(TILE_SIZE))
}

fn pellet_hitbox(cell: UVec2) -> Hitbox {
    Hitbox::new(tile_to_pixel(cell) + IVec2::splat(PELLET_OFFSET), IVec2::splat(PELLET_SIZE))
}
