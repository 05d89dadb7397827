//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::UVec2;

/// The fixed period between two simulation ticks.
pub const TICK_PERIOD: Duration = Duration::from_millis(50);

/// The size of each tile, in pixels.
pub const TILE_SIZE: i32 = 32;
/// The distance an entity travels per accepted step, in pixels.
///
/// Must not exceed the thickness of a wall (one tile), otherwise entities could tunnel through walls.
pub const STEP: i32 = TILE_SIZE / 4;
/// The size of the default game board, in tiles.
pub const BOARD_CELL_SIZE: UVec2 = UVec2::new(19, 21);
/// The size of the default game board, in pixels.
pub const BOARD_PIXEL_SIZE: UVec2 = UVec2::new(
    BOARD_CELL_SIZE.x * TILE_SIZE as u32,
    BOARD_CELL_SIZE.y * TILE_SIZE as u32,
);

/// The edge length of a pellet hitbox, in pixels.
pub const PELLET_SIZE: i32 = 4;
/// The offset of a pellet hitbox from its tile origin, centering it within the tile.
pub const PELLET_OFFSET: i32 = (TILE_SIZE - PELLET_SIZE) / 2;
/// Points awarded for each pellet consumed.
pub const PELLET_SCORE: u32 = 10;
/// Lives the player starts every session with.
pub const STARTING_LIVES: u8 = 3;

/// The raw layout of the game board, as rows of characters.
///
/// `X` is a wall, ` ` is floor carrying a pellet, `O` is empty filler,
/// `P` is the player spawn and `r`, `p`, `b`, `o` are ghost spawns.
pub const RAW_BOARD: [&str; BOARD_CELL_SIZE.y as usize] = [
    "XXXXXXXXXXXXXXXXXXX",
    "X        X        X",
    "X XX XXX X XXX XX X",
    "X X               X",
    "X XX X XXXXX X XX X",
    "X    X       X    X",
    "XXXX XXXX XXXX XXXX",
    "XOOX X       X XOOX",
    "XXXX X X   X X XXXX",
    "X   r    b    o   X",
    "XXXX X XXXXX X XXXX",
    "XOOX X       X XOOX",
    "XXXX X XXXXX X XXXX",
    "X X             X X",
    "X XX XXX X XXX XX X",
    "X  X     P     X  X",
    "XX X X XXXXX X X XX",
    "X    X   X   X    X",
    "X XXXXXX X XXXXXX X",
    "X                 X",
    "XXXXXXXXXXXXXXXXXXX",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_period() {
        assert_eq!(TICK_PERIOD.as_millis(), 50);
    }

    #[test]
    fn test_step_does_not_exceed_wall_thickness() {
        assert!(STEP > 0);
        assert!(STEP <= TILE_SIZE);
        assert_eq!(STEP, 8);
    }

    #[test]
    fn test_pellet_is_centered() {
        assert_eq!(PELLET_OFFSET, 14);
        assert_eq!(PELLET_OFFSET * 2 + PELLET_SIZE, TILE_SIZE);
    }

    #[test]
    fn test_board_pixel_size() {
        assert_eq!(BOARD_PIXEL_SIZE.x, 608); // 19 * 32
        assert_eq!(BOARD_PIXEL_SIZE.y, 672); // 21 * 32
    }

    #[test]
    fn test_raw_board_dimensions() {
        assert_eq!(RAW_BOARD.len(), BOARD_CELL_SIZE.y as usize);
        for row in RAW_BOARD.iter() {
            assert_eq!(row.len(), BOARD_CELL_SIZE.x as usize);
        }
    }

    #[test]
    fn test_raw_board_boundaries() {
        assert!(RAW_BOARD[0].chars().all(|c| c == 'X'));
        assert!(RAW_BOARD[RAW_BOARD.len() - 1].chars().all(|c| c == 'X'));

        for row in RAW_BOARD.iter() {
            assert!(row.starts_with('X'));
            assert!(row.ends_with('X'));
        }
    }

    #[test]
    fn test_raw_board_has_single_player_spawn() {
        let spawns: usize = RAW_BOARD.iter().map(|row| row.matches('P').count()).sum();
        assert_eq!(spawns, 1);
    }

    #[test]
    fn test_raw_board_ghost_spawns() {
        let ghosts: usize = RAW_BOARD
            .iter()
            .map(|row| row.chars().filter(|c| matches!(c, 'r' | 'p' | 'b' | 'o')).count())
            .sum();
        assert_eq!(ghosts, 3);
    }
}
