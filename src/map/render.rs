//! Text rendering of a simulation snapshot, one character per tile.

use glam::IVec2;
use thousands::Separable;

use crate::game::Snapshot;
use crate::map::builder::pixel_to_tile;
use crate::map::direction::Direction;
use crate::systems::state::GameStage;

pub const GAME_OVER_MESSAGE: &str = "GAME OVER";
pub const RESTART_PROMPT: &str = "Press 'R' to Restart";

/// Draws snapshots as plain text frames.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl TextRenderer {
    /// Renders the board followed by the HUD line, and the game-over message when the session has ended.
    ///
    /// Moving entities are drawn on the tile they mostly occupy; later layers win
    /// (pellets, then walls, then ghosts, then the player).
    pub fn render(&self, snapshot: &Snapshot) -> String {
        let width = snapshot.size.x as usize;
        let height = snapshot.size.y as usize;
        let mut grid = vec![vec![' '; width]; height];

        let mut plot = |tile: IVec2, glyph: char| {
            if tile.x >= 0 && tile.y >= 0 && (tile.x as usize) < width && (tile.y as usize) < height {
                grid[tile.y as usize][tile.x as usize] = glyph;
            }
        };

        for pellet in &snapshot.pellets {
            plot(pixel_to_tile(*pellet), '.');
        }
        for wall in &snapshot.walls {
            plot(pixel_to_tile(*wall), '#');
        }
        for (ghost, position) in &snapshot.ghosts {
            plot(pixel_to_tile(*position), ghost.symbol());
        }
        plot(pixel_to_tile(snapshot.player), player_glyph(snapshot.facing));

        let mut frame = String::with_capacity((width + 1) * (height + 3));
        for row in grid {
            frame.extend(row);
            frame.push('\n');
        }

        frame.push_str(&format!("x{} Score: {}\n", snapshot.lives, snapshot.score.separate_with_commas()));

        if snapshot.stage == GameStage::GameOver {
            frame.push_str(GAME_OVER_MESSAGE);
            frame.push('\n');
            frame.push_str(RESTART_PROMPT);
            frame.push('\n');
        }

        frame
    }
}

fn player_glyph(facing: Option<Direction>) -> char {
    match facing {
        Some(Direction::Up) => 'v',
        Some(Direction::Down) => '^',
        Some(Direction::Left) => '>',
        Some(Direction::Right) | None => '<',
    }
}
