//! Map parsing functionality for converting raw board layouts into structured data.

use glam::UVec2;

use crate::error::ParseError;
use crate::systems::components::Ghost;

/// An enum representing the different types of tiles on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapTile {
    /// An empty tile, neither wall nor pellet.
    Empty,
    /// A wall tile.
    Wall,
    /// Open floor carrying a pellet.
    Pellet,
    /// The player's starting position.
    PlayerStart,
    /// A ghost's starting position.
    GhostStart(Ghost),
}

/// Represents the parsed data from a raw board layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMap {
    /// The board size, in tiles (columns, rows).
    pub size: UVec2,
    /// The parsed tiles, row-major.
    pub tiles: Vec<MapTile>,
    /// The player's starting tile.
    pub player_start: UVec2,
}

impl ParsedMap {
    /// Returns the tile at `(column, row)`, if it is on the board.
    pub fn tile(&self, column: u32, row: u32) -> Option<MapTile> {
        if column >= self.size.x || row >= self.size.y {
            return None;
        }
        self.tiles.get((row * self.size.x + column) as usize).copied()
    }

    /// Iterates over every tile with its `(column, row)` coordinate, row by row.
    pub fn iter_tiles(&self) -> impl Iterator<Item = (UVec2, MapTile)> + '_ {
        let width = self.size.x;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, tile)| (UVec2::new(i as u32 % width, i as u32 / width), *tile))
    }
}

/// Parser for converting raw board layouts into structured map data.
pub struct MapTileParser;

impl MapTileParser {
    /// Parses a single character into a map tile.
    ///
    /// # Returns
    ///
    /// The parsed map tile, or `None` if the character has no meaning on the board.
    pub fn parse_character(c: char) -> Option<MapTile> {
        match c {
            'X' => Some(MapTile::Wall),
            ' ' => Some(MapTile::Pellet),
            'O' => Some(MapTile::Empty),
            'P' => Some(MapTile::PlayerStart),
            _ => Ghost::from_symbol(c).map(MapTile::GhostStart),
        }
    }

    /// Parses a raw board layout into structured map data.
    ///
    /// Parsing is pure: the same rows always produce the same map.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is empty, rows differ in width, a character is unknown,
    /// or there isn't exactly one player spawn.
    pub fn parse_board(raw_board: &[&str]) -> Result<ParsedMap, ParseError> {
        let width = raw_board.first().ok_or(ParseError::EmptyLayout)?.chars().count();
        if width == 0 {
            return Err(ParseError::EmptyLayout);
        }

        let mut tiles = Vec::with_capacity(width * raw_board.len());
        let mut player_start: Option<UVec2> = None;

        for (row, line) in raw_board.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(ParseError::InconsistentRowWidth {
                    row,
                    expected: width,
                    found,
                });
            }

            for (column, character) in line.chars().enumerate() {
                let tile = Self::parse_character(character).ok_or(ParseError::UnknownCharacter {
                    character,
                    row,
                    column,
                })?;

                if tile == MapTile::PlayerStart {
                    let position = UVec2::new(column as u32, row as u32);
                    if let Some(first) = player_start {
                        return Err(ParseError::DuplicatePlayer { first, second: position });
                    }
                    player_start = Some(position);
                }

                tiles.push(tile);
            }
        }

        Ok(ParsedMap {
            size: UVec2::new(width as u32, raw_board.len() as u32),
            tiles,
            player_start: player_start.ok_or(ParseError::MissingPlayer)?,
        })
    }
}
