//! Puzzle definition files: picture registry and tile lines
//!
//! ```text
//! Crazy Planes
//! Pictures: Red, Blue, Green, Yellow
//!
//! 1 Red H Blue T Green T Yellow H
//! 2 Blue H Red T Yellow T Green H
//! ...
//! ```
//!
//! Everything before the picture header is free text; the first such line
//! is kept as the title. Tile lines start at the first line beginning with
//! `1`. Each tile line has a label followed by four picture/tag pairs in
//! bottom, right, top, left order.

use std::collections::HashMap;
use std::path::Path;

use crate::io::configuration::{
    EDGES_PER_TILE, FIRST_TILE_MARKER, PICTURE_HEADER_MARKER, TILE_COUNT,
};
use crate::io::error::{AlgorithmError, Result, WithContext, file_error};
use crate::spatial::edge::{Edge, Polarity};
use crate::spatial::tiles::Tile;

/// Bidirectional mapping between picture names and dense integer ids
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PictureRegistry {
    ids: HashMap<String, usize>,
    names: Vec<String>,
}

impl PictureRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a name and return its id
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::DuplicatePicture`] if the name is already
    /// registered
    pub fn register(&mut self, name: &str) -> Result<usize> {
        if self.ids.contains_key(name) {
            return Err(AlgorithmError::DuplicatePicture {
                name: name.to_string(),
                line: 0,
            });
        }
        let id = self.names.len();
        self.ids.insert(name.to_string(), id);
        self.names.push(name.to_string());
        Ok(id)
    }

    /// Id registered for a name
    pub fn id(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    /// Name registered for an id
    pub fn name(&self, id: usize) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Names in id order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of registered pictures
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no picture is registered
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// A parsed puzzle: optional title, picture names and nine tiles
#[derive(Clone, Debug)]
pub struct PuzzleDefinition {
    /// First free-text line before the picture header
    pub title: Option<String>,
    /// Picture names used by the tiles
    pub registry: PictureRegistry,
    /// Tiles in file order, unrotated
    pub tiles: Vec<Tile>,
}

impl PuzzleDefinition {
    /// Read and parse a puzzle file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is malformed
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(file_error(path, "read puzzle"))?;
        Self::parse(&text)
    }

    /// Parse puzzle text
    ///
    /// # Errors
    ///
    /// Returns an error if a section is missing, a tile line is malformed,
    /// or the file does not hold exactly nine tiles
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines().enumerate().map(|(index, line)| (index + 1, line));

        let mut title = None;
        let (header_line, header) = loop {
            let Some((number, line)) = lines.next() else {
                return Err(AlgorithmError::MissingSection {
                    section: "picture header",
                });
            };
            if line.to_lowercase().contains(PICTURE_HEADER_MARKER) {
                break (number, line);
            }
            if title.is_none() && !line.trim().is_empty() {
                title = Some(line.trim().to_string());
            }
        };

        let registry = parse_registry(header).with_line(header_line)?;

        let mut tiles = Vec::with_capacity(TILE_COUNT);
        let mut in_tiles = false;
        for (number, line) in lines {
            in_tiles |= line.starts_with(FIRST_TILE_MARKER);
            if !in_tiles || line.trim().is_empty() {
                continue;
            }
            tiles.push(parse_tile(line, &registry).with_line(number)?);
        }

        if tiles.is_empty() {
            return Err(AlgorithmError::MissingSection { section: "tile" });
        }
        if tiles.len() != TILE_COUNT {
            return Err(AlgorithmError::TileCount {
                expected: TILE_COUNT,
                found: tiles.len(),
            });
        }

        Ok(Self {
            title,
            registry,
            tiles,
        })
    }
}

/// Build the registry from the picture header, skipping its label
fn parse_registry(header: &str) -> Result<PictureRegistry> {
    let mut registry = PictureRegistry::new();
    let names = header
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .skip(1);
    for name in names {
        registry.register(name)?;
    }

    if registry.is_empty() {
        return Err(AlgorithmError::MissingSection {
            section: "picture name",
        });
    }
    Ok(registry)
}

/// Parse one tile line; line numbers are filled in by the caller
fn parse_tile(line: &str, registry: &PictureRegistry) -> Result<Tile> {
    let mut tokens = line.split_whitespace().skip(1);
    let mut edges = [Edge::head(0); EDGES_PER_TILE];

    for edge in &mut edges {
        let name = tokens.next().ok_or(AlgorithmError::MissingField {
            field: "picture name",
            line: 0,
        })?;
        let tag = tokens.next().ok_or(AlgorithmError::MissingField {
            field: "head/tail tag",
            line: 0,
        })?;

        let picture = registry.id(name).ok_or_else(|| AlgorithmError::UnknownPicture {
            name: name.to_string(),
            line: 0,
        })?;
        let polarity = Polarity::from_tag(tag).ok_or_else(|| AlgorithmError::InvalidPolarity {
            token: tag.to_string(),
            line: 0,
        })?;

        *edge = Edge::new(picture, polarity);
    }

    Ok(Tile::new(edges))
}
