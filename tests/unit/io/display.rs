//! Tests for solution text rendering

#[cfg(test)]
mod tests {
    use scramblesquares::io::display::SolutionFormatter;
    use scramblesquares::io::puzzle::PictureRegistry;
    use scramblesquares::spatial::edge::Edge;
    use scramblesquares::spatial::grid::Arrangement;
    use scramblesquares::spatial::tiles::Tile;

    fn registry() -> PictureRegistry {
        let mut registry = PictureRegistry::new();
        registry.register("A").unwrap();
        registry.register("B").unwrap();
        registry
    }

    fn mixed_tile() -> Tile {
        Tile::new([Edge::head(0), Edge::tail(1), Edge::head(1), Edge::tail(0)])
    }

    // Tests labels use registry names and fall back to ids
    // Verified by always printing the id
    #[test]
    fn test_edge_label() {
        let registry = registry();
        let formatter = SolutionFormatter::new(&registry);

        assert_eq!(formatter.edge_label(Edge::head(1)), "B/H");
        assert_eq!(formatter.edge_label(Edge::tail(0)), "A/T");
        assert_eq!(formatter.edge_label(Edge::tail(5)), "#5/T");
    }

    // Tests a tile is described one side per line, bottom first
    // Verified by listing sides top first
    #[test]
    fn test_describe_tile() {
        let registry = registry();
        let formatter = SolutionFormatter::new(&registry);

        assert_eq!(
            formatter.describe_tile(&mixed_tile()),
            "bottom: A, H\nright: B, T\ntop: B, H\nleft: A, T\n"
        );
    }

    // Tests unregistered pictures are described by id, as in grid labels
    // Verified by printing a placeholder for unknown names
    #[test]
    fn test_describe_tile_unregistered_picture() {
        let registry = registry();
        let formatter = SolutionFormatter::new(&registry);
        let tile = Tile::new([Edge::head(5), Edge::tail(1), Edge::tail(5), Edge::head(0)]);

        let description = formatter.describe_tile(&tile);
        assert_eq!(description, "bottom: #5, H\nright: B, T\ntop: #5, T\nleft: A, H\n");
        assert!(description.contains(&formatter.edge_label(Edge::head(5)).replace('/', ", ")));
    }

    // Tests the listing reflects the current orientation
    // Verified by describing edges in storage order before rotation
    #[test]
    fn test_listing_rotated() {
        let registry = registry();
        let formatter = SolutionFormatter::new(&registry);
        let mut turned = mixed_tile();
        turned.rotate();

        let listing = formatter.listing(&[mixed_tile(), turned]);
        let blocks: Vec<&str> = listing.split("\n\n").collect();

        assert_eq!(blocks.len(), 2);
        assert!(blocks[1].starts_with("bottom: A, T\n"));
        assert!(blocks[1].contains("right: A, H"));
    }

    // Tests the grid has three text lines per row and rules between rows
    // Verified by dropping the separator rule
    #[test]
    fn test_grid_layout() {
        let registry = registry();
        let formatter = SolutionFormatter::new(&registry);
        let tiles = vec![Tile::new([Edge::head(0); 4]); 9];
        let arrangement = Arrangement::from_spiral(&tiles).unwrap();

        let text = formatter.grid(&arrangement);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "  A/H   |   A/H   |   A/H");
        assert_eq!(lines[1], "A/H A/H | A/H A/H | A/H A/H");
        assert_eq!(lines[3], "-".repeat(27));
        assert_eq!(lines[7], lines[3]);
    }

    // Tests grid cells follow the spiral placement
    // Verified by laying tiles out in row-major order
    #[test]
    fn test_grid_centre_cell() {
        let registry = registry();
        let formatter = SolutionFormatter::new(&registry);
        let mut tiles = vec![Tile::new([Edge::head(0); 4]); 9];
        tiles[0] = Tile::new([Edge::tail(1); 4]);
        let arrangement = Arrangement::from_spiral(&tiles).unwrap();

        let text = formatter.grid(&arrangement);
        let middle_row = text.lines().nth(5).unwrap();

        assert_eq!(middle_row, "A/H A/H | B/T B/T | A/H A/H");
    }
}
