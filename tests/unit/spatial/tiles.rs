//! Tests for tile rotation and orientation search

#[cfg(test)]
mod tests {
    use scramblesquares::algorithm::generator::PuzzleGenerator;
    use scramblesquares::spatial::edge::{Edge, Side};
    use scramblesquares::spatial::tiles::{Requirement, Tile};

    fn distinct_tile() -> Tile {
        Tile::new([
            Edge::head(1),
            Edge::head(2),
            Edge::head(3),
            Edge::head(4),
        ])
    }

    fn sorted_edges(tile: &Tile) -> Vec<Edge> {
        let mut edges = tile.edges().to_vec();
        edges.sort();
        edges
    }

    // Tests a quarter-turn moves left to bottom, bottom to right, right to top, top to left
    // Verified by rotating in the opposite direction
    #[test]
    fn test_rotate_clockwise() {
        let mut tile = distinct_tile();
        tile.rotate();

        assert_eq!(tile.edge(Side::Bottom), Edge::head(4));
        assert_eq!(tile.edge(Side::Right), Edge::head(1));
        assert_eq!(tile.edge(Side::Top), Edge::head(2));
        assert_eq!(tile.edge(Side::Left), Edge::head(3));
        assert_eq!(tile.turns(), 1);
    }

    // Tests four rotations restore every tile of a generated puzzle
    // Verified by rotating only three positions per turn
    #[test]
    fn test_four_rotations_are_identity() {
        let mut generator = PuzzleGenerator::new(7, 5).unwrap();
        for original in generator.generate().unwrap() {
            let mut tile = original.clone();
            for _ in 0..4 {
                tile.rotate();
            }
            assert_eq!(tile, original);
            assert_eq!(tile.turns(), 0);
        }
    }

    // Tests an empty requirement list accepts the current orientation
    // Verified by rotating before the first check
    #[test]
    fn test_no_requirements_fit_immediately() {
        let mut tile = distinct_tile();
        assert_eq!(tile.try_orient(&[]), Some(0));
        assert_eq!(tile, distinct_tile());
    }

    // Tests the first fitting orientation in rotation order wins
    // Verified by continuing to rotate after a match
    #[test]
    fn test_try_orient_reports_turns() {
        let mut tile = distinct_tile();
        // Top holds the second edge after one quarter-turn
        let requirement = Requirement::new(Side::Top, Edge::tail(2));

        assert_eq!(tile.try_orient(&[requirement]), Some(1));
        assert_eq!(tile.edge(Side::Top), Edge::head(2));
        assert_eq!(tile.turns(), 1);
    }

    // Tests two requirements must hold in the same orientation
    // Verified by accepting each requirement in separate rotations
    #[test]
    fn test_two_requirements_checked_together() {
        let mut tile = distinct_tile();
        let both_at_one = [
            Requirement::new(Side::Right, Edge::tail(1)),
            Requirement::new(Side::Top, Edge::tail(2)),
        ];
        assert_eq!(tile.try_orient(&both_at_one), Some(1));

        let mut tile = distinct_tile();
        // Right fits after one turn, top fits unturned, never together
        let never_together = [
            Requirement::new(Side::Right, Edge::tail(1)),
            Requirement::new(Side::Top, Edge::tail(3)),
        ];
        assert_eq!(tile.try_orient(&never_together), None);
    }

    // Tests a failed search leaves the tile in its starting orientation
    // Verified by performing only three rotations on failure
    #[test]
    fn test_failed_orientation_restores_tile() {
        let mut tile = distinct_tile();
        tile.rotate();
        let before = tile.clone();

        let impossible = [Requirement::new(Side::Left, Edge::head(1))];
        assert_eq!(tile.try_orient(&impossible), None);
        assert_eq!(tile, before);
    }

    // Tests orientation search never changes which edges a tile has
    // Verified by overwriting an edge while rotating
    #[test]
    fn test_try_orient_preserves_edge_set() {
        let requirements = [
            [Requirement::new(Side::Bottom, Edge::tail(3))],
            [Requirement::new(Side::Left, Edge::tail(9))],
        ];
        for requirement in &requirements {
            let mut tile = distinct_tile();
            let before = sorted_edges(&tile);
            let _ = tile.try_orient(requirement);
            assert_eq!(sorted_edges(&tile), before);
        }
    }

    // Tests satisfies checks the current orientation without rotating
    // Verified by calling try_orient inside satisfies
    #[test]
    fn test_satisfies_does_not_rotate() {
        let tile = distinct_tile();
        assert!(tile.satisfies(&[Requirement::new(Side::Bottom, Edge::tail(1))]));
        assert!(!tile.satisfies(&[Requirement::new(Side::Bottom, Edge::tail(2))]));
        assert_eq!(tile.turns(), 0);
    }
}
