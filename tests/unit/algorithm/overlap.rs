//! Tests for spatial overlap detection between block pairs

#[cfg(test)]
mod tests {
    use expandblock::algorithm::overlap::overlap_matrix;

    #[test]
    fn test_every_block_overlaps_itself() {
        let positions = vec![(0, 0), (100, -30), (7, 7)];
        let overlap = overlap_matrix(&positions, 4);

        for i in 0..positions.len() {
            assert!(overlap[[i, i]], "diagonal entry {i} must be true");
        }
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let positions = vec![(0, 0), (3, 40), (40, 3), (40, 40)];
        let overlap = overlap_matrix(&positions, 4);

        for i in 0..positions.len() {
            for j in 0..positions.len() {
                assert_eq!(overlap[[i, j]], overlap[[j, i]]);
            }
        }
    }

    // Either axis within one block width marks the pair overlapping
    #[test]
    fn test_single_axis_proximity_counts_as_overlap() {
        let positions = vec![(0, 0), (3, 100), (100, 3), (0, 100)];
        let overlap = overlap_matrix(&positions, 4);

        assert!(overlap[[0, 1]], "row distance 3 < 4");
        assert!(overlap[[0, 2]], "col distance 3 < 4");
        assert!(overlap[[0, 3]], "row distance 0 < 4 despite distant columns");
    }

    #[test]
    fn test_blocks_distant_on_both_axes_do_not_overlap() {
        let positions = vec![(0, 0), (4, 4), (-50, 80)];
        let overlap = overlap_matrix(&positions, 4);

        assert!(!overlap[[0, 1]], "both distances exactly block_size");
        assert!(!overlap[[0, 2]]);
        assert!(!overlap[[1, 2]]);
    }

    // Overlap depends only on positions, never on the resolution being
    // evaluated, so negative coordinates behave like any others
    #[test]
    fn test_negative_coordinates_use_absolute_distance() {
        let positions = vec![(-2, -2), (1, 100)];
        let overlap = overlap_matrix(&positions, 4);

        assert!(overlap[[0, 1]], "row distance |-2 - 1| = 3 < 4");
    }
}
