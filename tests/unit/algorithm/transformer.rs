//! Tests for horizontal and vertical mirroring

#[cfg(test)]
mod tests {
    use gridkit::algorithm::Transformer;
    use gridkit::{Grid, Result};

    fn sample() -> Result<Grid<char>> {
        Grid::from_rows(vec![
            vec![Some('a'), Some('b'), Some('c')],
            vec![Some('d'), None, Some('f')],
        ])
    }

    // Tests horizontal flip mirrors columns
    // Verified by mapping to columns - column
    #[test]
    fn test_flip_horizontal() -> Result<()> {
        let mut transformer = Transformer::new(sample()?);
        transformer.flip_horizontal();

        let expected = Grid::from_rows(vec![
            vec![Some('c'), Some('b'), Some('a')],
            vec![Some('f'), None, Some('d')],
        ])?;
        assert_eq!(transformer.grid(), &expected);
        Ok(())
    }

    // Tests vertical flip mirrors rows
    // Verified by mirroring columns in flip_vertical
    #[test]
    fn test_flip_vertical() -> Result<()> {
        let mut transformer = Transformer::new(sample()?);
        transformer.flip_vertical();

        let expected = Grid::from_rows(vec![
            vec![Some('d'), None, Some('f')],
            vec![Some('a'), Some('b'), Some('c')],
        ])?;
        assert_eq!(transformer.into_grid(), expected);
        Ok(())
    }

    // Tests each flip is its own inverse
    // Verified by offsetting the mirror by one
    #[test]
    fn test_flips_are_involutions() -> Result<()> {
        let original = sample()?;
        let mut transformer = Transformer::new(original.clone());

        transformer.flip_horizontal();
        transformer.flip_horizontal();
        assert_eq!(transformer.grid(), &original);

        transformer.flip_vertical();
        transformer.flip_vertical();
        assert_eq!(transformer.grid(), &original);
        Ok(())
    }

    // Tests both flips together equal two rotations
    // Verified by skipping the vertical remap
    #[test]
    fn test_double_flip_matches_half_turn() -> Result<()> {
        let mut rotated = sample()?;
        rotated.rotate();
        rotated.rotate();

        let mut transformer = Transformer::new(sample()?);
        transformer.flip_horizontal();
        transformer.flip_vertical();

        assert_eq!(transformer.grid(), &rotated);
        Ok(())
    }

    // Tests flipping an empty-shaped grid is a no-op
    // Verified by computing columns - 1 eagerly
    #[test]
    fn test_flip_zero_size_grid() {
        let mut transformer: Transformer<u8> = Transformer::new(Grid::new(0, 0));
        transformer.flip_horizontal();
        transformer.flip_vertical();
        assert_eq!(transformer.grid().dimensions(), (0, 0));
    }
}
