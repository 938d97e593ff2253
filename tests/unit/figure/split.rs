//! Tests for trimming a figure to a component and for shallow clones

#[cfg(test)]
mod tests {
    use blocksplit::figure::{Category, Figure, FigureId, FigureIdAllocator};
    use blocksplit::graph::bitset::BlockBitset;
    use blocksplit::scene::{Scene, VisualHandle};
    use blocksplit::spatial::grid::Cell;
    use blocksplit::spatial::shape::ShapeSpec;

    fn all_blocks(figure: &Figure<VisualHandle>) -> BlockBitset {
        let mut ids = BlockBitset::new(figure.id_range());
        for id in figure.block_ids() {
            ids.insert(id);
        }
        ids
    }

    // Tests trimming moves a figure anchored away from the origin back to it
    // Verified by keeping the old width in the trimmed grid
    #[test]
    fn test_split_to_whole_figure_trims_bounding_box() -> blocksplit::Result<()> {
        let mut scene = Scene::new();
        let mut allocator = FigureIdAllocator::new();
        let shape = ShapeSpec::Cells(vec![Cell::new(1, 1), Cell::new(2, 1)]);
        let mut figure =
            Figure::generate(&mut allocator, 3, 3, &shape, Category::default(), &mut scene)?;

        let keep = all_blocks(&figure);
        let offset = figure.split_to(&keep, &mut scene);

        assert_eq!(offset, [1, 1]);
        assert_eq!((figure.width(), figure.height()), (2, 1));
        assert_eq!(figure.block_at(Cell::new(0, 0)), Some(1));
        assert_eq!(figure.block_at(Cell::new(1, 0)), Some(2));
        assert!(figure.links().is_linked(1, 2));
        assert_eq!(figure.visual_count(), 2);
        Ok(())
    }

    // Tests a clone copies state under a new identity and shares visual handles
    #[test]
    fn test_shallow_clone_copies_state() -> blocksplit::Result<()> {
        let mut scene = Scene::new();
        let mut allocator = FigureIdAllocator::new();
        let figure = Figure::generate(
            &mut allocator,
            2,
            2,
            &ShapeSpec::Square { side: 2 },
            Category(5),
            &mut scene,
        )?;

        let clone = figure.shallow_clone(&mut allocator);

        assert_eq!(clone.id(), FigureId(1));
        assert_eq!(clone.grid(), figure.grid());
        assert_eq!(clone.links(), figure.links());
        assert_eq!(clone.id_range(), figure.id_range());
        assert_eq!(clone.category(), Category(5));
        for id in figure.block_ids() {
            assert_eq!(clone.visual(id), figure.visual(id));
        }
        assert_eq!(scene.len(), 4);
        Ok(())
    }

    // Tests splitting the clone hands the complementary visuals to it alone
    // Verified by skipping the visual removal for dropped blocks
    #[test]
    fn test_split_moves_visual_ownership() -> blocksplit::Result<()> {
        let mut scene = Scene::new();
        let mut allocator = FigureIdAllocator::new();
        let mut figure = Figure::generate(
            &mut allocator,
            2,
            1,
            &ShapeSpec::Full,
            Category::default(),
            &mut scene,
        )?;
        figure.cut(Cell::new(0, 0), Cell::new(1, 0), &mut allocator, &mut scene)?;

        assert_eq!(figure.visual_count(), 1);
        assert_eq!(figure.visual(2), None);
        assert_eq!(scene.owner_of(VisualHandle(0)), Some((FigureId(0), 1)));
        assert_eq!(scene.owner_of(VisualHandle(1)), Some((FigureId(1), 2)));
        assert_eq!(
            scene.visual(VisualHandle(1)).map(|v| v.reparent_count),
            Some(1)
        );
        assert_eq!(
            scene.visual(VisualHandle(0)).map(|v| v.reparent_count),
            Some(0)
        );
        Ok(())
    }

    #[test]
    #[should_panic(expected = "no block from the kept component")]
    fn test_split_to_empty_component_panics() {
        let mut scene = Scene::new();
        let mut allocator = FigureIdAllocator::new();
        let Ok(mut figure) = Figure::generate(
            &mut allocator,
            2,
            2,
            &ShapeSpec::Full,
            Category::default(),
            &mut scene,
        ) else {
            return;
        };
        let keep = BlockBitset::new(figure.id_range());
        figure.split_to(&keep, &mut scene);
    }
}
