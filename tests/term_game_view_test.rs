use blockfall::core::{Board, GameConfig, Grid, SequenceSource, Session};
use blockfall::term::{GameView, Viewport};
use blockfall::types::{Cell, Color, ShapeKind};

fn screen_text(fb: &blockfall::term::FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.line_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_side_panel_labels_are_drawn() {
    let session = Session::new(GameConfig::default()).unwrap();
    let fb = GameView::default().render(&session.snapshot(), Viewport::new(80, 30));
    let text = screen_text(&fb);

    for label in ["NEXT", "SCORE", "LEVEL", "ROWS LEFT"] {
        assert!(text.contains(label), "missing {label}");
    }
    assert!(!text.contains("GAME OVER"));
}

#[test]
fn test_locked_cells_are_drawn() {
    let mut grid = Grid::new(10, 22);
    grid.set(0, 21, Cell::Occupied(Color::Red));
    let board = Board::from_grid(grid, Box::new(SequenceSource::repeat(ShapeKind::O))).unwrap();

    // Exact fit: board frame at the origin.
    let view = GameView::default();
    let (w, h) = view.frame_size(&board.snapshot());
    let fb = view.render(&board.snapshot(), Viewport::new(w, h));

    assert_eq!(fb.get(1, 22).map(|g| g.ch), Some('█'));
    assert_eq!(fb.get(3, 22).map(|g| g.ch), Some('·'));
}

#[test]
fn test_game_over_overlay() {
    let mut grid = Grid::new(10, 22);
    grid.set(0, 0, Cell::Occupied(Color::Red));
    let board = Board::from_grid(grid, Box::new(SequenceSource::repeat(ShapeKind::O))).unwrap();

    let fb = GameView::default().render(&board.snapshot(), Viewport::new(80, 30));
    assert!(screen_text(&fb).contains("GAME OVER"));
}

#[test]
fn test_tiny_viewport_does_not_panic() {
    let session = Session::new(GameConfig::default()).unwrap();
    let view = GameView::default();
    for (w, h) in [(0, 0), (1, 1), (5, 3), (30, 10)] {
        let fb = view.render(&session.snapshot(), Viewport::new(w, h));
        assert_eq!((fb.width(), fb.height()), (w, h));
    }
}
