use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameConfig, Grid, Session, UniformSource};
use blockfall::types::{BoardInput, Cell, Color};

fn fresh_board() -> Board {
    match Board::new(10, 22, Box::new(UniformSource::new(12345))) {
        Ok(board) => board,
        Err(err) => panic!("default board: {err}"),
    }
}

fn bench_tick(c: &mut Criterion) {
    let mut board = fresh_board();

    c.bench_function("board_tick", |b| {
        b.iter(|| {
            if board.is_game_over() {
                board = fresh_board();
            }
            black_box(board.tick());
        })
    });
}

fn bench_session_advance(c: &mut Criterion) {
    let config = GameConfig {
        auto_restart: true,
        ..GameConfig::default()
    };
    let Ok(mut session) = Session::new(config) else {
        return;
    };

    c.bench_function("session_advance_16ms", |b| {
        b.iter(|| {
            session.advance(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut grid = Grid::new(10, 22);
            // Fill bottom 4 rows
            for row in 18..22 {
                for column in 0..10 {
                    grid.set(column, row, Cell::Occupied(Color::Cyan));
                }
            }
            black_box(grid.clear_full_rows());
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut board = fresh_board();
    let mut right = true;

    c.bench_function("handle_input_move", |b| {
        b.iter(|| {
            let input = if right { BoardInput::MoveRight } else { BoardInput::MoveLeft };
            if !board.handle_input(input) {
                right = !right;
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut board = fresh_board();

    c.bench_function("handle_input_rotate", |b| {
        b.iter(|| {
            black_box(board.handle_input(BoardInput::Rotate));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_session_advance,
    bench_line_clear,
    bench_move,
    bench_rotate
);
criterion_main!(benches);
