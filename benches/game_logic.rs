use criterion::{black_box, criterion_group, criterion_main, Criterion};
use falling_blocks::core::{is_valid_move, Board, GameSnapshot, GameState, Piece};
use falling_blocks::term::{FrameBuffer, GameView, Viewport};
use falling_blocks::types::{Color, ShapeKind, BOARD_COLS, BOARD_ROWS};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if state.is_game_over() {
                state.reset();
            }
            black_box(state.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new(BOARD_ROWS, BOARD_COLS);
            for row in 16..20 {
                for col in 0..BOARD_COLS {
                    let _ = board.set(row, col, Color::Cyan);
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let board = Board::new(BOARD_ROWS, BOARD_COLS);

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            for kind in ShapeKind::ALL {
                let piece = Piece::spawn(black_box(kind), BOARD_COLS);
                black_box(is_valid_move(&piece, &board));
            }
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            black_box(state.move_left());
            black_box(state.move_right());
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            black_box(state.rotate());
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::new(12345);
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(80, 24), &mut fb);
            black_box(&fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_move,
    bench_rotate,
    bench_render
);
criterion_main!(benches);
