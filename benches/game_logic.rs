use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tui_2048::core::{apply_move, merge_line, slide, spawn_tile, Board, GameState};
use tui_2048::types::Direction;

fn busy_board() -> Board {
    Board::from_rows([
        [2, 2, 4, 8],
        [0, 4, 4, 16],
        [32, 0, 32, 2],
        [2, 4, 0, 4],
    ])
}

fn bench_merge_line(c: &mut Criterion) {
    c.bench_function("merge_line", |b| {
        b.iter(|| merge_line(black_box([2, 2, 0, 4])))
    });
}

fn bench_slide(c: &mut Criterion) {
    let board = busy_board();
    for dir in Direction::ALL {
        c.bench_function(&format!("slide_{}", dir.as_str()), |b| {
            b.iter(|| slide(black_box(&board), dir))
        });
    }
}

fn bench_spawn(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345);
    c.bench_function("spawn_tile", |b| {
        b.iter(|| {
            let mut board = busy_board();
            spawn_tile(&mut board, &mut rng)
        })
    });
}

fn bench_apply_move(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345);
    let board = busy_board();
    c.bench_function("apply_move", |b| {
        b.iter(|| apply_move(black_box(&board), Direction::Left, &mut rng))
    });
}

fn bench_session_move(c: &mut Criterion) {
    let mut game = GameState::new(12345);
    let mut step = 0usize;
    c.bench_function("session_move", |b| {
        b.iter(|| {
            if game.is_over() {
                game.restart();
            }
            step += 1;
            game.apply_move(Direction::ALL[step % 4])
        })
    });
}

criterion_group!(
    benches,
    bench_merge_line,
    bench_slide,
    bench_spawn,
    bench_apply_move,
    bench_session_move
);
criterion_main!(benches);
