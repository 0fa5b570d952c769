use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use pisweeper_core::*;

fn bench_flood_fill(c: &mut Criterion) {
    // one mine in the corner leaves a single zero region covering the board
    let field = Minefield::from_mine_coords((255, 255), &[(254, 254)]).unwrap();
    let session = Session::new(field);

    c.bench_function("flood_fill_255x255", |b| {
        b.iter_batched(
            || session.clone(),
            |mut session| black_box(session.reveal((0, 0))),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_flood_fill);
criterion_main!(benches);
