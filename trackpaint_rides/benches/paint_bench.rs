use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trackpaint_rides::{
    mine_train::{build_mine_train_table, MINE_TRAIN_TRACK_PAINT},
    settings::TrackPaintSettings,
    trackpaint_core::{
        direction::Direction,
        session::{RecordingSession, SupportStyle},
        TrackElement, TrackElementKind,
    },
};

fn paint_benchmarks(c: &mut Criterion) {
    let table = &*MINE_TRAIN_TRACK_PAINT;
    let mut elements = Vec::new();
    for kind in table.supported_kinds() {
        let count = table.sequence_count(kind).unwrap();
        for direction in Direction::ALL {
            for sequence in 0..count {
                elements.push(TrackElement::new(kind, direction, sequence, 64));
            }
        }
    }

    let mut session = RecordingSession::new();
    c.bench_function("paint_every_tile", |b| {
        b.iter(|| {
            session.clear();
            for element in &elements {
                table.paint(&mut session, element, SupportStyle::WoodenMineTrain);
            }
            black_box(session.calls().len())
        })
    });

    let helix = TrackElement::new(
        TrackElementKind::RightHalfBankedHelixDownLarge,
        Direction::D2,
        11,
        128,
    );
    c.bench_function("paint_remapped_helix_tile", |b| {
        b.iter(|| {
            session.clear();
            table.paint(&mut session, black_box(&helix), SupportStyle::WoodenMineTrain);
        })
    });

    c.bench_function("build_table", |b| {
        b.iter(|| build_mine_train_table(&TrackPaintSettings::default()).unwrap())
    });
}

criterion_group!(benches, paint_benchmarks);
criterion_main!(benches);
