use criterion::{black_box, criterion_group, criterion_main, Criterion};
use robocity_core::{Interpreter, Item, ItemContainer};

fn bench_generate_instruction(c: &mut Criterion) {
    let interpreter = Interpreter::new();
    let lines = [
        "move",
        "turn left",
        "pick battery",
        "operar card",
        "escanear",
        "coger newspapers",
        "nonsense here",
    ];

    c.bench_function("robocity-core/generate_instruction(lines=7)", |b| {
        b.iter(|| {
            for line in lines {
                black_box(interpreter.generate_instruction(black_box(line)).is_ok());
            }
        });
    });
}

fn bench_container_lookup(c: &mut Criterion) {
    let mut container = ItemContainer::new();
    for i in 0..256 {
        container.add(Item::fuel(format!("Cell{i:03}"), "bench cell", 1, 1));
    }

    c.bench_function("robocity-core/container_get(items=256)", |b| {
        b.iter(|| {
            black_box(container.get(black_box("cell128")).is_some());
            black_box(container.contains(black_box("CELL255")));
        });
    });
}

criterion_group!(benches, bench_generate_instruction, bench_container_lookup);
criterion_main!(benches);
