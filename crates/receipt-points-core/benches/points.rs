use criterion::{black_box, criterion_group, criterion_main, Criterion};
use receipt_points_core::{calculate_points, ReceiptBuilder};

fn bench_points(c: &mut Criterion) {
    let small = ReceiptBuilder::new("M&M Corner Market")
        .date("2022-03-20")
        .time("14:33")
        .item("Gatorade", "2.25")
        .item("Gatorade", "2.25")
        .total("4.50")
        .build()
        .unwrap();

    let mut builder = ReceiptBuilder::new("Target").date("2022-01-01").time("13:01");
    for i in 0..500 {
        builder = builder.item(format!("Item number {i}"), "12.25");
    }
    let large = builder.total("6125.00").build().unwrap();

    c.bench_function("points_two_items", |b| {
        b.iter(|| calculate_points(black_box(&small)))
    });
    c.bench_function("points_500_items", |b| {
        b.iter(|| calculate_points(black_box(&large)))
    });
}

criterion_group!(benches, bench_points);
criterion_main!(benches);
