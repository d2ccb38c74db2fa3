use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use termbench::encoder::{set_foreground, write_uint};
use termbench::generators::{self, Test};
use termbench::{Buffer, TerminalSize};

/// Compare the table-driven encoder against `format!`
fn bench_write_uint(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_uint");

    for value in &[7u32, 4_096, 4_294_967_295] {
        group.bench_with_input(BenchmarkId::new("table", value), value, |b, &value| {
            let mut buffer = Buffer::with_capacity(usize::MAX);
            b.iter(|| {
                buffer.clear();
                write_uint(&mut buffer, black_box(value));
            });
        });

        group.bench_with_input(BenchmarkId::new("format", value), value, |b, &value| {
            let mut buffer = Buffer::with_capacity(usize::MAX);
            b.iter(|| {
                buffer.clear();
                buffer.write(format!("{}", black_box(value)).as_bytes());
            });
        });
    }

    group.finish();
}

/// Cost of one true-color SGR sequence
fn bench_set_foreground(c: &mut Criterion) {
    let mut buffer = Buffer::with_capacity(usize::MAX);
    c.bench_function("set_foreground", |b| {
        b.iter(|| {
            buffer.clear();
            set_foreground(&mut buffer, black_box(255), black_box(128), black_box(7));
        });
    });
}

/// Frame generation for the SGR tests at common screen sizes
fn bench_sgr_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("sgr_frame");

    for &(columns, lines) in &[(80u16, 24u16), (200, 60)] {
        let size = TerminalSize::new(columns, lines);
        group.throughput(Throughput::Elements(u64::from(columns) * u64::from(lines)));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut test = generators::sgr_fg_bg_lines();
            let mut buffer = Buffer::with_capacity(usize::MAX);
            test.setup(size);
            b.iter(|| {
                buffer.clear();
                test.fill(&mut buffer);
            });
        });
    }

    group.finish();
}

/// Filling a 1 MB staging buffer
fn bench_fill_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_buffer");
    group.throughput(Throughput::Bytes(1 << 20));

    let cases: [(&str, fn() -> Box<dyn Test>); 2] = [
        ("many_lines", generators::many_lines),
        ("long_lines", generators::long_lines),
    ];
    for (name, factory) in cases {
        group.bench_function(name, |b| {
            let mut test = factory();
            test.setup(TerminalSize::DEFAULT);
            let mut buffer = Buffer::with_capacity(1 << 20);
            b.iter(|| {
                buffer.clear();
                while buffer.good() {
                    test.fill(&mut buffer);
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_write_uint,
    bench_set_foreground,
    bench_sgr_frames,
    bench_fill_buffer
);
criterion_main!(benches);
