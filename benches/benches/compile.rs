use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use unicode_tables_benches::{synthetic_scripts, BLOCKS, SCRIPTS};
use unicode_tables_source::{compile, NoKnownIdentifiers, PropertyKind};

const WARM_UP_TIME: u64 = 3;
const MEASUREMENT_TIME: u64 = 7;

fn fixtures(c: &mut Criterion)
{
    let mut group = c.benchmark_group("fixtures");

    group.warm_up_time(core::time::Duration::from_secs(WARM_UP_TIME));
    group.measurement_time(core::time::Duration::from_secs(MEASUREMENT_TIME));

    for (name, text, kind) in [
        ("blocks", BLOCKS, PropertyKind::Block),
        ("scripts", SCRIPTS, PropertyKind::Script),
    ] {
        group.bench_with_input(BenchmarkId::new("compile", name), text, |b, text| {
            b.iter(|| compile(black_box(text), kind, &NoKnownIdentifiers).unwrap())
        });
    }

    group.finish();
}

fn synthetic(c: &mut Criterion)
{
    let mut group = c.benchmark_group("synthetic");

    group.warm_up_time(core::time::Duration::from_secs(WARM_UP_TIME));
    group.measurement_time(core::time::Duration::from_secs(MEASUREMENT_TIME));

    // порядка числа записей в Scripts.txt
    for records in [500u32, 2500, 5000] {
        let text = synthetic_scripts(records, 160);

        group.bench_with_input(BenchmarkId::new("compile", records), &text, |b, text| {
            b.iter(|| compile(black_box(text), PropertyKind::Script, &NoKnownIdentifiers).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, fixtures, synthetic);
criterion_main!(benches);
