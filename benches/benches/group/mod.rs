pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

#[macro_export]
macro_rules! group {
    ($fn: ident, $test: ident, $group: expr, $name: expr, $analyze: expr) => {
        #[inline(never)]
        fn $test(records: &[ResolvedCharacter]) -> usize
        {
            let analyze = $analyze;

            analyze(records)
        }

        fn $fn(c: &mut Criterion)
        {
            let mut group = c.benchmark_group($group);

            group.warm_up_time(core::time::Duration::from_secs(group::WARM_UP_TIME));
            group.measurement_time(core::time::Duration::from_secs(group::MEASUREMENT_TIME));

            for (catalog_name, records) in unicode_coverage_benches::catalogs() {
                group.bench_with_input(
                    criterion::BenchmarkId::new($name, &catalog_name),
                    records.as_slice(),
                    |b, records| b.iter(|| $test(criterion::black_box(records))),
                );
            }

            group.finish();
        }
    };
}
