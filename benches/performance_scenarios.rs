use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use solar_spa::{spa, validate_inputs, ObserverConfig};
use std::hint::black_box;

fn golden() -> ObserverConfig {
    ObserverConfig::default()
        .with_date(2003, 10, 17)
        .with_time(12, 30, 30.0)
        .with_timezone(-7.0)
        .with_location(39.742476, -105.1786, 1830.14)
        .with_atmosphere(820.0, 11.0)
        .with_surface(30.0, -10.0)
        .with_delta_t(67.0)
}

fn benchmark_single_calculation(c: &mut Criterion) {
    let config = golden();

    c.bench_function("spa_calculate", |b| {
        b.iter(|| spa::calculate(black_box(&config)).unwrap())
    });

    c.bench_function("spa_rise_transit_set", |b| {
        b.iter(|| spa::rts::sun_rise_transit_set(black_box(&config)))
    });

    c.bench_function("validate_inputs", |b| {
        b.iter(|| validate_inputs(black_box(&config)))
    });
}

fn benchmark_time_series_fixed_location(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_series_fixed_location");
    let base = golden();

    for &days in &[7, 31, 365] {
        group.throughput(Throughput::Elements(days * 24));
        group.bench_with_input(BenchmarkId::new("hourly", days), &days, |b, &days| {
            b.iter(|| {
                let mut zenith_sum = 0.0;
                for day in 0..days {
                    // walk the year on a fixed 28-day month grid
                    let month = (day / 28 % 12 + 1) as i32;
                    let day_of_month = (day % 28 + 1) as i32;
                    for hour in 0..24 {
                        let config = base.with_date(2003, month, day_of_month).with_time(hour, 0, 0.0);
                        zenith_sum += spa::calculate(black_box(&config)).unwrap().zenith();
                    }
                }
                zenith_sum
            })
        });
    }

    group.finish();
}

fn benchmark_coordinate_sweep_fixed_time(c: &mut Criterion) {
    let mut group = c.benchmark_group("coordinate_sweep_fixed_time");
    let base = golden();

    for &steps in &[10_u64, 30] {
        group.throughput(Throughput::Elements(steps * steps));
        group.bench_with_input(BenchmarkId::new("grid", steps), &steps, |b, &steps| {
            b.iter(|| {
                let mut azimuth_sum = 0.0;
                for i in 0..steps {
                    for j in 0..steps {
                        let latitude = -60.0 + 120.0 * i as f64 / steps as f64;
                        let longitude = -180.0 + 360.0 * j as f64 / steps as f64;
                        let config = base.with_location(latitude, longitude, 0.0);
                        azimuth_sum += spa::calculate(black_box(&config)).unwrap().azimuth();
                    }
                }
                azimuth_sum
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_calculation,
    benchmark_time_series_fixed_location,
    benchmark_coordinate_sweep_fixed_time
);
criterion_main!(benches);
