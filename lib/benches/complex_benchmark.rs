use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plane_lib::math::{Complex, Point};
use rand::Rng as _;
use rand_pcg::Pcg64;
use rand_seeder::Seeder;

fn random_complex_vec(rng: &mut Pcg64, count: usize) -> Vec<Complex> {
    (0..count)
        .map(|_| Complex::new(rng.gen_range(-1e3..1e3), rng.gen_range(-1e3..1e3)))
        .collect()
}

fn multiply(c: &mut Criterion) {
    let mut rng: Pcg64 = Seeder::from(&[0xff]).make_rng();
    let values = random_complex_vec(&mut rng, 1024);

    c.bench_function("multiply_new", |b| {
        b.iter(|| {
            values
                .iter()
                .fold(Complex::new(1., 0.), |acc, z| Complex::multiply_new(&acc, z))
        })
    });

    c.bench_function("multiply_componentwise", |b| {
        b.iter(|| {
            let mut acc = Complex::new(1., 1.);
            for z in &values {
                acc.multiply_componentwise(z);
            }
            black_box(acc)
        })
    });
}

fn polar(c: &mut Criterion) {
    let mut rng: Pcg64 = Seeder::from(&[0xff]).make_rng();
    let values = random_complex_vec(&mut rng, 1024);

    c.bench_function("magnitude", |b| {
        b.iter(|| values.iter().map(|z| z.magnitude()).sum::<f64>())
    });

    c.bench_function("argument", |b| {
        b.iter(|| values.iter().map(|z| z.argument()).sum::<f64>())
    });
}

fn format(c: &mut Criterion) {
    let mut rng: Pcg64 = Seeder::from(&[0xff]).make_rng();
    let values = random_complex_vec(&mut rng, 64);

    c.bench_function("format complex", |b| {
        b.iter(|| {
            for z in &values {
                black_box(z.to_string());
            }
        })
    });

    c.bench_function("format point", |b| {
        let mut point = Point::<i32>::new(0, 0);
        b.iter(|| {
            point.translate(black_box(7), black_box(-3));
            black_box(point.to_string())
        })
    });
}

criterion_group!(benches, multiply, polar, format);
criterion_main!(benches);
