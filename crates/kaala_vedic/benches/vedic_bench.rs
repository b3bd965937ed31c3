use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kaala_vedic::{
    Gender, Karana, Masa, Nakshatra, Paksha, SankalpaInput, Tithi, Vaar, Yoga, elongation_deg,
    generate_sankalpa, karana_from_elongation, nakshatra_from_longitude, tithi_from_elongation,
    yoga_from_sum,
};

fn index_functions_bench(c: &mut Criterion) {
    let elong = 211.75;
    let sum = 278.31;
    let moon_lon = 134.56;

    let mut group = c.benchmark_group("index_functions");
    group.bench_function("tithi_from_elongation", |b| {
        b.iter(|| tithi_from_elongation(black_box(elong)))
    });
    group.bench_function("karana_from_elongation", |b| {
        b.iter(|| karana_from_elongation(black_box(elong)))
    });
    group.bench_function("yoga_from_sum", |b| {
        b.iter(|| yoga_from_sum(black_box(sum)))
    });
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(moon_lon)))
    });
    group.bench_function("elongation_deg", |b| {
        b.iter(|| elongation_deg(black_box(355.2), black_box(10.8)))
    });
    group.finish();
}

fn sankalpa_bench(c: &mut Criterion) {
    let input = SankalpaInput {
        country: "Bhārata".into(),
        state: "Dillī".into(),
        city: "New Delhi".into(),
        masa: Masa::Chaitra,
        paksha: Paksha::Shukla,
        tithi: Tithi::ShuklaPratipada,
        vaar: Vaar::Budhavara,
        nakshatra: Nakshatra::Ashwini,
        yoga: Yoga::Vishkambha,
        karana: Karana::Kimstughna,
        sun_lon_sidereal: 355.0,
        moon_lon_sidereal: 10.0,
        jupiter_lon_sidereal: Some(45.0),
        name: "Rāhula".into(),
        gotra: "Kāśyapa".into(),
        gender: Gender::Male,
        purpose: "śānty-artham".into(),
        offering: "japaṃ kariṣye".into(),
    };

    let mut group = c.benchmark_group("sankalpa");
    group.bench_function("generate_sankalpa", |b| {
        b.iter(|| generate_sankalpa(black_box(&input)))
    });
    group.finish();
}

criterion_group!(benches, index_functions_bench, sankalpa_bench);
criterion_main!(benches);
