//! Benchmarks for seedforge-parser.
//!
//! Run with: cargo bench -p seedforge-parser

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use seedforge_parser::parse_name;

const MOVIE_SAMPLES: &[&str] = &[
    "Example.Movie.2019.1080p.BluRay.x264-GROUP",
    "Dune.Part.Two.2024.MULTi.VFF.2160p.WEB-DL.DV.HDR.H265-GRP",
    "Alien.1979.Directors.Cut.1080p.BluRay-GRP",
    "Interstellar.2014.IMAX.2160p.UHD.BluRay.REMUX.HDR.HEVC.TrueHD.7.1.Atmos-FGT",
];

const SERIES_SAMPLES: &[&str] = &[
    "Breaking.Bad.S01E05.720p.HDTV.x264-DEMAND",
    "Le.Bureau.des.Legendes.S02.FRENCH.1080p.WEB.H264-NoTag",
    "The.Expanse.Saison.1.Integrale.MULTi.1080p.BluRay-GRP",
    "One.Piece.E1071.VOSTFR.1080p.WEB-GRP",
];

fn bench_parse_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_single");

    group.bench_function("simple_movie", |b| {
        b.iter(|| parse_name(black_box("Example.Movie.2019.1080p.BluRay.x264-GROUP")))
    });

    group.bench_function("season_pack", |b| {
        b.iter(|| parse_name(black_box("Show.S03.MULTi.1080p.WEB-DL-GRP")))
    });

    group.bench_function("no_tags", |b| {
        b.iter(|| parse_name(black_box("Untitled Home Video")))
    });

    group.finish();
}

fn bench_parse_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_batch");

    for (name, samples) in [("movies", MOVIE_SAMPLES), ("series", SERIES_SAMPLES)] {
        group.throughput(Throughput::Elements(samples.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), samples, |b, samples| {
            b.iter(|| {
                for sample in samples.iter() {
                    black_box(parse_name(sample));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_single, bench_parse_batch);
criterion_main!(benches);
