// benches/pipeline_throughput.rs
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use crimelog_processor::app::adapters::csv_source::read_source_from_reader;
use crimelog_processor::app::services::field_normalizers::{
    DateOptions, DispositionOptions, normalize_date_time, normalize_disposition,
};
use crimelog_processor::{Config, Pipeline, SourceTable};

const HEADER: &str = "Case #,Date Reported,Date/Time Occurred,Location,Nature,Disposition\n";

/// Synthetic paged export: every record spans two rows and every 50 records
/// a footer and repeated header are inserted
fn synthetic_log(records: usize) -> SourceTable {
    let mut csv = String::from(HEADER);
    for i in 0..records {
        if i > 0 && i % 50 == 0 {
            csv.push_str(&format!("Page {} of {},,,,,\n", i / 50, records / 50 + 1));
            csv.push_str(HEADER);
        }
        csv.push_str(&format!(
            "25-{:05},2/17/25 {:02}{:02},10/01/24 0836-0917,{} Main St,BURG,CLSD 3/3/2025\n",
            i,
            i % 24,
            i % 60,
            i
        ));
        csv.push_str(",,,North Hall,Related Incident,\n");
    }
    read_source_from_reader("synthetic", csv.as_bytes()).expect("synthetic log parses")
}

fn bench_pipeline(c: &mut Criterion) {
    let pipeline = Pipeline::new(Config::default()).expect("default config is valid");

    let mut group = c.benchmark_group("pipeline_process");
    for records in [100, 1_000, 10_000] {
        let source = synthetic_log(records);
        group.throughput(Throughput::Elements(source.rows.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(records), &source, |b, source| {
            b.iter(|| {
                let result = pipeline.process(black_box(source));
                black_box(result.record_count())
            })
        });
    }
    group.finish();
}

fn bench_normalizers(c: &mut Criterion) {
    let date_options = DateOptions::default();
    let disposition_options = DispositionOptions::default();

    c.bench_function("normalize_date_time", |b| {
        b.iter(|| normalize_date_time(black_box("04/29/25 8:15am - 04/29/25 5:00pm"), date_options))
    });

    c.bench_function("normalize_disposition", |b| {
        b.iter(|| {
            normalize_disposition(
                black_box("Inactive: 10/5/2024 14:30 CLSD"),
                disposition_options,
            )
        })
    });
}

criterion_group!(benches, bench_pipeline, bench_normalizers);
criterion_main!(benches);
