use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sqlpp_core::{format_select, parse, tokenize, FormatOptions, ProjectionLayout};

const REPORT_QUERY: &str = "select c.name, count(o.id) as order_count, sum(o.total) as revenue \
    from customers c left join orders o on c.id = o.customer_id \
    where c.active = 1 and o.created_at between '2024-01-01' and '2024-12-31' \
    group by c.name order by revenue desc nulls last limit 10";

const NESTED_QUERY: &str = "select a from (select b, c from (select d, e, f from t \
    where t.id in (1, 2, 3, 4, 5) or t.kind not like 'x%') x where x.b > 0) y";

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize_report_query", |b| {
        b.iter(|| {
            let tokens = tokenize(black_box(REPORT_QUERY)).tokenize_all().unwrap();
            assert!(tokens.len() > 50);
        });
    });
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_report_query", |b| {
        b.iter(|| parse(black_box(REPORT_QUERY)).unwrap());
    });

    c.bench_function("parse_nested_query", |b| {
        b.iter(|| parse(black_box(NESTED_QUERY)).unwrap());
    });
}

fn bench_format(c: &mut Criterion) {
    let report = parse(REPORT_QUERY).unwrap();
    let nested = parse(NESTED_QUERY).unwrap();
    let wrap = FormatOptions::new().with_projections(ProjectionLayout::Wrap);

    c.bench_function("format_report_query", |b| {
        b.iter(|| format_select(black_box(&report), FormatOptions::default()));
    });

    c.bench_function("format_nested_query_wrapped", |b| {
        b.iter(|| format_select(black_box(&nested), wrap));
    });
}

criterion_group!(benches, bench_tokenize, bench_parse, bench_format);
criterion_main!(benches);
