// benches/parsing.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dino_stats::{line, specs, table};

fn detail_doc(lines: usize) -> String {
    let mut s = String::from("<main><pre><code>");
    for i in 0..lines {
        s.push_str(&format!(
            r#"<span class="line"><span class="k">Core.Stat{i}</span> &quot;desc {i}&quot; <span>({i},{},{})</span></span>"#,
            i + 1,
            i + 2
        ));
    }
    s.push_str("</code></pre></main>");
    s
}

fn wiki_doc(tables: usize, rows: usize) -> String {
    let mut s = String::from("<html><body>");
    for t in 0..tables {
        s.push_str(&format!("<table class=\"wikitable\"><caption>Table {t}</caption>"));
        s.push_str("<tr><th>Creature</th><th>Juvenile</th><th>Adult</th><th>Elder</th></tr>");
        for r in 0..rows {
            s.push_str(&format!("<tr><td>Dino{r}</td><td>{r}</td><td>{}</td><td>{}</td></tr>", r * 2, r * 3));
        }
        s.push_str("</table>");
    }
    s.push_str("</body></html>");
    s
}

fn bench_parsing(c: &mut Criterion) {
    c.bench_function("parse_line", |b| {
        b.iter(|| line::parse_line(black_box(r#"Core.HealthPoints "hit points (base)" (100,150,200)"#)))
    });

    let headers: Vec<String> = ["Creature", "A", "B", "C"].iter().map(|s| s.to_string()).collect();
    let cells: Vec<String> = (0..4000).map(|i| i.to_string()).collect();
    c.bench_function("reshape_1000_rows", |b| {
        b.iter(|| table::reshape(black_box(&headers), black_box(&cells)).map(|r| r.len()))
    });

    let detail = detail_doc(200);
    c.bench_function("curve_stat_lines", |b| {
        b.iter(|| black_box(specs::curve::stat_lines(black_box(&detail)).len()))
    });

    let wiki = wiki_doc(10, 100);
    c.bench_function("wiki_parse_tables", |b| {
        b.iter(|| black_box(specs::wiki::parse_tables(black_box(&wiki)).len()))
    });
}

criterion_group!(benches, bench_parsing);
criterion_main!(benches);
