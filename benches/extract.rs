use criterion::{black_box, criterion_group, criterion_main, Criterion};

use kol_runs::config::options::Grouping;
use kol_runs::report::Aggregator;
use kol_runs::specs::leaderboard;

const PATHS: [&str; 5] = [
    "Unrestricted",
    "Grey You (Casual)",
    "Community Service",
    "Oxygenarian (Hardcore)",
    "Grey You",
];

/// A showhist=500 sized page without needing a saved sample.
fn synthetic_page(rows: usize) -> String {
    let mut doc = String::from("<html><body><table>");
    for i in 0..rows {
        doc.push_str(&format!(
            "<tr><td>{i}</td><td><a href=showplayer.php?who={} class=nounder><b>Player {}</b></a>&nbsp;</td>\
             <td>Seal Clubber</td><td>{}</td><td>{}</td><td align=right>{},{:03}</td></tr>",
            1000 + i % 97, i % 97, PATHS[i % PATHS.len()], 1 + i % 3, i % 4, i % 1000
        ));
    }
    doc.push_str("</table></body></html>");
    doc
}

fn bench_leaderboard(c: &mut Criterion) {
    let doc = synthetic_page(500);

    c.bench_function("extract_runs_500", |b| {
        b.iter(|| {
            let runs = leaderboard::extract_runs(black_box(&doc)).unwrap();
            black_box(runs.len())
        })
    });

    let runs = leaderboard::extract_runs(&doc).unwrap();
    let agg = Aggregator::for_grouping(1, Grouping::Path);
    c.bench_function("aggregate_500", |b| {
        b.iter(|| black_box(agg.aggregate(black_box(&runs)).groups.len()))
    });
}

criterion_group!(benches, bench_leaderboard);
criterion_main!(benches);
