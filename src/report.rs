use crate::chart::{TypeChart, TypeId};
use crate::engine::{BucketListing, Histogram};
use crate::multiplier::Multiplier;

fn join_names(chart: &TypeChart, types: &[TypeId]) -> String {
    types
        .iter()
        .map(|t| chart.name(*t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bucket listings as indented text: each defender with the attackers that
/// hit it hard, then the per-bucket attacker tally.
pub fn render_buckets(chart: &TypeChart, listings: &[BucketListing]) -> String {
    let mut out = String::new();
    for listing in listings {
        out.push_str(&format!("{}x ({})\n", listing.multiplier, listing.entries.len()));
        for entry in &listing.entries {
            out.push_str(&format!("  {}", entry.pair.label(chart)));
            for m in [Multiplier::Quadruple, Multiplier::Double] {
                let hitters = entry.breakdown.get(m);
                if !hitters.is_empty() {
                    out.push_str(&format!("  {m}x: {}", join_names(chart, hitters)));
                }
            }
            out.push('\n');
        }
        for m in [Multiplier::Quadruple, Multiplier::Double] {
            let tally = listing.summary.get(m);
            if tally.is_empty() {
                continue;
            }
            let parts: Vec<String> = tally
                .iter()
                .map(|(t, count)| format!("{} x{count}", chart.name(*t)))
                .collect();
            out.push_str(&format!("  {m}x attackers: {}\n", parts.join(", ")));
        }
    }
    out
}

pub fn render_histogram(histogram: &Histogram) -> String {
    let mut out = String::new();
    for (m, count) in histogram.iter() {
        out.push_str(&format!("{m:>4}x {count}\n"));
    }
    out.push_str(&format!("total {}\n", histogram.total()));
    out
}

pub fn render_types(chart: &TypeChart) -> String {
    chart
        .types()
        .map(|(id, name)| format!("{:>2} {name}\n", id.index()))
        .collect()
}
