//! Effectiveness engine: per-pair maximum multipliers, buckets, breakdowns
//! and histograms over a [`TypeChart`].
//!
//! Every function here is pure. Nothing is cached; callers that render
//! repeatedly should memoize on the attacking set themselves.

use crate::chart::{TypeChart, TypeId};
use crate::multiplier::{Coverage, Multiplier};
use crate::selection::AttackSet;
use serde_json::json;
use std::collections::BTreeMap;

/// One- or two-type defender. The dual form is always canonical (`first < second`).
///
/// Ordering follows the canonical enumeration: by first type, then by
/// second type with a single sorting where its diagonal cell would.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DefenderPair {
    Single(TypeId),
    Dual(TypeId, TypeId),
}

impl DefenderPair {
    pub fn new(d1: TypeId, d2: TypeId) -> Self {
        match d1.cmp(&d2) {
            std::cmp::Ordering::Equal => DefenderPair::Single(d1),
            std::cmp::Ordering::Less => DefenderPair::Dual(d1, d2),
            std::cmp::Ordering::Greater => DefenderPair::Dual(d2, d1),
        }
    }

    pub fn from_option(d1: TypeId, d2: Option<TypeId>) -> Self {
        Self::new(d1, d2.unwrap_or(d1))
    }

    pub fn first(self) -> TypeId {
        match self {
            DefenderPair::Single(t) | DefenderPair::Dual(t, _) => t,
        }
    }

    pub fn second(self) -> Option<TypeId> {
        match self {
            DefenderPair::Single(_) => None,
            DefenderPair::Dual(_, t) => Some(t),
        }
    }

    fn canonical_key(self) -> (TypeId, TypeId) {
        (self.first(), self.second().unwrap_or(self.first()))
    }

    pub fn label(self, chart: &TypeChart) -> String {
        match self {
            DefenderPair::Single(t) => chart.name(t).to_string(),
            DefenderPair::Dual(a, b) => format!("{}/{}", chart.name(a), chart.name(b)),
        }
    }
}

impl Ord for DefenderPair {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.canonical_key().cmp(&other.canonical_key())
    }
}

impl PartialOrd for DefenderPair {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Multiplier a single attacking type deals to a defender combination.
pub fn pair_effectiveness(chart: &TypeChart, pair: DefenderPair, attacker: TypeId) -> Multiplier {
    match pair {
        DefenderPair::Single(d) => chart.effectiveness(d, attacker),
        DefenderPair::Dual(d1, d2) => chart
            .effectiveness(d1, attacker)
            .combine(chart.effectiveness(d2, attacker)),
    }
}

/// Worst-case multiplier any of `attackers` deals to `d1`/`d2`.
///
/// `d1 == d2` is a single-type defender and is not squared.
pub fn max_effectiveness(
    chart: &TypeChart,
    d1: TypeId,
    d2: TypeId,
    attackers: &AttackSet,
) -> Coverage {
    let pair = DefenderPair::new(d1, d2);
    attackers
        .iter()
        .map(|a| pair_effectiveness(chart, pair, a))
        .max()
        .map_or(Coverage::NotApplicable, Coverage::Value)
}

/// Canonical-half coverage grid. Lookups in either orientation are answered
/// by symmetry.
#[derive(Clone, Debug, PartialEq)]
pub struct CoverageMatrix {
    size: usize,
    cells: Vec<Coverage>,
}

impl CoverageMatrix {
    // Row i of the upper triangle starts at i*n - i*(i-1)/2.
    fn slot(&self, d1: TypeId, d2: TypeId) -> usize {
        let (i, j) = if d1 <= d2 {
            (d1.index(), d2.index())
        } else {
            (d2.index(), d1.index())
        };
        i * self.size - i * i.saturating_sub(1) / 2 + (j - i)
    }

    pub fn get(&self, d1: TypeId, d2: TypeId) -> Coverage {
        self.cells[self.slot(d1, d2)]
    }

    /// Catalog size the grid was built over.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of stored canonical entries: C(n,2)+n.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter<'a>(
        &'a self,
        chart: &'a TypeChart,
    ) -> impl Iterator<Item = (DefenderPair, Coverage)> + 'a {
        chart
            .canonical_pairs()
            .zip(self.cells.iter().copied())
            .map(|((d1, d2), c)| (DefenderPair::new(d1, d2), c))
    }
}

pub fn coverage_matrix(chart: &TypeChart, attackers: &AttackSet) -> CoverageMatrix {
    let cells = chart
        .canonical_pairs()
        .map(|(d1, d2)| max_effectiveness(chart, d1, d2, attackers))
        .collect();
    CoverageMatrix {
        size: chart.len(),
        cells,
    }
}

/// Catalog attackers that individually hit a defender for 4x or 2x, in catalog order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttackerBreakdown {
    pub quadruple: Vec<TypeId>,
    pub double: Vec<TypeId>,
}

impl AttackerBreakdown {
    /// 2 points per 4x attacker, 1 per 2x attacker.
    pub fn weakness_score(&self) -> usize {
        2 * self.quadruple.len() + self.double.len()
    }

    pub fn get(&self, multiplier: Multiplier) -> &[TypeId] {
        match multiplier {
            Multiplier::Quadruple => &self.quadruple,
            Multiplier::Double => &self.double,
            _ => &[],
        }
    }
}

/// Breakdown over the full catalog, independent of any selection.
pub fn attacker_breakdown(chart: &TypeChart, d1: TypeId, d2: Option<TypeId>) -> AttackerBreakdown {
    pair_breakdown(chart, DefenderPair::from_option(d1, d2))
}

pub fn pair_breakdown(chart: &TypeChart, pair: DefenderPair) -> AttackerBreakdown {
    let mut breakdown = AttackerBreakdown::default();
    for attacker in chart.ids() {
        match pair_effectiveness(chart, pair, attacker) {
            Multiplier::Quadruple => breakdown.quadruple.push(attacker),
            Multiplier::Double => breakdown.double.push(attacker),
            _ => {}
        }
    }
    breakdown
}

pub fn weakness_score(chart: &TypeChart, pair: DefenderPair) -> usize {
    pair_breakdown(chart, pair).weakness_score()
}

/// Sorts by weakness score, highest first. Equal scores keep canonical pair order.
pub fn sort_by_weakness(chart: &TypeChart, pairs: &mut [DefenderPair]) {
    pairs.sort_by_cached_key(|pair| (std::cmp::Reverse(weakness_score(chart, *pair)), *pair));
}

/// Defender combinations the selection hits for 0.25x, 0.5x and 1x, each
/// sorted by [`sort_by_weakness`]. Keys are always present, possibly empty.
pub fn bucket_by_multiplier(
    chart: &TypeChart,
    attackers: &AttackSet,
) -> BTreeMap<Multiplier, Vec<DefenderPair>> {
    let mut buckets: BTreeMap<Multiplier, Vec<DefenderPair>> = Multiplier::RESISTED_OR_NEUTRAL
        .iter()
        .map(|m| (*m, Vec::new()))
        .collect();
    for (d1, d2) in chart.canonical_pairs() {
        let hit = max_effectiveness(chart, d1, d2, attackers).value();
        if let Some(bucket) = hit.and_then(|m| buckets.get_mut(&m)) {
            bucket.push(DefenderPair::new(d1, d2));
        }
    }
    for pairs in buckets.values_mut() {
        sort_by_weakness(chart, pairs);
    }
    buckets
}

/// Per-attacker hit counts across one bucket's defenders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttackerSummary {
    pub quadruple: Vec<(TypeId, usize)>,
    pub double: Vec<(TypeId, usize)>,
}

impl AttackerSummary {
    pub fn get(&self, multiplier: Multiplier) -> &[(TypeId, usize)] {
        match multiplier {
            Multiplier::Quadruple => &self.quadruple,
            Multiplier::Double => &self.double,
            _ => &[],
        }
    }
}

/// Counts how many of `pairs` each catalog attacker hits for 4x and 2x.
/// Highest count first, ties in catalog order.
pub fn attacker_summary(chart: &TypeChart, pairs: &[DefenderPair]) -> AttackerSummary {
    let mut quad = vec![0usize; chart.len()];
    let mut double = vec![0usize; chart.len()];
    for pair in pairs {
        let breakdown = pair_breakdown(chart, *pair);
        for t in breakdown.quadruple {
            quad[t.index()] += 1;
        }
        for t in breakdown.double {
            double[t.index()] += 1;
        }
    }
    AttackerSummary {
        quadruple: ranked_counts(chart, &quad),
        double: ranked_counts(chart, &double),
    }
}

fn ranked_counts(chart: &TypeChart, counts: &[usize]) -> Vec<(TypeId, usize)> {
    let mut ranked: Vec<(TypeId, usize)> = chart
        .ids()
        .zip(counts.iter().copied())
        .filter(|(_, count)| *count > 0)
        .collect();
    ranked.sort_by(|(ta, a), (tb, b)| b.cmp(a).then(ta.cmp(tb)));
    ranked
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketEntry {
    pub pair: DefenderPair,
    pub breakdown: AttackerBreakdown,
}

impl BucketEntry {
    pub fn weakness_score(&self) -> usize {
        self.breakdown.weakness_score()
    }
}

/// One listed bucket with its explained entries and attacker summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketListing {
    pub multiplier: Multiplier,
    pub entries: Vec<BucketEntry>,
    pub summary: AttackerSummary,
}

/// Non-empty 0.25x/0.5x/1x buckets in that order. Nothing is listed
/// without a selection.
pub fn bucket_listings(chart: &TypeChart, attackers: &AttackSet) -> Vec<BucketListing> {
    if attackers.is_empty() {
        return Vec::new();
    }
    let buckets = bucket_by_multiplier(chart, attackers);
    Multiplier::RESISTED_OR_NEUTRAL
        .iter()
        .filter_map(|m| {
            let pairs = buckets.get(m)?;
            if pairs.is_empty() {
                return None;
            }
            let entries = pairs
                .iter()
                .map(|pair| BucketEntry {
                    pair: *pair,
                    breakdown: pair_breakdown(chart, *pair),
                })
                .collect();
            Some(BucketListing {
                multiplier: *m,
                entries,
                summary: attacker_summary(chart, pairs),
            })
        })
        .collect()
}

/// Count of canonical defender combinations per multiplier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Histogram {
    counts: [usize; 6],
}

impl Histogram {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn get(&self, multiplier: Multiplier) -> usize {
        self.counts[multiplier.export_index()]
    }

    pub fn record(&mut self, multiplier: Multiplier) {
        self.counts[multiplier.export_index()] += 1;
    }

    /// Counts in 4, 2, 1, 0.5, 0.25, 0 order.
    pub fn counts(&self) -> [usize; 6] {
        self.counts
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Multiplier, usize)> + '_ {
        Multiplier::EXPORT_ORDER
            .iter()
            .copied()
            .zip(self.counts.iter().copied())
    }

    pub fn to_json(&self) -> serde_json::Value {
        let buckets: serde_json::Map<String, serde_json::Value> = self
            .iter()
            .map(|(m, count)| (m.to_string(), json!(count)))
            .collect();
        json!({
            "total": self.total(),
            "buckets": buckets,
        })
    }
}

/// All-zero for an empty selection, otherwise every canonical pair lands
/// in exactly one bucket.
pub fn effectiveness_histogram(chart: &TypeChart, attackers: &AttackSet) -> Histogram {
    let mut histogram = Histogram::zero();
    if attackers.is_empty() {
        return histogram;
    }
    for (d1, d2) in chart.canonical_pairs() {
        if let Some(m) = max_effectiveness(chart, d1, d2, attackers).value() {
            histogram.record(m);
        }
    }
    histogram
}
