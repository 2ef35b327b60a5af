use pokemon_type_coverage::chart::{TypeChart, TypeId};
use pokemon_type_coverage::engine::{
    attacker_breakdown, attacker_summary, bucket_by_multiplier, bucket_listings, coverage_matrix,
    effectiveness_histogram, max_effectiveness, weakness_score, DefenderPair,
};
use pokemon_type_coverage::selection::AttackSet;
use pokemon_type_coverage::{Coverage, Multiplier};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// Water beats Fire, Fire beats Grass, Grass beats Water; everything else neutral.
fn make_triangle_chart() -> TypeChart {
    TypeChart::from_json(
        r#"{
            "types": ["Fire", "Water", "Grass"],
            "effectiveness": {
                "Fire": { "Water": 2 },
                "Water": { "Grass": 2 },
                "Grass": { "Fire": 2 }
            }
        }"#,
    )
    .expect("triangle chart")
}

fn make_set(chart: &TypeChart, names: &[&str]) -> AttackSet {
    AttackSet::from_names(chart, names).expect("known type names")
}

fn id(chart: &TypeChart, name: &str) -> TypeId {
    chart.resolve(name).expect("known type name")
}

fn random_set(chart: &TypeChart, rng: &mut SmallRng) -> AttackSet {
    let size = rng.gen_range(1..=4);
    (0..size)
        .map(|_| {
            let idx = rng.gen_range(0..chart.len());
            chart.ids().nth(idx).expect("index in range")
        })
        .collect()
}

#[test]
fn triangle_chart_water_scenario() {
    let chart = make_triangle_chart();
    let water = make_set(&chart, &["Water"]);
    let fire = id(&chart, "Fire");
    let grass = id(&chart, "Grass");

    assert_eq!(
        max_effectiveness(&chart, fire, fire, &water),
        Coverage::Value(Multiplier::Double)
    );
    assert_eq!(
        max_effectiveness(&chart, grass, grass, &water),
        Coverage::Value(Multiplier::Neutral)
    );

    let histogram = effectiveness_histogram(&chart, &water);
    assert_eq!(histogram.get(Multiplier::Double), 3);
    assert_eq!(histogram.get(Multiplier::Neutral), 3);
    assert_eq!(histogram.total(), 6);

    let buckets = bucket_by_multiplier(&chart, &water);
    let neutral = &buckets[&Multiplier::Neutral];
    assert_eq!(neutral.len(), 3);
    assert!(neutral.iter().all(|pair| pair.first() != fire));
}

#[test]
fn empty_selection_is_not_applicable() {
    let chart = TypeChart::standard();
    let none = AttackSet::new();
    for (d1, d2) in chart.canonical_pairs() {
        assert_eq!(max_effectiveness(&chart, d1, d2, &none), Coverage::NotApplicable);
    }
    let histogram = effectiveness_histogram(&chart, &none);
    assert_eq!(histogram.counts(), [0; 6]);
    assert!(bucket_listings(&chart, &none).is_empty());
    let matrix = coverage_matrix(&chart, &none);
    assert!(matrix
        .iter(&chart)
        .all(|(_, c)| c == Coverage::NotApplicable));
}

#[test]
fn histogram_partitions_every_canonical_pair() {
    let chart = TypeChart::standard();
    let expected = chart.len() * (chart.len() - 1) / 2 + chart.len();
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..50 {
        let set = random_set(&chart, &mut rng);
        assert_eq!(effectiveness_histogram(&chart, &set).total(), expected);
    }
}

#[test]
fn combined_multiplier_is_symmetric() {
    let chart = make_triangle_chart();
    let set = make_set(&chart, &["Fire", "Grass"]);
    for d1 in chart.ids() {
        for d2 in chart.ids() {
            assert_eq!(
                max_effectiveness(&chart, d1, d2, &set),
                max_effectiveness(&chart, d2, d1, &set)
            );
        }
    }

    let chart = TypeChart::standard();
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..20 {
        let set = random_set(&chart, &mut rng);
        let matrix = coverage_matrix(&chart, &set);
        for d1 in chart.ids() {
            for d2 in chart.ids() {
                let direct = max_effectiveness(&chart, d1, d2, &set);
                assert_eq!(direct, max_effectiveness(&chart, d2, d1, &set));
                assert_eq!(matrix.get(d1, d2), direct);
            }
        }
    }
}

#[test]
fn single_type_defender_is_not_squared() {
    let chart = TypeChart::standard();
    let mut rng = SmallRng::seed_from_u64(3);
    for _ in 0..20 {
        let set = random_set(&chart, &mut rng);
        for d in chart.ids() {
            let expected = set.iter().map(|a| chart.effectiveness(d, a)).max();
            assert_eq!(max_effectiveness(&chart, d, d, &set).value(), expected);
        }
    }
}

#[test]
fn dual_weakness_reaches_four() {
    let chart = TypeChart::standard();
    let ice = make_set(&chart, &["Ice"]);
    let dragon = id(&chart, "Dragon");
    let flying = id(&chart, "Flying");
    assert_eq!(
        max_effectiveness(&chart, dragon, flying, &ice),
        Coverage::Value(Multiplier::Quadruple)
    );

    let normal = make_set(&chart, &["Normal"]);
    let rock = id(&chart, "Rock");
    let steel = id(&chart, "Steel");
    let ghost = id(&chart, "Ghost");
    assert_eq!(
        max_effectiveness(&chart, rock, steel, &normal),
        Coverage::Value(Multiplier::Quarter)
    );
    assert_eq!(
        max_effectiveness(&chart, ghost, rock, &normal),
        Coverage::Value(Multiplier::Immune)
    );
}

#[test]
fn matrix_holds_only_canonical_pairs() {
    let chart = TypeChart::standard();
    let set = make_set(&chart, &["Fire", "Water"]);
    let matrix = coverage_matrix(&chart, &set);
    assert_eq!(matrix.len(), 18 * 17 / 2 + 18);
    assert_eq!(matrix.size(), 18);
}

#[test]
fn breakdown_lists_catalog_attackers_in_order() {
    let chart = TypeChart::standard();
    let grass = id(&chart, "Grass");
    let flying = id(&chart, "Flying");
    let breakdown = attacker_breakdown(&chart, grass, Some(flying));
    let names = |types: &[TypeId]| -> Vec<String> {
        types.iter().map(|t| chart.name(*t).to_string()).collect()
    };
    assert_eq!(names(&breakdown.quadruple), vec!["Ice"]);
    assert_eq!(names(&breakdown.double), vec!["Fire", "Poison", "Flying", "Rock"]);
    assert_eq!(breakdown.weakness_score(), 6);

    let normal = id(&chart, "Normal");
    let single = attacker_breakdown(&chart, normal, None);
    assert!(single.quadruple.is_empty());
    assert_eq!(names(&single.double), vec!["Fighting"]);
    assert_eq!(attacker_breakdown(&chart, normal, Some(normal)), single);
}

#[test]
fn breakdown_ignores_selection() {
    let chart = TypeChart::standard();
    let grass = id(&chart, "Grass");
    let flying = id(&chart, "Flying");
    let pair = DefenderPair::new(flying, grass);
    assert_eq!(weakness_score(&chart, pair), 6);
    let listings = bucket_listings(&chart, &make_set(&chart, &["Normal"]));
    let entry = listings
        .iter()
        .flat_map(|l| l.entries.iter())
        .find(|e| e.pair == pair)
        .expect("Grass/Flying takes neutral Normal damage");
    assert_eq!(entry.weakness_score(), 6);
}

#[test]
fn buckets_sorted_by_weakness_then_canonical_order() {
    let chart = TypeChart::standard();
    let set = make_set(&chart, &["Normal", "Fire"]);
    let buckets = bucket_by_multiplier(&chart, &set);
    assert_eq!(buckets.len(), 3);
    for pairs in buckets.values() {
        for window in pairs.windows(2) {
            let (a, b) = (window[0], window[1]);
            let (sa, sb) = (weakness_score(&chart, a), weakness_score(&chart, b));
            assert!(sa >= sb, "{} before {}", a.label(&chart), b.label(&chart));
            if sa == sb {
                assert!(a < b);
            }
        }
    }
}

#[test]
fn buckets_agree_with_histogram() {
    let chart = TypeChart::standard();
    let mut rng = SmallRng::seed_from_u64(11);
    for _ in 0..20 {
        let set = random_set(&chart, &mut rng);
        let histogram = effectiveness_histogram(&chart, &set);
        let buckets = bucket_by_multiplier(&chart, &set);
        for m in Multiplier::RESISTED_OR_NEUTRAL {
            assert_eq!(buckets[&m].len(), histogram.get(m));
        }
    }
}

#[test]
fn single_and_dual_entries_stay_distinct() {
    let chart = TypeChart::standard();
    let buckets = bucket_by_multiplier(&chart, &make_set(&chart, &["Normal"]));
    let quarter = &buckets[&Multiplier::Quarter];
    let rock = id(&chart, "Rock");
    let steel = id(&chart, "Steel");
    assert_eq!(quarter, &vec![DefenderPair::Dual(rock, steel)]);
    let half = &buckets[&Multiplier::Half];
    assert!(half.contains(&DefenderPair::Single(rock)));
    assert!(half.contains(&DefenderPair::Single(steel)));
}

#[test]
fn summary_counts_and_ranks_attackers() {
    let chart = TypeChart::standard();
    let pairs = vec![
        DefenderPair::Single(id(&chart, "Normal")),
        DefenderPair::new(id(&chart, "Grass"), id(&chart, "Flying")),
        DefenderPair::Single(id(&chart, "Ice")),
    ];
    let summary = attacker_summary(&chart, &pairs);
    let named: Vec<(&str, usize)> = summary
        .double
        .iter()
        .map(|(t, c)| (chart.name(*t), *c))
        .collect();
    assert_eq!(
        named,
        vec![
            ("Fire", 2),
            ("Fighting", 2),
            ("Rock", 2),
            ("Poison", 1),
            ("Flying", 1),
            ("Steel", 1),
        ]
    );
    assert_eq!(summary.quadruple, vec![(id(&chart, "Ice"), 1)]);
}

#[test]
fn listings_skip_empty_buckets_in_display_order() {
    let chart = TypeChart::standard();
    let listings = bucket_listings(&chart, &make_set(&chart, &["Normal"]));
    let order: Vec<Multiplier> = listings.iter().map(|l| l.multiplier).collect();
    assert_eq!(
        order,
        vec![Multiplier::Quarter, Multiplier::Half, Multiplier::Neutral]
    );

    let triangle = make_triangle_chart();
    let listings = bucket_listings(&triangle, &make_set(&triangle, &["Water"]));
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].multiplier, Multiplier::Neutral);
    assert_eq!(listings[0].entries.len(), 3);
}
