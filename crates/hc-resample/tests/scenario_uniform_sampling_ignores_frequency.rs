use hc_resample::{SamplingMode, ShiftSet};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Uniform-over-distinct sampling gives every distinct shift probability
/// `1/|S|` even when one value dominated history: shifts pass through a set
/// before sampling, so multiplicity carries no weight in this mode.
#[test]
fn scenario_uniform_sampling_ignores_historical_frequency() {
    // 1.0 occurred five times historically, -0.5 once.
    let set = ShiftSet::from_values([1.0, 1.0, 1.0, 1.0, 1.0, -0.5]);
    assert_eq!(set.len(), 2);

    let mut rng = StdRng::seed_from_u64(20_240_101);
    let draws = 50_000;
    let mut ones = 0usize;
    for _ in 0..draws {
        let s = set.sample(SamplingMode::UniformOverDistinct, &mut rng).unwrap();
        assert!(set.contains(s), "sampled value {s} not in the set");
        if s == 1.0 {
            ones += 1;
        }
    }

    let frequency = ones as f64 / draws as f64;
    assert!(
        (frequency - 0.5).abs() < 0.01,
        "uniform frequency {frequency} should approach 1/2, not 5/6"
    );
}

#[test]
fn scenario_weighted_mode_restores_historical_frequency() {
    let set = ShiftSet::from_values([1.0, 1.0, 1.0, 1.0, 1.0, -0.5]);

    let mut rng = StdRng::seed_from_u64(20_240_102);
    let draws = 50_000;
    let ones = (0..draws)
        .filter(|_| set.sample(SamplingMode::WeightedByFrequency, &mut rng).unwrap() == 1.0)
        .count();

    let frequency = ones as f64 / draws as f64;
    assert!(
        (frequency - 5.0 / 6.0).abs() < 0.01,
        "weighted frequency {frequency} should approach 5/6"
    );
}
