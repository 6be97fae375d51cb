//! Property-based tests for location scoring and ranking.
//!
//! # Invariants tested
//!
//! - **Trail isolation:** hiking and camping never receive observation bonuses.
//! - **Desert penalty:** a desert costs exactly ten points for every activity
//!   except camping.
//! - **Zero jitter:** with a source fixed at zero the success rate equals
//!   `min(95, score)`.
//! - **Ranking order:** output is sorted by score, stable for ties, and no
//!   longer than four entries or the input.

use climexa_core::test_support::FixedRandom;
use climexa_core::{ActivityType, Location, Month, Terrain};
use climexa_scorer::{MAX_RECOMMENDATIONS, RecommendationRanker, score_location, success_rate};
use proptest::prelude::*;

fn terrain_strategy() -> impl Strategy<Value = Terrain> {
    prop_oneof![
        Just(Terrain::Mountain),
        Just(Terrain::Viewpoint),
        Just(Terrain::Desert),
        Just(Terrain::Canyon),
        "[a-z]{1,8}".prop_map(Terrain::from),
    ]
}

fn unrecognised_terrain_strategy() -> impl Strategy<Value = Terrain> {
    "[a-z]{1,8}"
        .prop_map(Terrain::from)
        .prop_filter("terrain must be unrecognised", |terrain| {
            matches!(terrain, Terrain::Other(_))
        })
}

fn activity_strategy() -> impl Strategy<Value = ActivityType> {
    prop::sample::select(ActivityType::ALL.to_vec())
}

fn non_camping_activity_strategy() -> impl Strategy<Value = ActivityType> {
    prop::sample::select(
        ActivityType::ALL
            .into_iter()
            .filter(|activity| *activity != ActivityType::Camping)
            .collect::<Vec<_>>(),
    )
}

fn month_strategy() -> impl Strategy<Value = Month> {
    prop::sample::select(Month::all().collect::<Vec<_>>())
}

fn elevation_strategy() -> impl Strategy<Value = Option<f64>> {
    prop::option::of(0.0_f64..6000.0)
}

fn location_strategy() -> impl Strategy<Value = Location> {
    (terrain_strategy(), elevation_strategy()).prop_map(|(terrain, elevation)| {
        let mut location = Location::new("id", "name", terrain);
        location.elevation = elevation;
        location
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: trail activities never collect observation reasons.
    #[test]
    fn trail_activities_skip_observation_rules(
        location in location_strategy(),
        hiking in any::<bool>(),
        month in month_strategy(),
    ) {
        let activity = if hiking { ActivityType::Hiking } else { ActivityType::Camping };
        let result = score_location(&location, activity, month);
        let observed = result.reasons.iter().any(|reason| {
            reason == "excellent elevation for observation"
                || reason == "high elevation minimizes light pollution"
        });
        prop_assert!(!observed, "unexpected reasons: {:?}", result.reasons);
    }

    /// Property: a desert costs exactly ten points unless camping.
    #[test]
    fn desert_penalty_is_exactly_ten(
        other in unrecognised_terrain_strategy(),
        elevation in elevation_strategy(),
        activity in non_camping_activity_strategy(),
        month in month_strategy(),
    ) {
        let mut desert = Location::new("d", "Desert", Terrain::Desert);
        desert.elevation = elevation;
        let mut plain = Location::new("p", "Plain", other);
        plain.elevation = elevation;

        let desert_score = score_location(&desert, activity, month).score;
        let plain_score = score_location(&plain, activity, month).score;
        prop_assert_eq!(desert_score, plain_score - 10);
    }

    /// Property: a zero draw leaves the score untouched apart from the cap.
    #[test]
    fn zero_jitter_success_rate_is_capped_score(
        location in location_strategy(),
        activity in activity_strategy(),
        month in month_strategy(),
    ) {
        let score = score_location(&location, activity, month).score;
        prop_assert_eq!(success_rate(score, &mut FixedRandom::zero()), score.min(95));
    }

    /// Property: rankings are sorted, stable and bounded.
    #[test]
    fn ranking_is_sorted_stable_and_bounded(
        locations in prop::collection::vec(location_strategy(), 0..12),
        activity in activity_strategy(),
        month in month_strategy(),
        unit in 0.0_f64..1.0,
    ) {
        let catalogue: Vec<Location> = locations
            .into_iter()
            .enumerate()
            .map(|(index, mut location)| {
                location.id = index.to_string();
                location
            })
            .collect();
        let ranked = RecommendationRanker::default().rank(
            activity,
            month,
            &catalogue,
            &mut FixedRandom::new(unit),
        );

        prop_assert!(ranked.len() <= MAX_RECOMMENDATIONS);
        prop_assert!(ranked.len() <= catalogue.len());
        for pair in ranked.windows(2) {
            let [first, second] = pair else { continue };
            prop_assert!(first.result.score >= second.result.score);
            if first.result.score == second.result.score {
                let first_index: usize = first.location.id.parse().unwrap_or_default();
                let second_index: usize = second.location.id.parse().unwrap_or_default();
                prop_assert!(first_index < second_index);
            }
        }
        for rec in &ranked {
            prop_assert!(rec.success_rate <= 95);
            prop_assert!(rec.success_rate >= rec.result.score.min(95));
        }
    }
}
