//! Unit coverage for the scoring rules and the ranker.

use climexa_core::test_support::{FixedRandom, SequenceRandom};
use climexa_core::{ActivityType, Location, Month, ScoreResult, SuitabilityScorer, Terrain};
use rstest::{fixture, rstest};

use crate::{
    LocationScorer, MAX_RECOMMENDATIONS, RecommendationRanker, RecommendationRequest,
    score_location, success_rate,
};

fn month(number: u8) -> Month {
    Month::new(number).expect("valid month")
}

fn location(id: &str, terrain: Terrain, elevation: Option<f64>) -> Location {
    let mut location = Location::new(id, id.to_uppercase(), terrain);
    location.elevation = elevation;
    location
}

#[fixture]
fn catalogue() -> Vec<Location> {
    vec![
        location("plain", Terrain::Other("grassland".into()), None),
        location("peak", Terrain::Mountain, Some(4200.0)),
        location("dunes", Terrain::Desert, Some(2400.0)),
        location("gorge", Terrain::Canyon, Some(1800.0)),
        location("lookout", Terrain::Viewpoint, Some(3100.0)),
        location("ridge", Terrain::Mountain, Some(2900.0)),
    ]
}

#[rstest]
fn high_mountain_stargazing_in_summer() {
    let site = location("a", Terrain::Mountain, Some(3800.0));
    let result = score_location(&site, ActivityType::Stargazing, month(10));
    assert_eq!(result.score, 100);
    assert_eq!(
        result.reasons,
        [
            "excellent elevation for observation",
            "high elevation minimizes light pollution"
        ]
    );
    assert_eq!(result.weather_summary, "70-85% clear nights");
    assert_eq!(result.ideal_days, "new or waxing moon (days 1-10 of month)");
}

#[rstest]
#[case(3, "60-75% clear nights")]
#[case(6, "60-75% clear nights")]
#[case(1, "70-85% clear nights")]
fn observation_summary_follows_summer_flag(#[case] number: u8, #[case] expected: &str) {
    let site = location("a", Terrain::Viewpoint, None);
    let result = score_location(&site, ActivityType::Photography, month(number));
    assert_eq!(result.score, 80);
    assert_eq!(result.weather_summary, expected);
}

#[rstest]
fn desert_hiking_in_winter() {
    let site = location("a", Terrain::Desert, None);
    let result = score_location(&site, ActivityType::Hiking, month(6));
    assert_eq!(result.score, 55);
    assert_eq!(result.reasons, ["dry season with stable weather"]);
    assert_eq!(result.weather_summary, "clear days, cold nights (8-15°C)");
    assert_eq!(result.ideal_days, "any weekend of the month");
}

#[rstest]
fn desert_camping_escapes_penalty() {
    let site = location("a", Terrain::Desert, None);
    let result = score_location(&site, ActivityType::Camping, month(3));
    assert_eq!(result.score, 50);
    assert_eq!(
        result.weather_summary,
        "occasional rain possible, pleasant temperatures (18-24°C)"
    );
}

#[rstest]
fn canyon_camping_in_winter_collects_both_bonuses() {
    let site = location("a", Terrain::Canyon, None);
    let result = score_location(&site, ActivityType::Camping, month(7));
    assert_eq!(result.score, 90);
    assert_eq!(
        result.reasons,
        ["ideal terrain for the activity", "dry season with stable weather"]
    );
}

#[rstest]
fn desert_photography_combines_bonus_and_penalty() {
    let site = location("a", Terrain::Desert, Some(3500.0));
    let result = score_location(&site, ActivityType::Photography, month(11));
    assert_eq!(result.score, 60);
    assert_eq!(result.reasons, ["high elevation minimizes light pollution"]);
}

#[rstest]
fn very_high_hiking_warns_about_acclimatization() {
    let site = location("a", Terrain::Mountain, Some(4500.0));
    let result = score_location(&site, ActivityType::Hiking, month(8));
    assert_eq!(result.score, 75);
    assert_eq!(
        result.reasons.last().map(String::as_str),
        Some("consider altitude acclimatization")
    );
}

#[rstest]
fn acclimatization_warning_is_hiking_only() {
    let site = location("a", Terrain::Mountain, Some(4500.0));
    let result = score_location(&site, ActivityType::Camping, month(8));
    assert!(
        !result
            .reasons
            .iter()
            .any(|reason| reason.contains("acclimatization"))
    );
}

#[rstest]
#[case(ActivityType::Picnic)]
#[case(ActivityType::Cycling)]
#[case(ActivityType::Climbing)]
#[case(ActivityType::Other)]
fn unlisted_activities_receive_no_guidance(#[case] activity: ActivityType) {
    let site = location("a", Terrain::Mountain, Some(4800.0));
    let result = score_location(&site, activity, month(6));
    assert_eq!(result, ScoreResult::baseline());
    assert!(!result.has_guidance());
}

#[rstest]
fn unlisted_activity_in_desert_is_penalised() {
    let site = location("a", Terrain::Desert, None);
    let result = score_location(&site, ActivityType::Cycling, month(6));
    assert_eq!(result.score, 40);
    assert!(result.reasons.is_empty());
}

#[rstest]
fn terrain_matching_is_case_sensitive() {
    let site = location("a", Terrain::from("Mountain"), None);
    let result = score_location(&site, ActivityType::Stargazing, month(4));
    assert_eq!(result.score, 50);
}

#[rstest]
#[case(0.0, 60, 60)]
#[case(0.55, 60, 65)]
#[case(0.99, 90, 95)]
#[case(0.0, 100, 95)]
#[case(0.99, 40, 49)]
fn success_rate_jitters_and_caps(#[case] unit: f64, #[case] score: i32, #[case] expected: i32) {
    assert_eq!(success_rate(score, &mut FixedRandom::new(unit)), expected);
}

#[rstest]
fn ranking_sorts_truncates_and_flags_best(catalogue: Vec<Location>) {
    let ranked = RecommendationRanker::default().rank(
        ActivityType::Stargazing,
        month(12),
        &catalogue,
        &mut FixedRandom::zero(),
    );
    let ids: Vec<_> = ranked.iter().map(|rec| rec.location.id.as_str()).collect();
    // peak 100, lookout 100, ridge 80, then plain and gorge tie at 50.
    assert_eq!(ids, ["peak", "lookout", "ridge", "plain"]);
    assert_eq!(ranked.len(), MAX_RECOMMENDATIONS);
    assert!(ranked.first().is_some_and(|rec| rec.best_option));
    assert!(ranked.iter().skip(1).all(|rec| !rec.best_option));
}

#[rstest]
fn success_rate_draws_follow_input_order(catalogue: Vec<Location>) {
    let mut random = SequenceRandom::new([0.0, 0.9, 0.0, 0.0, 0.3, 0.0]);
    let ranked = RecommendationRanker::default().rank(
        ActivityType::Stargazing,
        month(12),
        &catalogue,
        &mut random,
    );
    assert_eq!(random.draws(), catalogue.len());
    // peak was the second location and drew 0.9.
    assert_eq!(
        ranked.first().map(|rec| (rec.location.id.as_str(), rec.success_rate)),
        Some(("peak", 95))
    );
    // lookout was the fifth location and drew 0.3 on a score of 100.
    assert_eq!(ranked.get(1).map(|rec| rec.success_rate), Some(95));
    // ridge drew 0.0 on a score of 80.
    assert_eq!(ranked.get(2).map(|rec| rec.success_rate), Some(80));
}

#[rstest]
#[case(None, Some(6))]
#[case(Some(ActivityType::Hiking), None)]
#[case(None, None)]
fn unselected_request_yields_nothing(
    catalogue: Vec<Location>,
    #[case] activity: Option<ActivityType>,
    #[case] number: Option<u8>,
) {
    let request = RecommendationRequest {
        activity,
        month: number.map(month),
    };
    let ranked =
        RecommendationRanker::default().recommend(&request, &catalogue, &mut FixedRandom::zero());
    assert!(ranked.is_empty());
}

#[rstest]
fn empty_catalogue_yields_nothing() {
    let ranked = RecommendationRanker::default().rank(
        ActivityType::Hiking,
        month(1),
        &[],
        &mut FixedRandom::zero(),
    );
    assert!(ranked.is_empty());
}

struct ConstantScorer;

impl SuitabilityScorer for ConstantScorer {
    fn score(&self, _location: &Location, _activity: ActivityType, _month: Month) -> ScoreResult {
        ScoreResult::baseline()
    }
}

#[rstest]
fn equal_scores_preserve_input_order(catalogue: Vec<Location>) {
    let ranker = RecommendationRanker::new(ConstantScorer);
    let ranked = ranker.rank(
        ActivityType::Picnic,
        month(2),
        &catalogue,
        &mut FixedRandom::zero(),
    );
    let ids: Vec<_> = ranked.iter().map(|rec| rec.location.id.as_str()).collect();
    assert_eq!(ids, ["plain", "peak", "dunes", "gorge"]);
}

#[rstest]
fn location_scorer_delegates_to_rules() {
    let site = location("a", Terrain::Canyon, None);
    let via_trait = LocationScorer.score(&site, ActivityType::Hiking, month(5));
    assert_eq!(via_trait, score_location(&site, ActivityType::Hiking, month(5)));
}

#[rstest]
fn recommendation_serialises_flat_result(catalogue: Vec<Location>) {
    let ranked = RecommendationRanker::default().rank(
        ActivityType::Camping,
        month(5),
        &catalogue,
        &mut FixedRandom::zero(),
    );
    let json = serde_json::to_value(ranked.first().expect("one recommendation"))
        .expect("serialise recommendation");
    assert!(json.get("score").is_some());
    assert!(json.get("reasons").is_some());
    assert_eq!(json.get("best_option"), Some(&serde_json::Value::Bool(true)));
}
