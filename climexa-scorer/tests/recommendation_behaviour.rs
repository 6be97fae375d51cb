#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for recommendation ranking.

use std::cell::RefCell;

use climexa_core::test_support::FixedRandom;
use climexa_core::{ActivityType, Location, Month, Terrain};
use climexa_scorer::{Recommendation, RecommendationRanker, RecommendationRequest};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Aggregate fixtures shared across the BDD scenarios.
pub struct RankingContext {
    locations: RefCell<Vec<Location>>,
    ranked: RefCell<Vec<Recommendation>>,
}

#[fixture]
/// Build a fresh `RankingContext` for each scenario run.
pub fn context() -> RankingContext {
    RankingContext {
        locations: RefCell::new(Vec::new()),
        ranked: RefCell::new(Vec::new()),
    }
}

fn recommend(context: &RankingContext, activity: ActivityType, month: Option<u8>) {
    let request = RecommendationRequest {
        activity: Some(activity),
        month: month.map(|number| Month::new(number).expect("valid month")),
    };
    let ranked = RecommendationRanker::default().recommend(
        &request,
        &context.locations.borrow(),
        &mut FixedRandom::zero(),
    );
    *context.ranked.borrow_mut() = ranked;
}

#[given("a catalogue of Andean locations")]
fn andean_catalogue(context: &RankingContext) {
    *context.locations.borrow_mut() = vec![
        Location::new("salar", "Salar de Tara", Terrain::Desert),
        Location::new("mirador", "Mirador del Valle", Terrain::Viewpoint)
            .with_elevation(2600.0),
        Location::new("chajnantor", "Llano de Chajnantor", Terrain::Mountain)
            .with_elevation(5000.0),
        Location::new("quebrada", "Quebrada de Jere", Terrain::Canyon).with_elevation(2500.0),
    ];
}

#[when("I ask for stargazing recommendations in October")]
fn stargazing_in_october(context: &RankingContext) {
    recommend(context, ActivityType::Stargazing, Some(10));
}

#[when("I ask for hiking recommendations in June")]
fn hiking_in_june(context: &RankingContext) {
    recommend(context, ActivityType::Hiking, Some(6));
}

#[when("I ask for hiking recommendations without choosing a month")]
fn hiking_without_month(context: &RankingContext) {
    recommend(context, ActivityType::Hiking, None);
}

#[then("the best option is the high mountain observatory with a score of 100")]
fn assert_observatory_first(context: &RankingContext) {
    let ranked = context.ranked.borrow();
    let best = ranked.first().expect("at least one recommendation");
    assert_eq!(best.location.id, "chajnantor");
    assert_eq!(best.result.score, 100);
    assert!(best.best_option);
}

#[then("the salt flat scores 55")]
fn assert_salt_flat(context: &RankingContext) {
    let ranked = context.ranked.borrow();
    let salar = ranked
        .iter()
        .find(|rec| rec.location.id == "salar")
        .expect("salt flat should be ranked");
    assert_eq!(salar.result.score, 55);
}

#[then("no recommendations are returned")]
fn assert_empty(context: &RankingContext) {
    assert!(context.ranked.borrow().is_empty());
}

#[scenario(path = "tests/features/recommendation.feature", index = 0)]
fn stargazing_prefers_high_mountains(context: RankingContext) {
    let _ = context;
}

#[scenario(path = "tests/features/recommendation.feature", index = 1)]
fn deserts_penalised_for_hiking(context: RankingContext) {
    let _ = context;
}

#[scenario(path = "tests/features/recommendation.feature", index = 2)]
fn missing_month_yields_nothing(context: RankingContext) {
    let _ = context;
}
