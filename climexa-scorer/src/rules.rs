//! The location scoring rule table.

use climexa_core::{ActivityType, Location, Month, ScoreResult, SuitabilityScorer, Terrain};

const OUTLOOK_BONUS: i32 = 30;
const DARK_SKY_BONUS: i32 = 20;
const TRAIL_TERRAIN_BONUS: i32 = 25;
const DRY_SEASON_BONUS: i32 = 15;
const DESERT_PENALTY: i32 = 10;

const DARK_SKY_ELEVATION_M: f64 = 3000.0;
const ACCLIMATISATION_ELEVATION_M: f64 = 4000.0;

const REASON_OUTLOOK: &str = "excellent elevation for observation";
const REASON_DARK_SKY: &str = "high elevation minimizes light pollution";
const REASON_TRAIL_TERRAIN: &str = "ideal terrain for the activity";
const REASON_DRY_SEASON: &str = "dry season with stable weather";
const REASON_ACCLIMATISATION: &str = "consider altitude acclimatization";

const DAYS_MOON_PHASE: &str = "new or waxing moon (days 1-10 of month)";
const DAYS_ANY_WEEKEND: &str = "any weekend of the month";

const NIGHTS_SUMMER: &str = "70-85% clear nights";
const NIGHTS_OTHERWISE: &str = "60-75% clear nights";
const TRAIL_WINTER: &str = "clear days, cold nights (8-15°C)";
const TRAIL_OTHERWISE: &str = "occasional rain possible, pleasant temperatures (18-24°C)";

/// Rule-based [`SuitabilityScorer`].
///
/// Observation activities (stargazing, photography) reward elevated
/// outlooks and high sites; trail activities (hiking, camping) reward
/// mountain and canyon terrain and the dry winter months. Deserts cost ten
/// points for everything except camping. Other activities keep the baseline
/// and receive no day or weather guidance.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocationScorer;

impl SuitabilityScorer for LocationScorer {
    fn score(&self, location: &Location, activity: ActivityType, month: Month) -> ScoreResult {
        score_location(location, activity, month)
    }
}

/// Score `location` for `activity` in `month`.
///
/// # Examples
/// ```
/// use climexa_core::{ActivityType, Location, Month, Terrain};
/// use climexa_scorer::score_location;
///
/// let location = Location::new("a", "Atacama", Terrain::Desert);
/// let june = Month::new(6).expect("valid month");
/// let result = score_location(&location, ActivityType::Hiking, june);
/// assert_eq!(result.score, 55);
/// ```
#[must_use]
pub fn score_location(location: &Location, activity: ActivityType, month: Month) -> ScoreResult {
    let mut result = ScoreResult::baseline();

    if activity.is_observation() {
        apply_observation_rules(&mut result, location, month);
    }
    if activity.is_trail() {
        apply_trail_rules(&mut result, location, month);
    }
    if location.terrain == Terrain::Desert && activity != ActivityType::Camping {
        result.score -= DESERT_PENALTY;
    }
    if activity == ActivityType::Hiking && location.elevation_above(ACCLIMATISATION_ELEVATION_M) {
        result.reasons.push(REASON_ACCLIMATISATION.to_owned());
    }

    result
}

fn apply_observation_rules(result: &mut ScoreResult, location: &Location, month: Month) {
    if location.terrain.is_elevated_outlook() {
        result.adjust(OUTLOOK_BONUS, REASON_OUTLOOK);
    }
    if location.elevation_above(DARK_SKY_ELEVATION_M) {
        result.adjust(DARK_SKY_BONUS, REASON_DARK_SKY);
    }
    DAYS_MOON_PHASE.clone_into(&mut result.ideal_days);
    let nights = if month.is_summer() {
        NIGHTS_SUMMER
    } else {
        NIGHTS_OTHERWISE
    };
    nights.clone_into(&mut result.weather_summary);
}

fn apply_trail_rules(result: &mut ScoreResult, location: &Location, month: Month) {
    if location.terrain.is_trail_terrain() {
        result.adjust(TRAIL_TERRAIN_BONUS, REASON_TRAIL_TERRAIN);
    }
    if month.is_winter() {
        result.adjust(DRY_SEASON_BONUS, REASON_DRY_SEASON);
        TRAIL_WINTER.clone_into(&mut result.weather_summary);
    } else {
        TRAIL_OTHERWISE.clone_into(&mut result.weather_summary);
    }
    DAYS_ANY_WEEKEND.clone_into(&mut result.ideal_days);
}
