//! Synthetic monthly climate statistics and the derived yearly summary.

use climexa_core::{Location, Month, Season, Terrain};
use serde::{Deserialize, Serialize};

const HIGH_ALTITUDE_M: f64 = 3500.0;
const BEST_MONTH_COUNT: usize = 3;

/// Climate class used to pick a row of the normals table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClimateClass {
    /// Sites above 3500 m, whatever their terrain.
    HighAltitude,
    /// Desert terrain at or below 3500 m.
    Desert,
    /// Everything else.
    Temperate,
}

impl ClimateClass {
    /// Classify `location`; altitude wins over terrain.
    #[must_use]
    pub fn of(location: &Location) -> Self {
        if location.elevation_above(HIGH_ALTITUDE_M) {
            Self::HighAltitude
        } else if location.terrain == Terrain::Desert {
            Self::Desert
        } else {
            Self::Temperate
        }
    }

    /// Literal climate normal for this class in `season`.
    #[must_use]
    pub const fn normal(self, season: Season) -> ClimateNormal {
        let (temperature, rainfall_mm, clear_days) = match (self, season) {
            (Self::HighAltitude, Season::Winter) => ("8-12°C", 10, 25),
            (Self::HighAltitude, Season::Summer) => ("14-18°C", 90, 15),
            (Self::HighAltitude, Season::Shoulder) => ("12-16°C", 45, 20),
            (Self::Desert, Season::Winter) => ("12-18°C", 5, 28),
            (Self::Desert, Season::Summer) => ("20-26°C", 40, 22),
            (Self::Desert, Season::Shoulder) => ("16-22°C", 15, 25),
            (Self::Temperate, Season::Winter) => ("10-16°C", 20, 23),
            (Self::Temperate, Season::Summer) => ("18-24°C", 100, 16),
            (Self::Temperate, Season::Shoulder) => ("14-20°C", 55, 19),
        };
        ClimateNormal {
            temperature,
            rainfall_mm,
            clear_days,
        }
    }
}

/// One entry of the normals table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClimateNormal {
    /// Temperature range label.
    pub temperature: &'static str,
    /// Monthly rainfall in millimetres.
    pub rainfall_mm: u32,
    /// Clear days in the month.
    pub clear_days: u32,
}

/// Synthetic statistics for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// English month name.
    pub month: String,
    /// Temperature range label.
    pub temperature: String,
    /// Rainfall in millimetres.
    pub rainfall_mm: u32,
    /// Clear days in the month.
    pub clear_days: u32,
}

impl MonthlyRecord {
    fn new(month: Month, normal: ClimateNormal) -> Self {
        Self {
            month: month.name().to_owned(),
            temperature: normal.temperature.to_owned(),
            rainfall_mm: normal.rainfall_mm,
            clear_days: normal.clear_days,
        }
    }

    /// Rainfall formatted for display, e.g. `"10mm"`.
    #[must_use]
    pub fn rainfall_label(&self) -> String {
        format!("{}mm", self.rainfall_mm)
    }
}

/// Yearly figures derived from the twelve monthly records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSummary {
    /// Mean clear days per month, rounded half up.
    pub average_clear_days: u32,
    /// Sum of monthly rainfall in millimetres.
    pub total_rainfall_mm: u32,
    /// Names of the three clearest months, earliest first on ties.
    pub best_months: Vec<String>,
}

impl YearSummary {
    /// Summarise `records`.
    ///
    /// An empty slice yields zero averages and no best months.
    #[must_use]
    pub fn from_records(records: &[MonthlyRecord]) -> Self {
        let total_clear: u32 = records.iter().map(|record| record.clear_days).sum();
        let total_rainfall_mm = records.iter().map(|record| record.rainfall_mm).sum();
        let count = u32::try_from(records.len()).unwrap_or(u32::MAX);

        let mut ranked: Vec<&MonthlyRecord> = records.iter().collect();
        ranked.sort_by(|a, b| b.clear_days.cmp(&a.clear_days));
        let best_months = ranked
            .into_iter()
            .take(BEST_MONTH_COUNT)
            .map(|record| record.month.clone())
            .collect();

        Self {
            average_clear_days: rounded_mean(total_clear, count),
            total_rainfall_mm,
            best_months,
        }
    }
}

/// Half-up rounded mean; zero when `count` is zero.
fn rounded_mean(total: u32, count: u32) -> u32 {
    total
        .saturating_mul(2)
        .saturating_add(count)
        .checked_div(count.saturating_mul(2))
        .unwrap_or_default()
}

/// Twelve monthly records, January first, and their yearly summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyStatistics {
    /// Climate class the figures were taken from.
    pub class: ClimateClass,
    /// One record per calendar month.
    pub months: Vec<MonthlyRecord>,
    /// Derived yearly figures.
    pub summary: YearSummary,
}

/// Generate synthetic monthly statistics for `location`.
///
/// Rows are bucketed with [`Month::index_season`], so the winter row covers
/// June to August.
///
/// # Examples
/// ```
/// use climexa_core::{Location, Terrain};
/// use climexa_forecast::monthly_statistics;
///
/// let peak = Location::new("p", "Peak", Terrain::Mountain).with_elevation(3800.0);
/// let stats = monthly_statistics(&peak);
/// assert_eq!(stats.months.len(), 12);
/// assert_eq!(stats.summary.average_clear_days, 19);
/// assert_eq!(stats.summary.best_months, ["June", "July", "August"]);
/// ```
#[must_use]
pub fn monthly_statistics(location: &Location) -> MonthlyStatistics {
    let class = ClimateClass::of(location);
    let months: Vec<MonthlyRecord> = Month::all()
        .map(|month| MonthlyRecord::new(month, class.normal(month.index_season())))
        .collect();
    let summary = YearSummary::from_records(&months);
    log::debug!(
        "monthly statistics for {}: {:?}, {} clear days on average",
        location.id,
        class,
        summary.average_clear_days
    );
    MonthlyStatistics {
        class,
        months,
        summary,
    }
}
