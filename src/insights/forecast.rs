//! Linear-trend mood forecast

use crate::mood::series::trend_slope;
use crate::mood::{MoodRecord, NEUTRAL_LEVEL};

use super::models::{ForecastResult, TrendKind};

/// Minimum number of records for a real forecast
pub const MIN_FORECAST_RECORDS: usize = 3;
/// Number of index steps extrapolated ahead
pub const HORIZON_STEPS: f64 = 3.0;
pub const HORIZON_LABEL: &str = "next 3 days";
pub const INSUFFICIENT_LABEL: &str = "insufficient data";

const BASE_CONFIDENCE: f64 = 0.5;
const CONFIDENCE_PER_RECORD: f64 = 0.02;
const MAX_CONFIDENCE: f64 = 0.9;
const FALLBACK_CONFIDENCE: f64 = 0.3;
/// Slope magnitude below which the trend is stable
const TREND_THRESHOLD: f64 = 0.1;

pub fn trend_kind(slope: f64) -> TrendKind {
    if slope > TREND_THRESHOLD {
        TrendKind::Improving
    } else if slope < -TREND_THRESHOLD {
        TrendKind::Declining
    } else {
        TrendKind::Stable
    }
}

fn insufficient() -> ForecastResult {
    ForecastResult {
        predicted_level: NEUTRAL_LEVEL,
        confidence: FALLBACK_CONFIDENCE,
        horizon_label: INSUFFICIENT_LABEL.to_string(),
        trend_kind: TrendKind::Stable,
    }
}

/// Extrapolate the regression slope three steps past the most recent level
pub fn forecast(records: &[MoodRecord]) -> ForecastResult {
    if records.len() < MIN_FORECAST_RECORDS {
        return insufficient();
    }
    let Some(latest) = records.iter().max_by_key(|r| r.date) else {
        return insufficient();
    };

    let slope = trend_slope(records);
    let current = latest.level() as f64;
    let predicted_level = (current + slope * HORIZON_STEPS).clamp(1.0, 5.0);
    let confidence =
        (BASE_CONFIDENCE + records.len() as f64 * CONFIDENCE_PER_RECORD).min(MAX_CONFIDENCE);

    log::debug!(
        "Forecast from {} records: slope {:.3}, predicted {:.2}",
        records.len(),
        slope,
        predicted_level
    );

    ForecastResult {
        predicted_level,
        confidence,
        horizon_label: HORIZON_LABEL.to_string(),
        trend_kind: trend_kind(slope),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn series(levels: &[i64]) -> Vec<MoodRecord> {
        let start = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        levels
            .iter()
            .enumerate()
            .map(|(i, level)| MoodRecord::new(start + Duration::days(i as i64), *level, None))
            .collect()
    }

    #[test]
    fn test_insufficient_data() {
        let result = forecast(&series(&[5, 5]));
        assert_eq!(result.predicted_level, 3.0);
        assert_eq!(result.confidence, 0.3);
        assert_eq!(result.horizon_label, "insufficient data");
        assert_eq!(result.trend_kind, TrendKind::Stable);

        assert_eq!(forecast(&[]).horizon_label, "insufficient data");
    }

    #[test]
    fn test_improving_forecast_is_clamped() {
        let result = forecast(&series(&[1, 2, 3, 4, 5]));
        // 5 + 1.0 * 3 = 8, clamped
        assert_eq!(result.predicted_level, 5.0);
        assert_eq!(result.trend_kind, TrendKind::Improving);
        assert!((result.confidence - 0.6).abs() < 1e-12);
        assert_eq!(result.horizon_label, "next 3 days");
    }

    #[test]
    fn test_uses_most_recent_record_regardless_of_order() {
        let mut records = series(&[5, 4, 3, 2]);
        records.reverse();
        let result = forecast(&records);
        // latest level 2, slope -1.0 => -1, clamped to 1
        assert_eq!(result.predicted_level, 1.0);
        assert_eq!(result.trend_kind, TrendKind::Declining);
    }

    #[test]
    fn test_stable_forecast() {
        let result = forecast(&series(&[3, 4, 3, 4, 3, 4]));
        assert_eq!(result.trend_kind, TrendKind::Stable);
        assert!((1.0..=5.0).contains(&result.predicted_level));
    }

    #[test]
    fn test_confidence_caps() {
        let levels: Vec<i64> = (0..40).map(|i| if i % 2 == 0 { 3 } else { 4 }).collect();
        assert_eq!(forecast(&series(&levels)).confidence, 0.9);
    }
}
