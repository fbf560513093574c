//! Collapses 3-hour forecast samples into daily summaries.
//!
//! Days are UTC calendar days. Each day keeps the min and max temperature of
//! its samples, while icon and description come from the first sample seen for
//! that day. Only the first [`FORECAST_DAYS`] days are returned.

use std::collections::HashMap;

use crate::constants::{FORECAST_DAYS, SECONDS_PER_DAY};
use crate::models::{DailySummary, ForecastSample};

/// UTC calendar day, counted in days since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayKey(i64);

impl DayKey {
    /// Unix timestamp of this day's UTC midnight
    pub fn start_timestamp(&self) -> i64 {
        self.0.saturating_mul(SECONDS_PER_DAY)
    }
}

/// Truncates a timestamp to its UTC calendar day
pub fn date_key_of(timestamp: i64) -> DayKey {
    DayKey(timestamp.div_euclid(SECONDS_PER_DAY))
}

struct Bucket {
    day: DayKey,
    min: f64,
    max: f64,
    icon: String,
    description: String,
    count: usize,
}

/// Groups `samples` by UTC day in first-seen order and keeps the first five days
pub fn aggregate(samples: &[ForecastSample]) -> Vec<DailySummary> {
    let mut buckets: Vec<Bucket> = Vec::new();
    let mut index: HashMap<DayKey, usize> = HashMap::new();

    for sample in samples {
        let day = date_key_of(sample.timestamp);
        let temp = sample.temperature;

        match index.get(&day).copied() {
            Some(i) => {
                let bucket = &mut buckets[i];
                bucket.min = bucket.min.min(temp);
                bucket.max = bucket.max.max(temp);
                bucket.count += 1;
            }
            None => {
                index.insert(day, buckets.len());
                buckets.push(Bucket {
                    day,
                    min: temp,
                    max: temp,
                    icon: sample.condition_icon.clone(),
                    description: sample.condition_description.clone(),
                    count: 1,
                });
            }
        }
    }

    tracing::debug!(
        "Aggregated {} samples into {} days",
        samples.len(),
        buckets.len()
    );

    buckets
        .into_iter()
        .take(FORECAST_DAYS)
        .map(|bucket| {
            tracing::trace!("{:?}: {} samples", bucket.day, bucket.count);
            DailySummary {
                day_timestamp: bucket.day.start_timestamp(),
                temp_min: bucket.min,
                temp_max: bucket.max,
                condition_icon: bucket.icon,
                condition_description: bucket.description,
            }
        })
        .collect()
}
