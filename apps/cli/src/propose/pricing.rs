//! Estimate completion and second-market re-pricing. Totals are computed
//! locally as hours × rate only when the model omitted them — a
//! model-supplied total is never overwritten.

use crate::models::proposal::{Estimate, RawEstimate};

pub fn complete_estimate(
    raw: RawEstimate,
    base_hourly_rate_uah: f64,
    eu_us_multiplier: f64,
) -> Estimate {
    let hourly_rate_uah = raw.hourly_rate_uah.unwrap_or(base_hourly_rate_uah);

    let total_min_uah = raw
        .total_min_uah
        .or_else(|| raw.hours_min.map(|h| (h * hourly_rate_uah).round()));
    let total_max_uah = raw
        .total_max_uah
        .or_else(|| raw.hours_max.map(|h| (h * hourly_rate_uah).round()));

    Estimate {
        hours_min: raw.hours_min,
        hours_max: raw.hours_max,
        hourly_rate_uah,
        total_min_uah,
        total_max_uah,
        hourly_rate_eu_us: (hourly_rate_uah * eu_us_multiplier).round(),
        total_min_eu_us: total_min_uah.map(|t| (t * eu_us_multiplier).round()),
        total_max_eu_us: total_max_uah.map(|t| (t * eu_us_multiplier).round()),
        phases: raw.phases,
    }
}
