//! Price aggregation
//!
//! Route aggregation feeds the snapshot chart and the AI summary; trend
//! aggregation feeds the daily price line.

use crate::models::{FlightRecord, RouteAverage, TrendPoint};
use std::collections::{BTreeMap, HashMap};

/// Round to two decimal places, ties to even
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Average price per origin, cheapest route first
///
/// Sorting happens on the unrounded means and is stable, so routes with equal
/// averages keep the order in which their origin first appeared.
pub fn route_averages(records: &[FlightRecord]) -> Vec<RouteAverage> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, f64, usize)> = Vec::new();

    for record in records {
        match index.get(record.origin.as_str()) {
            Some(&i) => {
                groups[i].1 += record.price;
                groups[i].2 += 1;
            }
            None => {
                index.insert(record.origin.as_str(), groups.len());
                groups.push((record.origin.as_str(), record.price, 1));
            }
        }
    }

    let mut averages: Vec<(&str, f64)> = groups
        .into_iter()
        .map(|(origin, sum, count)| (origin, sum / count as f64))
        .collect();
    averages.sort_by(|a, b| a.1.total_cmp(&b.1));

    averages
        .into_iter()
        .map(|(origin, mean)| RouteAverage {
            origin: origin.to_string(),
            average_price: round2(mean),
        })
        .collect()
}

/// Cheapest record of one fetch; the first one wins on ties
pub fn cheapest_offer(records: &[FlightRecord]) -> Option<&FlightRecord> {
    records.iter().fold(None, |best: Option<&FlightRecord>, record| match best {
        Some(b) if b.price <= record.price => Some(b),
        _ => Some(record),
    })
}

/// Average the per-fetch cheapest records by departure date, oldest first
///
/// Several fetches can yield a cheapest offer departing on the same calendar
/// date; those are merged into one averaged point.
pub fn daily_trend(cheapest: &[FlightRecord]) -> Vec<TrendPoint> {
    let mut by_date: BTreeMap<String, (f64, usize)> = BTreeMap::new();

    for record in cheapest {
        let entry = by_date.entry(record.date_label()).or_insert((0.0, 0));
        entry.0 += record.price;
        entry.1 += 1;
    }

    by_date
        .into_iter()
        .map(|(date, (sum, count))| TrendPoint {
            date,
            average_price: round2(sum / count as f64),
        })
        .collect()
}
