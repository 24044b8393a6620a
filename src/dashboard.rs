//! Dashboard aggregates: single-pass reductions over the fleet.

use std::collections::HashMap;

use crate::models::{BinStatus, Driver, DriverStatus, Dustbin};

/// Headline counters for the stats grid.
///
/// Critical and warning counts are derived from fill level, not the stored
/// status field, so freshly edited bins bucket correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FleetStats {
    pub total_bins: usize,
    pub active_drivers: usize,
    pub critical_bins: usize,
    pub warning_bins: usize,
}

pub fn fleet_stats(bins: &[Dustbin], drivers: &[Driver]) -> FleetStats {
    let mut stats = FleetStats {
        total_bins: bins.len(),
        ..FleetStats::default()
    };

    for bin in bins {
        match BinStatus::from_fill_level(bin.fill_level) {
            BinStatus::Critical => stats.critical_bins += 1,
            BinStatus::Warning => stats.warning_bins += 1,
            BinStatus::Good => {}
        }
    }

    stats.active_drivers = drivers
        .iter()
        .filter(|driver| driver.status == DriverStatus::Active)
        .count();

    stats
}

/// Critical bins for the alert list, capped at `limit`.
pub fn critical_alerts(bins: &[Dustbin], limit: usize) -> Vec<&Dustbin> {
    bins.iter()
        .filter(|bin| BinStatus::from_fill_level(bin.fill_level) == BinStatus::Critical)
        .take(limit)
        .collect()
}

/// Per-status tallies for the map view quick stats.
///
/// Uses the stored status field, matching what the markers display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub critical: usize,
    pub warning: usize,
    pub good: usize,
}

pub fn status_counts(bins: &[Dustbin]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for bin in bins {
        match bin.status {
            BinStatus::Critical => counts.critical += 1,
            BinStatus::Warning => counts.warning += 1,
            BinStatus::Good => counts.good += 1,
        }
    }
    counts
}

/// An area and its average fill level.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaFill {
    pub area: String,
    pub average_fill: f64,
}

/// Areas with the highest average fill level, ties included.
///
/// Result order follows first appearance in the input.
pub fn top_areas_by_fill(bins: &[Dustbin]) -> Vec<AreaFill> {
    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, (u64, usize)> = HashMap::new();

    for bin in bins {
        let entry = totals.entry(bin.location.as_str()).or_insert_with(|| {
            order.push(bin.location.as_str());
            (0, 0)
        });
        entry.0 += u64::from(bin.fill_level);
        entry.1 += 1;
    }

    let averages: Vec<AreaFill> = order
        .iter()
        .map(|area| {
            let (sum, count) = totals[area];
            AreaFill {
                area: (*area).to_string(),
                average_fill: sum as f64 / count as f64,
            }
        })
        .collect();

    let Some(max) = averages
        .iter()
        .map(|area| area.average_fill)
        .fold(None, |max: Option<f64>, avg| {
            Some(max.map_or(avg, |m| m.max(avg)))
        })
    else {
        return Vec::new();
    };

    averages
        .into_iter()
        .filter(|area| area.average_fill == max)
        .collect()
}

/// Active drivers ranked by efficiency, capped at `limit`.
pub fn top_drivers(drivers: &[Driver], limit: usize) -> Vec<&Driver> {
    let mut active: Vec<&Driver> = drivers
        .iter()
        .filter(|driver| driver.status == DriverStatus::Active)
        .collect();
    active.sort_by(|a, b| b.efficiency.cmp(&a.efficiency));
    active.truncate(limit);
    active
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bin(id: &str, location: &str, fill_level: u8) -> Dustbin {
        Dustbin {
            id: id.to_string(),
            location: location.to_string(),
            fill_level,
            battery_level: 80,
            signal_strength: 90,
            last_emptied: "2024-05-01".to_string(),
            status: BinStatus::from_fill_level(fill_level),
            temperature: 28.0,
            coordinates: None,
            install_date: "2023-01-15".to_string(),
            model: "SB-240".to_string(),
            capacity: 240,
        }
    }

    fn driver(name: &str, status: DriverStatus, efficiency: u8) -> Driver {
        Driver {
            id: name.to_lowercase(),
            name: name.to_string(),
            phone: String::new(),
            email: String::new(),
            status,
            current_route: String::new(),
            location: String::new(),
            completed_today: 5,
            efficiency,
            vehicle_id: String::new(),
            address: String::new(),
            emergency_contact: String::new(),
            license_number: String::new(),
            experience: String::new(),
        }
    }

    #[test]
    fn test_fleet_stats_buckets_by_fill_level() {
        let bins = vec![
            bin("b1", "North", 95),
            bin("b2", "North", 90),
            bin("b3", "South", 80),
            bin("b4", "South", 10),
        ];
        let drivers = vec![
            driver("Asha", DriverStatus::Active, 90),
            driver("Ravi", DriverStatus::Break, 85),
        ];

        let stats = fleet_stats(&bins, &drivers);
        assert_eq!(stats.total_bins, 4);
        assert_eq!(stats.critical_bins, 2);
        assert_eq!(stats.warning_bins, 1);
        assert_eq!(stats.active_drivers, 1);
    }

    #[test]
    fn test_critical_alerts_capped() {
        let bins = vec![
            bin("b1", "North", 95),
            bin("b2", "North", 92),
            bin("b3", "South", 99),
            bin("b4", "South", 50),
        ];

        let alerts = critical_alerts(&bins, 2);
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].id, "b1");
        assert_eq!(alerts[1].id, "b2");
    }

    #[test]
    fn test_top_areas_single_winner() {
        let bins = vec![
            bin("b1", "North", 80),
            bin("b2", "North", 60),
            bin("b3", "South", 90),
        ];

        let top = top_areas_by_fill(&bins);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].area, "South");
        assert_eq!(top[0].average_fill, 90.0);
    }

    #[test]
    fn test_top_areas_keeps_ties() {
        let bins = vec![
            bin("b1", "North", 70),
            bin("b2", "South", 80),
            bin("b3", "South", 60),
            bin("b4", "East", 70),
        ];

        let top = top_areas_by_fill(&bins);
        let areas: Vec<&str> = top.iter().map(|a| a.area.as_str()).collect();
        assert_eq!(areas, vec!["North", "South", "East"]);
    }

    #[test]
    fn test_top_areas_empty() {
        assert!(top_areas_by_fill(&[]).is_empty());
    }

    #[test]
    fn test_top_drivers_ranked_and_capped() {
        let drivers = vec![
            driver("Asha", DriverStatus::Active, 88),
            driver("Ravi", DriverStatus::Offline, 99),
            driver("Meena", DriverStatus::Active, 95),
            driver("Karan", DriverStatus::Active, 91),
        ];

        let top = top_drivers(&drivers, 2);
        let names: Vec<&str> = top.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Meena", "Karan"]);
    }

    #[test]
    fn test_status_counts_use_stored_status() {
        let mut stale = bin("b1", "North", 95);
        stale.status = BinStatus::Good; // stored status lags the fill level

        let counts = status_counts(&[stale, bin("b2", "South", 80)]);
        assert_eq!(counts.good, 1);
        assert_eq!(counts.warning, 1);
        assert_eq!(counts.critical, 0);
    }
}
