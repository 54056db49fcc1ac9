//! Cost-of-living adjustments from a fixed city index (Bangalore = 100).

use serde::{Deserialize, Serialize};

use crate::multipliers::City;

/// Index used for cities outside the table.
pub const DEFAULT_COST_INDEX: f64 = 100.0;

/// Cost-of-living index for free text; unknown city → 100.
pub fn cost_index(city: &str) -> f64 {
    City::parse(city).map_or(DEFAULT_COST_INDEX, City::cost_index)
}

/// Salary needed in `to_city` for the same standard of living as `salary`
/// in `from_city`.
pub fn adjust_salary(salary: f64, from_city: &str, to_city: &str) -> f64 {
    (salary * cost_index(to_city) / cost_index(from_city)).round()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityComparison {
    pub city1: String,
    pub city2: String,
    /// Absolute index difference.
    pub cost_difference: f64,
    /// Difference relative to the cheaper city, one decimal place.
    pub percentage_difference: f64,
    pub cheaper_city: String,
}

/// Compare two cities' cost of living. When the indices are equal the
/// second city is reported as cheaper.
pub fn compare_cities(city1: &str, city2: &str) -> CityComparison {
    let index1 = cost_index(city1);
    let index2 = cost_index(city2);
    let difference = (index1 - index2).abs();
    let percentage = difference / index1.min(index2) * 100.0;

    CityComparison {
        city1: city1.to_string(),
        city2: city2.to_string(),
        cost_difference: difference,
        percentage_difference: (percentage * 10.0).round() / 10.0,
        cheaper_city: if index1 < index2 { city1 } else { city2 }.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AffordabilityRating {
    Excellent,
    Good,
    Fair,
    Adequate,
    Challenging,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Affordability {
    pub score: u8,
    pub rating: AffordabilityRating,
    pub description: String,
}

/// Score how comfortably `salary` covers living costs in `city`.
///
/// The salary is first normalized to the Bangalore index, then bucketed.
pub fn affordability(salary: f64, city: &str) -> Affordability {
    let adjusted = salary / cost_index(city) * 100.0;

    let (score, rating, description) = if adjusted >= 1_500_000.0 {
        (
            95,
            AffordabilityRating::Excellent,
            "Very comfortable living with significant savings potential",
        )
    } else if adjusted >= 1_000_000.0 {
        (
            80,
            AffordabilityRating::Good,
            "Comfortable living with good savings potential",
        )
    } else if adjusted >= 600_000.0 {
        (65, AffordabilityRating::Fair, "Moderate living with some savings potential")
    } else if adjusted >= 400_000.0 {
        (
            50,
            AffordabilityRating::Adequate,
            "Basic comfortable living with limited savings",
        )
    } else {
        (30, AffordabilityRating::Challenging, "May require careful budgeting")
    };

    Affordability {
        score,
        rating,
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_lookup() {
        assert_eq!(cost_index("Mumbai"), 110.0);
        assert_eq!(cost_index("Bangalore"), 100.0);
        assert_eq!(cost_index("Ahmedabad"), 70.0);
        assert_eq!(cost_index("Atlantis"), 100.0);
    }

    #[test]
    fn lowercase_city_falls_back_to_baseline() {
        assert_eq!(cost_index("mumbai"), 100.0);
        assert_eq!(adjust_salary(1_000_000.0, "bangalore", "mumbai"), 1_000_000.0);
    }

    #[test]
    fn adjust_between_cities() {
        assert_eq!(adjust_salary(1_000_000.0, "Bangalore", "Mumbai"), 1_100_000.0);
        assert_eq!(adjust_salary(1_100_000.0, "Mumbai", "Bangalore"), 1_000_000.0);
        assert_eq!(adjust_salary(900_000.0, "Pune", "Chennai"), 880_000.0);
    }

    #[test]
    fn compare_reports_cheaper_city() {
        let c = compare_cities("Mumbai", "Pune");
        assert_eq!(c.cost_difference, 20.0);
        assert_eq!(c.percentage_difference, 22.2);
        assert_eq!(c.cheaper_city, "Pune");
    }

    #[test]
    fn compare_equal_indices_picks_second() {
        let c = compare_cities("Hyderabad", "Noida");
        assert_eq!(c.cost_difference, 0.0);
        assert_eq!(c.cheaper_city, "Noida");
    }

    #[test]
    fn affordability_bands() {
        assert_eq!(affordability(1_500_000.0, "Bangalore").rating, AffordabilityRating::Excellent);
        assert_eq!(affordability(1_000_000.0, "Bangalore").score, 80);
        assert_eq!(affordability(600_000.0, "Bangalore").rating, AffordabilityRating::Fair);
        assert_eq!(affordability(400_000.0, "Bangalore").rating, AffordabilityRating::Adequate);
        assert_eq!(affordability(399_999.0, "Bangalore").score, 30);
    }

    #[test]
    fn affordability_normalizes_by_city() {
        // 1.1M in Mumbai is worth 1M in Bangalore terms.
        assert_eq!(affordability(1_100_000.0, "Mumbai").rating, AffordabilityRating::Good);
        // 700k in Ahmedabad is worth 1M.
        assert_eq!(affordability(700_000.0, "Ahmedabad").rating, AffordabilityRating::Good);
    }
}
