//! Fixed "what-if" salary projections.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatIfScenario {
    pub scenario: String,
    pub current_salary: f64,
    pub projected_salary: f64,
    pub increase: f64,
    pub increase_percentage: f64,
}

/// Scenario names and their fractional increase, in display order.
pub const SCENARIOS: [(&str, f64); 5] = [
    ("+2 years experience", 0.10),
    ("Switch to Bangalore", 0.15),
    ("Learn 3 new skills", 0.08),
    ("Get Master's degree", 0.20),
    ("Move to management", 0.25),
];

/// Project `current_salary` through each of the [`SCENARIOS`]. Order is
/// fixed.
pub fn what_if_scenarios(current_salary: f64) -> Vec<WhatIfScenario> {
    SCENARIOS
        .iter()
        .map(|&(name, rate)| WhatIfScenario {
            scenario: name.to_string(),
            current_salary,
            projected_salary: (current_salary * (1.0 + rate)).round(),
            increase: (current_salary * rate).round(),
            increase_percentage: (rate * 100.0).round(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_scenarios_in_display_order() {
        let s = what_if_scenarios(1_000_000.0);
        let names: Vec<&str> = s.iter().map(|w| w.scenario.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "+2 years experience",
                "Switch to Bangalore",
                "Learn 3 new skills",
                "Get Master's degree",
                "Move to management",
            ]
        );
        let pcts: Vec<f64> = s.iter().map(|w| w.increase_percentage).collect();
        assert_eq!(pcts, vec![10.0, 15.0, 8.0, 20.0, 25.0]);
    }

    #[test]
    fn projections_are_rounded() {
        let s = what_if_scenarios(123_457.0);
        assert_eq!(s[0].projected_salary, 135_803.0);
        assert_eq!(s[0].increase, 12_346.0);
        assert_eq!(s[2].increase, 9_877.0);
        assert!(s.iter().all(|w| w.current_salary == 123_457.0));
    }

    #[test]
    fn zero_salary() {
        assert!(what_if_scenarios(0.0)
            .iter()
            .all(|w| w.projected_salary == 0.0 && w.increase == 0.0));
    }
}
