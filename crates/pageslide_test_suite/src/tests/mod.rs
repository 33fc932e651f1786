//! Scenario suites organized by category

pub mod geometry;
pub mod rate_limiting;

use crate::runner::TestSuite;

/// Create all scenario suites
pub fn all_suites() -> Vec<TestSuite> {
    vec![
        geometry::suite(),
        navigation::suite(),
        auto_center::suite(),
        rate_limiting::suite(),
        notifications::suite(),
        lifecycle::suite(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::TestRunner;

    #[test]
    fn test_all_scenarios_pass() {
        let mut runner = TestRunner::new();
        for suite in all_suites() {
            runner.add_suite(suite);
        }
        let result = runner.run();

        assert!(result.total() > 0);
        assert!(result.all_passed(), "failed: {:#?}", result.failures());
    }

    #[test]
    fn test_scenario_names_are_unique() {
        let mut names: Vec<String> = all_suites()
            .iter()
            .flat_map(|suite| suite.cases.iter().map(|case| case.full_name()))
            .collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
