//! Test runner for executing scenario suites
//!
//! Manages scenario execution, result collection, and reporting.

use crate::harness::{SliderHarness, TestHarness, TestResult};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Scenario body
pub type TestFn = Box<dyn FnOnce(&mut SliderHarness) -> anyhow::Result<()> + Send>;

/// A single scenario
pub struct TestCase {
    /// Scenario name
    pub name: String,
    /// Suite the scenario belongs to
    pub category: String,
    /// Scenario body
    pub test_fn: TestFn,
}

impl TestCase {
    pub fn new<F>(name: &str, category: &str, test_fn: F) -> Self
    where
        F: FnOnce(&mut SliderHarness) -> anyhow::Result<()> + Send + 'static,
    {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            test_fn: Box::new(test_fn),
        }
    }

    /// `category::name`
    pub fn full_name(&self) -> String {
        format!("{}::{}", self.category, self.name)
    }
}

/// Result of running a scenario
pub struct TestRun {
    pub name: String,
    pub category: String,
    pub result: TestResult,
    /// Wall-clock time taken
    pub duration: Duration,
}

impl TestRun {
    pub fn is_passed(&self) -> bool {
        self.result.is_passed()
    }
}

/// Named group of scenarios
pub struct TestSuite {
    pub name: String,
    pub cases: Vec<TestCase>,
}

impl TestSuite {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            cases: Vec::new(),
        }
    }

    pub fn add<F>(&mut self, name: &str, test_fn: F) -> &mut Self
    where
        F: FnOnce(&mut SliderHarness) -> anyhow::Result<()> + Send + 'static,
    {
        self.cases.push(TestCase::new(name, &self.name, test_fn));
        self
    }
}

/// Test runner for executing suites
pub struct TestRunner {
    harness: TestHarness,
    suites: Vec<TestSuite>,
    /// Filter pattern (None = run all)
    filter: Option<String>,
}

impl Default for TestRunner {
    fn default() -> Self {
        Self::with_harness(TestHarness::new())
    }
}

impl TestRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_harness(harness: TestHarness) -> Self {
        Self {
            harness,
            suites: Vec::new(),
            filter: None,
        }
    }

    pub fn add_suite(&mut self, suite: TestSuite) -> &mut Self {
        self.suites.push(suite);
        self
    }

    /// Only run scenarios whose name or suite contains `pattern`
    pub fn filter(&mut self, pattern: &str) -> &mut Self {
        self.filter = Some(pattern.to_string());
        self
    }

    /// Run all scenarios
    pub fn run(&mut self) -> RunResult {
        let start = Instant::now();
        let mut results = Vec::new();

        for suite in self.suites.drain(..) {
            tracing::info!("Running suite: {}", suite.name);

            for case in suite.cases {
                if let Some(ref pattern) = self.filter {
                    if !case.name.contains(pattern) && !case.category.contains(pattern) {
                        continue;
                    }
                }

                let full_name = case.full_name();
                tracing::debug!("Running scenario: {}", full_name);

                let test_start = Instant::now();
                let result = self.harness.run_test(&full_name, case.test_fn);
                let duration = test_start.elapsed();

                match &result {
                    TestResult::Passed => tracing::info!("  ✓ {} ({:?})", case.name, duration),
                    TestResult::Failed { reason } => {
                        tracing::error!("  ✗ {}: {}", case.name, reason)
                    }
                    TestResult::Skipped { reason } => {
                        tracing::warn!("  - {} skipped: {}", case.name, reason)
                    }
                }

                results.push(TestRun {
                    name: case.name,
                    category: case.category,
                    result,
                    duration,
                });
            }
        }

        RunResult::new(results, start.elapsed())
    }

    pub fn harness(&self) -> &TestHarness {
        &self.harness
    }
}

/// Results from running scenarios
pub struct RunResult {
    pub results: Vec<TestRun>,
    pub duration: Duration,
}

impl RunResult {
    pub fn new(results: Vec<TestRun>, duration: Duration) -> Self {
        Self { results, duration }
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.is_passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.result, TestResult::Failed { .. }))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.result, TestResult::Skipped { .. }))
            .count()
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// No scenario failed
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// Results grouped by suite
    pub fn by_category(&self) -> BTreeMap<&str, Vec<&TestRun>> {
        let mut map: BTreeMap<&str, Vec<&TestRun>> = BTreeMap::new();
        for result in &self.results {
            map.entry(result.category.as_str()).or_default().push(result);
        }
        map
    }

    /// `category::name: reason` for every failure
    pub fn failures(&self) -> Vec<String> {
        self.results
            .iter()
            .filter_map(|r| match &r.result {
                TestResult::Failed { reason } => {
                    Some(format!("{}::{}: {}", r.category, r.name, reason))
                }
                _ => None,
            })
            .collect()
    }

    pub fn print_summary(&self) {
        println!("\n╔══════════════════════════════════════════╗");
        println!("║         SCENARIO RESULTS SUMMARY         ║");
        println!("╠══════════════════════════════════════════╣");
        println!("║  Passed:  {:>5}                          ║", self.passed());
        println!("║  Failed:  {:>5}                          ║", self.failed());
        println!("║  Skipped: {:>5}                          ║", self.skipped());
        println!("║  Total:   {:>5}                          ║", self.total());
        println!("║  Time:    {:>8.2?}                      ║", self.duration);
        println!("╚══════════════════════════════════════════╝");

        let failures = self.failures();
        if !failures.is_empty() {
            println!("\nFailed scenarios:");
            for failure in failures {
                println!("  ✗ {}", failure);
            }
        }
    }
}
