use keylint_ir::StringInterner;
use keylint_rules::LintRunner;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_each_scenario_produces_expected_findings() {
    let interner = Arc::new(StringInterner::new());
    let runner = LintRunner::with_default_passes(Arc::clone(&interner));

    for scenario in SCENARIOS {
        let findings = runner.check_unit(&scenario.build(&interner));
        assert_eq!(
            findings.len(),
            scenario.expected_findings,
            "{}",
            scenario.path
        );
    }
}

#[test]
fn test_findings_point_at_the_snippet() {
    let interner = Arc::new(StringInterner::new());
    let runner = LintRunner::with_default_passes(Arc::clone(&interner));

    for scenario in SCENARIOS.iter().filter(|s| s.expected_findings > 0) {
        let unit = scenario.build(&interner);
        for finding in runner.check_unit(&unit) {
            let Some(span) = finding.primary_span() else {
                panic!("finding without a primary span in {}", scenario.path);
            };
            assert_eq!(span.text(&unit.source), Some(scenario.snippet));
        }
    }
}

#[test]
fn test_demo_units_keep_scenario_order() {
    let interner = Arc::new(StringInterner::new());
    let paths: Vec<_> = demo_units(&interner)
        .into_iter()
        .map(|unit| unit.path)
        .collect();
    let expected: Vec<_> = SCENARIOS.iter().map(|s| s.path.to_string()).collect();
    assert_eq!(paths, expected);
}

#[test]
fn test_snippets_occur_in_source() {
    for scenario in SCENARIOS {
        assert!(scenario.source.contains(scenario.snippet), "{}", scenario.path);
    }
}
