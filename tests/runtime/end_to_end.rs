//! End-to-end driver runs
//!
//! Captures the output of complete runs and checks every line in order.

use primer_runtime::{Driver, Program, RunConfig};

fn run_lines(config: RunConfig) -> Vec<String> {
    let mut driver = Driver::new(config, Vec::new());
    driver.run().unwrap();
    String::from_utf8(driver.into_inner())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn random_value(line: &str, prefix: &str) -> i64 {
    line.strip_prefix(prefix)
        .unwrap_or_else(|| panic!("expected {prefix:?} line, got {line:?}"))
        .parse()
        .unwrap()
}

#[test]
fn standard_program_in_order() {
    let lines = run_lines(RunConfig::default());
    assert_eq!(lines.len(), 13);

    assert_eq!(
        &lines[..10],
        [
            "Result: 850",
            "Doubled: [2, 4, 6, 8, 10]",
            "Loose equality false",
            "Key: a Value: apple",
            "Key: b Value: banana",
            "Count: 0",
            "Count: 1",
            "Count: 2",
            "Reversed: nohtyp",
            "ComplexCalc: 185",
        ]
    );

    for line in &lines[10..] {
        let n = random_value(line, "Random: ");
        assert!((1..=100).contains(&n), "{n} out of bounds");
    }
}

#[test]
fn seeded_runs_repeat() {
    let first = run_lines(RunConfig::seeded(2024));
    let second = run_lines(RunConfig::seeded(2024));
    assert_eq!(first, second);
}

#[test]
fn entropy_seed_replays() {
    let mut driver = Driver::new(RunConfig::default(), Vec::new());
    let seed = driver.seed();
    driver.run().unwrap();
    let original = String::from_utf8(driver.into_inner()).unwrap();

    let replay = run_lines(RunConfig::seeded(seed));
    assert_eq!(original.lines().collect::<Vec<_>>(), replay);
}

#[test]
fn alternate_program_in_order() {
    let lines = run_lines(RunConfig::for_program(Program::Alternate));
    assert_eq!(lines.len(), 7);
    assert_eq!(
        &lines[..3],
        ["Total: 107", "Reversed: dlrowolleh", "ComplexCalc: 108"]
    );
    for line in &lines[3..] {
        let n = random_value(line, "Random number: ");
        assert!((0..=99).contains(&n), "{n} out of bounds");
    }
}

#[test]
fn trace_does_not_touch_stdout_lines() {
    let traced = run_lines(RunConfig::seeded(8).with_trace(true));
    let plain = run_lines(RunConfig::seeded(8));
    assert_eq!(traced, plain);
}

#[test]
fn more_random_draws() {
    let lines = run_lines(RunConfig::seeded(1).with_random_draws(10));
    let randoms = lines.iter().filter(|l| l.starts_with("Random: ")).count();
    assert_eq!(randoms, 10);
}
