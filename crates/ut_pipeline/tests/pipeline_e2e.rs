//! End-to-end pipeline tests: token text in, rendered report lines out.

use std::io::Write;

use ut_core::{ExactRational, SampleSet};
use ut_pipeline::{run_from_path, run_from_reader, run_sample, PipelineError, RunConfig};
use ut_report::render_text;

fn lines(input: &str, digits: u32) -> Vec<String> {
    let outs = run_from_reader(input.as_bytes(), &RunConfig { digits }).expect("pipeline ok");
    render_text(&outs.report).lines().map(str::to_string).collect()
}

#[test]
fn single_value_report() {
    assert_eq!(lines("0.5", 10), vec!["5.6666666666", "0.5", "0.5", "0.49"]);
}

#[test]
fn ten_tenths_report() {
    let got = lines("0.0 0.1 0.2 0.3 0.4 0.5 0.6 0.7 0.8 0.9", 20);
    assert_eq!(got, vec!["9.7639278506151571167", "0.1", "0.", "4.9"]);
}

#[test]
fn exact_values_are_kept_alongside_report() {
    let outs = run_from_reader("0.5".as_bytes(), &RunConfig::default()).unwrap();
    assert_eq!(outs.sample_size, 1);
    assert_eq!(outs.chi_squared.v, "17/3".parse::<ExactRational>().unwrap());
    assert_eq!(outs.poker.v, "49/100".parse::<ExactRational>().unwrap());
    assert_eq!(outs.report.digits, 100);
    // 17/3 at 100 digits: "5." followed by one hundred 6s.
    let chi = &outs.report.statistics[0].value;
    assert_eq!(chi.len(), 102);
    assert!(chi[2..].bytes().all(|b| b == b'6'));
}

#[test]
fn results_ignore_input_order() {
    let a = lines("0.91 0.05 0.33 0.33 0.72 0.18 0.5 0.64 0.27 0.11 0.99", 30);
    let b = lines("0.11 0.99 0.5 0.33 0.05 0.72 0.27 0.64 0.33 0.18 0.91", 30);
    assert_eq!(a, b);
}

#[test]
fn fraction_and_decimal_literals_agree() {
    assert_eq!(lines("1/4 3/4 1/2", 25), lines("0.25 0.75 0.5", 25));
}

#[test]
fn sorted_sample_can_be_run_directly() {
    let s: SampleSet = ["0.3", "0.1", "0.2"].iter().map(|t| t.parse().unwrap()).collect();
    let outs = run_sample(&s, &RunConfig { digits: 5 }).unwrap();
    assert_eq!(outs.ks.k_plus, "0.7".parse::<ExactRational>().unwrap());
    assert_eq!(outs.report.statistics[1].value, "0.7");
}

#[test]
fn integral_statistics_keep_the_point() {
    // Five zeros: chi-squared V = 495, K+ = 1, K− = 0, poker V = 499/220.
    let got = lines("0 0 0 0 0", 8);
    assert_eq!(got, vec!["495.", "1.", "0.", "2.26818181"]);
}

#[test]
fn zero_digits_prints_integers() {
    let got = lines("0.5", 0);
    assert_eq!(got, vec!["5", "0", "0", "0"]);
}

#[test]
fn reads_from_local_file() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "0.5").unwrap();
    let outs = run_from_path(f.path(), &RunConfig { digits: 10 }).unwrap();
    assert_eq!(render_text(&outs.report), "5.6666666666\n0.5\n0.5\n0.49\n");
}

#[test]
fn failures_produce_no_report() {
    assert!(matches!(
        run_from_reader("".as_bytes(), &RunConfig::default()),
        Err(PipelineError::Statistic(_))
    ));
    assert!(matches!(
        run_from_reader("0.1 0.2 nan".as_bytes(), &RunConfig::default()),
        Err(PipelineError::Input(_))
    ));
}
