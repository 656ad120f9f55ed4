use std::fs;
use std::process;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use josu_engine::request::{read_request, ReadingRequest};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Debug, Deserialize)]
pub struct AccuracyCorpus {
    pub cases: Vec<AccuracyCase>,
}

/// One expected reading, or an expected error substring.
#[derive(Debug, Deserialize)]
pub struct AccuracyCase {
    #[serde(default)]
    pub counter: Option<String>,
    pub quantity: Value,
    #[serde(default)]
    pub expected: Option<String>,
    #[serde(default)]
    pub expected_error: Option<String>,
    pub category: String,
    #[serde(default)]
    pub skip: bool,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AccuracyResult {
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub status: AccuracyStatus,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyStatus {
    Pass,
    Fail,
    Skip,
}

#[derive(Debug, Serialize)]
pub struct AccuracySummary {
    pub total: usize,
    pub pass: usize,
    pub fail: usize,
    pub skip: usize,
    pub pass_rate: String,
}

#[derive(Debug, Serialize)]
pub struct AccuracyReport {
    pub results: Vec<AccuracyResult>,
    pub summary: AccuracySummary,
}

pub fn parse_corpus(content: &str) -> Result<AccuracyCorpus, toml::de::Error> {
    toml::from_str(content)
}

fn describe_input(case: &AccuracyCase) -> String {
    let quantity = match &case.quantity {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    match &case.counter {
        Some(counter) => format!("{quantity}{counter}"),
        None => quantity,
    }
}

pub fn evaluate(case: &AccuracyCase) -> AccuracyResult {
    let input = describe_input(case);
    let expected = case
        .expected
        .clone()
        .or_else(|| case.expected_error.as_ref().map(|e| format!("error: {e}")))
        .unwrap_or_default();

    if case.skip {
        return AccuracyResult {
            input,
            expected,
            actual: String::new(),
            status: AccuracyStatus::Skip,
            category: case.category.clone(),
            note: case.note.clone(),
        };
    }

    let request = ReadingRequest {
        counter: case.counter.clone(),
        quantity: case.quantity.clone(),
    };
    let (actual, passed) = match read_request(&request) {
        Ok(reading) => {
            let passed = case.expected.as_deref() == Some(reading.as_str());
            (reading, passed)
        }
        Err(msg) => {
            let passed = case
                .expected_error
                .as_deref()
                .is_some_and(|want| msg.contains(want));
            (format!("error: {msg}"), passed)
        }
    };

    AccuracyResult {
        input,
        expected,
        actual,
        status: if passed {
            AccuracyStatus::Pass
        } else {
            AccuracyStatus::Fail
        },
        category: case.category.clone(),
        note: case.note.clone(),
    }
}

pub fn run(corpus: &AccuracyCorpus, category: Option<&str>) -> AccuracyReport {
    let results: Vec<AccuracyResult> = corpus
        .cases
        .iter()
        .filter(|c| category.map_or(true, |cat| c.category == cat))
        .map(evaluate)
        .collect();

    let total = results.len();
    let count = |status: AccuracyStatus| results.iter().filter(|r| r.status == status).count();
    let pass = count(AccuracyStatus::Pass);
    let fail = count(AccuracyStatus::Fail);
    let skip = count(AccuracyStatus::Skip);
    let evaluated = total - skip;
    let pass_rate = if evaluated > 0 {
        format!("{:.1}%", pass as f64 / evaluated as f64 * 100.0)
    } else {
        "N/A".to_string()
    };

    AccuracyReport {
        results,
        summary: AccuracySummary {
            total,
            pass,
            fail,
            skip,
            pass_rate,
        },
    }
}

pub fn accuracy_cmd(corpus_file: &str, category: Option<&str>, verbose: bool, json: bool) {
    let content = die!(
        fs::read_to_string(corpus_file),
        "Failed to read corpus file {corpus_file}: {}"
    );
    let corpus = die!(parse_corpus(&content), "Failed to parse corpus TOML: {}");
    let report = run(&corpus, category);

    if report.summary.total == 0 {
        eprintln!("No cases match the given filters");
        process::exit(1);
    }

    if json {
        let encoded = die!(
            serde_json::to_string_pretty(&report),
            "Failed to encode report: {}"
        );
        println!("{encoded}");
    } else {
        for r in &report.results {
            let mark = match r.status {
                AccuracyStatus::Pass if !verbose => continue,
                AccuracyStatus::Pass => "PASS",
                AccuracyStatus::Fail => "FAIL",
                AccuracyStatus::Skip => "SKIP",
            };
            println!(
                "[{mark}] [{}] {} → expected {}, got {}",
                r.category, r.input, r.expected, r.actual
            );
            if let Some(note) = &r.note {
                println!("       note: {note}");
            }
        }
        let s = &report.summary;
        println!(
            "\n{} cases: {} pass, {} fail, {} skip ({})",
            s.total, s.pass, s.fail, s.skip, s.pass_rate
        );
    }

    if report.summary.fail > 0 {
        process::exit(1);
    }
}
