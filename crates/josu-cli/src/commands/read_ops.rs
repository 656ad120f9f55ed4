use std::fs;
use std::process;

use josu_engine::api::JosuScript;
use josu_engine::request::process_jsonl;
use josu_engine::{counter_to_kana, read_day, read_numeral, supported_counters};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn read_cmd(input: &str, script: JosuScript) {
    let reading = die!(read_numeral(input), "Error: {}");
    println!("{}", script.render(reading));
}

pub fn count_cmd(counter: &str, quantity: &str, script: JosuScript) {
    let reading = die!(counter_to_kana(counter, quantity), "Error: {}");
    println!("{}", script.render(reading));
}

pub fn day_cmd(day: &str, script: JosuScript) {
    let reading = die!(read_day(day), "Error: {}");
    println!("{}", script.render(reading));
}

pub fn counters_cmd(script: JosuScript) {
    for info in supported_counters() {
        println!(
            "{}\t{:<9}\t{}",
            info.label,
            info.category,
            script.render(info.example)
        );
    }
}

/// Read one JSON request per line and print one JSON response per line.
pub fn batch_cmd(file: &str, script: JosuScript) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let mut failed = 0usize;
    for mut response in process_jsonl(&content) {
        if response.error.is_some() {
            failed += 1;
        }
        response.reading = response.reading.map(|r| script.render(r));
        let line = die!(serde_json::to_string(&response), "Error encoding response: {}");
        println!("{line}");
    }
    if failed > 0 {
        eprintln!("{failed} request(s) failed");
        process::exit(1);
    }
}
