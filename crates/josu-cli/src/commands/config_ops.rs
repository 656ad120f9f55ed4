use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Install a settings file before any reading is made.
pub fn settings_load(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(
        josu_engine::settings::init_custom(content),
        "Error loading settings: {}"
    );
}

pub fn settings_export() {
    print!("{}", josu_engine::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        josu_engine::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!("OK: {} extra plain counter(s)", s.plain_counters.len());
    for (label, suffix) in &s.plain_counters {
        println!("  {label} = {suffix}");
    }
}
