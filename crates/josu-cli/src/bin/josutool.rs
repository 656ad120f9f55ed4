use std::path::Path;

use clap::{Parser, Subcommand};

use josu_cli::commands::{accuracy_ops, config_ops, read_ops};
use josu_engine::api::JosuScript;

#[derive(Parser)]
#[command(name = "josutool", about = "Japanese numeral and counter readings")]
struct Cli {
    /// Settings TOML to load before reading (extra plain counters)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Print readings in katakana instead of hiragana
    #[arg(long, global = true)]
    katakana: bool,
    /// Write debug traces to this directory (needs the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read a number or numeric string
    Read {
        /// Quantity such as 123, -0045 or 3.14
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Read a quantity with a counter word
    Count {
        /// Counter label such as 本, 歳 or 日
        counter: String,
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },
    /// Read a day of the month
    Day {
        #[arg(allow_hyphen_values = true)]
        day: String,
    },
    /// List supported counters with a sample reading
    Counters,
    /// Process a JSONL file of {"counter", "quantity"} requests
    Batch {
        file: String,
    },
    /// Run reading accuracy tests from a TOML corpus
    Accuracy {
        corpus_file: String,
        /// Only run cases in this category
        #[arg(long)]
        category: Option<String>,
        /// Show passing cases too (default: only failures and skips)
        #[arg(long)]
        verbose: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the default settings TOML
    SettingsExport,
    /// Check a settings TOML file
    SettingsValidate {
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        josu_engine::init_tracing(Path::new(dir));
    }
    if let Some(file) = &cli.settings {
        config_ops::settings_load(file);
    }

    let script = if cli.katakana {
        JosuScript::Katakana
    } else {
        JosuScript::Hiragana
    };
    match cli.command {
        Command::Read { value } => read_ops::read_cmd(&value, script),
        Command::Count { counter, quantity } => read_ops::count_cmd(&counter, &quantity, script),
        Command::Day { day } => read_ops::day_cmd(&day, script),
        Command::Counters => read_ops::counters_cmd(script),
        Command::Batch { file } => read_ops::batch_cmd(&file, script),
        Command::Accuracy {
            corpus_file,
            category,
            verbose,
            json,
        } => accuracy_ops::accuracy_cmd(&corpus_file, category.as_deref(), verbose, json),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
