use std::process::ExitCode;

use unicode_data_tables::{log_set_stderr, run, GeneratorConfig};

fn main() -> ExitCode {
    let config = GeneratorConfig::from_env();
    if let Err(err) = log_set_stderr(config.log_level) {
        eprintln!("[unicode-data-tables] {err}");
    }

    match run(&config) {
        Ok(report) => {
            log::info!(
                "done: {} letters, {} numbers, {} whitespace, {} newlines, {} lines skipped",
                report.letters,
                report.numbers,
                report.whitespace,
                report.newlines,
                report.diagnostics.len()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
