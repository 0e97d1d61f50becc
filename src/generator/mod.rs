pub mod classifier;
pub mod emitter;
pub mod output;
pub mod parser;

use std::fs;

use crate::common::types::Diagnostic;
use crate::common::unicode::UnicodeTables;
use crate::config::GeneratorConfig;
use crate::error::TablesError;
use crate::generator::parser::ParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub tables: UnicodeTables,
    pub diagnostics: Vec<Diagnostic>,
    /// Well-formed records seen, whether or not they landed in a table.
    pub records: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub records: usize,
    pub letters: usize,
    pub numbers: usize,
    pub whitespace: usize,
    pub newlines: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parses and classifies every line of `input`. Bad lines are reported in
/// `diagnostics` and skipped.
pub fn generate(input: &str, strict_hex: bool) -> Generation {
    let mut tables = UnicodeTables::new();
    let mut diagnostics = Vec::new();
    let mut records = 0;

    for (index, line) in input.lines().enumerate() {
        let line_number = index + 1;
        let record = match parser::parse_record(line) {
            Ok(Some(record)) => record,
            Ok(None) => continue,
            Err(ParseError::FieldCount { found }) => {
                report(
                    &mut diagnostics,
                    Diagnostic::SchemaViolation {
                        line_number,
                        line: line.trim().to_string(),
                        field_count: found,
                    },
                );
                continue;
            }
        };
        records += 1;

        match classifier::classify(&record, strict_hex, &mut tables) {
            Ok(bucket) => log::trace!("line {line_number}: {} -> {bucket:?}", record.code_point),
            Err(err) => report(
                &mut diagnostics,
                Diagnostic::MalformedCodePoint {
                    line_number,
                    line: line.trim().to_string(),
                    field: err.field,
                    value: err.value,
                },
            ),
        }
    }

    Generation {
        tables,
        diagnostics,
        records,
    }
}

fn report(diagnostics: &mut Vec<Diagnostic>, diagnostic: Diagnostic) {
    log::warn!("{diagnostic}");
    diagnostics.push(diagnostic);
}

/// Reads the database, builds the tables and replaces the output artifact.
/// Nothing is written unless the whole artifact rendered.
pub fn run(config: &GeneratorConfig) -> Result<RunReport, TablesError> {
    log::info!("reading {}", config.input_path.display());
    let input = fs::read_to_string(&config.input_path).map_err(|source| TablesError::InputUnavailable {
        path: config.input_path.clone(),
        source,
    })?;

    let generation = generate(&input, config.strict_hex);
    let tables = &generation.tables;
    log::info!(
        "{} records: {} letters, {} numbers, {} whitespace, {} newlines",
        generation.records,
        tables.letters().len(),
        tables.numbers().len(),
        tables.whitespace().len(),
        tables.newlines().len()
    );
    if !generation.diagnostics.is_empty() {
        log::warn!("{} lines skipped", generation.diagnostics.len());
    }

    let header = emitter::render_header(tables)?;
    output::write_atomic(&config.output_path, header.as_bytes())?;
    log::info!("wrote {}", config.output_path.display());

    Ok(RunReport {
        records: generation.records,
        letters: tables.letters().len(),
        numbers: tables.numbers().len(),
        whitespace: tables.whitespace().len(),
        newlines: tables.newlines().len(),
        diagnostics: generation.diagnostics,
    })
}
