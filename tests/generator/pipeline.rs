use std::fs;

use log::LevelFilter;

use unicode_data_tables::{
    generate, run, CaseKind, Diagnostic, GeneratorConfig, RecordField, TablesError, CODE_POINT_NULL,
};

const SAMPLE: &str = include_str!("../data/UnicodeData-sample.txt");

fn values(entries: &[unicode_data_tables::CodePoint]) -> Vec<u32> {
    entries.iter().map(|cp| cp.value()).collect()
}

fn config_in(dir: &std::path::Path) -> GeneratorConfig {
    GeneratorConfig {
        input_path: dir.join("UnicodeData.txt"),
        output_path: dir.join("unicode_data.h"),
        log_level: LevelFilter::Off,
        strict_hex: true,
    }
}

#[test]
fn sample_database_buckets() {
    let generation = generate(SAMPLE, true);
    assert_eq!(generation.records, 18);
    assert!(generation.diagnostics.is_empty());

    let tables = &generation.tables;
    let letters: Vec<(u32, CaseKind)> = tables
        .letters()
        .iter()
        .map(|letter| (letter.code_point.value(), letter.case))
        .collect();
    assert_eq!(
        letters,
        vec![
            (0x0041, CaseKind::Upper),
            (0x0061, CaseKind::Lower),
            (0x00AA, CaseKind::None),
            (0x01C4, CaseKind::Upper),
            (0x01C5, CaseKind::Title),
            (0x01C6, CaseKind::Lower),
            (0x02B0, CaseKind::None),
            (0x10400, CaseKind::Upper),
        ]
    );
    assert_eq!(values(tables.numbers()), vec![0x0031, 0x00B2, 0x2160]);
    assert_eq!(
        values(tables.whitespace()),
        vec![0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x85, 0x0020, 0x2028, 0x2029, 0x3000]
    );
    assert_eq!(values(tables.newlines()), vec![0x0A, 0x0B, 0x0C, 0x0D, 0x85, 0x2028, 0x2029]);
}

#[test]
fn sentinel_only_for_empty_source_fields() {
    let generation = generate(SAMPLE, true);
    for line in SAMPLE.lines() {
        let fields: Vec<&str> = line.split(';').collect();
        let code_point = u32::from_str_radix(fields[0], 16).unwrap();
        let Some(letter) = generation
            .tables
            .letters()
            .iter()
            .find(|letter| letter.code_point.value() == code_point)
        else {
            continue;
        };
        assert_eq!(letter.upper.is_null(), fields[12].is_empty(), "{line}");
        assert_eq!(letter.lower.is_null(), fields[13].is_empty(), "{line}");
        assert_eq!(letter.title.is_null(), fields[14].is_empty(), "{line}");
    }
}

#[test]
fn seeds_lead_regardless_of_input() {
    for input in ["", SAMPLE, "2029;PARAGRAPH SEPARATOR;Zp;0;B;;;;;N;;;;;\n"] {
        let tables = generate(input, true).tables;
        assert_eq!(values(&tables.whitespace()[..6]), vec![0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x85]);
        assert_eq!(values(&tables.newlines()[..5]), vec![0x0A, 0x0B, 0x0C, 0x0D, 0x85]);
    }
}

#[test]
fn malformed_line_is_reported_and_skipped() {
    let mut input = String::new();
    for (index, line) in SAMPLE.lines().enumerate() {
        if index == 4 {
            // 0041 with its trailing titlecase field dropped
            input.push_str("0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061\n");
        } else {
            input.push_str(line);
            input.push('\n');
        }
    }

    let generation = generate(&input, true);
    assert_eq!(generation.diagnostics.len(), 1);
    assert_eq!(
        generation.diagnostics[0],
        Diagnostic::SchemaViolation {
            line_number: 5,
            line: "0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061".to_string(),
            field_count: 14,
        }
    );
    assert_eq!(generation.records, 17);
    assert_eq!(generation.tables.letters().len(), 7);
    assert!(!generation.tables.is_alpha(0x41).unwrap());
    assert!(generation.tables.is_alpha(0x61).unwrap());
    assert_eq!(generation.tables.numbers().len(), 3);
}

#[test]
fn malformed_code_point_is_reported() {
    let generation = generate("12345678;BOGUS;Nd;0;EN;;;;;N;;;;;\n0031;DIGIT ONE;Nd;0;EN;;1;1;1;N;;;;;\n", true);
    assert_eq!(values(generation.tables.numbers()), vec![0x31]);
    match &generation.diagnostics[..] {
        [Diagnostic::MalformedCodePoint { line_number, field, value, .. }] => {
            assert_eq!(*line_number, 1);
            assert_eq!(*field, RecordField::CodePoint);
            assert_eq!(value, "12345678");
        }
        other => panic!("unexpected diagnostics: {other:?}"),
    }
    assert!(!generation.diagnostics[0].is_schema_violation());
}

#[test]
fn lenient_mode_keeps_unchecked_text() {
    let generation = generate("12345678;BOGUS;Nd;0;EN;;;;;N;;;;;\n", false);
    assert!(generation.diagnostics.is_empty());
    assert_eq!(generation.tables.numbers()[0].text(), "12345678");
}

#[test]
fn queries_over_generated_tables() {
    let tables = generate(SAMPLE, true).tables;
    assert!(tables.is_title(0x01C5).unwrap());
    assert!(tables.is_upper(0x10400).unwrap());
    assert!(tables.is_numeric(0x2160).unwrap());
    assert!(!tables.is_alpha(0x2160).unwrap());
    assert!(tables.is_whitespace(0x3000).unwrap());
    assert!(!tables.is_newline(0x3000).unwrap());
    assert!(tables.is_newline(0x2029).unwrap());
    assert_eq!(tables.to_lower(0x01C4).unwrap(), 0x01C6);
    assert_eq!(tables.to_title(0x01C6).unwrap(), 0x01C5);
    assert_eq!(tables.to_upper(0x00AA).unwrap(), 0x00AA);
    assert_eq!(tables.to_lower(0x10400).unwrap(), 0x10428);
    assert!(matches!(
        tables.to_upper(CODE_POINT_NULL),
        Err(TablesError::InvalidCodePoint(CODE_POINT_NULL))
    ));
}

#[test]
fn run_writes_header_and_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    fs::write(&config.input_path, SAMPLE).unwrap();

    let report = run(&config).unwrap();
    assert_eq!(report.records, 18);
    assert_eq!(report.letters, 8);
    assert_eq!(report.numbers, 3);
    assert_eq!(report.whitespace, 10);
    assert_eq!(report.newlines, 7);
    assert!(report.diagnostics.is_empty());

    let first = fs::read(&config.output_path).unwrap();
    run(&config).unwrap();
    let second = fs::read(&config.output_path).unwrap();
    assert_eq!(first, second);
    assert!(String::from_utf8(first).unwrap().contains("#define NUM_LETTERS 8\n"));
}

#[test]
fn missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let err = run(&config).unwrap_err();
    assert!(matches!(err, TablesError::InputUnavailable { .. }));
    assert_eq!(err.exit_code(), 2);
    assert!(!config.output_path.exists());
}

#[test]
fn unwritable_output_leaves_no_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(dir.path());
    fs::write(&config.input_path, SAMPLE).unwrap();
    config.output_path = dir.path().join("no-such-dir").join("unicode_data.h");

    let err = run(&config).unwrap_err();
    assert!(matches!(err, TablesError::OutputUnwritable { .. }));
    assert_eq!(err.exit_code(), 3);
    assert!(!config.output_path.exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[cfg(unix)]
#[test]
fn regenerated_header_keeps_its_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    fs::write(&config.input_path, SAMPLE).unwrap();
    fs::write(&config.output_path, "stale").unwrap();
    fs::set_permissions(&config.output_path, fs::Permissions::from_mode(0o644)).unwrap();

    run(&config).unwrap();
    let mode = fs::metadata(&config.output_path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o644);
}
