use crate::common::types::RECORD_FIELD_COUNT;

/// One line of UnicodeData.txt, split into its named fields. Fields are
/// trimmed but otherwise untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub code_point: &'a str,
    pub name: &'a str,
    pub general_category: &'a str,
    pub combining_class: &'a str,
    pub bidi_class: &'a str,
    pub decomposition: &'a str,
    pub decimal_digit: &'a str,
    pub digit: &'a str,
    pub numeric: &'a str,
    pub bidi_mirrored: &'a str,
    pub unicode_1_name: &'a str,
    pub iso_comment: &'a str,
    pub uppercase_mapping: &'a str,
    pub lowercase_mapping: &'a str,
    pub titlecase_mapping: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    FieldCount { found: usize },
}

/// Returns `Ok(None)` for blank lines.
pub fn parse_record(line: &str) -> Result<Option<Record<'_>>, ParseError> {
    let line = line.trim_end_matches(&['\n', '\r'][..]);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let mut fields = [""; RECORD_FIELD_COUNT];
    let mut found = 0;
    for part in line.split(';') {
        if found < RECORD_FIELD_COUNT {
            fields[found] = part.trim();
        }
        found += 1;
    }
    if found != RECORD_FIELD_COUNT {
        return Err(ParseError::FieldCount { found });
    }

    let [
        code_point,
        name,
        general_category,
        combining_class,
        bidi_class,
        decomposition,
        decimal_digit,
        digit,
        numeric,
        bidi_mirrored,
        unicode_1_name,
        iso_comment,
        uppercase_mapping,
        lowercase_mapping,
        titlecase_mapping,
    ] = fields;

    Ok(Some(Record {
        code_point,
        name,
        general_category,
        combining_class,
        bidi_class,
        decomposition,
        decimal_digit,
        digit,
        numeric,
        bidi_mirrored,
        unicode_1_name,
        iso_comment,
        uppercase_mapping,
        lowercase_mapping,
        titlecase_mapping,
    }))
}
