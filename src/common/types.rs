use std::fmt;

/// Sentinel meaning "no mapping exists". Distinct from a real code point `0`.
pub const CODE_POINT_NULL: u32 = 0xFFFF_FFFF;
pub const CODE_POINT_NULL_TEXT: &str = "FFFFFFFF";

pub const MAX_CODE_POINT: u32 = 0x10_FFFF;
pub const RECORD_FIELD_COUNT: usize = 15;

const MIN_HEX_DIGITS: usize = 4;
const MAX_HEX_DIGITS: usize = 6;

#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum CaseKind {
    None = 0,
    Upper = 1,
    Lower = 2,
    Title = 3,
}

impl CaseKind {
    pub const ALL: [CaseKind; 4] = [
        CaseKind::None,
        CaseKind::Upper,
        CaseKind::Lower,
        CaseKind::Title,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            CaseKind::None => "CASE_NONE",
            CaseKind::Upper => "CASE_UPPER",
            CaseKind::Lower => "CASE_LOWER",
            CaseKind::Title => "CASE_TITLE",
        }
    }
}

/// A code point as read from the database: the hex text is kept verbatim so
/// the emitted literal matches the source, alongside its numeric value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePoint {
    text: String,
    value: u32,
}

impl CodePoint {
    pub fn null() -> Self {
        Self {
            text: CODE_POINT_NULL_TEXT.to_string(),
            value: CODE_POINT_NULL,
        }
    }

    pub fn from_value(value: u32) -> Self {
        Self {
            text: format!("{value:04X}"),
            value,
        }
    }

    /// Accepts 4 to 6 ASCII hex digits naming a value no greater than U+10FFFF.
    pub fn parse_strict(text: &str) -> Option<Self> {
        if text.len() < MIN_HEX_DIGITS || text.len() > MAX_HEX_DIGITS {
            return None;
        }
        if !text.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(text, 16).ok()?;
        if value > MAX_CODE_POINT {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            value,
        })
    }

    /// Keeps the text as-is. Text that does not parse as hex records the
    /// NULL value but is still emitted verbatim.
    pub fn parse_lenient(text: &str) -> Self {
        Self {
            text: text.to_string(),
            value: u32::from_str_radix(text, 16).unwrap_or(CODE_POINT_NULL),
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_null(&self) -> bool {
        self.value == CODE_POINT_NULL
    }
}

impl fmt::Display for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterEntry {
    pub code_point: CodePoint,
    pub case: CaseKind,
    pub upper: CodePoint,
    pub lower: CodePoint,
    pub title: CodePoint,
}

/// The record fields that carry code points.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RecordField {
    CodePoint,
    UppercaseMapping,
    LowercaseMapping,
    TitlecaseMapping,
}

impl RecordField {
    pub fn index(self) -> usize {
        match self {
            RecordField::CodePoint => 0,
            RecordField::UppercaseMapping => 12,
            RecordField::LowercaseMapping => 13,
            RecordField::TitlecaseMapping => 14,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RecordField::CodePoint => "code point",
            RecordField::UppercaseMapping => "uppercase mapping",
            RecordField::LowercaseMapping => "lowercase mapping",
            RecordField::TitlecaseMapping => "titlecase mapping",
        }
    }
}

/// Non-fatal problem with a single input line. The line is skipped and the
/// run continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    SchemaViolation {
        line_number: usize,
        line: String,
        field_count: usize,
    },
    MalformedCodePoint {
        line_number: usize,
        line: String,
        field: RecordField,
        value: String,
    },
}

impl Diagnostic {
    pub fn line_number(&self) -> usize {
        match self {
            Diagnostic::SchemaViolation { line_number, .. }
            | Diagnostic::MalformedCodePoint { line_number, .. } => *line_number,
        }
    }

    pub fn line(&self) -> &str {
        match self {
            Diagnostic::SchemaViolation { line, .. } | Diagnostic::MalformedCodePoint { line, .. } => line,
        }
    }

    pub fn is_schema_violation(&self) -> bool {
        matches!(self, Diagnostic::SchemaViolation { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::SchemaViolation {
                line_number,
                line,
                field_count,
            } => write!(
                f,
                "error parsing line {line_number}: expected {RECORD_FIELD_COUNT} fields, found {field_count}: {line}"
            ),
            Diagnostic::MalformedCodePoint {
                line_number,
                line,
                field,
                value,
            } => write!(
                f,
                "error parsing line {line_number}: field {} ({}) is not a code point: {value:?}: {line}",
                field.index(),
                field.name()
            ),
        }
    }
}
