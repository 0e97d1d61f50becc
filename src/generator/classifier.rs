use crate::common::types::{CaseKind, CodePoint, LetterEntry, RecordField};
use crate::common::unicode::UnicodeTables;
use crate::generator::parser::Record;

/// Where a general category sends a record.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Bucket {
    Letter(CaseKind),
    Number,
    /// `Zs`, `Zl`, `Zp`. Line and paragraph separators also count as newlines.
    Separator { newline: bool },
    Ignored,
}

pub fn category_bucket(general_category: &str) -> Bucket {
    match general_category {
        "Lu" => Bucket::Letter(CaseKind::Upper),
        "Ll" => Bucket::Letter(CaseKind::Lower),
        "Lt" => Bucket::Letter(CaseKind::Title),
        "Lm" | "Lo" => Bucket::Letter(CaseKind::None),
        "Nd" | "Nl" | "No" => Bucket::Number,
        "Zs" => Bucket::Separator { newline: false },
        "Zl" | "Zp" => Bucket::Separator { newline: true },
        _ => Bucket::Ignored,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: RecordField,
    pub value: String,
}

/// Appends the record to the buckets its category selects. On error nothing
/// is appended.
pub fn classify(
    record: &Record<'_>,
    strict_hex: bool,
    tables: &mut UnicodeTables,
) -> Result<Bucket, FieldError> {
    let bucket = category_bucket(record.general_category);
    if bucket == Bucket::Ignored {
        return Ok(bucket);
    }

    let code_point = code_point_field(RecordField::CodePoint, record.code_point, strict_hex)?;
    match bucket {
        Bucket::Letter(case) => {
            let upper = mapping_field(RecordField::UppercaseMapping, record.uppercase_mapping, strict_hex)?;
            let lower = mapping_field(RecordField::LowercaseMapping, record.lowercase_mapping, strict_hex)?;
            let title = mapping_field(RecordField::TitlecaseMapping, record.titlecase_mapping, strict_hex)?;
            tables.letters.push(LetterEntry {
                code_point,
                case,
                upper,
                lower,
                title,
            });
        }
        Bucket::Number => tables.numbers.push(code_point),
        Bucket::Separator { newline } => {
            if newline {
                tables.newlines.push(code_point.clone());
            }
            tables.whitespace.push(code_point);
        }
        Bucket::Ignored => {}
    }
    Ok(bucket)
}

fn code_point_field(field: RecordField, text: &str, strict_hex: bool) -> Result<CodePoint, FieldError> {
    if !strict_hex {
        return Ok(CodePoint::parse_lenient(text));
    }
    CodePoint::parse_strict(text).ok_or_else(|| FieldError {
        field,
        value: text.to_string(),
    })
}

fn mapping_field(field: RecordField, text: &str, strict_hex: bool) -> Result<CodePoint, FieldError> {
    if text.is_empty() {
        return Ok(CodePoint::null());
    }
    code_point_field(field, text, strict_hex)
}
