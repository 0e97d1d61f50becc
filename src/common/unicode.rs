use crate::common::types::{CaseKind, CodePoint, LetterEntry, MAX_CODE_POINT};
use crate::error::TablesError;

/// Tab, LF, VT, FF, CR, NEL. Always the first whitespace entries.
pub const WHITESPACE_SEED: [u32; 6] = [0x0009, 0x000A, 0x000B, 0x000C, 0x000D, 0x0085];
/// The whitespace seed without tab. Always the first newline entries.
pub const NEWLINE_SEED: [u32; 5] = [0x000A, 0x000B, 0x000C, 0x000D, 0x0085];

/// The four classification buckets, in input order.
///
/// Entries are only ever appended; nothing is sorted or deduplicated, so a
/// seeded control character listed again by the database appears twice.
/// Queries scan linearly and take the first match, the same way the
/// consumer of the generated header does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnicodeTables {
    pub(crate) letters: Vec<LetterEntry>,
    pub(crate) numbers: Vec<CodePoint>,
    pub(crate) whitespace: Vec<CodePoint>,
    pub(crate) newlines: Vec<CodePoint>,
}

impl Default for UnicodeTables {
    fn default() -> Self {
        Self::new()
    }
}

impl UnicodeTables {
    pub fn new() -> Self {
        Self {
            letters: Vec::new(),
            numbers: Vec::new(),
            whitespace: WHITESPACE_SEED.iter().copied().map(CodePoint::from_value).collect(),
            newlines: NEWLINE_SEED.iter().copied().map(CodePoint::from_value).collect(),
        }
    }

    pub fn letters(&self) -> &[LetterEntry] {
        &self.letters
    }

    pub fn numbers(&self) -> &[CodePoint] {
        &self.numbers
    }

    pub fn whitespace(&self) -> &[CodePoint] {
        &self.whitespace
    }

    pub fn newlines(&self) -> &[CodePoint] {
        &self.newlines
    }

    pub fn is_alpha(&self, code_point: u32) -> Result<bool, TablesError> {
        Ok(self.letter(checked(code_point)?).is_some())
    }

    pub fn is_upper(&self, code_point: u32) -> Result<bool, TablesError> {
        self.has_case(code_point, CaseKind::Upper)
    }

    pub fn is_lower(&self, code_point: u32) -> Result<bool, TablesError> {
        self.has_case(code_point, CaseKind::Lower)
    }

    pub fn is_title(&self, code_point: u32) -> Result<bool, TablesError> {
        self.has_case(code_point, CaseKind::Title)
    }

    pub fn is_numeric(&self, code_point: u32) -> Result<bool, TablesError> {
        Ok(contains(&self.numbers, checked(code_point)?))
    }

    pub fn is_whitespace(&self, code_point: u32) -> Result<bool, TablesError> {
        Ok(contains(&self.whitespace, checked(code_point)?))
    }

    pub fn is_newline(&self, code_point: u32) -> Result<bool, TablesError> {
        Ok(contains(&self.newlines, checked(code_point)?))
    }

    /// Returns the input unchanged when no uppercase form exists.
    pub fn to_upper(&self, code_point: u32) -> Result<u32, TablesError> {
        self.map_case(code_point, |letter| &letter.upper)
    }

    pub fn to_lower(&self, code_point: u32) -> Result<u32, TablesError> {
        self.map_case(code_point, |letter| &letter.lower)
    }

    pub fn to_title(&self, code_point: u32) -> Result<u32, TablesError> {
        self.map_case(code_point, |letter| &letter.title)
    }

    fn letter(&self, code_point: u32) -> Option<&LetterEntry> {
        self.letters
            .iter()
            .find(|letter| letter.code_point.value() == code_point)
    }

    fn has_case(&self, code_point: u32, case: CaseKind) -> Result<bool, TablesError> {
        let code_point = checked(code_point)?;
        Ok(self
            .letters
            .iter()
            .any(|letter| letter.code_point.value() == code_point && letter.case == case))
    }

    fn map_case<F>(&self, code_point: u32, mapping: F) -> Result<u32, TablesError>
    where
        F: Fn(&LetterEntry) -> &CodePoint,
    {
        let code_point = checked(code_point)?;
        match self.letter(code_point).map(mapping) {
            Some(mapped) if !mapped.is_null() => Ok(mapped.value()),
            _ => Ok(code_point),
        }
    }
}

fn checked(code_point: u32) -> Result<u32, TablesError> {
    if code_point > MAX_CODE_POINT {
        return Err(TablesError::InvalidCodePoint(code_point));
    }
    Ok(code_point)
}

fn contains(table: &[CodePoint], code_point: u32) -> bool {
    table.iter().any(|entry| entry.value() == code_point)
}
