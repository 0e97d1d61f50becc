use std::fmt::{self, Write};

use crate::common::types::{CaseKind, CodePoint, LetterEntry, CODE_POINT_NULL};
use crate::common::unicode::UnicodeTables;

const INCLUDE_GUARD: &str = "UNICODE_DATA_H";

/// Transcribes the tables into a C header. Entries are written in table
/// order; nothing is filtered or merged here.
pub fn write_header<W: Write>(tables: &UnicodeTables, out: &mut W) -> fmt::Result {
    writeln!(out, "/*")?;
    writeln!(out, "  This header was generated by unicode-data-tables from UnicodeData.txt.")?;
    writeln!(out, "  Do not edit; regenerate it instead.")?;
    writeln!(out, "*/")?;
    writeln!(out)?;
    writeln!(out, "#ifndef {INCLUDE_GUARD}")?;
    writeln!(out, "#define {INCLUDE_GUARD}")?;
    writeln!(out)?;
    writeln!(out, "#include <stdint.h>")?;
    writeln!(out)?;
    writeln!(out, "#define CODE_POINT_NULL 0x{CODE_POINT_NULL:08X}")?;
    writeln!(out)?;
    for case in CaseKind::ALL {
        writeln!(out, "#define {} {}", case.symbol(), case as u8)?;
    }
    writeln!(out)?;
    writeln!(out, "struct letter {{")?;
    writeln!(out, "  uint32_t code_point;")?;
    writeln!(out, "  uint8_t character_case;")?;
    writeln!(out, "  uint32_t upper_version;")?;
    writeln!(out, "  uint32_t lower_version;")?;
    writeln!(out, "  uint32_t title_version;")?;
    writeln!(out, "}};")?;
    writeln!(out)?;

    write_letters(out, tables.letters())?;
    write_code_points(out, "NUM_NUMBERS", "numbers", tables.numbers())?;
    write_code_points(out, "NUM_WHITESPACE", "whitespace", tables.whitespace())?;
    write_code_points(out, "NUM_NEWLINES", "newlines", tables.newlines())?;

    writeln!(out, "#endif")
}

pub fn render_header(tables: &UnicodeTables) -> Result<String, fmt::Error> {
    let mut out = String::with_capacity(64 * (tables.letters().len() + 1));
    write_header(tables, &mut out)?;
    Ok(out)
}

fn write_letters<W: Write>(out: &mut W, letters: &[LetterEntry]) -> fmt::Result {
    writeln!(out, "#define NUM_LETTERS {}", letters.len())?;
    writeln!(out)?;
    writeln!(out, "static letter letters[] = {{")?;
    for letter in letters {
        writeln!(
            out,
            "  {{{}, 0x{:02X}, {}, {}, {}}},",
            letter.code_point, letter.case as u8, letter.upper, letter.lower, letter.title
        )?;
    }
    writeln!(out, "}};")?;
    writeln!(out)
}

fn write_code_points<W: Write>(out: &mut W, count_name: &str, array_name: &str, entries: &[CodePoint]) -> fmt::Result {
    writeln!(out, "#define {count_name} {}", entries.len())?;
    writeln!(out)?;
    writeln!(out, "static uint32_t {array_name}[] = {{")?;
    for entry in entries {
        writeln!(out, "  {entry},")?;
    }
    writeln!(out, "}};")?;
    writeln!(out)
}
