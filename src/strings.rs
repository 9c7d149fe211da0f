//! CP932 (Shift-JIS) decoding for BIN string arguments, and a TSV writer
//! for the resulting string table.
use encoding_rs::SHIFT_JIS;

use crate::bin_script::BinProgram;

/// One row of the exported string table: which instruction/argument a
/// string came from, its decoded form, and whether decoding was clean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringTableRow {
    pub instruction_index: usize,
    pub argument_index: usize,
    pub decoded: String,
    /// `false` if `encoding_rs` had to fall back to the replacement
    /// character anywhere in this string.
    pub decode_ok: bool,
}

/// Decodes `bytes` as CP932. Malformed sequences are replaced per
/// `encoding_rs`'s standard replacement-character behavior rather than
/// rejected outright, since string arguments are free-form game text. The
/// returned `bool` is `false` if that fallback fired, so a caller can record
/// the failure instead of silently losing it.
pub fn decode_cp932(bytes: &[u8]) -> (String, bool) {
    let (decoded, _encoding, had_errors) = SHIFT_JIS.decode(bytes);
    (decoded.into_owned(), !had_errors)
}

/// Collects every string-argument's decoded text from a disassembled
/// program, in instruction order, skipping empty strings.
pub fn collect_string_table(program: &BinProgram) -> Vec<StringTableRow> {
    let mut rows = Vec::new();
    for (instruction_index, instruction) in program.instructions.iter().enumerate() {
        for (argument_index, argument) in instruction.arguments.iter().enumerate() {
            let Some(bytes) = &argument.string_bytes else {
                continue;
            };
            let (decoded, decode_ok) = decode_cp932(bytes);
            if decoded.is_empty() {
                continue;
            }
            rows.push(StringTableRow {
                instruction_index,
                argument_index,
                decoded,
                decode_ok,
            });
        }
    }
    rows
}

/// Renders a string table as TSV: `instruction_index`, `argument_index`,
/// `unicode_string_length`, `quote_char`, and the quoted-body text with its
/// surrounding quote characters stripped. Quoting mirrors `repr()`-style
/// conventions: single-quoted, unless the string contains `'` but not `"`,
/// in which case double-quoted.
pub fn render_tsv(rows: &[StringTableRow]) -> String {
    let mut out = String::from(
        "instruction_index\targument_index\tunicode_string_length\tpython_string_quote\trepr_decoded_string_with_quote_removed\n",
    );
    for row in rows {
        let quote = pick_quote_char(&row.decoded);
        let escaped = escape_repr_body(&row.decoded, quote);
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\n",
            row.instruction_index,
            row.argument_index,
            row.decoded.chars().count(),
            quote,
            escaped,
        ));
    }
    out
}

fn pick_quote_char(s: &str) -> char {
    if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    }
}

fn escape_repr_body(s: &str, quote: char) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}
