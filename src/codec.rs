//! Newline escaping for the `code` field.
//!
//! The persisted document carries line breaks inside `code` as the two
//! characters `\` `n`; the editor works on real line breaks. Nothing else is
//! escaped.

const ESCAPED_NEWLINE: &str = "\\n";

pub fn decode_code(persisted: &str) -> String {
    persisted.replace(ESCAPED_NEWLINE, "\n")
}

pub fn encode_code(edited: &str) -> String {
    edited.replace('\n', ESCAPED_NEWLINE)
}
