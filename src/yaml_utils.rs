//! YAML utilities for session archive preprocessing
//!
//! Session files written by older cache tooling occasionally contain control
//! characters that break standard YAML parsers. This module cleans the text
//! without parsing it.

use crate::{ExportError, Result};

/// Remove control characters (except `\n`, `\r`, `\t`) from session YAML
///
/// Returns an error when nothing but whitespace remains.
pub fn preprocess_session_yaml(yaml: &str) -> Result<String> {
    let result: String = yaml
        .chars()
        .filter(|ch| !matches!(ch, '\x00'..='\x08' | '\x0B'..='\x0C' | '\x0E'..='\x1F' | '\x7F'))
        .collect();

    if result.trim().is_empty() {
        return Err(ExportError::parse_error(
            "YAML preprocessing",
            "YAML is empty after preprocessing",
        ));
    }

    Ok(result)
}

/// Strip control characters from free text that ends up in generated comments
///
/// U+2028 and U+2029 are line terminators in JavaScript and are removed too.
pub fn strip_control_chars(text: &str) -> String {
    text.chars().filter(|ch| !ch.is_control() && !matches!(ch, '\u{2028}' | '\u{2029}')).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preprocess_removes_control_characters() {
        let input = "EventName:\x00\x01\x02 Silverstone\x03";
        let result = preprocess_session_yaml(input).unwrap();
        assert_eq!(result, "EventName: Silverstone");
    }

    #[test]
    fn test_preprocess_keeps_valid_whitespace() {
        let input = "Key:\n\r\t  Value";
        let result = preprocess_session_yaml(input).unwrap();
        assert!(result.contains('\n'));
        assert!(result.contains('\r'));
        assert!(result.contains('\t'));
    }

    #[test]
    fn test_preprocess_rejects_empty() {
        assert!(preprocess_session_yaml("\x00\x01  \n").is_err());
    }

    #[test]
    fn test_strip_control_chars_flattens_newlines() {
        assert_eq!(strip_control_chars("British\nGrand\r\nPrix\x00"), "BritishGrandPrix");
    }

    #[test]
    fn test_strip_control_chars_removes_js_line_separators() {
        assert_eq!(strip_control_chars("GP\u{2029}throw 1;\u{2028}"), "GPthrow 1;");
    }
}
