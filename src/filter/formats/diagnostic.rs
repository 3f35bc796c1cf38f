//! Caret diagnostics for parse errors

use std::fmt::Write as _;

use crate::filter::ast::ParseError;

/// Render an error with its message, optionally followed by the source line and a caret
/// under the failing column.
///
/// ```text
/// error: AreaLevel: expected a number
///  --> line 4, column 14
///   |
/// 4 | AreaLevel >= x
///   |              ^
/// ```
pub fn render_error(error: &ParseError, show_source: bool) -> String {
    let mut out = String::new();
    let message = match (&error.message, error.kind) {
        (Some(message), Some(kind)) => format!("{}: {}", kind, message),
        (Some(message), None) => message.clone(),
        (None, Some(kind)) => format!("invalid {} rule", kind),
        (None, None) => "invalid rule".to_string(),
    };
    let _ = writeln!(out, "error: {}", message);
    let _ = writeln!(
        out,
        " --> line {}, column {}",
        error.line,
        error.char_column() + 1
    );
    if !show_source {
        return out;
    }

    let gutter = error.line.to_string();
    let pad = " ".repeat(gutter.len());
    let line = error.text.trim_end();
    // tabs are kept so the caret lines up however the terminal expands them
    let lead: String = line
        .chars()
        .take(error.char_column())
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();
    let _ = writeln!(out, "{} |", pad);
    let _ = writeln!(out, "{} | {}", gutter, line);
    let _ = writeln!(out, "{} | {}^", pad, lead);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::ast::FilterKind;

    #[test]
    fn test_caret_under_column() {
        let error = ParseError::new(4, 13, "AreaLevel >= x")
            .with_message("expected a number")
            .with_kind(Some(FilterKind::AreaLevel));
        insta::assert_snapshot!(render_error(&error, true), @r###"
        error: AreaLevel: expected a number
         --> line 4, column 14
          |
        4 | AreaLevel >= x
          |              ^
        "###);
    }

    #[test]
    fn test_tabs_are_preserved() {
        let error = ParseError::new(12, 2, "\t\tBogus").with_message("unknown keyword `Bogus`");
        let rendered = render_error(&error, true);
        assert!(rendered.contains("12 | \t\tBogus\n"));
        assert!(rendered.ends_with("   | \t\t^\n"));
    }

    #[test]
    fn test_without_source() {
        let error = ParseError::new(1, 0, "Foo");
        assert_eq!(render_error(&error, false), "error: invalid rule\n --> line 1, column 1\n");
    }
}
