//! Text rendering
//!
//! `Display` on AST values writes canonical filter syntax: names are quoted, operators are
//! written out, and parsing the rendered text gives back an equal value.

use std::fmt::{self, Display, Write as _};

use crate::filter::ast::{
    Action, Category, Criterion, CriterionValue, ParsedDocument, Rule, RuleKind,
};
use crate::filter::config::OutputConfig;
use crate::filter::lexer::TokenKind;

/// Layout knobs for listings and document dumps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub indent: String,
    /// Truncate lines to this many characters, 0 for no limit
    pub max_width: usize,
    pub line_numbers: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            max_width: 0,
            line_numbers: true,
        }
    }
}

impl From<&OutputConfig> for RenderOptions {
    fn from(config: &OutputConfig) -> Self {
        Self {
            indent: config.indent.clone(),
            max_width: config.max_width,
            line_numbers: config.line_numbers,
        }
    }
}

impl Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        match &self.value {
            CriterionValue::Boolean(value) => {
                return f.write_str(if *value { " True" } else { " False" })
            }
            CriterionValue::GemQuality(value) => return write!(f, " {}", value),
            _ => {}
        }
        write!(f, " {}", self.comparison)?;
        match &self.value {
            CriterionValue::Integer(value) => write!(f, " {}", value),
            CriterionValue::Strings(values) => write_quoted(f, values),
            CriterionValue::ExplicitMods { count, mods } => {
                if let Some(count) = count {
                    write!(f, " {}", count)?;
                }
                write_quoted(f, mods)
            }
            CriterionValue::Rarity(values) => {
                for value in values {
                    write!(f, " {}", value)?;
                }
                Ok(())
            }
            CriterionValue::Sockets(spec) => {
                f.write_char(' ')?;
                if let Some(count) = spec.count {
                    write!(f, "{}", count)?;
                }
                f.write_str(&spec.colors)
            }
            CriterionValue::Boolean(_) | CriterionValue::GemQuality(_) => Ok(()),
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, values: &[String]) -> fmt::Result {
    for value in values {
        write!(f, " \"{}\"", value)?;
    }
    Ok(())
}

impl Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())?;
        match self {
            Action::SetFontSize { size } => write!(f, " {}", size),
            Action::SetTextColor(c) | Action::SetBorderColor(c) | Action::SetBackgroundColor(c) => {
                write!(f, " {} {} {} {}", c.red, c.green, c.blue, c.alpha)
            }
            Action::PlayAlertSound(sound) | Action::PlayAlertSoundPositional(sound) => {
                match sound.id {
                    Some(id) => write!(f, " {} {}", id, sound.volume),
                    None => f.write_str(" None"),
                }
            }
            Action::CustomAlertSound { path, volume } => {
                write!(f, " \"{}\"", path)?;
                match volume {
                    Some(volume) => write!(f, " {}", volume),
                    None => Ok(()),
                }
            }
            Action::MinimapIcon(icon) => {
                write!(f, " {}", icon.size)?;
                match icon.style {
                    Some(style) => write!(f, " {} {}", style.color, style.shape),
                    None => Ok(()),
                }
            }
            Action::PlayEffect { color, temp } => {
                match color {
                    Some(color) => write!(f, " {}", color)?,
                    None => f.write_str(" None")?,
                }
                if *temp {
                    f.write_str(" Temp")?;
                }
                Ok(())
            }
            Action::DisableDropSound | Action::EnableDropSound | Action::Continue => Ok(()),
        }
    }
}

impl Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::Blank => Ok(()),
            RuleKind::Error(error) => f.write_str(error.text.trim()),
            RuleKind::Visibility(visibility) => write!(f, "{}", visibility),
            RuleKind::Disabled(inner) => write!(f, "# {}", inner),
            RuleKind::Criterion(criterion) => write!(f, "{}", criterion),
            RuleKind::Action(action) => write!(f, "{}", action),
        }
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, &self.comment) {
            // raw error text already holds its comment
            (RuleKind::Error(_), _) | (_, None) => write!(f, "{}", self.kind),
            (RuleKind::Blank, Some(comment)) => write!(f, "## {}", comment),
            (kind, Some(comment)) => write!(f, "{} # {}", kind, comment),
        }
    }
}

/// Label shown next to a rule in listings
fn label(rule: &Rule) -> String {
    match &rule.kind {
        RuleKind::Blank => String::new(),
        RuleKind::Disabled(inner) => match inner.filter_kind() {
            Some(kind) => format!("#{}", kind),
            None => "#".to_string(),
        },
        RuleKind::Error(_) => "ParseError".to_string(),
        _ => rule
            .filter_kind()
            .map(|kind| kind.to_string())
            .unwrap_or_default(),
    }
}

fn truncate(line: &str, max_width: usize) -> String {
    let line = line.trim_end();
    if max_width == 0 || line.chars().count() <= max_width {
        return line.to_string();
    }
    let keep = max_width.saturating_sub(3);
    let mut truncated: String = line.chars().take(keep).collect();
    truncated.push_str("...");
    truncated
}

/// One line per rule: line number, rule label and rendered rule.
///
/// Errors show the line from the failing column on.
pub fn render_rules(rules: &[Rule], options: &RenderOptions) -> String {
    let mut out = String::new();
    for (index, rule) in rules.iter().enumerate() {
        let text = match (&rule.kind, rule.category()) {
            (RuleKind::Error(error), _) if error.column > 0 => {
                let rest = error.text.get(error.column..).unwrap_or(&error.text);
                format!("...{}", rest)
            }
            (_, Category::Criterion | Category::Action) => format!("{}{}", options.indent, rule),
            _ => rule.to_string(),
        };
        let line = if options.line_numbers {
            format!("{:<5} {:<22} {}", index + 1, label(rule), text)
        } else {
            format!("{:<22} {}", label(rule), text)
        };
        out.push_str(&truncate(&line, options.max_width));
        out.push('\n');
    }
    out
}

/// Blocks in filter syntax, separated by blank lines.
///
/// Visibility rules start at the margin, everything else in a block is indented.
/// Top-level errors are listed first as comments.
pub fn render_document(document: &ParsedDocument, options: &RenderOptions) -> String {
    let mut lines: Vec<String> = Vec::new();
    for error in &document.errors {
        lines.push(format!("## error: {}", error));
    }
    if !document.errors.is_empty() && !document.blocks.is_empty() {
        lines.push(String::new());
    }

    for (index, block) in document.blocks.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        for rule in &block.rules {
            let line = if rule.opens_block() || rule.is_pure_blank() {
                rule.to_string()
            } else {
                format!("{}{}", options.indent, rule)
            };
            lines.push(truncate(&line, options.max_width));
        }
    }
    lines.join("\n")
}

/// Token kinds and texts of one line each
pub fn render_tokens(tokens: &[(TokenKind, &str)]) -> String {
    let mut out = String::new();
    for (kind, text) in tokens {
        match kind {
            TokenKind::EndOfLine | TokenKind::EndOfFile => {
                let _ = writeln!(out, "<{:?}>", kind);
            }
            _ => {
                let _ = write!(out, "<{:?}:{}>", kind, text);
            }
        }
    }
    out
}
