//! Argument grammars
//!
//! Each function reads one payload shape from a [Cursor] positioned right after the
//! keyword. They return typed values; the grammar table wraps them into rules.

use crate::filter::ast::{
    values::is_socket_color, AlertSound, Comparison, GemQualityType, IconColor, IconShape,
    IconStyle, MinimapIcon, Rarity, Rgba, SocketSpec,
};
use crate::filter::lexer::TokenKind;

use super::cursor::{Cursor, GrammarError, GrammarResult};

/// Optional leading operator; whitespace after it is optional
pub fn comparison(cursor: &mut Cursor<'_>) -> Option<Comparison> {
    cursor.skip_whitespace();
    let comparison = match cursor.kind() {
        TokenKind::Exclamation => Comparison::NotEquals,
        TokenKind::Equal => Comparison::Equals,
        TokenKind::EqualEqual => Comparison::ExactlyEquals,
        TokenKind::LessThan => Comparison::LessThan,
        TokenKind::LessOrEqual => Comparison::LessOrEqual,
        TokenKind::GreaterThan => Comparison::GreaterThan,
        TokenKind::GreaterOrEqual => Comparison::GreaterOrEqual,
        _ => return None,
    };
    cursor.bump();
    cursor.skip_whitespace();
    Some(comparison)
}

/// `True` or `False`, any case
pub fn boolean(cursor: &mut Cursor<'_>) -> GrammarResult<bool> {
    cursor.skip_whitespace();
    let value = if cursor.kind() != TokenKind::String {
        None
    } else if cursor.text().eq_ignore_ascii_case("true") {
        Some(true)
    } else if cursor.text().eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    };
    match value {
        Some(value) => {
            cursor.bump();
            Ok(value)
        }
        None => cursor.error("expected `True` or `False`"),
    }
}

/// Non-negative integer
pub fn integer(cursor: &mut Cursor<'_>) -> GrammarResult<u32> {
    cursor.skip_whitespace();
    match cursor.kind() {
        TokenKind::Number => {
            let value = cursor
                .text()
                .parse::<u32>()
                .map_err(|_| GrammarError::new(cursor.column(), "number is too large"))?;
            cursor.bump();
            Ok(value)
        }
        TokenKind::Dash => cursor.error("expected a non-negative number"),
        _ => cursor.error("expected a number"),
    }
}

/// Integer within `0..=max`
pub fn bounded(cursor: &mut Cursor<'_>, max: u32, what: &str) -> GrammarResult<u32> {
    cursor.skip_whitespace();
    let column = cursor.column();
    match integer(cursor) {
        Ok(value) if value <= max => Ok(value),
        _ => Err(GrammarError::new(
            column,
            format!("{} must be between 0 and {}", what, max),
        )),
    }
}

pub fn byte(cursor: &mut Cursor<'_>) -> GrammarResult<u8> {
    let value = bounded(cursor, u8::MAX.into(), "color component")?;
    Ok(value as u8)
}

/// Bare words or non-empty quoted strings up to the end of the rule
pub fn string_list(cursor: &mut Cursor<'_>) -> GrammarResult<Vec<String>> {
    let mut values = Vec::new();
    loop {
        cursor.skip_whitespace();
        match cursor.kind() {
            TokenKind::String => values.push(cursor.text().to_string()),
            TokenKind::QuotedString => {
                let inner = unquote(cursor.text());
                if inner.is_empty() {
                    return cursor.error("empty string");
                }
                values.push(inner.to_string());
            }
            kind if kind.ends_rule() => break,
            _ => return cursor.error(format!("unexpected `{}`", cursor.text())),
        }
        cursor.bump();
    }
    if values.is_empty() {
        return cursor.error("expected at least one name");
    }
    Ok(values)
}

/// String list behind an optional `=` or `==`
pub fn compared_strings(cursor: &mut Cursor<'_>) -> GrammarResult<(Comparison, Vec<String>)> {
    cursor.skip_whitespace();
    let column = cursor.column();
    let comparison = comparison(cursor).unwrap_or_default();
    if !comparison.is_equality() {
        return Err(GrammarError::new(
            column,
            format!("`{}` cannot compare names", comparison),
        ));
    }
    Ok((comparison, string_list(cursor)?))
}

/// One or more rarities
pub fn rarities(cursor: &mut Cursor<'_>) -> GrammarResult<Vec<Rarity>> {
    let mut values = Vec::new();
    while !cursor.at_end_of_rule() {
        let name = word(cursor)?;
        match Rarity::from_keyword(name) {
            Some(rarity) => values.push(rarity),
            None => return cursor.error(format!("unknown rarity `{}`", name)),
        }
        cursor.bump();
    }
    if values.is_empty() {
        return cursor.error("expected a rarity");
    }
    Ok(values)
}

pub fn gem_quality_type(cursor: &mut Cursor<'_>) -> GrammarResult<GemQualityType> {
    cursor.skip_whitespace();
    let name = word(cursor)?;
    let value = match GemQualityType::from_keyword(name) {
        Some(value) => value,
        None => return cursor.error(format!("unknown quality type `{}`", name)),
    };
    cursor.bump();
    Ok(value)
}

/// Socket group such as `5RGB`, `"RRG"` or `4 GG`
pub fn sockets(cursor: &mut Cursor<'_>) -> GrammarResult<SocketSpec> {
    cursor.skip_whitespace();
    let text = match cursor.kind() {
        TokenKind::Number | TokenKind::String => cursor.text(),
        TokenKind::QuotedString => unquote(cursor.text()),
        _ => return cursor.error("expected a socket group"),
    };
    let column = cursor.column();
    let digits_end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    let (digits, letters) = text.split_at(digits_end);
    let count = if digits.is_empty() {
        None
    } else {
        let count = digits
            .parse::<u32>()
            .map_err(|_| GrammarError::new(column, "socket count is too large"))?;
        Some(count)
    };
    let mut colors = socket_colors(cursor, letters)?.to_string();
    if count.is_none() && colors.is_empty() {
        return cursor.error("expected a socket group");
    }
    cursor.bump();

    loop {
        cursor.skip_whitespace();
        let letters = match cursor.kind() {
            TokenKind::String => cursor.text(),
            TokenKind::QuotedString => unquote(cursor.text()),
            _ => break,
        };
        colors.push_str(socket_colors(cursor, letters)?);
        cursor.bump();
    }
    Ok(SocketSpec::new(count, &colors))
}

fn socket_colors<'a>(cursor: &Cursor<'_>, letters: &'a str) -> GrammarResult<&'a str> {
    match letters.chars().find(|c| !is_socket_color(*c)) {
        Some(c) => cursor.error(format!("`{}` is not a socket color", c)),
        None => Ok(letters),
    }
}

/// Three color components and an optional alpha
pub fn rgba(cursor: &mut Cursor<'_>, default_alpha: u8) -> GrammarResult<Rgba> {
    let red = byte(cursor)?;
    let green = byte(cursor)?;
    let blue = byte(cursor)?;
    let alpha = if cursor.at_end_of_rule() {
        default_alpha
    } else {
        byte(cursor)?
    };
    Ok(Rgba::new(red, green, blue, alpha))
}

fn volume(cursor: &mut Cursor<'_>) -> GrammarResult<Option<u16>> {
    if cursor.at_end_of_rule() {
        return Ok(None);
    }
    let volume = bounded(cursor, AlertSound::MAX_VOLUME.into(), "volume")?;
    Ok(Some(volume as u16))
}

/// Sound id 1 to 16 or `None`, then an optional volume
pub fn alert_sound(cursor: &mut Cursor<'_>) -> GrammarResult<AlertSound> {
    cursor.skip_whitespace();
    if cursor.kind() == TokenKind::String && cursor.text() == "None" {
        cursor.bump();
        return Ok(AlertSound::SILENT);
    }
    let column = cursor.column();
    let id = match integer(cursor) {
        Ok(id @ 1..=16) => id as u8,
        _ => return Err(GrammarError::new(column, "sound id must be between 1 and 16")),
    };
    let volume = volume(cursor)?.unwrap_or(AlertSound::DEFAULT_VOLUME);
    Ok(AlertSound {
        id: Some(id),
        volume,
    })
}

/// Quoted file path and an optional volume
pub fn custom_sound(cursor: &mut Cursor<'_>) -> GrammarResult<(String, Option<u16>)> {
    cursor.skip_whitespace();
    if cursor.kind() != TokenKind::QuotedString {
        return cursor.error("expected a quoted file path");
    }
    let path = unquote(cursor.text());
    if path.is_empty() {
        return cursor.error("empty string");
    }
    let path = path.to_string();
    cursor.bump();
    Ok((path, volume(cursor)?))
}

/// Size, color and shape; a size of -1 may stand alone
pub fn minimap_icon(cursor: &mut Cursor<'_>) -> GrammarResult<MinimapIcon> {
    cursor.skip_whitespace();
    let column = cursor.column();
    let negative = cursor.accept(TokenKind::Dash).is_some();
    let size = match (negative, integer(cursor)) {
        (false, Ok(size @ 0..=2)) => size as i8,
        (true, Ok(1)) => -1,
        _ => return Err(GrammarError::new(column, "icon size must be between -1 and 2")),
    };
    if cursor.at_end_of_rule() {
        if size == -1 {
            return Ok(MinimapIcon { size, style: None });
        }
        return cursor.error("expected an icon color");
    }

    let name = word(cursor)?;
    let color = match IconColor::from_keyword(name) {
        Some(color) => color,
        None => return cursor.error(format!("unknown color `{}`", name)),
    };
    cursor.bump();
    cursor.skip_whitespace();
    let name = word(cursor)?;
    let shape = match IconShape::from_keyword(name) {
        Some(shape) => shape,
        None => return cursor.error(format!("unknown shape `{}`", name)),
    };
    cursor.bump();
    Ok(MinimapIcon {
        size,
        style: Some(IconStyle { color, shape }),
    })
}

/// Beam color or `None`, optionally followed by `Temp`
pub fn play_effect(cursor: &mut Cursor<'_>) -> GrammarResult<(Option<IconColor>, bool)> {
    cursor.skip_whitespace();
    let name = word(cursor)?;
    if name == "None" {
        cursor.bump();
        return Ok((None, false));
    }
    let color = match IconColor::from_keyword(name) {
        Some(color) => color,
        None => return cursor.error(format!("unknown color `{}`", name)),
    };
    cursor.bump();
    cursor.skip_whitespace();
    let temp = cursor.kind() == TokenKind::String && cursor.text() == "Temp";
    if temp {
        cursor.bump();
    }
    Ok((Some(color), temp))
}

/// Current token as a bare word, without consuming it
fn word<'a>(cursor: &Cursor<'a>) -> GrammarResult<&'a str> {
    match cursor.kind() {
        TokenKind::String => Ok(cursor.text()),
        _ => cursor.error("expected a name"),
    }
}

fn unquote(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|text| text.strip_suffix('"'))
        .unwrap_or(text)
}
