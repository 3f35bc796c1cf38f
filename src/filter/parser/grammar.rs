//! Keyword grammar table
//!
//! Keywords are grouped by their first letter. Within a group the specs are tried in order
//! and the first whose keyword equals the token text wins. Each spec pairs the keyword with
//! the function that parses its arguments; adding a keyword is a table edit.

use crate::filter::ast::{
    Action, Comparison, Criterion, CriterionValue, FilterKind, RuleKind, Visibility,
};

use crate::filter::lexer::TokenKind;

use super::arguments as args;
use super::cursor::{Cursor, GrammarResult};

pub type ParseFn = fn(FilterKind, &mut Cursor<'_>) -> GrammarResult<RuleKind>;

#[derive(Clone, Copy)]
pub struct GrammarSpec {
    pub kind: FilterKind,
    pub arguments: ParseFn,
}

impl GrammarSpec {
    const fn new(kind: FilterKind, arguments: ParseFn) -> Self {
        Self { kind, arguments }
    }

    pub fn keyword(&self) -> &'static str {
        self.kind.as_str()
    }

    /// Parse the arguments following the keyword, up to the end of the rule
    pub fn parse(&self, cursor: &mut Cursor<'_>) -> GrammarResult<RuleKind> {
        let kind = (self.arguments)(self.kind, cursor)?;
        cursor.expect_end()?;
        Ok(kind)
    }
}

use FilterKind as K;

const A: &[GrammarSpec] = &[
    GrammarSpec::new(K::AlternateQuality, boolean),
    GrammarSpec::new(K::AnyEnchantment, boolean),
    GrammarSpec::new(K::AreaLevel, integer),
];

const B: &[GrammarSpec] = &[
    GrammarSpec::new(K::BaseType, strings),
    GrammarSpec::new(K::BlightedMap, boolean),
];

const C: &[GrammarSpec] = &[
    GrammarSpec::new(K::Class, strings),
    GrammarSpec::new(K::Continue, flag),
    GrammarSpec::new(K::CorruptedMods, integer),
    GrammarSpec::new(K::Corrupted, boolean),
    GrammarSpec::new(K::CustomAlertSound, custom_sound),
];

const D: &[GrammarSpec] = &[
    GrammarSpec::new(K::DropLevel, integer),
    GrammarSpec::new(K::DisableDropSound, flag),
];

const E: &[GrammarSpec] = &[
    GrammarSpec::new(K::EnableDropSound, flag),
    GrammarSpec::new(K::ElderItem, boolean),
    GrammarSpec::new(K::EnchantmentPassiveNode, strings),
    GrammarSpec::new(K::EnchantmentPassiveNum, integer),
    GrammarSpec::new(K::ElderMap, boolean),
];

const F: &[GrammarSpec] = &[GrammarSpec::new(K::FracturedItem, boolean)];

const G: &[GrammarSpec] = &[
    GrammarSpec::new(K::GemLevel, integer),
    GrammarSpec::new(K::GemQualityType, gem_quality),
];

const H: &[GrammarSpec] = &[
    GrammarSpec::new(K::Hide, visibility),
    GrammarSpec::new(K::HasInfluence, strings),
    GrammarSpec::new(K::Height, integer),
    GrammarSpec::new(K::HasExplicitMod, explicit_mods),
    GrammarSpec::new(K::HasEnchantment, strings),
];

const I: &[GrammarSpec] = &[
    GrammarSpec::new(K::ItemLevel, integer),
    GrammarSpec::new(K::Identified, boolean),
];

const L: &[GrammarSpec] = &[GrammarSpec::new(K::LinkedSockets, integer)];

const M: &[GrammarSpec] = &[
    GrammarSpec::new(K::MinimapIcon, minimap_icon),
    GrammarSpec::new(K::MapTier, integer),
    GrammarSpec::new(K::Mirrored, boolean),
];

const P: &[GrammarSpec] = &[
    GrammarSpec::new(K::PlayAlertSound, alert_sound),
    GrammarSpec::new(K::PlayEffect, play_effect),
    GrammarSpec::new(K::Prophecy, strings),
    GrammarSpec::new(K::PlayAlertSoundPositional, alert_sound),
];

const Q: &[GrammarSpec] = &[GrammarSpec::new(K::Quality, integer)];

const R: &[GrammarSpec] = &[
    GrammarSpec::new(K::Rarity, rarity),
    GrammarSpec::new(K::Replica, boolean),
];

const S: &[GrammarSpec] = &[
    GrammarSpec::new(K::Show, visibility),
    GrammarSpec::new(K::SetBackgroundColor, color),
    GrammarSpec::new(K::SetBorderColor, color),
    GrammarSpec::new(K::SetFontSize, font_size),
    GrammarSpec::new(K::SetTextColor, color),
    GrammarSpec::new(K::Sockets, sockets),
    GrammarSpec::new(K::SocketGroup, sockets),
    GrammarSpec::new(K::ShaperItem, boolean),
    GrammarSpec::new(K::ShapedMap, boolean),
    GrammarSpec::new(K::StackSize, integer),
    GrammarSpec::new(K::SynthesisedItem, boolean),
];

const W: &[GrammarSpec] = &[GrammarSpec::new(K::Width, integer)];

/// Specs worth trying for a keyword starting with `first`
pub fn candidates(first: char) -> &'static [GrammarSpec] {
    match first {
        'A' => A,
        'B' => B,
        'C' => C,
        'D' => D,
        'E' => E,
        'F' => F,
        'G' => G,
        'H' => H,
        'I' => I,
        'L' => L,
        'M' => M,
        'P' => P,
        'Q' => Q,
        'R' => R,
        'S' => S,
        'W' => W,
        _ => &[],
    }
}

pub fn lookup(keyword: &str) -> Option<&'static GrammarSpec> {
    let first = keyword.chars().next()?;
    candidates(first)
        .iter()
        .find(|spec| spec.keyword() == keyword)
}

fn criterion(kind: FilterKind, comparison: Comparison, value: CriterionValue) -> RuleKind {
    RuleKind::Criterion(Criterion::new(kind, comparison, value))
}

fn visibility(kind: FilterKind, _: &mut Cursor<'_>) -> GrammarResult<RuleKind> {
    let visibility = match kind {
        FilterKind::Hide => Visibility::Hide,
        _ => Visibility::Show,
    };
    Ok(RuleKind::Visibility(visibility))
}

fn boolean(kind: FilterKind, cursor: &mut Cursor<'_>) -> GrammarResult<RuleKind> {
    let value = args::boolean(cursor)?;
    Ok(criterion(kind, Comparison::Equals, CriterionValue::Boolean(value)))
}

fn integer(kind: FilterKind, cursor: &mut Cursor<'_>) -> GrammarResult<RuleKind> {
    let comparison = args::comparison(cursor).unwrap_or_default();
    let value = args::integer(cursor)?;
    Ok(criterion(kind, comparison, CriterionValue::Integer(value)))
}

fn strings(kind: FilterKind, cursor: &mut Cursor<'_>) -> GrammarResult<RuleKind> {
    let (comparison, values) = args::compared_strings(cursor)?;
    Ok(criterion(kind, comparison, CriterionValue::Strings(values)))
}

fn explicit_mods(kind: FilterKind, cursor: &mut Cursor<'_>) -> GrammarResult<RuleKind> {
    let comparison = args::comparison(cursor).unwrap_or_default();
    let count = match cursor.kind() {
        TokenKind::Number => Some(args::integer(cursor)?),
        _ => None,
    };
    let mods = args::string_list(cursor)?;
    Ok(criterion(kind, comparison, CriterionValue::ExplicitMods { count, mods }))
}

fn rarity(kind: FilterKind, cursor: &mut Cursor<'_>) -> GrammarResult<RuleKind> {
    let comparison = args::comparison(cursor).unwrap_or_default();
    let values = args::rarities(cursor)?;
    Ok(criterion(kind, comparison, CriterionValue::Rarity(values)))
}

fn gem_quality(kind: FilterKind, cursor: &mut Cursor<'_>) -> GrammarResult<RuleKind> {
    let value = args::gem_quality_type(cursor)?;
    Ok(criterion(kind, Comparison::Equals, CriterionValue::GemQuality(value)))
}

fn sockets(kind: FilterKind, cursor: &mut Cursor<'_>) -> GrammarResult<RuleKind> {
    let comparison = args::comparison(cursor).unwrap_or_default();
    let value = args::sockets(cursor)?;
    Ok(criterion(kind, comparison, CriterionValue::Sockets(value)))
}

fn color(kind: FilterKind, cursor: &mut Cursor<'_>) -> GrammarResult<RuleKind> {
    let action = match kind {
        FilterKind::SetTextColor => Action::SetTextColor(args::rgba(cursor, 255)?),
        FilterKind::SetBorderColor => Action::SetBorderColor(args::rgba(cursor, 255)?),
        _ => Action::SetBackgroundColor(args::rgba(cursor, 240)?),
    };
    Ok(RuleKind::Action(action))
}

fn font_size(_: FilterKind, cursor: &mut Cursor<'_>) -> GrammarResult<RuleKind> {
    let size = args::integer(cursor)?;
    Ok(RuleKind::Action(Action::SetFontSize { size }))
}

fn alert_sound(kind: FilterKind, cursor: &mut Cursor<'_>) -> GrammarResult<RuleKind> {
    let sound = args::alert_sound(cursor)?;
    let action = match kind {
        FilterKind::PlayAlertSoundPositional => Action::PlayAlertSoundPositional(sound),
        _ => Action::PlayAlertSound(sound),
    };
    Ok(RuleKind::Action(action))
}

fn custom_sound(_: FilterKind, cursor: &mut Cursor<'_>) -> GrammarResult<RuleKind> {
    let (path, volume) = args::custom_sound(cursor)?;
    Ok(RuleKind::Action(Action::CustomAlertSound { path, volume }))
}

fn minimap_icon(_: FilterKind, cursor: &mut Cursor<'_>) -> GrammarResult<RuleKind> {
    let icon = args::minimap_icon(cursor)?;
    Ok(RuleKind::Action(Action::MinimapIcon(icon)))
}

fn play_effect(_: FilterKind, cursor: &mut Cursor<'_>) -> GrammarResult<RuleKind> {
    let (color, temp) = args::play_effect(cursor)?;
    Ok(RuleKind::Action(Action::PlayEffect { color, temp }))
}

/// Actions without arguments
fn flag(kind: FilterKind, _: &mut Cursor<'_>) -> GrammarResult<RuleKind> {
    let action = match kind {
        FilterKind::DisableDropSound => Action::DisableDropSound,
        FilterKind::EnableDropSound => Action::EnableDropSound,
        _ => Action::Continue,
    };
    Ok(RuleKind::Action(action))
}
