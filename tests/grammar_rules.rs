//! Keyword grammar cases, one line at a time

use itemfilter::filter::ast::{
    Action, AlertSound, Comparison, Criterion, CriterionValue, FilterKind, GemQualityType,
    IconColor, IconShape, IconStyle, MinimapIcon, Rarity, Rgba, RuleKind, SocketSpec,
};
use itemfilter::filter::{ParseError, Rule};
use itemfilter::parse_rules;
use rstest::rstest;

fn single(line: &str) -> Rule {
    let mut rules = parse_rules(line);
    assert_eq!(rules.len(), 1, "expected exactly one rule for {:?}", line);
    rules.remove(0)
}

fn criterion(line: &str) -> Criterion {
    match single(line).kind {
        RuleKind::Criterion(criterion) => criterion,
        other => panic!("expected a criterion for {:?}, got {:?}", line, other),
    }
}

fn action(line: &str) -> Action {
    match single(line).kind {
        RuleKind::Action(action) => action,
        other => panic!("expected an action for {:?}, got {:?}", line, other),
    }
}

fn error(line: &str) -> ParseError {
    match single(line).kind {
        RuleKind::Error(error) => error,
        other => panic!("expected a parse error for {:?}, got {:?}", line, other),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[rstest]
#[case("Mirrored True", FilterKind::Mirrored, true)]
#[case("Identified false", FilterKind::Identified, false)]
#[case("Corrupted TRUE", FilterKind::Corrupted, true)]
#[case("ElderItem False", FilterKind::ElderItem, false)]
#[case("ShaperItem True", FilterKind::ShaperItem, true)]
#[case("FracturedItem True", FilterKind::FracturedItem, true)]
#[case("SynthesisedItem True", FilterKind::SynthesisedItem, true)]
#[case("Replica False", FilterKind::Replica, false)]
#[case("ShapedMap True", FilterKind::ShapedMap, true)]
#[case("ElderMap True", FilterKind::ElderMap, true)]
#[case("BlightedMap True", FilterKind::BlightedMap, true)]
#[case("AlternateQuality True", FilterKind::AlternateQuality, true)]
#[case("AnyEnchantment tRuE", FilterKind::AnyEnchantment, true)]
fn boolean_criteria(#[case] line: &str, #[case] kind: FilterKind, #[case] value: bool) {
    assert_eq!(
        criterion(line),
        Criterion::new(kind, Comparison::Equals, CriterionValue::Boolean(value))
    );
}

#[rstest]
#[case("Mirrored")]
#[case("Mirrored yes")]
#[case("Mirrored True False")]
#[case("Corrupted 1")]
fn boolean_errors(#[case] line: &str) {
    assert!(error(line).kind.is_some());
}

#[rstest]
#[case("AreaLevel 70", FilterKind::AreaLevel, Comparison::Equals, 70)]
#[case("ItemLevel >= 86", FilterKind::ItemLevel, Comparison::GreaterOrEqual, 86)]
#[case("DropLevel < 10", FilterKind::DropLevel, Comparison::LessThan, 10)]
#[case("GemLevel == 21", FilterKind::GemLevel, Comparison::ExactlyEquals, 21)]
#[case("Quality > 0", FilterKind::Quality, Comparison::GreaterThan, 0)]
#[case("StackSize <= 3", FilterKind::StackSize, Comparison::LessOrEqual, 3)]
#[case("Width ! 1", FilterKind::Width, Comparison::NotEquals, 1)]
#[case("Height = 4", FilterKind::Height, Comparison::Equals, 4)]
#[case("LinkedSockets>=5", FilterKind::LinkedSockets, Comparison::GreaterOrEqual, 5)]
#[case("MapTier >= 16", FilterKind::MapTier, Comparison::GreaterOrEqual, 16)]
#[case("CorruptedMods 0", FilterKind::CorruptedMods, Comparison::Equals, 0)]
#[case("EnchantmentPassiveNum < 9", FilterKind::EnchantmentPassiveNum, Comparison::LessThan, 9)]
fn integer_criteria(
    #[case] line: &str,
    #[case] kind: FilterKind,
    #[case] comparison: Comparison,
    #[case] value: u32,
) {
    assert_eq!(
        criterion(line),
        Criterion::new(kind, comparison, CriterionValue::Integer(value))
    );
}

#[rstest]
#[case("AreaLevel", 9)]
#[case("AreaLevel >=", 12)]
#[case("AreaLevel >= -5", 13)]
#[case("ItemLevel >= high", 13)]
#[case("Quality 5 5", 10)]
fn integer_errors(#[case] line: &str, #[case] column: usize) {
    let error = error(line);
    assert_eq!(error.column, column);
    assert!(error.kind.is_some());
}

#[rstest]
#[case(r#"BaseType "Exalted Orb""#, FilterKind::BaseType, Comparison::Equals, &["Exalted Orb"])]
#[case(
    r#"BaseType == "Mirror of Kalandra" Divine"#,
    FilterKind::BaseType,
    Comparison::ExactlyEquals,
    &["Mirror of Kalandra", "Divine"],
)]
#[case("Class = Currency Maps", FilterKind::Class, Comparison::Equals, &["Currency", "Maps"])]
#[case(
    "Prophecy \"Fated Connections\"",
    FilterKind::Prophecy,
    Comparison::Equals,
    &["Fated Connections"],
)]
#[case(
    "HasEnchantment Enchantment",
    FilterKind::HasEnchantment,
    Comparison::Equals,
    &["Enchantment"],
)]
#[case(
    "HasInfluence Shaper Elder",
    FilterKind::HasInfluence,
    Comparison::Equals,
    &["Shaper", "Elder"],
)]
#[case(
    "EnchantmentPassiveNode \"Damage over Time\"",
    FilterKind::EnchantmentPassiveNode,
    Comparison::Equals,
    &["Damage over Time"],
)]
fn string_criteria(
    #[case] line: &str,
    #[case] kind: FilterKind,
    #[case] comparison: Comparison,
    #[case] values: &[&str],
) {
    assert_eq!(
        criterion(line),
        Criterion::new(kind, comparison, CriterionValue::Strings(strings(values)))
    );
}

#[rstest]
#[case("BaseType")]
#[case(r#"BaseType """#)]
#[case("BaseType > Gold")]
#[case("Class ! Maps")]
#[case("HasInfluence Shaper 5")]
fn string_errors(#[case] line: &str) {
    assert!(error(line).kind.is_some());
}

#[test]
fn explicit_mods() {
    assert_eq!(
        criterion(r#"HasExplicitMod >= 2 "of Haast" Tyrannical"#),
        Criterion::new(
            FilterKind::HasExplicitMod,
            Comparison::GreaterOrEqual,
            CriterionValue::ExplicitMods {
                count: Some(2),
                mods: strings(&["of Haast", "Tyrannical"]),
            },
        )
    );
    assert_eq!(
        criterion("HasExplicitMod Veiled"),
        Criterion::new(
            FilterKind::HasExplicitMod,
            Comparison::Equals,
            CriterionValue::ExplicitMods {
                count: None,
                mods: strings(&["Veiled"]),
            },
        )
    );
    assert_eq!(error("HasExplicitMod 2").kind, Some(FilterKind::HasExplicitMod));
}

#[test]
fn rarity_and_gem_quality() {
    assert_eq!(
        criterion("Rarity <= Rare"),
        Criterion::new(
            FilterKind::Rarity,
            Comparison::LessOrEqual,
            CriterionValue::Rarity(vec![Rarity::Rare]),
        )
    );
    assert_eq!(
        criterion("Rarity Normal Magic"),
        Criterion::new(
            FilterKind::Rarity,
            Comparison::Equals,
            CriterionValue::Rarity(vec![Rarity::Normal, Rarity::Magic]),
        )
    );
    assert_eq!(
        criterion("GemQualityType Anomalous"),
        Criterion::new(
            FilterKind::GemQualityType,
            Comparison::Equals,
            CriterionValue::GemQuality(GemQualityType::Anomalous),
        )
    );

    assert_eq!(error("Rarity unique").column, 7);
    assert_eq!(error("Rarity").kind, Some(FilterKind::Rarity));
    assert_eq!(error("GemQualityType = Superior").column, 15);
    assert_eq!(error("GemQualityType Shiny").kind, Some(FilterKind::GemQualityType));
}

#[rstest]
#[case("Sockets >= 5GGB", FilterKind::Sockets, Comparison::GreaterOrEqual, Some(5), "BGG")]
#[case("Sockets >= 5BGG", FilterKind::Sockets, Comparison::GreaterOrEqual, Some(5), "BGG")]
#[case("Sockets 6", FilterKind::Sockets, Comparison::Equals, Some(6), "")]
#[case("SocketGroup RGB", FilterKind::SocketGroup, Comparison::Equals, None, "BGR")]
#[case(r#"SocketGroup == "WWA""#, FilterKind::SocketGroup, Comparison::ExactlyEquals, None, "AWW")]
#[case(
    "SocketGroup >= 3 RR D",
    FilterKind::SocketGroup,
    Comparison::GreaterOrEqual,
    Some(3),
    "DRR",
)]
fn socket_criteria(
    #[case] line: &str,
    #[case] kind: FilterKind,
    #[case] comparison: Comparison,
    #[case] count: Option<u32>,
    #[case] colors: &str,
) {
    assert_eq!(
        criterion(line),
        Criterion::new(
            kind,
            comparison,
            CriterionValue::Sockets(SocketSpec {
                count,
                colors: colors.to_string(),
            }),
        )
    );
}

#[rstest]
#[case("Sockets")]
#[case("Sockets 5GQ")]
#[case("Sockets 5 rgb")]
#[case("SocketGroup 5G 4")]
#[case("SocketGroup \"\"")]
fn socket_errors(#[case] line: &str) {
    assert!(error(line).kind.is_some());
}

#[rstest]
#[case("SetTextColor 255 255 255", Action::SetTextColor(Rgba::new(255, 255, 255, 255)))]
#[case("SetBorderColor 10 20 30", Action::SetBorderColor(Rgba::new(10, 20, 30, 255)))]
#[case("SetBackgroundColor 10 20 30", Action::SetBackgroundColor(Rgba::new(10, 20, 30, 240)))]
#[case("SetBackgroundColor 10 20 30 128", Action::SetBackgroundColor(Rgba::new(10, 20, 30, 128)))]
#[case("SetFontSize 45", Action::SetFontSize { size: 45 })]
#[case("PlayAlertSound 1", Action::PlayAlertSound(AlertSound { id: Some(1), volume: 50 }))]
#[case("PlayAlertSound 16 300", Action::PlayAlertSound(AlertSound { id: Some(16), volume: 300 }))]
#[case("PlayAlertSound None", Action::PlayAlertSound(AlertSound::SILENT))]
#[case(
    "PlayAlertSoundPositional 2 0",
    Action::PlayAlertSoundPositional(AlertSound { id: Some(2), volume: 0 }),
)]
#[case(
    r#"CustomAlertSound "sounds/drop.mp3""#,
    Action::CustomAlertSound { path: "sounds/drop.mp3".to_string(), volume: None },
)]
#[case(
    r#"CustomAlertSound "drop.mp3" 250"#,
    Action::CustomAlertSound { path: "drop.mp3".to_string(), volume: Some(250) },
)]
#[case("DisableDropSound", Action::DisableDropSound)]
#[case("EnableDropSound", Action::EnableDropSound)]
#[case("MinimapIcon -1", Action::MinimapIcon(MinimapIcon { size: -1, style: None }))]
#[case(
    "MinimapIcon 2 Purple UpsideDownHouse",
    Action::MinimapIcon(MinimapIcon {
        size: 2,
        style: Some(IconStyle { color: IconColor::Purple, shape: IconShape::UpsideDownHouse }),
    }),
)]
#[case("PlayEffect Orange", Action::PlayEffect { color: Some(IconColor::Orange), temp: false })]
#[case("PlayEffect Grey Temp", Action::PlayEffect { color: Some(IconColor::Grey), temp: true })]
#[case("PlayEffect None", Action::PlayEffect { color: None, temp: false })]
#[case("Continue", Action::Continue)]
fn actions(#[case] line: &str, #[case] expected: Action) {
    assert_eq!(action(line), expected);
}

#[rstest]
#[case("SetTextColor 255 255", FilterKind::SetTextColor)]
#[case("SetTextColor 256 0 0", FilterKind::SetTextColor)]
#[case("SetBorderColor 1 2 3 4 5", FilterKind::SetBorderColor)]
#[case("SetFontSize big", FilterKind::SetFontSize)]
#[case("PlayAlertSound 0", FilterKind::PlayAlertSound)]
#[case("PlayAlertSound 17", FilterKind::PlayAlertSound)]
#[case("PlayAlertSound 5 301", FilterKind::PlayAlertSound)]
#[case("PlayAlertSoundPositional", FilterKind::PlayAlertSoundPositional)]
#[case("CustomAlertSound drop.mp3", FilterKind::CustomAlertSound)]
#[case(r#"CustomAlertSound """#, FilterKind::CustomAlertSound)]
#[case("MinimapIcon 0", FilterKind::MinimapIcon)]
#[case("MinimapIcon -2", FilterKind::MinimapIcon)]
#[case("MinimapIcon 1 Black Star", FilterKind::MinimapIcon)]
#[case("MinimapIcon 1 Red", FilterKind::MinimapIcon)]
#[case("PlayEffect Rainbow", FilterKind::PlayEffect)]
#[case("Continue 1", FilterKind::Continue)]
#[case("DisableDropSound True", FilterKind::DisableDropSound)]
fn action_errors(#[case] line: &str, #[case] kind: FilterKind) {
    assert_eq!(error(line).kind, Some(kind));
}

#[rstest]
#[case("Show")]
#[case("  Hide  ")]
#[case("\tShow # Currency")]
fn visibility(#[case] line: &str) {
    assert!(single(line).is_visibility());
}

#[rstest]
#[case("show")]
#[case("ShowItems")]
#[case("itemLevel 5")]
#[case("Zebra 5")]
#[case("5 Show")]
#[case("\"Show\"")]
#[case("% Show")]
fn unrecognised_lines(#[case] line: &str) {
    assert_eq!(error(line).kind, None);
}
