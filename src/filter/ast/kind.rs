//! Filter keywords

use super::keyword::keyword_enum;

keyword_enum! {
    /// Every keyword a rule line can start with
    pub enum FilterKind {
        Show,
        Hide,

        Mirrored,
        /// Replica uniques
        Replica,
        Identified,
        StackSize,
        /// Inventory width of the item
        Width,
        /// Inventory height of the item
        Height,
        /// Monster level of the current area
        AreaLevel,
        ItemLevel,
        /// Level at which the base type starts dropping
        DropLevel,
        GemLevel,
        Quality,
        Rarity,
        /// Item class, partial names match
        Class,
        /// Base type, partial names match
        BaseType,
        Prophecy,
        HasExplicitMod,
        AnyEnchantment,
        /// Cluster jewel enchantment type
        EnchantmentPassiveNode,
        /// Number of passives added by a cluster jewel
        EnchantmentPassiveNum,
        HasEnchantment,
        FracturedItem,
        SynthesisedItem,
        ElderItem,
        ShaperItem,
        HasInfluence,
        /// Socket count and colors, linked or not
        Sockets,
        /// Size of the largest linked group
        LinkedSockets,
        /// Linked socket group with the given colors
        SocketGroup,
        ElderMap,
        BlightedMap,
        ShapedMap,
        MapTier,
        AlternateQuality,
        GemQualityType,
        Corrupted,
        CorruptedMods,

        SetFontSize,
        SetTextColor,
        SetBorderColor,
        SetBackgroundColor,
        PlayAlertSound,
        PlayAlertSoundPositional,
        CustomAlertSound,
        DisableDropSound,
        EnableDropSound,
        MinimapIcon,
        PlayEffect,
        Continue,
    }
}

impl FilterKind {
    pub fn is_visibility(self) -> bool {
        matches!(self, FilterKind::Show | FilterKind::Hide)
    }

    pub fn is_action(self) -> bool {
        self >= FilterKind::SetFontSize
    }

    pub fn is_criterion(self) -> bool {
        !self.is_visibility() && !self.is_action()
    }
}

keyword_enum! {
    /// Block-opening directive
    pub enum Visibility {
        Show,
        Hide,
    }
}

impl From<Visibility> for FilterKind {
    fn from(visibility: Visibility) -> Self {
        match visibility {
            Visibility::Show => FilterKind::Show,
            Visibility::Hide => FilterKind::Hide,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_table() {
        assert_eq!(FilterKind::ALL.len(), 50);
        assert_eq!(FilterKind::from_keyword("AreaLevel"), Some(FilterKind::AreaLevel));
        assert_eq!(FilterKind::from_keyword("arealevel"), None);
        assert_eq!(
            FilterKind::PlayAlertSoundPositional.as_str(),
            "PlayAlertSoundPositional"
        );
    }

    #[test]
    fn test_classification() {
        let criteria = FilterKind::ALL.iter().filter(|k| k.is_criterion()).count();
        let actions = FilterKind::ALL.iter().filter(|k| k.is_action()).count();
        assert_eq!(criteria, 36);
        assert_eq!(actions, 12);

        assert!(FilterKind::Hide.is_visibility());
        assert!(FilterKind::CorruptedMods.is_criterion());
        assert!(FilterKind::SetFontSize.is_action());
        assert!(FilterKind::Continue.is_action());
    }

    #[test]
    fn test_visibility_kind() {
        assert_eq!(FilterKind::from(Visibility::Show), FilterKind::Show);
        assert_eq!(Visibility::Hide.to_string(), "Hide");
    }
}
