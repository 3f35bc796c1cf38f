use serde::Serialize;

use super::{FilterKind, IconColor, IconShape};

/// Display or audio directive applied when a block matches
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action")]
pub enum Action {
    SetFontSize { size: u32 },
    SetTextColor(Rgba),
    SetBorderColor(Rgba),
    SetBackgroundColor(Rgba),
    PlayAlertSound(AlertSound),
    PlayAlertSoundPositional(AlertSound),
    CustomAlertSound { path: String, volume: Option<u16> },
    DisableDropSound,
    EnableDropSound,
    MinimapIcon(MinimapIcon),
    PlayEffect { color: Option<IconColor>, temp: bool },
    Continue,
}

impl Action {
    pub fn kind(&self) -> FilterKind {
        match self {
            Action::SetFontSize { .. } => FilterKind::SetFontSize,
            Action::SetTextColor(_) => FilterKind::SetTextColor,
            Action::SetBorderColor(_) => FilterKind::SetBorderColor,
            Action::SetBackgroundColor(_) => FilterKind::SetBackgroundColor,
            Action::PlayAlertSound(_) => FilterKind::PlayAlertSound,
            Action::PlayAlertSoundPositional(_) => FilterKind::PlayAlertSoundPositional,
            Action::CustomAlertSound { .. } => FilterKind::CustomAlertSound,
            Action::DisableDropSound => FilterKind::DisableDropSound,
            Action::EnableDropSound => FilterKind::EnableDropSound,
            Action::MinimapIcon(_) => FilterKind::MinimapIcon,
            Action::PlayEffect { .. } => FilterKind::PlayEffect,
            Action::Continue => FilterKind::Continue,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Rgba {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

/// Built-in sound; `id` is `None` for the `None` sound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AlertSound {
    pub id: Option<u8>,
    pub volume: u16,
}

impl AlertSound {
    pub const DEFAULT_VOLUME: u16 = 50;
    pub const MAX_VOLUME: u16 = 300;

    pub const SILENT: AlertSound = AlertSound { id: None, volume: 0 };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MinimapIcon {
    /// -1 disables the icon, 0 is the largest size
    pub size: i8,
    pub style: Option<IconStyle>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IconStyle {
    pub color: IconColor,
    pub shape: IconShape,
}
