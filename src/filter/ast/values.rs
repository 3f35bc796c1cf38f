//! Fixed vocabularies consulted by the grammar

use super::keyword::keyword_enum;

keyword_enum! {
    pub enum Rarity {
        Normal,
        Magic,
        Rare,
        Unique,
    }
}

keyword_enum! {
    pub enum GemQualityType {
        Superior,
        Divergent,
        Anomalous,
        Phantasmal,
    }
}

keyword_enum! {
    /// Minimap icon and beam colors
    pub enum IconColor {
        Red,
        Green,
        Blue,
        Brown,
        White,
        Yellow,
        Cyan,
        Grey,
        Orange,
        Pink,
        Purple,
    }
}

keyword_enum! {
    pub enum IconShape {
        Circle,
        Diamond,
        Hexagon,
        Square,
        Star,
        Triangle,
        Cross,
        Moon,
        Raindrop,
        Kite,
        Pentagon,
        UpsideDownHouse,
    }
}

/// Letters allowed in a socket color set: red, green, blue, white, abyss, delve
pub const SOCKET_COLORS: &str = "RGBWAD";

pub fn is_socket_color(c: char) -> bool {
    SOCKET_COLORS.contains(c)
}
