use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe color enum instead of strings.
///
/// Covers the foreground and background colors the Notion API emits in
/// rich text annotations. Unrecognized colors decode to `Default` so that
/// new API colors never break decoding; the raw JSON retained on each
/// rich text item preserves the original value for round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[default]
    Default,
    Gray,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    GrayBackground,
    BrownBackground,
    RedBackground,
    OrangeBackground,
    YellowBackground,
    GreenBackground,
    BlueBackground,
    PurpleBackground,
    PinkBackground,
}

impl Color {
    /// Parse a color tag, falling back to `Default` for unknown values.
    pub fn from_tag(s: &str) -> Self {
        match s {
            "gray" => Color::Gray,
            "brown" => Color::Brown,
            "red" => Color::Red,
            "orange" => Color::Orange,
            "yellow" => Color::Yellow,
            "green" => Color::Green,
            "blue" => Color::Blue,
            "purple" => Color::Purple,
            "pink" => Color::Pink,
            "gray_background" => Color::GrayBackground,
            "brown_background" => Color::BrownBackground,
            "red_background" => Color::RedBackground,
            "orange_background" => Color::OrangeBackground,
            "yellow_background" => Color::YellowBackground,
            "green_background" => Color::GreenBackground,
            "blue_background" => Color::BlueBackground,
            "purple_background" => Color::PurpleBackground,
            "pink_background" => Color::PinkBackground,
            _ => Color::Default,
        }
    }

    /// Convert to the wire tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Default => "default",
            Color::Gray => "gray",
            Color::Brown => "brown",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Pink => "pink",
            Color::GrayBackground => "gray_background",
            Color::BrownBackground => "brown_background",
            Color::RedBackground => "red_background",
            Color::OrangeBackground => "orange_background",
            Color::YellowBackground => "yellow_background",
            Color::GreenBackground => "green_background",
            Color::BlueBackground => "blue_background",
            Color::PurpleBackground => "purple_background",
            Color::PinkBackground => "pink_background",
        }
    }

    /// Check if this is a background color
    pub fn is_background(&self) -> bool {
        matches!(
            self,
            Color::GrayBackground
                | Color::BrownBackground
                | Color::RedBackground
                | Color::OrangeBackground
                | Color::YellowBackground
                | Color::GreenBackground
                | Color::BlueBackground
                | Color::PurpleBackground
                | Color::PinkBackground
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
