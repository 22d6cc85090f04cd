//! Button colours.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Foreground colours for toolbar buttons.
///
/// `reversed` buttons sit on a dark background, so they use a separate pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub active: SmolStr,
    pub inactive: SmolStr,
    pub reversed_active: SmolStr,
    pub reversed_inactive: SmolStr,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            active: SmolStr::new_static("black"),
            inactive: SmolStr::new_static("#ccc"),
            reversed_active: SmolStr::new_static("white"),
            reversed_inactive: SmolStr::new_static("#aaa"),
        }
    }
}

impl Palette {
    pub fn color(&self, active: bool, reversed: bool) -> &str {
        match (reversed, active) {
            (false, true) => &self.active,
            (false, false) => &self.inactive,
            (true, true) => &self.reversed_active,
            (true, false) => &self.reversed_inactive,
        }
    }

    /// Inline style for a button span.
    pub fn button_style(&self, active: bool, reversed: bool) -> String {
        format!("cursor: pointer; color: {};", self.color(active, reversed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_colors() {
        let palette = Palette::default();
        assert_eq!(palette.color(true, false), "black");
        assert_eq!(palette.color(false, false), "#ccc");
        assert_eq!(palette.color(true, true), "white");
        assert_eq!(palette.color(false, true), "#aaa");
    }

    #[test]
    fn test_button_style() {
        let palette = Palette::default();
        assert_eq!(palette.button_style(true, false), "cursor: pointer; color: black;");
    }
}
