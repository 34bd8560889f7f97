use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::AsRefStr;

/// Value Object - colour theme of the graph; `as_ref()` is the CSS class of the page root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, AsRefStr)]
pub enum Theme {
    #[default]
    #[display(fmt = "Light")]
    #[strum(serialize = "light")]
    Light,
    #[display(fmt = "Dark")]
    #[strum(serialize = "dark")]
    Dark,
}

impl Theme {
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

}

/// Value Object - the colours used to draw one theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: String,
    pub grid: String,
    pub x_axis: String,
    pub y_axis: String,
    pub line: String,
    pub text: String,
    pub middle_line: String,
    pub distance: String,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            background: "#ffffff".into(),
            grid: "#000000".into(),
            x_axis: "#ff5555".into(),
            y_axis: "#5555ff".into(),
            line: "#7755ff".into(),
            text: "#000000".into(),
            middle_line: "#770077".into(),
            distance: "#005500".into(),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: "#000000".into(),
            grid: "#ffffff".into(),
            x_axis: "#ff5555".into(),
            y_axis: "#5555ff".into(),
            line: "#7755ff".into(),
            text: "#ffffff".into(),
            middle_line: "#ff33ff".into(),
            distance: "#33ff33".into(),
        }
    }
}

/// Palettes keyed by theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palettes {
    pub light: Palette,
    pub dark: Palette,
}

impl Default for Palettes {
    fn default() -> Self {
        Self { light: Palette::light(), dark: Palette::dark() }
    }
}

impl Palettes {
    pub fn get(&self, theme: Theme) -> &Palette {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }
}
