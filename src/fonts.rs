const SYSTEM_STACK: &str = "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";
const INTER_STACK: &str = "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";
const CHARM_STACK: &str = "'Charm', cursive";
const CMD_STACK: &str = "'Consolas', 'Courier New', monospace";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontPreset {
    Current,
    Inter,
    Cmd,
}

impl FontPreset {
    pub const ALL: [FontPreset; 3] = [FontPreset::Current, FontPreset::Inter, FontPreset::Cmd];

    pub fn value(self) -> &'static str {
        match self {
            FontPreset::Current => "current",
            FontPreset::Inter => "inter",
            FontPreset::Cmd => "cmd",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FontPreset::Current => "Current (Charm)",
            FontPreset::Inter => "Inter",
            FontPreset::Cmd => "Consolas (CMD)",
        }
    }
}

impl Default for FontPreset {
    fn default() -> Self {
        FontPreset::Inter
    }
}

/// Places on the page whose typeface depends on the preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontRole {
    Typewriter,
    TypewriterMain,
    TypewriterSchool,
    Carousel,
    Button,
    ButtonMain,
    Copyright,
}

pub fn font_family(preset: FontPreset, role: FontRole) -> &'static str {
    match preset {
        FontPreset::Current => match role {
            FontRole::TypewriterMain | FontRole::Button | FontRole::Copyright => CHARM_STACK,
            FontRole::Typewriter
            | FontRole::TypewriterSchool
            | FontRole::Carousel
            | FontRole::ButtonMain => SYSTEM_STACK,
        },
        FontPreset::Inter => INTER_STACK,
        FontPreset::Cmd => CMD_STACK,
    }
}

pub fn font_weight(preset: FontPreset, role: FontRole) -> &'static str {
    if preset == FontPreset::Cmd {
        return "600";
    }
    match role {
        FontRole::TypewriterSchool => "normal",
        FontRole::Carousel => "inherit",
        _ => "700",
    }
}

/// Inline `style` value for `role`.
pub fn text_style(preset: FontPreset, role: FontRole) -> String {
    format!(
        "font-family: {}; font-weight: {};",
        font_family(preset, role),
        font_weight(preset, role)
    )
}
