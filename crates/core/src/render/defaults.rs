/// Built-in values used when neither the tree nor the style sheet sets a slot.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderDefaults {
    pub font: String,
    pub font_size: f32,
    /// Font size of superscript and subscript text.
    pub small_font_size: f32,
    /// Baseline shift of superscript (up) and subscript (down) text.
    pub text_rise: f32,
}

impl Default for RenderDefaults {
    fn default() -> Self {
        Self {
            font: "Helvetica".to_string(),
            font_size: 10.0,
            small_font_size: 6.0,
            text_rise: 4.0,
        }
    }
}
