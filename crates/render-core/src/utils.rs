/// Maps a base standard-font family and style flags to its Type1 font name.
pub fn styled_font_name(base_name: &str, bold: bool, italic: bool) -> String {
    let (regular, bold_name, italic_name, both) = match base_name {
        "Times" | "Times-Roman" => ("Times-Roman", "Times-Bold", "Times-Italic", "Times-BoldItalic"),
        "Courier" => ("Courier", "Courier-Bold", "Courier-Oblique", "Courier-BoldOblique"),
        "Helvetica" => (
            "Helvetica",
            "Helvetica-Bold",
            "Helvetica-Oblique",
            "Helvetica-BoldOblique",
        ),
        other => return other.to_string(),
    };
    match (bold, italic) {
        (false, false) => regular,
        (true, false) => bold_name,
        (false, true) => italic_name,
        (true, true) => both,
    }
    .to_string()
}

/// Convert a top-down Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styled_font_name() {
        assert_eq!(styled_font_name("Helvetica", true, false), "Helvetica-Bold");
        assert_eq!(styled_font_name("Times-Roman", true, true), "Times-BoldItalic");
        assert_eq!(styled_font_name("Courier", false, true), "Courier-Oblique");
        assert_eq!(styled_font_name("Symbol", true, true), "Symbol");
    }

    #[test]
    fn test_flip_y() {
        assert_eq!(flip_y(100.0, 842.0), 742.0);
    }
}
