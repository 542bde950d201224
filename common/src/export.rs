//! PDF export arithmetic: output file naming and A4 pagination.
//!
//! The frontend rasterizes the dashboard and hands the image size to
//! [`paginate`]; each returned placement is drawn on its own page.

pub const A4_WIDTH_MM: f64 = 210.0;
pub const A4_HEIGHT_MM: f64 = 297.0;
pub const DEFAULT_MARGIN_MM: f64 = 10.0;
pub const DEFAULT_FILE_NAME: &str = "dashboard";

/// Attribute that keeps an element out of the captured image.
pub const EXPORT_IGNORE_ATTR: &str = "data-export-ignore";

/// Filesystem-friendly name ending in `.pdf`.
pub fn sanitize_file_name(name: &str) -> String {
    let trimmed = name.trim();
    let base = if trimmed.is_empty() { DEFAULT_FILE_NAME } else { trimmed };

    let mut cleaned = String::with_capacity(base.len());
    let mut in_replaced_run = false;
    for ch in base.chars() {
        if matches!(ch, '\\' | '/' | '\n' | '\r' | '\t' | ':' | '*' | '?' | '"' | '<' | '>' | '|') {
            if !in_replaced_run {
                cleaned.push('-');
            }
            in_replaced_run = true;
        } else {
            cleaned.push(ch);
            in_replaced_run = false;
        }
    }

    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.to_lowercase().ends_with(".pdf") {
        collapsed
    } else {
        format!("{}.pdf", collapsed)
    }
}

/// Where to draw the captured image on one page, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Scales the image to the usable page width and splits it over as many A4
/// portrait pages as needed. Later pages draw the same image shifted up by the
/// usable height so consecutive pages continue where the previous one ended.
pub fn paginate(image_width_px: f64, image_height_px: f64, margin_mm: f64) -> Vec<Placement> {
    let usable_width = A4_WIDTH_MM - margin_mm * 2.0;
    let usable_height = A4_HEIGHT_MM - margin_mm * 2.0;
    if image_width_px <= 0.0 || image_height_px <= 0.0 || usable_height <= 0.0 {
        return Vec::new();
    }

    let height = image_height_px * usable_width / image_width_px;
    let place = |offset: f64| Placement {
        x: margin_mm,
        y: margin_mm - offset,
        width: usable_width,
        height,
    };

    if height <= usable_height {
        return vec![place(0.0)];
    }

    let mut placements = Vec::new();
    let mut remaining = height;
    let mut offset = 0.0;
    while remaining > 0.0 {
        placements.push(place(offset));
        remaining -= usable_height;
        offset += usable_height;
    }
    placements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_are_cleaned() {
        assert_eq!(sanitize_file_name("  "), "dashboard.pdf");
        assert_eq!(sanitize_file_name("Ventas Q4"), "Ventas Q4.pdf");
        assert_eq!(sanitize_file_name("a/b\\c"), "a-b-c.pdf");
        assert_eq!(sanitize_file_name("Q4: ¿ventas?*"), "Q4- ¿ventas-.pdf");
        assert_eq!(sanitize_file_name("dos   espacios"), "dos espacios.pdf");
        assert_eq!(sanitize_file_name("Informe.PDF"), "Informe.PDF");
        assert_eq!(sanitize_file_name("a//b"), "a-b.pdf");
    }

    #[test]
    fn short_capture_fits_on_one_page() {
        let pages = paginate(1900.0, 1000.0, DEFAULT_MARGIN_MM);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].x, 10.0);
        assert_eq!(pages[0].y, 10.0);
        assert_eq!(pages[0].width, 190.0);
        assert_eq!(pages[0].height, 100.0);
    }

    #[test]
    fn tall_capture_is_shifted_per_page() {
        // 190 mm wide, 600 mm tall; usable height is 277 mm.
        let pages = paginate(190.0, 600.0, DEFAULT_MARGIN_MM);
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[1].y, 10.0 - 277.0);
        assert_eq!(pages[2].y, 10.0 - 554.0);
        assert!(pages.iter().all(|p| p.height == 600.0));
    }

    #[test]
    fn degenerate_images_produce_no_pages() {
        assert!(paginate(0.0, 100.0, DEFAULT_MARGIN_MM).is_empty());
    }
}
