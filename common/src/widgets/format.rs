//! Presentation formatting shared by the widget renderers.

use num_format::{Locale, ToFormattedString};

/// Axis labels longer than this are shortened.
pub const MAX_LABEL_CHARS: usize = 15;
const TRUNCATED_LABEL_CHARS: usize = 12;

/// How a metric tile shows its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KpiFormat {
    #[default]
    Number,
    Currency,
    Percentage,
}

pub fn format_kpi(value: f64, format: KpiFormat) -> String {
    match format {
        KpiFormat::Number => group_with_decimals(value),
        KpiFormat::Currency => {
            let grouped = group_with_decimals(value.abs());
            if value < 0.0 {
                format!("-${}", grouped)
            } else {
                format!("${}", grouped)
            }
        }
        KpiFormat::Percentage => format!("{:.2}%", value),
    }
}

/// Thousands separators and at most two decimals, trailing zeros dropped.
pub fn group_with_decimals(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_formatted_string(&Locale::en);
    let fraction = match cents % 100 {
        0 => String::new(),
        f if f % 10 == 0 => format!(".{}", f / 10),
        f => format!(".{:02}", f),
    };
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{}{}", sign, whole, fraction)
}

/// Axis tick abbreviation: `1.5M`, `2.0K`, otherwise the plain number.
pub fn abbreviate(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        value.to_string()
    }
}

pub fn truncate_label(label: &str) -> String {
    if label.chars().count() > MAX_LABEL_CHARS {
        let head: String = label.chars().take(TRUNCATED_LABEL_CHARS).collect();
        format!("{}...", head)
    } else {
        label.to_string()
    }
}

/// Pie slice caption, e.g. `Norte: 25%`.
pub fn slice_caption(label: &str, share: f64) -> String {
    format!("{}: {:.0}%", label, share * 100.0)
}

/// Pie legend entry, e.g. `Norte (12)`.
pub fn legend_entry(label: &str, value: f64) -> String {
    format!("{} ({})", label, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kpi_formats() {
        assert_eq!(format_kpi(1234567.891, KpiFormat::Number), "1,234,567.89");
        assert_eq!(format_kpi(1500.0, KpiFormat::Number), "1,500");
        assert_eq!(format_kpi(0.5, KpiFormat::Number), "0.5");
        assert_eq!(format_kpi(-42.129, KpiFormat::Number), "-42.13");
        assert_eq!(format_kpi(1234.5, KpiFormat::Currency), "$1,234.5");
        assert_eq!(format_kpi(-3.0, KpiFormat::Currency), "-$3");
        assert_eq!(format_kpi(12.3456, KpiFormat::Percentage), "12.35%");
    }

    #[test]
    fn tiles_default_to_grouped_numbers() {
        assert_eq!(KpiFormat::default(), KpiFormat::Number);
        assert_eq!(format_kpi(98765.4, KpiFormat::default()), "98,765.4");
    }

    #[test]
    fn abbreviations() {
        assert_eq!(abbreviate(2_500_000.0), "2.5M");
        assert_eq!(abbreviate(1_000_000.0), "1.0M");
        assert_eq!(abbreviate(1_000.0), "1.0K");
        assert_eq!(abbreviate(999.0), "999");
        assert_eq!(abbreviate(2.5), "2.5");
    }

    #[test]
    fn long_labels_are_truncated() {
        assert_eq!(truncate_label("Quince letras!!"), "Quince letras!!");
        assert_eq!(truncate_label("Dieciséis letras"), "Dieciséis le...");
        assert_eq!(truncate_label("Norte"), "Norte");
    }

    #[test]
    fn pie_texts() {
        assert_eq!(slice_caption("Norte", 0.254), "Norte: 25%");
        assert_eq!(legend_entry("Sur", 12.0), "Sur (12)");
    }
}
