// Narration script assembly
use crate::domain::table::{CellValue, Row};

const MAX_NARRATED_VALUES: usize = 2;
const MAX_FRACTION_DIGITS: i32 = 3;
const CLOSING_SENTENCE: &str = "This visualization helps us understand the data patterns and trends.";

pub fn narration_script(row: &Row, chart_title: &str) -> String {
    let mut sentences = vec![format!("Let's examine the data for {}.", chart_title)];

    let numeric_fields = row
        .iter()
        .filter_map(|(key, value)| CellValue::parse_numeric(value).map(|n| (key, n)))
        .take(MAX_NARRATED_VALUES);

    for (key, value) in numeric_fields {
        sentences.push(format!("The {} shows a value of {}.", key, format_grouped(value)));
    }

    sentences.push(CLOSING_SENTENCE.to_string());
    sentences.join(" ")
}

/// en-US style number: comma thousands separators, up to three fraction digits.
pub fn format_grouped(value: f64) -> String {
    let abs = value.abs();
    // Above 1e15 an f64 has no fraction digits left, and scaling could overflow
    let fixed = if abs >= 1e15 {
        format!("{:.0}", abs)
    } else {
        let scale = 10f64.powi(MAX_FRACTION_DIGITS);
        let rounded = (abs * scale).round() / scale;
        format!("{:.*}", MAX_FRACTION_DIGITS as usize, rounded)
    };
    let negative = value < 0.0 && fixed.chars().any(|c| matches!(c, '1'..='9'));

    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 2);
    if negative {
        grouped.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if !frac_part.is_empty() {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, CellValue)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(100.0), "100");
        assert_eq!(format_grouped(1000.0), "1,000");
        assert_eq!(format_grouped(1234567.891), "1,234,567.891");
        assert_eq!(format_grouped(0.12345), "0.123");
        assert_eq!(format_grouped(2.5), "2.5");
        assert_eq!(format_grouped(-98765.4), "-98,765.4");
        assert_eq!(format_grouped(-0.0001), "0");
        assert_eq!(format_grouped(999999.9999), "1,000,000");
    }

    #[test]
    fn test_format_grouped_huge_values() {
        let huge = format_grouped(1e306);
        assert!(huge.starts_with("1,000,"), "{}", huge);
        assert!(!huge.contains("inf"));

        assert_eq!(format_grouped(1e15), "1,000,000,000,000,000");
        assert!(format_grouped(-f64::MAX).starts_with("-179,769,"));
        assert!(!format_grouped(f64::MAX).contains("inf"));
    }

    #[test]
    fn test_script_mentions_first_two_numeric_fields() {
        let r = row(&[
            ("Product", "A".into()),
            ("Revenue", 1500.0.into()),
            ("Units", "42".into()),
            ("Cost", 900.0.into()),
        ]);
        let script = narration_script(&r, "Revenue Analysis");
        assert_eq!(
            script,
            "Let's examine the data for Revenue Analysis. \
             The Revenue shows a value of 1,500. \
             The Units shows a value of 42. \
             This visualization helps us understand the data patterns and trends."
        );
    }

    #[test]
    fn test_script_without_numbers() {
        let r = row(&[("City", "Oslo".into()), ("Note", CellValue::Empty)]);
        let script = narration_script(&r, "Country Analysis");
        assert_eq!(
            script,
            "Let's examine the data for Country Analysis. \
             This visualization helps us understand the data patterns and trends."
        );
    }
}
