//! Chart labels

use chrono::NaiveDate;
use std::fmt::Write;

/// "8 mo" below two years, "2 y" / "2 y 3 mo" from then on
pub fn age_label(age_months: f64) -> String {
    if !age_months.is_finite() || age_months < 0.0 {
        return "?".to_string();
    }

    let whole = age_months.floor() as u32;
    if whole < 24 {
        return format!("{} mo", whole);
    }

    let (years, months) = (whole / 12, whole % 12);
    if months == 0 {
        format!("{} y", years)
    } else {
        format!("{} y {} mo", years, months)
    }
}

/// Date rendered with a chrono format string; ISO 8601 if the format is invalid
pub fn date_label(date: NaiveDate, format: &str) -> String {
    let mut label = String::new();
    if write!(label, "{}", date.format(format)).is_err() {
        return date.to_string();
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_labels() {
        assert_eq!(age_label(8.4), "8 mo");
        assert_eq!(age_label(23.9), "23 mo");
        assert_eq!(age_label(24.0), "2 y");
        assert_eq!(age_label(39.0), "3 y 3 mo");
        assert_eq!(age_label(f64::NAN), "?");
    }

    #[test]
    fn test_date_labels() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(date_label(date, "%Y-%m-%d"), "2024-03-09");
        assert_eq!(date_label(date, "%d/%m/%Y"), "09/03/2024");
    }
}
