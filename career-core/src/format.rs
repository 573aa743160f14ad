//! Human-readable dates.

use crate::{Experience, YearMonth};

pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTH_INITIALS: [&str; 12] = ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"];

pub const RANGE_SEPARATOR: &str = " — ";
pub const PRESENT_LABEL: &str = "Present";

fn month_index(month: u32) -> Option<usize> {
    (1..=12)
        .contains(&month)
        .then(|| (month - 1) as usize)
}

pub fn month_abbreviation(month: u32) -> &'static str {
    month_index(month).map_or("?", |index| MONTH_ABBREVIATIONS[index])
}

/// One-letter label for the month sub-header.
pub fn month_initial(month: u32) -> &'static str {
    month_index(month).map_or("?", |index| MONTH_INITIALS[index])
}

/// `"Sep 2019"`.
pub fn format_year_month(at: YearMonth) -> String {
    format!("{} {}", month_abbreviation(at.month), at.year)
}

/// `"Sep 2019 — Present"` for ongoing records.
pub fn format_date_range(experience: &Experience) -> String {
    let start = format_year_month(experience.start());
    let end = experience
        .end()
        .map(format_year_month)
        .unwrap_or_else(|| PRESENT_LABEL.to_string());
    format!("{start}{RANGE_SEPARATOR}{end}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::experience;

    #[test]
    fn ongoing_range_reads_present() {
        let exp = experience("a", (2019, 9), None);
        assert_eq!(format_date_range(&exp), "Sep 2019 — Present");
    }

    #[test]
    fn closed_range_shows_both_ends() {
        let exp = experience("a", (2016, 1), Some((2018, 12)));
        assert_eq!(format_date_range(&exp), "Jan 2016 — Dec 2018");
    }

    #[test]
    fn missing_end_month_renders_december() {
        let mut exp = experience("a", (2017, 2), Some((2019, 4)));
        exp.end_month = None;
        assert_eq!(format_date_range(&exp), "Feb 2017 — Dec 2019");
    }

    #[test]
    fn out_of_range_months_do_not_panic() {
        assert_eq!(format_year_month(YearMonth::new(2020, 0)), "? 2020");
        assert_eq!(month_initial(13), "?");
        assert_eq!(month_initial(5), "M");
    }
}
