use chrono::{Datelike, NaiveDate};

pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

pub const MONTH_NAMES: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Inclusive range of travel dates, either end may still be unset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn starting(from: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => from <= day && day <= to,
            (Some(from), None) => from == day,
            (None, Some(to)) => to == day,
            (None, None) => false,
        }
    }

    /// Apply a day click in range mode and return the new selection.
    ///
    /// `None` means the selection was cleared.
    pub fn add_day(range: Option<DateRange>, day: NaiveDate) -> Option<DateRange> {
        let DateRange { from, to } = range.unwrap_or_default();

        match (from, to) {
            (Some(from), Some(to)) => {
                if day == from && day == to {
                    None
                } else if day == to {
                    Some(DateRange::starting(to))
                } else if day == from {
                    None
                } else if day < from {
                    Some(DateRange::new(day, to))
                } else {
                    Some(DateRange::new(from, day))
                }
            }
            (None, Some(to)) => {
                if day > to {
                    Some(DateRange::new(to, day))
                } else {
                    Some(DateRange::new(day, to))
                }
            }
            (Some(from), None) => {
                if day < from {
                    Some(DateRange::new(day, from))
                } else {
                    Some(DateRange::new(from, day))
                }
            }
            (None, None) => Some(DateRange::starting(day)),
        }
    }
}

/// "5 de mar"
pub fn short_date(day: NaiveDate) -> String {
    format!("{} de {}", day.day(), MONTH_ABBREVIATIONS[day.month0() as usize])
}

/// Button label for a complete range, `None` while either end is missing
pub fn date_range_label(range: Option<&DateRange>) -> Option<String> {
    match range {
        Some(DateRange {
            from: Some(from),
            to: Some(to),
        }) => Some(format!("{} até {}", short_date(*from), short_date(*to))),
        _ => None,
    }
}
