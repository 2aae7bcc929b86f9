//! Month grid model behind the range calendar.

use chrono::{Datelike, Months, NaiveDate};

use super::date_range::{DateRange, MONTH_NAMES};

/// Column headers, weeks start on Sunday
pub const WEEKDAY_INITIALS: [&str; 7] = ["D", "S", "T", "Q", "Q", "S", "S"];

/// Where a day sits relative to the selected range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePosition {
    Outside,
    Start,
    Middle,
    End,
    /// Range that starts and ends on the same day, or has one end only
    Single,
}

impl RangePosition {
    pub fn of(range: Option<&DateRange>, day: NaiveDate) -> Self {
        let Some(range) = range else {
            return RangePosition::Outside;
        };
        if !range.contains(day) {
            return RangePosition::Outside;
        }
        match (range.from, range.to) {
            (Some(from), Some(to)) if from == to => RangePosition::Single,
            (Some(from), Some(_)) if day == from => RangePosition::Start,
            (Some(_), Some(to)) if day == to => RangePosition::End,
            (Some(_), Some(_)) => RangePosition::Middle,
            _ => RangePosition::Single,
        }
    }
}

/// A displayed month, identified by its first day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    first_day: NaiveDate,
}

impl CalendarMonth {
    pub fn containing(day: NaiveDate) -> Self {
        Self {
            first_day: day.with_day(1).unwrap_or(day),
        }
    }

    /// Month to show when the picker opens: the range start, else today
    pub fn initial(range: Option<&DateRange>, today: NaiveDate) -> Self {
        let anchor = range.and_then(|r| r.from.or(r.to)).unwrap_or(today);
        Self::containing(anchor)
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn next(&self) -> Self {
        self.first_day
            .checked_add_months(Months::new(1))
            .map(Self::containing)
            .unwrap_or(*self)
    }

    pub fn previous(&self) -> Self {
        self.first_day
            .checked_sub_months(Months::new(1))
            .map(Self::containing)
            .unwrap_or(*self)
    }

    /// "março 2024"
    pub fn title(&self) -> String {
        format!(
            "{} {}",
            MONTH_NAMES[self.first_day.month0() as usize],
            self.first_day.year()
        )
    }

    pub fn days_in_month(&self) -> u32 {
        self.next()
            .first_day
            .signed_duration_since(self.first_day)
            .num_days() as u32
    }

    /// Sunday-first rows; cells outside the month are `None`
    pub fn weeks(&self) -> Vec<[Option<NaiveDate>; 7]> {
        let leading = self.first_day.weekday().num_days_from_sunday() as usize;
        let mut cells: Vec<Option<NaiveDate>> = vec![None; leading];
        cells.extend(
            self.first_day
                .iter_days()
                .take(self.days_in_month() as usize)
                .map(Some),
        );
        while cells.len() % 7 != 0 {
            cells.push(None);
        }

        cells
            .chunks(7)
            .map(|chunk| {
                let mut week = [None; 7];
                week.copy_from_slice(chunk);
                week
            })
            .collect()
    }
}
