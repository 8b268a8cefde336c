//! Month grid math for the appointment date selector.
//!
//! The cursor tracks which (year, month) page the calendar shows. Navigation
//! moves the cursor only; the selected date is owned by the session and is
//! never changed by paging.

use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    /// Cursor showing the month that contains `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    fn first_day(self) -> NaiveDate {
        // month is always 1..=12 by construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("cursor month out of range")
    }

    pub fn day_count(self) -> u32 {
        let next_first = self.next().first_day();
        next_first
            .pred_opt()
            .map(|last| last.day())
            .unwrap_or(31)
    }

    /// Blank cells before day 1 so columns align on a Sunday-start week.
    pub fn leading_blanks(self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    /// The calendar date for a day number on this page, if valid.
    pub fn date(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Header label, e.g. "June 2025".
    pub fn label(self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    /// Rows of the 7-column grid: leading blanks, then every day of the
    /// month, padded with trailing blanks to fill the last row.
    pub fn weeks(self) -> Vec<[Option<u32>; 7]> {
        let blanks = self.leading_blanks() as usize;
        let days = self.day_count();

        let mut weeks = Vec::new();
        let mut row: [Option<u32>; 7] = [None; 7];
        let mut col = blanks;

        for day in 1..=days {
            row[col] = Some(day);
            col += 1;
            if col == 7 {
                weeks.push(row);
                row = [None; 7];
                col = 0;
            }
        }
        if col > 0 {
            weeks.push(row);
        }
        weeks
    }
}
