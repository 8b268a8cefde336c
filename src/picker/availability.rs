//! Availability gate for the appointment date/time selector.
//!
//! Two rules only: dates cannot fall before the host-supplied floor, and
//! slots on today's date cannot lie in the past. Double-booking and staff
//! schedules are the backend's problem, not gated here.
//!
//! Every predicate takes `now` explicitly. Callers read the clock at each
//! interaction so a selector left open across a minute boundary disables
//! newly-past slots on the next click.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Daily booking window `[start_hour, end_hour)` with a minute step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotWindow {
    pub start_hour: u32,
    pub end_hour: u32,
    pub minute_step: u32,
}

impl Default for SlotWindow {
    fn default() -> Self {
        Self {
            start_hour: 8,
            end_hour: 20,
            minute_step: 5,
        }
    }
}

impl SlotWindow {
    pub fn new(start_hour: u32, end_hour: u32, minute_step: u32) -> Result<Self, String> {
        if start_hour >= end_hour || end_hour > 24 {
            return Err(format!(
                "Booking window [{}, {}) is empty or out of range",
                start_hour, end_hour
            ));
        }
        if minute_step == 0 || minute_step > 60 || 60 % minute_step != 0 {
            return Err(format!(
                "Minute step {} must divide 60 evenly",
                minute_step
            ));
        }
        Ok(Self {
            start_hour,
            end_hour,
            minute_step,
        })
    }

    pub fn contains_hour(&self, hour: u32) -> bool {
        (self.start_hour..self.end_hour).contains(&hour)
    }

    pub fn hours(&self) -> impl Iterator<Item = u32> {
        self.start_hour..self.end_hour
    }

    pub fn minutes(&self) -> impl Iterator<Item = u32> + '_ {
        (0..60).step_by(self.minute_step as usize)
    }

    /// First slot of the day.
    pub fn opening_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.start_hour, 0, 0).expect("window start out of range")
    }
}

/// Date floor check, inclusive; unset means everything is selectable.
/// Compared as plain calendar dates in the viewer's zone, never UTC-shifted.
pub fn is_date_selectable(date: NaiveDate, min_date: Option<NaiveDate>) -> bool {
    match min_date {
        Some(floor) => date >= floor,
        None => true,
    }
}

/// A slot is off-limits only when it sits on today's date and its composed
/// instant lies strictly before `now`, seconds included.
pub fn is_slot_selectable(
    window: &SlotWindow,
    date: NaiveDate,
    hour: u32,
    minute: u32,
    now: NaiveDateTime,
) -> bool {
    if !window.contains_hour(hour) || minute >= 60 {
        return false;
    }
    if date != now.date() {
        return true;
    }
    match NaiveTime::from_hms_opt(hour, minute, 0) {
        Some(slot) => slot >= now.time(),
        None => false,
    }
}

/// An hour stays clickable while at least one of its step minutes is.
pub fn is_hour_selectable(window: &SlotWindow, date: NaiveDate, hour: u32, now: NaiveDateTime) -> bool {
    window
        .minutes()
        .any(|minute| is_slot_selectable(window, date, hour, minute, now))
}

/// Default time for a freshly picked date: the window opening for any other
/// day, the first step-aligned minute strictly after now for today (rolling
/// into the next hour at :00 when that passes :59). A window already closed
/// for today falls back to the opening slot; it renders disabled and cannot
/// be applied from today's grid.
pub fn next_time_for_date(window: &SlotWindow, date: NaiveDate, now: NaiveDateTime) -> NaiveTime {
    if date != now.date() {
        return window.opening_time();
    }

    let step = window.minute_step;
    let mut hour = now.hour();
    let mut minute = (now.minute() / step + 1) * step;
    if minute >= 60 {
        hour += 1;
        minute = 0;
    }

    if hour < window.start_hour {
        return window.opening_time();
    }
    if hour >= window.end_hour {
        return window.opening_time();
    }
    NaiveTime::from_hms_opt(hour, minute, 0).expect("rounded slot out of range")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 10)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    #[test]
    fn test_window_rejects_bad_parameters() {
        assert!(SlotWindow::new(9, 9, 5).is_err());
        assert!(SlotWindow::new(9, 25, 5).is_err());
        assert!(SlotWindow::new(9, 18, 0).is_err());
        assert!(SlotWindow::new(9, 18, 7).is_err());
        assert!(SlotWindow::new(9, 18, 15).is_ok());
    }

    #[test]
    fn test_date_floor_inclusive() {
        let floor = NaiveDate::from_ymd_opt(2025, 6, 10);
        assert!(!is_date_selectable(
            NaiveDate::from_ymd_opt(2025, 6, 9).unwrap(),
            floor
        ));
        assert!(is_date_selectable(today(), floor));
        assert!(is_date_selectable(
            NaiveDate::from_ymd_opt(2025, 6, 11).unwrap(),
            floor
        ));
        assert!(is_date_selectable(
            NaiveDate::from_ymd_opt(1999, 1, 1).unwrap(),
            None
        ));
    }

    #[test]
    fn test_future_date_slots_always_selectable() {
        let window = SlotWindow::default();
        let tomorrow = NaiveDate::from_ymd_opt(2025, 6, 11).unwrap();
        assert!(is_slot_selectable(&window, tomorrow, 8, 0, at(23, 59)));
    }

    #[test]
    fn test_today_past_slots_disabled() {
        let window = SlotWindow::default();
        let now = at(14, 32);
        assert!(!is_slot_selectable(&window, today(), 14, 30, now));
        assert!(is_slot_selectable(&window, today(), 14, 32, now));
        assert!(is_slot_selectable(&window, today(), 14, 35, now));
        assert!(is_slot_selectable(&window, today(), 15, 0, now));
    }

    #[test]
    fn test_elapsed_seconds_disable_the_current_minute() {
        let window = SlotWindow::default();
        let now = today().and_hms_opt(14, 32, 45).unwrap();
        // 14:32:00 is strictly before 14:32:45
        assert!(!is_slot_selectable(&window, today(), 14, 32, now));
        assert!(is_slot_selectable(&window, today(), 14, 33, now));
    }

    #[test]
    fn test_out_of_window_hour_never_selectable() {
        let window = SlotWindow::default();
        let tomorrow = NaiveDate::from_ymd_opt(2025, 6, 11).unwrap();
        assert!(!is_slot_selectable(&window, tomorrow, 7, 0, at(9, 0)));
        assert!(!is_slot_selectable(&window, tomorrow, 20, 0, at(9, 0)));
    }

    #[test]
    fn test_hour_disabled_only_when_all_minutes_past() {
        let window = SlotWindow::default();
        let now = at(14, 32);
        // Hours fully behind the clock
        for hour in 8..14 {
            assert!(!is_hour_selectable(&window, today(), hour, now));
        }
        // 14:35 .. 14:55 still ahead
        assert!(is_hour_selectable(&window, today(), 14, now));
        assert!(is_hour_selectable(&window, today(), 15, now));
        // At 14:56 the last step slot of hour 14 (14:55) is past
        assert!(!is_hour_selectable(&window, today(), 14, at(14, 56)));
    }

    #[test]
    fn test_next_time_rounds_up_to_step() {
        let window = SlotWindow::default();
        assert_eq!(
            next_time_for_date(&window, today(), at(10, 7)),
            NaiveTime::from_hms_opt(10, 10, 0).unwrap()
        );
        // Exactly on a step moves to the next one, never the current minute
        assert_eq!(
            next_time_for_date(&window, today(), at(10, 55)),
            NaiveTime::from_hms_opt(11, 0, 0).unwrap()
        );
        assert_eq!(
            next_time_for_date(&window, today(), at(10, 0)),
            NaiveTime::from_hms_opt(10, 5, 0).unwrap()
        );
        assert_eq!(
            next_time_for_date(&window, today(), at(10, 56)),
            NaiveTime::from_hms_opt(11, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_next_time_for_other_dates_is_window_opening() {
        let window = SlotWindow::default();
        let tomorrow = NaiveDate::from_ymd_opt(2025, 6, 11).unwrap();
        assert_eq!(
            next_time_for_date(&window, tomorrow, at(17, 43)),
            NaiveTime::from_hms_opt(8, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_next_time_clamps_to_window() {
        let window = SlotWindow::new(9, 18, 5).unwrap();
        // Before opening: first slot of the day
        assert_eq!(
            next_time_for_date(&window, today(), at(6, 12)),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap()
        );
        // After closing: fall back to opening (disabled for today)
        assert_eq!(
            next_time_for_date(&window, today(), at(21, 0)),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap()
        );
    }
}
