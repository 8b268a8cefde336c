//! Draft/commit controller for the date/time selector.
//!
//! One session lives from `open` to apply/cancel and owns the uncommitted
//! draft exclusively. The host form's value changes only when the host
//! receives the applied timestamp; nothing here mutates host state.

use chrono::{
    DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Timelike,
};
use log::debug;

use super::availability::{
    is_date_selectable, is_hour_selectable, is_slot_selectable, next_time_for_date, SlotWindow,
};

/// Outcome of an hour or minute selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimePick {
    /// Click on a disabled or out-of-window value; nothing changed.
    Ignored,
    /// Selection recorded, but the pair is not complete yet this session.
    Pending,
    /// Both parts have been picked this session; the pair is committed.
    Committed,
}

#[derive(Debug, Clone)]
pub struct PickerSession {
    window: SlotWindow,
    min_date: Option<NaiveDate>,
    date: NaiveDate,
    time: NaiveTime,
    // Provisional hour/minute while the time dropdown is open.
    pending_hour: u32,
    pending_minute: u32,
    // Session-scoped commit gate. Deliberately distinct from "has a value":
    // a value carried over from the initial timestamp does not count until
    // the user touches it in this opening.
    picked_hour: bool,
    picked_minute: bool,
    // Snapshot for cancel().
    opened_date: NaiveDate,
    opened_time: NaiveTime,
}

impl PickerSession {
    /// Start a session from an optional interchange timestamp. A malformed
    /// value is treated as absent; the session falls back to defaults and
    /// never propagates a parse error to the host.
    pub fn open<Tz: TimeZone>(
        window: SlotWindow,
        initial: Option<&str>,
        min_date: Option<NaiveDate>,
        tz: &Tz,
        now: NaiveDateTime,
    ) -> Self {
        let parsed = initial.and_then(|value| parse_initial(value, tz));
        if initial.is_some() && parsed.is_none() {
            debug!("Unparseable initial timestamp, using defaults");
        }

        let (date, time) = match parsed {
            Some(pair) => pair,
            None => {
                let date = now.date();
                (date, next_time_for_date(&window, date, now))
            }
        };

        Self {
            window,
            min_date,
            date,
            time,
            pending_hour: time.hour(),
            pending_minute: time.minute(),
            picked_hour: false,
            picked_minute: false,
            opened_date: date,
            opened_time: time,
        }
    }

    pub fn window(&self) -> &SlotWindow {
        &self.window
    }

    pub fn min_date(&self) -> Option<NaiveDate> {
        self.min_date
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.date
    }

    pub fn selected_time(&self) -> NaiveTime {
        self.time
    }

    /// Hour currently highlighted in the time dropdown.
    pub fn pending_hour(&self) -> u32 {
        self.pending_hour
    }

    pub fn pending_minute(&self) -> u32 {
        self.pending_minute
    }

    pub fn has_picked_hour(&self) -> bool {
        self.picked_hour
    }

    pub fn has_picked_minute(&self) -> bool {
        self.picked_minute
    }

    /// Day-cell click. Returns false (and leaves everything untouched) for
    /// dates below the floor. A successful pick recomputes the selected time
    /// to the nearest valid slot for the new date.
    pub fn pick_day(&mut self, date: NaiveDate, now: NaiveDateTime) -> bool {
        if !is_date_selectable(date, self.min_date) {
            return false;
        }
        self.date = date;
        self.set_time(next_time_for_date(&self.window, date, now));
        true
    }

    /// Called when the hour/minute dropdown opens. Resets the commit gate:
    /// both parts must be re-picked within this dropdown session.
    pub fn begin_time_entry(&mut self) {
        self.pending_hour = self.time.hour();
        self.pending_minute = self.time.minute();
        self.picked_hour = false;
        self.picked_minute = false;
    }

    pub fn pick_hour(&mut self, hour: u32, now: NaiveDateTime) -> TimePick {
        if !is_hour_selectable(&self.window, self.date, hour, now) {
            return TimePick::Ignored;
        }
        self.pending_hour = hour;
        self.picked_hour = true;
        self.try_commit()
    }

    pub fn pick_minute(&mut self, minute: u32, now: NaiveDateTime) -> TimePick {
        if !is_slot_selectable(&self.window, self.date, self.pending_hour, minute, now) {
            return TimePick::Ignored;
        }
        self.pending_minute = minute;
        self.picked_minute = true;
        self.try_commit()
    }

    fn try_commit(&mut self) -> TimePick {
        if !(self.picked_hour && self.picked_minute) {
            return TimePick::Pending;
        }
        match NaiveTime::from_hms_opt(self.pending_hour, self.pending_minute, 0) {
            Some(time) => {
                self.set_time(time);
                TimePick::Committed
            }
            None => TimePick::Ignored,
        }
    }

    fn set_time(&mut self, time: NaiveTime) {
        self.time = time;
        self.pending_hour = time.hour();
        self.pending_minute = time.minute();
    }

    /// Discard the draft and restore whatever the session showed at open.
    pub fn cancel(&mut self) {
        self.date = self.opened_date;
        self.set_time(self.opened_time);
        self.picked_hour = false;
        self.picked_minute = false;
    }

    /// Compose the committed pair into an interchange timestamp. Shared by
    /// apply and the live preview; only the host decides which one counts.
    pub fn compose<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        compose_timestamp(self.date, self.time, tz)
    }
}

/// Decode an interchange timestamp into a calendar date and wall time in
/// `tz`. Returns None for anything unparseable.
pub fn parse_initial<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<(NaiveDate, NaiveTime)> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        let local = instant.with_timezone(tz).naive_local();
        return Some((local.date(), local.time()));
    }
    // Zone-less timestamps are taken at face value as local wall time.
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some((naive.date(), naive.time()));
        }
    }
    None
}

/// RFC 3339 serialization of a local (date, time) pair in `tz`.
pub fn compose_timestamp<Tz: TimeZone>(date: NaiveDate, time: NaiveTime, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let naive = date.and_time(time);
    match tz.from_local_datetime(&naive).earliest() {
        Some(instant) => instant.to_rfc3339_opts(SecondsFormat::Secs, false),
        // DST gap: the wall time does not exist in tz; emit it zone-less
        // rather than invent an offset.
        None => naive.format("%Y-%m-%dT%H:%M:%S").to_string(),
    }
}

/// Convenience wrapper mirroring the selector's config surface.
#[derive(Debug, Clone, Default)]
pub struct PickerParams {
    pub window: SlotWindow,
    pub min_date: Option<NaiveDate>,
}

impl PickerParams {
    pub fn new(window: SlotWindow) -> Self {
        Self {
            window,
            min_date: None,
        }
    }

    pub fn with_min_date(mut self, min_date: NaiveDate) -> Self {
        self.min_date = Some(min_date);
        self
    }

    /// Parse the host's `YYYY-MM-DD` floor; bad input means no floor.
    pub fn with_min_date_str(mut self, min_date: &str) -> Self {
        self.min_date = NaiveDate::parse_from_str(min_date.trim(), "%Y-%m-%d").ok();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn utc_minus_5() -> FixedOffset {
        FixedOffset::west_opt(5 * 3600).unwrap()
    }

    fn now_at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn open_default(now: NaiveDateTime) -> PickerSession {
        PickerSession::open(SlotWindow::default(), None, None, &utc_minus_5(), now)
    }

    #[test]
    fn test_open_converts_initial_to_local_zone() {
        let now = now_at(2025, 11, 20, 9, 0);
        let session = PickerSession::open(
            SlotWindow::default(),
            Some("2025-11-25T14:30:00.000Z"),
            None,
            &utc_minus_5(),
            now,
        );
        assert_eq!(
            session.selected_date(),
            NaiveDate::from_ymd_opt(2025, 11, 25).unwrap()
        );
        assert_eq!(
            session.selected_time(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_open_is_idempotent_for_same_initial() {
        let now = now_at(2025, 11, 20, 9, 0);
        let a = PickerSession::open(
            SlotWindow::default(),
            Some("2025-11-25T14:30:00.000Z"),
            None,
            &utc_minus_5(),
            now,
        );
        let b = PickerSession::open(
            SlotWindow::default(),
            Some("2025-11-25T14:30:00.000Z"),
            None,
            &utc_minus_5(),
            now,
        );
        assert_eq!(a.selected_date(), b.selected_date());
        assert_eq!(a.selected_time(), b.selected_time());
        assert!(!a.has_picked_hour() && !a.has_picked_minute());
    }

    #[test]
    fn test_malformed_initial_falls_back_to_defaults() {
        let now = now_at(2025, 6, 10, 10, 7);
        let session = PickerSession::open(
            SlotWindow::default(),
            Some("next tuesday at noonish"),
            None,
            &utc_minus_5(),
            now,
        );
        assert_eq!(session.selected_date(), now.date());
        assert_eq!(
            session.selected_time(),
            NaiveTime::from_hms_opt(10, 10, 0).unwrap()
        );
    }

    #[test]
    fn test_pick_day_below_floor_is_noop() {
        let now = now_at(2025, 6, 12, 10, 0);
        let mut session = PickerSession::open(
            SlotWindow::default(),
            None,
            NaiveDate::from_ymd_opt(2025, 6, 10),
            &utc_minus_5(),
            now,
        );
        let before = session.selected_date();
        assert!(!session.pick_day(NaiveDate::from_ymd_opt(2025, 6, 5).unwrap(), now));
        assert_eq!(session.selected_date(), before);
    }

    #[test]
    fn test_pick_day_recomputes_time() {
        let now = now_at(2025, 6, 10, 14, 32);
        let mut session = open_default(now);
        // Moving to a future date resets to the window opening
        assert!(session.pick_day(NaiveDate::from_ymd_opt(2025, 6, 12).unwrap(), now));
        assert_eq!(
            session.selected_time(),
            NaiveTime::from_hms_opt(8, 0, 0).unwrap()
        );
        // Coming back to today snaps to the next step slot
        assert!(session.pick_day(now.date(), now));
        assert_eq!(
            session.selected_time(),
            NaiveTime::from_hms_opt(14, 35, 0).unwrap()
        );
    }

    #[test]
    fn test_commit_requires_both_flags_each_session() {
        let now = now_at(2025, 6, 10, 10, 0);
        let mut session = open_default(now);
        session.pick_day(NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(), now);

        session.begin_time_entry();
        assert_eq!(session.pick_hour(14, now), TimePick::Pending);
        // Hour alone never commits, even though a minute value exists
        assert_eq!(
            session.selected_time(),
            NaiveTime::from_hms_opt(8, 0, 0).unwrap()
        );
        assert_eq!(session.pick_minute(30, now), TimePick::Committed);
        assert_eq!(
            session.selected_time(),
            NaiveTime::from_hms_opt(14, 30, 0).unwrap()
        );

        // Re-opening the dropdown resets the gate even with a full value
        session.begin_time_entry();
        assert!(!session.has_picked_hour());
        assert!(!session.has_picked_minute());
        assert_eq!(session.pick_minute(45, now), TimePick::Pending);
        assert_eq!(
            session.selected_time(),
            NaiveTime::from_hms_opt(14, 30, 0).unwrap()
        );

        // Once both are true, each further single pick recommits the pair
        assert_eq!(session.pick_hour(15, now), TimePick::Committed);
        assert_eq!(
            session.selected_time(),
            NaiveTime::from_hms_opt(15, 45, 0).unwrap()
        );
        assert_eq!(session.pick_minute(0, now), TimePick::Committed);
        assert_eq!(
            session.selected_time(),
            NaiveTime::from_hms_opt(15, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_disabled_picks_are_inert() {
        let now = now_at(2025, 6, 10, 14, 32);
        let mut session = open_default(now);
        session.begin_time_entry();
        // Hours fully in the past are ignored and do not arm the gate
        assert_eq!(session.pick_hour(9, now), TimePick::Ignored);
        assert!(!session.has_picked_hour());
        // Past minute under the current hour likewise
        assert_eq!(session.pick_hour(14, now), TimePick::Pending);
        assert_eq!(session.pick_minute(30, now), TimePick::Ignored);
        assert!(!session.has_picked_minute());
        assert_eq!(session.pick_minute(35, now), TimePick::Committed);
    }

    #[test]
    fn test_cancel_restores_open_state() {
        let now = now_at(2025, 6, 10, 10, 0);
        let mut session = PickerSession::open(
            SlotWindow::default(),
            Some("2025-06-15T11:00:00-05:00"),
            None,
            &utc_minus_5(),
            now,
        );
        let opened_date = session.selected_date();
        let opened_time = session.selected_time();

        session.pick_day(NaiveDate::from_ymd_opt(2025, 6, 22).unwrap(), now);
        session.begin_time_entry();
        session.pick_hour(16, now);
        session.pick_minute(45, now);
        session.cancel();

        assert_eq!(session.selected_date(), opened_date);
        assert_eq!(session.selected_time(), opened_time);
        assert!(!session.has_picked_hour());
        assert!(!session.has_picked_minute());
    }

    #[test]
    fn test_compose_round_trips_through_parse() {
        let tz = utc_minus_5();
        let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let time = NaiveTime::from_hms_opt(11, 30, 0).unwrap();
        let composed = compose_timestamp(date, time, &tz);
        assert_eq!(composed, "2025-06-15T11:30:00-05:00");
        assert_eq!(parse_initial(&composed, &tz), Some((date, time)));
    }

    #[test]
    fn test_parse_accepts_zone_less_local_timestamps() {
        let tz = utc_minus_5();
        assert_eq!(
            parse_initial("2025-06-15T09:15:00", &tz),
            Some((
                NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
                NaiveTime::from_hms_opt(9, 15, 0).unwrap()
            ))
        );
        assert_eq!(parse_initial("", &tz), None);
        assert_eq!(parse_initial("garbage", &tz), None);
    }

    #[test]
    fn test_min_date_str_parsing() {
        let params = PickerParams::default().with_min_date_str("2025-06-10");
        assert_eq!(params.min_date, NaiveDate::from_ymd_opt(2025, 6, 10));
        let bad = PickerParams::default().with_min_date_str("06/10/2025");
        assert_eq!(bad.min_date, None);
    }
}
