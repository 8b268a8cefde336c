// Appointment date/time selector.
//
// One parameterized component: month grid, hour/minute entry, availability
// gating, and draft/commit semantics. The host form only ever sees the
// events returned from `update`; intermediate navigation stays private.

pub mod availability;
pub mod grid;
pub mod session;

pub use availability::{
    is_date_selectable, is_hour_selectable, is_slot_selectable, next_time_for_date, SlotWindow,
};
pub use grid::MonthCursor;
pub use session::{compose_timestamp, parse_initial, PickerParams, PickerSession, TimePick};

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use iced::widget::{button, column, container, mouse_area, row, scrollable, text};
use iced::{Alignment, Element, Length};

use crate::ui::styles;

#[derive(Debug, Clone)]
pub enum PickerMessage {
    PrevMonth,
    NextMonth,
    DayPicked(NaiveDate),
    /// Open or close the hour/minute entry; opening resets the commit gate.
    ToggleTimeEntry,
    /// Click outside the open entry. Closes it and nothing else; safe to
    /// repeat.
    DismissTimeEntry,
    HourPicked(u32),
    MinutePicked(u32),
    Apply,
    Cancel,
}

/// What the host form receives. `Changed` is a live preview, never a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    Changed(String),
    Applied(String),
    Canceled,
}

pub struct DateTimePicker {
    cursor: MonthCursor,
    session: PickerSession,
    time_open: bool,
}

impl DateTimePicker {
    /// Build a fresh selector. All internal state is reinitialized from the
    /// host's current value; nothing survives from a previous open.
    pub fn open(params: &PickerParams, initial: Option<&str>) -> Self {
        let now = Local::now().naive_local();
        let session =
            PickerSession::open(params.window, initial, params.min_date, &Local, now);
        Self {
            cursor: MonthCursor::from_date(session.selected_date()),
            session,
            time_open: false,
        }
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.session.selected_date()
    }

    /// All state transitions re-read the clock; a selector left open across
    /// a minute boundary gates correctly on the next interaction.
    pub fn update(&mut self, message: PickerMessage) -> Option<PickerEvent> {
        let now = Local::now().naive_local();
        match message {
            PickerMessage::PrevMonth => {
                self.cursor = self.cursor.prev();
                None
            }
            PickerMessage::NextMonth => {
                self.cursor = self.cursor.next();
                None
            }
            PickerMessage::DayPicked(date) => {
                if self.session.pick_day(date, now) {
                    Some(PickerEvent::Changed(self.session.compose(&Local)))
                } else {
                    None
                }
            }
            PickerMessage::ToggleTimeEntry => {
                if self.time_open {
                    self.time_open = false;
                } else {
                    self.session.begin_time_entry();
                    self.time_open = true;
                }
                None
            }
            PickerMessage::DismissTimeEntry => {
                self.time_open = false;
                None
            }
            PickerMessage::HourPicked(hour) => match self.session.pick_hour(hour, now) {
                TimePick::Committed => {
                    self.time_open = false;
                    Some(PickerEvent::Changed(self.session.compose(&Local)))
                }
                TimePick::Pending | TimePick::Ignored => None,
            },
            PickerMessage::MinutePicked(minute) => match self.session.pick_minute(minute, now) {
                TimePick::Committed => {
                    self.time_open = false;
                    Some(PickerEvent::Changed(self.session.compose(&Local)))
                }
                TimePick::Pending | TimePick::Ignored => None,
            },
            PickerMessage::Apply => Some(PickerEvent::Applied(self.session.compose(&Local))),
            PickerMessage::Cancel => {
                self.session.cancel();
                self.time_open = false;
                Some(PickerEvent::Canceled)
            }
        }
    }

    pub fn view(&self) -> Element<'_, PickerMessage> {
        let now = Local::now().naive_local();

        let header = row![
            button(text("‹").size(18))
                .padding([4, 12])
                .style(iced::theme::Button::Custom(Box::new(styles::NavStyle)))
                .on_press(PickerMessage::PrevMonth),
            text(self.cursor.label())
                .size(16)
                .width(Length::Fill)
                .horizontal_alignment(iced::alignment::Horizontal::Center),
            button(text("›").size(18))
                .padding([4, 12])
                .style(iced::theme::Button::Custom(Box::new(styles::NavStyle)))
                .on_press(PickerMessage::NextMonth),
        ]
        .align_items(Alignment::Center);

        let weekday_row = row(["S", "M", "T", "W", "T", "F", "S"]
            .iter()
            .map(|label| {
                text(*label)
                    .size(12)
                    .width(36)
                    .horizontal_alignment(iced::alignment::Horizontal::Center)
                    .style(iced::theme::Text::Color(styles::SUBTEXT))
                    .into()
            })
            .collect::<Vec<_>>())
        .spacing(4);

        let mut grid_rows = column![].spacing(4);
        for week in self.cursor.weeks() {
            let cells = week
                .iter()
                .map(|cell| self.day_cell(*cell))
                .collect::<Vec<_>>();
            grid_rows = grid_rows.push(row(cells).spacing(4));
        }

        // While the hour/minute entry is open, a press anywhere on the
        // calendar area that no cell claims dismisses it.
        let calendar: Element<'_, PickerMessage> =
            column![header, weekday_row, grid_rows].spacing(12).into();
        let calendar: Element<'_, PickerMessage> = if self.time_open {
            mouse_area(calendar)
                .on_press(PickerMessage::DismissTimeEntry)
                .into()
        } else {
            calendar
        };

        let time_section: Element<'_, PickerMessage> = if self.time_open {
            self.time_entry(now)
        } else {
            row![
                text("Time").size(14).width(Length::Fill),
                button(
                    text(self.session.selected_time().format("%H:%M").to_string()).size(14)
                )
                .padding([6, 14])
                .style(iced::theme::Button::Custom(Box::new(styles::NavStyle)))
                .on_press(PickerMessage::ToggleTimeEntry),
            ]
            .align_items(Alignment::Center)
            .into()
        };

        let actions = row![
            button(text("Cancel").size(14))
                .padding([8, 16])
                .style(iced::theme::Button::Custom(Box::new(
                    styles::DestructiveButtonStyle
                )))
                .on_press(PickerMessage::Cancel),
            iced::widget::horizontal_space(),
            button(text("Apply").size(14))
                .padding([8, 16])
                .style(iced::theme::Button::Custom(Box::new(
                    styles::PrimaryButtonStyle
                )))
                .on_press(PickerMessage::Apply),
        ]
        .align_items(Alignment::Center);

        container(column![calendar, time_section, actions].spacing(12))
        .padding(16)
        .width(300)
        .style(iced::theme::Container::Custom(Box::new(styles::CardStyle)))
        .into()
    }

    fn day_cell(&self, day: Option<u32>) -> Element<'_, PickerMessage> {
        let Some(day) = day else {
            return container(text(" ")).width(36).height(32).into();
        };
        let Some(date) = self.cursor.date(day) else {
            return container(text(" ")).width(36).height(32).into();
        };

        let selectable = is_date_selectable(date, self.session.min_date());
        let selected = date == self.session.selected_date();

        let style = if selected {
            iced::theme::Button::Custom(Box::new(styles::SelectedDayStyle))
        } else if selectable {
            iced::theme::Button::Custom(Box::new(styles::DayStyle))
        } else {
            iced::theme::Button::Custom(Box::new(styles::DisabledDayStyle))
        };

        button(
            text(day.to_string())
                .size(13)
                .width(Length::Fill)
                .horizontal_alignment(iced::alignment::Horizontal::Center),
        )
        .width(36)
        .height(32)
        .style(style)
        .on_press_maybe(selectable.then_some(PickerMessage::DayPicked(date)))
        .into()
    }

    fn time_entry(&self, now: NaiveDateTime) -> Element<'_, PickerMessage> {
        let window = *self.session.window();
        let date = self.session.selected_date();

        let hour_buttons = window
            .hours()
            .map(|hour| {
                let enabled = is_hour_selectable(&window, date, hour, now);
                let highlighted = hour == self.session.pending_hour();
                self.slot_button(
                    format!("{:02}", hour),
                    enabled,
                    highlighted,
                    PickerMessage::HourPicked(hour),
                )
            })
            .collect::<Vec<_>>();

        let minute_buttons = window
            .minutes()
            .map(|minute| {
                let enabled =
                    is_slot_selectable(&window, date, self.session.pending_hour(), minute, now);
                let highlighted = minute == self.session.pending_minute();
                self.slot_button(
                    format!("{:02}", minute),
                    enabled,
                    highlighted,
                    PickerMessage::MinutePicked(minute),
                )
            })
            .collect::<Vec<_>>();

        row![
            column![
                text("Hour").size(12).style(iced::theme::Text::Color(styles::SUBTEXT)),
                scrollable(column(hour_buttons).spacing(2)).height(140),
            ]
            .spacing(6)
            .width(Length::Fill),
            column![
                text("Min").size(12).style(iced::theme::Text::Color(styles::SUBTEXT)),
                scrollable(column(minute_buttons).spacing(2)).height(140),
            ]
            .spacing(6)
            .width(Length::Fill),
        ]
        .spacing(8)
        .into()
    }

    fn slot_button(
        &self,
        label: String,
        enabled: bool,
        highlighted: bool,
        message: PickerMessage,
    ) -> Element<'_, PickerMessage> {
        let style = if highlighted {
            iced::theme::Button::Custom(Box::new(styles::SelectedDayStyle))
        } else if enabled {
            iced::theme::Button::Custom(Box::new(styles::DayStyle))
        } else {
            iced::theme::Button::Custom(Box::new(styles::DisabledDayStyle))
        };
        button(
            text(label)
                .size(13)
                .width(Length::Fill)
                .horizontal_alignment(iced::alignment::Horizontal::Center),
        )
        .width(Length::Fill)
        .style(style)
        .on_press_maybe(enabled.then_some(message))
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_navigation_keeps_selection() {
        let params = PickerParams::default();
        let mut picker = DateTimePicker::open(&params, None);
        let selected = picker.selected_date();
        assert!(picker.update(PickerMessage::NextMonth).is_none());
        assert!(picker.update(PickerMessage::NextMonth).is_none());
        assert!(picker.update(PickerMessage::PrevMonth).is_none());
        assert_eq!(picker.selected_date(), selected);
    }

    #[test]
    fn test_apply_emits_current_draft() {
        let params = PickerParams::default();
        let mut picker = DateTimePicker::open(&params, None);
        match picker.update(PickerMessage::Apply) {
            Some(PickerEvent::Applied(ts)) => {
                assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok())
            }
            other => panic!("expected Applied, got {:?}", other),
        }
    }

    #[test]
    fn test_cancel_emits_canceled_and_restores() {
        let params = PickerParams::default();
        let mut picker = DateTimePicker::open(&params, None);
        let opened = picker.selected_date();
        let future = opened + chrono::Duration::days(3);
        picker.update(PickerMessage::DayPicked(future));
        assert_eq!(
            picker.update(PickerMessage::Cancel),
            Some(PickerEvent::Canceled)
        );
        assert_eq!(picker.selected_date(), opened);
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let params = PickerParams::default();
        let mut picker = DateTimePicker::open(&params, None);
        picker.update(PickerMessage::ToggleTimeEntry);
        assert!(picker.update(PickerMessage::DismissTimeEntry).is_none());
        assert!(picker.update(PickerMessage::DismissTimeEntry).is_none());
    }

    #[test]
    fn test_dismiss_with_pending_hour_commits_nothing() {
        let params = PickerParams::default();
        let mut picker = DateTimePicker::open(&params, None);
        let future = picker.selected_date() + chrono::Duration::days(10);
        picker.update(PickerMessage::DayPicked(future));

        let before = match picker.update(PickerMessage::Apply) {
            Some(PickerEvent::Applied(ts)) => ts,
            other => panic!("expected Applied, got {:?}", other),
        };

        // Clicking away mid-entry discards the lone hour pick
        picker.update(PickerMessage::ToggleTimeEntry);
        picker.update(PickerMessage::HourPicked(15));
        assert!(picker.update(PickerMessage::DismissTimeEntry).is_none());

        match picker.update(PickerMessage::Apply) {
            Some(PickerEvent::Applied(after)) => assert_eq!(before, after),
            other => panic!("expected Applied, got {:?}", other),
        }
    }
}
