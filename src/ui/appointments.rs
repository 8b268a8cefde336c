// src/ui/appointments.rs

use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use iced::widget::{button, column, container, pick_list, row, scrollable, text, text_input};
use iced::{Alignment, Element, Length};

use crate::messages::Message;
use crate::models::{Appointment, AppointmentStatus, Client, Service};
use crate::ui::{field_label, section_header, status_badge, styles, ClientChoice, ServiceChoice};
use crate::ui_state::{AppointmentForm, UiState};

pub fn view<'a>(
    state: &'a UiState,
    appointments: &'a [Appointment],
    clients: &'a [Client],
    services: &'a [Service],
) -> Element<'a, Message> {
    match &state.appointment_form {
        Some(form) => view_form(form, clients, services),
        None => view_list(state, appointments),
    }
}

fn view_list<'a>(state: &'a UiState, appointments: &'a [Appointment]) -> Element<'a, Message> {
    let header = row![
        text("Appointments")
            .size(28)
            .style(iced::theme::Text::Color(styles::TEXT_MAIN))
            .width(Length::Fill),
        button(if state.loading { "Refreshing..." } else { "Refresh" })
            .padding([8, 16])
            .style(iced::theme::Button::Custom(Box::new(styles::NavStyle)))
            .on_press(Message::Refresh),
        button("New Appointment")
            .padding([8, 16])
            .style(iced::theme::Button::Custom(Box::new(
                styles::PrimaryButtonStyle
            )))
            .on_press(Message::NewAppointment),
    ]
    .spacing(10)
    .align_items(Alignment::Center);

    if appointments.is_empty() {
        return column![
            header,
            container(
                column![
                    text("No appointments booked")
                        .size(24)
                        .style(iced::theme::Text::Color(styles::TEXT_MAIN)),
                    text("Book the first one to fill the day")
                        .size(14)
                        .style(iced::theme::Text::Color(styles::SUBTEXT)),
                ]
                .spacing(10)
                .align_items(Alignment::Center)
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .center_y()
        ]
        .spacing(20)
        .into();
    }

    // Group by local calendar date so each day renders as one card.
    let mut by_date: BTreeMap<String, Vec<&Appointment>> = BTreeMap::new();
    for appointment in appointments {
        let date = appointment
            .scheduled_at
            .with_timezone(&Local)
            .format("%Y-%m-%d")
            .to_string();
        by_date.entry(date).or_default().push(appointment);
    }

    let today = Local::now().format("%Y-%m-%d").to_string();
    let mut day_cards: Vec<Element<'a, Message>> = Vec::new();

    for (date_str, mut day_appointments) in by_date {
        day_appointments.sort_by_key(|a| a.scheduled_at);

        let date_parsed =
            chrono::NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").unwrap_or_default();
        let friendly = date_parsed.format("%A, %B %-d").to_string();
        let is_today = date_str == today;

        let date_header = row![
            text(if is_today {
                "Today".to_string()
            } else {
                friendly.clone()
            })
            .size(18)
            .style(iced::theme::Text::Color(styles::TEXT_MAIN)),
            if is_today {
                text(friendly)
                    .size(14)
                    .style(iced::theme::Text::Color(styles::SUBTEXT))
            } else {
                text("")
            }
        ]
        .spacing(10)
        .align_items(Alignment::Center);

        let rows: Vec<Element<'a, Message>> = day_appointments
            .iter()
            .map(|appointment| appointment_row(appointment))
            .collect();

        day_cards.push(
            container(
                column![
                    date_header,
                    iced::widget::horizontal_rule(1),
                    column(rows).spacing(0)
                ]
                .spacing(12),
            )
            .width(Length::Fill)
            .padding(20)
            .style(iced::theme::Container::Custom(Box::new(styles::CardStyle)))
            .into(),
        );
    }

    column![
        header,
        scrollable(column(day_cards).spacing(20)).height(Length::Fill)
    ]
    .spacing(20)
    .into()
}

fn appointment_row(appointment: &Appointment) -> Element<'_, Message> {
    let local_time = appointment
        .scheduled_at
        .with_timezone(&Local)
        .format("%I:%M %p")
        .to_string();

    let cancelable = appointment.is_active() && !appointment.is_past();

    row![
        text(local_time)
            .size(14)
            .style(iced::theme::Text::Color(styles::ACCENT))
            .width(80),
        column![
            text(&appointment.client_name)
                .size(16)
                .style(iced::theme::Text::Color(styles::TEXT_MAIN)),
            text(format!(
                "{} ({} min)",
                appointment.service_name, appointment.duration_minutes
            ))
            .size(12)
            .style(iced::theme::Text::Color(styles::SUBTEXT)),
        ],
        iced::widget::horizontal_space(),
        status_badge(status_label(appointment.status), appointment.is_active()),
        button(text("Edit").size(13))
            .padding([6, 12])
            .style(iced::theme::Button::Custom(Box::new(styles::NavStyle)))
            .on_press(Message::EditAppointment(appointment.id)),
        button(text("Cancel").size(13))
            .padding([6, 12])
            .style(iced::theme::Button::Custom(Box::new(
                styles::DestructiveButtonStyle
            )))
            .on_press_maybe(cancelable.then_some(Message::CancelAppointment(appointment.id))),
    ]
    .spacing(10)
    .align_items(Alignment::Center)
    .padding(8)
    .into()
}

fn status_label(status: AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Scheduled => "Scheduled",
        AppointmentStatus::Completed => "Completed",
        AppointmentStatus::Canceled => "Canceled",
        AppointmentStatus::NoShow => "No-show",
    }
}

fn view_form<'a>(
    form: &'a AppointmentForm,
    clients: &'a [Client],
    services: &'a [Service],
) -> Element<'a, Message> {
    let title = if form.editing_id.is_some() {
        "Edit Appointment"
    } else {
        "New Appointment"
    };

    let client_choices: Vec<ClientChoice> = clients.iter().map(ClientChoice::from).collect();
    let selected_client = form
        .client_id
        .and_then(|id| client_choices.iter().find(|c| c.id == id).cloned());

    let service_choices: Vec<ServiceChoice> = services
        .iter()
        .filter(|s| s.active)
        .map(ServiceChoice::from)
        .collect();
    let selected_service = form
        .service_id
        .and_then(|id| service_choices.iter().find(|s| s.id == id).cloned());

    let schedule_display = form
        .schedule_preview
        .as_deref()
        .or(form.scheduled_at.as_deref())
        .map(friendly_timestamp)
        .unwrap_or_else(|| "Not set".to_string());

    let schedule_section: Element<'a, Message> = match &form.picker {
        Some(picker) => column![
            field_label("Scheduled for"),
            picker.view().map(Message::Picker),
        ]
        .spacing(5)
        .into(),
        None => column![
            field_label("Scheduled for"),
            row![
                text(schedule_display)
                    .size(14)
                    .style(iced::theme::Text::Color(styles::TEXT_MAIN))
                    .width(Length::Fill),
                button(text("Pick date & time").size(13))
                    .padding([6, 14])
                    .style(iced::theme::Button::Custom(Box::new(styles::NavStyle)))
                    .on_press(Message::OpenSchedulePicker),
            ]
            .align_items(Alignment::Center),
        ]
        .spacing(5)
        .into(),
    };

    let form_card = container(
        column![
            section_header(title),
            column![
                field_label("Client"),
                pick_list(
                    client_choices,
                    selected_client,
                    Message::AppointmentClientPicked
                )
                .placeholder("Choose a client")
                .width(Length::Fill),
            ]
            .spacing(5),
            column![
                field_label("Service"),
                pick_list(
                    service_choices,
                    selected_service,
                    Message::AppointmentServicePicked
                )
                .placeholder("Choose a service")
                .width(Length::Fill),
            ]
            .spacing(5),
            schedule_section,
            column![
                field_label("Notes"),
                text_input("Optional notes", &form.notes)
                    .padding(10)
                    .on_input(Message::AppointmentNotesChanged),
            ]
            .spacing(5),
            row![
                button("Back")
                    .padding([10, 20])
                    .style(iced::theme::Button::Custom(Box::new(styles::NavStyle)))
                    .on_press(Message::DismissAppointmentForm),
                iced::widget::horizontal_space(),
                button(if form.editing_id.is_some() {
                    "Save Changes"
                } else {
                    "Book Appointment"
                })
                .padding([10, 20])
                .style(iced::theme::Button::Custom(Box::new(
                    styles::PrimaryButtonStyle
                )))
                .on_press(Message::SubmitAppointmentForm),
            ]
            .align_items(Alignment::Center),
        ]
        .spacing(15),
    )
    .padding(20)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(styles::CardStyle)));

    scrollable(column![form_card].spacing(20)).into()
}

/// Render an interchange timestamp for people; falls back to the raw string
/// if it does not parse.
fn friendly_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.format("%A, %B %-d at %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}
