// src/ui/settings.rs

use chrono::Local;
use iced::widget::{button, column, container, row, scrollable, text, text_input};
use iced::{Alignment, Element, Length};

use crate::messages::Message;
use crate::models::User;
use crate::ui::{field_label, section_header, status_badge, styles};
use crate::ui_state::UiState;

pub fn view<'a>(state: &'a UiState, api_base_url: &'a str) -> Element<'a, Message> {
    let session_card = match &state.user {
        Some(user) => account_card(user),
        None => login_card(state),
    };

    let connection_card = container(
        column![
            section_header("Connection"),
            column![
                field_label("Booking API"),
                text(api_base_url)
                    .size(14)
                    .style(iced::theme::Text::Color(styles::TEXT_MAIN)),
            ]
            .spacing(5),
            column![
                field_label("Last refresh"),
                text(match state.last_refresh {
                    Some(at) => at.with_timezone(&Local).format("%H:%M:%S").to_string(),
                    None => "Never".to_string(),
                })
                .size(14)
                .style(iced::theme::Text::Color(styles::TEXT_MAIN)),
            ]
            .spacing(5),
        ]
        .spacing(15),
    )
    .padding(20)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(styles::CardStyle)));

    scrollable(
        column![
            text("Settings")
                .size(28)
                .style(iced::theme::Text::Color(styles::TEXT_MAIN)),
            session_card,
            connection_card
        ]
        .spacing(20),
    )
    .into()
}

fn login_card(state: &UiState) -> Element<'_, Message> {
    container(
        column![
            section_header("Sign In"),
            text("Use your staff account to open the appointment book.")
                .size(13)
                .style(iced::theme::Text::Color(styles::SUBTEXT)),
            column![
                field_label("Email"),
                text_input("you@salon.com", &state.login_email)
                    .padding(10)
                    .on_input(Message::LoginEmailChanged),
            ]
            .spacing(5),
            column![
                field_label("Password"),
                text_input("Password", &state.login_password)
                    .secure(true)
                    .padding(10)
                    .on_input(Message::LoginPasswordChanged)
                    .on_submit(Message::SubmitLogin),
            ]
            .spacing(5),
            row![
                text(&state.status)
                    .size(12)
                    .style(iced::theme::Text::Color(styles::SUBTEXT))
                    .width(Length::Fill),
                button(if state.loading { "Signing in..." } else { "Sign In" })
                    .padding([10, 20])
                    .style(iced::theme::Button::Custom(Box::new(
                        styles::PrimaryButtonStyle
                    )))
                    .on_press_maybe((!state.loading).then_some(Message::SubmitLogin)),
            ]
            .align_items(Alignment::Center)
        ]
        .spacing(15),
    )
    .padding(20)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(styles::CardStyle)))
    .into()
}

fn account_card(user: &User) -> Element<'_, Message> {
    container(
        column![
            section_header("Account"),
            row![
                column![
                    text(&user.name)
                        .size(16)
                        .style(iced::theme::Text::Color(styles::TEXT_MAIN)),
                    text(&user.email)
                        .size(12)
                        .style(iced::theme::Text::Color(styles::SUBTEXT)),
                ],
                iced::widget::horizontal_space(),
                status_badge(user.role.as_str(), true),
                button("Sign Out")
                    .padding([6, 12])
                    .style(iced::theme::Button::Custom(Box::new(
                        styles::DestructiveButtonStyle
                    )))
                    .on_press(Message::Logout),
            ]
            .spacing(10)
            .align_items(Alignment::Center),
        ]
        .spacing(15),
    )
    .padding(20)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(styles::CardStyle)))
    .into()
}
