// src/ui/clients.rs

use iced::widget::{button, column, container, row, scrollable, text, text_input};
use iced::{Alignment, Element, Length};

use crate::messages::Message;
use crate::models::Client;
use crate::ui::{field_label, section_header, styles};
use crate::ui_state::UiState;

pub fn view<'a>(state: &'a UiState, clients: &'a [Client]) -> Element<'a, Message> {
    let roster_card = container(
        column![
            section_header("Client Roster"),
            if clients.is_empty() {
                Element::from(
                    text("No clients yet.")
                        .style(iced::theme::Text::Color(styles::SUBTEXT)),
                )
            } else {
                column(clients.iter().map(client_row).collect::<Vec<_>>())
                    .spacing(10)
                    .into()
            }
        ]
        .spacing(15),
    )
    .padding(20)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(styles::CardStyle)));

    let add_card = container(
        column![
            section_header("Add Client"),
            column![
                field_label("Name"),
                text_input("e.g., Joana Prado", &state.client_name)
                    .padding(10)
                    .on_input(Message::ClientNameChanged),
            ]
            .spacing(5),
            column![
                field_label("Email (optional)"),
                text_input("joana@example.com", &state.client_email)
                    .padding(10)
                    .on_input(Message::ClientEmailChanged),
            ]
            .spacing(5),
            column![
                field_label("Phone (optional)"),
                text_input("555-123-4567", &state.client_phone)
                    .padding(10)
                    .on_input(Message::ClientPhoneChanged),
            ]
            .spacing(5),
            row![
                iced::widget::horizontal_space(),
                button("Add Client")
                    .padding([10, 20])
                    .style(iced::theme::Button::Custom(Box::new(
                        styles::PrimaryButtonStyle
                    )))
                    .on_press(Message::AddClient),
            ]
        ]
        .spacing(15),
    )
    .padding(20)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(styles::CardStyle)));

    scrollable(
        column![
            text("Clients")
                .size(28)
                .style(iced::theme::Text::Color(styles::TEXT_MAIN)),
            roster_card,
            add_card
        ]
        .spacing(20),
    )
    .into()
}

fn client_row(client: &Client) -> Element<'_, Message> {
    let contact = match (&client.email, &client.phone) {
        (Some(email), Some(phone)) => format!("{} · {}", email, phone),
        (Some(email), None) => email.clone(),
        (None, Some(phone)) => phone.clone(),
        (None, None) => "No contact details".to_string(),
    };

    row![
        column![
            text(&client.name)
                .size(16)
                .style(iced::theme::Text::Color(styles::TEXT_MAIN)),
            text(contact)
                .size(12)
                .style(iced::theme::Text::Color(styles::SUBTEXT)),
        ],
        iced::widget::horizontal_space(),
        button("Remove")
            .padding([6, 12])
            .style(iced::theme::Button::Custom(Box::new(
                styles::DestructiveButtonStyle
            )))
            .on_press(Message::DeleteClient(client.id)),
    ]
    .align_items(Alignment::Center)
    .into()
}
