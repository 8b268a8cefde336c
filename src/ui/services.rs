// src/ui/services.rs

use iced::widget::{button, column, container, row, scrollable, text, text_input};
use iced::{Alignment, Element, Length};

use crate::messages::Message;
use crate::models::Service;
use crate::ui::{field_label, section_header, status_badge, styles};
use crate::ui_state::UiState;

pub fn view<'a>(state: &'a UiState, services: &'a [Service]) -> Element<'a, Message> {
    let catalog_card = container(
        column![
            section_header("Service Catalog"),
            if services.is_empty() {
                Element::from(
                    text("No services defined yet.")
                        .style(iced::theme::Text::Color(styles::SUBTEXT)),
                )
            } else {
                column(services.iter().map(service_row).collect::<Vec<_>>())
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
            section_header("Add Service"),
            column![
                field_label("Name"),
                text_input("e.g., Haircut", &state.service_name)
                    .padding(10)
                    .on_input(Message::ServiceNameChanged),
            ]
            .spacing(5),
            row![
                column![
                    field_label("Duration (minutes)"),
                    text_input("45", &state.service_duration)
                        .padding(10)
                        .on_input(Message::ServiceDurationChanged),
                ]
                .spacing(5)
                .width(Length::Fill),
                column![
                    field_label("Price"),
                    text_input("35.00", &state.service_price)
                        .padding(10)
                        .on_input(Message::ServicePriceChanged),
                ]
                .spacing(5)
                .width(Length::Fill),
            ]
            .spacing(10),
            row![
                iced::widget::horizontal_space(),
                button("Add Service")
                    .padding([10, 20])
                    .style(iced::theme::Button::Custom(Box::new(
                        styles::PrimaryButtonStyle
                    )))
                    .on_press(Message::AddService),
            ]
        ]
        .spacing(15),
    )
    .padding(20)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(styles::CardStyle)));

    scrollable(
        column![
            text("Services")
                .size(28)
                .style(iced::theme::Text::Color(styles::TEXT_MAIN)),
            catalog_card,
            add_card
        ]
        .spacing(20),
    )
    .into()
}

fn service_row(service: &Service) -> Element<'_, Message> {
    row![
        column![
            text(&service.name)
                .size(16)
                .style(iced::theme::Text::Color(styles::TEXT_MAIN)),
            text(format!(
                "{} min · {}",
                service.duration_minutes,
                service.price_display()
            ))
            .size(12)
            .style(iced::theme::Text::Color(styles::SUBTEXT)),
        ],
        iced::widget::horizontal_space(),
        status_badge(
            if service.active { "Active" } else { "Inactive" },
            service.active
        ),
        button("Retire")
            .padding([6, 12])
            .style(iced::theme::Button::Custom(Box::new(
                styles::DestructiveButtonStyle
            )))
            .on_press_maybe(service.active.then_some(Message::DeleteService(service.id))),
    ]
    .spacing(10)
    .align_items(Alignment::Center)
    .into()
}
