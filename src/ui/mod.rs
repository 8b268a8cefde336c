// src/ui/mod.rs

use std::fmt;

use iced::widget::{container, text};
use iced::{Background, Border, Color, Element};

use crate::messages::Message;
use crate::models::{Client, Service};

pub mod appointments;
pub mod clients;
pub mod services;
pub mod settings;
pub mod styles;

/// Pick-list entry for a client. Equality is by id so a reloaded roster
/// still matches the form's current selection.
#[derive(Debug, Clone)]
pub struct ClientChoice {
    pub id: i64,
    pub name: String,
}

impl From<&Client> for ClientChoice {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id,
            name: client.name.clone(),
        }
    }
}

impl PartialEq for ClientChoice {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ClientChoice {}

impl fmt::Display for ClientChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Pick-list entry for a service, labelled with duration and price.
#[derive(Debug, Clone)]
pub struct ServiceChoice {
    pub id: i64,
    pub label: String,
}

impl From<&Service> for ServiceChoice {
    fn from(service: &Service) -> Self {
        Self {
            id: service.id,
            label: format!(
                "{} ({} min, {})",
                service.name,
                service.duration_minutes,
                service.price_display()
            ),
        }
    }
}

impl PartialEq for ServiceChoice {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ServiceChoice {}

impl fmt::Display for ServiceChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

// --- REUSABLE PIECES ---

pub fn section_header(label: &str) -> Element<'_, Message> {
    text(label)
        .size(20)
        .style(iced::theme::Text::Color(styles::ACCENT))
        .into()
}

pub fn field_label(label: &str) -> Element<'_, Message> {
    text(label)
        .size(12)
        .style(iced::theme::Text::Color(styles::SUBTEXT))
        .into()
}

pub fn status_badge(label: &str, is_positive: bool) -> Element<'_, Message> {
    let (bg, text_color) = if is_positive {
        (Color::from_rgba(0.69, 0.42, 0.48, 0.18), styles::ACCENT)
    } else {
        (Color::from_rgba(0.5, 0.5, 0.5, 0.1), styles::SUBTEXT)
    };

    container(text(label).size(10).style(iced::theme::Text::Color(text_color)))
        .padding([4, 8])
        .style(iced::theme::Container::Custom(Box::new(BadgeStyle { bg })))
        .into()
}

struct BadgeStyle {
    bg: Color,
}

impl iced::widget::container::StyleSheet for BadgeStyle {
    type Style = iced::Theme;
    fn appearance(&self, _style: &Self::Style) -> iced::widget::container::Appearance {
        iced::widget::container::Appearance {
            background: Some(Background::Color(self.bg)),
            border: Border {
                radius: 10.0.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_choice_equality_is_by_id() {
        let a = ClientChoice {
            id: 3,
            name: "Joana".to_string(),
        };
        let b = ClientChoice {
            id: 3,
            name: "Joana Prado".to_string(),
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_service_choice_label() {
        let service = Service {
            id: 1,
            salon_id: 1,
            name: "Haircut".to_string(),
            duration_minutes: 45,
            price_cents: 3500,
            active: true,
        };
        let choice = ServiceChoice::from(&service);
        assert_eq!(choice.label, "Haircut (45 min, $35.00)");
    }

    #[test]
    fn test_client_choice_display() {
        let client = Client {
            id: 7,
            salon_id: 1,
            name: "Joana Prado".to_string(),
            email: None,
            phone: None,
            notes: None,
            created_at: Utc::now(),
        };
        assert_eq!(ClientChoice::from(&client).to_string(), "Joana Prado");
    }
}
