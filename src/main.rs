// SalonBook - salon appointment booking client
// Main entry point for iced application

use chrono::{Local, SecondsFormat, Utc};
use iced::widget::{button, column, container, row, text};
use iced::{Application, Command, Element, Length, Settings as IcedSettings, Subscription, Theme};
use log::{error, info};

use salonbook::api::ApiClient;
use salonbook::command_handlers::CommandHandlers;
use salonbook::config::AppConfig;
use salonbook::messages::Message;
use salonbook::models::{
    Appointment, Client, CreateAppointmentRequest, CreateClientRequest, CreateServiceRequest,
    Service,
};
use salonbook::picker::{DateTimePicker, PickerEvent, PickerParams};
use salonbook::ui::{self, styles};
use salonbook::ui_state::{AppointmentForm, UiState, View};
use salonbook::utils;

// Helper function to convert technical errors to user-friendly messages
fn user_friendly_error(error: &str) -> String {
    if error.contains("Session expired") {
        "Your session expired. Please sign in again.".to_string()
    } else if error.contains("Permission denied") {
        "You don't have permission for that.".to_string()
    } else if error.contains("Network request failed") {
        "Network error. Please check your connection and try again.".to_string()
    } else if error.contains("timeout") {
        "Request timed out. Please try again in a moment.".to_string()
    } else if error.contains("already booked") || error.contains("409") {
        "That time slot was just taken. Pick another one.".to_string()
    } else {
        error
            .replace("Invalid input: ", "")
            .replace("API error", "Server error")
            .trim()
            .to_string()
    }
}

const REFRESH_INTERVAL_SECS: u64 = 60;

pub struct SalonBookApp {
    config: AppConfig,

    // Command handlers for async operations
    handlers: CommandHandlers,

    // UI state management
    ui_state: UiState,

    // Data
    appointments: Vec<Appointment>,
    clients: Vec<Client>,
    services: Vec<Service>,
}

impl Application for SalonBookApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = (AppConfig, ApiClient);

    fn new((config, api): Self::Flags) -> (Self, Command<Message>) {
        let app = SalonBookApp {
            config,
            handlers: CommandHandlers::new(&api),
            ui_state: UiState::new(),
            appointments: Vec::new(),
            clients: Vec::new(),
            services: Vec::new(),
        };
        // Nothing to load until someone signs in
        (app, Command::none())
    }

    fn title(&self) -> String {
        "SalonBook".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::ShowAppointments => self.switch_view(View::Appointments),
            Message::ShowClients => self.switch_view(View::Clients),
            Message::ShowServices => self.switch_view(View::Services),
            Message::ShowSettings => self.switch_view(View::Settings),

            Message::LoginEmailChanged(email) => {
                self.ui_state.login_email = email;
                Command::none()
            }
            Message::LoginPasswordChanged(password) => {
                self.ui_state.login_password = password;
                Command::none()
            }
            Message::SubmitLogin => {
                if self.ui_state.loading {
                    return Command::none();
                }
                self.ui_state.loading = true;
                self.ui_state.status = "Signing in...".to_string();
                let session = self.handlers.session.clone();
                let email = self.ui_state.login_email.clone();
                let password = self.ui_state.login_password.clone();
                Command::perform(
                    async move {
                        session
                            .login(email, password)
                            .await
                            .map_err(|e| e.to_safe_string())
                    },
                    Message::LoggedIn,
                )
            }
            Message::LoggedIn(Ok(auth)) => {
                self.ui_state.loading = false;
                self.ui_state.status = format!("Signed in as {}", auth.user.name);
                self.ui_state.login_password.clear();
                self.ui_state.user = Some(auth.user);
                self.ui_state.current_view = View::Appointments;
                self.refresh_commands()
            }
            Message::LoggedIn(Err(e)) => {
                self.ui_state.loading = false;
                self.ui_state.status = user_friendly_error(&e);
                error!("Login failed: {}", e);
                Command::none()
            }
            Message::Logout => {
                self.handlers.session.logout();
                self.ui_state.user = None;
                self.ui_state.status = "Not signed in".to_string();
                self.ui_state.current_view = View::Settings;
                self.ui_state.appointment_form = None;
                self.appointments.clear();
                self.clients.clear();
                self.services.clear();
                Command::none()
            }

            Message::Refresh => {
                if self.ui_state.user.is_none() {
                    return Command::none();
                }
                self.ui_state.loading = true;
                self.refresh_commands()
            }
            Message::RefreshTick => {
                // Background tick: silent, and never stacked on a manual one
                if self.ui_state.user.is_none() || self.ui_state.loading {
                    return Command::none();
                }
                self.refresh_commands()
            }
            Message::AppointmentsLoaded(Ok(appointments)) => {
                self.appointments = appointments;
                self.ui_state.loading = false;
                self.ui_state.last_refresh = Some(Utc::now());
                Command::none()
            }
            Message::AppointmentsLoaded(Err(e)) => self.load_failed("appointments", e),
            Message::ClientsLoaded(Ok(clients)) => {
                self.clients = clients;
                Command::none()
            }
            Message::ClientsLoaded(Err(e)) => self.load_failed("clients", e),
            Message::ServicesLoaded(Ok(services)) => {
                self.services = services;
                Command::none()
            }
            Message::ServicesLoaded(Err(e)) => self.load_failed("services", e),

            Message::NewAppointment => {
                self.ui_state.appointment_form = Some(AppointmentForm::new());
                Command::none()
            }
            Message::EditAppointment(id) => {
                if let Some(appointment) = self.appointments.iter().find(|a| a.id == id) {
                    self.ui_state.appointment_form = Some(AppointmentForm {
                        editing_id: Some(appointment.id),
                        client_id: Some(appointment.client_id),
                        service_id: Some(appointment.service_id),
                        notes: appointment.notes.clone().unwrap_or_default(),
                        scheduled_at: Some(
                            appointment
                                .scheduled_at
                                .with_timezone(&Local)
                                .to_rfc3339_opts(SecondsFormat::Secs, false),
                        ),
                        schedule_preview: None,
                        picker: None,
                    });
                }
                Command::none()
            }
            Message::AppointmentClientPicked(choice) => {
                if let Some(form) = &mut self.ui_state.appointment_form {
                    form.client_id = Some(choice.id);
                }
                Command::none()
            }
            Message::AppointmentServicePicked(choice) => {
                if let Some(form) = &mut self.ui_state.appointment_form {
                    form.service_id = Some(choice.id);
                }
                Command::none()
            }
            Message::AppointmentNotesChanged(notes) => {
                if let Some(form) = &mut self.ui_state.appointment_form {
                    form.notes = notes;
                }
                Command::none()
            }
            Message::OpenSchedulePicker => {
                let window = self.config.slot_window;
                if let Some(form) = &mut self.ui_state.appointment_form {
                    let params = PickerParams::new(window)
                        .with_min_date(Local::now().date_naive());
                    form.picker =
                        Some(DateTimePicker::open(&params, form.scheduled_at.as_deref()));
                    form.schedule_preview = None;
                }
                Command::none()
            }
            Message::Picker(picker_message) => {
                if let Some(form) = &mut self.ui_state.appointment_form {
                    let event = form
                        .picker
                        .as_mut()
                        .and_then(|picker| picker.update(picker_message));
                    match event {
                        Some(PickerEvent::Applied(timestamp)) => {
                            form.scheduled_at = Some(timestamp);
                            form.schedule_preview = None;
                            form.picker = None;
                        }
                        Some(PickerEvent::Canceled) => {
                            form.schedule_preview = None;
                            form.picker = None;
                        }
                        Some(PickerEvent::Changed(timestamp)) => {
                            form.schedule_preview = Some(timestamp);
                        }
                        None => {}
                    }
                }
                Command::none()
            }
            Message::SubmitAppointmentForm => {
                let Some(form) = &self.ui_state.appointment_form else {
                    return Command::none();
                };
                let request = CreateAppointmentRequest {
                    client_id: form.client_id.unwrap_or(0),
                    service_id: form.service_id.unwrap_or(0),
                    staff_id: self
                        .ui_state
                        .user
                        .as_ref()
                        .map(|user| user.id)
                        .filter(|_| form.editing_id.is_none()),
                    scheduled_at: form.scheduled_at.clone().unwrap_or_default(),
                    notes: if form.notes.trim().is_empty() {
                        None
                    } else {
                        Some(form.notes.trim().to_string())
                    },
                };
                if let Err(e) = request.validate() {
                    self.ui_state.status = e.to_safe_string();
                    return Command::none();
                }
                self.ui_state.loading = true;
                let book = self.handlers.book.clone();
                let editing_id = form.editing_id;
                Command::perform(
                    async move {
                        book.save_appointment(editing_id, request)
                            .await
                            .map_err(|e| e.to_safe_string())
                    },
                    Message::AppointmentSaved,
                )
            }
            Message::DismissAppointmentForm => {
                self.ui_state.appointment_form = None;
                Command::none()
            }
            Message::AppointmentSaved(Ok(appointment)) => {
                info!(
                    "Appointment saved for {} at {}",
                    appointment.client_name, appointment.scheduled_at
                );
                self.ui_state.appointment_form = None;
                self.ui_state.status = "Appointment saved".to_string();
                self.refresh_commands()
            }
            Message::AppointmentSaved(Err(e)) => {
                self.ui_state.loading = false;
                self.ui_state.status = user_friendly_error(&e);
                error!("Failed to save appointment: {}", e);
                Command::none()
            }
            Message::CancelAppointment(id) => {
                let book = self.handlers.book.clone();
                Command::perform(
                    async move {
                        book.cancel_appointment(id)
                            .await
                            .map_err(|e| e.to_safe_string())
                    },
                    Message::AppointmentCanceled,
                )
            }
            Message::AppointmentCanceled(Ok(())) => {
                self.ui_state.status = "Appointment canceled".to_string();
                self.refresh_commands()
            }
            Message::AppointmentCanceled(Err(e)) => {
                self.ui_state.status = user_friendly_error(&e);
                error!("Failed to cancel appointment: {}", e);
                Command::none()
            }

            Message::ClientNameChanged(name) => {
                self.ui_state.client_name = name;
                Command::none()
            }
            Message::ClientEmailChanged(email) => {
                self.ui_state.client_email = email;
                Command::none()
            }
            Message::ClientPhoneChanged(phone) => {
                self.ui_state.client_phone = phone;
                Command::none()
            }
            Message::AddClient => {
                let request = CreateClientRequest::new(
                    &self.ui_state.client_name,
                    &self.ui_state.client_email,
                    &self.ui_state.client_phone,
                );
                if let Err(e) = request.validate() {
                    self.ui_state.status = e.to_safe_string();
                    return Command::none();
                }
                let roster = self.handlers.roster.clone();
                Command::perform(
                    async move { roster.add_client(request).await.map_err(|e| e.to_safe_string()) },
                    Message::ClientAdded,
                )
            }
            Message::ClientAdded(Ok(client)) => {
                self.ui_state.clear_client_form();
                self.ui_state.status = format!("Added client {}", client.name);
                self.reload_clients()
            }
            Message::ClientAdded(Err(e)) => {
                self.ui_state.status = user_friendly_error(&e);
                error!("Failed to add client: {}", e);
                Command::none()
            }
            Message::DeleteClient(id) => {
                let roster = self.handlers.roster.clone();
                Command::perform(
                    async move { roster.delete_client(id).await.map_err(|e| e.to_safe_string()) },
                    Message::ClientDeleted,
                )
            }
            Message::ClientDeleted(Ok(())) => self.reload_clients(),
            Message::ClientDeleted(Err(e)) => {
                self.ui_state.status = user_friendly_error(&e);
                error!("Failed to delete client: {}", e);
                Command::none()
            }

            Message::ServiceNameChanged(name) => {
                self.ui_state.service_name = name;
                Command::none()
            }
            Message::ServiceDurationChanged(duration) => {
                self.ui_state.service_duration = duration;
                Command::none()
            }
            Message::ServicePriceChanged(price) => {
                self.ui_state.service_price = price;
                Command::none()
            }
            Message::AddService => {
                let Ok(duration_minutes) = self.ui_state.service_duration.trim().parse::<u32>()
                else {
                    self.ui_state.status = "Enter the duration in minutes".to_string();
                    return Command::none();
                };
                let Some(price_cents) = utils::parse_price_cents(&self.ui_state.service_price)
                else {
                    self.ui_state.status = "Enter a valid price".to_string();
                    return Command::none();
                };
                let request = CreateServiceRequest {
                    name: utils::normalize_name(&self.ui_state.service_name),
                    duration_minutes,
                    price_cents,
                };
                if let Err(e) = request.validate() {
                    self.ui_state.status = e.to_safe_string();
                    return Command::none();
                }
                let roster = self.handlers.roster.clone();
                Command::perform(
                    async move { roster.add_service(request).await.map_err(|e| e.to_safe_string()) },
                    Message::ServiceAdded,
                )
            }
            Message::ServiceAdded(Ok(service)) => {
                self.ui_state.clear_service_form();
                self.ui_state.status = format!("Added service {}", service.name);
                self.reload_services()
            }
            Message::ServiceAdded(Err(e)) => {
                self.ui_state.status = user_friendly_error(&e);
                error!("Failed to add service: {}", e);
                Command::none()
            }
            Message::DeleteService(id) => {
                let roster = self.handlers.roster.clone();
                Command::perform(
                    async move { roster.delete_service(id).await.map_err(|e| e.to_safe_string()) },
                    Message::ServiceDeleted,
                )
            }
            Message::ServiceDeleted(Ok(())) => self.reload_services(),
            Message::ServiceDeleted(Err(e)) => {
                self.ui_state.status = user_friendly_error(&e);
                error!("Failed to retire service: {}", e);
                Command::none()
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.ui_state.user.is_some() {
            iced::time::every(std::time::Duration::from_secs(REFRESH_INTERVAL_SECS))
                .map(|_| Message::RefreshTick)
        } else {
            Subscription::none()
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let content = container(match self.ui_state.current_view {
            View::Appointments => ui::appointments::view(
                &self.ui_state,
                &self.appointments,
                &self.clients,
                &self.services,
            ),
            View::Clients => ui::clients::view(&self.ui_state, &self.clients),
            View::Services => ui::services::view(&self.ui_state, &self.services),
            View::Settings => ui::settings::view(&self.ui_state, &self.config.api_base_url),
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(40);

        container(row![self.sidebar(), content])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(
                styles::BackgroundStyle,
            )))
            .into()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}

impl SalonBookApp {
    /// Navigation gate. Signed-out users only see Settings; signed-in users
    /// see what their role allows.
    fn switch_view(&mut self, view: View) -> Command<Message> {
        let allowed = match &self.ui_state.user {
            Some(user) => user.role.can_access(view),
            None => view == View::Settings,
        };
        if allowed {
            self.ui_state.current_view = view;
        }
        Command::none()
    }

    fn nav_views(&self) -> &'static [View] {
        match &self.ui_state.user {
            Some(user) => user.role.accessible_views(),
            None => &[View::Settings],
        }
    }

    fn refresh_commands(&self) -> Command<Message> {
        let book = self.handlers.book.clone();
        let load_appointments = Command::perform(
            async move {
                book.load_appointments()
                    .await
                    .map_err(|e| e.to_safe_string())
            },
            Message::AppointmentsLoaded,
        );
        Command::batch(vec![
            load_appointments,
            self.reload_clients(),
            self.reload_services(),
        ])
    }

    fn reload_clients(&self) -> Command<Message> {
        let roster = self.handlers.roster.clone();
        Command::perform(
            async move { roster.load_clients().await.map_err(|e| e.to_safe_string()) },
            Message::ClientsLoaded,
        )
    }

    fn reload_services(&self) -> Command<Message> {
        let roster = self.handlers.roster.clone();
        Command::perform(
            async move { roster.load_services().await.map_err(|e| e.to_safe_string()) },
            Message::ServicesLoaded,
        )
    }

    fn load_failed(&mut self, what: &str, e: String) -> Command<Message> {
        self.ui_state.loading = false;
        self.ui_state.status = user_friendly_error(&e);
        error!("Failed to load {}: {}", what, e);
        Command::none()
    }

    fn sidebar(&self) -> Element<'_, Message> {
        let nav_button = |view: View| {
            let is_active = view == self.ui_state.current_view;
            button(
                text(view.label())
                    .size(14)
                    .horizontal_alignment(iced::alignment::Horizontal::Left),
            )
            .width(Length::Fill)
            .padding(10)
            .style(if is_active {
                iced::theme::Button::Custom(Box::new(styles::ActiveNavStyle))
            } else {
                iced::theme::Button::Custom(Box::new(styles::NavStyle))
            })
            .on_press(match view {
                View::Appointments => Message::ShowAppointments,
                View::Clients => Message::ShowClients,
                View::Services => Message::ShowServices,
                View::Settings => Message::ShowSettings,
            })
        };

        let nav = column(
            self.nav_views()
                .iter()
                .map(|view| nav_button(*view).into())
                .collect::<Vec<_>>(),
        )
        .spacing(5);

        let status_card = container(
            column![
                text("Status")
                    .size(12)
                    .style(iced::theme::Text::Color(styles::SUBTEXT)),
                text(&self.ui_state.status)
                    .size(11)
                    .style(iced::theme::Text::Color(styles::TEXT_MAIN)),
                text(match self.ui_state.last_refresh {
                    Some(at) => format!(
                        "Refreshed: {}",
                        at.with_timezone(&Local).format("%H:%M")
                    ),
                    None => "Not refreshed".to_string(),
                })
                .size(11)
                .style(iced::theme::Text::Color(styles::SUBTEXT))
            ]
            .spacing(4),
        )
        .padding(10)
        .style(iced::theme::Container::Custom(Box::new(styles::CardStyle)));

        container(
            column![
                text("SalonBook")
                    .size(24)
                    .style(iced::theme::Text::Color(styles::ACCENT)),
                nav,
                iced::widget::vertical_space(),
                status_card
            ]
            .spacing(40)
            .padding(20),
        )
        .width(200)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(
            styles::SidebarStyle,
        )))
        .into()
    }
}

#[tokio::main]
async fn main() -> iced::Result {
    if let Err(e) = utils::logging::init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    info!("Starting SalonBook");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let api = match ApiClient::new(&config) {
        Ok(api) => api,
        Err(e) => {
            error!("Failed to initialize API client: {}", e);
            eprintln!("Failed to initialize API client: {}", e);
            std::process::exit(1);
        }
    };

    SalonBookApp::run(IcedSettings {
        flags: (config, api),
        window: iced::window::Settings {
            size: iced::Size::new(1000.0, 700.0),
            resizable: true,
            ..Default::default()
        },
        id: None,
        fonts: vec![],
        default_font: Default::default(),
        default_text_size: iced::Pixels(16.0),
        antialiasing: true,
    })
}
