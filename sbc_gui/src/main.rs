//! # SBC GUI Application
//!
//! Desktop front end for the SPT safe bearing capacity calculator,
//! built with Iced. Results are recomputed on every edit; the toolbar
//! exports the PDF report through a native save dialog.

mod form;
mod ui;

use std::path::PathBuf;

use iced::widget::{column, container, row, rule};
use iced::{Element, Length, Task, Theme};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sbc_core::calculations::{evaluate, SbcInput, SbcResult};
use sbc_core::config::SbcConfig;
use sbc_core::pdf::write_report_pdf;
use sbc_core::report::ReportMeta;

use form::{Field, InputForm};

#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(Field, String),
    OrganizationChanged(String),
    ResetDefaults,
    ExportPdf,
    ExportPathChosen(Option<PathBuf>),
    ToggleDarkMode,
}

pub struct App {
    /// Defaults the form is reset to
    defaults: SbcInput,
    organization: String,
    form: InputForm,
    /// Last successfully evaluated input and its result
    calc_input: Option<SbcInput>,
    result: Option<SbcResult>,
    error_message: Option<String>,
    status: String,
    dark_mode: bool,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let config = match SbcConfig::load_or_default(None) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "ignoring unreadable config");
                SbcConfig::default()
            }
        };

        let mut app = App {
            defaults: config.defaults,
            organization: config.organization,
            form: InputForm::from_input(&config.defaults),
            calc_input: None,
            result: None,
            error_message: None,
            status: "Ready".to_string(),
            dark_mode: false,
        };
        app.recalculate();
        (app, Task::none())
    }

    fn title(&self) -> String {
        "SPT Safe Bearing Capacity Calculator".to_string()
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Parse, validate and evaluate the form. Keeps no stale result on failure.
    fn recalculate(&mut self) {
        match self.form.parse().and_then(|input| evaluate(&input).map(|result| (input, result))) {
            Ok((input, result)) => {
                self.calc_input = Some(input);
                self.result = Some(result);
                self.error_message = None;
            }
            Err(e) => {
                self.calc_input = None;
                self.result = None;
                self.error_message = Some(e.to_string());
            }
        }
    }

    fn report_meta(&self) -> ReportMeta {
        ReportMeta::new(self.organization.clone())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FieldChanged(field, value) => {
                self.form.set(field, value);
                self.recalculate();
            }
            Message::OrganizationChanged(value) => {
                self.organization = value;
            }
            Message::ResetDefaults => {
                self.form = InputForm::from_input(&self.defaults);
                self.recalculate();
                self.status = "Inputs reset to defaults".to_string();
            }
            Message::ExportPdf => {
                if self.result.is_none() {
                    self.status = "Nothing to export: fix the inputs first".to_string();
                    return Task::none();
                }
                let file_name = self.report_meta().file_name();
                return Task::perform(
                    async move {
                        rfd::AsyncFileDialog::new()
                            .set_title("Export SBC Report")
                            .set_file_name(file_name)
                            .add_filter("PDF", &["pdf"])
                            .save_file()
                            .await
                            .map(|handle| handle.path().to_path_buf())
                    },
                    Message::ExportPathChosen,
                );
            }
            Message::ExportPathChosen(None) => {
                self.status = "Export cancelled".to_string();
            }
            Message::ExportPathChosen(Some(path)) => {
                self.export_to(path);
            }
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
            }
        }
        Task::none()
    }

    fn export_to(&mut self, path: PathBuf) {
        let (Some(input), Some(result)) = (&self.calc_input, &self.result) else {
            self.status = "Nothing to export: fix the inputs first".to_string();
            return;
        };

        let meta = self.report_meta();
        match write_report_pdf(&path, &meta, input, result) {
            Ok(()) => {
                info!(path = %path.display(), "exported report");
                self.status = format!("Report saved to {}", path.display());
            }
            Err(e) => {
                warn!(error = %e, "report export failed");
                self.status = format!("Export failed: {}", e);
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let panels = row![
            ui::input_panel::view_input_panel(self),
            ui::results_panel::view_results_panel(self),
        ]
        .spacing(10)
        .height(Length::Fill);

        let content = column![
            ui::toolbar::view_header(),
            ui::toolbar::view_toolbar(self.dark_mode, self.result.is_some()),
            rule::horizontal(1),
            panels,
            rule::horizontal(1),
            ui::status_bar::view_status_bar(&self.organization, &self.status),
        ]
        .spacing(6);

        container(content).padding(10).into()
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window_size((1000.0, 720.0))
        .run()
}
