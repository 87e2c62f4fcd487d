//! Toolbar component
//!
//! Contains Export PDF, Reset and the light/dark toggle.

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use sbc_core::report::REPORT_TITLE;

use crate::Message;

/// Render the application header
pub fn view_header() -> Element<'static, Message> {
    row![
        text("SBC Calculator").size(28),
        Space::new().width(Length::Fill),
        text(REPORT_TITLE).size(14),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Render the toolbar. Export is disabled while there is no valid result.
pub fn view_toolbar(dark_mode: bool, can_export: bool) -> Element<'static, Message> {
    let export = button(text("Export PDF").size(11))
        .on_press_maybe(can_export.then_some(Message::ExportPdf))
        .padding(Padding::from([4, 8]))
        .style(button::primary);

    let reset = button(text("Reset").size(11))
        .on_press(Message::ResetDefaults)
        .padding(Padding::from([4, 8]))
        .style(button::secondary);

    let theme_label = if dark_mode { "Light Mode" } else { "Dark Mode" };
    let theme_toggle = button(text(theme_label).size(11))
        .on_press(Message::ToggleDarkMode)
        .padding(Padding::from([4, 8]))
        .style(button::secondary);

    row![
        row![export, reset].spacing(4),
        Space::new().width(Length::Fill),
        theme_toggle,
    ]
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}
