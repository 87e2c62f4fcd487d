//! Status Bar (Bottom)
//!
//! Displays the report organization and the latest status message.

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(organization: &'a str, status: &'a str) -> Element<'a, Message> {
    let org_label = if organization.trim().is_empty() {
        "No organization set".to_string()
    } else {
        organization.to_string()
    };

    row![
        text(org_label).size(10),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
