//! Input Panel (Left)
//!
//! Organization name, the soil parameters and the site/test data, followed
//! by the soil reference table.

use iced::widget::{column, container, row, scrollable, text, text_input, Column, Space};
use iced::{Alignment, Element, Length};

use crate::form::Field;
use crate::{App, Message};
use super::soil_table;

/// Render the input panel
pub fn view_input_panel(app: &App) -> Element<'_, Message> {
    let mut panel: Column<'_, Message> = column![
        text("Report").size(14),
        Space::new().height(4),
        labeled_input("Organization:", &app.organization, Message::OrganizationChanged),
    ]
    .spacing(6);

    let mut section = "";
    for field in Field::ALL {
        if field.section() != section {
            section = field.section();
            panel = panel.push(Space::new().height(10)).push(text(section).size(14));
        }
        panel = panel.push(labeled_input(
            field.label(),
            app.form.value(field),
            move |value| Message::FieldChanged(field, value),
        ));
    }

    let panel = panel
        .push(Space::new().height(15))
        .push(soil_table::view());

    container(scrollable(panel.padding(8)))
        .width(Length::FillPortion(45))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// Helper to create a labeled text input
fn labeled_input<'a>(
    label: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(190.0)),
        text_input("", value)
            .on_input(on_change)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}
