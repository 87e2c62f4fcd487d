//! Results Panel (Right Side)
//!
//! Shows the error text when the inputs are rejected, otherwise the
//! summary, the highlighted SBC and the calculation details.

use iced::widget::{column, container, scrollable, text, Column, Space};
use iced::{Element, Length};

use sbc_core::calculations::{SbcInput, SbcResult};
use sbc_core::report::DISCLAIMER;
use sbc_core::summary::{detail_lines, dilatancy_note, summary_lines};

use crate::{App, Message};

/// Render the results panel based on the calculation state
pub fn view_results_panel(app: &App) -> Element<'_, Message> {
    let content: Column<'_, Message> = match (&app.error_message, &app.calc_input, &app.result) {
        (Some(error), _, _) => column![
            text("Error").size(14),
            Space::new().height(8),
            text(error).size(12).color([0.8, 0.2, 0.2]),
        ],
        (None, Some(input), Some(result)) => view_calculation_results(input, result),
        _ => column![text("Enter soil and test data to see results").size(12).color([0.5, 0.5, 0.5])],
    };

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(55))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn view_calculation_results<'a>(input: &'a SbcInput, result: &'a SbcResult) -> Column<'a, Message> {
    let summary = summary_lines(result)
        .into_iter()
        .fold(Column::new().spacing(2), |col, line| col.push(text(line.to_text()).size(11)));

    let details = detail_lines(input, result)
        .into_iter()
        .fold(Column::new().spacing(2), |col, line| col.push(text(line).size(11)));

    let dilatancy_color = if result.dilatancy_applied { [0.9, 0.5, 0.0] } else { [0.5, 0.5, 0.5] };
    let dilatancy = text(dilatancy_note(result)).size(11).color(dilatancy_color);

    let sbc_box = container(
        text(format!("Safe Bearing Capacity: {:.2} kN/m²", result.sbc_kn_m2)).size(18),
    )
    .padding(12)
    .style(container::rounded_box);

    column![
        text("Results").size(14),
        Space::new().height(8),
        summary,
        Space::new().height(12),
        sbc_box,
        Space::new().height(12),
        text("Calculation Details").size(12),
        details,
        dilatancy,
        Space::new().height(15),
        text(DISCLAIMER).size(10).color([0.5, 0.5, 0.5]),
    ]
}
