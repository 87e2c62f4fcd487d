//! Typical soil unit weights, shown under the input form.

use iced::widget::{column, row, text, Column, Space};
use iced::Length;

use sbc_core::soil_types::{reference_pressure_note, SoilType};

use crate::Message;

const NAME_WIDTH: f32 = 110.0;
const RANGE_WIDTH: f32 = 90.0;

pub fn view() -> Column<'static, Message> {
    let header = row![
        text("Soil Type").size(11).width(Length::Fixed(NAME_WIDTH)),
        text("Moist (kN/m³)").size(11).width(Length::Fixed(RANGE_WIDTH)),
        text("Submerged (kN/m³)").size(11),
    ];

    let rows = SoilType::ALL.iter().fold(column![header].spacing(3), |col, soil| {
        col.push(row![
            text(soil.display_name()).size(11).width(Length::Fixed(NAME_WIDTH)),
            text(soil.moist_range_label()).size(11).width(Length::Fixed(RANGE_WIDTH)),
            text(soil.submerged_range_label()).size(11),
        ])
    });

    column![
        text("Typical Soil Unit Weights").size(14),
        Space::new().height(6),
        rows,
        Space::new().height(6),
        text(reference_pressure_note()).size(10).color([0.5, 0.5, 0.5]),
    ]
}
