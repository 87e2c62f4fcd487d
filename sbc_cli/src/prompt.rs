//! Line-based prompts for `--interactive`.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use sbc_core::calculations::SbcInput;

/// Ask for a value, showing `default` in brackets.
///
/// A blank line or end of input keeps the default; unparseable text asks again.
pub fn prompt_value<T, R, W>(input: &mut R, output: &mut W, label: &str, default: T) -> io::Result<T>
where
    T: FromStr + Display + Copy,
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{} [{}]: ", label, default)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(default);
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(output, "  '{}' is not a number, try again", trimmed)?,
        }
    }
}

/// Prompt for all six fields in form order, starting from `start`.
pub fn prompt_input<R: BufRead, W: Write>(input: &mut R, output: &mut W, start: SbcInput) -> io::Result<SbcInput> {
    let mut result = start;

    result.soil.moist_unit_weight_kn_m3 = prompt_value(
        input,
        output,
        "Moist Unit Weight (kN/m³)",
        start.soil.moist_unit_weight_kn_m3,
    )?;
    result.soil.submerged_unit_weight_kn_m3 = prompt_value(
        input,
        output,
        "Submerged Unit Weight (kN/m³)",
        start.soil.submerged_unit_weight_kn_m3,
    )?;
    result.observation.reference_pressure_kn_m2 = prompt_value(
        input,
        output,
        "Reference Pressure (kN/m²)",
        start.observation.reference_pressure_kn_m2,
    )?;
    result.geometry.water_table_depth_m = prompt_value(
        input,
        output,
        "Water Table Depth (m)",
        start.geometry.water_table_depth_m,
    )?;
    result.geometry.test_depth_m = prompt_value(input, output, "Test Depth (m)", start.geometry.test_depth_m)?;
    result.observation.blow_count = prompt_value(input, output, "Raw N-value", start.observation.blow_count)?;

    Ok(result)
}
