//! # PDF Generation Module
//!
//! Generates the downloadable bearing capacity report using Typst.
//!
//! ## Architecture
//!
//! - The Typst template is embedded as a string constant
//! - Data is injected via string replacement before compilation
//! - Fonts come from `typst-assets` and are loaded once per process
//! - Output is raw PDF bytes (`Vec<u8>`)
//!
//! ## Example
//!
//! ```rust,no_run
//! use sbc_core::calculations::{evaluate, SbcInput};
//! use sbc_core::pdf::render_report_pdf;
//! use sbc_core::report::ReportMeta;
//!
//! let input = SbcInput::default();
//! let result = evaluate(&input).unwrap();
//! let meta = ReportMeta::new("Acme Geotechnical");
//!
//! let pdf_bytes = render_report_pdf(&meta, &input, &result).unwrap();
//! std::fs::write(meta.file_name(), pdf_bytes).unwrap();
//! ```

use std::fs;
use std::path::Path;

use chrono::{Datelike, Local};
use once_cell::sync::Lazy;
use tracing::{debug, info};
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};
use typst_pdf::PdfOptions;

use crate::calculations::{SbcInput, SbcResult};
use crate::errors::{CalcError, CalcResult};
use crate::report::{ReportMeta, DISCLAIMER, REPORT_TITLE};

// ============================================================================
// Typst World Implementation
// ============================================================================

/// Bundled fonts, parsed once and shared by every report.
static FONTS: Lazy<Vec<Font>> = Lazy::new(|| {
    let fonts: Vec<Font> = typst_assets::fonts()
        .flat_map(|font_bytes| Font::iter(Bytes::new(font_bytes.to_vec())))
        .collect();
    debug!(count = fonts.len(), "loaded report fonts");
    fonts
});

/// A minimal Typst world for compiling one in-memory document.
struct PdfWorld {
    main: Source,
    book: LazyHash<FontBook>,
    library: LazyHash<Library>,
}

impl PdfWorld {
    fn new(source: String) -> Self {
        PdfWorld {
            main: Source::detached(source),
            book: LazyHash::new(FontBook::from_fonts(FONTS.iter())),
            library: LazyHash::new(Library::default()),
        }
    }
}

impl World for PdfWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &self.book
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        FONTS.get(index).cloned()
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        let now = Local::now();
        Datetime::from_ymd(now.year(), now.month().try_into().ok()?, now.day().try_into().ok()?)
    }
}

// ============================================================================
// PDF Template
// ============================================================================

/// Typst template for the bearing capacity report
const REPORT_TEMPLATE: &str = r##"
#set page(
  paper: "a4",
  margin: (top: 2.5cm, bottom: 2.5cm, left: 2.2cm, right: 2.2cm),
  footer: context [
    #line(length: 100%, stroke: 0.5pt + gray)
    #v(4pt)
    #grid(
      columns: (1fr, 1fr),
      align(left)[#text(size: 9pt)[{{ORGANIZATION}}]],
      align(right)[#text(size: 9pt)[Page #counter(page).display()]],
    )
  ]
)

#set text(font: "Libertinus Serif", size: 12pt)

#align(center)[
  #text(size: 16pt, weight: "bold")[{{ORGANIZATION}}]
  #v(2pt)
  #text(size: 12pt)[{{TITLE}}]
]

#v(16pt)

Date: {{DATE}}

#v(8pt)

== Input Parameters

#table(
  columns: (1fr, auto, auto),
  inset: 7pt,
  stroke: 0.5pt,
  align: (left, right, left),
  table.header([*Parameter*], [*Value*], [*Unit*]),
  [Moist Unit Weight], [{{MOIST}}], [kN/m#super[3]],
  [Submerged Unit Weight], [{{SUBMERGED}}], [kN/m#super[3]],
  [Reference Pressure], [{{REF_PRESSURE}}], [kN/m#super[2]],
  [Water Table Depth], [{{WATER_TABLE}}], [m],
  [Test Depth], [{{TEST_DEPTH}}], [m],
  [Raw N-value], [{{BLOWS}}], [blows / 30 cm],
)

#v(12pt)

== Results

#table(
  columns: (1fr, auto, auto),
  inset: 7pt,
  stroke: 0.5pt,
  align: (left, right, left),
  table.header([*Result*], [*Value*], [*Unit*]),
  [Effective Stress], [{{EFFECTIVE_STRESS}}], [kN/m#super[2]],
  [Correction Factor], [{{CORRECTION_FACTOR}}], [],
  [Overburden Corrected N-value], [{{N1}}], [],
  [Corrected N-value], [{{N2}}], [],
  [Safe Bearing Capacity (SBC)], [{{SBC}}], [kN/m#super[2]],
)

#v(8pt)

#text(size: 10pt)[Dilatancy correction: {{DILATANCY}}]

#v(12pt)

#align(center)[
  #block(width: auto, fill: rgb("#e8f0fe"), inset: 14pt, radius: 4pt)[
    #text(size: 15pt, weight: "bold")[Safe Bearing Capacity: {{SBC}} kN/m#super[2]]
  ]
]

{{APPENDIX}}

#v(16pt)
#text(size: 10pt, style: "italic")[{{DISCLAIMER}}]
"##;

// ============================================================================
// PDF Rendering
// ============================================================================

/// Build the Typst source for a report without compiling it.
pub fn report_source(meta: &ReportMeta, input: &SbcInput, result: &SbcResult) -> String {
    let dilatancy = if result.dilatancy_applied {
        "applied (test point below water table, N#sub[1] > 15)"
    } else {
        "not applied"
    };

    REPORT_TEMPLATE
        .replace("{{ORGANIZATION}}", &escape_typst(&meta.organization))
        .replace("{{TITLE}}", REPORT_TITLE)
        .replace("{{DATE}}", &meta.timestamp_label())
        .replace("{{MOIST}}", &input.soil.moist_unit_weight_kn_m3.to_string())
        .replace("{{SUBMERGED}}", &input.soil.submerged_unit_weight_kn_m3.to_string())
        .replace("{{REF_PRESSURE}}", &input.observation.reference_pressure_kn_m2.to_string())
        .replace("{{WATER_TABLE}}", &input.geometry.water_table_depth_m.to_string())
        .replace("{{TEST_DEPTH}}", &input.geometry.test_depth_m.to_string())
        .replace("{{BLOWS}}", &input.observation.blow_count.to_string())
        .replace("{{EFFECTIVE_STRESS}}", &format!("{:.2}", result.effective_stress_kn_m2))
        .replace("{{CORRECTION_FACTOR}}", &format!("{:.2}", result.correction_factor))
        .replace("{{N1}}", &format!("{:.2}", result.corrected_n1))
        .replace("{{N2}}", &format!("{:.2}", result.corrected_n2))
        .replace("{{SBC}}", &format!("{:.2}", result.sbc_kn_m2))
        .replace("{{DILATANCY}}", dilatancy)
        .replace("{{APPENDIX}}", &result.equations.generate_appendix_typst())
        .replace("{{DISCLAIMER}}", DISCLAIMER)
}

/// Render a bearing capacity report to PDF.
///
/// # Arguments
///
/// * `meta` - Organization and generation timestamp
/// * `input` - The parameters the result was computed from
/// * `result` - The calculation results
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - PDF file as bytes
/// * `Err(CalcError::Report)` - If Typst compilation or PDF export fails
pub fn render_report_pdf(meta: &ReportMeta, input: &SbcInput, result: &SbcResult) -> CalcResult<Vec<u8>> {
    let world = PdfWorld::new(report_source(meta, input, result));

    let warned = typst::compile(&world);
    let document = warned.output.map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::report("typst compilation", error_msgs.join("; "))
    })?;

    let pdf_bytes = typst_pdf::pdf(&document, &PdfOptions::default()).map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::report("pdf export", error_msgs.join("; "))
    })?;

    info!(organization = %meta.organization, bytes = pdf_bytes.len(), "rendered report");
    Ok(pdf_bytes)
}

/// Render the report and write it to `path`.
pub fn write_report_pdf(path: &Path, meta: &ReportMeta, input: &SbcInput, result: &SbcResult) -> CalcResult<()> {
    let bytes = render_report_pdf(meta, input, result)?;
    fs::write(path, bytes).map_err(|e| {
        CalcError::file_error("write report", path.display().to_string(), e.to_string())
    })
}

/// Backslash-escape characters that start Typst markup in organization names
fn escape_typst(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '*' | '_' | '#' | '$' | '@' | '<' | '>' | '[' | ']' | '/' | '\\' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::calculate;

    fn sample() -> (ReportMeta, SbcInput, SbcResult) {
        let input = SbcInput::default();
        let result = calculate(&input).unwrap();
        (ReportMeta::new("NCC Co & Lab Pvt Ltd"), input, result)
    }

    #[test]
    fn test_source_echoes_inputs_and_results() {
        let (meta, input, result) = sample();
        let source = report_source(&meta, &input, &result);

        assert!(source.contains("NCC Co & Lab Pvt Ltd"));
        assert!(source.contains(REPORT_TITLE));
        assert!(source.contains("[Raw N-value], [25]"));
        assert!(source.contains("[Effective Stress], [44.00]"));
        assert!(source.contains("[263.44]"));
        assert!(source.contains(DISCLAIMER));
        assert!(source.contains("Dilatancy Correction"));
        assert!(!source.contains("{{"), "unreplaced placeholder");
    }

    #[test]
    fn test_escape_typst() {
        assert_eq!(escape_typst("A_B #1"), "A\\_B \\#1");
        assert_eq!(escape_typst("Soil // Rock"), "Soil \\/\\/ Rock");
    }

    #[test]
    fn test_pdf_with_comment_like_organization() {
        let input = SbcInput::default();
        let result = calculate(&input).unwrap();
        for org in ["Soil // Rock Lab", "Geo /* Lab", "[Field] #1 Lab"] {
            let pdf = render_report_pdf(&ReportMeta::new(org), &input, &result);
            assert!(pdf.is_ok(), "report for {org:?} failed: {:?}", pdf.err());
        }
    }

    #[test]
    fn test_pdf_generation() {
        let (meta, input, result) = sample();
        let pdf = render_report_pdf(&meta, &input, &result);

        assert!(pdf.is_ok(), "PDF generation failed: {:?}", pdf.err());
        let pdf_bytes = pdf.unwrap();
        assert!(pdf_bytes.starts_with(b"%PDF"), "Output is not a valid PDF");
        assert!(pdf_bytes.len() > 1000, "PDF seems too small");
    }

    #[test]
    fn test_write_report_pdf() {
        let (meta, input, result) = sample();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(meta.file_name());

        write_report_pdf(&path, &meta, &input, &result).unwrap();
        assert!(path.exists());
    }
}
