use crate::i18n::{render, Localization, MessageKey};
use crate::models::{CoverageEntry, MetadataRecord, Report};

/// Decimal places used for coverage percentages
pub const PERCENT_PRECISION: usize = 2;

/// Analysis results to be rendered into a report
#[derive(Debug, Clone, Copy)]
pub struct ReportInput<'a> {
    /// Font label substituted for `{font}`
    pub font: &'a str,
    pub char_count: usize,
    pub axes: &'a [String],
    /// Coverage entries in registry order
    pub coverage: &'a [CoverageEntry],
    pub metadata: &'a MetadataRecord,
}

/// Format a percentage with [`PERCENT_PRECISION`] decimals
pub fn format_percent(percent: f64) -> String {
    format!("{:.*}", PERCENT_PRECISION, percent)
}

/// Render the report lines for `input` in `language`.
///
/// Fallbacks, applied in the resolved pack only:
/// - a missing template renders as its key, e.g. `no_axes`
/// - a missing range display name renders as the range id
/// - a missing metadata label renders as the metadata key
pub fn assemble(input: &ReportInput<'_>, localization: &Localization, language: &str) -> Report {
    let pack = localization.pack(language);
    let message = |key: MessageKey| pack.message(key).unwrap_or(key.as_str());

    let mut report = Report::default();
    report.push(message(MessageKey::ReportTitle));

    let count = input.char_count.to_string();
    report.push(render(
        message(MessageKey::CharCount),
        &[("font", input.font), ("count", count.as_str())],
    ));

    if input.axes.is_empty() {
        report.push(message(MessageKey::NoAxes));
    } else {
        let axes = input.axes.join(", ");
        report.push(render(message(MessageKey::Axes), &[("axes", axes.as_str())]));
    }

    report.push(message(MessageKey::Section));
    for entry in input.coverage {
        let name = pack.section_name(&entry.range_id).unwrap_or(entry.range_id.as_str());
        let count = entry.count.to_string();
        let total = entry.total.to_string();
        let percent = format_percent(entry.percent);
        report.push(render(
            message(MessageKey::SectionItem),
            &[
                ("name", name),
                ("count", count.as_str()),
                ("total", total.as_str()),
                ("percent", percent.as_str()),
            ],
        ));
    }

    report.push("");
    report.push(pack.metadata_label("title").unwrap_or("title"));
    for (key, value) in input.metadata.iter() {
        let label = pack.metadata_label(key.as_str()).unwrap_or(key.as_str());
        report.push(format!("    - {}: {}", label, value));
    }

    report
}
