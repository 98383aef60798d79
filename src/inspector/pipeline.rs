use std::path::Path;

use tracing::{debug, dispatcher, info, warn, Dispatch};

use crate::analysis::{analyze, RangeRegistry};
use crate::error::Result;
use crate::font::{self, FontSource, FontTables, ParsedFont};
use crate::i18n::{Localization, DEFAULT_LANGUAGE};
use crate::models::Inspection;
use crate::report::{assemble, ReportInput};

/// Runs inspections against a shared range catalog and localization.
///
/// Log events are sent to the injected [`Dispatch`]; by default they are
/// discarded.
pub struct Inspector<'r> {
    registry: &'r RangeRegistry,
    localization: &'r Localization,
    language: String,
    dispatch: Dispatch,
}

impl<'r> Inspector<'r> {
    pub fn new(registry: &'r RangeRegistry, localization: &'r Localization, language: impl Into<String>) -> Self {
        Self {
            registry,
            localization,
            language: language.into(),
            dispatch: Dispatch::none(),
        }
    }

    /// Send this inspector's log events to `dispatch`
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = dispatch;
        self
    }

    pub(crate) fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Analyze already-parsed tables and build the report
    pub fn inspect_tables(&self, label: &str, tables: &impl FontTables) -> Inspection {
        dispatcher::with_default(&self.dispatch, || {
            let codepoints = tables.codepoints();
            let coverage = analyze(&codepoints, self.registry);
            let metadata = font::extract(tables);
            let axes = font::axes(tables);
            debug!(
                "{}: {} codepoints, {} axes, {} ranges",
                label,
                codepoints.len(),
                axes.len(),
                coverage.len()
            );

            if !self.localization.has_language(&self.language) {
                warn!(
                    "No language pack for '{}', using '{}'",
                    self.language, DEFAULT_LANGUAGE
                );
            }

            let report = assemble(
                &ReportInput {
                    font: label,
                    char_count: codepoints.len(),
                    axes: &axes,
                    coverage: &coverage,
                    metadata: &metadata,
                },
                self.localization,
                &self.language,
            );

            Inspection {
                font: label.to_string(),
                char_count: codepoints.len(),
                axes,
                coverage,
                metadata,
                report,
            }
        })
    }

    /// Parse face `face_index` of `data` and inspect it
    pub fn inspect_bytes(&self, label: &str, data: &[u8], face_index: u32) -> Result<Inspection> {
        let font = dispatcher::with_default(&self.dispatch, || {
            ParsedFont::parse(data, face_index).map_err(|e| {
                warn!("Failed to load font {}: {}", label, e);
                e
            })
        })?;
        Ok(self.inspect_tables(label, &font))
    }

    /// Load a font from disk or the system and inspect it
    pub fn inspect_source(&self, source: &FontSource, face_index: u32) -> Result<Inspection> {
        let loaded = dispatcher::with_default(&self.dispatch, || {
            info!("Inspecting {}", source);
            source.load(face_index)
        })?;
        self.inspect_bytes(&loaded.label, &loaded.data, loaded.face_index)
    }

    pub fn inspect_path(&self, path: &Path, face_index: u32) -> Result<Inspection> {
        self.inspect_source(&FontSource::File(path.to_path_buf()), face_index)
    }
}
