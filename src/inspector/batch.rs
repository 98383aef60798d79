use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{dispatcher, info};

use crate::error::Result;
use crate::font::FontSource;
use crate::models::Inspection;
use super::Inspector;

/// Read font paths from a list file, one per line; blank lines and `#` comments are skipped
pub fn read_font_list(list_file: &Path) -> Result<Vec<PathBuf>> {
    let content = fs::read_to_string(list_file)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(PathBuf::from)
        .collect())
}

impl Inspector<'_> {
    /// Inspect every source in parallel; results keep the input order
    pub fn inspect_many(&self, sources: &[FontSource], face_index: u32) -> Vec<Result<Inspection>> {
        dispatcher::with_default(self.dispatch(), || {
            info!("Inspecting {} fonts", sources.len());
        });

        sources
            .par_iter()
            .map(|source| self.inspect_source(source, face_index))
            .collect()
    }
}
