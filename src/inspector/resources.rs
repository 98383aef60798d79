use std::path::Path;

use tracing::{debug, error};

use crate::analysis::RangeRegistry;
use crate::error::Result;
use crate::i18n::Localization;
use crate::models::Config;

/// Range catalog and localization shared by every inspection in a run
#[derive(Debug, Clone, Default)]
pub struct Resources {
    pub registry: RangeRegistry,
    pub localization: Localization,
}

impl Resources {
    /// Load the configured resources, or the built-in ones when no path is set.
    ///
    /// A resource that fails to load is logged and replaced with an empty
    /// one, so reports fall back to raw range ids and literal keys.
    pub fn load(config: &Config) -> Self {
        let registry = load_or_empty("unicode ranges", config.ranges_path.as_deref(), RangeRegistry::from_path, RangeRegistry::builtin);
        let localization = load_or_empty("language pack", config.lang_pack_path.as_deref(), Localization::from_path, Localization::builtin);

        debug!(
            "Resources ready: {} ranges, languages {:?}",
            registry.len(),
            localization.languages()
        );
        Self { registry, localization }
    }
}

fn load_or_empty<T: Default>(
    what: &str,
    path: Option<&Path>,
    from_path: fn(&Path) -> Result<T>,
    builtin: fn() -> Result<T>,
) -> T {
    let loaded = match path {
        Some(path) => from_path(path),
        None => builtin(),
    };

    loaded.unwrap_or_else(|e| {
        error!("Failed to load {}: {}", what, e);
        T::default()
    })
}
