use tracing::trace;

use crate::models::{MetadataKey, MetadataRecord};
use super::{FontTables, NameSelector};

/// Extract the fixed metadata fields from the `name` table.
///
/// Records are looked up with the Windows / Unicode BMP / US English
/// selector only. A field without a matching record is left empty, so
/// the result always holds every [`MetadataKey`].
pub fn extract(tables: &impl FontTables) -> MetadataRecord {
    let mut record = MetadataRecord::default();

    for key in MetadataKey::ALL {
        match tables.name(key.name_id(), NameSelector::WINDOWS_US_ENGLISH) {
            Some(value) => record.set(key, value),
            None => trace!("No name record for {} (name ID {})", key.as_str(), key.name_id()),
        }
    }

    record
}
