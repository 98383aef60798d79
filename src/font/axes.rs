use super::FontTables;

/// Variation axis tags declared by the font, in declaration order.
///
/// A font without an `fvar` table, or with one that declares no axes,
/// yields an empty list.
pub fn axes(tables: &impl FontTables) -> Vec<String> {
    tables.axis_tags()
}
