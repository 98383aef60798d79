use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// `{name}` or `{name:fmt}`; a format specifier is accepted and ignored
    static ref PLACEHOLDER: Regex = Regex::new(r"\{([a-z_]+)(?::[^{}]*)?\}").unwrap();
}

/// Substitute named placeholders in `template`.
///
/// Placeholders without a matching parameter are left untouched.
pub fn render(template: &str, params: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            params
                .iter()
                .find(|(name, _)| *name == &caps[1])
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
