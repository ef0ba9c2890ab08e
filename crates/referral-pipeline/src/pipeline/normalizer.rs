/// Lower-cases and trims an ATS label for comparison. A leading byte-order mark
/// from spreadsheet exports counts as whitespace.
pub(crate) fn normalize_label(value: &str) -> String {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_lowercases_without_collapsing_inner_spaces() {
        assert_eq!(normalize_label("  Contact Attempt 1\t"), "contact attempt 1");
        assert_eq!(normalize_label("\u{feff}xRAF"), "xraf");
        assert_eq!(normalize_label("Contact  Attempt 1"), "contact  attempt 1");
        assert_eq!(normalize_label("   "), "");
    }
}
