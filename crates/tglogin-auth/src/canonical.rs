//! Canonical data-check string construction.
//!
//! The widget protocol mandates this exact layout:
//!
//! ```text
//! name1=value1\n
//! name2=value2\n
//! ...
//! nameN=valueN
//! ```
//!
//! Entries are sorted by field name in ascending byte order, each pair is
//! joined as `name=value`, and pairs are joined with a single `\n` with no
//! trailing separator. Any deviation (different separator, URL-encoding
//! the values, trailing newline) breaks interoperability with the real
//! signer, so the layout must be reproduced byte-for-byte.

use tglogin_model::FieldMap;

/// Build the canonical data-check string from a field mapping.
///
/// The `hash` field must already have been removed by the caller; this
/// function serializes whatever it is given. Values containing `=` or
/// newline bytes pass through unescaped, matching the protocol's lack of
/// escaping.
///
/// # Examples
///
/// ```
/// use tglogin_auth::canonical::build_data_check_string;
/// use tglogin_model::FieldMap;
///
/// let mut fields = FieldMap::new();
/// fields.set("id", "123456");
/// fields.set("auth_date", "1410696795");
/// assert_eq!(
///     build_data_check_string(&fields),
///     "auth_date=1410696795\nid=123456"
/// );
/// ```
#[must_use]
pub fn build_data_check_string(fields: &FieldMap) -> String {
    // Sort explicitly rather than leaning on the map's iteration order, so
    // the canonical layout never depends on the container.
    let mut entries: Vec<(&str, &str)> = fields.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

    entries
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_sort_fields_by_name_in_byte_order() {
        let mut fields = FieldMap::new();
        fields.set("username", "toby3d");
        fields.set("id", "123456");
        fields.set("auth_date", "1410696795");
        fields.set("first_name", "Maxim");

        assert_eq!(
            build_data_check_string(&fields),
            "auth_date=1410696795\nfirst_name=Maxim\nid=123456\nusername=toby3d"
        );
    }

    #[test]
    fn test_should_return_empty_string_for_empty_mapping() {
        assert_eq!(build_data_check_string(&FieldMap::new()), "");
    }

    #[test]
    fn test_should_not_append_trailing_separator() {
        let mut fields = FieldMap::new();
        fields.set("id", "1");
        assert_eq!(build_data_check_string(&fields), "id=1");
    }

    #[test]
    fn test_should_pass_equals_and_newline_bytes_through_unescaped() {
        let mut fields = FieldMap::new();
        fields.set("first_name", "a=b\nc");
        fields.set("id", "1");
        assert_eq!(build_data_check_string(&fields), "first_name=a=b\nc\nid=1");
    }

    #[test]
    fn test_should_build_known_fixture_data_check_string() {
        let mut fields = FieldMap::new();
        fields.set("id", "123456");
        fields.set("first_name", "Maxim");
        fields.set("last_name", "Lebedev");
        fields.set("username", "toby3d");
        fields.set(
            "photo_url",
            "https://t.me/i/userpic/320/ABC-DEF1234ghIkl-zyx57W2v1u123ew11.jpg",
        );
        fields.set("auth_date", "1410696795");

        let expected = "auth_date=1410696795\n\
                        first_name=Maxim\n\
                        id=123456\n\
                        last_name=Lebedev\n\
                        photo_url=https://t.me/i/userpic/320/ABC-DEF1234ghIkl-zyx57W2v1u123ew11.jpg\n\
                        username=toby3d";
        assert_eq!(build_data_check_string(&fields), expected);
    }
}
