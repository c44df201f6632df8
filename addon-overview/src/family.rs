//! Family classification of addon names.
//!
//! GRASS GIS addons are grouped into families by name prefix: `r.example`
//! belongs to the raster family `r`, `v_example` to the vector family `v`.

/// Mapping from family key to the template section that renders it.
///
/// Only these families appear in the rendered overview; addons classified
/// into any other family are dropped at render time.
pub const FAMILY_SECTIONS: &[(&str, &str)] = &[
    ("d", "display_addons"),
    ("db", "db_addons"),
    ("g", "general_addons"),
    ("i", "imagery_addons"),
    ("m", "misc_addons"),
    ("ps", "postscript_addons"),
    ("r", "raster_addons"),
    ("r3", "drast_addons"),
    ("t", "temporal_addons"),
    ("v", "vector_addons"),
];

/// Derives the family key for an addon name.
///
/// Splits on the first `.` when present, otherwise on the first `_`.
/// A name with neither separator is its own family key.
#[must_use]
pub fn family_key(addon_name: &str) -> &str {
    match addon_name.split_once('.') {
        Some((family, _)) => family,
        None => addon_name
            .split_once('_')
            .map_or(addon_name, |(family, _)| family),
    }
}

/// Looks up the template section name for a family key.
#[must_use]
pub fn section_for_family(family: &str) -> Option<&'static str> {
    FAMILY_SECTIONS
        .iter()
        .find(|(key, _)| *key == family)
        .map(|(_, section)| *section)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_name_uses_first_segment() {
        assert_eq!(family_key("r.in.something"), "r");
        assert_eq!(family_key("v.example"), "v");
        assert_eq!(family_key("r3.what.ever"), "r3");
    }

    #[test]
    fn underscored_name_uses_first_segment() {
        assert_eq!(family_key("v_something_else"), "v");
        assert_eq!(family_key("d_rast_multi"), "d");
    }

    #[test]
    fn dot_takes_precedence_over_underscore() {
        assert_eq!(family_key("t.rast_aggregate"), "t");
    }

    #[test]
    fn name_without_separator_is_its_own_family() {
        assert_eq!(family_key("standalone"), "standalone");
    }

    #[test]
    fn known_families_have_sections() {
        assert_eq!(section_for_family("r"), Some("raster_addons"));
        assert_eq!(section_for_family("r3"), Some("drast_addons"));
        assert_eq!(section_for_family("v"), Some("vector_addons"));
    }

    #[test]
    fn unknown_family_has_no_section() {
        assert_eq!(section_for_family("standalone"), None);
    }
}
