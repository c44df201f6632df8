//! Description extraction from addon source files.
//!
//! GRASS addon descriptions live in one of two places: the `#%description:`
//! header block of the addon's Python source, or, for older addons without a
//! Python source, the generated HTML documentation page.

/// Recognized spellings of the Python description marker, in priority order.
const PY_MARKERS: [&str; 3] = ["#% description:", "# % description:", "#%description:"];

/// Legacy markers that may leak into HTML documentation lines.
const LEGACY_HTML_MARKERS: [&str; 2] = ["# % description:", "#% description:"];

/// Extracts the addon description from a Python source file.
///
/// Takes the first line starting with any recognized marker spelling and
/// strips the marker. Returns `None` when no line matches.
#[must_use]
pub fn description_from_python(source: &str) -> Option<String> {
    for line in source.lines() {
        for marker in PY_MARKERS {
            if let Some(rest) = line.strip_prefix(marker) {
                return Some(rest.trim().to_string());
            }
        }
    }
    None
}

/// Extracts the addon description from an HTML documentation page.
///
/// Takes the first line starting with `<em><b>{addon_name}</b></em>`, strips
/// that prefix and removes any leaked legacy description markers. Returns
/// `None` when no line matches.
#[must_use]
pub fn description_from_html(page: &str, addon_name: &str) -> Option<String> {
    let marker = format!("<em><b>{addon_name}</b></em>");
    for line in page.lines() {
        if let Some(rest) = line.strip_prefix(&marker) {
            let mut description = rest.to_string();
            for legacy in LEGACY_HTML_MARKERS {
                description = description.replace(legacy, "");
            }
            return Some(description.trim().to_string());
        }
    }
    None
}

/// Composes the repository-level and addon-level descriptions.
///
/// Format: `"{repo} - {addon}"`, with doubled spaces collapsed. A missing
/// repository description degrades to the addon description alone.
#[must_use]
pub fn compose_description(repo_description: Option<&str>, addon_description: &str) -> String {
    match repo_description {
        Some(repo_description) => {
            format!("{repo_description} - {addon_description}").replace("  ", " ")
        }
        None => addon_description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn python_marker_spellings() {
        for source in [
            "#% description: removes all nulls\n#% keyword: raster",
            "# % description: removes all nulls",
            "#%description: removes all nulls",
        ] {
            assert_eq!(
                description_from_python(source).as_deref(),
                Some("removes all nulls")
            );
        }
    }

    #[test]
    fn python_first_matching_line_wins() {
        let source = "#% keyword: raster\n#% description: first\n#% description: second";
        assert_eq!(description_from_python(source).as_deref(), Some("first"));
    }

    #[test]
    fn python_without_marker_is_none() {
        assert_eq!(description_from_python("import grass\nprint('x')"), None);
    }

    #[test]
    fn html_line_yields_description() {
        let page = "<h2>NAME</h2>\n<em><b>foo</b></em> does bar\n<p>more</p>";
        assert_eq!(description_from_html(page, "foo").as_deref(), Some("does bar"));
    }

    #[test]
    fn html_strips_leaked_legacy_markers() {
        let page = "<em><b>foo</b></em> #% description: does bar";
        assert_eq!(description_from_html(page, "foo").as_deref(), Some("does bar"));
    }

    #[test]
    fn html_requires_matching_addon_name() {
        let page = "<em><b>other</b></em> does bar";
        assert_eq!(description_from_html(page, "foo"), None);
    }

    #[test]
    fn compose_joins_with_dash() {
        assert_eq!(compose_description(Some("X"), "Y"), "X - Y");
    }

    #[test]
    fn compose_collapses_doubled_spaces() {
        // A trailing space in the repository description would otherwise
        // produce "X  - Y".
        assert_eq!(compose_description(Some("X "), "Y"), "X - Y");
    }

    #[test]
    fn compose_without_repo_description() {
        assert_eq!(compose_description(None, "Y"), "Y");
    }
}
