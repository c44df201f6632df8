//! The family-keyed overview report.

use super::AddonRecord;
use crate::family::{family_key, FAMILY_SECTIONS};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// Aggregated overview of all discovered addons, grouped by family.
///
/// Records are keyed by `(family, addon_name)`. Inserting a record for an
/// unseen family registers the family in the same operation, so a family
/// can never exist without at least one addon.
#[derive(Debug, Clone)]
pub struct OverviewReport {
    families: BTreeMap<String, BTreeMap<String, AddonRecord>>,
    generated_at: DateTime<Utc>,
}

impl Default for OverviewReport {
    fn default() -> Self {
        Self::new()
    }
}

impl OverviewReport {
    /// Creates an empty report stamped with the current UTC time.
    #[must_use]
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    /// Creates an empty report with an explicit generation timestamp.
    #[must_use]
    pub fn at(generated_at: DateTime<Utc>) -> Self {
        Self {
            families: BTreeMap::new(),
            generated_at,
        }
    }

    /// Inserts a record under its derived family key.
    ///
    /// Last write wins: a record emitted earlier for the same
    /// `(family, addon_name)` key is replaced and returned so the caller
    /// can surface the overwrite.
    pub fn insert(&mut self, addon_name: &str, record: AddonRecord) -> Option<AddonRecord> {
        let family = family_key(addon_name).to_string();
        self.families
            .entry(family)
            .or_default()
            .insert(addon_name.to_string(), record)
    }

    /// Returns the addons of a family, if any were classified into it.
    #[must_use]
    pub fn family(&self, key: &str) -> Option<&BTreeMap<String, AddonRecord>> {
        self.families.get(key)
    }

    /// Returns true if no addons were collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Generation timestamp of this report.
    #[must_use]
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Builds the template context consumed by the renderer.
    ///
    /// Only families from the fixed section table contribute; addons in any
    /// other family are dropped here. `number_addons` is summed over the
    /// sections that actually render, and a section key is present only when
    /// at least one addon was classified into its family.
    #[must_use]
    pub fn render_context(&self) -> Value {
        let mut context = serde_json::Map::new();
        context.insert(
            "date".to_string(),
            json!(self.generated_at.format("%d %b %Y").to_string()),
        );
        context.insert(
            "date_utc".to_string(),
            json!(self.generated_at.format("%a %b %d %H:%M:%S UTC %Y").to_string()),
        );
        context.insert(
            "current_year".to_string(),
            json!(self.generated_at.format("%Y").to_string()),
        );

        let mut number_addons = 0;
        for (family, section) in FAMILY_SECTIONS {
            if let Some(addons) = self.families.get(*family) {
                number_addons += addons.len();
                context.insert((*section).to_string(), json!(addons));
            }
        }
        context.insert("number_addons".to_string(), json!(number_addons));

        Value::Object(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::TestsuiteStatus;
    use chrono::TimeZone;

    fn record(url: &str) -> AddonRecord {
        AddonRecord {
            url: url.to_string(),
            description: Some("a description".to_string()),
            testsuite: TestsuiteStatus::Absent,
        }
    }

    fn fixed_report() -> OverviewReport {
        OverviewReport::at(Utc.with_ymd_and_hms(2024, 3, 5, 12, 30, 45).unwrap())
    }

    #[test]
    fn insert_registers_family() {
        let mut report = fixed_report();
        assert!(report.family("r").is_none());

        report.insert("r.in.something", record("https://example.com"));

        let family = report.family("r").unwrap();
        assert!(family.contains_key("r.in.something"));
    }

    #[test]
    fn later_insert_overwrites_and_returns_previous() {
        let mut report = fixed_report();
        assert!(report.insert("v.example", record("https://first")).is_none());

        let previous = report.insert("v.example", record("https://second")).unwrap();
        assert_eq!(previous.url, "https://first");

        let family = report.family("v").unwrap();
        assert_eq!(family.len(), 1);
        assert_eq!(family["v.example"].url, "https://second");
    }

    #[test]
    fn render_context_has_timestamps() {
        let context = fixed_report().render_context();
        assert_eq!(context["date"], "05 Mar 2024");
        assert_eq!(context["date_utc"], "Tue Mar 05 12:30:45 UTC 2024");
        assert_eq!(context["current_year"], "2024");
        assert_eq!(context["number_addons"], 0);
    }

    #[test]
    fn render_context_counts_only_rendered_sections() {
        let mut report = fixed_report();
        report.insert("r.one", record("https://r1"));
        report.insert("r.two", record("https://r2"));
        report.insert("v.one", record("https://v1"));
        // Family without a template section, must not be counted.
        report.insert("unclassified", record("https://x"));

        let context = report.render_context();
        assert_eq!(context["number_addons"], 3);
        assert_eq!(context["raster_addons"]["r.one"]["url"], "https://r1");
        assert_eq!(context["vector_addons"]["v.one"]["url"], "https://v1");
        assert!(context.get("imagery_addons").is_none());
        assert!(context.get("unclassified").is_none());
    }

    #[test]
    fn absent_families_have_no_section_key() {
        let context = fixed_report().render_context();
        for (_, section) in FAMILY_SECTIONS {
            assert!(context.get(*section).is_none());
        }
    }
}
