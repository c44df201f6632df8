//! Report rendering using Handlebars.
//!
//! Renders the aggregated overview through an HTML template and writes the
//! output file, overwriting any previous run's output.

mod error;

pub use error::RenderError;

use crate::report::OverviewReport;
use handlebars::{no_escape, Handlebars};
use std::path::Path;
use tracing::info;

/// Creates the Handlebars registry for overview rendering.
///
/// Escaping is disabled because addon descriptions may legitimately carry
/// HTML markup from documentation pages. Strict mode stays off since family
/// sections are absent from the context when no addon was classified into
/// them.
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(no_escape);
    hbs
}

/// Renderer for the overview HTML report.
pub struct ReportRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer {
    /// Creates a new report renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders the report with the given template content.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if template rendering fails.
    pub fn render(&self, template: &str, report: &OverviewReport) -> Result<String, RenderError> {
        Ok(self
            .handlebars
            .render_template(template, &report.render_context())?)
    }

    /// Renders the report from a template file and writes the output file.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the template cannot be read, rendering
    /// fails, or the output cannot be written.
    pub fn render_to_file(
        &self,
        template_path: &Path,
        output_path: &Path,
        report: &OverviewReport,
    ) -> Result<(), RenderError> {
        let template =
            std::fs::read_to_string(template_path).map_err(|source| RenderError::Io {
                path: template_path.display().to_string(),
                source,
            })?;

        let html = self.render(&template, report)?;

        std::fs::write(output_path, html).map_err(|source| RenderError::Io {
            path: output_path.display().to_string(),
            source,
        })?;

        info!(path = %output_path.display(), "Overview written");
        Ok(())
    }
}
