use crate::convert::ConfigRecord;
use crate::error::Result;
use std::path::Path;
use tera::{Context, Tera};

/// Fixed template file name resolved inside the templates directory.
pub const TEMPLATE_FILE: &str = "runConfigurationTemplate.xml";

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Renders `ConfigRecord`s through the run-configuration template.
#[derive(Debug)]
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Load `runConfigurationTemplate.xml` from `templates_dir`.
    pub fn from_dir(templates_dir: &Path) -> Result<Self> {
        let path = templates_dir.join(TEMPLATE_FILE);
        let source = std::fs::read_to_string(&path)?;
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_FILE, &source)?;
        tracing::debug!(template = %path.display(), "loaded template");
        Ok(Self { tera })
    }

    /// Render one record. The record's fields become the top-level template
    /// variables (`basename`, `name`, `project`, `args`, `properties`,
    /// `profiles`).
    pub fn render(&self, record: &ConfigRecord) -> Result<String> {
        let context = Context::from_serialize(record)?;
        Ok(self.tera.render(TEMPLATE_FILE, &context)?)
    }
}
