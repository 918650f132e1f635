use crate::action::Action;
use crate::error::{ConvertError, Result};
use serde::Serialize;

// ---------------------------------------------------------------------------
// ConvertOptions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Prepended verbatim to each display name; no separator is inserted.
    pub name_prefix: String,
    /// Relative project path recorded in each record; empty when not given.
    pub project_dir: String,
}

// ---------------------------------------------------------------------------
// ConfigRecord
// ---------------------------------------------------------------------------

/// Template-ready representation of one converted action. Serialized as the
/// template context, so field names are the template variable names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigRecord {
    pub basename: String,
    pub name: String,
    pub project: Project,
    pub args: Vec<String>,
    pub properties: Vec<Property>,
    pub profiles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub dirname: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub name: String,
    pub value: String,
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

/// Convert one parsed action into a `ConfigRecord`.
///
/// An action with an empty goal list fails validation here; parse order of
/// goals, properties, and profiles is preserved.
pub fn convert_action(action: &Action, opts: &ConvertOptions) -> Result<ConfigRecord> {
    if action.goals.is_empty() {
        return Err(ConvertError::NoGoals {
            display_name: action.display_name.clone(),
        });
    }
    let name = format!("{}{}", opts.name_prefix, action.display_name);
    Ok(ConfigRecord {
        basename: sanitize(&name),
        name,
        project: Project {
            dirname: opts.project_dir.clone(),
        },
        args: action.goals.clone(),
        properties: action
            .properties
            .iter()
            .map(|(name, value)| Property {
                name: name.clone(),
                value: value.clone(),
            })
            .collect(),
        profiles: action.activated_profiles.clone(),
    })
}

/// Replace every character outside `[A-Za-z0-9_]` with `_`, preserving
/// character count and order. Idempotent; the result is safe as a filename
/// component on common filesystems.
pub fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}
