use crate::error::{ConvertError, Result};
use roxmltree::{Document, Node};
use std::path::Path;

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// One build-action entry from an nbactions.xml document.
///
/// Cardinality is normalized here, once: a lone `<goal>` or
/// `<activatedProfile>` child parses to a one-element list, and absent
/// optional containers parse to empty lists. Goals may legitimately parse
/// empty; the converter rejects that, not the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub display_name: String,
    pub goals: Vec<String>,
    pub activated_profiles: Vec<String>,
    /// Property key/value pairs in document order.
    pub properties: Vec<(String, String)>,
}

impl Action {
    /// Parse every `<action>` element of the document at `path`, in
    /// document order. A document with zero actions is an error.
    pub fn load_all(path: &Path) -> Result<Vec<Action>> {
        let text = std::fs::read_to_string(path)?;
        let doc = Document::parse(&text)?;
        let actions: Vec<Action> = doc
            .root_element()
            .children()
            .filter(|n| n.has_tag_name("action"))
            .enumerate()
            .map(|(index, node)| Action::from_node(index, node))
            .collect::<Result<_>>()?;
        if actions.is_empty() {
            return Err(ConvertError::NoActions);
        }
        tracing::debug!(count = actions.len(), path = %path.display(), "parsed actions");
        Ok(actions)
    }

    fn from_node(index: usize, node: Node<'_, '_>) -> Result<Action> {
        let display_name =
            child_text(node, "displayName").ok_or(ConvertError::MissingDisplayName { index })?;
        let goals = child_texts(node, "goals", "goal");
        let activated_profiles = child_texts(node, "activatedProfiles", "activatedProfile");
        let properties = node
            .children()
            .find(|n| n.has_tag_name("properties"))
            .map(|props| {
                props
                    .children()
                    .filter(Node::is_element)
                    .map(|p| {
                        (
                            p.tag_name().name().to_string(),
                            p.text().unwrap_or_default().trim().to_string(),
                        )
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(Action {
            display_name,
            goals,
            activated_profiles,
            properties,
        })
    }
}

/// Trimmed text of the first child element named `name`; whitespace-only
/// text counts as absent.
fn child_text(node: Node<'_, '_>, name: &str) -> Option<String> {
    node.children()
        .find(|n| n.has_tag_name(name))
        .and_then(|n| n.text())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Trimmed texts of every `container/item` grandchild, in document order.
fn child_texts(node: Node<'_, '_>, container: &str, item: &str) -> Vec<String> {
    node.children()
        .find(|n| n.has_tag_name(container))
        .map(|c| {
            c.children()
                .filter(|n| n.has_tag_name(item))
                .filter_map(|n| n.text())
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default()
}
