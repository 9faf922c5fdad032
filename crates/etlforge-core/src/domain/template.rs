//! Template identity and rendering.
//!
//! Templates themselves are plain text owned by a store behind the
//! [`TemplateStore`](crate::application::ports::TemplateStore) port; the
//! domain only knows their identifiers and how to substitute placeholders.
//!
//! ## Placeholder syntax
//!
//! `{{VARIABLE}}`, SCREAMING_SNAKE_CASE. Unknown placeholders are left
//! as-is rather than erroring — a template may legitimately contain literal
//! braces.
//!
//! ## Built-in variables
//!
//! | Variable | Example | Source |
//! |----------------|--------------|-----------------|
//! | `CATEGORY` | "analytics" | User selection |
//! | `SUBCATEGORY` | "sales" | User selection |
//! | `PROJECT_NAME` | "sales_etl" | User selection |
//! | `CLASS_NAME` | "SalesEtl" | Computed |

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::selection::Selection;

// ── TemplateId ────────────────────────────────────────────────────────────────

/// Identifier of one of the five templates the scaffolder consumes.
///
/// A closed set: the tool never generates files it does not know about, so an
/// enum (rather than free-form strings) keeps store lookups total and lets
/// `match` prove coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    Extractor,
    Transform,
    Loader,
    Routes,
    Etl,
}

impl TemplateId {
    /// Every template identifier, in generation order.
    pub const ALL: [TemplateId; 5] = [
        Self::Extractor,
        Self::Transform,
        Self::Loader,
        Self::Routes,
        Self::Etl,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Extractor => "extractor",
            Self::Transform => "transform",
            Self::Loader => "loader",
            Self::Routes => "routes",
            Self::Etl => "etl",
        }
    }

    /// The conventional on-disk file name for a directory-backed store.
    pub fn store_file_name(&self) -> String {
        format!("{}.py.template", self.as_str())
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<crate::domain::selection::Stage> for TemplateId {
    fn from(stage: crate::domain::selection::Stage) -> Self {
        use crate::domain::selection::Stage;
        match stage {
            Stage::Extractor => Self::Extractor,
            Stage::Transform => Self::Transform,
            Stage::Loader => Self::Loader,
        }
    }
}

impl FromStr for TemplateId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "extractor" => Ok(Self::Extractor),
            "transform" => Ok(Self::Transform),
            "loader" => Ok(Self::Loader),
            "routes" => Ok(Self::Routes),
            "etl" => Ok(Self::Etl),
            other => Err(DomainError::UnknownName(other.to_string())),
        }
    }
}

// ── RenderContext ─────────────────────────────────────────────────────────────

/// Variable map for placeholder substitution.
///
/// Immutable after construction; `with_variable` consumes and returns a new
/// context for the rare case a caller wants extras beyond the built-ins.
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Build the standard context for a selection.
    ///
    /// `CLASS_NAME` is derived once here via [`to_class_name`]; templates can
    /// rely on all four variables existing.
    pub fn for_selection(selection: &Selection) -> Self {
        let mut variables = HashMap::new();
        variables.insert("CATEGORY".to_string(), selection.category().to_string());
        variables.insert(
            "SUBCATEGORY".to_string(),
            selection.subcategory().to_string(),
        );
        variables.insert(
            "PROJECT_NAME".to_string(),
            selection.project_name().to_string(),
        );
        variables.insert(
            "CLASS_NAME".to_string(),
            to_class_name(selection.project_name()),
        );

        Self { variables }
    }

    /// Add a custom variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// Linear scan-and-replace per variable; fine for the template sizes this
    /// tool ships (a few KB at most).
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}

// ── Class-name formatting ─────────────────────────────────────────────────────

/// Derive a PascalCase class identifier from a validated project name.
///
/// Splits on underscores only (project names cannot contain other
/// separators), uppercases the first letter of each non-empty word, and
/// concatenates: `"sales_etl"` → `"SalesEtl"`, `"a_b_c"` → `"ABC"`.
pub fn to_class_name(project_name: &str) -> String {
    project_name
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::new();
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                    out
                }
                None => String::new(),
            }
        })
        .collect()
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::selection::Selection;

    fn selection(name: &str) -> Selection {
        Selection::builder()
            .category("analytics")
            .subcategory("sales")
            .project_name(name)
            .build()
            .unwrap()
    }

    // ── to_class_name ─────────────────────────────────────────────────────────

    #[test]
    fn class_name_from_snake_case() {
        assert_eq!(to_class_name("sales_etl"), "SalesEtl");
    }

    #[test]
    fn class_name_single_letters() {
        assert_eq!(to_class_name("a_b_c"), "ABC");
    }

    #[test]
    fn class_name_preserves_inner_casing() {
        assert_eq!(to_class_name("dailyLoad_v2"), "DailyLoadV2");
    }

    #[test]
    fn class_name_skips_empty_words() {
        // Double and trailing underscores produce no empty segments.
        assert_eq!(to_class_name("a__b_"), "AB");
    }

    #[test]
    fn class_name_is_deterministic() {
        assert_eq!(to_class_name("sales_etl"), to_class_name("sales_etl"));
    }

    // ── RenderContext ─────────────────────────────────────────────────────────

    #[test]
    fn context_carries_all_standard_variables() {
        let ctx = RenderContext::for_selection(&selection("sales_etl"));
        assert_eq!(ctx.get("CATEGORY"), Some("analytics"));
        assert_eq!(ctx.get("SUBCATEGORY"), Some("sales"));
        assert_eq!(ctx.get("PROJECT_NAME"), Some("sales_etl"));
        assert_eq!(ctx.get("CLASS_NAME"), Some("SalesEtl"));
    }

    #[test]
    fn render_substitutes_placeholders() {
        let ctx = RenderContext::for_selection(&selection("sales_etl"));
        let rendered = ctx.render("class {{CLASS_NAME}}ETL:  # {{CATEGORY}}/{{SUBCATEGORY}}");
        assert_eq!(rendered, "class SalesEtlETL:  # analytics/sales");
    }

    #[test]
    fn render_leaves_unknown_placeholders() {
        let ctx = RenderContext::for_selection(&selection("p"));
        assert_eq!(ctx.render("{{NOT_A_VAR}}"), "{{NOT_A_VAR}}");
    }

    #[test]
    fn render_replaces_repeated_placeholders() {
        let ctx = RenderContext::for_selection(&selection("p"));
        assert_eq!(ctx.render("{{PROJECT_NAME}}/{{PROJECT_NAME}}"), "p/p");
    }

    #[test]
    fn custom_variable_is_available() {
        let ctx = RenderContext::for_selection(&selection("p")).with_variable("OWNER", "data-team");
        assert_eq!(ctx.get("OWNER"), Some("data-team"));
    }

    // ── TemplateId ────────────────────────────────────────────────────────────

    #[test]
    fn template_id_round_trips_through_strings() {
        for id in TemplateId::ALL {
            assert_eq!(id.as_str().parse::<TemplateId>().unwrap(), id);
        }
        assert!("readme".parse::<TemplateId>().is_err());
    }

    #[test]
    fn template_store_file_names() {
        assert_eq!(TemplateId::Routes.store_file_name(), "routes.py.template");
        assert_eq!(TemplateId::Etl.store_file_name(), "etl.py.template");
    }
}
