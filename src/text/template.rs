//! Template rendering.
//!
//! Placeholders are written `{{name}}`. Known names are replaced with their
//! value; unknown names are removed. Rendered output never contains `{{`.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::analysis::MatchedPattern;
use crate::store::ContentSnapshot;

/// Substitution passes before leftover braces are stripped outright.
const MAX_PASSES: usize = 4;

/// Placeholder values for one render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplateVars {
    values: FxHashMap<String, String>,
}

impl TemplateVars {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) {
        self.values.insert(key.into(), value.to_string());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Variables available to pattern messages.
    #[must_use]
    pub fn for_pattern(pattern: &MatchedPattern, seeker_name: &str) -> Self {
        let evidence = &pattern.evidence;
        let strongest = if evidence.strongest_positions.is_empty() {
            "none in particular".to_string()
        } else {
            evidence.strongest_positions.join(", ")
        };
        Self::new()
            .with("name", seeker_name)
            .with("pattern_name", &pattern.name)
            .with("major_count", evidence.major_count)
            .with("upright_count", evidence.upright_count)
            .with("reversed_count", evidence.reversed_count)
            .with("total", evidence.total)
            .with(
                "dominant_suit",
                evidence.dominant_suit.map_or("no single suit", |s| s.name()),
            )
            .with("strongest_positions", strongest)
    }
}

/// Renders templates by id, or free text, against `TemplateVars`.
#[derive(Clone, Debug, Default)]
pub struct TemplateRenderer {
    templates: FxHashMap<String, String>,
}

impl TemplateRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer over every template row in a snapshot. A repeated id keeps
    /// the first row.
    #[must_use]
    pub fn from_snapshot(snapshot: &ContentSnapshot) -> Self {
        let mut renderer = Self::new();
        for row in snapshot.templates() {
            renderer
                .templates
                .entry(row.id.clone())
                .or_insert_with(|| row.text.clone());
        }
        renderer
    }

    #[must_use]
    pub fn with_template(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.templates.insert(id.into(), text.into());
        self
    }

    /// Render a registered template, or `None` for an unknown id.
    #[must_use]
    pub fn render(&self, template_id: &str, vars: &TemplateVars) -> Option<String> {
        self.templates.get(template_id).map(|text| Self::fill(text, vars))
    }

    /// Fill placeholders in free text.
    #[must_use]
    pub fn fill(text: &str, vars: &TemplateVars) -> String {
        let mut out = text.to_string();
        for _ in 0..MAX_PASSES {
            if !out.contains("{{") {
                return tidy(&out);
            }
            out = substitute(&out, vars);
        }
        // Values that keep producing placeholders.
        while out.contains("{{") {
            out = out.replace("{{", "");
        }
        tidy(&out)
    }
}

fn substitute(text: &str, vars: &TemplateVars) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = after[..end].trim();
                match vars.get(key) {
                    Some(value) => out.push_str(value),
                    None => debug!(placeholder = key, "unresolved template placeholder"),
                }
                rest = &after[end + 2..];
            }
            None => {
                // Unclosed: drop the opening braces, keep the text.
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Collapse the double spaces left by removed placeholders.
fn tidy(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_space = false;
    for ch in text.chars() {
        if ch == ' ' {
            if previous_space {
                continue;
            }
            previous_space = true;
        } else {
            previous_space = false;
        }
        out.push(ch);
    }
    out.trim().to_string()
}
