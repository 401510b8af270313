//! Placeholder substitution and banner rewriting.

use std::sync::LazyLock;

use regex::{Captures, NoExpand, Regex};
use tracing::warn;

use autopub_spec::{NormalizedSpec, SpecField};

/// Banner that replaces the template's introductory comment block.
pub const GENERATED_BANNER: &str = "\
######################################################################
# IMPORTANT: Do not edit this file directly!
#
# This workflow was automatically generated through the
# `autopub generate` command. To update the workflow, make changes
# to the template file and run the generator again.
######################################################################";

// Both patterns are constant and known to compile.
#[allow(clippy::expect_used)]
static PLACEHOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([a-zA-Z_][a-zA-Z0-9_]*)\}\}").expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static BANNER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)#{5,}.*#{5,}").expect("constant regex pattern is valid"));

/// Renders workflow templates for normalized spec records.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateRenderer;

impl TemplateRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Replace the template's banner block with [`GENERATED_BANNER`].
    ///
    /// The block runs from the first run of five or more `#` to the last
    /// such run in the template. A template without one is returned as is.
    pub fn rewrite_header(&self, template: &str) -> String {
        if !BANNER_PATTERN.is_match(template) {
            warn!("Workflow template has no banner block, generated files will carry no warning");
            return template.to_string();
        }
        BANNER_PATTERN
            .replacen(template, 1, NoExpand(GENERATED_BANNER))
            .into_owned()
    }

    /// Substitute every recognized `{{field}}` placeholder with the spec's
    /// value. Unrecognized placeholders are left in place.
    pub fn render(&self, template: &str, spec: &NormalizedSpec) -> String {
        PLACEHOLDER_PATTERN
            .replace_all(template, |caps: &Captures| match SpecField::from_name(&caps[1]) {
                Some(field) => spec.field(field).to_string(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }

    /// Placeholder names in the template outside the recognized field set,
    /// in order of first appearance.
    pub fn unknown_placeholders(&self, template: &str) -> Vec<String> {
        let mut unknown: Vec<String> = Vec::new();
        for caps in PLACEHOLDER_PATTERN.captures_iter(template) {
            let name = &caps[1];
            if SpecField::from_name(name).is_none() && !unknown.iter().any(|n| n == name) {
                unknown.push(name.to_string());
            }
        }
        unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn webcodecs() -> NormalizedSpec {
        NormalizedSpec {
            shortname: "webcodecs".into(),
            publication_status: "WD".into(),
            source: "index.src.html".into(),
            destination: "index.html".into(),
            token_name: "ECHIDNA_TOKEN_WEBCODECS".into(),
            additional_paths: String::new(),
        }
    }

    #[test]
    fn test_render_all_fields() {
        let renderer = TemplateRenderer::new();
        let template = "{{shortname}}|{{publicationStatus}}|{{source}}|{{destination}}|{{tokenName}}|{{additionalPaths}}";
        assert_eq!(
            renderer.render(template, &webcodecs()),
            "webcodecs|WD|index.src.html|index.html|ECHIDNA_TOKEN_WEBCODECS|"
        );
    }

    #[test]
    fn test_render_without_placeholders_is_identity() {
        let renderer = TemplateRenderer::new();
        let template = "name: Auto-publish\non:\n  push:\n    branches: [main]\n";
        assert_eq!(renderer.render(template, &webcodecs()), template);
    }

    #[test]
    fn test_render_replaces_every_occurrence() {
        let renderer = TemplateRenderer::new();
        let rendered = renderer.render("{{shortname}}-{{shortname}}\n{{shortname}}", &webcodecs());
        assert_eq!(rendered, "webcodecs-webcodecs\nwebcodecs");
    }

    #[test]
    fn test_render_leaves_unknown_placeholders() {
        let renderer = TemplateRenderer::new();
        let rendered = renderer.render("{{unknownField}} {{source}} {{ source }}", &webcodecs());
        assert_eq!(rendered, "{{unknownField}} index.src.html {{ source }}");
    }

    #[test]
    fn test_render_inside_actions_expression() {
        let renderer = TemplateRenderer::new();
        let rendered = renderer.render("W3C_ECHIDNA_TOKEN: ${{ secrets.{{tokenName}} }}", &webcodecs());
        assert_eq!(
            rendered,
            "W3C_ECHIDNA_TOKEN: ${{ secrets.ECHIDNA_TOKEN_WEBCODECS }}"
        );
    }

    #[test]
    fn test_render_inserts_values_literally() {
        let renderer = TemplateRenderer::new();
        let mut spec = webcodecs();
        spec.destination = "$1/${name}.html".into();
        assert_eq!(renderer.render("{{destination}}", &spec), "$1/${name}.html");
    }

    #[test]
    fn test_rewrite_header_multiline_banner() {
        let renderer = TemplateRenderer::new();
        let template = "\
##########
# Template for auto-publish workflows.
# Edit me, then regenerate.
##########
name: Auto-publish {{shortname}}
";
        let rewritten = renderer.rewrite_header(template);
        assert!(rewritten.starts_with(GENERATED_BANNER));
        assert!(!rewritten.contains("Edit me"));
        assert_eq!(rewritten.matches("IMPORTANT").count(), 1);
        assert!(rewritten.ends_with("\nname: Auto-publish {{shortname}}\n"));
    }

    #[test]
    fn test_rewrite_header_without_banner() {
        let renderer = TemplateRenderer::new();
        let template = "# short\nname: x\n";
        assert_eq!(renderer.rewrite_header(template), template);
    }

    #[test]
    fn test_unknown_placeholders() {
        let renderer = TemplateRenderer::new();
        let names = renderer.unknown_placeholders("{{source}} {{foo}} {{bar}} {{foo}}");
        assert_eq!(names, vec!["foo", "bar"]);
    }
}
