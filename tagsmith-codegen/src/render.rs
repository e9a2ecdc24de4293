//! Rendering of a [`GroupedModel`] into Rust source.

use crate::{
    builder::{CodeBuilder, Indent, rust_string_literal},
    model::{Group, GroupedModel, Member},
};

/// Comment lines at the top of every generated file.
pub const HEADER: &[&str] = &[
    "@generated by tagsmith. Do not edit by hand.",
    "Regenerate with `tagsmith generate`.",
];

/// Default name of the enclosing module.
pub const DEFAULT_MODULE_NAME: &str = "accessibility_identifiers";

/// Settings that shape the rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Name of the outer `pub mod`. Must be a valid Rust identifier.
    pub module_name: String,
    pub indent: Indent,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            module_name: DEFAULT_MODULE_NAME.to_string(),
            indent: Indent::default(),
        }
    }
}

/// A group ready for emission, with members in output order.
struct OrderedGroup<'a> {
    group: &'a Group,
    members: Vec<&'a Member>,
}

/// Render the whole file.
pub fn render(model: &GroupedModel, options: &RenderOptions) -> String {
    let groups = ordered_groups(model);

    let mut builder = CodeBuilder::new(options.indent);
    for line in HEADER {
        builder.push_comment(line);
    }
    builder.push_blank().push_line("#[allow(dead_code)]");
    builder.push_block(&format!("pub mod {} {{", options.module_name), "}", |b| {
        for (i, group) in groups.iter().enumerate() {
            if i > 0 {
                b.push_blank();
            }
            render_group(b, group);
        }
    });

    let output = builder.build();
    tracing::debug!(
        groups = groups.len(),
        bytes = output.len(),
        "rendered identifier module"
    );
    output
}

/// Non-empty groups sorted by parent name, each with members sorted by raw
/// value. Equal raw values fall back to the constant name so the result does
/// not depend on input order.
fn ordered_groups(model: &GroupedModel) -> Vec<OrderedGroup<'_>> {
    let mut parents: Vec<(&str, &Group)> = model
        .groups()
        .filter(|(_, group)| !group.members.is_empty())
        .collect();
    parents.sort_by(|a, b| a.0.cmp(b.0));

    parents
        .into_iter()
        .map(|(_, group)| {
            let mut members: Vec<&Member> = group.members.iter().collect();
            members.sort_by(|a, b| {
                a.raw_value
                    .cmp(&b.raw_value)
                    .then_with(|| a.name.cmp(&b.name))
            });
            OrderedGroup { group, members }
        })
        .collect()
}

fn render_group(b: &mut CodeBuilder, ordered: &OrderedGroup<'_>) {
    let type_name = &ordered.group.type_name;

    b.push_line("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]");
    b.push_block(&format!("pub struct {} {{", type_name), "}", |b| {
        b.push_line("pub raw_value: &'static str,");
    });
    b.push_blank();
    b.push_block(&format!("impl {} {{", type_name), "}", |b| {
        for member in &ordered.members {
            b.push_line(&format!(
                "pub const {}: Self = Self {{ raw_value: {} }};",
                member.name,
                rust_string_literal(&member.raw_value)
            ));
        }
    });
}

#[cfg(test)]
mod tests {
    use tagsmith_core::IdentifierRecord;

    use super::*;

    fn model(records: &[(&str, &str, &str)]) -> GroupedModel {
        GroupedModel::from_records(records.iter().map(|&r| IdentifierRecord::from(r)))
    }

    fn position(haystack: &str, needle: &str) -> usize {
        haystack
            .find(needle)
            .unwrap_or_else(|| panic!("'{needle}' not found in:\n{haystack}"))
    }

    #[test]
    fn test_single_group() {
        let output = render(
            &model(&[("Login", "submit", "login.submit")]),
            &RenderOptions::default(),
        );

        assert_eq!(
            output,
            "// @generated by tagsmith. Do not edit by hand.\n\
             // Regenerate with `tagsmith generate`.\n\
             \n\
             #[allow(dead_code)]\n\
             pub mod accessibility_identifiers {\n\
             \x20   #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]\n\
             \x20   pub struct Login {\n\
             \x20       pub raw_value: &'static str,\n\
             \x20   }\n\
             \n\
             \x20   impl Login {\n\
             \x20       pub const SUBMIT: Self = Self { raw_value: \"login.submit\" };\n\
             \x20   }\n\
             }\n"
        );
    }

    #[test]
    fn test_groups_sorted_by_name() {
        let output = render(
            &model(&[("B", "b", "1"), ("A", "a", "2"), ("C", "c", "3")]),
            &RenderOptions::default(),
        );

        let a = position(&output, "pub struct A ");
        let b = position(&output, "pub struct B ");
        let c = position(&output, "pub struct C ");
        assert!(a < b && b < c);
    }

    #[test]
    fn test_members_sorted_by_raw_value() {
        let output = render(
            &model(&[("A", "alpha", "zz"), ("A", "zulu", "aa")]),
            &RenderOptions::default(),
        );

        assert!(position(&output, "\"aa\"") < position(&output, "\"zz\""));
        assert!(position(&output, "ZULU") < position(&output, "ALPHA"));
    }

    #[test]
    fn test_equal_raw_values_order_by_name() {
        let forward = render(
            &model(&[("A", "second", "same"), ("A", "first", "same")]),
            &RenderOptions::default(),
        );
        let backward = render(
            &model(&[("A", "first", "same"), ("A", "second", "same")]),
            &RenderOptions::default(),
        );

        assert_eq!(forward, backward);
        assert!(position(&forward, "FIRST") < position(&forward, "SECOND"));
    }

    #[test]
    fn test_empty_group_is_skipped() {
        let mut grouped = model(&[("Filled", "a", "1")]);
        grouped.insert_group(
            "Empty",
            Group {
                type_name: "Empty".to_string(),
                members: Vec::new(),
            },
        );

        let output = render(&grouped, &RenderOptions::default());

        assert!(!output.contains("Empty"));
        assert!(output.contains("pub struct Filled {"));
    }

    #[test]
    fn test_no_records_renders_empty_module() {
        let output = render(&GroupedModel::default(), &RenderOptions::default());
        assert!(output.ends_with("pub mod accessibility_identifiers {\n}\n"));
    }

    #[test]
    fn test_options_apply() {
        let options = RenderOptions {
            module_name: "ids".to_string(),
            indent: Indent::Tab,
        };
        let output = render(&model(&[("A", "a", "1")]), &options);

        assert!(output.contains("pub mod ids {\n\t#[derive"));
        assert!(output.contains("\n\t\tpub const A: Self"));
    }

    #[test]
    fn test_placeholder_like_values_are_literal() {
        let output = render(
            &model(&[("A", "tricky", "{{content}}")]),
            &RenderOptions::default(),
        );

        assert!(output.contains("pub const TRICKY: Self = Self { raw_value: \"{{content}}\" };"));
    }
}
