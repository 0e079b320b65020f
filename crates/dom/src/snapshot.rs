//! Deterministic DOM serialization and equality for tests.
//! Not a public stable format; intended for internal test comparisons.
//!
//! Equivalence rules:
//! - Node kinds must match.
//! - Element names must match (ASCII case-insensitive).
//! - Attribute list order is significant; names and values must match.
//! - Inline style order is significant; properties and values must match.
//! - Text and comment nodes must match exactly.
//! - IDs and empty style vectors can be ignored by options.

use crate::Node;

#[derive(Clone, Copy, Debug)]
pub struct DomSnapshotOptions {
    pub ignore_ids: bool,
    pub ignore_empty_style: bool,
}

impl Default for DomSnapshotOptions {
    fn default() -> Self {
        Self {
            ignore_ids: true,
            ignore_empty_style: true,
        }
    }
}

#[derive(Debug)]
pub struct DomSnapshot {
    lines: Vec<String>,
}

impl DomSnapshot {
    pub fn new(root: &Node, options: DomSnapshotOptions) -> Self {
        let mut lines = Vec::new();
        walk(root, &options, 0, &mut lines);
        Self { lines }
    }

    pub fn as_lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

fn walk(node: &Node, options: &DomSnapshotOptions, depth: usize, out: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    let id = if options.ignore_ids {
        String::new()
    } else {
        format!(" #{}", node.id().0)
    };
    match node {
        Node::Document {
            doctype, children, ..
        } => {
            match doctype {
                Some(dt) => out.push(format!("{indent}#document doctype={dt}{id}")),
                None => out.push(format!("{indent}#document{id}")),
            }
            for c in children {
                walk(c, options, depth + 1, out);
            }
        }
        Node::Element {
            name,
            attributes,
            style,
            children,
            ..
        } => {
            let mut line = format!("{indent}<{}{id}", name.to_ascii_lowercase());
            for (k, v) in attributes {
                match v {
                    Some(v) => line.push_str(&format!(r#" {k}="{v}""#)),
                    None => line.push_str(&format!(" {k}")),
                }
            }
            line.push('>');
            if !(style.is_empty() && options.ignore_empty_style) {
                let styl = style
                    .iter()
                    .map(|(k, v)| format!("{k}: {v};"))
                    .collect::<Vec<_>>()
                    .join(" ");
                line.push_str(&format!(" style{{{styl}}}"));
            }
            out.push(line);
            for c in children {
                walk(c, options, depth + 1, out);
            }
        }
        Node::Text { text, .. } => out.push(format!("{indent}\"{text}\"{id}")),
        Node::Comment { text, .. } => out.push(format!("{indent}<!-- {text} -->{id}")),
    }
}

/// Panics with both rendered snapshots on the first differing line.
pub fn assert_dom_eq(expected: &Node, actual: &Node, options: DomSnapshotOptions) {
    let expected = DomSnapshot::new(expected, options);
    let actual = DomSnapshot::new(actual, options);
    if expected.as_lines() == actual.as_lines() {
        return;
    }
    let detail = expected
        .as_lines()
        .iter()
        .zip(actual.as_lines())
        .enumerate()
        .find(|(_, (e, a))| e != a)
        .map(|(i, (e, a))| format!("line {}: expected `{e}`, actual `{a}`", i + 1))
        .unwrap_or_else(|| "snapshots differ in length".to_string());
    panic!(
        "DOM mismatch: {detail}\nexpected:\n{}\nactual:\n{}",
        expected.render(),
        actual.render()
    );
}
