// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reading generator output into a [`TreeNode`].

use grove_tree::TreeNode;
use serde::Deserialize;
use serde_json::Value;

use crate::error::GenerationError;

// Fields are read as loose values so that one off-type field costs only
// that field, not the whole map.
#[derive(Default, Deserialize)]
#[serde(default)]
struct RawMap {
    id: Value,
    label: Value,
    description: Value,
    branches: Value,
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawNode {
    id: Value,
    label: Value,
    description: Value,
    importance: Value,
    page_index: Value,
    children: Value,
}

/// Returns the outermost `{ ... }` span of `text`.
///
/// Generators like to wrap their answer in prose or Markdown code fences;
/// everything before the first `{` and after the last `}` is ignored.
#[must_use]
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

/// Parses generator output into a map rooted at a single node.
///
/// The expected shape is
/// `{ id, label, description, branches: [{ id, label, description, importance, pageIndex, children: [...] }] }`.
///
/// Parsing is forgiving where it can be:
/// - Missing ids are synthesized from the node's position (`branch-2`,
///   `branch-2-0`, ...). Numeric ids and labels are turned into strings.
/// - Entries without a label, or that are not objects, are dropped with their
///   subtree.
/// - Importance and page indices may be numbers or numeric strings.
///   Importance is rounded and clamped into `1..=5`.
/// - A page index that is not a whole number in `0..page_count` is discarded.
/// - A field of the wrong type is ignored; `null` or malformed `children`
///   count as none.
///
/// Id uniqueness is left to [`Tree::from_untrusted`](grove_tree::Tree::from_untrusted).
///
/// # Errors
///
/// Fails when no object can be found, the JSON is invalid, the root has no
/// label or `branches` list, or no branch survives.
pub fn parse_generated(text: &str, page_count: usize) -> Result<TreeNode, GenerationError> {
    let json = extract_json_object(text).ok_or(GenerationError::NoJson)?;
    let raw: RawMap = serde_json::from_str(json)?;

    let label = text_of(raw.label).ok_or(GenerationError::MissingField("label"))?;
    let Value::Array(branches) = raw.branches else {
        return Err(GenerationError::MissingField("branches"));
    };

    let mut root = TreeNode::new(
        text_of(raw.id).unwrap_or_else(|| String::from("root")),
        label,
    );
    root.description = text_of(raw.description);
    root.children = branches
        .into_iter()
        .enumerate()
        .filter_map(|(index, branch)| convert(branch, format!("branch-{index}"), page_count))
        .collect();

    if root.children.is_empty() {
        return Err(GenerationError::NoBranches);
    }
    Ok(root)
}

fn convert(value: Value, fallback_id: String, page_count: usize) -> Option<TreeNode> {
    let raw: RawNode = serde_json::from_value(value).ok()?;
    let label = text_of(raw.label)?;
    let id = text_of(raw.id).unwrap_or_else(|| fallback_id.clone());
    let mut node = TreeNode::new(id, label);
    node.description = text_of(raw.description);
    node.importance = number_of(&raw.importance).map(importance_rank);
    node.source_page_index = number_of(&raw.page_index)
        .and_then(page_of)
        .filter(|&index| index < page_count);
    if let Value::Array(children) = raw.children {
        node.children = children
            .into_iter()
            .enumerate()
            .filter_map(|(index, child)| {
                convert(child, format!("{fallback_id}-{index}"), page_count)
            })
            .collect();
    }
    Some(node)
}

/// Trimmed, non-empty text. Numbers are accepted and printed.
fn text_of(value: Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_owned(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

/// A finite number, or a string holding one.
fn number_of(value: &Value) -> Option<f64> {
    let number: f64 = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "rounded and clamped into 1..=5 first"
)]
fn importance_rank(value: f64) -> u8 {
    value.round().clamp(1.0, 5.0) as u8
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "whole, non-negative and below u32::MAX"
)]
fn page_of(value: f64) -> Option<usize> {
    (value >= 0.0 && value.fract() == 0.0 && value < f64::from(u32::MAX))
        .then(|| value as usize)
}
