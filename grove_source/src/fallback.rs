// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use grove_tree::TreeNode;

use crate::request::{GenerationRequest, SourcePage};

/// Most branches the fallback map creates; later pages are left out.
pub const MAX_FALLBACK_BRANCHES: usize = 8;

/// Most leaves per branch in the fallback map.
pub const MAX_FALLBACK_LEAVES: usize = 4;

/// Words kept from a page's core concept for its branch label.
const LABEL_WORDS: usize = 6;

const FALLBACK_IMPORTANCE: u8 = 3;

/// Builds a map directly from the source pages, without a generator.
///
/// One branch per page (up to [`MAX_FALLBACK_BRANCHES`]) labelled by its core
/// concept, with that page's first [`MAX_FALLBACK_LEAVES`] non-blank key
/// topics as leaves. Ids are stable: `root`, `page-{i}` and
/// `page-{i}-topic-{j}`. Every node links back to its page.
///
/// The result is deterministic and always loads into a
/// [`Tree`](grove_tree::Tree) without issues.
#[must_use]
pub fn fallback_tree(request: &GenerationRequest) -> TreeNode {
    let title = request.title.trim();
    let title = if title.is_empty() { "Overview" } else { title };
    let pages = request.pages.len();
    let description = if pages == 1 {
        String::from("Built from 1 page")
    } else {
        format!("Built from {pages} pages")
    };

    TreeNode::new("root", title)
        .with_description(description)
        .with_children(
            request
                .pages
                .iter()
                .take(MAX_FALLBACK_BRANCHES)
                .enumerate()
                .map(|(index, page)| page_branch(index, page)),
        )
}

fn page_branch(index: usize, page: &SourcePage) -> TreeNode {
    let concept = page.core_concept.trim();
    let label = short_label(concept).unwrap_or_else(|| format!("Page {}", index + 1));
    let mut branch = TreeNode::new(format!("page-{index}"), label)
        .with_importance(FALLBACK_IMPORTANCE)
        .with_source_page(index);
    if !concept.is_empty() {
        branch = branch.with_description(concept);
    }
    branch.with_children(
        page.key_topics
            .iter()
            .map(|topic| topic.trim())
            .filter(|topic| !topic.is_empty())
            .take(MAX_FALLBACK_LEAVES)
            .enumerate()
            .map(|(topic_index, topic)| {
                TreeNode::new(format!("page-{index}-topic-{topic_index}"), topic)
                    .with_source_page(index)
            }),
    )
}

fn short_label(concept: &str) -> Option<String> {
    let mut words = concept.split_whitespace();
    let mut label = String::from(words.next()?);
    for word in words.take(LABEL_WORDS - 1) {
        label.push(' ');
        label.push_str(word);
    }
    Some(label)
}

#[cfg(test)]
mod tests {
    use grove_tree::Tree;

    use super::{MAX_FALLBACK_BRANCHES, MAX_FALLBACK_LEAVES, fallback_tree, short_label};
    use crate::{GenerationRequest, SourcePage};

    fn pages(count: usize) -> Vec<SourcePage> {
        (0..count)
            .map(|i| SourcePage::new(format!("Concept {i}"), ["a", "b", "c", "d", "e", "f"]))
            .collect()
    }

    #[test]
    fn one_branch_per_page() {
        let request = GenerationRequest::new("Doc", pages(5));
        let root = fallback_tree(&request);
        assert_eq!(root.label, "Doc");
        assert_eq!(root.children.len(), 5);
        for (i, branch) in root.children.iter().enumerate() {
            assert_eq!(branch.id, format!("page-{i}"));
            assert_eq!(branch.source_page_index, Some(i));
            assert_eq!(branch.children.len(), MAX_FALLBACK_LEAVES);
            assert_eq!(branch.children[2].id, format!("page-{i}-topic-2"));
        }
        let (_, issues) = Tree::from_untrusted(root);
        assert!(issues.is_empty());
    }

    #[test]
    fn caps_branches_and_skips_blank_topics() {
        let mut many = pages(12);
        many[0].key_topics = vec![" ".into(), "real".into(), String::new()];
        many[1].core_concept = "  ".into();
        let root = fallback_tree(&GenerationRequest::new("  ", many));

        assert_eq!(root.label, "Overview");
        assert_eq!(root.children.len(), MAX_FALLBACK_BRANCHES);
        assert_eq!(root.children[0].children.len(), 1);
        assert_eq!(root.children[0].children[0].label, "real");
        assert_eq!(root.children[0].children[0].id, "page-0-topic-0");
        assert_eq!(root.children[1].label, "Page 2");
        assert_eq!(root.children[1].description, None);
    }

    #[test]
    fn is_deterministic() {
        let request = GenerationRequest::new("Doc", pages(3));
        assert_eq!(fallback_tree(&request), fallback_tree(&request));
    }

    #[test]
    fn labels_are_shortened() {
        assert_eq!(
            short_label("one two three four five six seven eight").as_deref(),
            Some("one two three four five six")
        );
        assert_eq!(short_label("   "), None);
    }
}
