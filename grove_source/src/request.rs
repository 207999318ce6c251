// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// One page of source material.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourcePage {
    /// The central idea of the page.
    pub core_concept: String,
    /// Supporting topics, most relevant first.
    #[serde(default)]
    pub key_topics: Vec<String>,
}

impl SourcePage {
    /// Creates a page from its core concept and key topics.
    #[must_use]
    pub fn new<I, S>(core_concept: impl Into<String>, key_topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            core_concept: core_concept.into(),
            key_topics: key_topics.into_iter().map(Into::into).collect(),
        }
    }
}

/// Everything a generator needs to produce a map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Title of the document; becomes the root label.
    pub title: String,
    /// Source pages in reading order. Page indices in generated maps refer to
    /// positions in this list.
    pub pages: Vec<SourcePage>,
}

impl GenerationRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(title: impl Into<String>, pages: Vec<SourcePage>) -> Self {
        Self {
            title: title.into(),
            pages,
        }
    }

    /// Returns `true` if there is nothing to build a map from.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Instruction text for a text-generation model.
    ///
    /// Asks for a single JSON object in the shape [`parse_generated`]
    /// understands and lists every page with its index.
    ///
    /// [`parse_generated`]: crate::parse_generated
    #[must_use]
    pub fn prompt(&self) -> String {
        let mut prompt = String::new();
        let _ = writeln!(
            prompt,
            "Build a concept map for the document \"{}\".",
            self.title.trim()
        );
        prompt.push_str(
            "Answer with one JSON object and nothing else, shaped as:\n\
             {\"id\":\"root\",\"label\":\"...\",\"description\":\"...\",\"branches\":[\
             {\"id\":\"...\",\"label\":\"...\",\"description\":\"...\",\"importance\":1-5,\
             \"pageIndex\":0,\"children\":[{\"id\":\"...\",\"label\":\"...\",\
             \"description\":\"...\",\"pageIndex\":0}]}]}\n\
             Use short labels (at most five words), 3 to 8 branches, and at most 4 children per branch.\n\
             Pages:\n",
        );
        for (index, page) in self.pages.iter().enumerate() {
            let _ = write!(prompt, "[{index}] {}", page.core_concept.trim());
            if !page.key_topics.is_empty() {
                let _ = write!(prompt, " (topics: {})", page.key_topics.join(", "));
            }
            prompt.push('\n');
        }
        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::{GenerationRequest, SourcePage};

    #[test]
    fn prompt_lists_pages_with_indices() {
        let request = GenerationRequest::new(
            "The Book",
            vec![
                SourcePage::new("Ownership", ["moves", "borrows"]),
                SourcePage::new("Traits", Vec::<String>::new()),
            ],
        );
        let prompt = request.prompt();
        assert!(prompt.contains("\"The Book\""));
        assert!(prompt.contains("[0] Ownership (topics: moves, borrows)"));
        assert!(prompt.contains("[1] Traits\n"));
        assert!(prompt.contains("\"branches\""));
    }

    #[test]
    fn pages_read_camel_case() {
        let page: SourcePage =
            serde_json::from_str(r#"{"coreConcept":"Lifetimes","keyTopics":["'a"]}"#).unwrap();
        assert_eq!(page, SourcePage::new("Lifetimes", ["'a"]));
    }
}
