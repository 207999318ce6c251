// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use grove_tree::{Tree, TreeIssue, TreeNode};

use crate::error::{EmptyInput, GenerationError};
use crate::fallback::fallback_tree;
use crate::parse::parse_generated;
use crate::request::GenerationRequest;

/// Something that can turn a [`GenerationRequest`] into raw map text.
///
/// Implementations typically call out to a text-generation model with
/// [`GenerationRequest::prompt`]. Any error makes
/// [`build_tree`] fall back to [`fallback_tree`].
///
/// Closures with the right signature implement this trait.
pub trait GenerationService {
    /// Produces text containing a JSON map.
    ///
    /// # Errors
    ///
    /// Any failure to produce text, including timeouts.
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}

impl<F> GenerationService for F
where
    F: Fn(&GenerationRequest) -> Result<String, GenerationError>,
{
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        self(request)
    }
}

/// A service that never answers, for running without a generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct Offline;

impl GenerationService for Offline {
    fn generate(&self, _request: &GenerationRequest) -> Result<String, GenerationError> {
        Err(GenerationError::Transport(String::from(
            "no generation service configured",
        )))
    }
}

/// Where a [`BuiltTree`] came from.
#[derive(Debug)]
pub enum Provenance {
    /// The generator's answer was used.
    Generated,
    /// The generator failed; the map was built by [`fallback_tree`].
    Fallback {
        /// What went wrong.
        reason: GenerationError,
    },
}

impl Provenance {
    /// Returns `true` for [`Provenance::Fallback`].
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// A loaded tree together with how it was obtained.
#[derive(Debug)]
pub struct BuiltTree {
    /// The validated tree.
    pub tree: Tree,
    /// Generator or fallback.
    pub provenance: Provenance,
    /// Repairs made while loading the generated map.
    pub issues: Vec<TreeIssue>,
}

/// Asks `service` for a map and parses the answer.
///
/// # Errors
///
/// Whatever the service reports, or a [`GenerationError`] from
/// [`parse_generated`].
pub fn generate_tree<S>(
    service: &S,
    request: &GenerationRequest,
) -> Result<TreeNode, GenerationError>
where
    S: GenerationService + ?Sized,
{
    let text = service.generate(request)?;
    tracing::debug!(bytes = text.len(), "received generated map");
    parse_generated(&text, request.pages.len())
}

/// Loads a generation outcome, substituting the fallback map on failure.
///
/// This is the second half of [`build_tree`], for hosts that run
/// [`generate_tree`] elsewhere (another thread, an async task) and hand the
/// result back.
#[must_use]
pub fn finish_tree(
    outcome: Result<TreeNode, GenerationError>,
    request: &GenerationRequest,
) -> BuiltTree {
    let (root, provenance) = match outcome {
        Ok(root) => (root, Provenance::Generated),
        Err(reason) => {
            tracing::warn!(%reason, pages = request.pages.len(), "using fallback map");
            (fallback_tree(request), Provenance::Fallback { reason })
        }
    };

    let (tree, issues) = Tree::from_untrusted(root);
    for issue in &issues {
        tracing::warn!(%issue, "repaired generated map");
    }
    tracing::info!(
        nodes = tree.node_count(),
        fallback = provenance.is_fallback(),
        "map ready"
    );
    BuiltTree {
        tree,
        provenance,
        issues,
    }
}

/// Builds a tree for `request`, falling back to a page-derived map whenever
/// generation fails.
///
/// # Errors
///
/// Returns [`EmptyInput`] when the request has no pages; there is no sensible
/// map to show in that case.
pub fn build_tree<S>(service: &S, request: &GenerationRequest) -> Result<BuiltTree, EmptyInput>
where
    S: GenerationService + ?Sized,
{
    if request.is_empty() {
        return Err(EmptyInput);
    }
    Ok(finish_tree(generate_tree(service, request), request))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{BuiltTree, Offline, Provenance, build_tree};
    use crate::{EmptyInput, GenerationError, GenerationRequest, SourcePage};

    fn five_pages() -> GenerationRequest {
        GenerationRequest::new(
            "Five",
            (0..5)
                .map(|i| SourcePage::new(format!("Page concept {i}"), ["x", "y"]))
                .collect(),
        )
    }

    fn assert_fallback_with_five_branches(built: &BuiltTree) {
        assert!(built.provenance.is_fallback());
        let tree = &built.tree;
        assert_eq!(tree.children(tree.root_key()).count(), 5);
        assert!(built.issues.is_empty());
    }

    #[test]
    fn invalid_json_falls_back() {
        let service = |_: &GenerationRequest| -> Result<String, GenerationError> {
            Ok(String::from("{ this is not json"))
        };
        let built = build_tree(&service, &five_pages()).unwrap();
        assert_fallback_with_five_branches(&built);
        assert!(matches!(
            built.provenance,
            Provenance::Fallback {
                reason: GenerationError::NoJson
            }
        ));
    }

    #[test]
    fn service_error_falls_back() {
        let service = |_: &GenerationRequest| -> Result<String, GenerationError> {
            Err(GenerationError::Timeout(Duration::from_secs(30)))
        };
        let built = build_tree(&service, &five_pages()).unwrap();
        assert_fallback_with_five_branches(&built);

        let built = build_tree(&Offline, &five_pages()).unwrap();
        assert_fallback_with_five_branches(&built);
    }

    #[test]
    fn generated_map_is_used_and_repaired() {
        let service = |_: &GenerationRequest| -> Result<String, GenerationError> {
            Ok(String::from(
                r#"{"label":"Gen","branches":[
                    {"id":"a","label":"A","children":[{"id":"a","label":"dup"}]},
                    {"id":"b","label":"B","importance":2}
                ]}"#,
            ))
        };
        let built = build_tree(&service, &five_pages()).unwrap();
        assert!(matches!(built.provenance, Provenance::Generated));
        assert_eq!(built.tree.root().label(), "Gen");
        assert_eq!(built.tree.node_count(), 3);
        assert_eq!(built.issues.len(), 1);
    }

    #[test]
    fn empty_request_is_rejected() {
        let request = GenerationRequest::new("Nothing", Vec::new());
        assert_eq!(build_tree(&Offline, &request).unwrap_err(), EmptyInput);
    }
}
