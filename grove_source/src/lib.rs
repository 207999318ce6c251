// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grove Source: turning source pages into a mind map tree.
//!
//! A host describes its document as a [`GenerationRequest`] (a title and a
//! list of [`SourcePage`]s) and hands it to [`build_tree`] together with a
//! [`GenerationService`]. The service is expected to answer with a JSON map;
//! [`parse_generated`] reads it leniently and
//! [`Tree::from_untrusted`](grove_tree::Tree::from_untrusted) repairs what
//! remains. If anything fails (the service errors or times out, the answer
//! is not JSON, the map has no branches) the result is replaced by
//! [`fallback_tree`], a deterministic map with one branch per page.
//!
//! ```rust
//! use grove_source::{GenerationRequest, Offline, SourcePage, build_tree};
//!
//! let request = GenerationRequest::new(
//!     "Cooking",
//!     vec![
//!         SourcePage::new("Knife skills", ["dicing", "julienne"]),
//!         SourcePage::new("Heat", ["searing", "braising"]),
//!     ],
//! );
//! let built = build_tree(&Offline, &request).unwrap();
//! assert!(built.provenance.is_fallback());
//! assert_eq!(built.tree.root().label(), "Cooking");
//! assert_eq!(built.tree.node_count(), 1 + 2 + 4);
//! ```
//!
//! Generation is usually slow and may be started again before an earlier
//! request has answered. [`GenerationSequence`] hands out [`Ticket`]s so that
//! only the answer to the most recent request is applied.
//!
//! Diagnostics go through [`tracing`]: a warning when the fallback is used or
//! the generated map needed repairs, debug output for received responses.

mod build;
mod error;
mod fallback;
mod parse;
mod request;
mod sequence;

pub use build::{
    BuiltTree, GenerationService, Offline, Provenance, build_tree, finish_tree, generate_tree,
};
pub use error::{EmptyInput, GenerationError};
pub use fallback::{MAX_FALLBACK_BRANCHES, MAX_FALLBACK_LEAVES, fallback_tree};
pub use parse::{extract_json_object, parse_generated};
pub use request::{GenerationRequest, SourcePage};
pub use sequence::{GenerationSequence, Ticket};
