// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

/// Why a generated map could not be used.
///
/// Every variant is recoverable: [`build_tree`](crate::build_tree) answers all
/// of them with the fallback map.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The service could not be reached or reported a failure.
    #[error("generation service failed: {0}")]
    Transport(String),
    /// The service did not answer in time.
    #[error("generation timed out after {0:?}")]
    Timeout(Duration),
    /// The response contained no `{ ... }` object at all.
    #[error("response contains no JSON object")]
    NoJson,
    /// The extracted object is not valid JSON.
    #[error("response is not a valid map: {0}")]
    InvalidJson(#[from] serde_json::Error),
    /// A required field is absent or blank.
    #[error("response is missing `{0}`")]
    MissingField(&'static str),
    /// No branch survived validation.
    #[error("response contains no usable branches")]
    NoBranches,
}

/// Returned when a map is requested for a document without pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no source pages to build a map from")]
pub struct EmptyInput;
