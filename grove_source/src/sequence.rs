// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Identifies one generation request within a [`GenerationSequence`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    /// Position of the request in its sequence, starting at 1.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Orders generation requests so late answers to superseded requests can be
/// ignored.
///
/// Call [`begin`](Self::begin) when a request is started and keep the ticket
/// with it. When the answer arrives, apply it only if
/// [`is_current`](Self::is_current) still holds.
///
/// ```rust
/// use grove_source::GenerationSequence;
///
/// let mut seq = GenerationSequence::default();
/// let first = seq.begin();
/// let second = seq.begin();
/// assert!(!seq.is_current(first));
/// assert!(seq.is_current(second));
/// ```
#[derive(Clone, Debug, Default)]
pub struct GenerationSequence {
    latest: u64,
}

impl GenerationSequence {
    /// Creates a sequence with no requests.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, superseding every earlier ticket.
    pub fn begin(&mut self) -> Ticket {
        self.latest = self.latest.wrapping_add(1);
        Ticket(self.latest)
    }

    /// Returns `true` if `ticket` belongs to the most recent request.
    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest != 0 && ticket.0 == self.latest
    }

    /// The most recent ticket, if any request was started.
    #[must_use]
    pub fn latest(&self) -> Option<Ticket> {
        (self.latest != 0).then_some(Ticket(self.latest))
    }

    /// Invalidates every outstanding ticket without starting a new request.
    pub fn cancel(&mut self) {
        self.begin();
    }

    /// Retires `ticket` once its answer has been applied.
    ///
    /// Returns `true` if `ticket` was current; afterwards no ticket is
    /// current until the next [`begin`](Self::begin).
    pub fn finish(&mut self, ticket: Ticket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.cancel();
        true
    }
}
