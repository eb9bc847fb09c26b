//! # Editable Fields
//!
//! State of one inline input: what the user typed, what the server last
//! confirmed, and where the current commit stands.
//!
//! Every commit that leaves the client gets a sequence number from
//! [`EditableField::begin_commit`]. A success is applied unless a newer
//! success was applied first, so the field always ends on the value the
//! server saved last. A failure only counts when it answers the latest
//! commit. Everything else is stale and is dropped by
//! [`EditableField::settle`].

use std::collections::BTreeMap;
use std::fmt::Display;

/// Why the last commit did not stick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitFailure {
    /// Rejected locally before any request was sent.
    Invalid(String),
    /// The server answered `success: false`.
    Rejected,
    /// No usable response arrived.
    Network,
}

impl Display for CommitFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommitFailure::Invalid(message) => f.write_str(message),
            CommitFailure::Rejected => f.write_str("rejected by server"),
            CommitFailure::Network => f.write_str("network failure"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitState {
    Idle,
    Saving,
    Failed(CommitFailure),
}

/// How a response was treated by [`EditableField::settle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciled {
    Applied,
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditableField<V> {
    input: String,
    confirmed: V,
    in_flight: BTreeMap<u64, V>,
    state: CommitState,
    seq: u64,
    applied: u64,
}

impl<V: Clone + Display> EditableField<V> {
    /// A field showing a server-rendered value.
    pub fn new(value: V) -> Self {
        Self {
            input: value.to_string(),
            confirmed: value,
            in_flight: BTreeMap::new(),
            state: CommitState::Idle,
            seq: 0,
            applied: 0,
        }
    }

    /// Text currently in the input, committed or not.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Last value the server accepted.
    pub fn confirmed(&self) -> &V {
        &self.confirmed
    }

    pub fn state(&self) -> &CommitState {
        &self.state
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Records input that failed local validation. No sequence number is
    /// consumed, so an in-flight commit can still settle.
    pub fn reject(&mut self, raw: impl Into<String>, message: impl Into<String>) {
        self.input = raw.into();
        self.state = CommitState::Failed(CommitFailure::Invalid(message.into()));
    }

    /// Starts a commit of `value` and returns its sequence number.
    pub fn begin_commit(&mut self, raw: impl Into<String>, value: V) -> u64 {
        self.input = raw.into();
        self.state = CommitState::Saving;
        self.seq += 1;
        self.in_flight.insert(self.seq, value);
        self.seq
    }

    /// Settles commit `seq`. `Err` carries the failure; the entered input is
    /// kept either way.
    ///
    /// The state only changes when `seq` is the latest commit. An older
    /// success still moves the confirmed value forward, since the server
    /// holds it until a newer commit succeeds.
    pub fn settle(&mut self, seq: u64, result: Result<(), CommitFailure>) -> Reconciled {
        let Some(value) = self.in_flight.remove(&seq) else {
            return Reconciled::Stale;
        };
        if seq <= self.applied {
            return Reconciled::Stale;
        }
        let latest = seq == self.seq;
        match result {
            Ok(()) => {
                self.confirmed = value;
                self.applied = seq;
                self.in_flight.retain(|pending, _| *pending > seq);
                if latest {
                    self.state = CommitState::Idle;
                }
            }
            Err(_) if !latest => return Reconciled::Stale,
            Err(failure) => self.state = CommitState::Failed(failure),
        }
        Reconciled::Applied
    }
}
