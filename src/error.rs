use thiserror::Error;

/// The error returned when an iterator is advanced past its last entry.
///
/// Running out of entries is part of the normal `Iterator` protocol, so
/// `Iterator::next` simply returns `None`. This error is only produced by the
/// explicit `try_next` methods, where asking for another entry after `has_next`
/// reported `false` is a bug in the caller.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
#[error("iteration exhausted: no entries remain")]
pub struct IterationExhausted;
