//! Error type shared by the priority queues and the search algorithms.
//!
//! Every variant is a precondition violation: the caller handed the core an
//! input it cannot answer correctly. An unreachable vertex is *not* an error
//! on its own; it only becomes one when a path to it is requested.

use thiserror::Error;

/// Errors reported by `waypoint`.
///
/// Vertex keys are rendered with `Debug` so the enum stays independent of the
/// vertex domain that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `pop` was called on an empty priority queue.
    #[error("empty heap")]
    EmptyHeap,

    /// An edge with a cost below zero reached an algorithm that requires
    /// non-negative weights.
    #[error("negative edge weight on {from} -> {to}")]
    NegativeWeight {
        /// Tail of the offending edge.
        from: String,
        /// Head of the offending edge.
        to: String,
    },

    /// The bounded bucket search saw a weight outside `[0, limit)`.
    #[error("edge weight on {from} -> {to} is outside [0, {limit})")]
    WeightOutOfRange {
        /// Tail of the offending edge.
        from: String,
        /// Head of the offending edge.
        to: String,
        /// Number of buckets the search was configured with.
        limit: usize,
    },

    /// The bounded bucket search was asked to run with zero buckets.
    #[error("bucket search needs at least one bucket")]
    InvalidBucketCount,

    /// Adding an edge weight to a tentative cost overflowed the cost type.
    #[error("cost overflow relaxing {from} -> {to}")]
    CostOverflow {
        /// Tail of the offending edge.
        from: String,
        /// Head of the offending edge.
        to: String,
    },

    /// A path was requested to a vertex the search never reached.
    #[error("vertex {target} was not reached from the source")]
    Unreachable {
        /// The unreached vertex.
        target: String,
    },
}

impl Error {
    pub(crate) fn negative_weight<K: core::fmt::Debug>(from: &K, to: &K) -> Self {
        Self::NegativeWeight {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    pub(crate) fn weight_out_of_range<K: core::fmt::Debug>(from: &K, to: &K, limit: usize) -> Self {
        Self::WeightOutOfRange {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
            limit,
        }
    }

    pub(crate) fn cost_overflow<K: core::fmt::Debug>(from: &K, to: &K) -> Self {
        Self::CostOverflow {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    pub(crate) fn unreachable<K: core::fmt::Debug>(target: &K) -> Self {
        Self::Unreachable {
            target: format!("{target:?}"),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
