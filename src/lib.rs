//! Decides whether a non-empty subset of a sorted integer sequence sums to a
//! target, and recovers one such subset, using a reachable-sum table.

pub mod subset;
