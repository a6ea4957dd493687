// Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Errors raised when building networks or computing flows.

use thiserror::Error;

/// Error for invalid networks or invalid max-flow problems.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("a network must have at least one node")]
    NoNodes,

    #[error("invalid node {node} (must be in 0..{num_nodes})")]
    NodeOutOfRange { node: usize, num_nodes: usize },

    #[error("source and sink node must not be equal (both are {0})")]
    SourceIsSink(usize),

    #[error("invalid loop ({0},{0})")]
    Loop(usize),

    #[error("duplicate edge ({0},{1})")]
    DuplicateEdge(usize, usize),

    #[error("edge ({0},{1}) is antiparallel to the existing edge ({1},{0})")]
    AntiParallel(usize, usize),

    #[error("capacity of edge ({0},{1}) must be positive")]
    NonPositiveCapacity(usize, usize),

    #[error("flow on edge ({0},{1}) is not between 0 and its capacity")]
    FlowOutOfBounds(usize, usize),

    #[error("too many nodes: {0}")]
    TooManyNodes(usize),

    #[error("inconsistent table sizes: expected {expected} entries, got {got}")]
    TableSize { expected: usize, got: usize },

    #[error("empty augmenting path")]
    EmptyPath,

    #[error("maximal capacity of a random network must be positive")]
    MaxCapacity,

    #[error("invalid edge probability {0} (must be in [0,1])")]
    Probability(f64),
}

pub type Result<T> = std::result::Result<T, Error>;
