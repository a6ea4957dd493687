/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Augmenting paths in the residual network.

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::num::traits::NumAssign;

use std::cmp::min;
use std::slice::Iter as SliceIter;

/// A step of an augmenting path.
///
/// Both variants hold the edge `(u,v)` as it is stored in the graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// Push flow along the edge `(u,v)` from `u` to `v`.
    Forward(usize, usize),
    /// Cancel flow on the edge `(u,v)`, i.e. move from `v` to `u`.
    Backward(usize, usize),
}

impl Step {
    /// Return the graph edge this step uses.
    pub fn edge(&self) -> (usize, usize) {
        match *self {
            Step::Forward(u, v) | Step::Backward(u, v) => (u, v),
        }
    }

    /// Return `true` if this is a forward step.
    pub fn is_forward(&self) -> bool {
        matches!(self, Step::Forward(..))
    }

    /// Return the node at which the step starts.
    pub fn tail(&self) -> usize {
        match *self {
            Step::Forward(u, _) => u,
            Step::Backward(_, v) => v,
        }
    }

    /// Return the node at which the step ends.
    pub fn head(&self) -> usize {
        match *self {
            Step::Forward(_, v) => v,
            Step::Backward(u, _) => u,
        }
    }

    /// Return the residual capacity of this step in `g`.
    pub fn residual<F>(&self, g: &Graph<F>) -> F
    where
        F: NumAssign + Ord + Copy,
    {
        match *self {
            Step::Forward(u, v) => g.capacity(u, v) - g.flow(u, v),
            Step::Backward(u, v) => g.flow(u, v),
        }
    }
}

/// An augmenting path from the source to the sink.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    steps: Vec<Step>,
}

impl Path {
    pub fn new(steps: Vec<Step>) -> Self {
        Path { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn iter(&self) -> SliceIter<'_, Step> {
        self.steps.iter()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Return `true` if some step of the path uses the edge `(u,v)`.
    pub fn contains_edge(&self, u: usize, v: usize) -> bool {
        self.steps.iter().any(|s| s.edge() == (u, v))
    }

    /// Return `true` if the path cancels flow on some edge.
    pub fn has_backward(&self) -> bool {
        self.steps.iter().any(|s| !s.is_forward())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Step;
    type IntoIter = SliceIter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Return the maximal amount of flow that can be sent along `path`.
///
/// This is the minimum of the residual capacities of all steps. The path
/// must not be empty.
pub fn bottleneck<F>(g: &Graph<F>, path: &Path) -> Result<F>
where
    F: NumAssign + Ord + Copy,
{
    let mut steps = path.iter();
    let first = steps.next().ok_or(Error::EmptyPath)?;
    Ok(steps.fold(first.residual(g), |df, s| min(df, s.residual(g))))
}

/// Send `df` units of flow along `path`.
///
/// The flow is increased on forward steps and decreased on backward
/// steps. `df` must not exceed the bottleneck of the path.
pub fn augment<F>(g: &mut Graph<F>, path: &Path, df: F)
where
    F: NumAssign + Ord + Copy,
{
    for &step in path {
        match step {
            Step::Forward(u, v) => g.adjust_flow(u, v, df),
            Step::Backward(u, v) => g.cancel_flow(u, v, df),
        }
    }

    debug_assert!(path.iter().all(|s| {
        let (u, v) = s.edge();
        g.flow(u, v) >= F::zero() && g.flow(u, v) <= g.capacity(u, v)
    }));
}
