// Copyright (c) 2016, 2017, 2018, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Visualizing the steps of a max-flow computation.
//!
//! A [`FlowDrawer`] is called by the solver with the current state of the
//! network whenever something notable happens. Drawers only get shared
//! access to the graph. Errors returned by a drawer are logged by the
//! solver and never stop the computation.

pub mod dot;

use crate::graph::Graph;
use crate::maxflow::Path;

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Error when producing a drawing.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error while drawing: {0}")]
    Io(#[from] io::Error),

    #[error("renderer '{program}' failed: {status}")]
    Renderer { program: String, status: ExitStatus },
}

pub type Result<T> = std::result::Result<T, Error>;

/// The points of the algorithm at which a drawing is added.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event<'a> {
    /// The network before the first augmentation.
    Initial,
    /// An augmenting path has been found, the flow is not yet changed.
    PathFound(&'a Path),
    /// The flow has been augmented along the latest path.
    FlowUpdated,
}

impl<'a> Event<'a> {
    /// Return the path to be highlighted, if any.
    pub fn path(&self) -> Option<&'a Path> {
        match *self {
            Event::PathFound(path) => Some(path),
            _ => None,
        }
    }
}

/// Trait for drawing sequences of flow networks.
pub trait FlowDrawer<F> {
    /// Add drawing of the current network.
    fn add_drawing(&mut self, g: &Graph<F>, event: Event) -> Result<()>;
}

/// A drawer that does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDrawer;

impl<F> FlowDrawer<F> for NoDrawer {
    fn add_drawing(&mut self, _g: &Graph<F>, _event: Event) -> Result<()> {
        Ok(())
    }
}

impl<'a, F, D> FlowDrawer<F> for &'a mut D
where
    D: FlowDrawer<F> + ?Sized,
{
    fn add_drawing(&mut self, g: &Graph<F>, event: Event) -> Result<()> {
        (**self).add_drawing(g, event)
    }
}
