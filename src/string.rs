/*
 * Copyright (c) 2019-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Plain text output of networks and augmenting paths.
//!
//! The tables of a graph are printed as matrices, one row per node, each
//! entry followed by two spaces.
//!
//! ```
//! use rs_maxflow::Graph;
//! use rs_maxflow::string::{capacities, edges};
//!
//! let g = Graph::<i32>::from_edges(3, &[(0, 1, 5), (2, 1, 12)]).unwrap();
//! assert_eq!(format!("{}", edges(&g)), "0  1  0  \n0  0  0  \n0  1  0  \n");
//! assert_eq!(format!("{}", capacities(&g)), "0  5  0  \n0  0  0  \n0  12  0  \n");
//! ```

use crate::graph::Graph;
use crate::maxflow::{Path, Step};
use crate::num::traits::NumAssign;

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Table {
    Edges,
    Capacities,
    Flows,
}

/// One of the tables of a graph formatted as a matrix.
pub struct Matrix<'a, F> {
    g: &'a Graph<F>,
    table: Table,
}

/// Return the edge table of `g`, `1` for existing edges, `0` otherwise.
pub fn edges<F>(g: &Graph<F>) -> Matrix<'_, F> {
    Matrix { g, table: Table::Edges }
}

/// Return the capacity table of `g`.
pub fn capacities<F>(g: &Graph<F>) -> Matrix<'_, F> {
    Matrix {
        g,
        table: Table::Capacities,
    }
}

/// Return the flow table of `g`.
pub fn flows<F>(g: &Graph<F>) -> Matrix<'_, F> {
    Matrix { g, table: Table::Flows }
}

impl<'a, F> fmt::Display for Matrix<'a, F>
where
    F: NumAssign + Ord + Copy + fmt::Display,
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let n = self.g.num_nodes();
        for u in 0..n {
            for v in 0..n {
                match self.table {
                    Table::Edges => write!(fmt, "{}  ", u8::from(self.g.has_edge(u, v)))?,
                    Table::Capacities => write!(fmt, "{}  ", self.g.capacity(u, v))?,
                    Table::Flows => write!(fmt, "{}  ", self.g.flow(u, v))?,
                }
            }
            writeln!(fmt)?;
        }
        Ok(())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let (u, v) = self.edge();
        write!(fmt, "{}{}->{}", if self.is_forward() { 'f' } else { 'b' }, u, v)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for (i, step) in self.iter().enumerate() {
            if i > 0 {
                write!(fmt, "  ")?;
            }
            write!(fmt, "{}", step)?;
        }
        Ok(())
    }
}
