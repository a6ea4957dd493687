// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

#![forbid(unsafe_code)]

//! Maximum flows in dense capacitated networks.
//!
//! The maximum flow is computed with the algorithm of Edmonds-Karp, i.e. by
//! repeatedly augmenting along shortest paths of the residual network.
//!
//! ```
//! use rs_maxflow::{max_flow, Graph};
//!
//! let mut g = Graph::from_edges(4, &[(0, 1, 5), (0, 2, 3), (1, 3, 4), (2, 3, 6)]).unwrap();
//! assert_eq!(max_flow(&mut g, 0, 3).unwrap(), 7);
//! assert!(max_flow(&mut g, 3, 3).is_err());
//! ```

mod num {
    pub use num_traits as traits;
}

// # Data structures

pub mod error;
pub use self::error::{Error, Result};

pub mod graph;
pub use self::graph::Graph;

// # Algorithms

pub mod maxflow;
pub use self::maxflow::{edmondskarp, max_flow, max_flow_with, EdmondsKarp};

pub mod generate;

// # Drawing

pub mod draw;
pub mod string;

#[cfg(feature = "dimacs")]
pub mod dimacs;
