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

//! Maximum flow algorithms.
//!
//! The flow is computed by repeatedly searching a shortest augmenting path
//! in the residual network ([`bfs`]), computing its bottleneck and sending
//! that much flow along it ([`path`]) until no augmenting path is left
//! ([`edmondskarp`]).

pub mod bfs;
pub use self::bfs::{augmenting_path, ResidualBfs};

pub mod path;
pub use self::path::{augment, bottleneck, Path, Step};

pub mod edmondskarp;
pub use self::edmondskarp::{edmondskarp, max_flow, max_flow_with, EdmondsKarp};
