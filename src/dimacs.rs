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

//! Reading and writing max-flow instances in DIMACS format.
//!
//! A DIMACS file must look as follows.
//!
//! 1. empty lines are allowed and ignored
//! 2. a line starting with `c` is a comment line and is ignored
//! 3. the first non-comment line must have the form `p max <n> <m>`,
//!    where `<n>` is an integer > 0 denoting the number of nodes and
//!    `<m>` an integer denoting the number of arcs.
//! 4. after the problem line there must follow exactly two node lines
//!    of the form `n <node> <type>` where `<node>` is the node number
//!    between `1..n` and `<type>` is either `s` (if this is the source
//!    node) or `t` (if this is the sink node).
//! 5. after the node lines there must be exactly `m` arc lines `a <u>
//!    <v> <c>` denoting the source and sink nodes of an arc as well as
//!    the arcs capacity `<c>` (an integer > 0).
//!
//! Loops, parallel and antiparallel arcs are rejected because the
//! network cannot represent them. Nodes are numbered from 1 in the file
//! and from 0 in the graph.

use crate::graph::Graph;
use crate::num::traits::NumAssign;

use std::fmt::Display;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::str::{FromStr, SplitWhitespace};
use thiserror::Error;

/// Error when reading a file in DIMACS format.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("Format error on line {line}: {msg}")]
    Format { line: usize, msg: String },

    #[error("Data error on line {line}: {msg}")]
    Data { line: usize, msg: String },

    #[error("Invalid network on line {line}: {source}")]
    Graph {
        line: usize,
        #[source]
        source: crate::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// A max-flow problem.
#[derive(Clone, Debug)]
pub struct Instance<F> {
    /// The network.
    pub graph: Graph<F>,
    /// The source node.
    pub src: usize,
    /// The sink node.
    pub snk: usize,
}

struct DimacsReader<R: Read> {
    io: BufReader<R>,
    line: String,
    line_number: usize,
}

impl<R: Read> DimacsReader<R> {
    fn new(reader: R) -> Self {
        DimacsReader {
            io: BufReader::new(reader),
            line: String::new(),
            line_number: 0,
        }
    }

    // Return the tokens of the next non-comment, non-empty line.
    fn read_line(&mut self) -> Result<Option<Tokens<'_>>> {
        loop {
            self.line.clear();
            if self.io.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let trimmed = self.line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('c') {
                continue;
            }
            return Ok(Some(Tokens {
                it: self.line.split_whitespace(),
                line: self.line_number,
            }));
        }
    }

    // Expect a line with the given descriptor and return its *remaining* tokens.
    fn expect_line(&mut self, descriptor: &str) -> Result<Tokens<'_>> {
        let line_number = self.line_number;
        let mut toks = self.read_line()?.ok_or_else(|| Error::Format {
            line: line_number,
            msg: format!("unexpected end of file, expected '{}' line", descriptor),
        })?;
        let d = toks.str()?;
        if d == descriptor {
            Ok(toks)
        } else {
            Err(Error::Format {
                line: toks.line,
                msg: format!("unexpected line, expected '{}', got '{}'", descriptor, d),
            })
        }
    }
}

/// Iterates over the tokens in a line.
struct Tokens<'a> {
    it: SplitWhitespace<'a>,
    line: usize,
}

impl<'a> Tokens<'a> {
    fn expect(&mut self, tok: &str) -> Result<()> {
        let nxt = self.str()?;
        if nxt == tok {
            Ok(())
        } else {
            Err(Error::Format {
                line: self.line,
                msg: format!("expected '{}', got '{}'", tok, nxt),
            })
        }
    }

    fn str(&mut self) -> Result<&'a str> {
        self.it.next().ok_or_else(|| Error::Format {
            line: self.line,
            msg: "expected token".to_string(),
        })
    }

    fn number<T>(&mut self) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let line = self.line;
        self.str()?.parse().map_err(|e| Error::Format {
            line,
            msg: format!("{}", e),
        })
    }

    // Read a 1-based node number and return the 0-based node.
    fn node(&mut self, num_nodes: usize) -> Result<usize> {
        let u: usize = self.number()?;
        if u < 1 || u > num_nodes {
            return Err(Error::Data {
                line: self.line,
                msg: format!("invalid node id {} (must be in 1..{})", u, num_nodes),
            });
        }
        Ok(u - 1)
    }

    fn end(&mut self) -> Result<()> {
        if let Some(s) = self.it.next() {
            Err(Error::Format {
                line: self.line,
                msg: format!("unexpected token at end of line: {}", s),
            })
        } else {
            Ok(())
        }
    }
}

/// Read a max-flow instance.
pub fn read<R, F>(r: R) -> Result<Instance<F>>
where
    R: Read,
    F: NumAssign + Ord + Copy + FromStr,
    F::Err: Display,
{
    let mut reader = DimacsReader::new(r);

    // Read the problem line.
    let mut pline = reader.expect_line("p")?;
    pline.expect("max")?;
    let nnodes: usize = pline.number()?;
    let nedges: usize = pline.number()?;
    pline.end()?;

    let mut graph = Graph::new(nnodes).map_err(|source| Error::Graph {
        line: pline.line,
        source,
    })?;
    let mut src = None;
    let mut snk = None;

    for _ in 0..2 {
        let mut nline = reader.expect_line("n")?;
        let u = nline.node(nnodes)?;
        let what = nline.str()?;
        let slot = match what {
            "s" => &mut src,
            "t" => &mut snk,
            _ => {
                return Err(Error::Format {
                    line: nline.line,
                    msg: format!("invalid node type, must be 's' or 't', got: {}", what),
                });
            }
        };
        if slot.is_some() {
            return Err(Error::Format {
                line: nline.line,
                msg: format!("duplicate {} node", if what == "s" { "source" } else { "sink" }),
            });
        }
        *slot = Some(u);
        nline.end()?;
    }

    for _ in 0..nedges {
        let mut aline = reader.expect_line("a")?;
        let u = aline.node(nnodes)?;
        let v = aline.node(nnodes)?;
        let c: F = aline.number()?;
        aline.end()?;
        graph.add_edge(u, v, c).map_err(|source| Error::Graph {
            line: aline.line,
            source,
        })?;
    }

    if let Some(toks) = reader.read_line()? {
        return Err(Error::Format {
            line: toks.line,
            msg: format!(
                "unexpected line at the end of file (expected exactly {} 'a' lines)",
                nedges,
            ),
        });
    }

    match (src, snk) {
        (Some(src), Some(snk)) => Ok(Instance { graph, src, snk }),
        _ => Err(Error::Format {
            line: reader.line_number,
            msg: "missing source or sink node".to_string(),
        }),
    }
}

pub fn read_from_file<F>(filename: &str) -> Result<Instance<F>>
where
    F: NumAssign + Ord + Copy + FromStr,
    F::Err: Display,
{
    read(std::fs::File::open(filename)?)
}

/// Write a max-flow instance.
pub fn write<W, F>(mut w: W, instance: &Instance<F>) -> io::Result<()>
where
    W: Write,
    F: NumAssign + Ord + Copy + Display,
{
    let g = &instance.graph;
    writeln!(w, "p max {} {}", g.num_nodes(), g.num_edges())?;
    writeln!(w, "n {} s", instance.src + 1)?;
    writeln!(w, "n {} t", instance.snk + 1)?;
    for (u, v) in g.edges() {
        writeln!(w, "a {} {} {}", u + 1, v + 1, g.capacity(u, v))?;
    }
    Ok(())
}

/// Write a max-flow instance to a named file.
pub fn write_to_file<F>(filename: &str, instance: &Instance<F>) -> io::Result<()>
where
    F: NumAssign + Ord + Copy + Display,
{
    write(io::BufWriter::new(std::fs::File::create(filename)?), instance)
}
