//! Reader for the DIMACS shortest-path graph format (`.gr`).
//!
//! Line-oriented records: `c ...` comments, one `p sp <nodes> <edges>`
//! header, and `a <from> <to> <weight>` arcs. Node ids are 1-based, which
//! matches the adjacency list's reserved slot 0.
//!
//! All validation happens here or in graph construction; a graph that loads
//! successfully is safe to run the algorithms on.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::graph::{AdjacencyList, Graph};
use crate::{Error, Result};

fn malformed(line: usize, message: impl Into<String>) -> Error {
    Error::MalformedGraph {
        line,
        message: message.into(),
    }
}

fn parse_field<T: std::str::FromStr>(field: &str, line: usize, what: &str) -> Result<T> {
    field
        .parse()
        .map_err(|_| malformed(line, format!("cannot parse {what} from {field:?}")))
}

/// Reads a DIMACS `.gr` graph from any buffered reader.
pub fn read_gr<R: BufRead>(reader: R) -> Result<AdjacencyList<i64>> {
    let mut graph: Option<AdjacencyList<i64>> = None;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let mut fields = line.split_whitespace();

        match fields.next() {
            None | Some("c") => continue,
            Some("p") => {
                if graph.is_some() {
                    return Err(malformed(line_no, "duplicate problem line"));
                }
                let kind = fields
                    .next()
                    .ok_or_else(|| malformed(line_no, "problem line missing type"))?;
                if kind != "sp" {
                    return Err(malformed(line_no, format!("unsupported problem type {kind:?}")));
                }
                let nodes: usize = parse_field(
                    fields
                        .next()
                        .ok_or_else(|| malformed(line_no, "problem line missing node count"))?,
                    line_no,
                    "node count",
                )?;
                // The declared edge count is informational only.
                graph = Some(AdjacencyList::with_vertices(nodes));
            }
            Some("a") => {
                let graph = graph
                    .as_mut()
                    .ok_or_else(|| malformed(line_no, "arc record before problem line"))?;
                let mut arc_field = |what| {
                    fields
                        .next()
                        .ok_or_else(|| malformed(line_no, format!("arc record missing {what}")))
                };
                let from: usize = parse_field(arc_field("source")?, line_no, "arc source")?;
                let to: usize = parse_field(arc_field("target")?, line_no, "arc target")?;
                let weight: i64 = parse_field(arc_field("weight")?, line_no, "arc weight")?;
                graph.add_edge(from, to, weight)?;
            }
            Some(other) => {
                return Err(malformed(line_no, format!("unknown record type {other:?}")));
            }
        }
    }

    graph.ok_or_else(|| malformed(0, "no problem line found"))
}

/// Reads a DIMACS `.gr` graph from a file.
pub fn read_gr_file<P: AsRef<Path>>(path: P) -> Result<AdjacencyList<i64>> {
    let file = File::open(path.as_ref())?;
    let graph = read_gr(BufReader::new(file))?;
    info!(
        "loaded {}: {} nodes, {} edges",
        path.as_ref().display(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}
