// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::{Coordinate, Edge, Node};

/// Represents a set of [Nodes](Node) and [Edges](Edge) between them.
///
/// Nodes live in an arena indexed by their id, so ids are always dense and
/// start at zero. Nodes can only be appended, never removed or moved.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Vec<Edge>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph without any edges, with one [Node] per position.
    /// Node ids follow the order of `positions`.
    pub fn from_positions<I: IntoIterator<Item = Coordinate>>(positions: I) -> Self {
        let mut g = Self::new();
        for position in positions {
            g.add_node(position);
        }
        g
    }

    /// Returns the number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of directed edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    /// Returns an iterator over all [Nodes](Node) in the graph, in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Returns `true` if a [Node] with the provided id exists.
    pub fn contains(&self, id: usize) -> bool {
        id < self.nodes.len()
    }

    /// Retrieves a [Node] with the provided id.
    pub fn get_node(&self, id: usize) -> Option<Node> {
        self.nodes.get(id).copied()
    }

    /// Appends a new [Node] at the given position and returns its id.
    pub fn add_node(&mut self, position: Coordinate) -> usize {
        let id = self.nodes.len();
        self.nodes.push(Node { id, position });
        self.edges.push(Vec::default());
        id
    }

    /// Gets all outgoing [Edges](Edge) from a node with a given id.
    pub fn get_edges(&self, from_id: usize) -> &[Edge] {
        self.edges
            .get(from_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Gets the weight of an [Edge] from one node to another, if such an edge exists.
    pub fn get_edge(&self, from_id: usize, to_id: usize) -> Option<u32> {
        self.get_edges(from_id)
            .iter()
            .find(|e| e.to == to_id)
            .map(|e| e.weight)
    }

    /// Creates or updates an [Edge] from a node with a given id.
    ///
    /// Both endpoints must exist in the graph.
    pub fn set_edge(&mut self, from_id: usize, edge: Edge) {
        assert!(self.contains(from_id), "invalid node: {}", from_id);
        assert!(self.contains(edge.to), "invalid node: {}", edge.to);

        let edges = &mut self.edges[from_id];
        if let Some(candidate) = edges.iter_mut().find(|e| e.to == edge.to) {
            *candidate = edge;
        } else {
            edges.push(edge);
        }
    }

    /// Creates or updates a pair of [Edges](Edge) with the same weight,
    /// one in each direction between `a` and `b`.
    pub fn connect(&mut self, a: usize, b: usize, weight: u32) {
        self.set_edge(a, Edge { to: b, weight });
        self.set_edge(b, Edge { to: a, weight });
    }
}
