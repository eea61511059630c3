//! Dependency graph construction.
//!
//! This module derives the evaluation structure of a circuit from the gates' input
//! lists. It provides:
//! 1. **Fan-in resolution:** Each gate's input ids resolved to arena positions.
//! 2. **Adjacency:** Forward edges `input -> dependent`, with in-degree counts.
//! 3. **Ordering:** Kahn's algorithm, plus a registration-order tail for gates caught in cycles.
//! 4. **Cycle detection:** An independent depth-first search used for diagnostics.

use std::collections::{HashMap, VecDeque};

use super::gate::Gate;
use crate::common::SimError;

/// Derived graph structure of a circuit.
///
/// Built from scratch by [`Topology::build`]; any structural change to the circuit
/// invalidates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Topology {
    /// Resolved input positions per gate, in declaration order.
    pub fanin: Vec<Vec<usize>>,
    /// Forward edges per gate: the positions of the gates that read its output.
    pub adjacency: Vec<Vec<usize>>,
    /// Number of incoming edges per gate.
    pub in_degree: Vec<usize>,
    /// Evaluation order. When `cyclic`, only the first `sorted_len` entries are a
    /// topological order; the remainder follows registration order.
    pub order: Vec<usize>,
    /// Length of the prefix of `order` produced by Kahn's algorithm.
    pub sorted_len: usize,
    /// True iff Kahn's algorithm could not order every gate.
    pub cyclic: bool,
}

impl Topology {
    /// Builds the graph for `gates`, resolving references through `index`.
    ///
    /// # Arguments
    ///
    /// * `gates` - The gate arena, in registration order.
    /// * `index` - Map from gate id to arena position.
    ///
    /// # Errors
    ///
    /// Returns `SimError::UnknownInputRef` for the first reference that does not resolve.
    pub fn build(gates: &[Gate], index: &HashMap<String, usize>) -> Result<Self, SimError> {
        let n = gates.len();
        let mut fanin = Vec::with_capacity(n);
        let mut adjacency = vec![Vec::new(); n];
        let mut in_degree = vec![0usize; n];

        for (pos, gate) in gates.iter().enumerate() {
            let mut resolved = Vec::with_capacity(gate.input_refs.len());
            for input in &gate.input_refs {
                let &src = index.get(input).ok_or_else(|| SimError::UnknownInputRef {
                    gate: gate.id.clone(),
                    input: input.clone(),
                })?;
                adjacency[src].push(pos);
                in_degree[pos] += 1;
                resolved.push(src);
            }
            fanin.push(resolved);
        }

        let (order, sorted_len) = kahn_order(&adjacency, &in_degree);

        Ok(Self {
            fanin,
            adjacency,
            in_degree,
            order,
            sorted_len,
            cyclic: sorted_len < n,
        })
    }

    /// Total number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Reports whether the graph contains a cycle.
    ///
    /// Depth-first search with an on-stack flag per node; stops at the first back
    /// edge. The walk is iterative so deep netlists cannot overflow the call stack.
    pub fn has_cycle(&self) -> bool {
        let n = self.adjacency.len();
        let mut visited = vec![false; n];
        let mut on_stack = vec![false; n];
        // (node, next successor slot to visit)
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for root in 0..n {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            on_stack[root] = true;
            stack.push((root, 0));

            while let Some(frame) = stack.last_mut() {
                let node = frame.0;
                if let Some(&succ) = self.adjacency[node].get(frame.1) {
                    frame.1 += 1;
                    if on_stack[succ] {
                        return true;
                    }
                    if !visited[succ] {
                        visited[succ] = true;
                        on_stack[succ] = true;
                        stack.push((succ, 0));
                    }
                } else {
                    on_stack[node] = false;
                    let _ = stack.pop();
                }
            }
        }
        false
    }
}

/// Kahn's algorithm over `adjacency`.
///
/// Returns the evaluation order and the length of its topologically sorted prefix.
/// Nodes left with a non-zero in-degree are appended in ascending position order.
fn kahn_order(adjacency: &[Vec<usize>], in_degree: &[usize]) -> (Vec<usize>, usize) {
    let n = adjacency.len();
    let mut remaining = in_degree.to_vec();
    let mut queue: VecDeque<usize> = (0..n).filter(|&i| remaining[i] == 0).collect();
    let mut order = Vec::with_capacity(n);

    while let Some(u) = queue.pop_front() {
        order.push(u);
        for &v in &adjacency[u] {
            remaining[v] -= 1;
            if remaining[v] == 0 {
                queue.push_back(v);
            }
        }
    }

    let sorted_len = order.len();
    if sorted_len < n {
        let mut placed = vec![false; n];
        for &i in &order {
            placed[i] = true;
        }
        order.extend((0..n).filter(|&i| !placed[i]));
    }
    (order, sorted_len)
}
