//! Dependency graph construction and circular dependency detection.

use rustc_hash::FxHashSet;

use crate::interner::{NodeId, TaskIdInterner};
use crate::log_debug;
use crate::logging::VERBOSITY_SILENT;
use crate::models::TaskInput;

/// Tarjan discovery index of a node not reached yet.
const UNVISITED: usize = usize::MAX;

/// Dependency graph over the IDs present in one batch.
///
/// Edges point from a task to its predecessors. Dependencies naming IDs
/// outside the batch are dropped, so they never join a cycle or count toward
/// fan-out.
pub struct DependencyGraph<'a> {
    ids: TaskIdInterner<'a>,
    /// Predecessor edges, indexed by node.
    edges: Vec<Vec<NodeId>>,
    /// Number of dependency entries in the batch naming each node.
    blocks: Vec<usize>,
}

impl<'a> DependencyGraph<'a> {
    /// Build the graph for a batch.
    ///
    /// When several records share an ID, the last record's dependency list
    /// supplies that node's edges, but every record contributes to fan-out.
    pub fn from_tasks(tasks: &'a [TaskInput]) -> Self {
        let mut ids = TaskIdInterner::with_capacity(tasks.len());
        for task in tasks {
            ids.intern(&task.id);
        }

        let mut edges: Vec<Vec<NodeId>> = vec![Vec::new(); ids.len()];
        let mut blocks = vec![0usize; ids.len()];

        for task in tasks {
            let mut predecessors = Vec::with_capacity(task.dependencies.len());
            for dep in &task.dependencies {
                if let Some(dep_node) = ids.get(dep) {
                    predecessors.push(dep_node);
                    blocks[dep_node as usize] += 1;
                }
            }
            if let Some(node) = ids.get(&task.id) {
                edges[node as usize] = predecessors;
            }
        }

        Self { ids, edges, blocks }
    }

    /// Number of dependency entries in the batch that name `id`.
    ///
    /// This is the direct in-degree of the reversed graph, not transitive
    /// blocking.
    pub fn blocks_count(&self, id: &str) -> usize {
        self.ids
            .get(id)
            .map(|node| self.blocks[node as usize])
            .unwrap_or(0)
    }

    /// Number of distinct task IDs.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if the batch was empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Collect every ID lying on at least one directed cycle.
    ///
    /// A node is on a cycle exactly when its strongly connected component
    /// has more than one member or it depends on itself, so the result does
    /// not depend on which roots the traversal starts from. Components come
    /// from an iterative Tarjan pass: `path` is the explicit DFS stack as
    /// (node, next edge to follow) and `open` holds nodes whose component is
    /// not closed yet.
    pub fn cycle_members(&self, verbosity: u8) -> FxHashSet<String> {
        let n = self.ids.len();
        let mut index = vec![UNVISITED; n];
        let mut lowlink = vec![0usize; n];
        let mut on_open = vec![false; n];
        let mut on_cycle = vec![false; n];
        let mut open: Vec<NodeId> = Vec::new();
        let mut path: Vec<(NodeId, usize)> = Vec::new();
        let mut next_index = 0usize;

        for root in 0..n as NodeId {
            if index[root as usize] != UNVISITED {
                continue;
            }
            log_debug!(verbosity, "DFS root {:?}", self.ids.resolve(root));

            index[root as usize] = next_index;
            lowlink[root as usize] = next_index;
            next_index += 1;
            open.push(root);
            on_open[root as usize] = true;
            path.push((root, 0));

            while let Some(frame) = path.last_mut() {
                let node = frame.0;
                if let Some(&next) = self.edges[node as usize].get(frame.1) {
                    frame.1 += 1;
                    if index[next as usize] == UNVISITED {
                        index[next as usize] = next_index;
                        lowlink[next as usize] = next_index;
                        next_index += 1;
                        open.push(next);
                        on_open[next as usize] = true;
                        path.push((next, 0));
                    } else if on_open[next as usize] {
                        lowlink[node as usize] = lowlink[node as usize].min(index[next as usize]);
                    }
                    continue;
                }

                path.pop();
                if let Some(&(parent, _)) = path.last() {
                    lowlink[parent as usize] = lowlink[parent as usize].min(lowlink[node as usize]);
                }
                if lowlink[node as usize] != index[node as usize] {
                    continue;
                }

                // `node` closes a component: everything above it on `open`
                let start = open.iter().rposition(|&m| m == node).unwrap_or(0);
                let size = open.len() - start;
                let cyclic = size > 1 || self.edges[node as usize].contains(&node);
                if cyclic {
                    log_debug!(
                        verbosity,
                        "  component at {:?} is a cycle of {}",
                        self.ids.resolve(node),
                        size
                    );
                }
                for member in open.drain(start..) {
                    on_open[member as usize] = false;
                    on_cycle[member as usize] = cyclic;
                }
            }
        }

        on_cycle
            .iter()
            .enumerate()
            .filter(|(_, &member)| member)
            .map(|(node, _)| self.ids.resolve(node as NodeId).to_string())
            .collect()
    }
}

/// Return the IDs of all tasks that participate in a circular dependency.
pub fn detect_cycles(tasks: &[TaskInput]) -> FxHashSet<String> {
    DependencyGraph::from_tasks(tasks).cycle_members(VERBOSITY_SILENT)
}
