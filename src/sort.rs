//! Topological ordering of one library.
//!
//! The traversal follows "required by" edges: visiting an item first visits
//! every item that depends on it, then places the item at the front of the
//! output. Seeding the walk from the items in reverse name order therefore
//! yields dependencies before dependents, and a library with no dependencies
//! comes out in plain name order.
//!
//! An item met again while it is still on the walk stack closes a cycle, which
//! is fatal for the whole build.
//!
//! The walk keeps its own stack instead of recursing, so long dependency
//! chains cannot exhaust the call stack.

use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::graph::LibraryGraph;
use crate::library::Fragment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    Visiting,
    Emitted,
}

/// One pending item on the walk stack and the next dependent to visit.
struct Frame {
    item: usize,
    next: usize,
}

/// Order the items of `graph` so each comes after everything it depends on.
///
/// Returns indices into the library's fragments.
pub fn order(graph: &LibraryGraph<'_>) -> Result<Vec<usize>> {
    let mut states = vec![VisitState::Unvisited; graph.len()];
    let mut output = VecDeque::with_capacity(graph.len());
    let mut stack: Vec<Frame> = Vec::new();

    for root in (0..graph.len()).rev() {
        if states[root] != VisitState::Unvisited {
            continue;
        }

        enter(graph, &mut states, &mut stack, root)?;

        while let Some(frame) = stack.last_mut() {
            let dependents = graph.required_by(frame.item);
            if let Some(&dependent) = dependents.get(frame.next) {
                frame.next += 1;
                enter(graph, &mut states, &mut stack, dependent)?;
            } else {
                let item = frame.item;
                stack.pop();
                states[item] = VisitState::Emitted;
                output.push_front(item);
            }
        }
    }

    Ok(output.into())
}

/// Start visiting `item` unless it is already emitted.
fn enter(
    graph: &LibraryGraph<'_>,
    states: &mut [VisitState],
    stack: &mut Vec<Frame>,
    item: usize,
) -> Result<()> {
    match states[item] {
        VisitState::Emitted => Ok(()),
        VisitState::Visiting => {
            let library = graph.library();
            Err(Error::CyclicDependency {
                item: library.fragments()[item].name.clone(),
                library: library.name().to_string(),
            })
        }
        VisitState::Unvisited => {
            states[item] = VisitState::Visiting;
            stack.push(Frame { item, next: 0 });
            Ok(())
        }
    }
}

/// Order `graph` and return the fragments themselves.
pub fn sorted_fragments<'a>(graph: &LibraryGraph<'a>) -> Result<Vec<&'a Fragment>> {
    let fragments = graph.library().fragments();
    Ok(order(graph)?
        .into_iter()
        .map(|index| &fragments[index])
        .collect())
}
