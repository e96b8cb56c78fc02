//! Array reconciliation.
//!
//! The two arrays are aligned with [`diff_blocks`]. Inside each changed run
//! the k-th removed element is paired with the k-th added element and becomes
//! a replace (refined recursively); whatever is left over is a pure removal or
//! a pure insertion, unless move detection pairs an equal removal and
//! insertion into a move.
//!
//! Operations are emitted in four groups: removals, insertions, replaces,
//! moves. Indices are computed against the array as it stands after all
//! earlier operations:
//!
//! - after the removals the array holds every kept, replaced and move-source
//!   element in original order;
//! - insertions land at their final position in that sequence (`slots`);
//! - replaces address their slot in the same sequence;
//! - moves run in ascending target order. Each move source carries an
//!   `anchor`, the number of non-source elements before it, from which its
//!   current index and the index of its target are derived.

use json_delta_pointer::{child, format_json_pointer};
use serde_json::Value;
use tracing::trace;

use super::{diff_value, DiffContext};
use crate::json_patch::types::Op;
use crate::util_inner::diff::seq::{diff_blocks, Block};

/// One element of the array after removals and insertions, before moves.
enum Slot {
    /// Unchanged element.
    Keep,
    /// Left element refined into the right one in place.
    Replace { left: usize, right: usize },
    /// Left element that will be moved to right index `target`.
    Source { target: usize },
    /// Right element inserted as is.
    Insert { right: usize },
}

struct MoveSource {
    anchor: usize,
    target: usize,
    settled: bool,
}

pub(super) fn diff_array<'a>(
    ctx: &mut DiffContext<'a>,
    path: &[String],
    left: &'a [Value],
    right: &'a [Value],
) {
    match (left.len(), right.len()) {
        (0, 0) => return,
        (0, _) => {
            for (i, value) in right.iter().enumerate() {
                ctx.ops.push(Op::Add { path: child(path, i), value: value.clone() });
            }
            return;
        }
        (_, 0) => {
            ctx.ops.push(Op::Replace { path: path.to_vec(), value: Value::Array(Vec::new()) });
            return;
        }
        (1, 1) => {
            diff_value(ctx, &child(path, 0), &left[0], Some(&right[0]));
            return;
        }
        _ => {}
    }

    let oracle = &mut ctx.oracle;
    let blocks: Vec<Block> = diff_blocks(left.len(), right.len(), move |i, j| {
        oracle.equal(&left[i], &right[j])
    })
    .collect();

    // Leftovers of changed runs once the in-place pairs are taken.
    let mut removed = Vec::new();
    let mut added = Vec::new();
    for block in &blocks {
        if let Block::Changed { old, new } = block {
            let paired = old.len().min(new.len());
            removed.extend(old.start + paired..old.end);
            added.extend(new.start + paired..new.end);
        }
    }

    let mut move_target: Vec<Option<usize>> = vec![None; left.len()];
    let mut is_target = vec![false; right.len()];
    if ctx.detect_moves {
        for &l in &removed {
            let found = added
                .iter()
                .position(|&r| !is_target[r] && ctx.oracle.equal(&left[l], &right[r]));
            if let Some(pos) = found {
                let r = added.remove(pos);
                move_target[l] = Some(r);
                is_target[r] = true;
            }
        }
    }

    let mut slots = Vec::with_capacity(right.len());
    let mut removals = Vec::new();
    for block in &blocks {
        match block {
            Block::Same { old, .. } => slots.extend(old.clone().map(|_| Slot::Keep)),
            Block::Changed { old, new } => {
                let paired = old.len().min(new.len());
                for k in 0..paired {
                    slots.push(Slot::Replace { left: old.start + k, right: new.start + k });
                }
                for l in old.start + paired..old.end {
                    match move_target[l] {
                        Some(target) => slots.push(Slot::Source { target }),
                        None => removals.push(l),
                    }
                }
                for r in new.start + paired..new.end {
                    if !is_target[r] {
                        slots.push(Slot::Insert { right: r });
                    }
                }
            }
        }
    }

    trace!(
        path = %format_json_pointer(path),
        left_len = left.len(),
        right_len = right.len(),
        blocks = blocks.len(),
        removals = removals.len(),
        "array diff"
    );

    for (done, &l) in removals.iter().enumerate() {
        ctx.ops.push(Op::Remove { path: child(path, l - done) });
    }

    for (idx, slot) in slots.iter().enumerate() {
        if let Slot::Insert { right: r } = slot {
            ctx.ops.push(Op::Add { path: child(path, idx), value: right[*r].clone() });
        }
    }

    for (idx, slot) in slots.iter().enumerate() {
        if let Slot::Replace { left: l, right: r } = slot {
            diff_value(ctx, &child(path, idx), &left[*l], Some(&right[*r]));
        }
    }

    let mut sources = Vec::new();
    let mut fixed = 0;
    for slot in &slots {
        match slot {
            Slot::Source { target } => sources.push(MoveSource {
                anchor: fixed,
                target: *target,
                settled: false,
            }),
            _ => fixed += 1,
        }
    }
    let mut order: Vec<usize> = (0..sources.len()).collect();
    order.sort_by_key(|&s| sources[s].target);
    for s in order {
        let from = sources[s].anchor + sources[..s].iter().filter(|src| !src.settled).count();
        sources[s].settled = true;
        let target = sources[s].target;
        let to = target
            + sources
                .iter()
                .filter(|src| !src.settled && src.anchor < target)
                .count();
        for src in sources.iter_mut().filter(|src| !src.settled && src.anchor >= target) {
            src.anchor += 1;
        }
        if from != to {
            ctx.ops.push(Op::Move { path: child(path, to), from: child(path, from) });
        }
    }
}
