//! Backtracking subset-search over the argument universe: enumerate every
//! extension satisfying a semantics, or stop at the first one found.
//!
//! Conflict-freeness is monotone under the subset order a branch is built
//! in — once the current partial assignment contains a conflict, no
//! superset can cure it — so the search prunes there rather than walking
//! every descendant down to a full assignment.
use crate::graph::{ArgumentationFramework, Extension};
use crate::meter::Meter;

/// Every complete extension, in the order the search discovers them.
pub fn enumerate_complete(af: &ArgumentationFramework, meter: &mut Meter) -> Vec<Extension> {
    let mut out = Vec::new();
    search(af, 0, Extension::EMPTY, meter, &mut out, ArgumentationFramework::complete);
    out
}

/// Every stable extension, in the order the search discovers them.
pub fn enumerate_stable(af: &ArgumentationFramework, meter: &mut Meter) -> Vec<Extension> {
    let mut out = Vec::new();
    search(af, 0, Extension::EMPTY, meter, &mut out, ArgumentationFramework::stable);
    out
}

/// The first complete extension the search finds, if any.
pub fn find_one_complete(af: &ArgumentationFramework, meter: &mut Meter) -> Option<Extension> {
    find_one(af, meter, ArgumentationFramework::complete)
}

/// The first stable extension the search finds, if any.
pub fn find_one_stable(af: &ArgumentationFramework, meter: &mut Meter) -> Option<Extension> {
    find_one(af, meter, ArgumentationFramework::stable)
}

/// The first complete extension containing `target`, aborting the search as
/// soon as one is found. Used by credulous-complete acceptance, where the
/// witness itself is thrown away and only its existence matters.
pub fn enumerate_complete_with_early_stop(
    af: &ArgumentationFramework,
    target: usize,
    meter: &mut Meter,
) -> Option<Extension> {
    find_one_rec(af, 0, Extension::EMPTY, meter, move |af, ext| {
        ext.contains(target) && af.complete(ext)
    })
}

/// The first stable extension containing `target`, aborting the search as
/// soon as one is found.
pub fn enumerate_stable_with_early_stop(
    af: &ArgumentationFramework,
    target: usize,
    meter: &mut Meter,
) -> Option<Extension> {
    find_one_rec(af, 0, Extension::EMPTY, meter, move |af, ext| {
        ext.contains(target) && af.stable(ext)
    })
}

fn search<F>(
    af: &ArgumentationFramework,
    idx: usize,
    current: Extension,
    meter: &mut Meter,
    out: &mut Vec<Extension>,
    predicate: F,
) where
    F: Fn(&ArgumentationFramework, Extension) -> bool + Copy,
{
    if !af.conflict_free(current) {
        return;
    }
    if idx == af.len() {
        meter.tick();
        if predicate(af, current) {
            out.push(current);
        }
        return;
    }
    search(af, idx + 1, current, meter, out, predicate);
    search(af, idx + 1, current.inserting(idx), meter, out, predicate);
}

fn find_one<F>(af: &ArgumentationFramework, meter: &mut Meter, predicate: F) -> Option<Extension>
where
    F: Fn(&ArgumentationFramework, Extension) -> bool + Copy,
{
    find_one_rec(af, 0, Extension::EMPTY, meter, predicate)
}

fn find_one_rec<F>(
    af: &ArgumentationFramework,
    idx: usize,
    current: Extension,
    meter: &mut Meter,
    predicate: F,
) -> Option<Extension>
where
    F: Fn(&ArgumentationFramework, Extension) -> bool + Copy,
{
    if !af.conflict_free(current) {
        return None;
    }
    if idx == af.len() {
        meter.tick();
        return predicate(af, current).then_some(current);
    }
    find_one_rec(af, idx + 1, current, meter, predicate)
        .or_else(|| find_one_rec(af, idx + 1, current.inserting(idx), meter, predicate))
}
