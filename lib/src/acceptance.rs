//! Credulous and skeptical acceptance queries, each offered in two forms: a
//! naive form built directly on [`enumerate`](crate::enumerate) (exhaustive,
//! always correct, exponential), and a fixed-point form built on
//! [`characteristic`](crate::characteristic) (cheap, sound, seeded from every
//! singleton argument).
//!
//! An argument is credulously accepted if *some* extension of the semantics
//! contains it, skeptically accepted if *every* extension does. A semantics
//! with no extensions at all (stable, on an odd cycle) makes skeptical
//! acceptance vacuously true for every argument — there is no witness to
//! contradict it.
use crate::characteristic::reach_fixed_point;
use crate::enumerate::{
    enumerate_complete, enumerate_complete_with_early_stop, enumerate_stable,
    enumerate_stable_with_early_stop,
};
use crate::graph::{ArgumentationFramework, Extension};
use crate::meter::Meter;

// ---- naive (enumeration-based) ----

/// Credulous acceptance stops the search the moment a witness containing
/// `arg` turns up, rather than enumerating every complete extension only to
/// throw away all but one.
pub fn credulous_complete_naive(af: &ArgumentationFramework, arg: usize, meter: &mut Meter) -> bool {
    enumerate_complete_with_early_stop(af, arg, meter).is_some()
}

/// Skeptical acceptance has no early exit: a counterexample could be the
/// last extension found, so every complete extension must be enumerated.
pub fn skeptical_complete_naive(af: &ArgumentationFramework, arg: usize, meter: &mut Meter) -> bool {
    enumerate_complete(af, meter).iter().all(|e| e.contains(arg))
}

pub fn credulous_stable_naive(af: &ArgumentationFramework, arg: usize, meter: &mut Meter) -> bool {
    enumerate_stable_with_early_stop(af, arg, meter).is_some()
}

pub fn skeptical_stable_naive(af: &ArgumentationFramework, arg: usize, meter: &mut Meter) -> bool {
    enumerate_stable(af, meter).iter().all(|e| e.contains(arg))
}

// ---- fixed-point ----

/// Fixed points reached from every singleton seed, deduplicated, keeping
/// only genuine complete extensions: conflict-free results that are also
/// fixed under one more application of F.
///
/// The original seeded-fixed-point search accepted whatever `F` converged to
/// without rechecking conflict-freeness; for a self-attacking seed that can
/// hand back a set that "looks" fixed but attacks itself. Guarding on
/// `conflict_free` here keeps every witness a genuine complete extension, as
/// required by `complete(E) <=> E = F(E) && conflict-free(E)`.
fn fixed_point_witnesses(af: &ArgumentationFramework, meter: &mut Meter) -> Vec<Extension> {
    let mut witnesses = Vec::new();
    for a in 0..af.len() {
        let candidate = reach_fixed_point(af, Extension::singleton(a), meter);
        if af.conflict_free(candidate) && af.complete(candidate) && !witnesses.contains(&candidate) {
            witnesses.push(candidate);
        }
    }
    witnesses
}

pub fn credulous_complete_fixed_point(
    af: &ArgumentationFramework,
    arg: usize,
    meter: &mut Meter,
) -> bool {
    fixed_point_witnesses(af, meter)
        .iter()
        .any(|e| e.contains(arg))
}

/// Skeptical acceptance can't be decided from a partial sample of witnesses
/// found by seeding (unlike credulous, missing a witness is not safe to
/// ignore), so this falls back to the grounded extension: an argument is in
/// every complete extension iff it's in the grounded one.
pub fn skeptical_complete_fixed_point(
    af: &ArgumentationFramework,
    arg: usize,
    meter: &mut Meter,
) -> bool {
    crate::characteristic::grounded(af, meter).contains(arg)
}

pub fn credulous_stable_fixed_point(
    af: &ArgumentationFramework,
    arg: usize,
    meter: &mut Meter,
) -> bool {
    fixed_point_witnesses(af, meter)
        .into_iter()
        .any(|e| af.stable(e) && e.contains(arg))
}

pub fn skeptical_stable_fixed_point(
    af: &ArgumentationFramework,
    arg: usize,
    meter: &mut Meter,
) -> bool {
    let stables: Vec<_> = fixed_point_witnesses(af, meter)
        .into_iter()
        .filter(|e| af.stable(*e))
        .collect();
    stables.is_empty() || stables.iter().all(|e| e.contains(arg))
}
