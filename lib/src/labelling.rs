//! Three-valued labellings: every argument is `in`, `out`, or `undec`.
//!
//! A complete labelling's `in` set is always exactly the grounded extension,
//! computed directly by forced propagation with no search at all — the
//! grounded labelling is provably complete, so there is nothing to guess.
//! A stable labelling leaves nothing `undec`; finding one means searching,
//! starting from the same forced propagation and backtracking over only the
//! arguments propagation couldn't resolve on its own.
use crate::graph::{ArgumentationFramework, Extension};
use crate::meter::Meter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    In,
    Out,
    Undec,
}

/// A full labelling of an argumentation framework's arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labelling {
    in_set: Extension,
    out_set: Extension,
}

impl Labelling {
    pub fn label(&self, arg: usize) -> Label {
        if self.in_set.contains(arg) {
            Label::In
        } else if self.out_set.contains(arg) {
            Label::Out
        } else {
            Label::Undec
        }
    }

    pub fn in_set(&self) -> Extension {
        self.in_set
    }

    pub fn out_set(&self) -> Extension {
        self.out_set
    }
}

/// Derive every label forced by what's already known: an undecided argument
/// becomes `in` once all its attackers are `out`, `out` once some attacker is
/// `in`. Repeats until nothing changes. Never contradicts an already-set
/// label, so this never needs to report failure.
fn propagate(
    af: &ArgumentationFramework,
    mut in_set: Extension,
    mut out_set: Extension,
    meter: &mut Meter,
) -> (Extension, Extension) {
    loop {
        meter.tick();
        let mut changed = false;
        for a in 0..af.len() {
            if in_set.contains(a) || out_set.contains(a) {
                continue;
            }
            let attackers = af.attackers_of(a);
            if attackers & !out_set.mask() == 0 {
                in_set = in_set.inserting(a);
                changed = true;
            } else if attackers & in_set.mask() != 0 {
                out_set = out_set.inserting(a);
                changed = true;
            }
        }
        if !changed {
            return (in_set, out_set);
        }
    }
}

/// The complete labelling: always the grounded labelling, always succeeds.
pub fn labelling_complete(af: &ArgumentationFramework, meter: &mut Meter) -> Labelling {
    let (in_set, out_set) = propagate(af, Extension::EMPTY, Extension::EMPTY, meter);
    Labelling { in_set, out_set }
}

/// A stable labelling, if one exists: propagate what's forced, then
/// backtrack over whatever arguments are left undecided, re-propagating
/// after each guess so later guesses only have to resolve what's still
/// genuinely open.
pub fn labelling_stable(af: &ArgumentationFramework, meter: &mut Meter) -> Option<Labelling> {
    let (in0, out0) = propagate(af, Extension::EMPTY, Extension::EMPTY, meter);
    let undec: Vec<usize> = (0..af.len())
        .filter(|&a| !in0.contains(a) && !out0.contains(a))
        .collect();
    search(af, in0, out0, &undec, 0, meter)
}

fn search(
    af: &ArgumentationFramework,
    in_set: Extension,
    out_set: Extension,
    undec: &[usize],
    pos: usize,
    meter: &mut Meter,
) -> Option<Labelling> {
    if !af.conflict_free(in_set) {
        return None;
    }
    if pos == undec.len() {
        meter.tick();
        return af.stable(in_set).then_some(Labelling { in_set, out_set });
    }
    let arg = undec[pos];
    let (in1, out1) = propagate(af, in_set.inserting(arg), out_set, meter);
    let remaining = &undec[pos + 1..];
    let still_undec: Vec<usize> = remaining
        .iter()
        .copied()
        .filter(|&a| !in1.contains(a) && !out1.contains(a))
        .collect();
    if let Some(found) = search(af, in1, out1, &still_undec, 0, meter) {
        return Some(found);
    }
    let (in2, out2) = propagate(af, in_set, out_set.inserting(arg), meter);
    let still_undec: Vec<usize> = remaining
        .iter()
        .copied()
        .filter(|&a| !in2.contains(a) && !out2.contains(a))
        .collect();
    search(af, in2, out2, &still_undec, 0, meter)
}
