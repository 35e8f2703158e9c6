//! The characteristic function F and its fixed-point iteration.
//!
//! `F(S)` is the set of arguments `S` defends. Its fixed points are exactly
//! the complete extensions (spec invariant: `complete(E) <=> E = F(E) &&
//! conflict-free(E)`); the least fixed point, reached from the empty set, is
//! the grounded extension.
use crate::graph::{ArgumentationFramework, Extension};
use crate::meter::Meter;

/// `F(ext)`: every argument defended by `ext`.
pub fn characteristic(af: &ArgumentationFramework, ext: Extension) -> Extension {
    (0..af.len()).filter(|&a| af.defends(a, ext)).collect()
}

/// Iterate `F` from `seed` until it stabilizes, ticking `meter` once per
/// application.
///
/// `F` is monotone, so from any seed the sequence `seed, F(seed), F(F(seed)),
/// ...` is non-decreasing in cardinality and must stabilize within
/// `af.len() + 1` steps; that bound is used as a hard cap rather than trusted
/// blindly.
pub fn reach_fixed_point(af: &ArgumentationFramework, seed: Extension, meter: &mut Meter) -> Extension {
    let mut current = seed;
    for _ in 0..=af.len() {
        meter.tick();
        let next = characteristic(af, current);
        if next == current {
            return current;
        }
        current = next;
    }
    current
}

/// The grounded extension: the least fixed point of `F`, reached from the
/// empty set.
pub fn grounded(af: &ArgumentationFramework, meter: &mut Meter) -> Extension {
    reach_fixed_point(af, Extension::EMPTY, meter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn grounded_of_empty_framework_is_empty() {
        let af = ArgumentationFramework::new();
        let mut meter = Meter::new();
        assert_eq!(grounded(&af, &mut meter), Extension::EMPTY);
    }

    #[test]
    fn unattacked_argument_is_in_the_grounded_extension() {
        let mut af = ArgumentationFramework::new();
        af.add_argument("a").unwrap();
        af.add_argument("b").unwrap();
        af.add_attack("a", "b").unwrap();
        let a = af.index_of("a").unwrap();
        let mut meter = Meter::new();
        assert!(grounded(&af, &mut meter).contains(a));
    }

    #[test]
    fn odd_cycle_grounds_to_the_empty_set() {
        let mut af = ArgumentationFramework::new();
        for name in ["a", "b", "c"] {
            af.add_argument(name).unwrap();
        }
        af.add_attack("a", "b").unwrap();
        af.add_attack("b", "c").unwrap();
        af.add_attack("c", "a").unwrap();
        let mut meter = Meter::new();
        assert_eq!(grounded(&af, &mut meter), Extension::EMPTY);
    }

    #[test]
    fn defense_chain_of_three_grounds_to_a_defends_c_but_not_b() {
        let mut af = ArgumentationFramework::new();
        for name in ["a", "b", "c"] {
            af.add_argument(name).unwrap();
        }
        af.add_attack("b", "c").unwrap();
        af.add_attack("a", "b").unwrap();
        let (a, c) = (af.index_of("a").unwrap(), af.index_of("c").unwrap());
        let mut meter = Meter::new();
        assert_eq!(grounded(&af, &mut meter), Extension::EMPTY.inserting(a).inserting(c));
    }
}
