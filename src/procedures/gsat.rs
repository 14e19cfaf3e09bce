//! Steepest descent by full scan.
//!
//! Each call evaluates a flip of *every* atom of the formula and commits the flip with the greatest gain, where the gain of a flip is the change it would make to the satisfied-clause count.
//! Ties go to the lowest atom, as the scan meets it first.
//!
//! Two details keep the descent moving:
//!
//! - The scan short-circuits: a flip which would satisfy every clause is committed the moment it is seen.
//! - The best flip is committed even at zero or negative gain, as sideways and downhill moves are the only way off a plateau.
//!
//! Each evaluation is a read-only delta over the flipped atom's occurrence lists, so a call costs O(*n* · avg degree) --- each flip is as good as a flip can be, at the price of a scan clause-directed search avoids.

use crate::{
    context::GenericContext,
    misc::log::targets,
    procedures::FlipOutcome,
    structures::atom::Atom,
};

impl<R: rand::Rng> GenericContext<'_, R> {
    /// Commits a flip of an atom with the greatest gain, scanning every atom.
    ///
    /// Assumes some clause is unsatisfied, as [solve](crate::procedures::solve) has already checked the current valuation.
    pub fn gsat_flip(&mut self) -> FlipOutcome {
        let formula = self.formula;
        let clause_count = formula.clause_count();
        let satisfied = self.score_db.satisfied_count();

        let mut best: Option<(Atom, isize)> = None;

        for atom in 1..=formula.atom_count() {
            let delta = self.score_db.flip_delta(formula, atom);

            if satisfied - delta.breaks + delta.makes == clause_count {
                self.score_db.flip(formula, atom);
                log::trace!(target: targets::SELECTION, "Flip of {atom} satisfies the formula");
                return FlipOutcome::Solved;
            }

            let gain = delta.makes as isize - delta.breaks as isize;
            match best {
                Some((_, best_gain)) if best_gain >= gain => {}
                _ => best = Some((atom, gain)),
            }
        }

        let chosen = match best {
            Some((atom, gain)) => {
                log::trace!(target: targets::SELECTION, "Flip of {atom} for a gain of {gain}");
                atom
            }

            // No atom was attributed by the scan, so any atom is as good as any other.
            None => self.rng.random_range(1..=formula.atom_count()),
        };

        self.score_db.flip(formula, chosen);
        FlipOutcome::Flipped
    }
}
