/*!
The score database --- the mutable state of one try, supporting O(deg) flips.

The database holds, for some valuation over the atoms of a formula:

- The valuation itself.
- For each clause, a count of the literals of the clause which evaluate to true ('the score of the clause').
- A running count of the satisfied clauses (those with a score above zero).
- The set of unsatisfied clauses, as a sparse set: a dense vector of clause indices paired with a position index, so membership updates are O(1) and a uniformly random unsatisfied clause is O(1).

# Invariants

Between any two operations:

- The score of each clause equals a from-scratch count of its true literals under the valuation.
- The satisfied count equals the number of clauses with a score above zero.
- The unsatisfied set holds exactly the clauses with a score of zero.

[flip](ScoreDB::flip) is the sole mutator of the counts, and preserves all three by walking the two occurrence lists of the flipped atom: clauses losing their last true literal are broken, clauses gaining their first true literal are made.
[rebuild](ScoreDB::rebuild) establishes the invariants from scratch in O(*m*·*k*), and is called only when a try begins --- the only full recompute in a search.

[flip_delta](ScoreDB::flip_delta) answers 'what would a flip do?' without doing it: a read-only walk over the same occurrence lists, counting the clauses at the relevant thresholds.
In particular the *break count* of an atom --- how many satisfied clauses a flip of the atom would break --- is always computed on demand, never stored.

The audit behind the invariants is kept as [consistent_with](ScoreDB::consistent_with), for use in debug assertions and tests.
A violation is an internal contract failure, never something to recover from.
*/

use rand::Rng;

use crate::{
    misc::log::targets,
    structures::{
        atom::Atom,
        clause::Clause,
        formula::{ClauseIndex, Formula},
        literal::{CLiteral, Literal},
        valuation::CValuation,
    },
};

/// The effect a flip of some atom would have, counted without committing the flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlipDelta {
    /// Clauses which would lose their last true literal.
    pub breaks: usize,

    /// Clauses which would gain their first true literal.
    pub makes: usize,
}

/// The mutable state of one try: a valuation and the satisfaction counts it induces.
pub struct ScoreDB {
    /// The current valuation, index zero padding.
    valuation: CValuation,

    /// For each clause, the count of its literals which evaluate to true.
    scores: Vec<u32>,

    /// The count of clauses with a score above zero.
    satisfied_count: usize,

    /// The clauses with a score of zero, in no particular order.
    unsatisfied: Vec<ClauseIndex>,

    /// For each clause, the position of the clause in `unsatisfied`, if the clause is there.
    unsatisfied_positions: Vec<Option<u32>>,
}

impl ScoreDB {
    /// A database for the given formula over an all-false valuation.
    pub fn empty(formula: &Formula) -> Self {
        let mut the_db = Self {
            valuation: vec![false; formula.atom_count() as usize + 1],
            scores: vec![0; formula.clause_count()],
            satisfied_count: 0,
            unsatisfied: Vec::default(),
            unsatisfied_positions: vec![None; formula.clause_count()],
        };
        the_db.rebuild(formula);
        the_db
    }

    /// Redraws the valuation uniformly at random and rebuilds the counts, beginning a fresh try.
    pub fn randomize(&mut self, formula: &Formula, rng: &mut impl Rng) {
        for value in self.valuation.iter_mut().skip(1) {
            *value = rng.random::<bool>();
        }
        self.rebuild(formula);
    }

    /// Establishes the counts from scratch for the current valuation.
    fn rebuild(&mut self, formula: &Formula) {
        self.satisfied_count = 0;
        self.unsatisfied.clear();
        self.unsatisfied_positions.fill(None);

        for (index, clause) in formula.clauses().enumerate() {
            let score = clause
                .literals()
                .filter(|literal| self.valuation[literal.atom() as usize] == literal.polarity())
                .count() as u32;

            self.scores[index] = score;
            match score {
                0 => self.note_unsatisfied(index as ClauseIndex),
                _ => self.satisfied_count += 1,
            }
        }

        log::trace!(target: targets::SCORE_DB,
            "Rebuilt: {}/{} clauses satisfied", self.satisfied_count, self.scores.len());
    }

    /// Toggles the value of the given atom and updates every count, in O(deg) time.
    ///
    /// The sole mutator of the scores, the satisfied count, and the unsatisfied set.
    pub fn flip(&mut self, formula: &Formula, atom: Atom) {
        let polarity = self.valuation[atom as usize];
        self.valuation[atom as usize] = !polarity;

        // Clauses of the literal true before the toggle lose a true literal…
        for index in formula.occurrences(CLiteral::new(atom, polarity)) {
            self.scores[*index as usize] -= 1;
            if self.scores[*index as usize] == 0 {
                self.satisfied_count -= 1;
                self.note_unsatisfied(*index);
            }
        }

        // …and clauses of the literal true after the toggle gain one.
        for index in formula.occurrences(CLiteral::new(atom, !polarity)) {
            if self.scores[*index as usize] == 0 {
                self.satisfied_count += 1;
                self.note_satisfied(*index);
            }
            self.scores[*index as usize] += 1;
        }
    }

    /// The break count of the given atom: the count of satisfied clauses a flip of the atom would break.
    ///
    /// Computed on demand by a read-only walk of the occurrence list of the atom's currently-true literal.
    pub fn break_count(&self, formula: &Formula, atom: Atom) -> usize {
        let the_literal = CLiteral::new(atom, self.valuation[atom as usize]);
        formula
            .occurrences(the_literal)
            .iter()
            .filter(|index| self.scores[**index as usize] == 1)
            .count()
    }

    /// The effect a flip of the given atom would have, without committing the flip.
    ///
    /// The satisfied count after such a flip is `satisfied_count() - breaks + makes`.
    pub fn flip_delta(&self, formula: &Formula, atom: Atom) -> FlipDelta {
        let the_negation = CLiteral::new(atom, !self.valuation[atom as usize]);
        let makes = formula
            .occurrences(the_negation)
            .iter()
            .filter(|index| self.scores[**index as usize] == 0)
            .count();

        FlipDelta {
            breaks: self.break_count(formula, atom),
            makes,
        }
    }

    /// The count of clauses with a score above zero.
    pub fn satisfied_count(&self) -> usize {
        self.satisfied_count
    }

    /// The clauses with a score of zero, in no particular order.
    pub fn unsatisfied_clauses(&self) -> &[ClauseIndex] {
        &self.unsatisfied
    }

    /// The current value of the given atom.
    pub fn value_of(&self, atom: Atom) -> bool {
        self.valuation[atom as usize]
    }

    /// The current valuation.
    pub fn valuation(&self) -> &CValuation {
        &self.valuation
    }

    /// Whether every count agrees with a from-scratch recount under the current valuation.
    ///
    /// The audit behind the database invariants; any violation is an internal contract failure.
    pub fn consistent_with(&self, formula: &Formula) -> bool {
        let mut satisfied = 0;

        for (index, clause) in formula.clauses().enumerate() {
            let recount = clause
                .literals()
                .filter(|literal| self.valuation[literal.atom() as usize] == literal.polarity())
                .count() as u32;

            if self.scores[index] != recount {
                return false;
            }

            match recount {
                0 => {
                    let Some(position) = self.unsatisfied_positions[index] else {
                        return false;
                    };
                    if self.unsatisfied.get(position as usize) != Some(&(index as ClauseIndex)) {
                        return false;
                    }
                }
                _ => {
                    satisfied += 1;
                    if self.unsatisfied_positions[index].is_some() {
                        return false;
                    }
                }
            }
        }

        self.satisfied_count == satisfied
            && self.unsatisfied.len() == formula.clause_count() - satisfied
    }

    /// Adds the given clause to the unsatisfied set.
    fn note_unsatisfied(&mut self, clause: ClauseIndex) {
        self.unsatisfied_positions[clause as usize] = Some(self.unsatisfied.len() as u32);
        self.unsatisfied.push(clause);
    }

    /// Removes the given clause from the unsatisfied set, by swapping the last member into its place.
    fn note_satisfied(&mut self, clause: ClauseIndex) {
        let position = match self.unsatisfied_positions[clause as usize].take() {
            Some(position) => position as usize,
            None => unreachable!("score db: clause {clause} missing from the unsatisfied set"),
        };

        self.unsatisfied.swap_remove(position);
        if let Some(moved) = self.unsatisfied.get(position) {
            self.unsatisfied_positions[*moved as usize] = Some(position as u32);
        }
    }
}

#[cfg(test)]
mod score_tests {
    use super::*;
    use crate::structures::clause::CClause;

    fn clause(literals: &[i32]) -> CClause {
        literals.iter().map(CLiteral::from).collect()
    }

    fn fixed_db(formula: &Formula, values: &[bool]) -> ScoreDB {
        let mut the_db = ScoreDB::empty(formula);
        for (atom, value) in values.iter().enumerate().skip(1) {
            if the_db.value_of(atom as Atom) != *value {
                the_db.flip(formula, atom as Atom);
            }
        }
        the_db
    }

    fn small_formula() -> Formula {
        Formula::new(
            3,
            vec![
                clause(&[1, 2]),
                clause(&[-1, 2]),
                clause(&[1, -2]),
                clause(&[-2, 3]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn rebuild_counts_from_scratch() {
        let formula = small_formula();
        let the_db = ScoreDB::empty(&formula);

        // All false: clause 0 unsatisfied, the rest hold a negative literal.
        assert_eq!(the_db.satisfied_count(), 3);
        assert_eq!(the_db.unsatisfied_clauses(), &[0]);
        assert!(the_db.consistent_with(&formula));
    }

    #[test]
    fn flips_track_recounts() {
        let formula = small_formula();
        let mut the_db = ScoreDB::empty(&formula);

        for atom in [1, 2, 3, 2, 1] {
            the_db.flip(&formula, atom);
            assert!(the_db.consistent_with(&formula));
        }
    }

    #[test]
    fn flip_is_an_involution() {
        let formula = small_formula();
        let mut the_db = fixed_db(&formula, &[false, true, false, true]);

        for atom in 1..=formula.atom_count() {
            let valuation_before = the_db.valuation().clone();
            let scores_before = the_db.scores.clone();
            let satisfied_before = the_db.satisfied_count();

            the_db.flip(&formula, atom);
            the_db.flip(&formula, atom);

            assert_eq!(the_db.valuation(), &valuation_before);
            assert_eq!(the_db.scores, scores_before);
            assert_eq!(the_db.satisfied_count(), satisfied_before);
        }
    }

    #[test]
    fn delta_agrees_with_commitment() {
        let formula = small_formula();
        for values in [
            [false, false, false, false],
            [false, true, false, true],
            [false, true, true, false],
            [false, false, true, true],
        ] {
            let mut the_db = fixed_db(&formula, &values);

            for atom in 1..=formula.atom_count() {
                let delta = the_db.flip_delta(&formula, atom);
                let predicted = the_db.satisfied_count() - delta.breaks + delta.makes;

                the_db.flip(&formula, atom);
                assert_eq!(the_db.satisfied_count(), predicted);
                the_db.flip(&formula, atom);
            }
        }
    }

    #[test]
    fn duplicate_literals_keep_a_clause_off_threshold() {
        let formula = Formula::new(2, vec![clause(&[1, 1]), clause(&[1, 2])]).unwrap();
        let the_db = fixed_db(&formula, &[false, true, false]);

        // Clause 0 scores two for its duplicated literal, so only clause 1 is at threshold.
        assert_eq!(the_db.break_count(&formula, 1), 1);
    }
}
