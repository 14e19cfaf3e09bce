//! Clause-directed search, with optional community bias.
//!
//! Each call picks one unsatisfied clause and flips one of its atoms --- any such flip satisfies the chosen clause, so the question is only which atom does the least damage elsewhere.
//! The damage of an atom is its *break count*: the count of satisfied clauses its flip would break.
//!
//! The atom is chosen in three stages:
//!
//! 1. *Freebie*: a zero-break atom satisfies the clause for free, and the first such atom in clause order is committed at once.
//!    With a [SharedCommunity](FreebieFilter::SharedCommunity) filter an atom affiliated to some other community than the clause's dominant community is passed over here, though it remains a candidate below.
//! 2. *Noise*: with the configured probability, a uniformly random atom of the clause is committed, greediness aside.
//! 3. *Greedy*: an atom with the minimum break count is committed.
//!    When the community preference is set the minimum-break candidates are first narrowed to those sharing the clause's dominant community (if any remain), and ties are then broken per the configured [TieBreak].
//!
//! As every stage touches only the atoms of one clause, a call costs O(clause length · avg degree) --- independent of the formula size, which is the point of directing the search by clause.
//!
//! # Choosing the clause
//!
//! Under [uniform](ClauseSelection::Uniform) selection the clause is drawn uniformly from the unsatisfied set.
//!
//! Under [community-ranked](ClauseSelection::CommunityRanked) selection the unsatisfied clauses are grouped by dominant community, and the clause is drawn uniformly from the group of the community dominating the most unsatisfied clauses (ties to the smallest id).
//! The intuition: a community rich in unsatisfied clauses is a region of the formula the valuation gets wrong, and flips there are more likely to settle it as a whole.
//! When no unsatisfied clause has a dominant community --- or no partition was supplied --- selection falls back to uniform.

use crate::{
    community::{CommunityId, Partition},
    config::{ClauseSelection, FreebieFilter, TieBreak},
    context::GenericContext,
    misc::log::targets,
    procedures::FlipOutcome,
    structures::{
        atom::Atom,
        clause::Clause,
        formula::ClauseIndex,
        literal::Literal,
    },
};

impl<R: rand::Rng> GenericContext<'_, R> {
    /// Commits a flip of one atom of one unsatisfied clause.
    ///
    /// Assumes some clause is unsatisfied, as [solve](crate::procedures::solve) has already checked the current valuation.
    pub fn walk_flip(&mut self) -> FlipOutcome {
        let formula = self.formula;
        let the_clause_index = self.select_unsatisfied_clause();
        let the_clause = formula.clause(the_clause_index);
        let dominant = self
            .partition
            .and_then(|partition| partition.dominant_community(the_clause_index));

        // Break counts for the atoms of the clause, in clause order.
        let mut candidates: Vec<(Atom, usize)> = Vec::with_capacity(the_clause.size());
        let mut minimum = usize::MAX;

        for literal in the_clause.literals() {
            let atom = literal.atom();
            let breaks = self.score_db.break_count(formula, atom);

            if breaks == 0 && self.freebie_permitted(atom, dominant) {
                log::trace!(target: targets::SELECTION,
                    "Freebie flip of {atom} for clause {the_clause_index}");
                return self.commit(atom);
            }

            minimum = std::cmp::min(minimum, breaks);
            candidates.push((atom, breaks));
        }

        // Noise: a uniformly random atom of the clause.
        if self.rng.random_bool(self.config.noise.value) {
            let (atom, _) = candidates[self.rng.random_range(0..candidates.len())];
            log::trace!(target: targets::SELECTION,
                "Noise flip of {atom} for clause {the_clause_index}");
            return self.commit(atom);
        }

        // Greedy: a minimum-break atom.
        let mut pool: Vec<Atom> = candidates
            .iter()
            .filter(|(_, breaks)| *breaks == minimum)
            .map(|(atom, _)| *atom)
            .collect();

        if self.config.selection.community_tie_preference {
            if let (Some(dominant), Some(partition)) = (dominant, self.partition) {
                let narrowed: Vec<Atom> = pool
                    .iter()
                    .copied()
                    .filter(|atom| partition.community_of(*atom) == Some(dominant))
                    .collect();
                if !narrowed.is_empty() {
                    pool = narrowed;
                }
            }
        }

        let chosen = match self.config.selection.tie_break {
            TieBreak::FirstSeen => pool[0],
            TieBreak::Uniform => pool[self.rng.random_range(0..pool.len())],
        };

        log::trace!(target: targets::SELECTION,
            "Greedy flip of {chosen} ({minimum} breaks) for clause {the_clause_index}");
        self.commit(chosen)
    }

    /// Commits a flip of the given atom, noting whether the formula is now satisfied.
    fn commit(&mut self, atom: Atom) -> FlipOutcome {
        self.score_db.flip(self.formula, atom);
        match self.score_db.satisfied_count() == self.formula.clause_count() {
            true => FlipOutcome::Solved,
            false => FlipOutcome::Flipped,
        }
    }

    /// Whether the freebie filter permits an immediate flip of the given atom.
    fn freebie_permitted(&self, atom: Atom, dominant: Option<CommunityId>) -> bool {
        match self.config.selection.freebie_filter {
            FreebieFilter::Unrestricted => true,

            FreebieFilter::SharedCommunity => {
                let community = self
                    .partition
                    .and_then(|partition| partition.community_of(atom));
                match (dominant, community) {
                    (Some(dominant), Some(community)) => community == dominant,
                    // An unaffiliated atom, or a clause with no dominant community, is never filtered.
                    _ => true,
                }
            }
        }
    }

    /// An unsatisfied clause, chosen per the configured clause selection.
    fn select_unsatisfied_clause(&mut self) -> ClauseIndex {
        let partition = self.partition;
        let selection = self.config.selection.clause_selection;

        let Self { score_db, rng, .. } = self;

        let unsatisfied = score_db.unsatisfied_clauses();
        debug_assert!(
            !unsatisfied.is_empty(),
            "selection: no unsatisfied clause to direct the search"
        );

        if let (ClauseSelection::CommunityRanked, Some(partition)) = (selection, partition) {
            if let Some(index) = community_ranked_choice(unsatisfied, partition, rng) {
                return index;
            }
        }

        unsatisfied[rng.random_range(0..unsatisfied.len())]
    }
}

/// A clause drawn uniformly from the group of the community dominating the most unsatisfied clauses.
///
/// None if no unsatisfied clause has a dominant community.
fn community_ranked_choice<R: rand::Rng>(
    unsatisfied: &[ClauseIndex],
    partition: &Partition,
    rng: &mut R,
) -> Option<ClauseIndex> {
    let mut counts = vec![0_usize; partition.community_bound()];
    let mut affiliated = false;

    for clause in unsatisfied {
        if let Some(community) = partition.dominant_community(*clause) {
            counts[community as usize] += 1;
            affiliated = true;
        }
    }

    if !affiliated {
        return None;
    }

    // The community dominating the most unsatisfied clauses, ties to the smallest id.
    let mut ranked: Option<(CommunityId, usize)> = None;
    for (community, count) in counts.iter().enumerate() {
        if *count > 0 {
            match ranked {
                Some((_, best)) if best >= *count => {}
                _ => ranked = Some((community as CommunityId, *count)),
            }
        }
    }
    let (the_community, the_count) = ranked?;

    log::trace!(target: targets::SELECTION,
        "Community {the_community} dominates {the_count} unsatisfied clauses");

    // Uniform among the clauses the community dominates.
    let mut choice = rng.random_range(0..the_count);
    for clause in unsatisfied {
        if partition.dominant_community(*clause) == Some(the_community) {
            match choice {
                0 => return Some(*clause),
                _ => choice -= 1,
            }
        }
    }

    unreachable!("selection: ranked community lost its clauses")
}
