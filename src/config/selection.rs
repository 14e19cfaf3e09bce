//! The flip selection policy, as one structure of independent options.
//!
//! Clause-directed selection admits several small policy variations --- how the unsatisfied clause is chosen, when a zero-break flip is taken immediately, how ties among minimum-break atoms fall.
//! Rather than one selector per combination, a single [SelectionConfig] holds each axis as its own option, and each variation is a configuration.

/// The family of flip selectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selector {
    /// Full-scan steepest descent: every atom is evaluated, the best gain is committed.
    Gsat,

    /// Clause-directed search: an unsatisfied clause is chosen and one of its atoms is flipped, greedily or at random per the noise probability.
    Walk,
}

/// How the unsatisfied clause of a clause-directed flip is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseSelection {
    /// Uniformly at random among the unsatisfied clauses.
    Uniform,

    /// Uniformly at random within the community dominating the most unsatisfied clauses.
    ///
    /// Communities are ranked by the count of unsatisfied clauses they dominate, ties to the smallest id.
    /// Without a partition, or when no unsatisfied clause has a dominant community, selection falls back to uniform.
    CommunityRanked,
}

/// When a zero-break ('freebie') flip is taken immediately.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FreebieFilter {
    /// The first zero-break atom in clause order is always taken.
    Unrestricted,

    /// A zero-break atom is taken only if it is unaffiliated or shares the chosen clause's dominant community.
    ///
    /// A filtered atom remains a candidate for the greedy choice.
    SharedCommunity,
}

/// How ties among minimum-break atoms are broken.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TieBreak {
    /// Uniformly at random among the tied atoms.
    Uniform,

    /// The first tied atom in clause order.
    FirstSeen,
}

/// The flip selection policy of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionConfig {
    /// Which selector drives each flip.
    pub selector: Selector,

    /// How the unsatisfied clause is chosen, for clause-directed selectors.
    pub clause_selection: ClauseSelection,

    /// When a zero-break flip is taken immediately.
    pub freebie_filter: FreebieFilter,

    /// How ties among minimum-break atoms are broken.
    pub tie_break: TieBreak,

    /// Whether the greedy choice prefers atoms sharing the chosen clause's dominant community.
    ///
    /// Applied before the tie-break, and only when the narrowed candidate set is non-empty.
    pub community_tie_preference: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        SelectionConfig {
            selector: Selector::Walk,
            clause_selection: ClauseSelection::Uniform,
            freebie_filter: FreebieFilter::Unrestricted,
            tie_break: TieBreak::Uniform,
            community_tie_preference: false,
        }
    }
}
