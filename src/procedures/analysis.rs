/*!
Analysis of a conflict, to learn a clause asserting some literal at a previous level.

# Overview

Analysis takes a clause falsified on the current valuation, and resolves the clause with the reasons of literals valued at the current level, in reverse trail order, until exactly one literal of the resolvent was valued at the current level.
The negation of that literal is the first unique implication point ('UIP') of the conflict, and the resolvent asserts the UIP after a backjump to the highest level of any other literal in the resolvent.

Rather than building each intermediate resolvent, analysis marks the atoms seen and counts the literals at the current level which remain to be resolved.
Literals valued at level zero are dropped, as their negations hold regardless of any decision.

The learnt clause places the asserted literal at index 0 and a literal from the backjump level at index 1, so the clause is ready to be watched.

# Activity

The activity of each atom seen during analysis is bumped, and the bump is scaled after each analysis.
*/

use crate::{
    context::GenericContext,
    db::{ClauseKey, LevelIndex},
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause},
        literal::CLiteral,
    },
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Analyses the conflict on the clause with the given key, returning a clause asserting the negation of the first UIP and the level to backjump to.
    pub fn conflict_analysis(&mut self, key: ClauseKey) -> Result<(CClause, LevelIndex), ErrorKind> {
        let current_level = self.trail.current_level();

        let mut seen = vec![false; self.atom_db.count()];
        // Index 0 is reserved for the asserted literal.
        let mut learnt: CClause = vec![CLiteral::new(0, false)];

        let mut open = 0_usize;
        let mut reason = key;
        let mut pivot: Option<CLiteral> = None;
        let mut trail_index = self.trail.literals().len();

        loop {
            let clause = self.clause_db.get(&reason)?;
            log::trace!(target: targets::ANALYSIS, "Resolving with {}", clause.as_string());

            for literal in clause.iter() {
                if pivot.is_some_and(|pivot| pivot.atom() == literal.atom()) {
                    continue;
                }

                let atom = literal.atom();
                if seen[atom as usize] {
                    continue;
                }

                let level = match self.atom_db.decision_level_of(atom) {
                    Some(level) => level,
                    None => return Err(err::AnalysisError::NoAssertion.into()),
                };
                if level == 0 {
                    continue;
                }

                seen[atom as usize] = true;
                self.atom_db.bump_activity(atom);

                if level == current_level {
                    open += 1;
                } else {
                    learnt.push(*literal);
                }
            }

            let literal = loop {
                if trail_index == 0 {
                    return Err(err::AnalysisError::NoAssertion.into());
                }
                trail_index -= 1;
                let candidate = self.trail.literals()[trail_index];
                if seen[candidate.atom() as usize] {
                    break candidate;
                }
            };
            seen[literal.atom() as usize] = false;

            open = match open.checked_sub(1) {
                Some(remaining) => remaining,
                None => return Err(err::AnalysisError::NoAssertion.into()),
            };

            if open == 0 {
                learnt[0] = literal.negate();
                break;
            }

            reason = match self.atom_db.reason_of(literal.atom()) {
                Some(reason) => reason,
                None => return Err(err::AnalysisError::MissingReason.into()),
            };
            pivot = Some(literal);
        }

        let mut backjump_level = 0;
        if learnt.len() > 1 {
            let mut max_position = 1;
            for (position, literal) in learnt.iter().enumerate().skip(1) {
                let level = self.atom_db.decision_level_of(literal.atom()).unwrap_or(0);
                if level > backjump_level {
                    backjump_level = level;
                    max_position = position;
                }
            }
            learnt.swap(1, max_position);
        }

        self.atom_db.decay_activity(&self.config);

        log::trace!(target: targets::ANALYSIS, "Learnt {} asserting at level {backjump_level}", learnt.as_dimacs(&self.atom_db));
        Ok((learnt, backjump_level))
    }
}
