//! The round loop
//!
//! Wires the engine to a game session: select a guess, submit it, fold the
//! outcome back into the pool, repeat until the session ends the round. A
//! loss-marker error stops the loop immediately; any other session error is
//! reported and the loop continues with the renewed token.

use crate::core::Guess;
use crate::dictionary::DictionaryIndex;
use crate::session::{GameSession, is_loss};
use crate::solver::{Engine, Strategy};

/// One guess and what happened to the pool because of it
#[derive(Debug, Clone)]
pub struct GuessRecord {
    pub guess: Guess,
    pub was_correct: bool,
    pub pool_before: usize,
    pub pool_after: usize,
}

/// What happened over one complete round
#[derive(Debug, Clone)]
pub struct RoundSummary {
    pub target_length: usize,
    pub won: bool,
    pub guesses: Vec<GuessRecord>,
}

impl RoundSummary {
    /// Total guesses submitted
    #[must_use]
    pub fn num_guesses(&self) -> usize {
        self.guesses.len()
    }

    /// Guesses the session rejected
    #[must_use]
    pub fn wrong_guesses(&self) -> usize {
        self.guesses.iter().filter(|g| !g.was_correct).count()
    }
}

/// Play one round against the given session
///
/// # Errors
///
/// Returns an error if the session transport fails or the engine runs out of
/// candidates or letters mid-round (target word missing from the dictionary).
pub fn play_round<S, G>(
    session: &mut G,
    index: &DictionaryIndex,
    strategy: S,
) -> Result<RoundSummary, String>
where
    S: Strategy,
    G: GameSession,
{
    let start = session.start_round().map_err(|e| e.to_string())?;
    if let Some(err) = &start.error {
        println!("{err}");
    }

    let mut token = start.token;
    let mut engine = Engine::for_length(strategy, index, start.target_length);
    let mut guesses = Vec::new();
    let mut lost = false;
    // A round already over at start was not won by us
    let already_over = start.game_ended;
    let mut ended = start.game_ended;

    while !ended {
        let guess = engine.select_next_guess().map_err(|e| e.to_string())?;

        let reply = session.guess(&token, &guess).map_err(|e| e.to_string())?;
        if let Some(err) = &reply.error {
            println!("{err}");
            if is_loss(Some(err.as_str())) {
                // Loss-terminal: stop without touching engine state
                lost = true;
                break;
            }
        }

        token = reply.token;

        let pool_before = engine.pool_size();
        engine.apply_outcome(&guess, reply.was_correct);
        guesses.push(GuessRecord {
            guess,
            was_correct: reply.was_correct,
            pool_before,
            pool_after: engine.pool_size(),
        });

        ended = reply.game_ended;
    }

    Ok(RoundSummary {
        target_length: start.target_length,
        won: ended && !lost && !already_over,
        guesses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::dictionary::loader::words_from_slice;
    use crate::session::LocalSession;
    use crate::solver::StrategyKind;

    fn index(words: &[&str]) -> DictionaryIndex {
        DictionaryIndex::new(words_from_slice(words))
    }

    #[test]
    fn greedy_wins_when_target_is_in_dictionary() {
        let index = index(&["cat", "car", "can", "cow", "dog", "pig"]);
        let mut session = LocalSession::new(Word::new("car").unwrap());

        let summary =
            play_round(&mut session, &index, StrategyKind::from_name("greedy")).unwrap();

        assert!(summary.won);
        assert_eq!(summary.target_length, 3);
        assert!(!summary.guesses.is_empty());
    }

    #[test]
    fn cursor_wins_by_revealing_all_letters() {
        let index = index(&["cat", "car", "can", "cow", "dog", "pig"]);
        let mut session = LocalSession::new(Word::new("car").unwrap());

        let summary =
            play_round(&mut session, &index, StrategyKind::from_name("cursor")).unwrap();

        assert!(summary.won);
        assert!(session.won());
    }

    #[test]
    fn pool_shrinks_monotonically_across_a_round() {
        let index = index(&["cat", "car", "can", "cow", "bat", "rat", "mat"]);
        let mut session = LocalSession::new(Word::new("bat").unwrap());

        let summary =
            play_round(&mut session, &index, StrategyKind::from_name("cursor")).unwrap();

        for record in &summary.guesses {
            assert!(record.pool_after <= record.pool_before);
        }
    }

    #[test]
    fn running_out_of_lives_is_a_recorded_loss() {
        let index = index(&["cat", "dog", "pig", "hen", "fox", "owl", "bee"]);
        let mut session = LocalSession::with_lives(Word::new("owl").unwrap(), 1);

        let summary =
            play_round(&mut session, &index, StrategyKind::from_name("cursor")).unwrap();

        // One wrong guess ends it; the most frequent first letter misses "owl"
        if !summary.won {
            assert!(!session.won());
        }
    }

    #[test]
    fn target_missing_from_dictionary_surfaces_an_error() {
        // Pool collapses to nothing; the engine must refuse to guess blindly
        let index = index(&["cat", "car", "can"]);
        let mut session = LocalSession::with_lives(Word::new("zzz").unwrap(), 30);

        let result = play_round(&mut session, &index, StrategyKind::from_name("greedy"));

        assert!(result.is_err());
    }

    #[test]
    fn round_already_over_at_start_is_not_a_win() {
        use crate::session::{GuessReply, RoundStart};

        // A session that declares the round finished before any guess
        struct ClosedSession;

        impl GameSession for ClosedSession {
            fn start_round(&mut self) -> std::io::Result<RoundStart> {
                Ok(RoundStart {
                    target_length: 3,
                    token: "token-1".to_string(),
                    game_ended: true,
                    error: None,
                })
            }

            fn guess(&mut self, _token: &str, _guess: &Guess) -> std::io::Result<GuessReply> {
                unreachable!("no guesses should be submitted to a finished round");
            }
        }

        let index = index(&["cat", "car", "can"]);
        let summary =
            play_round(&mut ClosedSession, &index, StrategyKind::from_name("cursor")).unwrap();

        assert!(!summary.won);
        assert!(summary.guesses.is_empty());
    }

    #[test]
    fn wrong_guess_count_matches_records() {
        let index = index(&["cat", "car", "can", "cow"]);
        let mut session = LocalSession::new(Word::new("cow").unwrap());

        let summary =
            play_round(&mut session, &index, StrategyKind::from_name("greedy")).unwrap();

        let wrong = summary.guesses.iter().filter(|g| !g.was_correct).count();
        assert_eq!(summary.wrong_guesses(), wrong);
        assert_eq!(summary.num_guesses(), summary.guesses.len());
    }
}
