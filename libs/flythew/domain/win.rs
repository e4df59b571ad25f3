//! Win evaluation
//!
//! Scans a snapshot list for the first finished game involving the tracked
//! team and decides whether it was won. The function is pure: the same
//! snapshots always produce the same event.

use std::fmt;

use serde::Serialize;

use scorefeed::GameSnapshot;

/// Final score of a decided game, from the tracked team's perspective
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalScore {
    pub team_abbr: String,
    pub opponent_abbr: String,
    pub team_score: u32,
    pub opponent_score: u32,
}

impl FinalScore {
    /// Short "5-3" form used for logs and the score overlay.
    pub fn summary(&self) -> String {
        format!("{}-{}", self.team_score, self.opponent_score)
    }
}

impl fmt::Display for FinalScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.team_abbr, self.team_score, self.opponent_abbr, self.opponent_score
        )
    }
}

/// Result of evaluating one poll's snapshots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinEvent {
    pub won: bool,
    pub final_score: Option<FinalScore>,
}

impl WinEvent {
    /// Event for "nothing decided in our favor".
    pub fn none() -> Self {
        Self {
            won: false,
            final_score: None,
        }
    }

    pub fn win(final_score: FinalScore) -> Self {
        Self {
            won: true,
            final_score: Some(final_score),
        }
    }
}

/// Decide whether the tracked team newly holds a win.
///
/// The first final game involving the team settles the outcome; a
/// doubleheader producing two final games is resolved by feed order. A win
/// requires the team's score to be strictly greater than the opponent's.
pub fn evaluate(snapshots: &[GameSnapshot], team_abbr: &str) -> WinEvent {
    for snapshot in snapshots {
        if !snapshot.is_final() || !snapshot.involves(team_abbr) {
            continue;
        }

        let (ours, theirs) = if snapshot.home.abbreviation == team_abbr {
            (&snapshot.home, &snapshot.away)
        } else {
            (&snapshot.away, &snapshot.home)
        };

        if ours.score > theirs.score {
            return WinEvent::win(FinalScore {
                team_abbr: ours.abbreviation.clone(),
                opponent_abbr: theirs.abbreviation.clone(),
                team_score: ours.score,
                opponent_score: theirs.score,
            });
        }

        // First final game settles it; a loss or tie is not a win.
        return WinEvent::none();
    }

    WinEvent::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorefeed::{GameStatus, TeamScore};

    fn game(
        home: (&str, u32),
        away: (&str, u32),
        status: GameStatus,
    ) -> GameSnapshot {
        GameSnapshot {
            home: TeamScore {
                abbreviation: home.0.to_string(),
                score: home.1,
            },
            away: TeamScore {
                abbreviation: away.0.to_string(),
                score: away.1,
            },
            status,
        }
    }

    #[test]
    fn no_tracked_game_means_no_win() {
        let snapshots = vec![game(("MIL", 4), ("STL", 2), GameStatus::Final)];
        assert_eq!(evaluate(&snapshots, "CHC"), WinEvent::none());
    }

    #[test]
    fn live_tracked_game_is_not_decided() {
        let snapshots = vec![game(("MIL", 1), ("CHC", 6), GameStatus::Live)];
        assert!(!evaluate(&snapshots, "CHC").won);
    }

    #[test]
    fn home_win_is_detected() {
        let snapshots = vec![game(("CHC", 5), ("MIL", 3), GameStatus::Final)];
        let event = evaluate(&snapshots, "CHC");
        assert!(event.won);
        let score = event.final_score.unwrap();
        assert_eq!(score.team_score, 5);
        assert_eq!(score.opponent_score, 3);
        assert_eq!(score.opponent_abbr, "MIL");
    }

    #[test]
    fn away_win_is_detected() {
        let snapshots = vec![game(("MIL", 3), ("CHC", 5), GameStatus::Final)];
        let event = evaluate(&snapshots, "CHC");
        assert!(event.won);
        assert_eq!(event.final_score.unwrap().summary(), "5-3");
    }

    #[test]
    fn loss_is_not_a_win() {
        let snapshots = vec![game(("MIL", 7), ("CHC", 2), GameStatus::Final)];
        assert!(!evaluate(&snapshots, "CHC").won);
    }

    #[test]
    fn first_final_game_settles_a_doubleheader() {
        let snapshots = vec![
            game(("CHC", 2), ("MIL", 4), GameStatus::Final),
            game(("CHC", 9), ("MIL", 1), GameStatus::Final),
        ];
        // Feed order wins: the first final game was a loss.
        assert!(!evaluate(&snapshots, "CHC").won);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let snapshots = vec![game(("CHC", 5), ("MIL", 3), GameStatus::Final)];
        assert_eq!(evaluate(&snapshots, "CHC"), evaluate(&snapshots, "CHC"));
    }
}
