//! Game snapshot domain model
//!
//! A [`GameSnapshot`] is the distilled view of one scoreboard event at poll
//! time: who played, the current score, and whether the game is over. It is
//! produced fresh on every poll and never mutated.

use crate::types;

/// Lifecycle status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Scheduled,
    Live,
    Final,
}

impl GameStatus {
    /// Map the feed's status state ("pre" / "in" / "post") onto the enum.
    /// Unknown states are treated as not-yet-started.
    fn from_state(state: &str) -> Self {
        match state {
            "post" => GameStatus::Final,
            "in" => GameStatus::Live,
            _ => GameStatus::Scheduled,
        }
    }
}

/// One team's side of a game: abbreviation plus current run total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamScore {
    pub abbreviation: String,
    pub score: u32,
}

/// One observed game at poll time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub home: TeamScore,
    pub away: TeamScore,
    pub status: GameStatus,
}

impl GameSnapshot {
    /// Whether the given team plays in this game (either side).
    pub fn involves(&self, abbreviation: &str) -> bool {
        self.home.abbreviation == abbreviation || self.away.abbreviation == abbreviation
    }

    /// Whether the game has finished.
    pub fn is_final(&self) -> bool {
        self.status == GameStatus::Final
    }

    /// Build a snapshot from a wire event.
    ///
    /// Returns `None` when the event is missing a competition or either
    /// competitor; malformed entries are skipped, not fatal.
    pub fn from_event(event: &types::Event) -> Option<Self> {
        let competition = event.competitions.first()?;

        let home = competitor_side(competition, "home")?;
        let away = competitor_side(competition, "away")?;

        let status = competition
            .status
            .as_ref()
            .and_then(|s| s.kind.as_ref())
            .map_or(GameStatus::Scheduled, |k| GameStatus::from_state(&k.state));

        Some(GameSnapshot { home, away, status })
    }
}

fn competitor_side(competition: &types::Competition, side: &str) -> Option<TeamScore> {
    let competitor = competition
        .competitors
        .iter()
        .find(|c| c.home_away == side)?;
    let team = competitor.team.as_ref()?;

    let score = competitor
        .score
        .as_deref()
        .unwrap_or("0")
        .parse()
        .unwrap_or(0);

    Some(TeamScore {
        abbreviation: team.abbreviation.clone(),
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "events": [
            {
                "name": "Chicago Cubs at Milwaukee Brewers",
                "competitions": [
                    {
                        "competitors": [
                            {
                                "homeAway": "home",
                                "score": "3",
                                "team": {"abbreviation": "MIL", "displayName": "Milwaukee Brewers"}
                            },
                            {
                                "homeAway": "away",
                                "score": "5",
                                "team": {"abbreviation": "CHC", "displayName": "Chicago Cubs"}
                            }
                        ],
                        "status": {"type": {"state": "post", "completed": true}}
                    }
                ]
            },
            {
                "name": "St. Louis Cardinals at Cincinnati Reds",
                "competitions": [
                    {
                        "competitors": [
                            {
                                "homeAway": "home",
                                "score": "1",
                                "team": {"abbreviation": "CIN", "displayName": "Cincinnati Reds"}
                            },
                            {
                                "homeAway": "away",
                                "score": "0",
                                "team": {"abbreviation": "STL", "displayName": "St. Louis Cardinals"}
                            }
                        ],
                        "status": {"type": {"state": "in", "completed": false}}
                    }
                ]
            }
        ]
    }"#;

    fn decode(json: &str) -> Vec<GameSnapshot> {
        let board: types::Scoreboard = serde_json::from_str(json).unwrap();
        board
            .events
            .iter()
            .filter_map(GameSnapshot::from_event)
            .collect()
    }

    #[test]
    fn decodes_scoreboard_into_snapshots() {
        let snapshots = decode(SAMPLE);
        assert_eq!(snapshots.len(), 2);

        let cubs_game = &snapshots[0];
        assert_eq!(cubs_game.home.abbreviation, "MIL");
        assert_eq!(cubs_game.home.score, 3);
        assert_eq!(cubs_game.away.abbreviation, "CHC");
        assert_eq!(cubs_game.away.score, 5);
        assert!(cubs_game.is_final());
        assert!(cubs_game.involves("CHC"));
        assert!(!cubs_game.involves("STL"));
    }

    #[test]
    fn live_game_is_not_final() {
        let snapshots = decode(SAMPLE);
        assert_eq!(snapshots[1].status, GameStatus::Live);
        assert!(!snapshots[1].is_final());
    }

    #[test]
    fn unknown_status_maps_to_scheduled() {
        assert_eq!(GameStatus::from_state("halftime"), GameStatus::Scheduled);
        assert_eq!(GameStatus::from_state(""), GameStatus::Scheduled);
    }

    #[test]
    fn event_without_competitors_is_skipped() {
        let json = r#"{"events": [{"name": "empty", "competitions": [{"competitors": []}]}]}"#;
        assert!(decode(json).is_empty());
    }

    #[test]
    fn unparseable_score_defaults_to_zero() {
        let json = r#"{
            "events": [{"competitions": [{
                "competitors": [
                    {"homeAway": "home", "score": "n/a", "team": {"abbreviation": "MIL"}},
                    {"homeAway": "away", "team": {"abbreviation": "CHC"}}
                ],
                "status": {"type": {"state": "pre"}}
            }]}]
        }"#;
        let snapshots = decode(json);
        assert_eq!(snapshots[0].home.score, 0);
        assert_eq!(snapshots[0].away.score, 0);
    }
}
