use crate::game::errors::{GameError, GameOperation};
use crate::game::models::{Distance, GamePhase, Resolution};
use crate::game::GameSession;
use crate::geo::models::LatLng;
use crate::rounds::models::Round;
use crate::scoring::{ExponentialDecay, ScoringPolicyKind, TieredThreshold};
use std::sync::Arc;

const MAIN_QUAD: LatLng = LatLng {
    lat: 37.425435,
    lng: -122.162083,
};
const FIVE_HUNDRED_METERS_NORTH: LatLng = LatLng {
    lat: 37.42993,
    lng: -122.162083,
};

pub fn fake_rounds() -> Arc<[Round]> {
    [
        (37.425435, -122.162083, "Main Quad Entrance"),
        (37.423240, -122.163327, "Hoover Tower"),
        (37.429780, -122.169518, "Memorial Church"),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (lat, lng, name))| Round {
        id: index + 1,
        truth: LatLng { lat, lng },
        asset_key: format!("round{}.jpeg", index + 1),
        location_name: name.to_string(),
    })
    .collect()
}

fn started_session(kind: ScoringPolicyKind) -> GameSession {
    let mut session = GameSession::new(fake_rounds(), kind.policy());
    session.start_game();
    session
}

#[test]
fn new_session_is_not_started() {
    let session = GameSession::new(fake_rounds(), Box::new(ExponentialDecay));
    let snapshot = session.snapshot();
    assert_eq!(snapshot.phase, GamePhase::NotStarted);
    assert_eq!(snapshot.cumulative_score, 0.0);
    assert!(snapshot.current_round.is_none());
}

#[test]
fn start_game_enters_first_round() {
    let session = started_session(ScoringPolicyKind::Exponential);
    let snapshot = session.snapshot();
    assert_eq!(snapshot.phase, GamePhase::AwaitingGuess);
    assert_eq!(snapshot.round_index, 0);
    assert_eq!(snapshot.round_number, 1);
    assert_eq!(snapshot.total_rounds, 3);
    assert_eq!(snapshot.cumulative_score, 0.0);
    assert_eq!(snapshot.guess, None);
    let current_round = snapshot.current_round.expect("A round should be active.");
    assert_eq!(current_round.asset_key, "round1.jpeg");
}

#[test]
fn exact_guess_scores_maximum_with_both_policies() {
    let mut session = started_session(ScoringPolicyKind::Exponential);
    session.register_guess(MAIN_QUAD).unwrap();
    let result = session.resolve_round(Resolution::Confirmed).unwrap();
    assert_eq!(result.distance, Distance::Meters(0.0));
    assert_eq!(result.score, 5000.0);
    assert!(result.perfect);

    let mut session = GameSession::new(fake_rounds(), Box::new(TieredThreshold));
    session.start_game();
    session.register_guess(MAIN_QUAD).unwrap();
    let result = session.resolve_round(Resolution::Confirmed).unwrap();
    assert_eq!(result.score, 2.0);
    assert!(result.perfect);
}

#[test]
fn guess_500_meters_away() {
    let mut session = started_session(ScoringPolicyKind::Exponential);
    session.register_guess(FIVE_HUNDRED_METERS_NORTH).unwrap();
    let result = session.resolve_round(Resolution::Confirmed).unwrap();
    let meters = result.distance.meters().expect("A distance should be reported.");
    assert!((meters - 500.0).abs() < 1.0);
    assert_eq!(result.score, 4304.0);
    assert!(!result.perfect);

    let mut session = started_session(ScoringPolicyKind::Tiered);
    session.register_guess(FIVE_HUNDRED_METERS_NORTH).unwrap();
    let result = session.resolve_round(Resolution::Confirmed).unwrap();
    assert_eq!(result.score, 0.25);
}

#[test]
fn last_guess_wins() {
    let mut session = started_session(ScoringPolicyKind::Exponential);
    session.register_guess(FIVE_HUNDRED_METERS_NORTH).unwrap();
    session.register_guess(MAIN_QUAD).unwrap();
    assert_eq!(session.snapshot().guess, Some(MAIN_QUAD));
    let result = session.resolve_round(Resolution::Confirmed).unwrap();
    assert_eq!(result.score, 5000.0);
}

#[test]
fn missing_guess_scores_zero_without_distance() {
    let mut session = started_session(ScoringPolicyKind::Exponential);
    let result = session.resolve_round(Resolution::TimedOut).unwrap();
    assert_eq!(result.distance, Distance::NoGuess);
    assert_eq!(result.distance.meters(), None);
    assert_eq!(result.guess, None);
    assert_eq!(result.score, 0.0);
    assert!(!result.perfect);
    assert_eq!(result.resolution, Resolution::TimedOut);
    assert_eq!(session.cumulative_score(), 0.0);
}

#[test]
fn missing_distance_serializes_as_null() {
    let mut session = started_session(ScoringPolicyKind::Tiered);
    let result = session.resolve_round(Resolution::TimedOut).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert!(json["distance"].is_null());
    assert!(json["guess"].is_null());

    session.advance().unwrap();
    session.register_guess(MAIN_QUAD).unwrap();
    let result = session.resolve_round(Resolution::Confirmed).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert!(json["distance"]["meters"].as_f64().unwrap() > 0.0);
    assert!(json["distance"]["feet"].as_f64().is_some());
    assert_eq!(json["resolution"], "confirmed");
}

#[test]
fn invalid_coordinate_is_rejected_without_changes() {
    let mut session = started_session(ScoringPolicyKind::Exponential);
    session.register_guess(MAIN_QUAD).unwrap();
    let error = session
        .register_guess(LatLng {
            lat: 91.0,
            lng: 0.0,
        })
        .unwrap_err();
    assert_eq!(error, GameError::InvalidCoordinate { lat: 91.0, lng: 0.0 });
    assert_eq!(session.snapshot().guess, Some(MAIN_QUAD));
    assert_eq!(session.phase(), GamePhase::AwaitingGuess);
}

#[test]
fn resolving_twice_is_signalled() {
    let mut session = started_session(ScoringPolicyKind::Exponential);
    session.register_guess(MAIN_QUAD).unwrap();
    session.resolve_round(Resolution::Confirmed).unwrap();
    assert_eq!(
        session.resolve_round(Resolution::TimedOut),
        Err(GameError::AlreadyResolved)
    );
    assert_eq!(session.cumulative_score(), 5000.0);
    assert_eq!(session.results().len(), 1);
}

#[test]
fn guessing_after_resolution_is_rejected() {
    let mut session = started_session(ScoringPolicyKind::Exponential);
    session.resolve_round(Resolution::TimedOut).unwrap();
    assert_eq!(
        session.register_guess(MAIN_QUAD),
        Err(GameError::InvalidStateTransition {
            operation: GameOperation::RegisterGuess,
            phase: GamePhase::Resolved,
        })
    );
}

#[test]
fn advancing_before_resolution_is_rejected() {
    let mut session = started_session(ScoringPolicyKind::Exponential);
    assert_eq!(
        session.advance(),
        Err(GameError::InvalidStateTransition {
            operation: GameOperation::Advance,
            phase: GamePhase::AwaitingGuess,
        })
    );
    assert_eq!(session.round_index(), 0);
}

#[test]
fn operations_before_start_are_rejected() {
    let mut session = GameSession::new(fake_rounds(), Box::new(ExponentialDecay));
    assert!(matches!(
        session.register_guess(MAIN_QUAD),
        Err(GameError::InvalidStateTransition { .. })
    ));
    assert!(matches!(
        session.resolve_round(Resolution::Confirmed),
        Err(GameError::InvalidStateTransition { .. })
    ));
}

#[test]
fn advance_clears_guess_and_moves_to_next_round() {
    let mut session = started_session(ScoringPolicyKind::Exponential);
    session.register_guess(MAIN_QUAD).unwrap();
    session.resolve_round(Resolution::Confirmed).unwrap();
    assert_eq!(session.advance(), Ok(GamePhase::AwaitingGuess));
    let snapshot = session.snapshot();
    assert_eq!(snapshot.round_index, 1);
    assert_eq!(snapshot.guess, None);
    assert_eq!(snapshot.current_round.unwrap().id, 2);
    assert_eq!(snapshot.last_result.unwrap().round_index, 0);
}

#[test]
fn game_over_after_last_round() {
    let mut session = started_session(ScoringPolicyKind::Exponential);
    for _ in 0..2 {
        session.resolve_round(Resolution::TimedOut).unwrap();
        assert_eq!(session.advance(), Ok(GamePhase::AwaitingGuess));
    }
    session.resolve_round(Resolution::TimedOut).unwrap();
    assert_eq!(session.advance(), Ok(GamePhase::GameOver));

    assert_eq!(
        session.register_guess(MAIN_QUAD),
        Err(GameError::InvalidStateTransition {
            operation: GameOperation::RegisterGuess,
            phase: GamePhase::GameOver,
        })
    );
    assert_eq!(
        session.resolve_round(Resolution::Confirmed),
        Err(GameError::InvalidStateTransition {
            operation: GameOperation::ResolveRound,
            phase: GamePhase::GameOver,
        })
    );
    assert!(matches!(
        session.advance(),
        Err(GameError::InvalidStateTransition { .. })
    ));
    assert!(session.snapshot().current_round.is_none());
}

#[test]
fn cumulative_score_is_sum_of_round_scores() {
    let guesses = [
        Some(MAIN_QUAD),
        None,
        Some(FIVE_HUNDRED_METERS_NORTH),
    ];
    for kind in [ScoringPolicyKind::Exponential, ScoringPolicyKind::Tiered] {
        let mut session = started_session(kind);
        for (index, guess) in guesses.iter().enumerate() {
            if let Some(guess) = guess {
                session.register_guess(*guess).unwrap();
            }
            session.resolve_round(Resolution::Confirmed).unwrap();
            if index + 1 < guesses.len() {
                session.advance().unwrap();
            }
        }
        let sum = session.results().iter().map(|result| result.score).sum::<f64>();
        assert_eq!(session.results().len(), 3);
        assert_eq!(session.cumulative_score(), sum);
        assert_eq!(session.snapshot().cumulative_score, sum);
    }
}

#[test]
fn restart_resets_progress() {
    let mut session = started_session(ScoringPolicyKind::Exponential);
    session.register_guess(MAIN_QUAD).unwrap();
    session.resolve_round(Resolution::Confirmed).unwrap();
    session.advance().unwrap();
    session.register_guess(MAIN_QUAD).unwrap();

    session.start_game();
    let snapshot = session.snapshot();
    assert_eq!(snapshot.phase, GamePhase::AwaitingGuess);
    assert_eq!(snapshot.round_index, 0);
    assert_eq!(snapshot.cumulative_score, 0.0);
    assert_eq!(snapshot.guess, None);
    assert_eq!(snapshot.last_result, None);
    assert!(session.results().is_empty());
}

#[test]
fn empty_catalogue_ends_immediately() {
    let mut session = GameSession::new(Arc::from(Vec::new()), Box::new(ExponentialDecay));
    session.start_game();
    assert_eq!(session.phase(), GamePhase::GameOver);
}
