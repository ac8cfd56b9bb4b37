use quoridor::{Coords, Game, Move, Player, Pos, Snapshot, SnapshotError, Wall};
use serde_json::json;

#[test]
fn move_wire_format() {
    let pawn = Move::Pawn { x: 4, y: 1 };
    assert_eq!(
        serde_json::to_value(pawn).unwrap(),
        json!({"type": "move", "x": 4, "y": 1})
    );
    let wall: Move = Wall::vertical(2, 6).into();
    assert_eq!(
        serde_json::to_value(wall).unwrap(),
        json!({"type": "wall", "x": 2, "y": 6, "orientation": "v"})
    );

    let parsed: Move =
        serde_json::from_str(r#"{"type":"wall","x":0,"y":3,"orientation":"h"}"#).unwrap();
    assert_eq!(parsed, Wall::horizontal(0, 3).into());
}

#[test]
fn snapshot_wire_format() {
    let mut game: Game<9> = Game::default();
    game.play(Wall::horizontal(3, 0).into()).unwrap();
    game.play(Move::Pawn { x: 4, y: 7 }).unwrap();

    let snapshot = Snapshot::from(&game);
    assert_eq!(
        serde_json::to_value(&snapshot).unwrap(),
        json!({
            "boardSize": 9,
            "pawns": {"1": {"x": 4, "y": 0}, "2": {"x": 4, "y": 7}},
            "wallCounts": {"1": 9, "2": 10},
            "currentPlayer": 1,
            "placedWalls": [{"type": "wall", "x": 3, "y": 0, "orientation": "h"}],
        })
    );
}

#[test]
fn restore_replays_wall_edge_removals() {
    let mut game: Game<9> = Game::default();
    game.play(Wall::horizontal(3, 0).into()).unwrap();
    game.play(Move::Pawn { x: 4, y: 7 }).unwrap();

    let restored: Game<9> = Snapshot::from(&game).try_into().unwrap();
    assert_eq!(restored, game);

    // The replayed wall blocks player one's forward step.
    let moves: Vec<_> = restored.legal_pawn_moves(Player::One).into_iter().collect();
    assert!(!moves.contains(&Pos { x: 4, y: 1 }));
    assert!(moves.contains(&Pos { x: 3, y: 0 }));
    assert!(moves.contains(&Pos { x: 5, y: 0 }));
}

#[test]
fn restore_round_trips_through_json() {
    let mut game: Game<9> = Game::default();
    game.play(Move::Pawn { x: 4, y: 1 }).unwrap();
    game.play(Wall::vertical(5, 5).into()).unwrap();

    let encoded = serde_json::to_string(&Snapshot::from(&game)).unwrap();
    let decoded: Snapshot = serde_json::from_str(&encoded).unwrap();
    let restored: Game<9> = decoded.try_into().unwrap();
    assert_eq!(restored, game);
}

#[test]
fn board_size_mismatch_is_rejected() {
    let game: Game<9> = Game::default();
    let snapshot = Snapshot::from(&game);
    let restored: Result<Game<5>, _> = snapshot.try_into();
    assert_eq!(
        restored.unwrap_err(),
        SnapshotError::BoardSizeMismatch {
            expected: 5,
            actual: 9
        }
    );
}

#[test]
fn malformed_placed_walls_are_rejected() {
    let game: Game<9> = Game::default();

    let mut snapshot = Snapshot::from(&game);
    snapshot.placed_walls.push(Move::Pawn { x: 1, y: 1 });
    let restored: Result<Game<9>, _> = snapshot.try_into();
    assert_eq!(restored.unwrap_err(), SnapshotError::NotAWall);

    let mut snapshot = Snapshot::from(&game);
    snapshot.placed_walls.push(Wall::horizontal(4, 4).into());
    snapshot.placed_walls.push(Wall::vertical(4, 4).into());
    let restored: Result<Game<9>, _> = snapshot.try_into();
    assert_eq!(restored.unwrap_err(), SnapshotError::InvalidWall);
}

#[test]
fn abutting_placed_walls_are_rejected() {
    let game: Game<9> = Game::default();

    // Collinear neighbors would merge into a three-unit wall, which the
    // rules engine never accepts over the boundary either.
    let mut snapshot = Snapshot::from(&game);
    snapshot.placed_walls.push(Wall::horizontal(4, 4).into());
    snapshot.placed_walls.push(Wall::horizontal(5, 4).into());
    let restored: Result<Game<9>, _> = snapshot.try_into();
    assert_eq!(restored.unwrap_err(), SnapshotError::InvalidWall);

    let mut snapshot = Snapshot::from(&game);
    snapshot.placed_walls.push(Wall::vertical(4, 4).into());
    snapshot.placed_walls.push(Wall::vertical(4, 3).into());
    let restored: Result<Game<9>, _> = snapshot.try_into();
    assert_eq!(restored.unwrap_err(), SnapshotError::InvalidWall);
}

#[test]
fn coinciding_pawns_are_rejected() {
    let game: Game<9> = Game::default();
    let mut snapshot = Snapshot::from(&game);
    snapshot.pawns.insert(Player::Two, Coords { x: 4, y: 0 });
    let restored: Result<Game<9>, _> = snapshot.try_into();
    assert_eq!(restored.unwrap_err(), SnapshotError::PawnsOverlap);
}
