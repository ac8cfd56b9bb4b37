use quoridor::{Game, GameResult, Move, PlayError, Player};

#[test]
fn pawn_race_with_a_jump() {
    let mut game: Game<5> = Game::default();
    game.walls_left = [0, 0];

    for (x, y) in [(2, 1), (2, 3), (2, 2)] {
        assert_eq!(game.result(), GameResult::Ongoing);
        game.play(Move::Pawn { x, y }).unwrap();
    }
    // Player two jumps straight over player one.
    game.play(Move::Pawn { x: 2, y: 1 }).unwrap();
    game.play(Move::Pawn { x: 2, y: 3 }).unwrap();
    assert_eq!(game.result(), GameResult::Ongoing);

    // Stepping down to row 0 wins for player two.
    game.play(Move::Pawn { x: 2, y: 0 }).unwrap();
    assert_eq!(game.result(), GameResult::Winner(Player::Two));

    // No moves are accepted in a finished game.
    assert_eq!(
        game.play(Move::Pawn { x: 2, y: 4 }),
        Err(PlayError::GameOver)
    );
}

#[test]
fn reaching_the_top_row_wins_for_player_one() {
    let mut game: Game<5> = Game::default();
    game.walls_left = [0, 0];

    // Player one marches straight up while player two shuffles sideways.
    let plies = [(2, 1), (1, 4), (2, 2), (2, 4), (2, 3), (1, 4)];
    for (x, y) in plies {
        assert_eq!(game.result(), GameResult::Ongoing);
        game.play(Move::Pawn { x, y }).unwrap();
    }
    game.play(Move::Pawn { x: 2, y: 4 }).unwrap();
    assert_eq!(game.result(), GameResult::Winner(Player::One));
}
