use std::collections::HashSet;

use quoridor::{Game, Player, Pos, Wall};

fn move_set<const N: usize>(game: &Game<N>, player: Player) -> HashSet<Pos<N>> {
    game.legal_pawn_moves(player).into_iter().collect()
}

#[test]
fn start_position_pawn_moves() {
    let game: Game<9> = Game::default();
    // Two sideways, one forward; cannot move backward off-board.
    let expected: HashSet<Pos<9>> = [
        Pos { x: 3, y: 0 },
        Pos { x: 5, y: 0 },
        Pos { x: 4, y: 1 },
    ]
    .into_iter()
    .collect();
    assert_eq!(move_set(&game, Player::One), expected);
}

#[test]
fn start_position_has_every_wall_available() {
    let game: Game<9> = Game::default();
    // 3 pawn moves plus 8 * 8 intersections in both orientations.
    assert_eq!(game.possible_moves().len(), 3 + 128);
}

#[test]
fn straight_jump_over_adjacent_opponent() {
    let mut game: Game<9> = Game::default();
    game.pawns = [Pos { x: 4, y: 3 }, Pos { x: 4, y: 4 }];
    let moves = move_set(&game, Player::One);
    let expected: HashSet<Pos<9>> = [
        Pos { x: 3, y: 3 },
        Pos { x: 5, y: 3 },
        Pos { x: 4, y: 2 },
        Pos { x: 4, y: 5 }, // jump lands past the opponent
    ]
    .into_iter()
    .collect();
    assert_eq!(moves, expected);
    assert!(!moves.contains(&Pos { x: 4, y: 4 }));
}

#[test]
fn blocked_jump_falls_back_to_side_steps() {
    let mut game: Game<9> = Game::default();
    game.pawns = [Pos { x: 4, y: 3 }, Pos { x: 4, y: 4 }];
    // Wall behind the opponent blocks the straight jump.
    game.graph.remove_wall(&Wall::horizontal(4, 4));
    let moves = move_set(&game, Player::One);
    let expected: HashSet<Pos<9>> = [
        Pos { x: 3, y: 3 },
        Pos { x: 5, y: 3 },
        Pos { x: 4, y: 2 },
        Pos { x: 3, y: 4 }, // side-steps around the blocked jump
        Pos { x: 5, y: 4 },
    ]
    .into_iter()
    .collect();
    assert_eq!(moves, expected);
}

#[test]
fn jump_off_the_board_edge_becomes_side_steps() {
    let mut game: Game<9> = Game::default();
    game.pawns = [Pos { x: 4, y: 7 }, Pos { x: 4, y: 8 }];
    let moves = move_set(&game, Player::One);
    let expected: HashSet<Pos<9>> = [
        Pos { x: 3, y: 7 },
        Pos { x: 5, y: 7 },
        Pos { x: 4, y: 6 },
        Pos { x: 3, y: 8 },
        Pos { x: 5, y: 8 },
    ]
    .into_iter()
    .collect();
    assert_eq!(moves, expected);
}

#[test]
fn corner_opponent_leaves_a_single_side_step() {
    let mut game: Game<9> = Game::default();
    game.pawns = [Pos { x: 0, y: 0 }, Pos { x: 0, y: 1 }];
    game.to_move = Player::Two;
    let moves = move_set(&game, Player::Two);
    let expected: HashSet<Pos<9>> = [
        Pos { x: 0, y: 2 },
        Pos { x: 1, y: 1 },
        Pos { x: 1, y: 0 }, // only side-step; the other is off-board
    ]
    .into_iter()
    .collect();
    assert_eq!(moves, expected);
}

#[test]
fn wall_in_front_removes_the_forward_move() {
    let mut game: Game<9> = Game::default();
    game.play(Wall::horizontal(4, 0).into()).unwrap();
    // Now it is player two's turn, but player one's moves shrink too.
    let expected: HashSet<Pos<9>> =
        [Pos { x: 3, y: 0 }, Pos { x: 5, y: 0 }].into_iter().collect();
    assert_eq!(move_set(&game, Player::One), expected);
}
