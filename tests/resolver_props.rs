use proptest::prelude::*;
use skirmish::{
    resolve, Board, CharacterClass, Direction, GameState, MoveRequest, Occupant, Position,
    RejectReason, Side, BOARD_SIZE,
};

fn class_strategy() -> impl Strategy<Value = CharacterClass> {
    prop_oneof![
        Just(CharacterClass::P1),
        Just(CharacterClass::P2),
        Just(CharacterClass::P3),
        Just(CharacterClass::H1),
        Just(CharacterClass::H2),
    ]
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::L),
        Just(Direction::R),
        Just(Direction::F),
        Just(Direction::B),
        Just(Direction::FL),
        Just(Direction::FR),
        Just(Direction::BL),
        Just(Direction::BR),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// A lone occupant anywhere on the board: the outcome is fully
    /// determined by the displacement table and the bounds check.
    #[test]
    fn lone_occupant_moves_match_the_table(
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
        class in class_strategy(),
        direction in direction_strategy(),
    ) {
        let source = Position { row, col };
        let mut board = Board::empty();
        board.set(source, Some(Occupant { side: Side::A, class }));
        let state = GameState { board, current_side: Side::A };
        let request = MoveRequest { side: Side::A, character: class, direction };

        match skirmish::displacement(class, direction) {
            None => {
                prop_assert_eq!(resolve(&state, &request), Err(RejectReason::InvalidDirection));
            }
            Some((drow, dcol)) => match source.offset(drow, dcol) {
                None => {
                    prop_assert_eq!(resolve(&state, &request), Err(RejectReason::OutOfBounds));
                }
                Some(destination) => {
                    let next = resolve(&state, &request).unwrap();
                    prop_assert_eq!(next.board.get(destination), Some(Occupant { side: Side::A, class }));
                    prop_assert_eq!(next.board.get(source), None);
                    prop_assert_eq!(next.board.occupant_count(), 1);
                    prop_assert_eq!(next.current_side, Side::B);
                }
            },
        }
    }

    /// From the starting state every request either flips the turn or is
    /// rejected leaving the state exactly as it was.
    #[test]
    fn accepted_flips_turn_rejected_changes_nothing(
        side in prop_oneof![Just(Side::A), Just(Side::B)],
        class in class_strategy(),
        direction in direction_strategy(),
    ) {
        let state = GameState::new();
        let request = MoveRequest { side, character: class, direction };
        match resolve(&state, &request) {
            Ok(next) => {
                prop_assert_eq!(next.current_side, state.current_side.opponent());
                // nothing can be captured on the first move, both home rows
                // are out of reach of every opening move
                prop_assert_eq!(next.board.occupant_count(), 10);
            }
            Err(_) => {
                prop_assert_eq!(state, GameState::new());
            }
        }
    }

    /// resolve is a pure function of (state, request).
    #[test]
    fn resolve_is_pure(
        class in class_strategy(),
        direction in direction_strategy(),
    ) {
        let state = GameState::new();
        let request = MoveRequest { side: Side::A, character: class, direction };
        prop_assert_eq!(resolve(&state, &request), resolve(&state, &request));
        // the input is never mutated
        prop_assert_eq!(state, GameState::new());
    }

    /// Occupant count never increases, and decreases by at most one per
    /// accepted move (a capture).
    #[test]
    fn occupant_count_is_monotone(
        moves in proptest::collection::vec((class_strategy(), direction_strategy()), 1..40),
    ) {
        let mut state = GameState::new();
        for (class, direction) in moves {
            let request = MoveRequest {
                side: state.current_side,
                character: class,
                direction,
            };
            let before = state.board.occupant_count();
            if let Ok(next) = resolve(&state, &request) {
                let after = next.board.occupant_count();
                prop_assert!(after == before || after == before - 1);
                state = next;
            }
        }
    }
}
