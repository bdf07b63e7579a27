use skirmish::{displacement, CharacterClass, Direction};

#[test]
fn test_pawns_step_one_cell() {
    for class in [CharacterClass::P1, CharacterClass::P2, CharacterClass::P3] {
        assert_eq!(displacement(class, Direction::L), Some((0, -1)));
        assert_eq!(displacement(class, Direction::R), Some((0, 1)));
        assert_eq!(displacement(class, Direction::F), Some((-1, 0)));
        assert_eq!(displacement(class, Direction::B), Some((1, 0)));
    }
}

#[test]
fn test_hero1_steps_two_cells() {
    assert_eq!(displacement(CharacterClass::H1, Direction::L), Some((0, -2)));
    assert_eq!(displacement(CharacterClass::H1, Direction::R), Some((0, 2)));
    assert_eq!(displacement(CharacterClass::H1, Direction::F), Some((-2, 0)));
    assert_eq!(displacement(CharacterClass::H1, Direction::B), Some((2, 0)));
}

#[test]
fn test_hero2_moves_diagonally() {
    assert_eq!(
        displacement(CharacterClass::H2, Direction::FL),
        Some((-2, -2))
    );
    assert_eq!(
        displacement(CharacterClass::H2, Direction::FR),
        Some((-2, 2))
    );
    assert_eq!(
        displacement(CharacterClass::H2, Direction::BL),
        Some((2, -2))
    );
    assert_eq!(displacement(CharacterClass::H2, Direction::BR), Some((2, 2)));
}

#[test]
fn test_unsupported_pairs() {
    // pawns and H1 have no diagonals
    for class in [
        CharacterClass::P1,
        CharacterClass::P2,
        CharacterClass::P3,
        CharacterClass::H1,
    ] {
        for direction in [Direction::FL, Direction::FR, Direction::BL, Direction::BR] {
            assert_eq!(displacement(class, direction), None);
        }
    }
    // H2 has only diagonals
    for direction in [Direction::L, Direction::R, Direction::F, Direction::B] {
        assert_eq!(displacement(CharacterClass::H2, direction), None);
    }
}

#[test]
fn test_forward_decreases_row_for_both_sides() {
    // the displacement table has no notion of side; F is the same fixed
    // grid direction wherever it is applied
    let (drow, _) = displacement(CharacterClass::P1, Direction::F).unwrap();
    assert!(drow < 0);
    let (drow, _) = displacement(CharacterClass::H1, Direction::F).unwrap();
    assert!(drow < 0);
}
