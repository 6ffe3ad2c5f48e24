//! Game lifecycle management

use crate::position::Position;

/// Create a new game with the standard starting position, White to move
pub fn new_game() -> Position {
    Position::standard()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Alliance;

    #[test]
    fn test_new_game_is_standard() {
        let position = new_game();
        assert_eq!(position.side_to_move(), Alliance::White);
        assert_eq!(position.all_pieces().count(), 32);
        assert_eq!(position.to_string(), Position::standard().to_string());
    }
}
