use sokoban::core::{GridState, MoveOutcome};

pub struct GameRenderState<'a> {
    pub game: &'a GridState,
    pub last_outcome: Option<MoveOutcome>,
}

impl GameRenderState<'_> {
    pub fn won(&self) -> bool {
        self.game.is_solved()
    }
}
