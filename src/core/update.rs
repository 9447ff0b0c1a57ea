use log::{debug, info};
use crate::core::{
    Direction, GameChangeType, GridState, MoveOutcome, NoOpReason, Occupant, UserAction,
};

impl GridState {
    /// Moves the agent one step, pushing a box if one is in the way. Rejected
    /// moves leave the grid and the move counter untouched.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.is_solved() {
            return rejected(direction, NoOpReason::Solved);
        }

        let dir = direction.offset();
        let agent = self.agent_position();
        let next = agent + dir;

        let Some(dest) = self.cell(next) else {
            return rejected(direction, NoOpReason::OutOfBounds);
        };

        let change = match dest.occupant() {
            None => return rejected(direction, NoOpReason::Wall),
            Some(Occupant::Empty) => GameChangeType::AgentMove,
            Some(Occupant::Box) => {
                let beyond_pos = next + dir;
                let Some(beyond) = self.cell(beyond_pos) else {
                    return rejected(direction, NoOpReason::BoxBlocked);
                };
                if !beyond.is_walkable() {
                    return rejected(direction, NoOpReason::BoxBlocked);
                }

                self.set_cell(beyond_pos, beyond.with_occupant(Occupant::Box));
                // the agent steps into what the box leaves behind
                self.set_cell(next, dest.with_occupant(Occupant::Empty));
                GameChangeType::AgentAndBoxMove
            }
            Some(Occupant::Agent) => panic!("second agent found at {:?}", next),
        };

        let cur = self[agent];
        self.set_cell(agent, cur.with_occupant(Occupant::Empty));
        let dest_now = self[next];
        self.set_cell(next, dest_now.with_occupant(Occupant::Agent));
        self.count_move();

        if self.is_solved() {
            info!("solved in {} moves", self.move_count());
        }
        MoveOutcome::Moved(change)
    }

    /// Runs a move or restart. Restarts have no outcome.
    pub fn perform(&mut self, action: UserAction) -> Option<MoveOutcome> {
        match action {
            UserAction::Move(direction) => Some(self.apply_move(direction)),
            UserAction::Restart => {
                self.reset();
                None
            }
        }
    }
}

fn rejected(direction: Direction, reason: NoOpReason) -> MoveOutcome {
    debug!("move {:?} rejected: {}", direction, reason);
    MoveOutcome::NoOp(reason)
}
