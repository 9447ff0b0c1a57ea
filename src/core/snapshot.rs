use serde::Serialize;
use crate::core::{GridState, Vec2};

/// Read-only view of a game, for rendering and export
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GridSnapshot {
    pub height: i32,
    pub width: i32,
    pub move_count: u32,
    pub solved: bool,
    pub agent: Vec2,
    pub rows: Vec<String>,
}

impl GridState {
    pub fn text_rows(&self) -> Vec<String> {
        self.cells()
            .iter()
            .map(|row| row.iter().map(|c| c.glyph()).collect())
            .collect()
    }

    pub fn render_to_string(&self) -> String {
        let mut result = String::new();
        for row in self.text_rows() {
            result.push_str(&row);
            result.push('\n');
        }
        result
    }

    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            height: self.height(),
            width: self.width(),
            move_count: self.move_count(),
            solved: self.is_solved(),
            agent: self.agent_position(),
            rows: self.text_rows(),
        }
    }
}
