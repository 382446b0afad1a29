/// Reveal/reset state of one exercise block.
///
/// `reset_key` only ever grows. The renderer keys the runnable cell on it,
/// so every reset produces a fresh cell instead of clearing the old one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ExerciseState {
    show_solution: bool,
    reset_key: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseAction {
    ShowSolution,
    Reset,
}

impl ExerciseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_solution_shown(&self) -> bool {
        self.show_solution
    }

    pub fn reset_key(&self) -> u64 {
        self.reset_key
    }

    pub fn show_solution(self) -> Self {
        Self {
            show_solution: true,
            ..self
        }
    }

    pub fn reset(self) -> Self {
        Self {
            show_solution: false,
            reset_key: self.reset_key + 1,
        }
    }

    pub fn apply(self, action: ExerciseAction) -> Self {
        match action {
            ExerciseAction::ShowSolution => self.show_solution(),
            ExerciseAction::Reset => self.reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unrevealed() {
        let state = ExerciseState::new();
        assert!(!state.is_solution_shown());
        assert_eq!(state.reset_key(), 0);
    }

    #[test]
    fn show_solution_is_idempotent() {
        let once = ExerciseState::new().show_solution();
        let twice = once.show_solution();
        assert!(once.is_solution_shown());
        assert_eq!(once, twice);
    }

    #[test]
    fn reset_clears_and_bumps_key() {
        let states = [
            ExerciseState::new(),
            ExerciseState::new().show_solution(),
            ExerciseState::new().reset().show_solution(),
        ];
        for state in states {
            let reset = state.reset();
            assert!(!reset.is_solution_shown());
            assert!(reset.reset_key() > state.reset_key());
        }
    }

    #[test]
    fn apply_sequence() {
        let state = [
            ExerciseAction::ShowSolution,
            ExerciseAction::Reset,
            ExerciseAction::Reset,
            ExerciseAction::ShowSolution,
        ]
        .into_iter()
        .fold(ExerciseState::new(), ExerciseState::apply);
        assert!(state.is_solution_shown());
        assert_eq!(state.reset_key(), 2);
    }
}
