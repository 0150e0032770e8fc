use crate::core::AppControl;

/// Lifecycle of the render loop.
///
/// The only transition is `Running -> Closing`; there is no way back.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum LoopState {
    #[default]
    Running,
    Closing,
}

impl LoopState {
    pub fn is_running(self) -> bool {
        self == LoopState::Running
    }

    pub fn request_close(&mut self) {
        if *self == LoopState::Running {
            log::debug!("close requested");
        }
        *self = LoopState::Closing;
    }

    /// Applies a callback's control directive.
    pub fn apply(&mut self, control: AppControl) {
        if control == AppControl::Exit {
            self.request_close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running() {
        assert!(LoopState::default().is_running());
    }

    #[test]
    fn exit_control_closes() {
        let mut state = LoopState::Running;
        state.apply(AppControl::Continue);
        assert!(state.is_running());
        state.apply(AppControl::Exit);
        assert_eq!(state, LoopState::Closing);
    }

    #[test]
    fn closing_is_terminal() {
        let mut state = LoopState::Running;
        state.request_close();
        state.apply(AppControl::Continue);
        state.request_close();
        assert_eq!(state, LoopState::Closing);
    }
}
