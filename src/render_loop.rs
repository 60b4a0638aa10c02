//! The periodic repaint task.

use crate::editor::Editor;
use crate::readout::Readout;
use crate::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Stopped,
    Running,
}

/// Repaints an editor once per display frame while running.
///
/// The host owns the actual frame timing: it calls [`tick`] from its
/// animation callback and schedules another callback while `tick` returns
/// `true`. Tests drive frames by calling `tick` directly.
///
/// [`tick`]: RenderLoop::tick
#[derive(Debug, Clone)]
pub struct RenderLoop {
    state: LoopState,
    frames: u64,
}

impl RenderLoop {
    pub fn new() -> RenderLoop {
        RenderLoop {
            state: LoopState::Stopped,
            frames: 0,
        }
    }

    /// Start the loop. Returns `true` if it was stopped, in which case the
    /// host needs to request the first frame.
    pub fn start(&mut self) -> bool {
        let was_stopped = self.state == LoopState::Stopped;
        self.state = LoopState::Running;
        was_stopped
    }

    pub fn stop(&mut self) {
        self.state = LoopState::Stopped;
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// The number of frames painted so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Paint one frame if running. Returns whether another frame should
    /// be scheduled.
    pub fn tick<S: Surface, R: Readout>(&mut self, editor: &mut Editor<S, R>) -> bool {
        if !self.is_running() {
            return false;
        }
        editor.render();
        self.frames += 1;
        log::trace!("frame {}", self.frames);
        true
    }
}

impl Default for RenderLoop {
    fn default() -> Self {
        RenderLoop::new()
    }
}
