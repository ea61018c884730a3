//! Frame scheduling for the debugger's auto-update loop
//!
//! The host calls `on_frame` once per display refresh. While running, every
//! call asks for a proxy pass; while disabled, calls are ignored and the host
//! drives passes by hand.

/// Whether the auto-update loop is live
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerMode {
    Disabled,
    Running,
}

#[derive(Debug, Clone)]
pub struct FrameScheduler {
    mode: SchedulerMode,
    frames: u64,
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new(true)
    }
}

impl FrameScheduler {
    pub fn new(auto_update: bool) -> Self {
        Self {
            mode: if auto_update {
                SchedulerMode::Running
            } else {
                SchedulerMode::Disabled
            },
            frames: 0,
        }
    }

    pub fn mode(&self) -> SchedulerMode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.mode == SchedulerMode::Running
    }

    pub fn start(&mut self) {
        if self.mode != SchedulerMode::Running {
            log::debug!("Auto-update started");
            self.mode = SchedulerMode::Running;
        }
    }

    pub fn stop(&mut self) {
        if self.mode != SchedulerMode::Disabled {
            log::debug!("Auto-update stopped after {} frames", self.frames);
            self.mode = SchedulerMode::Disabled;
        }
    }

    /// Refresh tick from the host; true when a pass should run
    pub fn on_frame(&mut self) -> bool {
        match self.mode {
            SchedulerMode::Running => {
                self.frames += 1;
                true
            }
            SchedulerMode::Disabled => false,
        }
    }

    /// Passes requested so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_requests_every_frame() {
        let mut scheduler = FrameScheduler::new(true);
        assert!((0..3).all(|_| scheduler.on_frame()));
        assert_eq!(scheduler.frames(), 3);
    }

    #[test]
    fn test_disabled_ignores_frames() {
        let mut scheduler = FrameScheduler::new(false);
        assert!(!scheduler.on_frame());
        assert_eq!(scheduler.frames(), 0);
        scheduler.start();
        assert!(scheduler.on_frame());
        scheduler.stop();
        assert!(!scheduler.on_frame());
        assert_eq!(scheduler.mode(), SchedulerMode::Disabled);
        assert_eq!(scheduler.frames(), 1);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut scheduler = FrameScheduler::new(true);
        scheduler.start();
        scheduler.start();
        assert!(scheduler.is_running());
    }
}
