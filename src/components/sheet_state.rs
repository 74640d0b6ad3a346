use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::config;

/// Where the sheet is in its open/close transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SheetPhase {
    /// First render, before the mount effect has run.
    Entering,
    Visible,
    /// Close requested; the owner will be notified once the exit delay elapses.
    Exiting,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetState {
    pub phase: SheetPhase,
    pub progress: u8,
}

impl Default for SheetState {
    fn default() -> Self {
        Self {
            phase: SheetPhase::Entering,
            progress: 0,
        }
    }
}

impl SheetState {
    /// Whether the sheet should sit in its "shown" transition state.
    pub fn is_shown(&self) -> bool {
        self.phase == SheetPhase::Visible
    }

    pub fn accepts_close(&self) -> bool {
        self.phase != SheetPhase::Exiting
    }
}

pub enum SheetAction {
    Mounted,
    ProgressElapsed,
    CloseRequested,
}

impl Reducible for SheetState {
    type Action = SheetAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SheetAction::Mounted if self.phase == SheetPhase::Entering => {
                debug!("sheet mounted, animating in");
                Rc::new(Self {
                    phase: SheetPhase::Visible,
                    ..(*self).clone()
                })
            }
            SheetAction::ProgressElapsed if self.progress == 0 => {
                debug!("progress filled to {}%", config::PROGRESS_TARGET);
                Rc::new(Self {
                    progress: config::PROGRESS_TARGET,
                    ..(*self).clone()
                })
            }
            SheetAction::CloseRequested if self.accepts_close() => {
                debug!("sheet close requested");
                Rc::new(Self {
                    phase: SheetPhase::Exiting,
                    ..(*self).clone()
                })
            }
            // Everything else is a replay of a one-shot transition.
            _ => self,
        }
    }
}
