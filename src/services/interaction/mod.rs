// Interaction service
// Turns pointer events on grid cells into selection changes

use crate::models::selection::{SelectedTime, Slot};
use crate::services::selection::SelectionService;

/// Transient selection session.
///
/// `extended` flips to true once an enter event reaches a cell other than the
/// anchor (in any row); until then a release on the anchor is a plain click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Idle,
    Dragging { anchor: Slot, extended: bool },
}

/// What a pointer event did, so the host knows whether to notify observers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PointerOutcome {
    /// Nothing changed (idle enter, cross-day enter, click during a drag...).
    Ignored,
    /// Session bookkeeping only: press started, drag ended, cancel.
    SessionChanged,
    /// The selection changed; the new value replaces the old one.
    Updated(SelectedTime),
}

impl PointerOutcome {
    pub fn into_update(self) -> Option<SelectedTime> {
        match self {
            PointerOutcome::Updated(state) => Some(state),
            _ => None,
        }
    }

    pub fn is_update(&self) -> bool {
        matches!(self, PointerOutcome::Updated(_))
    }
}

/// Press / enter / release state machine for one selection grid.
///
/// Drags stay within the row they started on and are applied live: every
/// enter recomputes the range from the anchor and adds it to the selection.
/// A press released without reaching another cell toggles the pressed cell.
#[derive(Clone, Debug, Default)]
pub struct InteractionController {
    session: Session,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.session, Session::Dragging { .. })
    }

    /// Anchor of the active session, if any.
    pub fn anchor(&self) -> Option<Slot> {
        match self.session {
            Session::Dragging { anchor, .. } => Some(anchor),
            Session::Idle => None,
        }
    }

    /// Pointer pressed on `slot`. Starts a session anchored there; a press
    /// during an active session restarts it.
    pub fn on_press(&mut self, slot: Slot) -> PointerOutcome {
        if let Some(previous) = self.anchor() {
            log::debug!("Press at {:?} replaces unfinished session at {:?}", slot, previous);
        }
        self.session = Session::Dragging {
            anchor: slot,
            extended: false,
        };
        log::debug!("Selection session started at {} {:02}:00", slot.day, slot.hour.value());
        PointerOutcome::SessionChanged
    }

    /// Pointer entered `slot` while possibly dragging.
    pub fn on_enter(&mut self, state: &SelectedTime, slot: Slot) -> PointerOutcome {
        let Session::Dragging { anchor, extended } = self.session else {
            return PointerOutcome::Ignored;
        };

        if !extended && slot == anchor {
            return PointerOutcome::Ignored;
        }

        self.session = Session::Dragging {
            anchor,
            extended: true,
        };

        if slot.day != anchor.day {
            log::trace!("Ignoring enter on {} while dragging on {}", slot.day, anchor.day);
            return PointerOutcome::Ignored;
        }

        PointerOutcome::Updated(SelectionService::apply_range(
            state,
            anchor.day,
            anchor.hour,
            slot.hour,
        ))
    }

    /// Pointer released over `slot` (`None` when off the grid). Ends the
    /// session. Releasing on the anchor of a session that never reached
    /// another cell is a click and toggles the anchor.
    pub fn on_release(&mut self, state: &SelectedTime, slot: Option<Slot>) -> PointerOutcome {
        let previous = std::mem::take(&mut self.session);
        match previous {
            Session::Idle => PointerOutcome::Ignored,
            Session::Dragging {
                anchor,
                extended: false,
            } if slot == Some(anchor) => {
                log::debug!("Press/release on {:?} resolved as click", anchor);
                PointerOutcome::Updated(SelectionService::toggle_hour(
                    state,
                    anchor.day,
                    anchor.hour,
                ))
            }
            Session::Dragging { anchor, .. } => {
                log::debug!("Selection session from {:?} finished", anchor);
                PointerOutcome::SessionChanged
            }
        }
    }

    /// Click delivered by a host that does not report press/release pairs.
    /// Ignored while a session is active.
    pub fn on_click(&mut self, state: &SelectedTime, slot: Slot) -> PointerOutcome {
        if self.is_dragging() {
            return PointerOutcome::Ignored;
        }
        PointerOutcome::Updated(SelectionService::toggle_hour(state, slot.day, slot.hour))
    }

    /// Drop the session without touching the selection.
    pub fn cancel(&mut self) -> PointerOutcome {
        match std::mem::take(&mut self.session) {
            Session::Idle => PointerOutcome::Ignored,
            Session::Dragging { .. } => {
                log::debug!("Selection session cancelled");
                PointerOutcome::SessionChanged
            }
        }
    }
}
