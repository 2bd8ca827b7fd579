//! In-memory capabilities for controller tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

pub use super::memory::MemoryStore;
use super::{Interaction, Timer, TimerHandle};
use crate::error::{AppError, AppResult};

/// Records dialogs and navigations; answers prompts from a queue
#[derive(Default)]
pub struct ScriptedInteraction {
    pub alerts: RefCell<Vec<String>>,
    pub navigations: RefCell<Vec<String>>,
    answers: RefCell<VecDeque<Option<String>>>,
    navigation_fails: Cell<bool>,
}

impl ScriptedInteraction {
    pub fn answering(answer: Option<&str>) -> Self {
        let interaction = Self::default();
        interaction.queue_answer(answer);
        interaction
    }

    /// Make every later `navigate` fail
    pub fn fail_navigation(&self) {
        self.navigation_fails.set(true);
    }

    pub fn queue_answer(&self, answer: Option<&str>) {
        self.answers.borrow_mut().push_back(answer.map(str::to_string));
    }
}

impl Interaction for ScriptedInteraction {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn prompt(&self, _message: &str) -> Option<String> {
        self.answers.borrow_mut().pop_front().flatten()
    }

    fn navigate(&self, url: &str) -> AppResult<()> {
        if self.navigation_fails.get() {
            return Err(AppError::Interaction("navigation blocked".to_string()));
        }
        self.navigations.borrow_mut().push(url.to_string());
        Ok(())
    }
}

struct Pending {
    id: u64,
    due: u64,
    callback: Box<dyn FnOnce()>,
}

/// Virtual clock; callbacks run only when `advance` passes their due time
#[derive(Clone, Default)]
pub struct ManualTimer {
    now: Rc<Cell<u64>>,
    next_id: Rc<Cell<u64>>,
    pending: Rc<RefCell<Vec<Pending>>>,
}

impl ManualTimer {
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn advance(&self, ms: u64) {
        let target = self.now.get() + ms;
        loop {
            let due = {
                let mut pending = self.pending.borrow_mut();
                pending.sort_by_key(|p| (p.due, p.id));
                match pending.first() {
                    Some(p) if p.due <= target => Some(pending.remove(0)),
                    _ => None,
                }
            };
            match due {
                Some(p) => {
                    self.now.set(p.due);
                    (p.callback)();
                }
                None => break,
            }
        }
        self.now.set(target);
    }
}

impl Timer for ManualTimer {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.pending.borrow_mut().push(Pending {
            id,
            due: self.now.get() + delay_ms as u64,
            callback,
        });
        let pending = self.pending.clone();
        TimerHandle::new(move || pending.borrow_mut().retain(|p| p.id != id))
    }
}
