//! Quiz Controller
//!
//! A looping multiple-choice quiz. Picking an option highlights it, and after
//! a short delay the options lock and the answer is revealed.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;

use crate::config::QUIZ_REVEAL_DELAY_MS;
use crate::models::QuizQuestion;
use crate::platform::{Timer, TimerHandle};

/// When the "next" control is usable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NextPolicy {
    /// Disabled until the current question is answered
    #[default]
    AfterAnswer,
    /// Always enabled, questions can be skipped
    Always,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Unanswered,
    Answered,
}

/// Visual state of one option button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Idle,
    Selected,
    Correct,
    Incorrect,
}

impl OptionMark {
    pub fn css_class(&self) -> &'static str {
        match self {
            OptionMark::Idle => "",
            OptionMark::Selected => "selecionada",
            OptionMark::Correct => "correta",
            OptionMark::Incorrect => "errada",
        }
    }
}

/// Everything the view needs to draw the current question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSnapshot {
    pub index: usize,
    pub prompt: String,
    pub options: Vec<(String, OptionMark)>,
    pub locked: bool,
    pub next_enabled: bool,
}

/// Question cursor and answer state
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    index: usize,
    phase: QuizPhase,
    selected: Option<usize>,
    policy: NextPolicy,
}

impl QuizSession {
    /// `None` for an empty question set
    pub fn new(questions: Vec<QuizQuestion>, policy: NextPolicy) -> Option<Self> {
        if questions.is_empty() {
            return None;
        }
        Some(Self {
            questions,
            index: 0,
            phase: QuizPhase::Unanswered,
            selected: None,
            policy,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn question(&self) -> &QuizQuestion {
        &self.questions[self.index]
    }

    pub fn locked(&self) -> bool {
        self.phase == QuizPhase::Answered
    }

    pub fn next_enabled(&self) -> bool {
        self.policy == NextPolicy::Always || self.phase == QuizPhase::Answered
    }

    /// Highlight an option. False once answered or for an out-of-range option.
    pub fn select(&mut self, option: usize) -> bool {
        if self.locked() || option >= self.question().options.len() {
            return false;
        }
        self.selected = Some(option);
        true
    }

    /// Lock the options and grade the selection
    pub fn reveal(&mut self) -> Option<bool> {
        if self.locked() {
            return None;
        }
        let selected = self.selected?;
        self.phase = QuizPhase::Answered;
        Some(self.question().is_correct(selected))
    }

    /// Advance circularly to a fresh question
    pub fn next(&mut self) -> bool {
        if !self.next_enabled() {
            return false;
        }
        self.index = (self.index + 1) % self.questions.len();
        self.phase = QuizPhase::Unanswered;
        self.selected = None;
        true
    }

    pub fn mark(&self, option: usize) -> OptionMark {
        let is_selected = self.selected == Some(option);
        match self.phase {
            QuizPhase::Unanswered if is_selected => OptionMark::Selected,
            QuizPhase::Unanswered => OptionMark::Idle,
            QuizPhase::Answered if self.question().is_correct(option) => OptionMark::Correct,
            QuizPhase::Answered if is_selected => OptionMark::Incorrect,
            QuizPhase::Answered => OptionMark::Idle,
        }
    }

    pub fn snapshot(&self) -> QuizSnapshot {
        let question = self.question();
        QuizSnapshot {
            index: self.index,
            prompt: question.prompt.clone(),
            options: question
                .options
                .iter()
                .enumerate()
                .map(|(i, label)| (label.clone(), self.mark(i)))
                .collect(),
            locked: self.locked(),
            next_enabled: self.next_enabled(),
        }
    }
}

struct QuizInner {
    session: RefCell<QuizSession>,
    timer: Rc<dyn Timer>,
    pending: RefCell<Option<TimerHandle>>,
    listener: RefCell<Option<Box<dyn Fn(&QuizSnapshot)>>>,
}

/// Session plus the delayed reveal. Cheap to clone.
#[derive(Clone)]
pub struct QuizController {
    inner: Rc<QuizInner>,
}

impl QuizController {
    pub fn new(questions: Vec<QuizQuestion>, policy: NextPolicy, timer: Rc<dyn Timer>) -> Option<Self> {
        let session = QuizSession::new(questions, policy)?;
        Some(Self {
            inner: Rc::new(QuizInner {
                session: RefCell::new(session),
                timer,
                pending: RefCell::new(None),
                listener: RefCell::new(None),
            }),
        })
    }

    /// Called with a fresh snapshot after every state change
    pub fn on_change(&self, listener: impl Fn(&QuizSnapshot) + 'static) {
        *self.inner.listener.borrow_mut() = Some(Box::new(listener));
    }

    pub fn snapshot(&self) -> QuizSnapshot {
        self.inner.session.borrow().snapshot()
    }

    pub fn index(&self) -> usize {
        self.inner.session.borrow().index()
    }

    pub fn phase(&self) -> QuizPhase {
        self.inner.session.borrow().phase()
    }

    pub fn next_enabled(&self) -> bool {
        self.inner.session.borrow().next_enabled()
    }

    /// Option clicked. A click during the reveal delay replaces the pending reveal.
    pub fn select(&self, option: usize) {
        if !self.inner.session.borrow_mut().select(option) {
            return;
        }
        self.cancel_pending();
        let weak: Weak<QuizInner> = Rc::downgrade(&self.inner);
        let handle = self.inner.timer.schedule(
            QUIZ_REVEAL_DELAY_MS,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    QuizController { inner }.reveal();
                }
            }),
        );
        *self.inner.pending.borrow_mut() = Some(handle);
        self.notify();
    }

    /// Lock and grade. Normally fired by the timer.
    pub fn reveal(&self) {
        self.inner.pending.borrow_mut().take();
        let graded = self.inner.session.borrow_mut().reveal();
        if let Some(correct) = graded {
            debug!("[QUIZ] Question {} answered, correct={}", self.index(), correct);
            self.notify();
        }
    }

    /// "Next" clicked
    pub fn next(&self) {
        if !self.inner.session.borrow_mut().next() {
            return;
        }
        self.cancel_pending();
        self.notify();
    }

    fn cancel_pending(&self) {
        let pending = self.inner.pending.borrow_mut().take();
        if let Some(handle) = pending {
            handle.cancel();
        }
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        if let Some(listener) = self.inner.listener.borrow().as_ref() {
            listener(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::quiz_questions;
    use crate::platform::testing::ManualTimer;
    use std::cell::Cell;

    const DELAY: u64 = QUIZ_REVEAL_DELAY_MS as u64;

    fn setup(policy: NextPolicy) -> (QuizController, ManualTimer) {
        let timer = ManualTimer::default();
        let quiz = QuizController::new(quiz_questions(), policy, Rc::new(timer.clone()))
            .expect("questions");
        (quiz, timer)
    }

    fn count(snapshot: &QuizSnapshot, mark: OptionMark) -> usize {
        snapshot.options.iter().filter(|(_, m)| *m == mark).count()
    }

    #[test]
    fn test_empty_question_set() {
        assert!(QuizSession::new(Vec::new(), NextPolicy::AfterAnswer).is_none());
    }

    #[test]
    fn test_correct_answer() {
        let (quiz, timer) = setup(NextPolicy::AfterAnswer);
        assert!(!quiz.next_enabled());

        quiz.select(1);
        assert_eq!(quiz.phase(), QuizPhase::Unanswered);
        assert_eq!(quiz.snapshot().options[1].1, OptionMark::Selected);

        timer.advance(DELAY);
        let snap = quiz.snapshot();
        assert!(snap.locked);
        assert!(snap.next_enabled);
        assert_eq!(count(&snap, OptionMark::Correct), 1);
        assert_eq!(count(&snap, OptionMark::Incorrect), 0);
        assert_eq!(snap.options[1].1, OptionMark::Correct);
    }

    #[test]
    fn test_incorrect_answer_reveals_correct_one() {
        let (quiz, timer) = setup(NextPolicy::AfterAnswer);
        quiz.select(3);
        timer.advance(DELAY);

        let snap = quiz.snapshot();
        assert_eq!(count(&snap, OptionMark::Correct), 1);
        assert_eq!(count(&snap, OptionMark::Incorrect), 1);
        assert_eq!(snap.options[3].1, OptionMark::Incorrect);
        assert_eq!(snap.options[1].1, OptionMark::Correct);
    }

    #[test]
    fn test_reclick_during_delay_moves_selection() {
        let (quiz, timer) = setup(NextPolicy::AfterAnswer);
        quiz.select(0);
        timer.advance(DELAY / 2);
        quiz.select(1);

        let snap = quiz.snapshot();
        assert_eq!(count(&snap, OptionMark::Selected), 1);
        assert_eq!(snap.options[1].1, OptionMark::Selected);
        assert_eq!(timer.pending(), 1);

        // the first reveal was cancelled, so nothing happens at its due time
        timer.advance(DELAY / 2);
        assert_eq!(quiz.phase(), QuizPhase::Unanswered);

        timer.advance(DELAY);
        let snap = quiz.snapshot();
        assert_eq!(snap.options[1].1, OptionMark::Correct);
        assert_eq!(count(&snap, OptionMark::Incorrect), 0);
    }

    #[test]
    fn test_clicks_after_answer_are_ignored() {
        let (quiz, timer) = setup(NextPolicy::AfterAnswer);
        quiz.select(2);
        timer.advance(DELAY);
        let before = quiz.snapshot();

        quiz.select(1);
        quiz.select(2);
        timer.advance(DELAY * 3);
        assert_eq!(quiz.snapshot(), before);
        assert_eq!(timer.pending(), 0);
    }

    #[test]
    fn test_next_blocked_until_answered() {
        let (quiz, timer) = setup(NextPolicy::AfterAnswer);
        quiz.next();
        assert_eq!(quiz.index(), 0);

        quiz.select(1);
        quiz.next();
        assert_eq!(quiz.index(), 0);

        timer.advance(DELAY);
        quiz.next();
        assert_eq!(quiz.index(), 1);
        assert_eq!(quiz.phase(), QuizPhase::Unanswered);
        assert!(!quiz.next_enabled());
        assert!(quiz.snapshot().options.iter().all(|(_, m)| *m == OptionMark::Idle));
    }

    #[test]
    fn test_next_wraps_around() {
        let (quiz, timer) = setup(NextPolicy::AfterAnswer);
        for n in 1..=5 {
            quiz.select(0);
            timer.advance(DELAY);
            quiz.next();
            assert_eq!(quiz.index(), n % 2);
        }
    }

    #[test]
    fn test_skip_policy_allows_immediate_next() {
        let (quiz, timer) = setup(NextPolicy::Always);
        assert!(quiz.next_enabled());
        for n in 1..=3 {
            quiz.next();
            assert_eq!(quiz.index(), n % 2);
        }

        // a pending reveal does not leak into the following question
        quiz.select(2);
        quiz.next();
        timer.advance(DELAY);
        assert_eq!(quiz.phase(), QuizPhase::Unanswered);
    }

    #[test]
    fn test_listener_sees_each_change() {
        let (quiz, timer) = setup(NextPolicy::AfterAnswer);
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        quiz.on_change(move |_| seen.set(seen.get() + 1));

        quiz.select(0);
        timer.advance(DELAY);
        quiz.next();
        assert_eq!(calls.get(), 3);
    }
}
