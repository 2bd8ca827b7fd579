//! Page Controllers
//!
//! Per-page state machines. They own their state and talk to the browser
//! only through the platform capabilities; the `pages` module binds them to
//! the DOM.

mod auth;
mod locale;
mod quiz;
mod theme;
mod tracks;
mod upload;

pub use auth::{AuthFormController, LoginOutcome, Tab, TabController};
pub use locale::LocaleController;
pub use quiz::{NextPolicy, OptionMark, QuizController, QuizPhase, QuizSession, QuizSnapshot};
pub use theme::{ThemeController, ThemeState};
pub use tracks::{TrackListController, EMPTY_LIST_MESSAGE};
pub use upload::UploadController;
