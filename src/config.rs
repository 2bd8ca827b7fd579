//! Page Configuration
//!
//! Element ids, CSS classes, storage keys and timings shared by the pages.

// ========================
// Storage Keys
// ========================

pub const THEME_KEY: &str = "theme";
pub const LANGUAGE_KEY: &str = "language";
pub const TRACKS_KEY: &str = "trilhas";

// ========================
// Element IDs
// ========================

pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const THEME_ICON_ID: &str = "theme-icon";

pub const LANG_TOGGLE_ID: &str = "lang-toggle";
pub const LANG_OPTIONS_ID: &str = "lang-options";
pub const LANG_DROPDOWN_ID: &str = "lang-dropdown-container";
pub const HERO_TITLE_ID: &str = "hero-title";
pub const HERO_SUBTITLE_ID: &str = "hero-subtitle";
pub const CTA_BUTTON_ID: &str = "cta-button";
pub const LOGIN_BUTTON_ID: &str = "login-button";

pub const QUIZ_CONTAINER_ID: &str = "quiz-container";
pub const QUIZ_NEXT_ID: &str = "next-btn";

pub const TRACK_LIST_ID: &str = "lista-trilhas";
pub const NEW_TRACK_ID: &str = "nova-trilha";

pub const UPLOAD_BUTTON_ID: &str = "upload-btn";
pub const FILE_INPUT_ID: &str = "file-input";
pub const FILE_NAME_ID: &str = "file-name";
pub const DROP_ZONE_ID: &str = "drop-zone";

pub const LOGIN_FORM_ID: &str = "login-form";
pub const LOGIN_EMAIL_ID: &str = "email";
pub const LOGIN_PASSWORD_ID: &str = "senha";
pub const SIGNUP_FORM_ID: &str = "signup-form";
pub const SIGNUP_NAME_ID: &str = "signup-nome";
pub const SIGNUP_EMAIL_ID: &str = "signup-email";
pub const SIGNUP_PASSWORD_ID: &str = "signup-senha";
pub const ERROR_MESSAGE_ID: &str = "error-message";
pub const GOOGLE_LOGIN_ID: &str = "google-login-btn";

pub const FORMS_WRAPPER_ID: &str = "forms-wrapper";
pub const TAB_INDICATOR_ID: &str = "tab-indicator";
/// Tab buttons and in-form switch links carry `data-tab="login|signup"`
pub const TAB_BUTTON_SELECTOR: &str = ".tab-btn";
pub const SWITCH_TAB_SELECTOR: &str = ".switch-tab";

// ========================
// CSS Classes
// ========================

pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const SHOW_CLASS: &str = "show";
pub const ACTIVE_CLASS: &str = "active";
pub const DRAG_OVER_CLASS: &str = "drag-over";

// ========================
// Behavior
// ========================

/// Delay between picking a quiz option and revealing the answer
pub const QUIZ_REVEAL_DELAY_MS: u32 = 500;

/// Where a successful (simulated) login lands
pub const DASHBOARD_URL: &str = "dashboard.html";

/// Lines kept by the in-memory log buffer
pub const LOG_BUFFER_LINES: usize = 200;
