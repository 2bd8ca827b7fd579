//! Login/Signup Forms
//!
//! Placeholder handlers until a real authentication service exists:
//! login fakes success by going to the dashboard, signup only greets.

use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};

use crate::config::DASHBOARD_URL;
use crate::platform::Interaction;

pub const FILL_FIELDS_MESSAGE: &str = "Por favor, preencha email e senha.";
pub const GOOGLE_LOGIN_MESSAGE: &str = "Login com Google ainda não implementado.";
pub const NAVIGATION_FAILED_MESSAGE: &str = "Não foi possível abrir o painel. Tente novamente.";

/// Result of a login submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Both fields filled; the page moves to this destination
    Navigated(String),
    /// A field was empty; the user was asked to fill it
    MissingFields,
    /// The browser refused to navigate; the error slot says so
    NavigationFailed,
}

pub struct AuthFormController {
    interaction: Rc<dyn Interaction>,
    /// Text for the form's error slot, empty when there is nothing to show
    error_message: RefCell<String>,
}

impl AuthFormController {
    pub fn new(interaction: Rc<dyn Interaction>) -> Self {
        Self {
            interaction,
            error_message: RefCell::new(String::new()),
        }
    }

    pub fn error_message(&self) -> String {
        self.error_message.borrow().clone()
    }

    /// Every submit starts by clearing the previous error
    pub fn submit_login(&self, email: &str, password: &str) -> LoginOutcome {
        info!("[AUTH] Login attempt for {:?}", email);
        self.error_message.borrow_mut().clear();
        if email.is_empty() || password.is_empty() {
            self.interaction.alert(FILL_FIELDS_MESSAGE);
            return LoginOutcome::MissingFields;
        }
        if let Err(e) = self.interaction.navigate(DASHBOARD_URL) {
            warn!("[AUTH] Navigation to dashboard failed: {}", e);
            *self.error_message.borrow_mut() = NAVIGATION_FAILED_MESSAGE.to_string();
            return LoginOutcome::NavigationFailed;
        }
        LoginOutcome::Navigated(DASHBOARD_URL.to_string())
    }

    pub fn submit_signup(&self, name: &str, email: &str, _password: &str) {
        info!("[AUTH] Signup for {:?} <{}>", name, email);
        self.interaction.alert(&format!("Bem-vindo(a), {}! Sua conta foi criada.", name));
    }

    pub fn google_login(&self) {
        info!("[AUTH] Google login attempt");
        self.interaction.alert(GOOGLE_LOGIN_MESSAGE);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Login,
    Signup,
}

impl Tab {
    /// Reads the `data-tab` attribute value
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "login" => Some(Tab::Login),
            "signup" => Some(Tab::Signup),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Login => "login",
            Tab::Signup => "signup",
        }
    }
}

/// Two-way login/signup switch. Always starts on login.
#[derive(Debug, Default)]
pub struct TabController {
    active: Tab,
}

impl TabController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn activate(&mut self, tab: Tab) {
        self.active = tab;
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }

    /// Underline under the tab buttons
    pub fn indicator_offset(&self) -> &'static str {
        match self.active {
            Tab::Login => "translateX(0%)",
            Tab::Signup => "translateX(100%)",
        }
    }

    /// The forms panel is two forms wide
    pub fn panel_offset(&self) -> &'static str {
        match self.active {
            Tab::Login => "translateX(0%)",
            Tab::Signup => "translateX(-50%)",
        }
    }
}
