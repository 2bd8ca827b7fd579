//! Hero Text Dictionary
//!
//! The three supported languages and the landing-page strings for each.

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Pt,
    En,
    Es,
}

/// The four translatable slots of the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroTexts {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
    pub login: &'static str,
}

const PT: HeroTexts = HeroTexts {
    title: "Organize seus estudos em um só lugar.",
    subtitle: "Nossa plataforma inteligente ajuda você a focar, aprender e alcançar seus objetivos acadêmicos com mais eficiência.",
    cta: "Comece agora gratuitamente",
    login: "Login",
};

const EN: HeroTexts = HeroTexts {
    title: "Organize your studies in one place.",
    subtitle: "Our smart platform helps you focus, learn, and achieve your academic goals more efficiently.",
    cta: "Get started for free",
    login: "Login",
};

const ES: HeroTexts = HeroTexts {
    title: "Organice sus estudios en un solo lugar.",
    subtitle: "Nuestra plataforma inteligente le ayuda a concentrarse, aprender y alcanzar sus objetivos académicos de forma más eficiente.",
    cta: "Empiece ahora gratis",
    login: "Iniciar Sesión",
};

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Pt, Locale::En, Locale::Es];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::Pt => "pt",
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    /// `None` for codes outside the dictionary
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pt" => Some(Locale::Pt),
            "en" => Some(Locale::En),
            "es" => Some(Locale::Es),
            _ => None,
        }
    }

    pub fn texts(&self) -> &'static HeroTexts {
        match self {
            Locale::Pt => &PT,
            Locale::En => &EN,
            Locale::Es => &ES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
        assert_eq!(Locale::from_code("fr"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn test_spanish_login_label() {
        assert_eq!(Locale::Es.texts().login, "Iniciar Sesión");
        assert_eq!(Locale::default(), Locale::Pt);
    }
}
