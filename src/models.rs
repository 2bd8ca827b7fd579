//! Frontend Models
//!
//! Data structures for tracks and quiz questions.

use serde::{Deserialize, Deserializer, Serialize};

/// A named learning track with completion percentage.
/// Field names match the persisted `trilhas` JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "progresso", default, deserialize_with = "clamped_progress")]
    pub progress: u8,
}

/// Accept any JSON number and clamp it into 0..=100
fn clamped_progress<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let value = f64::deserialize(deserializer)?;
    Ok(value.round().clamp(0.0, 100.0) as u8)
}

impl Track {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            progress: 0,
        }
    }

    pub fn with_progress(name: impl Into<String>, progress: u8) -> Self {
        Self {
            name: name.into(),
            progress,
        }
    }

    /// Progress clamped to a valid bar width
    pub fn percent(&self) -> u8 {
        self.progress.min(100)
    }
}

/// Tracks shown when nothing is persisted yet
pub fn default_tracks() -> Vec<Track> {
    vec![
        Track::with_progress("HTML e CSS", 60),
        Track::with_progress("JavaScript", 35),
        Track::with_progress("Lógica de Programação", 10),
    ]
}

/// A multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: usize,
}

impl QuizQuestion {
    pub fn new(prompt: &str, options: [&str; 4], correct: usize) -> Self {
        Self {
            prompt: prompt.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct,
        }
    }

    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct
    }
}

/// The fixed question set
pub fn quiz_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion::new(
            "O que é uma variável em programação?",
            [
                "Um valor fixo que nunca muda",
                "Um espaço na memória para armazenar valores",
                "Um tipo de dado específico",
                "Um operador lógico",
            ],
            1,
        ),
        QuizQuestion::new(
            "O que significa HTML?",
            [
                "Hyper Text Markup Language",
                "Home Tool Markup Language",
                "Hyperlinks Text Made Logic",
                "High Transfer Machine Language",
            ],
            0,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_json_field_names() {
        let json = serde_json::to_string(&Track::with_progress("Algebra", 40)).unwrap();
        assert_eq!(json, r#"{"nome":"Algebra","progresso":40}"#);
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        let tracks: Vec<Track> = serde_json::from_str(
            r#"[{"nome":"a","progresso":300},{"nome":"b","progresso":-5},{"nome":"c","progresso":42.6},{"nome":"d"}]"#,
        )
        .unwrap();
        let progress: Vec<u8> = tracks.iter().map(|t| t.progress).collect();
        assert_eq!(progress, [100, 0, 43, 0]);
    }

    #[test]
    fn test_percent_is_clamped() {
        assert_eq!(Track::with_progress("x", 250).percent(), 100);
        assert_eq!(Track::new("x").percent(), 0);
    }

    #[test]
    fn test_quiz_questions_are_well_formed() {
        let questions = quiz_questions();
        assert_eq!(questions.len(), 2);
        for q in &questions {
            assert_eq!(q.options.len(), 4);
            assert!(q.correct < q.options.len());
        }
        assert!(questions[0].is_correct(1));
        assert!(questions[1].is_correct(0));
    }
}
