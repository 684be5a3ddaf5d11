use serde::{Deserialize, Serialize};

/// Pregunta tal y como llega del backend: `{ question, options, answer }`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(rename = "answer")]
    pub correct_option: String,
}

impl QuizQuestion {
    pub fn new(prompt: impl Into<String>, options: &[&str], correct_option: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_option: correct_option.into(),
        }
    }

    /// `false` cuando la respuesta correcta no está entre las opciones
    /// (o hay menos de dos opciones). Esa pregunta nunca puntúa.
    pub fn is_well_formed(&self) -> bool {
        self.options.len() >= 2 && self.options.contains(&self.correct_option)
    }
}

/// PDF elegido por el usuario. Sólo vive en memoria.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadArtifact {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadArtifact {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

// Evita volcar el PDF entero en los logs
impl std::fmt::Debug for UploadArtifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadArtifact")
            .field("name", &self.name)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Upload,
    Loading,
    Quiz,
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MasteryTier {
    Basic,
    Advanced,
    Master,
}

impl MasteryTier {
    /// Bandas cerradas por abajo: [0,50) Basic, [50,80) Advanced, [80,100] Master.
    pub fn for_accuracy(accuracy_percent: f64) -> Self {
        if accuracy_percent < 50.0 {
            MasteryTier::Basic
        } else if accuracy_percent < 80.0 {
            MasteryTier::Advanced
        } else {
            MasteryTier::Master
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MasteryTier::Basic => "Basic",
            MasteryTier::Advanced => "Advanced",
            MasteryTier::Master => "Master",
        }
    }
}

/// Resultado de corregir un cuestionario. Se recalcula entero en cada envío.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreReport {
    pub correct_count: usize,
    pub total: usize,
    pub accuracy_percent: f64,
    pub mastery_tier: MasteryTier,
    pub strong_topics: Vec<String>,
    pub weak_topics: Vec<String>,
    pub feedback_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_uses_backend_field_names() {
        let json = r#"{"question":"2+2?","options":["3","4"],"answer":"4"}"#;
        let q: QuizQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(q.prompt, "2+2?");
        assert_eq!(q.correct_option, "4");

        let back = serde_json::to_value(&q).unwrap();
        assert_eq!(back["question"], "2+2?");
        assert_eq!(back["answer"], "4");
    }

    #[test]
    fn malformed_questions_are_detected() {
        assert!(QuizQuestion::new("q", &["a", "b"], "a").is_well_formed());
        assert!(!QuizQuestion::new("q", &["a", "b"], "c").is_well_formed());
        assert!(!QuizQuestion::new("q", &["a"], "a").is_well_formed());
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(MasteryTier::for_accuracy(0.0), MasteryTier::Basic);
        assert_eq!(MasteryTier::for_accuracy(49.99), MasteryTier::Basic);
        assert_eq!(MasteryTier::for_accuracy(50.0), MasteryTier::Advanced);
        assert_eq!(MasteryTier::for_accuracy(79.99), MasteryTier::Advanced);
        assert_eq!(MasteryTier::for_accuracy(80.0), MasteryTier::Master);
        assert_eq!(MasteryTier::for_accuracy(100.0), MasteryTier::Master);
    }

    #[test]
    fn artifact_debug_hides_bytes() {
        let artifact = UploadArtifact::new("notes.pdf", vec![1, 2, 3]);
        assert_eq!(
            format!("{artifact:?}"),
            "UploadArtifact { name: \"notes.pdf\", bytes: 3 }"
        );
    }
}
