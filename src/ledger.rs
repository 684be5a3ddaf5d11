use std::collections::BTreeMap;

/// Respuestas elegidas por el usuario, indexadas por posición de la pregunta.
/// Una pregunta ausente significa "sin responder".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnswerLedger {
    answers: BTreeMap<usize, String>,
}

impl AnswerLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sustituye la selección anterior. No comprueba que `option` exista.
    pub fn record(&mut self, index: usize, option: impl Into<String>) {
        self.answers.insert(index, option.into());
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.answers.iter().map(|(i, o)| (*i, o.as_str()))
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    /// Formato de `/analyze`: las claves son el índice como texto.
    pub fn to_wire(&self) -> BTreeMap<String, String> {
        self.answers
            .iter()
            .map(|(i, o)| (i.to_string(), o.clone()))
            .collect()
    }
}
