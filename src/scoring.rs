// src/scoring.rs

use crate::ledger::AnswerLedger;
use crate::model::{MasteryTier, QuizQuestion, ScoreReport};

/// Corrige el cuestionario en local. No depende de la red: el informe se
/// muestra aunque el análisis remoto falle.
pub fn score(questions: &[QuizQuestion], ledger: &AnswerLedger) -> ScoreReport {
    let mut strong_topics = Vec::new();
    let mut weak_topics = Vec::new();

    for (i, q) in questions.iter().enumerate() {
        if is_correct(q, ledger.get(i)) {
            strong_topics.push(q.prompt.clone());
        } else {
            weak_topics.push(q.prompt.clone());
        }
    }

    let correct_count = strong_topics.len();
    let accuracy_percent = accuracy(correct_count, questions.len());

    ScoreReport {
        correct_count,
        total: questions.len(),
        accuracy_percent,
        mastery_tier: MasteryTier::for_accuracy(accuracy_percent),
        strong_topics,
        weak_topics,
        feedback_text: String::new(),
    }
}

/// Igualdad exacta de cadenas; sin responder nunca acierta.
pub fn is_correct(question: &QuizQuestion, given: Option<&str>) -> bool {
    given == Some(question.correct_option.as_str())
}

/// Porcentaje redondeado a dos decimales. Un cuestionario vacío vale 0.
pub fn accuracy(correct: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(correct as f64 / total as f64 * 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
