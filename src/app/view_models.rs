use super::QuizApp;
use crate::model::MasteryTier;
use crate::scoring::is_correct;

/// Fila de la revisión de respuestas en el informe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewRow {
    pub number: usize,
    pub prompt: String,
    pub given: Option<String>,
    pub expected: String,
    pub correct: bool,
}

impl ReviewRow {
    pub fn given_label(&self) -> &str {
        self.given.as_deref().unwrap_or("No answer")
    }
}

pub fn tier_copy(tier: MasteryTier) -> &'static str {
    match tier {
        MasteryTier::Basic => {
            "You're building the foundations. Re-read the summary and focus on the weak topics below."
        }
        MasteryTier::Advanced => {
            "Solid understanding. A little more practice on the weak topics will get you to mastery."
        }
        MasteryTier::Master => "Excellent! You have mastered this material.",
    }
}

impl QuizApp {
    pub fn review_rows(&self) -> Vec<ReviewRow> {
        let ledger = self.session.ledger();
        self.session
            .questions()
            .iter()
            .enumerate()
            .map(|(i, q)| {
                let given = ledger.get(i);
                ReviewRow {
                    number: i + 1,
                    prompt: q.prompt.clone(),
                    given: given.map(str::to_string),
                    expected: q.correct_option.clone(),
                    correct: is_correct(q, given),
                }
            })
            .collect()
    }

    pub fn score_line(&self) -> Option<String> {
        self.session
            .report()
            .map(|r| format!("Your Score: {} / {}", r.correct_count, r.total))
    }
}
