//! Grading of submitted answers against an assignment.

use crate::models::{Answer, Assignment};
use crate::protocol::{AnswerResult, SubmissionResult};

/// Grade `answers` against `assignment`.
///
/// Each answer is matched to the first question with the same id and is
/// correct only when the selected option equals the question's correct
/// answer exactly. The denominator is always the assignment's question
/// count, so unanswered questions count against the score and unknown ones
/// do not add to it. An assignment without questions scores `0.0`.
pub fn grade(assignment: &Assignment, answers: &[Answer]) -> SubmissionResult {
    let detailed_results: Vec<AnswerResult> = answers
        .iter()
        .map(|answer| match assignment.question(answer.question_id) {
            Some(question) => AnswerResult {
                question_id: answer.question_id,
                selected_option: answer.selected_option.clone(),
                is_correct: question.correct_answer == answer.selected_option,
                correct_answer: Some(question.correct_answer.clone()),
                question_text: question.text.clone(),
                options: question.options.clone(),
            },
            None => AnswerResult {
                question_id: answer.question_id,
                selected_option: answer.selected_option.clone(),
                is_correct: false,
                correct_answer: None,
                question_text: String::new(),
                options: Vec::new(),
            },
        })
        .collect();

    let total_questions = assignment.questions.len();
    let correct_answers = detailed_results.iter().filter(|r| r.is_correct).count();

    SubmissionResult {
        total_questions,
        correct_answers,
        score_percent: score_percent(correct_answers, total_questions),
        detailed_results,
    }
}

fn score_percent(correct: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (correct as f64 / total as f64) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Question;

    fn question(id: i64, options: &[&str], correct: &str) -> Question {
        Question {
            id,
            text: format!("Q{}", id),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: correct.to_string(),
        }
    }

    fn sample() -> Assignment {
        Assignment {
            id: "a1".to_string(),
            title: "Sample".to_string(),
            questions: vec![
                question(1, &["A", "B"], "A"),
                question(2, &["C", "D"], "D"),
            ],
            due_date: None,
            submitted_on: None,
        }
    }

    #[test]
    fn test_half_correct() {
        let answers = [Answer::new(1, "A"), Answer::new(2, "C")];
        let result = grade(&sample(), &answers);

        assert_eq!(result.total_questions, 2);
        assert_eq!(result.correct_answers, 1);
        assert_eq!(result.score_percent, 50.0);
        assert!(result.detailed_results[0].is_correct);
        assert!(!result.detailed_results[1].is_correct);
        assert_eq!(result.detailed_results[1].correct_answer.as_deref(), Some("D"));
    }

    #[test]
    fn test_all_correct() {
        let assignment = sample();
        let answers: Vec<_> = assignment
            .questions
            .iter()
            .map(|q| Answer::new(q.id, q.correct_answer.clone()))
            .collect();

        let result = grade(&assignment, &answers);
        assert_eq!(result.correct_answers, assignment.questions.len());
        assert_eq!(result.score_percent, 100.0);
    }

    #[test]
    fn test_no_answers() {
        let result = grade(&sample(), &[]);
        assert_eq!(result.correct_answers, 0);
        assert_eq!(result.score_percent, 0.0);
        assert!(result.detailed_results.is_empty());
    }

    #[test]
    fn test_unknown_question() {
        let result = grade(&sample(), &[Answer::new(42, "A")]);
        let detail = &result.detailed_results[0];

        assert_eq!(result.correct_answers, 0);
        assert_eq!(result.total_questions, 2);
        assert!(!detail.is_correct);
        assert_eq!(detail.correct_answer, None);
        assert!(detail.question_text.is_empty());
        assert!(detail.options.is_empty());
    }

    #[test]
    fn test_exact_string_match() {
        let answers = [Answer::new(1, "a"), Answer::new(2, "D ")];
        assert_eq!(grade(&sample(), &answers).correct_answers, 0);
    }

    #[test]
    fn test_detail_order_follows_answers() {
        let answers = [Answer::new(2, "D"), Answer::new(42, "Z"), Answer::new(1, "B")];
        let ids: Vec<_> = grade(&sample(), &answers)
            .detailed_results
            .iter()
            .map(|r| r.question_id)
            .collect();
        assert_eq!(ids, [2, 42, 1]);
    }

    #[test]
    fn test_grading_is_idempotent() {
        let answers = [Answer::new(1, "A"), Answer::new(2, "C")];
        assert_eq!(grade(&sample(), &answers), grade(&sample(), &answers));
    }

    #[test]
    fn test_zero_questions_scores_zero() {
        let mut assignment = sample();
        assignment.questions.clear();

        let result = grade(&assignment, &[Answer::new(1, "A")]);
        assert_eq!(result.total_questions, 0);
        assert_eq!(result.score_percent, 0.0);
        assert!(result.score_percent.is_finite());
    }

    #[test]
    fn test_repeated_answers_each_count() {
        let answers = [Answer::new(1, "A"), Answer::new(1, "A")];
        let result = grade(&sample(), &answers);
        assert_eq!(result.correct_answers, 2);
        assert_eq!(result.score_percent, 100.0);
    }
}
