use crate::models::{Difficulty, StudentLevel};

/// Source of generated questions
///
/// Implementations must be pure: the same input gives the same list, in the
/// same order, and nothing is stored between calls.
pub trait QuestionGenerator: Send + Sync {
    /// Questions about `topic` at the given difficulty
    fn generate_quiz(&self, topic: &str, difficulty: Difficulty) -> Vec<String>;

    /// Placement questions for a student at the given level
    fn generate_diagnostic(&self, level: StudentLevel) -> Vec<String>;
}

const EASY_TEMPLATES: &[&str] = &["What is {topic}?", "Give a simple example of {topic}."];

const MEDIUM_TEMPLATES: &[&str] = &[
    "Describe the key ideas behind {topic}.",
    "Give a worked example involving {topic}.",
];

const HARD_TEMPLATES: &[&str] = &[
    "Explain the advanced concepts of {topic}.",
    "Provide an in-depth example related to {topic}.",
];

const BEGINNER_DIAGNOSTIC: &[&str] = &["What is 2+2?", "Name a primary color."];

const INTERMEDIATE_DIAGNOSTIC: &[&str] = &["What is 8 + 7?", "Solve for x: 2x + 3 = 9."];

const ADVANCED_DIAGNOSTIC: &[&str] = &[
    "Solve x in 2x+5=15.",
    "Describe the process of photosynthesis.",
];

/// Fills fixed question templates with the requested topic
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateGenerator;

impl TemplateGenerator {
    pub fn new() -> Self {
        TemplateGenerator
    }

    fn templates_for(difficulty: Difficulty) -> &'static [&'static str] {
        match difficulty {
            Difficulty::Easy => EASY_TEMPLATES,
            Difficulty::Medium => MEDIUM_TEMPLATES,
            Difficulty::Hard => HARD_TEMPLATES,
        }
    }
}

impl QuestionGenerator for TemplateGenerator {
    fn generate_quiz(&self, topic: &str, difficulty: Difficulty) -> Vec<String> {
        Self::templates_for(difficulty)
            .iter()
            .map(|template| template.replace("{topic}", topic))
            .collect()
    }

    fn generate_diagnostic(&self, level: StudentLevel) -> Vec<String> {
        let questions = match level {
            StudentLevel::Beginner => BEGINNER_DIAGNOSTIC,
            StudentLevel::Intermediate => INTERMEDIATE_DIAGNOSTIC,
            StudentLevel::Advanced => ADVANCED_DIAGNOSTIC,
        };

        questions.iter().map(|q| q.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easy_quiz_uses_topic() {
        let questions = TemplateGenerator::new().generate_quiz("Fractions", Difficulty::Easy);
        assert_eq!(
            questions,
            vec!["What is Fractions?", "Give a simple example of Fractions."]
        );
    }

    #[test]
    fn hard_quiz_differs_from_easy() {
        let generator = TemplateGenerator::new();
        let hard = generator.generate_quiz("Algebra", Difficulty::Hard);
        assert_eq!(hard[0], "Explain the advanced concepts of Algebra.");
        assert_ne!(hard, generator.generate_quiz("Algebra", Difficulty::Easy));
    }

    #[test]
    fn every_difficulty_produces_questions() {
        let generator = TemplateGenerator::new();
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let questions = generator.generate_quiz("Optics", difficulty);
            assert!(!questions.is_empty());
            assert!(questions.iter().all(|q| q.contains("Optics")));
        }
    }

    #[test]
    fn topic_is_inserted_verbatim() {
        let questions =
            TemplateGenerator::new().generate_quiz("<b>x & y</b>", Difficulty::Easy);
        assert_eq!(questions[0], "What is <b>x & y</b>?");
    }

    #[test]
    fn diagnostic_per_level() {
        let generator = TemplateGenerator::new();
        assert_eq!(
            generator.generate_diagnostic(StudentLevel::Beginner),
            vec!["What is 2+2?", "Name a primary color."]
        );
        assert_eq!(
            generator.generate_diagnostic(StudentLevel::Intermediate)[0],
            "What is 8 + 7?"
        );
        assert_eq!(
            generator.generate_diagnostic(StudentLevel::Advanced),
            vec![
                "Solve x in 2x+5=15.",
                "Describe the process of photosynthesis."
            ]
        );
    }

    #[test]
    fn generation_is_deterministic() {
        let generator = TemplateGenerator::new();
        assert_eq!(
            generator.generate_quiz("Rust", Difficulty::Medium),
            generator.generate_quiz("Rust", Difficulty::Medium)
        );
    }
}
