use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Longest topic accepted, counted in characters after normalisation
pub const MAX_TOPIC_CHARS: usize = 200;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Quiz generation request
///
/// Received as the JSON body of `/generate_quiz` or as the form body of `/quiz`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    /// Subject the questions are about
    pub topic: String,

    /// Free-text difficulty ("easy", "medium" or "hard"), medium when absent or null
    #[serde(default)]
    pub difficulty: Option<String>,
}

/// Diagnostic test request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticRequest {
    /// Free-text student level ("beginner", "intermediate" or "advanced"), beginner when absent or null
    #[serde(default)]
    pub student_level: Option<String>,
}

/// Response of `/generate_quiz`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResponse {
    pub quiz_id: String,
    pub questions: Vec<String>,
}

/// Response of `/generate_diagnostic`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticResponse {
    pub diagnostic_id: String,
    pub questions: Vec<String>,
}

impl QuizResponse {
    pub fn new(questions: Vec<String>) -> Self {
        QuizResponse {
            quiz_id: Uuid::new_v4().to_string(),
            questions,
        }
    }
}

impl DiagnosticResponse {
    pub fn new(questions: Vec<String>) -> Self {
        DiagnosticResponse {
            diagnostic_id: Uuid::new_v4().to_string(),
            questions,
        }
    }
}

/// Reasons a request field could not be accepted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("topic must not be empty")]
    EmptyTopic,
    #[error("topic is {0} characters long, at most {max} are allowed", max = MAX_TOPIC_CHARS)]
    TopicTooLong(usize),
    #[error("unknown difficulty '{0}', expected one of: easy, medium, hard")]
    UnknownDifficulty(String),
    #[error("unknown student level '{0}', expected one of: beginner, intermediate, advanced")]
    UnknownStudentLevel(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = ParseError;

    /// Case-insensitive; a blank value means the default
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" => Ok(Difficulty::default()),
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseError::UnknownDifficulty(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudentLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl StudentLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StudentLevel::Beginner => "beginner",
            StudentLevel::Intermediate => "intermediate",
            StudentLevel::Advanced => "advanced",
        }
    }
}

impl FromStr for StudentLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" => Ok(StudentLevel::default()),
            "beginner" => Ok(StudentLevel::Beginner),
            "intermediate" => Ok(StudentLevel::Intermediate),
            "advanced" => Ok(StudentLevel::Advanced),
            _ => Err(ParseError::UnknownStudentLevel(s.trim().to_string())),
        }
    }
}

impl fmt::Display for StudentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trim a topic and collapse inner whitespace runs to single spaces
///
/// # Returns
/// * `Result<String, ParseError>` - The normalised topic, or why it was rejected
pub fn normalize_topic(topic: &str) -> Result<String, ParseError> {
    let normalized = WHITESPACE_RUN.replace_all(topic.trim(), " ").into_owned();

    if normalized.is_empty() {
        return Err(ParseError::EmptyTopic);
    }

    let len = normalized.chars().count();
    if len > MAX_TOPIC_CHARS {
        return Err(ParseError::TopicTooLong(len));
    }

    Ok(normalized)
}

impl QuizRequest {
    /// Validate the raw request into a normalised topic and a difficulty
    pub fn parse(&self) -> Result<(String, Difficulty), ParseError> {
        let topic = normalize_topic(&self.topic)?;
        let difficulty = self.difficulty.as_deref().unwrap_or("").parse()?;
        Ok((topic, difficulty))
    }
}

impl DiagnosticRequest {
    pub fn parse(&self) -> Result<StudentLevel, ParseError> {
        self.student_level.as_deref().unwrap_or("").parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_request_defaults_difficulty() {
        let req: QuizRequest = serde_json::from_str(r#"{"topic": "Fractions"}"#).unwrap();
        assert_eq!(req.difficulty, None);
        assert_eq!(
            req.parse().unwrap(),
            ("Fractions".to_string(), Difficulty::Medium)
        );
    }

    #[test]
    fn diagnostic_request_defaults_level() {
        let req: DiagnosticRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.parse().unwrap(), StudentLevel::Beginner);
    }

    #[test]
    fn null_fields_use_defaults() {
        let req: QuizRequest =
            serde_json::from_str(r#"{"topic": "Optics", "difficulty": null}"#).unwrap();
        assert_eq!(req.parse().unwrap().1, Difficulty::Medium);

        let req: DiagnosticRequest =
            serde_json::from_str(r#"{"student_level": null}"#).unwrap();
        assert_eq!(req.parse().unwrap(), StudentLevel::Beginner);
    }

    #[test]
    fn quiz_request_requires_topic() {
        assert!(serde_json::from_str::<QuizRequest>(r#"{"difficulty": "hard"}"#).is_err());
    }

    #[test]
    fn difficulty_is_case_insensitive() {
        assert_eq!(" HARD ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!("Easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("".parse::<Difficulty>().unwrap(), Difficulty::Medium);
    }

    #[test]
    fn unknown_difficulty_is_rejected() {
        let err = "impossible".parse::<Difficulty>().unwrap_err();
        assert_eq!(err, ParseError::UnknownDifficulty("impossible".to_string()));
        assert!(err.to_string().contains("easy, medium, hard"));
    }

    #[test]
    fn unknown_level_is_rejected() {
        assert!(matches!(
            "expert".parse::<StudentLevel>(),
            Err(ParseError::UnknownStudentLevel(_))
        ));
        assert_eq!(
            "Intermediate".parse::<StudentLevel>().unwrap(),
            StudentLevel::Intermediate
        );
    }

    #[test]
    fn topic_is_normalized() {
        assert_eq!(normalize_topic("  Linear \t\n algebra ").unwrap(), "Linear algebra");
        assert_eq!(normalize_topic("   "), Err(ParseError::EmptyTopic));
    }

    #[test]
    fn topic_length_is_limited() {
        let at_limit = "a".repeat(MAX_TOPIC_CHARS);
        assert!(normalize_topic(&at_limit).is_ok());

        let over = "é".repeat(MAX_TOPIC_CHARS + 1);
        assert_eq!(
            normalize_topic(&over),
            Err(ParseError::TopicTooLong(MAX_TOPIC_CHARS + 1))
        );
    }

    #[test]
    fn responses_get_fresh_ids() {
        let a = QuizResponse::new(vec![]);
        let b = QuizResponse::new(vec![]);
        assert_ne!(a.quiz_id, b.quiz_id);
        assert!(Uuid::parse_str(&a.quiz_id).is_ok());

        let d = DiagnosticResponse::new(vec!["Q".to_string()]);
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["questions"][0], "Q");
        assert!(json["diagnostic_id"].is_string());
    }
}
