use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Selectable answer carrying open-keyed trait weights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
    pub scores: BTreeMap<String, u32>,
}

impl QuizOption {
    fn new(id: &str, text: &str, scores: &[(&str, u32)]) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            scores: scores
                .iter()
                .map(|(key, weight)| (key.to_string(), *weight))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub question: String,
    pub options: Vec<QuizOption>,
}

impl Question {
    pub fn option(&self, option_id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|option| option.id == option_id)
    }
}

/// Validated, read-only set of quiz questions. Built once at startup and shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionBankError> {
        if questions.is_empty() {
            return Err(QuestionBankError::Empty);
        }

        let mut seen_questions = HashSet::new();
        for question in &questions {
            if !seen_questions.insert(question.id) {
                return Err(QuestionBankError::DuplicateQuestion(question.id));
            }
            if question.options.is_empty() {
                return Err(QuestionBankError::NoOptions(question.id));
            }

            let mut seen_options = HashSet::new();
            for option in &question.options {
                if !seen_options.insert(option.id.as_str()) {
                    return Err(QuestionBankError::DuplicateOption {
                        question: question.id,
                        option: option.id.clone(),
                    });
                }
            }
        }

        Ok(Self { questions })
    }

    /// The built-in seven-question cavoodle quiz.
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, QuestionBankError> {
        let questions: Vec<Question> = serde_json::from_reader(reader)?;
        Self::new(questions)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, QuestionBankError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Raised when a question bank cannot be loaded; fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum QuestionBankError {
    #[error("question bank contains no questions")]
    Empty,
    #[error("question id {0} appears more than once")]
    DuplicateQuestion(u32),
    #[error("question {0} has no options")]
    NoOptions(u32),
    #[error("question {question} repeats option id '{option}'")]
    DuplicateOption { question: u32, option: String },
    #[error("unable to read question bank: {0}")]
    Io(#[from] std::io::Error),
    #[error("question bank is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn standard_questions() -> Vec<Question> {
    vec![
        Question {
            id: 1,
            question: "When the doorbell rings, your cavoodle...".to_string(),
            options: vec![
                QuizOption::new(
                    "A",
                    "Loses their absolute mind (5 mins of barking minimum)",
                    &[("bark", 5), ("energy", 4)],
                ),
                QuizOption::new(
                    "B",
                    "Does a single boof then returns to napping",
                    &[("chill", 4), ("energy", 1)],
                ),
                QuizOption::new(
                    "C",
                    "Sprints to the door hoping for treats",
                    &[("treat", 5), ("energy", 3)],
                ),
                QuizOption::new(
                    "D",
                    "Hides behind the couch (stranger danger!)",
                    &[("drama", 3), ("sass", 2)],
                ),
            ],
        },
        Question {
            id: 2,
            question: "Your cavoodle's relationship with socks is best described as..."
                .to_string(),
            options: vec![
                QuizOption::new(
                    "A",
                    "Collector - has a secret stash somewhere",
                    &[("sock", 5)],
                ),
                QuizOption::new(
                    "B",
                    "Destroyer - no sock survives",
                    &[("energy", 4), ("sass", 3)],
                ),
                QuizOption::new("C", "Indifferent - socks are boring", &[("chill", 3)]),
                QuizOption::new(
                    "D",
                    "Protector - guards them from the laundry basket",
                    &[("drama", 4)],
                ),
            ],
        },
        Question {
            id: 3,
            question: "At the dog park, your cavoodle is...".to_string(),
            options: vec![
                QuizOption::new(
                    "A",
                    "The social butterfly (must greet EVERYONE)",
                    &[("velcro", 4), ("energy", 4)],
                ),
                QuizOption::new(
                    "B",
                    "The zoomies champion (blur of floof)",
                    &[("zoomies", 5), ("energy", 5)],
                ),
                QuizOption::new(
                    "C",
                    "The benchwarmer (prefers human company)",
                    &[("velcro", 5), ("chill", 3)],
                ),
                QuizOption::new(
                    "D",
                    "The referee (breaks up all the fun)",
                    &[("bark", 3), ("sass", 4)],
                ),
            ],
        },
        Question {
            id: 4,
            question: "When it comes to the couch, your cavoodle believes...".to_string(),
            options: vec![
                QuizOption::new(
                    "A",
                    "It's THEIR couch. You're just visiting.",
                    &[("couch", 5), ("sass", 5)],
                ),
                QuizOption::new(
                    "B",
                    "Sharing is caring (but they get the best spot)",
                    &[("couch", 3), ("velcro", 3)],
                ),
                QuizOption::new("C", "The floor is perfectly acceptable", &[("chill", 4)]),
                QuizOption::new(
                    "D",
                    "Why sit when you can zoom?",
                    &[("zoomies", 4), ("energy", 4)],
                ),
            ],
        },
        Question {
            id: 5,
            question: "During a thunderstorm, your cavoodle...".to_string(),
            options: vec![
                QuizOption::new(
                    "A",
                    "Dramatically trembles like they're in a soap opera",
                    &[("drama", 5)],
                ),
                QuizOption::new(
                    "B",
                    "Sleeps through it like nothing's happening",
                    &[("chill", 5)],
                ),
                QuizOption::new(
                    "C",
                    "Barks at the thunder to show it who's boss",
                    &[("bark", 4), ("sass", 3)],
                ),
                QuizOption::new("D", "Becomes a permanent lap attachment", &[("velcro", 5)]),
            ],
        },
        Question {
            id: 6,
            question: "When you try to leave the house, your cavoodle...".to_string(),
            options: vec![
                QuizOption::new(
                    "A",
                    "Gives you guilt-trip eyes that could win an Oscar",
                    &[("drama", 4), ("velcro", 4)],
                ),
                QuizOption::new(
                    "B",
                    "Doesn't notice because they're napping",
                    &[("chill", 5)],
                ),
                QuizOption::new(
                    "C",
                    "Tries to fit into your bag",
                    &[("velcro", 5), ("sass", 2)],
                ),
                QuizOption::new(
                    "D",
                    "Barks instructions at you through the window",
                    &[("bark", 4), ("sass", 4)],
                ),
            ],
        },
        Question {
            id: 7,
            question: "Your cavoodle's approach to treat negotiations is...".to_string(),
            options: vec![
                QuizOption::new(
                    "A",
                    "Professional-grade puppy eyes and tactical whining",
                    &[("treat", 5), ("sass", 3)],
                ),
                QuizOption::new(
                    "B",
                    "Performs their entire trick repertoire unsolicited",
                    &[("treat", 4), ("energy", 3)],
                ),
                QuizOption::new(
                    "C",
                    "Sits politely and waits (mostly)",
                    &[("chill", 3), ("treat", 2)],
                ),
                QuizOption::new(
                    "D",
                    "Attempts to open the treat cupboard themselves",
                    &[("treat", 5), ("sass", 5), ("garden", 2)],
                ),
            ],
        },
    ]
}
