use core::fmt;

use serde::Serialize;

use crate::analyzer::rules::{Rule, TaskText, first_match};

/// What a conversational utterance asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum UserIntent {
    /// Add a new task
    CreateTask,
    /// Show existing tasks
    ListTasks,
    /// Mark a task as done
    CompleteTask,
    /// Remove a task
    DeleteTask,
    /// Change a task
    UpdateTask,
    /// Small talk opener
    Greeting,
    /// Ask what the assistant can do
    Help,
    /// Anything else
    #[default]
    General,
}

impl UserIntent {
    /// Stable name of the intent.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateTask => "CreateTask",
            Self::ListTasks => "ListTasks",
            Self::CompleteTask => "CompleteTask",
            Self::DeleteTask => "DeleteTask",
            Self::UpdateTask => "UpdateTask",
            Self::Greeting => "Greeting",
            Self::Help => "Help",
            Self::General => "General",
        }
    }
}

impl fmt::Display for UserIntent {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Intent rules in precedence order. Matching is by substring, so "hi" also
/// fires inside "this"; earlier rules shadow the greeting for most requests.
pub const INTENT_RULES: [Rule<UserIntent>; 7] = [
    Rule::keywords(
        &[
            "add",
            "create",
            "new task",
            "need to",
            "have to",
            "should",
            "remember to",
            "don't forget",
        ],
        UserIntent::CreateTask,
    ),
    Rule::keywords(
        &[
            "show",
            "list",
            "what tasks",
            "my tasks",
            "what do i have",
            "what's on my",
        ],
        UserIntent::ListTasks,
    ),
    Rule::keywords(
        &["done", "finished", "completed", "mark complete", "finish"],
        UserIntent::CompleteTask,
    ),
    Rule::keywords(
        &["delete", "remove", "cancel", "get rid of"],
        UserIntent::DeleteTask,
    ),
    Rule::keywords(
        &["change", "update", "modify", "edit", "reschedule"],
        UserIntent::UpdateTask,
    ),
    Rule::keywords(
        &[
            "hello",
            "hi",
            "hey",
            "good morning",
            "good afternoon",
            "good evening",
        ],
        UserIntent::Greeting,
    ),
    Rule::keywords(
        &[
            "help",
            "what can you do",
            "how do",
            "commands",
            "instructions",
        ],
        UserIntent::Help,
    ),
];

/// Keyword-driven intent classifier.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntentClassifier;

impl IntentClassifier {
    /// Classify an utterance, defaulting to [`UserIntent::General`].
    pub fn classify(&self, utterance: &str) -> UserIntent {
        let intent = first_match(&INTENT_RULES, &TaskText::new(utterance)).unwrap_or_default();
        tracing::trace!("classified {utterance:?} as {intent}");
        intent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(utterance: &str) -> UserIntent {
        IntentClassifier.classify(utterance)
    }

    #[test]
    fn test_each_intent() {
        assert_eq!(classify("Add call dentist tomorrow"), UserIntent::CreateTask);
        assert_eq!(classify("Show my tasks"), UserIntent::ListTasks);
        assert_eq!(classify("Mark call dentist as done"), UserIntent::CompleteTask);
        assert_eq!(classify("Delete the gym task"), UserIntent::DeleteTask);
        assert_eq!(classify("Reschedule the standup"), UserIntent::UpdateTask);
        assert_eq!(classify("Hello"), UserIntent::Greeting);
        assert_eq!(classify("What can you do?"), UserIntent::Help);
        assert_eq!(classify("Tell me a joke"), UserIntent::General);
    }

    #[test]
    fn test_create_beats_later_rules() {
        assert_eq!(classify("I need to finish the report"), UserIntent::CreateTask);
        assert_eq!(classify("Remember to update the budget"), UserIntent::CreateTask);
    }

    #[test]
    fn test_list_beats_complete() {
        assert_eq!(classify("show finished tasks"), UserIntent::ListTasks);
    }

    #[test]
    fn test_substring_matching_is_preserved() {
        assert_eq!(classify("address book cleanup"), UserIntent::CreateTask);
        assert_eq!(classify("this one"), UserIntent::Greeting);
    }

    #[test]
    fn test_empty_is_general() {
        assert_eq!(classify(""), UserIntent::General);
        assert_eq!(classify("   "), UserIntent::General);
    }

    #[test]
    fn test_display() {
        assert_eq!(UserIntent::CompleteTask.to_string(), "CompleteTask");
    }
}
