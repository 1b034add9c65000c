use tasklens_core::TaskRecord;

/// Completion vocabulary removed from "mark X as done" utterances. Longer
/// phrases come first so "as done" goes before "done" can split it.
const COMPLETION_PHRASES: [&str; 8] = [
    "as complete",
    "as done",
    "mark",
    "completed",
    "complete",
    "finished",
    "finish",
    "done",
];

/// Reduce a completion request to the part naming the task.
///
/// "Mark call dentist as done" becomes "call dentist".
pub fn extract_task_reference(utterance: &str) -> String {
    let mut cleaned = utterance.to_lowercase();
    for phrase in COMPLETION_PHRASES {
        cleaned = cleaned.replace(phrase, "");
    }
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Tasks whose title, description or keywords contain `reference`,
/// compared case-insensitively. An empty reference matches nothing.
pub fn find_matching_tasks<'tasks>(
    reference: &str,
    tasks: &'tasks [TaskRecord],
) -> Vec<&'tasks TaskRecord> {
    let reference = reference.trim().to_lowercase();
    if reference.is_empty() {
        return Vec::new();
    }
    tasks
        .iter()
        .filter(|task| {
            task.title.to_lowercase().contains(&reference)
                || task.description.to_lowercase().contains(&reference)
                || task
                    .keywords
                    .iter()
                    .any(|keyword| keyword.to_lowercase().contains(&reference))
        })
        .collect()
}
