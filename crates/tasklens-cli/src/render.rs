use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use serde_json::json;
use tasklens_analyzer::{TaskSuggestion, UserIntent, format_duration};
use tasklens_core::{AnalysisResult, OutputFormat, TasklensConfig};

/// Writes command results in the selected format.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    format: OutputFormat,
    pretty: bool,
}

impl Renderer {
    pub const fn new(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }

    pub fn analysis(&self, out: &mut impl Write, result: &AnalysisResult) -> Result<()> {
        if self.format == OutputFormat::Json {
            return self.json(out, result);
        }
        let due = result
            .due_date
            .map_or_else(|| "none".to_owned(), |date| date.to_rfc3339());
        writeln!(out, "Due date:   {due}")?;
        writeln!(out, "Priority:   {}", result.priority)?;
        writeln!(out, "Category:   {}", result.category)?;
        writeln!(out, "Duration:   {}", format_duration(result.estimated_duration))?;
        writeln!(out, "Keywords:   {}", result.keywords.join(", "))?;
        writeln!(out, "Sentiment:  {:.2}", result.sentiment_score)?;
        Ok(())
    }

    pub fn suggestion(&self, out: &mut impl Write, suggestion: &TaskSuggestion) -> Result<()> {
        if self.format == OutputFormat::Json {
            return self.json(out, suggestion);
        }
        writeln!(out, "Task:       {}", suggestion.title)?;
        writeln!(out, "Notes:      {}", suggestion.description)?;
        writeln!(out, "Category:   {}", suggestion.category)?;
        writeln!(out, "Priority:   {}", suggestion.priority)?;
        if let Some(due) = suggestion.due_date {
            writeln!(out, "Due:        {}", due.to_rfc3339())?;
        }
        writeln!(
            out,
            "Estimate:   {}",
            format_duration(suggestion.estimated_duration)
        )?;
        writeln!(out, "Confidence: {:.1}", suggestion.confidence)?;
        Ok(())
    }

    pub fn intent(&self, out: &mut impl Write, intent: UserIntent) -> Result<()> {
        if self.format == OutputFormat::Json {
            return self.json(out, &json!({ "intent": intent }));
        }
        writeln!(out, "{intent}")?;
        Ok(())
    }

    pub fn config(&self, out: &mut impl Write, path: &Path, config: &TasklensConfig) -> Result<()> {
        if self.format == OutputFormat::Json {
            return self.json(out, &json!({ "path": path, "config": config }));
        }
        writeln!(out, "# {}", path.display())?;
        write!(out, "{}", toml::to_string_pretty(config)?)?;
        Ok(())
    }

    fn json<T: Serialize + ?Sized>(&self, out: &mut impl Write, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, value)?;
        } else {
            serde_json::to_writer(&mut *out, value)?;
        }
        writeln!(out)?;
        Ok(())
    }
}
