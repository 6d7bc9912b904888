//! Prompt for the export shell

use std::borrow::Cow;

use reedline::{Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus};

/// Prompt name shown before a database is selected
const PROMPT_NAME: &str = "mongo-export";

/// Prompt showing the selected database and connection state
pub struct ExportPrompt {
    /// Selected database, if any
    database: Option<String>,
    /// Whether a handle is open
    connected: bool,
}

impl ExportPrompt {
    /// Create a new prompt
    ///
    /// # Arguments
    /// * `database` - Selected database
    /// * `connected` - Whether connected to a server
    pub fn new(database: Option<String>, connected: bool) -> Self {
        Self {
            database,
            connected,
        }
    }
}

impl Prompt for ExportPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        let name = self.database.as_deref().unwrap_or(PROMPT_NAME);
        if self.connected {
            format!("{name}> ").into()
        } else {
            format!("{name} (disconnected)> ").into()
        }
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        "".into()
    }

    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> Cow<'_, str> {
        "".into()
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        "... ".into()
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };

        format!("({}reverse-search: {}) ", prefix, history_search.term).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_shows_database() {
        let prompt = ExportPrompt::new(Some("shop".to_string()), true);
        assert_eq!(prompt.render_prompt_left(), "shop> ");
    }

    #[test]
    fn test_prompt_without_database() {
        let prompt = ExportPrompt::new(None, true);
        assert_eq!(prompt.render_prompt_left(), "mongo-export> ");
    }

    #[test]
    fn test_disconnected_prompt() {
        let prompt = ExportPrompt::new(None, false);
        assert_eq!(prompt.render_prompt_left(), "mongo-export (disconnected)> ");
    }

    #[test]
    fn test_indicators() {
        let prompt = ExportPrompt::new(None, true);
        assert_eq!(prompt.render_prompt_right(), "");
        assert_eq!(prompt.render_prompt_indicator(PromptEditMode::Default), "");
        assert_eq!(prompt.render_prompt_multiline_indicator(), "... ");
    }
}
