//! Scripted user input for testing

use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

use super::input::{InputError, Result, UserInput};

/// Mock input that replays predetermined answers
///
/// Text answers and selections are consumed in order. `None` in either queue
/// simulates the user cancelling that prompt. Running out of answers is an
/// `UnexpectedEof` error so an unexpected prompt fails the test loudly.
#[derive(Debug, Default)]
pub struct MockInput {
    texts: Mutex<VecDeque<Option<String>>>,
    selections: Mutex<VecDeque<Option<usize>>>,
    text_prompts: Mutex<Vec<String>>,
    select_prompts: Mutex<Vec<(String, Vec<String>)>>,
}

impl MockInput {
    /// Create a mock with no scripted answers
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a text answer
    #[must_use]
    pub fn text(self, answer: &str) -> Self {
        self.texts.lock().unwrap().push_back(Some(answer.to_string()));
        self
    }

    /// Queue a cancelled text prompt
    #[must_use]
    pub fn cancel_text(self) -> Self {
        self.texts.lock().unwrap().push_back(None);
        self
    }

    /// Queue a selection index
    #[must_use]
    pub fn select(self, index: usize) -> Self {
        self.selections.lock().unwrap().push_back(Some(index));
        self
    }

    /// Queue a cancelled selection
    #[must_use]
    pub fn cancel_select(self) -> Self {
        self.selections.lock().unwrap().push_back(None);
        self
    }

    /// Prompts shown for text input, in order
    pub fn text_prompts(&self) -> Vec<String> {
        self.text_prompts.lock().unwrap().clone()
    }

    /// Number of selection prompts shown
    pub fn select_prompts(&self) -> usize {
        self.select_prompts.lock().unwrap().len()
    }

    /// Items offered by the most recent selection prompt
    pub fn last_select_items(&self) -> Option<Vec<String>> {
        self.select_prompts
            .lock()
            .unwrap()
            .last()
            .map(|(_, items)| items.clone())
    }

    fn exhausted(kind: &str) -> InputError {
        InputError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("no scripted {kind} answer left"),
        ))
    }
}

impl UserInput for MockInput {
    fn prompt_text(&self, prompt: &str, _allow_empty: bool) -> Result<Option<String>> {
        self.text_prompts.lock().unwrap().push(prompt.to_string());
        self.texts
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Self::exhausted("text"))
    }

    fn prompt_select(&self, prompt: &str, items: &[String]) -> Result<Option<usize>> {
        self.select_prompts
            .lock()
            .unwrap()
            .push((prompt.to_string(), items.to_vec()));
        self.selections
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Self::exhausted("selection"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_input_replays_in_order() {
        let input = MockInput::new().text("first").cancel_text().text("third");

        assert_eq!(input.prompt_text("a", true).unwrap().as_deref(), Some("first"));
        assert_eq!(input.prompt_text("b", true).unwrap(), None);
        assert_eq!(input.prompt_text("c", true).unwrap().as_deref(), Some("third"));
        assert_eq!(input.text_prompts(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_mock_input_exhausted_is_error() {
        let input = MockInput::new();
        assert!(input.prompt_text("x", true).is_err());
        assert!(input.prompt_select("x", &[]).is_err());
    }

    #[test]
    fn test_mock_input_records_select_items() {
        let input = MockInput::new().select(0);
        let items = vec!["one".to_string(), "two".to_string()];

        assert_eq!(input.prompt_select("pick", &items).unwrap(), Some(0));
        assert_eq!(input.select_prompts(), 1);
        assert_eq!(input.last_select_items(), Some(items));
    }
}
