use serde_json::Value;

use crate::state::Sender;

/// Most chips a single option group may render
pub const MAX_DRAFT_OPTIONS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub text: String,
    pub sender: Sender,
}

/// A labelled group of clickable draft suggestions.
///
/// Shown in the log after the reply it came with, but never part of the
/// transcript proper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftOptions {
    pub label: String,
    pub options: Vec<String>,
}

impl DraftOptions {
    /// Extract up to three non-blank strings from an arbitrary JSON value.
    /// Anything that is not an array yields nothing.
    pub fn extract(value: &Value) -> Vec<String> {
        let Some(items) = value.as_array() else {
            return Vec::new();
        };

        items
            .iter()
            .filter_map(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .take(MAX_DRAFT_OPTIONS)
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogItem {
    Message(TranscriptEntry),
    Options(DraftOptions),
}

/// Append-only conversation log
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    items: Vec<LogItem>,
    scroll_requested: bool,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_message(&mut self, text: impl Into<String>, sender: Sender) {
        self.items.push(LogItem::Message(TranscriptEntry {
            text: text.into(),
            sender,
        }));
        self.scroll_requested = true;
    }

    /// Render a chip group from `value`. Returns false (and renders nothing)
    /// when `value` is not an array or holds no usable strings.
    pub fn append_options(&mut self, value: &Value, label: &str) -> bool {
        let options = DraftOptions::extract(value);
        if options.is_empty() {
            return false;
        }

        self.items.push(LogItem::Options(DraftOptions {
            label: label.to_string(),
            options,
        }));
        self.scroll_requested = true;
        true
    }

    /// Transcript entries in append order, chip groups excluded
    pub fn entries(&self) -> impl Iterator<Item = &TranscriptEntry> {
        self.items.iter().filter_map(|item| match item {
            LogItem::Message(entry) => Some(entry),
            LogItem::Options(_) => None,
        })
    }

    /// Everything in display order
    pub fn items(&self) -> &[LogItem] {
        &self.items
    }

    pub fn latest_options(&self) -> Option<&DraftOptions> {
        self.items.iter().rev().find_map(|item| match item {
            LogItem::Options(options) => Some(options),
            LogItem::Message(_) => None,
        })
    }

    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true once after each append, telling the view to jump to the
    /// newest item.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_append_message_preserves_order() {
        let mut transcript = Transcript::new();
        let texts = ["first", "", "third", "fourth"];
        for (i, text) in texts.iter().enumerate() {
            let sender = if i % 2 == 0 { Sender::User } else { Sender::Bot };
            transcript.append_message(*text, sender);
        }

        let rendered: Vec<&str> = transcript.entries().map(|e| e.text.as_str()).collect();
        assert_eq!(rendered, texts);
        assert_eq!(transcript.entries().nth(1).map(|e| e.sender), Some(Sender::Bot));
    }

    #[test]
    fn test_append_options_filters_blank_strings() {
        let mut transcript = Transcript::new();
        assert!(transcript.append_options(&json!(["", "  ", "ok"]), "Options"));
        let group = transcript.latest_options().unwrap();
        assert_eq!(group.options, vec!["ok".to_string()]);
    }

    #[test]
    fn test_append_options_ignores_empty_and_non_arrays() {
        let mut transcript = Transcript::new();
        assert!(!transcript.append_options(&json!([]), "Options"));
        assert!(!transcript.append_options(&json!("ok"), "Options"));
        assert!(!transcript.append_options(&json!({"0": "ok"}), "Options"));
        assert!(!transcript.append_options(&Value::Null, "Options"));
        assert!(!transcript.append_options(&json!([1, null, true]), "Options"));
        assert!(transcript.items().is_empty());
    }

    #[test]
    fn test_append_options_truncates_to_three() {
        let mut transcript = Transcript::new();
        transcript.append_options(&json!(["a", "b", "c", "d", "e"]), "Options");
        let group = transcript.latest_options().unwrap();
        assert_eq!(group.options, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_options_are_not_transcript_entries() {
        let mut transcript = Transcript::new();
        transcript.append_message("hi", Sender::User);
        transcript.append_message("hello", Sender::Bot);
        transcript.append_options(&json!(["one", "two"]), "Options");

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.items().len(), 3);
        assert!(matches!(transcript.items()[2], LogItem::Options(_)));
    }

    #[test]
    fn test_chip_text_is_kept_untrimmed() {
        let options = DraftOptions::extract(&json!(["  padded reply "]));
        assert_eq!(options, vec!["  padded reply ".to_string()]);
    }

    #[test]
    fn test_scroll_request_is_consumed() {
        let mut transcript = Transcript::new();
        assert!(!transcript.take_scroll_request());
        transcript.append_message("hi", Sender::User);
        assert!(transcript.take_scroll_request());
        assert!(!transcript.take_scroll_request());
    }
}
