//! Command vocabulary and resolution
//!
//! Command names are resolved once, when the vocabulary is built, into a
//! `Command` variant. Dispatch then matches on the variant instead of
//! comparing strings.

use std::collections::HashMap;

/// Reserved command that lists the vocabulary
pub const HELP_COMMAND: &str = "help";

/// Resolved command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// List available commands
    Help,
    /// Show every section in order
    FullCv,
    /// Show one section, keyed by the command name
    Section(String),
}

/// Known commands, kept in configuration order for the help listing
#[derive(Clone, Debug, Default)]
pub struct CommandVocabulary {
    names: Vec<String>,
    index: HashMap<String, Command>,
}

impl CommandVocabulary {
    /// Build the vocabulary, mapping the reserved names to their variants
    pub fn new<I, S>(names: I, full_cv_command: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocabulary = Self::default();
        for name in names {
            let name = name.into();
            if vocabulary.index.contains_key(&name) {
                continue;
            }
            let command = if name == HELP_COMMAND {
                Command::Help
            } else if name == full_cv_command {
                Command::FullCv
            } else {
                Command::Section(name.clone())
            };
            vocabulary.index.insert(name.clone(), command);
            vocabulary.names.push(name);
        }
        vocabulary
    }

    /// Resolve a trimmed command line
    pub fn resolve(&self, input: &str) -> Option<&Command> {
        self.index.get(input)
    }

    #[allow(dead_code)]
    pub fn contains(&self, input: &str) -> bool {
        self.index.contains_key(input)
    }

    /// Command names in listing order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Text animated for the help command
    pub fn help_text(&self) -> String {
        let mut text = String::from("\n  AVAILABLE COMMANDS:\n\n");
        for name in self.names() {
            text.push_str("- ");
            text.push_str(name);
            text.push('\n');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> CommandVocabulary {
        CommandVocabulary::new(["about", "fullcv", "help", "contact"], "fullcv")
    }

    #[test]
    fn test_reserved_names_resolve_to_variants() {
        let vocab = vocabulary();
        assert_eq!(vocab.resolve("help"), Some(&Command::Help));
        assert_eq!(vocab.resolve("fullcv"), Some(&Command::FullCv));
        assert_eq!(
            vocab.resolve("about"),
            Some(&Command::Section("about".to_string()))
        );
        assert_eq!(vocab.resolve("unknown"), None);
    }

    #[test]
    fn test_resolution_is_exact() {
        let vocab = vocabulary();
        assert!(!vocab.contains("HELP"));
        assert!(!vocab.contains(" help"));
        assert!(!vocab.contains(""));
    }

    #[test]
    fn test_help_text_follows_vocabulary_order() {
        let vocab = vocabulary();
        assert_eq!(
            vocab.help_text(),
            "\n  AVAILABLE COMMANDS:\n\n- about\n- fullcv\n- help\n- contact\n"
        );
    }

    #[test]
    fn test_duplicates_are_listed_once() {
        let vocab = CommandVocabulary::new(["help", "about", "help"], "fullcv");
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.names().collect::<Vec<_>>(), ["help", "about"]);
    }

    #[test]
    fn test_full_cv_token_is_configurable() {
        let vocab = CommandVocabulary::new(["all", "fullcv"], "all");
        assert_eq!(vocab.resolve("all"), Some(&Command::FullCv));
        assert_eq!(
            vocab.resolve("fullcv"),
            Some(&Command::Section("fullcv".to_string()))
        );
    }
}
