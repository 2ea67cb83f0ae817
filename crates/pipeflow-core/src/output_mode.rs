use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Controls how much of a task's terminal output is replayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputMode {
    #[default]
    Full,
    HashOnly,
    NewOnly,
    ErrorsOnly,
    None,
}

impl OutputMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::HashOnly => "hash-only",
            Self::NewOnly => "new-only",
            Self::ErrorsOnly => "errors-only",
            Self::None => "none",
        }
    }
}

impl Display for OutputMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Holder {
        mode: OutputMode,
    }

    #[test]
    fn parses_kebab_case_names() {
        let holder: Holder = toml::from_str(r#"mode = "hash-only""#).expect("mode should parse");
        assert_eq!(holder.mode, OutputMode::HashOnly);
        assert_eq!(holder.mode.to_string(), "hash-only");
    }

    #[test]
    fn defaults_to_full() {
        assert_eq!(OutputMode::default(), OutputMode::Full);
    }

    #[test]
    fn rejects_unknown_mode() {
        let result = toml::from_str::<Holder>(r#"mode = "loud""#);
        assert!(result.is_err());
    }
}
