//! Subcommands and the state they share.

pub mod check;
pub mod fixtures;
pub mod styles;

use clap::ValueEnum;
use fieldcheck_core::validation::DobPolicy;
use fieldcheck_core::validators::{all_validators, RecordValidator, ValidatorStyle};

use crate::output::OutputFormat;

/// Settings resolved from flags, environment and config file.
pub struct Session {
    pub policy: DobPolicy,
    pub format: OutputFormat,
}

impl Session {
    /// Build the validators for `style`, or one of each style when unset.
    pub fn validators(&self, style: Option<StyleArg>) -> Vec<Box<dyn RecordValidator>> {
        match style {
            Some(style) => vec![ValidatorStyle::from(style).build(self.policy)],
            None => all_validators(self.policy),
        }
    }
}

/// Validator style selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    /// Hand-written match expressions
    Matching,
    /// Rule-builder chain
    Fluent,
    /// Declared constraint table
    Annotated,
    /// Plain if statements
    Imperative,
}

impl From<StyleArg> for ValidatorStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Matching => ValidatorStyle::Matching,
            StyleArg::Fluent => ValidatorStyle::Fluent,
            StyleArg::Annotated => ValidatorStyle::Annotated,
            StyleArg::Imperative => ValidatorStyle::Imperative,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            policy: DobPolicy::for_year(2026),
            format: OutputFormat::Table,
        }
    }

    #[test]
    fn test_style_arg_names_match_core() {
        for style in ValidatorStyle::ALL {
            let arg = StyleArg::from_str(style.as_str(), false).unwrap();
            assert_eq!(ValidatorStyle::from(arg), style);
        }
    }

    #[test]
    fn test_validators_selection() {
        assert_eq!(session().validators(None).len(), 4);
        let one = session().validators(Some(StyleArg::Annotated));
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].style(), ValidatorStyle::Annotated);
    }
}
