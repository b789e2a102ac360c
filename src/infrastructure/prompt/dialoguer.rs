//! Terminal confirmer
//!
//! Asks each gate as a yes/no question defaulting to "no". When stdin is
//! not a terminal every gate is declined, so an unattended run can never
//! pass one by accident.

use std::io;

use dialoguer::theme::{ColorfulTheme, Theme};
use dialoguer::Confirm;
use is_terminal::IsTerminal;

use crate::domain::ports::Confirmer;
use crate::domain::services::Gate;

pub struct DialoguerConfirmer {
    theme: Box<dyn Theme + Send + Sync>,
    interactive: bool,
}

impl DialoguerConfirmer {
    pub fn new() -> Self {
        Self::with_theme(Box::new(ColorfulTheme::default()))
    }

    pub fn with_theme(theme: Box<dyn Theme + Send + Sync>) -> Self {
        Self {
            theme,
            interactive: io::stdin().is_terminal(),
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }
}

impl Default for DialoguerConfirmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Confirmer for DialoguerConfirmer {
    fn confirm(&self, gate: &Gate) -> bool {
        if !self.interactive {
            tracing::warn!(
                gate = gate.kind().as_str(),
                "stdin is not a terminal; declining"
            );
            return false;
        }

        match Confirm::with_theme(self.theme.as_ref())
            .with_prompt(gate.prompt())
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(err) => {
                tracing::warn!(gate = gate.kind().as_str(), "prompt failed: {}", err);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DialoguerConfirmer>();
    }

    #[test]
    fn non_interactive_declines_every_gate() {
        let confirmer = DialoguerConfirmer {
            theme: Box::new(ColorfulTheme::default()),
            interactive: false,
        };
        let gate = Gate::ProceedWithoutSharedResources {
            inspection_error: None,
        };
        assert!(!confirmer.confirm(&gate));
    }
}
