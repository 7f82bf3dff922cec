//! UX Command
//!
//! Design guidance from the UX collaborator agent.
//!
//! Usage:
//!   dotagents ux analyze "<request>" [-c CONTEXT]
//!   dotagents ux wireframe -f "<feature>"
//!   dotagents ux help

use clap::ValueEnum;

use crate::cli::ui::Output;
use crate::types::{AgentError, Result};
use crate::ux::{CAPABILITIES, UxCollaborator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UxAction {
    Analyze,
    Wireframe,
    Help,
}

/// Missing request or feature is reported on the console and is not an error
pub fn run(
    action: UxAction,
    request: Option<&str>,
    context: Option<&str>,
    feature: Option<&str>,
) -> Result<()> {
    let agent = UxCollaborator;
    let document = match action {
        UxAction::Analyze => agent.analyze(request, context),
        UxAction::Wireframe => agent.wireframe(feature.or(request)),
        UxAction::Help => Ok(CAPABILITIES.to_string()),
    };

    match document {
        Ok(document) => {
            println!("{}", document);
            Ok(())
        }
        Err(AgentError::InvalidInput(message)) => {
            Output::new().error(&message);
            Ok(())
        }
        Err(e) => Err(e),
    }
}
