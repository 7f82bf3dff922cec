//! Agent package compliance linter.
//!
//! A package is a kebab-case directory holding a prompt document and a Python
//! implementation. Four gates are applied to each package:
//!
//! | Gate | Checks |
//! |------|--------|
//! | Structure | directory naming, required files, unexpected extras |
//! | Prompt | required sections, metadata fields, example format |
//! | Implementation | shebang, docstring, click CLI, entry point, syntax |
//! | Code Quality | black, isort, flake8 |

pub mod engine;
pub mod gates;
pub mod outcome;
pub mod scaffold;
pub mod syntax;
pub mod tools;

pub use engine::{AgentLinter, FixOutcome, LintReport, LintResult, RunIssue};
pub use outcome::{CheckOutcome, Gate, GateReport};
pub use scaffold::{AgentTemplate, create_agent};
pub use tools::{CodeTool, ExternalTool, ToolOutcome};
