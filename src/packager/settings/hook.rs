//! Auxiliary commands run before staging.

/// A program and its argument vector.
///
/// Arguments are passed to the process as-is; nothing is interpreted by a
/// shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookCommand {
    /// Program name (looked up on `PATH`) or path.
    pub program: String,
    /// Arguments, one element per argv slot.
    pub args: Vec<String>,
}

impl HookCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Human-readable rendering for progress output.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
