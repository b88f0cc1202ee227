use std::fmt;

/// The documents a run writes into the output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    /// Generated from the architecture prompt.
    Architecture,
    /// Generated from the tasks prompt, which embeds the architecture.
    Tasks,
    /// Copied from the guidelines template or the embedded default.
    Agents,
    /// Fixed instruction for the first coding-agent session.
    InitialPrompt,
}

impl Artifact {
    /// All artifacts in the order a run writes them.
    pub const ALL: [Artifact; 4] =
        [Artifact::Architecture, Artifact::Tasks, Artifact::Agents, Artifact::InitialPrompt];

    /// File name inside the output directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Artifact::Architecture => "architecture.md",
            Artifact::Tasks => "tasks.md",
            Artifact::Agents => "agents.md",
            Artifact::InitialPrompt => "initial_prompt.md",
        }
    }

    /// Document heading.
    pub fn title(&self) -> &'static str {
        match self {
            Artifact::Architecture => "Architecture",
            Artifact::Tasks => "Tasks",
            Artifact::Agents => "Agent Guidelines",
            Artifact::InitialPrompt => "Initial Prompt",
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}
