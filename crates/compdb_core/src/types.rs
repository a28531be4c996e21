use serde::{Deserialize, Serialize};

/// One entry of a `compile_commands.json` database.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileCommand {
    /// Absolute working directory the command runs in
    pub directory: String,
    /// The trimmed command line exactly as the build tool printed it
    pub command: String,
    /// The source file token taken from the command line
    pub file: String,
}
