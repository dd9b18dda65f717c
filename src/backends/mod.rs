use crate::error::Result;

/// Boundary to the external display-configuration tool.
///
/// Every call shells out synchronously; there is no caching between calls
/// and no timeout, so a hung tool blocks the caller.
pub trait DisplayTool {
    /// Names of currently connected, enabled outputs, in tool order.
    /// No outputs is an empty list, not an error.
    fn list_outputs(&self) -> Result<Vec<String>>;

    /// Raw rotation descriptor for one output; empty when the output has
    /// no status line.
    fn rotation_descriptor(&self, output: &str) -> Result<String>;

    /// Apply a rotation keyword to one output.
    fn rotate(&self, output: &str, rotation: &str) -> Result<()>;
}

pub mod xrandr;
