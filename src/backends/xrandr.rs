use std::process::Command;

use lazy_static::lazy_static;
use regex::Regex;

use super::DisplayTool;
use crate::error::{Error, Result};

const XRANDR: &str = "xrandr";

pub struct XRandr;

impl XRandr {
    fn query(&self) -> Result<String> {
        let output = Command::new(XRANDR)
            .arg("-q")
            .output()
            .map_err(|source| Error::CommandFailed {
                command: XRANDR,
                source,
            })?;
        if !output.status.success() {
            return Err(Error::CommandStatus {
                command: XRANDR,
                status: output.status,
            });
        }
        String::from_utf8(output.stdout).map_err(|source| Error::NonUtf8Output {
            command: XRANDR,
            source,
        })
    }
}

impl DisplayTool for XRandr {
    fn list_outputs(&self) -> Result<Vec<String>> {
        Ok(connected_outputs(&self.query()?))
    }

    fn rotation_descriptor(&self, output: &str) -> Result<String> {
        Ok(descriptor_for(&self.query()?, output))
    }

    fn rotate(&self, output: &str, rotation: &str) -> Result<()> {
        log::debug!("xrandr: rotating {} to {}", output, rotation);
        let result = Command::new(XRANDR)
            .args(&["--output", output, "--rotate", rotation])
            .output()
            .map_err(|source| Error::CommandFailed {
                command: XRANDR,
                source,
            })?;
        if !result.status.success() {
            return Err(Error::CommandStatus {
                command: XRANDR,
                status: result.status,
            });
        }
        Ok(())
    }
}

fn connected_outputs(query: &str) -> Vec<String> {
    lazy_static! {
        // Enabled outputs only: a connected-but-disabled output's line goes
        // straight from "connected" to the axis list.
        static ref CONNECTED: Regex = Regex::new(r"(?m)^(\S+) connected [^(]").unwrap();
    }
    CONNECTED
        .captures_iter(query)
        .map(|cap| String::from(&cap[1]))
        .collect()
}

/// The 4th whitespace field of the output's status line: either the rotation
/// keyword, or the opening of the axis list when xrandr omitted it.
fn descriptor_for(query: &str, output: &str) -> String {
    query
        .lines()
        .find(|line| line.starts_with(output))
        .and_then(|line| line.split_whitespace().nth(3))
        .unwrap_or("")
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUERY: &str = "\
Screen 0: minimum 8 x 8, current 3840 x 1080, maximum 32767 x 32767
eDP1 connected 1920x1080+0+0 (normal left inverted right x axis y axis) 309mm x 173mm
   1920x1080     60.02*+  59.93
HDMI1 connected 1920x1080+1920+0 left (normal left inverted right x axis y axis) 509mm x 286mm
   1920x1080     60.00*+
VGA1 disconnected (normal left inverted right x axis y axis)
DP1 connected (normal left inverted right x axis y axis)
";

    #[test]
    fn lists_enabled_connected_outputs() {
        assert_eq!(connected_outputs(QUERY), vec!["eDP1", "HDMI1"]);
    }

    #[test]
    fn empty_query_is_empty_list() {
        assert_eq!(connected_outputs(""), Vec::<String>::new());
    }

    #[test]
    fn descriptor_is_fourth_field() {
        // Default rotation: the keyword is omitted and the axis list starts.
        assert_eq!(descriptor_for(QUERY, "eDP1"), "(normal");
        // Rotated output: the keyword shows up in the field.
        assert_eq!(descriptor_for(QUERY, "HDMI1"), "left");
    }

    #[test]
    fn descriptor_for_missing_output_is_empty() {
        assert_eq!(descriptor_for(QUERY, "DVI1"), "");
    }
}
