//! The rotation toggle widget.
//!
//! Tracks which rotation icon is selected, renders one status-bar block per
//! call, and applies the selection through the display tool on right click.
//! The host is expected to serialize calls; nothing here is thread-safe.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::backends::DisplayTool;
use crate::config::Config;
use crate::rotation::is_horizontal;

pub const BUTTON_LEFT: u8 = 1;
pub const BUTTON_RIGHT: u8 = 3;
pub const BUTTON_SCROLL_UP: u8 = 4;
pub const BUTTON_SCROLL_DOWN: u8 = 5;

/// Color constants supplied by the host bar.
#[derive(Clone, Debug)]
pub struct HostConfig {
    pub color_good: String,
    pub color_degraded: String,
}

/// Click event as dispatched by the host bar.
#[derive(Copy, Clone, Debug)]
pub struct ClickEvent {
    pub button: u8,
}

/// One rendered status line.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Block {
    pub full_text: String,
    /// Epoch seconds after which the host should call render again.
    pub cached_until: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// The toggle selection shown in the bar.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Selection {
    /// Not yet determined, or cleared while the screen is disconnected.
    Empty,
    Horizontal,
    Vertical,
}

pub struct RotationToggleWidget<T: DisplayTool> {
    config: Config,
    tool: T,
    displayed: Selection,
}

impl<T: DisplayTool> RotationToggleWidget<T> {
    pub fn new(config: Config, tool: T) -> Self {
        RotationToggleWidget {
            config,
            tool,
            displayed: Selection::Empty,
        }
    }

    /// Produce the current status line. Tool failures degrade to an empty
    /// output list and the `?` placeholder; they never propagate.
    pub fn render(&mut self, host: &HostConfig) -> Block {
        let outputs = self.outputs();
        let disconnected = match self.config.screen.as_deref() {
            Some(screen) => !outputs.iter().any(|o| o == screen),
            None => false,
        };

        let full_text = if disconnected && self.config.hide_if_disconnected {
            self.displayed = Selection::Empty;
            String::new()
        } else {
            if self.displayed == Selection::Empty {
                self.displayed = self.current_selection(&outputs);
            }
            let label = match self.config.screen.as_deref() {
                Some(screen) => screen,
                None if outputs.len() == 1 => outputs[0].as_str(),
                None => "ALL",
            };
            self.config
                .format
                .replace("{icon}", self.icon())
                .replace("{screen}", label)
        };

        let color = if disconnected && !self.config.hide_if_disconnected {
            Some(host.color_degraded.clone())
        } else if self.displayed != Selection::Empty
            && self.displayed == self.current_selection(&outputs)
        {
            // The toggled selection matches what is actually on screen.
            Some(host.color_good.clone())
        } else {
            None
        };

        Block {
            full_text,
            cached_until: now_epoch() + self.config.cache_timeout as f64,
            color,
        }
    }

    /// Left click and scroll flip the selection locally; right click applies
    /// it; every other button is ignored.
    pub fn on_click(&mut self, event: ClickEvent) {
        match event.button {
            BUTTON_LEFT | BUTTON_SCROLL_UP | BUTTON_SCROLL_DOWN => self.switch_selection(),
            BUTTON_RIGHT => self.apply_rotation(),
            _ => {}
        }
    }

    fn switch_selection(&mut self) {
        // An undetermined selection flips to horizontal.
        self.displayed = if self.displayed == Selection::Horizontal {
            Selection::Vertical
        } else {
            Selection::Horizontal
        };
    }

    /// Apply the rotation matching the local selection, not a freshly
    /// queried state. One command per target output, fire-and-forget.
    fn apply_rotation(&self) {
        let rotation = if self.displayed == Selection::Horizontal {
            self.config.horizontal_rotation.keyword()
        } else {
            self.config.vertical_rotation.keyword()
        };
        let targets = match &self.config.screen {
            Some(screen) => vec![screen.clone()],
            None => self.outputs(),
        };
        for output in &targets {
            if let Err(err) = self.tool.rotate(output, rotation) {
                log::warn!("failed to rotate {}: {}", output, err);
            }
        }
    }

    fn outputs(&self) -> Vec<String> {
        match self.tool.list_outputs() {
            Ok(outputs) => outputs,
            Err(err) => {
                log::warn!("failed to list outputs: {}", err);
                Vec::new()
            }
        }
    }

    /// Classify the rotation of the output under inspection: the configured
    /// screen when connected, else the first enumerated output. Empty when
    /// there is nothing to inspect, so a degraded render can't claim the
    /// good color.
    fn current_selection(&self, outputs: &[String]) -> Selection {
        let inspect = match self.config.screen.as_deref() {
            Some(screen) if outputs.iter().any(|o| o == screen) => screen,
            Some(_) => return Selection::Empty,
            None => match outputs.first() {
                Some(first) => first.as_str(),
                None => return Selection::Empty,
            },
        };
        match self.tool.rotation_descriptor(inspect) {
            Ok(descriptor) => {
                if is_horizontal(&descriptor) {
                    Selection::Horizontal
                } else {
                    Selection::Vertical
                }
            }
            Err(err) => {
                log::warn!("failed to query rotation of {}: {}", inspect, err);
                Selection::Empty
            }
        }
    }

    fn icon(&self) -> &str {
        match self.displayed {
            Selection::Empty => "?",
            Selection::Horizontal => &self.config.horizontal_icon,
            Selection::Vertical => &self.config.vertical_icon,
        }
    }
}

fn now_epoch() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}
