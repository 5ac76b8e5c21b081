//! Render settings loaded from TOML, plus the delivery and color policies.

use std::path::Path;

use serde::{Deserialize, Serialize};

use kustdiff_diff::{DiffOptions, DEFAULT_CONTEXT_LINES};

use crate::error::{ReportError, ReportResult};

/// Render settings, loadable from a TOML file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Unchanged lines shown around each change.
    pub context_lines: usize,
    /// Whether `dispatch` waits for the comment sink before returning.
    pub wait_for_comment_delivery: bool,
    /// When to emit ANSI colors in terminal output.
    pub color: ColorChoice,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            context_lines: DEFAULT_CONTEXT_LINES,
            wait_for_comment_delivery: true,
            color: ColorChoice::Auto,
        }
    }
}

impl RenderConfig {
    pub fn from_toml_str(s: &str) -> ReportResult<Self> {
        toml::from_str(s).map_err(|e| ReportError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> ReportResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn diff_options(&self) -> DiffOptions {
        DiffOptions {
            context_lines: self.context_lines,
        }
    }

    pub fn delivery_mode(&self) -> DeliveryMode {
        if self.wait_for_comment_delivery {
            DeliveryMode::Await
        } else {
            DeliveryMode::FireAndForget
        }
    }
}

/// How the comment sink call relates to the render's return.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeliveryMode {
    /// The sink call completes before `dispatch` returns; failures abort the render.
    #[default]
    Await,
    /// The sink call is spawned and `dispatch` returns at once; failures are logged.
    FireAndForget,
}

/// Color policy for terminal output.
///
/// `Auto` leaves the decision to `colored`, which honours `NO_COLOR`,
/// `CLICOLOR`, `CLICOLOR_FORCE` and whether stdout is a terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Install this policy process-wide.
    pub fn apply(self) {
        match self {
            ColorChoice::Auto => colored::control::unset_override(),
            ColorChoice::Always => colored::control::set_override(true),
            ColorChoice::Never => colored::control::set_override(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colorize::colorize;
    use crate::colorize::tests::pin_color;

    #[test]
    fn default_config() {
        let c = RenderConfig::default();
        assert_eq!(c.context_lines, 4);
        assert!(c.wait_for_comment_delivery);
        assert_eq!(c.color, ColorChoice::Auto);
        assert_eq!(c.delivery_mode(), DeliveryMode::Await);
        assert_eq!(c.diff_options(), DiffOptions::default());
    }

    #[test]
    fn parse_full_toml() {
        let c = RenderConfig::from_toml_str(
            "context_lines = 2\nwait_for_comment_delivery = false\ncolor = \"never\"\n",
        )
        .unwrap();
        assert_eq!(c.context_lines, 2);
        assert_eq!(c.delivery_mode(), DeliveryMode::FireAndForget);
        assert_eq!(c.color, ColorChoice::Never);
        assert_eq!(c.diff_options().context_lines, 2);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = RenderConfig::from_toml_str("color = \"always\"").unwrap();
        assert_eq!(c.context_lines, 4);
        assert!(c.wait_for_comment_delivery);
        assert_eq!(c.color, ColorChoice::Always);
    }

    #[test]
    fn unknown_key_rejected() {
        let err = RenderConfig::from_toml_str("waitForCommentDelivery = true").unwrap_err();
        assert!(matches!(err, ReportError::Config(_)));
    }

    #[test]
    fn bad_color_rejected() {
        assert!(RenderConfig::from_toml_str("color = \"truecolor\"").is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kustdiff.toml");
        std::fs::write(&path, "context_lines = 0\n").unwrap();

        let c = RenderConfig::load(&path).unwrap();
        assert_eq!(c.context_lines, 0);
    }

    #[test]
    fn color_choice_drives_colorize() {
        let _color = pin_color(true);

        ColorChoice::Never.apply();
        assert_eq!(colorize("+a\n"), "+a\n");

        ColorChoice::Always.apply();
        assert_eq!(colorize("+a\n"), "\x1b[32m+a\x1b[0m\n");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = RenderConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ReportError::Io(_)));
    }
}
