//! Tree formatter for console output
//!
//! This module provides `TreeFormatter` which writes one line per walked
//! entry as it arrives from `TreeWalker`.

use std::io;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{TreeOutput, WalkSummary};

use super::config::OutputConfig;

/// Indentation repeated once per depth level.
pub const DEPTH_INDENT: &str = "│   ";

/// Connector placed before every entry name.
pub const BRANCH: &str = "├── ";

/// Streaming tree formatter over any color-capable writer.
pub struct TreeFormatter<W> {
    config: OutputConfig,
    out: W,
}

impl TreeFormatter<StandardStream> {
    /// Formatter writing to stdout. Each line is flushed as it is written,
    /// so output produced before a fatal error is kept.
    pub fn stdout(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            config,
            out: StandardStream::stdout(choice),
        }
    }
}

impl<W: WriteColor> TreeFormatter<W> {
    pub fn new(out: W, config: OutputConfig) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_name(&mut self, name: &str, is_dir: bool) -> io::Result<()> {
        if is_dir && self.config.use_color {
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            write!(self.out, "{}", name)?;
            self.out.reset()?;
        } else {
            write!(self.out, "{}", name)?;
        }
        Ok(())
    }
}

impl<W: WriteColor> TreeOutput for TreeFormatter<W> {
    fn output_node(
        &mut self,
        name: &str,
        is_dir: bool,
        depth: usize,
        is_root: bool,
    ) -> io::Result<()> {
        if !is_root {
            write!(self.out, "{}{}", DEPTH_INDENT.repeat(depth), BRANCH)?;
        }
        self.write_name(name, is_dir)?;
        writeln!(self.out)
    }

    fn finish(&mut self, _summary: &WalkSummary) -> io::Result<()> {
        self.out.flush()
    }
}
