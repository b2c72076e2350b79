//! Terminal styling utilities
//!
//! Semantic colors for CLI output:
//! - Green/yellow/red for success, informational and error outcomes
//! - Cyan for headers and technical terms

use crossterm::style::Stylize;

/// Extension trait for consistent sinkflip styling
///
/// # Examples
///
/// ```
/// use sinkflip::style::SinkflipStyle;
///
/// println!("{}", "DEFAULT SINK:".header());
/// println!("{}", "Switched audio to: Desktop Speakers".success());
/// ```
pub trait SinkflipStyle: Stylize {
    /// Section headers (cyan bold)
    fn header(self) -> <<Self as Stylize>::Styled as Stylize>::Styled
    where
        Self: Sized,
        <Self as Stylize>::Styled: Stylize,
    {
        self.cyan().bold()
    }

    /// Successful switch, available role (green)
    fn success(self) -> <Self as Stylize>::Styled
    where
        Self: Sized,
    {
        self.green()
    }

    /// Failed query or switch (red)
    fn error(self) -> <Self as Stylize>::Styled
    where
        Self: Sized,
    {
        self.red()
    }

    /// Missing device (yellow)
    fn warning(self) -> <Self as Stylize>::Styled
    where
        Self: Sized,
    {
        self.yellow()
    }

    /// Sink ids and role names (cyan)
    fn technical(self) -> <Self as Stylize>::Styled
    where
        Self: Sized,
    {
        self.cyan()
    }
}

impl<T: Stylize> SinkflipStyle for T {}
