//! Colored, paced terminal console.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use colored::{ColoredString, Colorize};

use eaq_core::{Console, QuestError, QuestResult, Tone};

/// How tones map to terminal colors. Owned by whoever builds the console.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let colored: ColoredString = match tone {
            Tone::Narrative => text.green(),
            Tone::Danger | Tone::Retry => text.red(),
            Tone::Notice => text.yellow(),
            Tone::Choice | Tone::Eerie => text.cyan(),
            Tone::Prompt => text.magenta(),
        };
        colored.to_string()
    }
}

/// Console over any reader/writer pair, usually stdin and stdout.
pub struct TerminalConsole<R: BufRead, W: Write> {
    input: R,
    output: W,
    palette: Palette,
    pacing: Duration,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W, palette: Palette, pacing: Duration) -> Self {
        Self {
            input,
            output,
            palette,
            pacing,
        }
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")?;
        self.output.flush()
    }

    #[cfg(test)]
    fn output(&self) -> &W {
        &self.output
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn display(&mut self, text: &str, tone: Tone) {
        let line = self.palette.paint(text, tone);
        if let Err(e) = self.write_line(&line) {
            log::warn!("could not write to terminal: {e}");
        }
        if !self.pacing.is_zero() {
            thread::sleep(self.pacing);
        }
    }

    fn prompt(&mut self, text: &str) -> QuestResult<String> {
        let prompt = self.palette.paint(text, Tone::Prompt);
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(QuestError::InputClosed);
        }
        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(answer.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn console(input: &str) -> TerminalConsole<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalConsole::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            Palette::new(false),
            Duration::ZERO,
        )
    }

    fn written(console: &TerminalConsole<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.output().clone()).unwrap()
    }

    #[test]
    fn display_writes_lines() {
        let mut c = console("");
        c.display("The forest hums.", Tone::Narrative);
        c.display("A roar!", Tone::Danger);
        assert_eq!(written(&c), "The forest hums.\nA roar!\n");
    }

    #[test]
    fn prompt_strips_line_ending_only() {
        let mut c = console(" 1 \r\nyes\n");
        assert_eq!(c.prompt("Pick: ").unwrap(), " 1 ");
        assert_eq!(c.prompt("Load? ").unwrap(), "yes");
        assert_eq!(written(&c), "Pick: Load? ");
    }

    #[test]
    fn prompt_without_trailing_newline() {
        let mut c = console("3");
        assert_eq!(c.prompt("Pick: ").unwrap(), "3");
    }

    #[test]
    fn end_of_input_closes() {
        let mut c = console("");
        assert!(matches!(c.prompt("Pick: "), Err(QuestError::InputClosed)));
    }

    #[test]
    fn disabled_palette_is_plain() {
        let palette = Palette::new(false);
        assert_eq!(palette.paint("hello", Tone::Danger), "hello");
    }

    #[test]
    fn enabled_palette_keeps_text() {
        colored::control::set_override(true);
        let painted = Palette::new(true).paint("hello", Tone::Notice);
        assert!(painted.contains("hello"));
        assert_ne!(painted, "hello");
        colored::control::unset_override();
    }
}
