//! The console text stream every demo writes through.
//!
//! A `Console` either prints to stdout or captures lines in memory. Only the
//! capture mode keeps a transcript; stdout consoles print and forget.

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sink {
    Stdout,
    Capture,
}

#[derive(Debug)]
pub struct Console {
    sink: Sink,
    color: bool,
    transcript: Vec<String>,
}

impl Console {
    pub fn stdout(color: bool) -> Self {
        Self {
            sink: Sink::Stdout,
            color,
            transcript: Vec::new(),
        }
    }

    pub fn capture() -> Self {
        Self {
            sink: Sink::Capture,
            color: false,
            transcript: Vec::new(),
        }
    }

    pub fn line(&mut self, text: impl Into<String>) {
        let text = text.into();
        match self.sink {
            Sink::Stdout => println!("{}", text),
            Sink::Capture => self.transcript.push(text),
        }
    }

    pub fn lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for line in lines {
            self.line(line);
        }
    }

    pub fn blank(&mut self) {
        self.line(String::new());
    }

    /// `=== Title ===`, bold when colour is on.
    pub fn heading(&mut self, title: &str) {
        let text = format!("=== {} ===", title);
        match self.sink {
            Sink::Stdout if self.color => println!("{}", text.bold().cyan()),
            Sink::Stdout => println!("{}", text),
            Sink::Capture => self.transcript.push(text),
        }
    }

    /// Captured lines. Always empty for a stdout console.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }
}
