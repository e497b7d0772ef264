//! The conversation loop.

use std::io::{self, Write};

use rogerian_engine::Session;
use rogerian_foundation::{Error, Result};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor, W: Write = io::Stdout> {
    /// The line editor for input.
    editor: E,

    /// Where replies are written.
    output: W,

    /// The conversation.
    session: Session,

    /// Whether to print the greeting first.
    show_banner: bool,

    /// Whether to write each input line after the prompt (batch mode).
    echo_input: bool,

    /// Prompt for user input.
    prompt: String,

    /// Prefix for replies.
    speaker: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor, writing to stdout.
    pub fn with_editor(editor: E, session: Session) -> Self {
        Self {
            editor,
            output: io::stdout(),
            session,
            show_banner: true,
            echo_input: false,
            prompt: "YOU: ".to_string(),
            speaker: "BOT: ".to_string(),
        }
    }
}

impl<E: LineEditor, W: Write> Repl<E, W> {
    /// Redirects replies to another writer.
    pub fn with_output<W2: Write>(self, output: W2) -> Repl<E, W2> {
        Repl {
            editor: self.editor,
            output,
            session: self.session,
            show_banner: self.show_banner,
            echo_input: self.echo_input,
            prompt: self.prompt,
            speaker: self.speaker,
        }
    }

    /// Disables the greeting.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Writes each input line after the prompt, so the output reads as a
    /// transcript when input does not come from a terminal.
    #[must_use]
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo_input = echo;
        self
    }

    /// Sets the input prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Sets the reply prefix.
    #[must_use]
    pub fn with_speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speaker = speaker.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a reference to the output.
    #[must_use]
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the REPL, returning the output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until a farewell, an interrupt or the end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            let greeting = self.session.greeting().to_string();
            self.say(&greeting)?;
        }

        while self.read_reply_print()? {}
        Ok(())
    }

    /// Executes one iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_reply_print(&mut self) -> Result<bool> {
        match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => {
                if self.echo_input {
                    writeln!(self.output, "{}{line}", self.prompt).map_err(write_error)?;
                }
                if !line.trim().is_empty() {
                    self.editor.add_history(&line);
                }

                let reply = self.session.reply(&line);
                self.say(&reply.text)?;
                Ok(!reply.ends_conversation())
            }
            ReadResult::Interrupted | ReadResult::Eof => {
                if !self.echo_input {
                    writeln!(self.output).map_err(write_error)?;
                }
                let text = self.session.script().replies().interrupted.clone();
                self.say(&text)?;
                Ok(false)
            }
        }
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}{text}", self.speaker).map_err(write_error)?;
        self.output.flush().map_err(write_error)
    }
}

fn write_error(e: io::Error) -> Error {
    Error::internal(format!("failed to write output: {e}"))
}
