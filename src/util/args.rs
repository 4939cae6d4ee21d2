//! Where command-line arguments come from.
//!
//! On Windows the host build system hands the whole option string over
//! pre-quoted, so the arguments are joined back together and split again
//! with a shell lexer that keeps quote characters. Everywhere else the
//! process arguments are used as they are. The choice is made once, at
//! startup; option parsing never needs to know which source it got.

use std::ffi::OsString;

use crate::util::diagnostic::BridgeError;

/// A source of command-line arguments, program name first.
pub trait ArgSource {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// The arguments to parse.
    fn args(&self) -> Result<Vec<String>, BridgeError>;
}

/// Process arguments, used as given.
#[derive(Debug, Clone)]
pub struct NativeArgs {
    args: Vec<String>,
}

impl NativeArgs {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NativeArgs {
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl ArgSource for NativeArgs {
    fn name(&self) -> &'static str {
        "native"
    }

    fn args(&self) -> Result<Vec<String>, BridgeError> {
        Ok(self.args.clone())
    }
}

/// Process arguments re-split with Windows quoting rules.
///
/// The program name is kept as one token, since install paths on Windows
/// commonly contain spaces.
#[derive(Debug, Clone)]
pub struct WindowsCommandLine {
    args: Vec<String>,
}

impl WindowsCommandLine {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WindowsCommandLine {
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl ArgSource for WindowsCommandLine {
    fn name(&self) -> &'static str {
        "windows-command-line"
    }

    fn args(&self) -> Result<Vec<String>, BridgeError> {
        let Some((program, rest)) = self.args.split_first() else {
            return Ok(Vec::new());
        };

        let mut tokens = vec![program.clone()];
        tokens.extend(split_command_line(&rest.join(" "))?);
        Ok(tokens)
    }
}

/// Pick the argument source for the platform this binary was built for.
pub fn from_env_args<I>(args: I) -> Box<dyn ArgSource>
where
    I: IntoIterator<Item = OsString>,
{
    let args: Vec<String> = args
        .into_iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();

    if cfg!(windows) {
        Box::new(WindowsCommandLine::new(args))
    } else {
        Box::new(NativeArgs::new(args))
    }
}

/// Token separators. Other Unicode whitespace is part of a word.
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Split a command line the way a non-POSIX shell lexer does.
///
/// - Tokens are separated by spaces, tabs, carriage returns and newlines.
/// - A `"` or `'` at the start of a token opens a quoted token that runs to
///   the matching quote. Both quote characters stay in the token.
/// - A quote inside a bare word is an ordinary character.
/// - Backslash is an ordinary character.
pub fn split_command_line(line: &str) -> Result<Vec<String>, BridgeError> {
    #[derive(Clone, Copy)]
    enum State {
        Between,
        Word,
        Quoted(char),
    }

    let mut tokens = Vec::new();
    let mut token = String::new();
    let mut state = State::Between;

    for c in line.chars() {
        match state {
            State::Between => {
                if is_separator(c) {
                    continue;
                }
                token.push(c);
                state = if c == '"' || c == '\'' {
                    State::Quoted(c)
                } else {
                    State::Word
                };
            }
            State::Word => {
                if is_separator(c) {
                    tokens.push(std::mem::take(&mut token));
                    state = State::Between;
                } else {
                    token.push(c);
                }
            }
            State::Quoted(quote) => {
                token.push(c);
                if c == quote {
                    tokens.push(std::mem::take(&mut token));
                    state = State::Between;
                }
            }
        }
    }

    match state {
        State::Between => {}
        State::Word => tokens.push(token),
        State::Quoted(_) => {
            return Err(BridgeError::InvalidArguments {
                message: "No closing quotation".to_string(),
            })
        }
    }

    Ok(tokens)
}
