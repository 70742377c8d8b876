//! Where a command line comes from when the caller does not pass one.

use std::env;

/// Supplies the command line parsed when no explicit text is given.
pub trait ArgumentSource {
    fn command_line(&self) -> String;
}

/// The arguments this process was started with, minus the program name.
///
/// Arguments that are not valid Unicode are converted lossily.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessArgs;

impl ArgumentSource for ProcessArgs {
    fn command_line(&self) -> String {
        join_args(
            env::args_os()
                .skip(1)
                .map(|arg| arg.to_string_lossy().into_owned()),
        )
    }
}

/// A fixed argument list, joined the same way process arguments are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticArgs {
    args: Vec<String>,
}

impl StaticArgs {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl ArgumentSource for StaticArgs {
    fn command_line(&self) -> String {
        join_args(&self.args)
    }
}

impl<F> ArgumentSource for F
where
    F: Fn() -> String,
{
    fn command_line(&self) -> String {
        self()
    }
}

/// Join arguments with single spaces.
///
/// No quoting is added: an argument that contains spaces must already
/// carry the quotes or braces the tokenizer expects.
pub fn join_args<I, S>(args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::new();
    for (index, arg) in args.into_iter().enumerate() {
        if index > 0 {
            line.push(' ');
        }
        line.push_str(arg.as_ref());
    }
    line
}
