use crate::span::Source;

use colored::*;
use std::fs;
use std::{fmt, io};

pub type HjResult<T = ()> = Result<T, HjError>;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum HjErrorKind {
    Lex,
    Parse,
    Type,
    Config,
    IO,
}

impl fmt::Display for HjErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                HjErrorKind::Lex => "lex error",
                HjErrorKind::Parse => "parse error",
                HjErrorKind::Type => "type error",
                HjErrorKind::Config => "config error",
                HjErrorKind::IO => "i/o error",
            }
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HjError {
    pub msg: String,
    pub src: Vec<Source>,
    pub kind: HjErrorKind,
}

const ELLIPSIS: &str = "...";

impl HjError {
    pub fn new(kind: HjErrorKind, msg: String, src: Source) -> HjError {
        HjError {
            msg,
            src: vec![src],
            kind,
        }
    }

    /// Prints the error to stderr. `text` is the contents of the file the
    /// error points into; when it is `None` the file is read from disk.
    pub fn emit(self, text: Option<&str>) {
        let kind = format!("{}:", self.kind);
        let mut msg_lines = self.msg.lines().collect::<Vec<_>>();
        msg_lines.dedup();
        let indent = " ".repeat(kind.len() + 1);
        let msg = msg_lines
            .iter()
            .enumerate()
            .map(|(i, s)| {
                if i == 0 {
                    s.to_string()
                } else {
                    format!("{}{}", indent, s)
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        eprintln!("{} {}", kind.bold().red(), msg.bold());

        for src in self.src {
            let arrow = "-->".bold();
            let span = match src.span {
                Some(span) => span,
                None => {
                    eprintln!(" {} {}", arrow, src.filepath);
                    continue;
                }
            };

            let buf = match text {
                Some(t) => t.to_string(),
                None => match fs::read_to_string(&src.filepath) {
                    Ok(t) => t,
                    Err(_) => {
                        eprintln!(" {} {}:{}", arrow, src.filepath, span);
                        continue;
                    }
                },
            };

            let start_line = span.start.lineno;
            let end_line = span.end.lineno;
            let line_count = span.lines();
            let max_num_width = if line_count == 1 {
                (end_line + 1).to_string().len() + 1
            } else {
                ELLIPSIS.len() + 1
            };
            let full_spacing = " ".repeat(max_num_width);
            let pipe = "|".bold();

            eprintln!(
                "{}{} {}:{}",
                " ".repeat(max_num_width - 1),
                arrow,
                src.filepath,
                span
            );
            eprintln!("{}{}", full_spacing, pipe);

            // skip to the start line
            let mut lines = buf.lines().skip(start_line).take(line_count);
            let mut lineno = start_line + 1;
            let red_slash = "/".bold().red();
            let red_pipe = "|".bold().red();
            if line_count == 1 {
                let line = lines.next().unwrap_or("");
                let lineno_str = lineno.to_string();
                let spacing = " ".repeat(max_num_width - lineno_str.len());
                eprintln!("{}{}{} {}", lineno_str.bold(), spacing, pipe, line);
                let indent = " ".repeat(span.start.col);
                let indicator = "^".repeat(span.len().max(1)).bold().red();
                eprintln!("{}{} {}{}", full_spacing, pipe, indent, indicator);
            } else {
                for (i, line) in lines.enumerate() {
                    if line_count > 3 && i > 1 && i < line_count - 2 {
                        if i == 2 {
                            let after = line.trim_start();
                            let spacing = " ".repeat(line.len() - after.len());
                            eprintln!(
                                "{} {} {} {}{}",
                                ELLIPSIS.bold(),
                                pipe,
                                red_pipe,
                                spacing,
                                ELLIPSIS
                            );
                        }
                        lineno += 1;
                        continue;
                    }

                    let lineno_str = lineno.to_string();
                    let spacing = " ".repeat(max_num_width.saturating_sub(lineno_str.len()));
                    let prefix = if i == 0 { &red_slash } else { &red_pipe };
                    eprintln!(
                        "{}{}{} {} {}",
                        lineno_str.bold(),
                        spacing,
                        pipe,
                        prefix,
                        line
                    );
                    lineno += 1;
                }
                let indent = "_".repeat(span.end.col + 1).bold().red();
                let indicator = "^".bold().red();
                eprintln!(
                    "{}{} {}{}{}",
                    full_spacing, pipe, red_pipe, indent, indicator
                );
            }
        }
        eprintln!()
    }
}

impl fmt::Display for HjError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.msg)?;
        if let Some(src) = self.src.first() {
            write!(f, " ({})", src)?;
        }
        Ok(())
    }
}

impl std::error::Error for HjError {}

impl From<HjError> for Vec<HjError> {
    fn from(err: HjError) -> Vec<HjError> {
        vec![err]
    }
}

impl From<io::Error> for HjError {
    fn from(err: io::Error) -> HjError {
        HjError {
            msg: err.to_string(),
            src: vec![],
            kind: HjErrorKind::IO,
        }
    }
}

impl From<toml::de::Error> for HjError {
    fn from(err: toml::de::Error) -> HjError {
        HjError {
            msg: err.to_string(),
            src: vec![],
            kind: HjErrorKind::Config,
        }
    }
}
