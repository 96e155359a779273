use std::fs;

use itertools::Itertools;
use structopt::StructOpt;

use crate::{
    ast::{token::Token, Scope},
    errors::{HjError, HjErrorKind},
    parse::{Lexer, Parser},
    pathlib::FilePath,
    sema::{TypeChecker, Variable},
    span::Source,
};

pub const SOURCE_EXTENSION: &str = "hj";

#[derive(Debug, Default, StructOpt)]
pub struct CompileOptions {
    #[structopt(name = "FILE", help = "hj source file to compile")]
    pub input_path: FilePath,

    #[structopt(
        long = "output",
        short = "o",
        help = "Output file name",
        long_help = "Defaults to the file stem of the input."
    )]
    pub output_path: Option<FilePath>,

    #[structopt(
        long,
        short,
        help = "Print the tokens, the syntax tree and the variable table"
    )]
    pub debug: bool,
}

impl CompileOptions {
    /// The path a back end would write to.
    pub fn get_output_path(&self) -> FilePath {
        match &self.output_path {
            Some(p) => p.clone(),
            None => {
                let stem = self.input_path.file_stem();
                self.input_path.dir() / stem
            }
        }
    }
}

/// Everything the front end produced for one file.
#[derive(Debug)]
pub struct Compilation {
    pub filepath: FilePath,
    pub tokens: Vec<Token>,
    pub scope: Scope,
    pub variables: Vec<Variable>,
}

#[derive(Debug)]
pub struct Driver {
    root_path: FilePath,
    pub errors_emitted: usize,
}

impl Driver {
    pub fn new(root_path: FilePath) -> Driver {
        Driver {
            root_path,
            errors_emitted: 0,
        }
    }

    pub fn root_path(&self) -> &FilePath {
        &self.root_path
    }

    /// Groups errors with the same kind and source and prints each group once.
    pub fn emit_errors(&mut self, errs: Vec<HjError>, src: Option<&str>) {
        for ((kind, src_locs), group) in &errs.into_iter().group_by(|err| (err.kind, err.src.clone())) {
            let msg = group.map(|err| err.msg).collect::<Vec<_>>().join("\n");
            let err = HjError {
                msg,
                src: src_locs,
                kind,
            };
            err.emit(src);
            self.errors_emitted += 1;
        }
    }

    pub fn read_source(&self, options: &CompileOptions) -> Result<String, Vec<HjError>> {
        let filepath = &options.input_path;
        if !filepath.has_extension(SOURCE_EXTENSION) {
            log::warn!(
                "{} does not have the .{} extension",
                filepath,
                SOURCE_EXTENSION
            );
        }

        fs::read_to_string(filepath).map_err(|err| {
            vec![HjError::new(
                HjErrorKind::IO,
                format!("could not read {}: {}", filepath, err),
                Source::from(filepath.clone()),
            )]
        })
    }

    pub fn compile(&self, options: &CompileOptions) -> Result<Compilation, Vec<HjError>> {
        let src = self.read_source(options)?;
        self.compile_src(&src, options.input_path.clone(), options)
    }

    pub fn compile_src(
        &self,
        src: &str,
        filepath: FilePath,
        options: &CompileOptions,
    ) -> Result<Compilation, Vec<HjError>> {
        log::debug!("lexing {} ({} bytes)", filepath, src.len());
        let tokens = Lexer::new(src, filepath.clone()).tokenize()?;
        log::debug!("{} tokens", tokens.len());

        let mut scope = Parser::parse_tokens(tokens.clone(), filepath.clone())?;
        log::debug!("parsed {} commands", scope.commands.len());

        let mut checker = TypeChecker::new(filepath.clone());
        checker.check(&mut scope)?;
        let variables = checker.variables().into_iter().cloned().collect::<Vec<_>>();
        log::debug!(
            "type checked {} (output would be {})",
            filepath,
            options.get_output_path()
        );

        Ok(Compilation {
            filepath,
            tokens,
            scope,
            variables,
        })
    }
}

#[cfg(test)]
mod driver_tests {
    use super::{CompileOptions, Driver};
    use crate::errors::HjErrorKind;
    use crate::pathlib::FilePath;

    #[test]
    fn output_path_defaults_to_stem() {
        let options = CompileOptions {
            input_path: FilePath::from("progs/hello.hj"),
            ..Default::default()
        };
        assert_eq!(options.get_output_path(), FilePath::from("progs/hello"));

        let options = CompileOptions {
            input_path: FilePath::from("hello.hj"),
            output_path: Some(FilePath::from("out/bin")),
            ..Default::default()
        };
        assert_eq!(options.get_output_path(), FilePath::from("out/bin"));
    }

    #[test]
    fn missing_input_is_io_error() {
        let driver = Driver::new(FilePath::from("/opt/hj"));
        let options = CompileOptions {
            input_path: FilePath::from("does/not/exist.hj"),
            ..Default::default()
        };
        let errs = driver.compile(&options).unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].kind, HjErrorKind::IO);
    }

    #[test]
    fn stops_at_first_failing_phase() {
        let driver = Driver::new(FilePath::new());
        let options = CompileOptions::default();
        let errs = driver
            .compile_src("let a = $; let b = 1 + true;", FilePath::from("t.hj"), &options)
            .unwrap_err();
        assert!(errs.iter().all(|e| e.kind == HjErrorKind::Lex));
    }
}
