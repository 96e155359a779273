use std::time::Instant;

use crate::driver::{Compilation, CompileOptions, Driver};
use crate::output;

pub(super) fn action(driver: &mut Driver, options: CompileOptions) {
    let start_time = Instant::now();
    log::info!("Compiling {}...", options.input_path);
    log::debug!("hj root: {}", driver.root_path());

    let src = match driver.read_source(&options) {
        Ok(src) => src,
        Err(errs) => {
            driver.emit_errors(errs, None);
            log::error!("{} errors emitted", driver.errors_emitted);
            return;
        }
    };

    let compilation = match driver.compile_src(&src, options.input_path.clone(), &options) {
        Ok(c) => c,
        Err(errs) => {
            driver.emit_errors(errs, Some(&src));
            log::error!("{} errors emitted", driver.errors_emitted);
            return;
        }
    };

    if options.debug {
        dump(&compilation);
    }

    log::info!(
        "Analysis of {} finished in {:?}",
        compilation.filepath,
        start_time.elapsed()
    );
    log::warn!(
        "no code generation backend is available, nothing was written to {}",
        options.get_output_path()
    );
}

fn dump(compilation: &Compilation) {
    for line in dump_lines(compilation) {
        output::print_debug(&line);
    }
}

/// The `-d` output: tokens, then the syntax tree, then the outer variables.
/// Each entry becomes one `Debug:` line.
fn dump_lines(compilation: &Compilation) -> Vec<String> {
    let mut lines = vec!["Tokens:".to_string()];
    lines.extend(compilation.tokens.iter().map(|tok| tok.debug_str()));

    lines.push("Syntax tree:".to_string());
    lines.extend(compilation.scope.debug_str().lines().map(str::to_string));

    lines.push("Variables:".to_string());
    if compilation.variables.is_empty() {
        lines.push("(none)".to_string());
    }
    lines.extend(
        compilation
            .variables
            .iter()
            .map(|var| format!("{}: {}", var.name, var.ty)),
    );
    lines
}

#[cfg(test)]
mod compile_tests {
    use super::dump_lines;
    use crate::driver::{CompileOptions, Driver};
    use crate::output;
    use crate::pathlib::FilePath;

    fn dump_src(src: &str) -> Vec<String> {
        let driver = Driver::new(FilePath::new());
        let compilation = driver
            .compile_src(src, FilePath::from("dump.hj"), &CompileOptions::default())
            .expect("should compile");
        dump_lines(&compilation)
    }

    #[test]
    fn dump_has_all_sections_in_order() {
        let lines = dump_src("let x = 2.5;\nprint(x);");
        assert_eq!(
            lines,
            vec![
                "Tokens:",
                "Keyword (\"let\")",
                "Custom name (\"x\")",
                "Assignment operator (\"=\")",
                "Number literal (\"2.5\")",
                "Semicolon (\";\")",
                "Custom name (\"print\")",
                "Opening parenthesis (\"(\")",
                "Custom name (\"x\")",
                "Closing parenthesis (\")\")",
                "Semicolon (\";\")",
                "End of file (\"EOF\")",
                "Syntax tree:",
                "Outer scope node with commands:",
                "\tVariable definition defining variable x",
                "\t\twith expression:",
                "\t\tFloat literal with value 2.5 (float)",
                "\tFunction call command calling to function print",
                "\t\tArgument 1:",
                "\t\t\tVariable with name x (float)",
                "Variables:",
                "x: float",
            ]
        );
    }

    #[test]
    fn dump_without_variables() {
        let lines = dump_src("");
        assert_eq!(lines[0], "Tokens:");
        assert_eq!(lines[1], "End of file (\"EOF\")");
        assert_eq!(lines[3], "Outer scope node with commands:");
        assert_eq!(lines[4], "\t(no commands)");
        assert_eq!(&lines[5..], &["Variables:", "(none)"]);
    }

    #[test]
    fn dump_lines_are_debug_prefixed() {
        colored::control::set_override(false);
        let printed = dump_src("let b = true;")
            .iter()
            .map(|line| output::debug_line(line))
            .collect::<Vec<_>>();
        assert!(printed.iter().all(|line| line.starts_with("Debug: ")));
        assert_eq!(printed.last().map(String::as_str), Some("Debug: b: bool"));
        colored::control::unset_override();
    }
}
