#![cfg(test)]

mod utils;

use std::fs;

use hj::ast::{CommandKind, Type};
use hj::driver::{CompileOptions, Driver};
use hj::errors::{HjError, HjErrorKind};
use hj::pathlib::FilePath;
use hj::span::{Pos, Source, Span};
use utils::{enable_debug_logs, error_messages, test_compile};

#[test]
fn token_categories_of_definition() {
    let compilation = test_compile("let i = 1 + 2;").expect("should compile");
    let categories = compilation
        .tokens
        .iter()
        .map(|tok| tok.kind.category())
        .collect::<Vec<_>>();
    assert_eq!(
        categories,
        vec![
            "Keyword",
            "Custom name",
            "Assignment operator",
            "Number literal",
            "Operator",
            "Number literal",
            "Semicolon",
            "End of file"
        ]
    );
}

#[test]
fn program_with_control_flow() {
    enable_debug_logs();
    let src = r#"
// sums the first ten numbers
let int total = 0;
let i = 0;
while true {
    i += 1;
    total += i;
    if false {
        print("never");
    } else if true {
        print(total);
    } else {
        let unused = 'x';
    }
}
let float avg = 5.5;
avg /= 2;
"#;
    let compilation = test_compile(src).expect("should compile");
    assert_eq!(compilation.scope.commands.len(), 5);
    let vars = compilation
        .variables
        .iter()
        .map(|v| (v.name.as_str(), v.ty))
        .collect::<Vec<_>>();
    assert_eq!(
        vars,
        vec![("avg", Type::Float), ("i", Type::Int), ("total", Type::Int)]
    );
    match &compilation.scope.commands[2].kind {
        CommandKind::While(node) => assert_eq!(node.body.commands.len(), 3),
        other => panic!("expected while loop, found {:?}", other),
    }
}

#[test]
fn invalid_binary_operation() {
    assert_eq!(
        error_messages("let i = 1 + false;"),
        vec!["invalid types \"int\" and \"bool\" for binary operation \"+\""]
    );
}

#[test]
fn float_promotion() {
    let compilation = test_compile("let x = 1 + 2.5;").unwrap();
    assert_eq!(compilation.variables[0].ty, Type::Float);
}

#[test]
fn block_local_variable_expires() {
    let msgs = error_messages("if true { let y = 1; } y = 2;");
    assert_eq!(msgs, vec!["assigning to undefined variable \"y\""]);
}

#[test]
fn lex_errors_are_all_reported() {
    let errs = test_compile("let a = 1.2.3; let b = 1.;").unwrap_err();
    assert_eq!(errs.len(), 2);
    assert!(errs.iter().all(|e| e.kind == HjErrorKind::Lex));
}

#[test]
fn parser_recovers_between_statements() {
    let errs = test_compile("let = 1; print(2); let int 3;").unwrap_err();
    assert_eq!(errs.len(), 2);
    assert!(errs.iter().all(|e| e.kind == HjErrorKind::Parse));
}

#[test]
fn errors_point_into_the_file() {
    let errs = test_compile("let a = 1;\nprint(a, a);").unwrap_err();
    let src = &errs[0].src[0];
    assert_eq!(src.filepath, FilePath::from("test.hj"));
    assert_eq!(src.span.map(|s| s.start.lineno), Some(1));
}

#[test]
fn compile_from_file() {
    let dir = FilePath::from(std::env::temp_dir()) / "hj_compile_tests";
    fs::create_dir_all(&dir).unwrap();
    let input_path = &dir / "hello.hj";
    fs::write(&input_path, "let str greeting = \"hello\";\nprint(greeting);\n").unwrap();

    let driver = Driver::new(dir.clone());
    let options = CompileOptions {
        input_path: input_path.clone(),
        ..Default::default()
    };
    let compilation = driver.compile(&options).expect("should compile");
    assert_eq!(compilation.filepath, input_path);
    assert_eq!(compilation.variables[0].name, "greeting");
    assert_eq!(options.get_output_path(), &dir / "hello");
}

#[test]
fn emitting_groups_errors() {
    let src = "let a = 1 + true;\nlet b = 'c' + 1;";
    let errs = test_compile(src).unwrap_err();
    assert_eq!(errs.len(), 2);

    colored::control::set_override(false);
    let mut driver = Driver::new(FilePath::new());
    driver.emit_errors(errs, Some(src));
    assert_eq!(driver.errors_emitted, 2);
}

#[test]
fn errors_with_one_source_are_merged() {
    let src = "print(1, 2);";
    let at = Source::new(
        FilePath::from("test.hj"),
        Span {
            start: Pos::new(),
            end: Pos {
                lineno: 0,
                col: 5,
                offset: 5,
            },
        },
    );
    let errs = vec![
        HjError::new(HjErrorKind::Type, "first".to_string(), at.clone()),
        HjError::new(HjErrorKind::Type, "second".to_string(), at.clone()),
        HjError::new(HjErrorKind::Parse, "other kind".to_string(), at),
    ];

    colored::control::set_override(false);
    let mut driver = Driver::new(FilePath::new());
    driver.emit_errors(errs, Some(src));
    assert_eq!(driver.errors_emitted, 2);
}

#[test]
fn rejected_type_leaves_variable_undefined() {
    assert_eq!(
        error_messages("let uint u = 1;\nprint(u);"),
        vec![
            "type \"uint\" is not supported yet",
            "usage of undefined variable \"u\" in expression"
        ]
    );
}
