#![cfg(test)]

use hj::driver::{Compilation, CompileOptions, Driver};
use hj::errors::HjError;
use hj::pathlib::FilePath;

pub fn enable_debug_logs() {
    // only the first call in a test binary installs the logger
    let _ = fern::Dispatch::new()
        .level(log::LevelFilter::Debug)
        .chain(std::io::stderr())
        .apply();
}

pub fn test_compile(src: &str) -> Result<Compilation, Vec<HjError>> {
    let filepath = FilePath::from("test.hj");
    let driver = Driver::new(FilePath::new());
    let options = CompileOptions {
        input_path: filepath.clone(),
        ..Default::default()
    };
    driver.compile_src(src, filepath, &options)
}

#[allow(dead_code)]
pub fn error_messages(src: &str) -> Vec<String> {
    test_compile(src)
        .expect_err("compilation should fail")
        .into_iter()
        .map(|err| err.msg)
        .collect()
}
