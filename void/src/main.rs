use std::process::ExitCode;

use void_driver::{Argument, Parser};

fn main() -> ExitCode {
    let argument = Argument::parse();
    void_driver::run(&argument)
}
