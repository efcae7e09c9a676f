use std::{error::Error, path::Path};

use test_utils::check_failing_interpretation;

const SRC_PATH: &str = "./demos/undeclared.lol";

#[test]
fn interpret_undeclared_variable() -> Result<(), Box<dyn Error>> {
    check_failing_interpretation(Path::new(SRC_PATH))
}
