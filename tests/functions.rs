use std::{error::Error, path::Path};

use test_utils::{check_interpretation, Expected};

const SRC_PATH: &str = "./demos/functions.lol";
const EXPECTED: Expected = Expected {
    stdout: "25\n",
    stderr: "",
};

#[test]
fn interpret_functions() -> Result<(), Box<dyn Error>> {
    check_interpretation(Path::new(SRC_PATH), EXPECTED)
}
