use std::{error::Error, path::Path};

use test_utils::{check_interpretation_with_input, Expected};

const SRC_PATH: &str = "./demos/gimmeh.lol";
const EXPECTED: Expected = Expected {
    stdout: "43\n",
    stderr: "Enter value for X: ",
};

#[test]
fn interpret_gimmeh() -> Result<(), Box<dyn Error>> {
    check_interpretation_with_input(Path::new(SRC_PATH), "42\n", EXPECTED)
}
