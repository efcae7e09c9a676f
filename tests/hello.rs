use std::{error::Error, path::Path};

use test_utils::{check_interpretation, Expected};

const SRC_PATH: &str = "./demos/hello.lol";
const EXPECTED: Expected = Expected {
    stdout: "HAI WORLD\n",
    stderr: "",
};

#[test]
fn interpret_hello() -> Result<(), Box<dyn Error>> {
    check_interpretation(Path::new(SRC_PATH), EXPECTED)
}
