use std::{error::Error, path::Path};

use test_utils::{check_interpretation, Expected};

const SRC_PATH: &str = "./demos/switch.lol";
const EXPECTED: Expected = Expected {
    stdout: "two\n",
    stderr: "",
};

#[test]
fn interpret_switch() -> Result<(), Box<dyn Error>> {
    check_interpretation(Path::new(SRC_PATH), EXPECTED)
}
