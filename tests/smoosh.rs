use std::{error::Error, path::Path};

use test_utils::{check_interpretation, Expected};

const SRC_PATH: &str = "./demos/smoosh.lol";
const EXPECTED: Expected = Expected {
    stdout: "HAI WORLD\n3.0\n",
    stderr: "",
};

#[test]
fn interpret_smoosh() -> Result<(), Box<dyn Error>> {
    check_interpretation(Path::new(SRC_PATH), EXPECTED)
}
