use std::{
    error::Error,
    io::{self, Write},
    path::Path,
    process::{Command, Output, Stdio},
    str,
};

const KTHX_PATH: &str = "./target/debug/kthx";

pub struct Expected<'a> {
    pub stdout: &'a str,
    pub stderr: &'a str,
}

impl<'a> Expected<'a> {
    fn assert_matches(self, output: &Output) -> Result<(), Box<dyn Error>> {
        assert_eq!(str::from_utf8(&output.stdout)?, self.stdout);
        assert_eq!(str::from_utf8(&output.stderr)?, self.stderr);
        Ok(())
    }
}

fn run_interpreter(src_path: &Path, input: Option<&str>) -> Result<Output, io::Error> {
    let mut child = Command::new(KTHX_PATH)
        .arg(src_path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    if let Some(input) = input {
        if let Some(stdin) = child.stdin.as_mut() {
            stdin.write_all(input.as_bytes())?;
        }
    }

    child.wait_with_output()
}

pub fn check_interpretation(src_path: &Path, expected: Expected) -> Result<(), Box<dyn Error>> {
    let output = run_interpreter(src_path, None)?;

    expected.assert_matches(&output)?;
    assert!(
        output.status.success(),
        "kthx exited with status {:?}",
        output.status.code()
    );

    Ok(())
}

pub fn check_interpretation_with_input(
    src_path: &Path,
    input: &str,
    expected: Expected,
) -> Result<(), Box<dyn Error>> {
    let output = run_interpreter(src_path, Some(input))?;

    expected.assert_matches(&output)?;
    assert!(
        output.status.success(),
        "kthx exited with status {:?}",
        output.status.code()
    );

    Ok(())
}

pub fn check_failing_interpretation(src_path: &Path) -> Result<(), Box<dyn Error>> {
    let output = run_interpreter(src_path, None)?;

    println!("{output:?}");
    assert!(
        !output.status.success(),
        "kthx should exit with status -1"
    );

    Ok(())
}
