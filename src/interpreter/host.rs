use crate::value::Value;

/// Ports into the embedding shell.
///
/// The interpreter drives all three from its own thread, in program order:
/// `write` for composed `VISIBLE` lines, `read` for `GIMMEH` (blocking until
/// the host answers), and `observe` after every binding mutation, `IT`
/// included.
pub trait Host {
    fn write(&mut self, text: &str);

    fn read(&mut self, prompt: &str) -> String;

    fn observe(&mut self, name: &str, value: &Value);
}
