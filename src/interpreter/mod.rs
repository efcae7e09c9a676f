//! # Interpreter
//!
//! Single-pass parser/executor for LOLCODE. There is no AST: the interpreter
//! walks the token stream with an index cursor, validating structure and
//! evaluating as it goes. Loop bodies, loop conditions, and function bodies
//! are stored as token-index spans and re-entered by saving and restoring the
//! cursor.

mod error;
mod host;

pub use error::*;
pub use host::*;

use std::collections::HashMap;

use log::{debug, trace};

use crate::{
    lexer::{Token, TokenKind},
    value::{Number, Value},
};

/// A user function: parameter names plus the `[body_start, body_end)` span of
/// its body in the token stream. Bodies are never cloned out of the stream.
#[derive(Debug, Clone)]
struct Function {
    params: Vec<String>,
    body_start: usize,
    body_end: usize,
}

/// Outcome of a single statement. `Break` unwinds to the innermost enclosing
/// loop or switch, `Return` to the enclosing function invocation.
#[derive(Debug, Clone, PartialEq)]
enum Flow {
    Normal,
    Break,
    Return(Value),
}

/// Tokens that begin another statement and therefore terminate the expression
/// list of a `VISIBLE`.
const VISIBLE_STOP: &[TokenKind] = &[
    TokenKind::IHasA,
    TokenKind::Visible,
    TokenKind::Gimmeh,
    TokenKind::ORly,
    TokenKind::YaRly,
    TokenKind::Mebbe,
    TokenKind::NoWai,
    TokenKind::Oic,
    TokenKind::Wtf,
    TokenKind::Omg,
    TokenKind::Omgwtf,
    TokenKind::ImInYr,
    TokenKind::ImOuttaYr,
    TokenKind::Gtfo,
    TokenKind::FoundYr,
    TokenKind::HowIzI,
    TokenKind::IfUSaySo,
    TokenKind::Kthxbye,
    TokenKind::Buhbye,
];

pub struct Interpreter<'a, H: Host> {
    tokens: &'a [Token],
    position: usize,
    variables: HashMap<String, Value>,
    functions: HashMap<String, Function>,
    host: &'a mut H,
}

impl<'a, H: Host> Interpreter<'a, H> {
    pub fn new(tokens: &'a [Token], host: &'a mut H) -> Self {
        let mut variables = HashMap::new();
        variables.insert("IT".to_string(), Value::Noob);

        Self {
            tokens,
            position: 0,
            variables,
            functions: HashMap::new(),
            host,
        }
    }

    /// Execute the whole program:
    /// `HAI [version] [WAZZUP decls BUHBYE] { function-def | statement } KTHXBYE`.
    pub fn run(&mut self) -> InterpretResult<()> {
        self.expect(TokenKind::Hai)?;

        // optional version number, consumed and discarded
        if matches!(
            self.current_kind(),
            Some(TokenKind::Numbr | TokenKind::Numbar)
        ) {
            self.advance();
        }

        if self.current_kind() == Some(TokenKind::Wazzup) {
            self.advance();
            while self.current_kind() != Some(TokenKind::Buhbye) {
                if self.current().is_none() {
                    return Err(InterpretError::syntax(
                        None,
                        "Expected BUHBYE, got end of input",
                    ));
                }
                self.run_declaration()?;
            }
            self.expect(TokenKind::Buhbye)?;
        }

        while self.current_kind() != Some(TokenKind::Kthxbye) {
            if self.current().is_none() {
                return Err(InterpretError::syntax(
                    None,
                    "Expected KTHXBYE, got end of input",
                ));
            }

            if self.current_kind() == Some(TokenKind::HowIzI) {
                self.run_function_definition()?;
                continue;
            }

            match self.run_statement()? {
                Flow::Normal => {}
                Flow::Break => {
                    return Err(InterpretError::syntax(
                        None,
                        "GTFO outside of a loop, switch, or function",
                    ));
                }
                Flow::Return(_) => {
                    return Err(InterpretError::syntax(
                        None,
                        "FOUND YR outside of a function",
                    ));
                }
            }
        }

        self.expect(TokenKind::Kthxbye)?;
        Ok(())
    }

    // cursor primitives

    fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|token| token.kind)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.tokens.get(self.position + 1).map(|token| token.kind)
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn expect(&mut self, expected: TokenKind) -> InterpretResult<&'a Token> {
        let tokens = self.tokens;
        match tokens.get(self.position) {
            Some(token) if token.kind == expected => {
                self.position += 1;
                Ok(token)
            }
            Some(token) => Err(InterpretError::syntax(
                Some(token.line),
                format!("Expected {expected}, got {}", token.kind),
            )),
            None => Err(InterpretError::syntax(
                None,
                format!("Expected {expected}, got end of input"),
            )),
        }
    }

    // environment

    /// Update a binding and report it to the host, in that order.
    fn bind(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
        self.host.observe(name, &self.variables[name]);
    }

    fn set_it(&mut self, value: Value) {
        self.bind("IT", value);
    }

    fn it_value(&self) -> Value {
        self.variables.get("IT").cloned().unwrap_or(Value::Noob)
    }

    // statements

    fn run_statement(&mut self) -> InterpretResult<Flow> {
        let Some(kind) = self.current_kind() else {
            return Ok(Flow::Normal);
        };

        match kind {
            TokenKind::IHasA => {
                self.run_declaration()?;
                Ok(Flow::Normal)
            }
            TokenKind::Visible => {
                self.run_visible()?;
                Ok(Flow::Normal)
            }
            TokenKind::Gimmeh => {
                self.run_gimmeh()?;
                Ok(Flow::Normal)
            }
            TokenKind::ORly => self.run_branch(),
            TokenKind::Wtf => self.run_switch(),
            TokenKind::ImInYr => self.run_loop(),
            TokenKind::Gtfo => {
                self.advance();
                Ok(Flow::Break)
            }
            TokenKind::FoundYr => {
                self.advance();
                let value = self.eval_expression()?;
                Ok(Flow::Return(value))
            }
            TokenKind::IIz => {
                self.run_function_call()?;
                Ok(Flow::Normal)
            }
            TokenKind::Identifier => match self.peek_kind() {
                Some(TokenKind::R) => {
                    self.run_assignment()?;
                    Ok(Flow::Normal)
                }
                Some(TokenKind::IsNowA) => {
                    self.run_cast()?;
                    Ok(Flow::Normal)
                }
                // `<id> BOTH SAEM <expr>` statement form, so a comparison can
                // feed `O RLY?` without repeating the subject
                Some(op @ (TokenKind::BothSaem | TokenKind::Diffrint)) => {
                    let left = self.eval_expression()?;
                    self.advance();
                    let right = self.eval_expression()?;
                    if self.current_kind() == Some(TokenKind::Mkay) {
                        self.advance();
                    }
                    let same = op == TokenKind::BothSaem;
                    self.set_it(Value::Troof((left == right) == same));
                    Ok(Flow::Normal)
                }
                _ => {
                    let value = self.eval_expression()?;
                    self.set_it(value);
                    Ok(Flow::Normal)
                }
            },
            _ => {
                let value = self.eval_expression()?;
                self.set_it(value);
                Ok(Flow::Normal)
            }
        }
    }

    /// `I HAS A <id> [ITZ <expr>]` - defaults to NOOB.
    fn run_declaration(&mut self) -> InterpretResult<()> {
        self.expect(TokenKind::IHasA)?;
        let name = self.expect(TokenKind::Identifier)?.lexeme.clone();

        let value = if self.current_kind() == Some(TokenKind::Itz) {
            self.advance();
            self.eval_expression()?
        } else {
            Value::Noob
        };

        self.bind(&name, value);
        Ok(())
    }

    /// `<id> R <expr>` - requires a prior declaration, also updates IT.
    fn run_assignment(&mut self) -> InterpretResult<()> {
        let name = self.expect(TokenKind::Identifier)?.lexeme.clone();
        if !self.variables.contains_key(&name) {
            return Err(InterpretError::name(format!(
                "Variable '{name}' not declared"
            )));
        }

        self.expect(TokenKind::R)?;
        let value = self.eval_expression()?;

        self.bind(&name, value.clone());
        self.set_it(value);
        Ok(())
    }

    /// `<id> IS NOW A <type>` - replaces the binding in place.
    fn run_cast(&mut self) -> InterpretResult<()> {
        let name = self.expect(TokenKind::Identifier)?.lexeme.clone();
        self.expect(TokenKind::IsNowA)?;

        let Some(token) = self.current() else {
            return Err(InterpretError::syntax(None, "Expected type name, got end of input"));
        };
        let (target, line) = (token.lexeme.clone(), token.line);
        self.advance();

        let value = self.variables.get(&name).ok_or_else(|| {
            InterpretError::name(format!("Variable '{name}' not declared"))
        })?;
        let cast = value.cast(&target).ok_or_else(|| {
            InterpretError::syntax(Some(line), format!("Unknown type '{target}'"))
        })?;

        self.bind(&name, cast);
        Ok(())
    }

    /// `VISIBLE { [AN] <expr> } [!]` - parts are stringified and concatenated;
    /// a trailing `!` suppresses the newline. Each evaluated part lands in IT.
    fn run_visible(&mut self) -> InterpretResult<()> {
        self.advance();

        let mut output = String::new();
        let mut newline = true;

        loop {
            let Some(token) = self.current() else {
                break;
            };

            if token.kind == TokenKind::Identifier && token.lexeme == "!" {
                newline = false;
                self.advance();
                break;
            }
            if VISIBLE_STOP.contains(&token.kind) {
                break;
            }
            if token.kind == TokenKind::Identifier
                && matches!(
                    self.peek_kind(),
                    Some(TokenKind::R | TokenKind::IsNowA)
                )
            {
                break;
            }
            if token.kind == TokenKind::An {
                self.advance();
                continue;
            }

            let value = self.eval_expression()?;
            output.push_str(&value.to_yarn());
            self.set_it(value);
        }

        if newline {
            output.push('\n');
        }
        self.host.write(&output);
        Ok(())
    }

    /// `GIMMEH <id>` - the reply is stored verbatim as a YARN.
    fn run_gimmeh(&mut self) -> InterpretResult<()> {
        self.advance();
        let name = self.expect(TokenKind::Identifier)?.lexeme.clone();
        if !self.variables.contains_key(&name) {
            return Err(InterpretError::name(format!(
                "Variable '{name}' not declared"
            )));
        }

        let reply = self.host.read(&format!("Enter value for {name}:"));
        self.bind(&name, Value::Yarn(reply));
        Ok(())
    }

    /// `O RLY? YA RLY <stmts> [MEBBE ...] [NO WAI <stmts>] OIC` - branches on
    /// the value of IT at the moment `O RLY?` is seen. MEBBE arms are skipped.
    fn run_branch(&mut self) -> InterpretResult<Flow> {
        self.advance();
        let condition = self.it_value();
        self.expect(TokenKind::YaRly)?;

        if condition.is_truthy() {
            while !matches!(
                self.current_kind(),
                None | Some(TokenKind::NoWai | TokenKind::Mebbe | TokenKind::Oic)
            ) {
                match self.run_statement()? {
                    Flow::Normal => {}
                    other => return self.unwind_branch(other),
                }
            }
            self.skip_block(&[TokenKind::Oic]);
        } else {
            self.skip_block(&[TokenKind::NoWai, TokenKind::Mebbe, TokenKind::Oic]);
            match self.current_kind() {
                Some(TokenKind::NoWai) => {
                    self.advance();
                    while !matches!(self.current_kind(), None | Some(TokenKind::Oic)) {
                        match self.run_statement()? {
                            Flow::Normal => {}
                            other => return self.unwind_branch(other),
                        }
                    }
                }
                Some(TokenKind::Mebbe) => self.skip_block(&[TokenKind::Oic]),
                _ => {}
            }
        }

        self.expect(TokenKind::Oic)?;
        Ok(Flow::Normal)
    }

    /// Consume the rest of the current branch up to and including its `OIC`
    /// before propagating a break/return signal, so enclosing constructs see
    /// a consistent stream.
    fn unwind_branch(&mut self, flow: Flow) -> InterpretResult<Flow> {
        self.skip_block(&[TokenKind::Oic]);
        self.expect(TokenKind::Oic)?;
        Ok(flow)
    }

    /// `WTF? { OMG <literal> <stmts> } [OMGWTF <stmts>] OIC` - tests IT.
    /// Once a case matches, execution falls through every following case body
    /// until a GTFO or the closing OIC; the default only runs when nothing
    /// matched.
    fn run_switch(&mut self) -> InterpretResult<Flow> {
        self.advance();
        let subject = self.it_value();
        let mut matched = false;

        'arms: loop {
            match self.current_kind() {
                Some(TokenKind::Omg) => {
                    self.advance();
                    let case = self.eval_expression()?;
                    if !matched && subject == case {
                        matched = true;
                    }

                    if matched {
                        while !matches!(
                            self.current_kind(),
                            None | Some(TokenKind::Omg | TokenKind::Omgwtf | TokenKind::Oic)
                        ) {
                            match self.run_statement()? {
                                Flow::Normal => {}
                                Flow::Break => {
                                    self.skip_block(&[TokenKind::Oic]);
                                    break 'arms;
                                }
                                Flow::Return(value) => return Ok(Flow::Return(value)),
                            }
                        }
                    } else {
                        self.skip_block(&[
                            TokenKind::Omg,
                            TokenKind::Omgwtf,
                            TokenKind::Oic,
                        ]);
                    }
                }
                Some(TokenKind::Omgwtf) => {
                    self.advance();
                    if matched {
                        self.skip_block(&[TokenKind::Oic]);
                        continue;
                    }

                    while !matches!(self.current_kind(), None | Some(TokenKind::Oic)) {
                        match self.run_statement()? {
                            Flow::Normal => {}
                            Flow::Break => {
                                self.skip_block(&[TokenKind::Oic]);
                                break 'arms;
                            }
                            Flow::Return(value) => return Ok(Flow::Return(value)),
                        }
                    }
                }
                Some(TokenKind::Oic) => break,
                Some(_) => self.advance(),
                None => {
                    return Err(InterpretError::syntax(
                        None,
                        "Expected OIC, got end of input",
                    ));
                }
            }
        }

        self.expect(TokenKind::Oic)?;
        Ok(Flow::Normal)
    }

    /// `IM IN YR <name> [UPPIN|NERFIN YR <var>] [TIL|WILE <cond>] <body>
    /// IM OUTTA YR <name>`. The condition is kept as a token span and
    /// re-evaluated before each iteration with an exact cursor save/restore.
    fn run_loop(&mut self) -> InterpretResult<Flow> {
        let opening_line = self.current().map(|token| token.line);
        self.advance();
        let name = self.expect(TokenKind::Identifier)?.lexeme.clone();

        let mut step = None;
        if let Some(op) = self
            .current_kind()
            .filter(|kind| matches!(kind, TokenKind::Uppin | TokenKind::Nerfin))
        {
            self.advance();
            self.expect(TokenKind::Yr)?;
            let variable = self.expect(TokenKind::Identifier)?.lexeme.clone();
            if !self.variables.contains_key(&variable) {
                return Err(InterpretError::name(format!(
                    "Loop variable '{variable}' not declared"
                )));
            }
            step = Some((op, variable));
        }

        let mut condition = None;
        if let Some(kind) = self
            .current_kind()
            .filter(|kind| matches!(kind, TokenKind::Til | TokenKind::Wile))
        {
            self.advance();
            let start = self.position;
            self.skip_expression()?;
            condition = Some((kind, start));
        }

        let body_start = self.position;
        let body_end = self.find_matching(body_start, TokenKind::ImInYr, TokenKind::ImOuttaYr)
            .ok_or_else(|| {
                InterpretError::syntax(
                    opening_line,
                    format!("Loop '{name}' is missing IM OUTTA YR"),
                )
            })?;

        loop {
            if let Some((kind, start)) = condition {
                let saved = self.position;
                self.position = start;
                let value = self.eval_expression()?;
                self.position = saved;

                let done = match kind {
                    TokenKind::Til => value.is_truthy(),
                    _ => !value.is_truthy(),
                };
                if done {
                    break;
                }
            }

            self.position = body_start;
            let mut interrupted = false;
            while self.position < body_end {
                match self.run_statement()? {
                    Flow::Normal => {}
                    Flow::Break => {
                        interrupted = true;
                        break;
                    }
                    Flow::Return(value) => return Ok(Flow::Return(value)),
                }
            }
            if interrupted {
                break;
            }

            if let Some((op, variable)) = &step {
                let current = self.variables.get(variable).cloned().unwrap_or(Value::Noob);
                let stepped = match op {
                    TokenKind::Uppin => current.to_number().add(Number::Int(1)),
                    _ => current.to_number().sub(Number::Int(1)),
                };
                self.bind(variable, stepped.to_value());
            }
        }

        self.position = body_end;
        self.expect(TokenKind::ImOuttaYr)?;
        let closing = self.expect(TokenKind::Identifier)?;
        if closing.lexeme != name {
            return Err(InterpretError::syntax(
                Some(closing.line),
                format!(
                    "Loop name mismatch: expected '{name}', got '{}'",
                    closing.lexeme
                ),
            ));
        }

        Ok(Flow::Normal)
    }

    /// `HOW IZ I <name> { YR <param> [AN] } <body> IF U SAY SO` - records the
    /// parameter list and the body span, then jumps past the definition.
    /// Definitions become callable only once execution has passed them.
    fn run_function_definition(&mut self) -> InterpretResult<()> {
        let opening_line = self.current().map(|token| token.line);
        self.advance();
        let name = self.expect(TokenKind::Identifier)?.lexeme.clone();

        let mut params = vec![];
        while self.current_kind() == Some(TokenKind::Yr) {
            self.advance();
            params.push(self.expect(TokenKind::Identifier)?.lexeme.clone());
            if self.current_kind() == Some(TokenKind::An) {
                self.advance();
            }
        }

        let body_start = self.position;
        let body_end = self
            .find_matching(body_start, TokenKind::HowIzI, TokenKind::IfUSaySo)
            .ok_or_else(|| {
                InterpretError::syntax(
                    opening_line,
                    format!("Function '{name}' is missing IF U SAY SO"),
                )
            })?;

        debug!(
            "registered function '{name}' ({} parameters, tokens {body_start}..{body_end})",
            params.len()
        );
        self.functions.insert(
            name,
            Function {
                params,
                body_start,
                body_end,
            },
        );

        self.position = body_end;
        self.expect(TokenKind::IfUSaySo)?;
        Ok(())
    }

    /// `I IZ <name> [YR <expr> { AN YR <expr> }] [MKAY]` - arguments are
    /// evaluated in the caller's scope, the body runs in a fresh environment
    /// holding only the parameters plus IT. The caller's IT receives the
    /// returned value.
    fn run_function_call(&mut self) -> InterpretResult<Value> {
        self.advance();
        let name = self.expect(TokenKind::Identifier)?.lexeme.clone();

        let function = self
            .functions
            .get(&name)
            .cloned()
            .ok_or_else(|| InterpretError::name(format!("Function '{name}' not defined")))?;

        let mut args = vec![];
        while self.current_kind() == Some(TokenKind::Yr) {
            self.advance();
            args.push(self.eval_expression()?);
            if self.current_kind() == Some(TokenKind::An) {
                self.advance();
            }
        }
        if self.current_kind() == Some(TokenKind::Mkay) {
            self.advance();
        }

        if args.len() != function.params.len() {
            return Err(InterpretError::value(format!(
                "Function '{name}' expects {} arguments, got {}",
                function.params.len(),
                args.len()
            )));
        }

        trace!("calling '{name}' with {} arguments", args.len());

        let saved_position = self.position;
        let mut local = HashMap::new();
        for (param, arg) in function.params.iter().zip(args) {
            local.insert(param.clone(), arg);
        }
        local.insert("IT".to_string(), Value::Noob);
        let saved_variables = std::mem::replace(&mut self.variables, local);

        self.position = function.body_start;
        let mut result = Value::Noob;
        while self.position < function.body_end {
            match self.run_statement() {
                Ok(Flow::Normal) => {}
                // a bare GTFO outside any loop or switch returns NOOB
                Ok(Flow::Break) => break,
                Ok(Flow::Return(value)) => {
                    result = value;
                    break;
                }
                Err(error) => {
                    self.position = saved_position;
                    self.variables = saved_variables;
                    return Err(error);
                }
            }
        }

        self.position = saved_position;
        self.variables = saved_variables;
        self.set_it(result.clone());
        Ok(result)
    }

    // expressions

    fn eval_expression(&mut self) -> InterpretResult<Value> {
        let (kind, lexeme, line) = {
            let Some(token) = self.current() else {
                return Err(InterpretError::syntax(None, "Unexpected end of input"));
            };
            (token.kind, token.lexeme.clone(), token.line)
        };

        match kind {
            TokenKind::Numbr => {
                self.advance();
                let value = lexeme.parse::<i64>().map_err(|_| {
                    InterpretError::syntax(
                        Some(line),
                        format!("Invalid NUMBR literal '{lexeme}'"),
                    )
                })?;
                Ok(Value::Numbr(value))
            }
            TokenKind::Numbar => {
                self.advance();
                let value = lexeme.parse::<f64>().map_err(|_| {
                    InterpretError::syntax(
                        Some(line),
                        format!("Invalid NUMBAR literal '{lexeme}'"),
                    )
                })?;
                Ok(Value::Numbar(value))
            }
            TokenKind::Yarn => {
                self.advance();
                Ok(Value::Yarn(lexeme[1..lexeme.len() - 1].to_string()))
            }
            TokenKind::Troof => {
                self.advance();
                Ok(Value::Troof(lexeme == "WIN"))
            }
            TokenKind::Noob => {
                self.advance();
                Ok(Value::Noob)
            }
            TokenKind::Identifier => {
                self.advance();
                self.variables.get(&lexeme).cloned().ok_or_else(|| {
                    InterpretError::name(format!("Variable '{lexeme}' not declared"))
                })
            }
            TokenKind::SumOf
            | TokenKind::DiffOf
            | TokenKind::ProduktOf
            | TokenKind::QuoshuntOf
            | TokenKind::ModOf
            | TokenKind::BiggrOf
            | TokenKind::SmallrOf => self.eval_numeric_op(kind),
            TokenKind::BothOf
            | TokenKind::EitherOf
            | TokenKind::AnyOf
            | TokenKind::AllOf
            | TokenKind::WonOf => self.eval_boolean_op(kind),
            TokenKind::Not => {
                self.advance();
                let value = self.eval_expression()?;
                Ok(Value::Troof(!value.is_truthy()))
            }
            TokenKind::BothSaem => self.eval_comparison(true),
            TokenKind::Diffrint => self.eval_comparison(false),
            TokenKind::Smoosh => self.eval_smoosh(),
            TokenKind::Maek => self.eval_maek(),
            TokenKind::IIz => self.run_function_call(),
            _ => Err(InterpretError::syntax(
                Some(line),
                format!("Unexpected token {kind}"),
            )),
        }
    }

    /// N-ary prefix arithmetic: a left fold over numeric coercions of the
    /// `AN`-separated operands, with an optional trailing MKAY.
    fn eval_numeric_op(&mut self, op: TokenKind) -> InterpretResult<Value> {
        self.advance();
        let mut acc = self.eval_expression()?.to_number();

        while self.current_kind() == Some(TokenKind::An) {
            self.advance();
            let operand = self.eval_expression()?.to_number();
            acc = match op {
                TokenKind::SumOf => acc.add(operand),
                TokenKind::DiffOf => acc.sub(operand),
                TokenKind::ProduktOf => acc.mul(operand),
                TokenKind::QuoshuntOf => acc.div(operand),
                TokenKind::ModOf => acc.rem(operand),
                TokenKind::BiggrOf => acc.max(operand),
                _ => acc.min(operand),
            };
        }
        if self.current_kind() == Some(TokenKind::Mkay) {
            self.advance();
        }

        Ok(acc.to_value())
    }

    /// N-ary truthiness fold: AND for BOTH OF / ALL OF, OR for EITHER OF /
    /// ANY OF, odd-parity XOR for WON OF.
    fn eval_boolean_op(&mut self, op: TokenKind) -> InterpretResult<Value> {
        self.advance();
        let mut truths = vec![self.eval_expression()?.is_truthy()];

        while self.current_kind() == Some(TokenKind::An) {
            self.advance();
            truths.push(self.eval_expression()?.is_truthy());
        }
        if self.current_kind() == Some(TokenKind::Mkay) {
            self.advance();
        }

        let result = match op {
            TokenKind::BothOf | TokenKind::AllOf => truths.iter().all(|truth| *truth),
            TokenKind::EitherOf | TokenKind::AnyOf => truths.iter().any(|truth| *truth),
            _ => truths.iter().filter(|truth| **truth).count() % 2 == 1,
        };
        Ok(Value::Troof(result))
    }

    /// `BOTH SAEM` / `DIFFRINT`: strictly binary, strict equality (identical
    /// tag and content, no coercion across tags).
    fn eval_comparison(&mut self, same: bool) -> InterpretResult<Value> {
        self.advance();
        let left = self.eval_expression()?;
        self.expect(TokenKind::An)?;
        let right = self.eval_expression()?;
        if self.current_kind() == Some(TokenKind::Mkay) {
            self.advance();
        }

        Ok(Value::Troof((left == right) == same))
    }

    fn eval_smoosh(&mut self) -> InterpretResult<Value> {
        self.advance();
        let mut result = self.eval_expression()?.to_yarn();

        while self.current_kind() == Some(TokenKind::An) {
            self.advance();
            result.push_str(&self.eval_expression()?.to_yarn());
        }
        if self.current_kind() == Some(TokenKind::Mkay) {
            self.advance();
        }

        Ok(Value::Yarn(result))
    }

    /// `MAEK <expr> [A] <type>` - cast expression.
    fn eval_maek(&mut self) -> InterpretResult<Value> {
        self.advance();
        let value = self.eval_expression()?;

        if self.current_kind() == Some(TokenKind::A) {
            self.advance();
        }
        let Some(token) = self.current() else {
            return Err(InterpretError::syntax(None, "Expected type name, got end of input"));
        };
        let (target, line) = (token.lexeme.clone(), token.line);
        self.advance();

        value.cast(&target).ok_or_else(|| {
            InterpretError::syntax(Some(line), format!("Unknown type '{target}'"))
        })
    }

    // span scanning

    /// Step over one expression without evaluating it, so a loop condition can
    /// be located and revisited later.
    fn skip_expression(&mut self) -> InterpretResult<()> {
        let Some(kind) = self.current_kind() else {
            return Err(InterpretError::syntax(None, "Unexpected end of input"));
        };

        match kind {
            TokenKind::Numbr
            | TokenKind::Numbar
            | TokenKind::Yarn
            | TokenKind::Troof
            | TokenKind::Noob
            | TokenKind::Identifier => self.advance(),
            TokenKind::SumOf
            | TokenKind::DiffOf
            | TokenKind::ProduktOf
            | TokenKind::QuoshuntOf
            | TokenKind::ModOf
            | TokenKind::BiggrOf
            | TokenKind::SmallrOf
            | TokenKind::BothOf
            | TokenKind::EitherOf
            | TokenKind::AnyOf
            | TokenKind::AllOf
            | TokenKind::WonOf
            | TokenKind::BothSaem
            | TokenKind::Diffrint
            | TokenKind::Smoosh => {
                self.advance();
                self.skip_expression()?;
                while self.current_kind() == Some(TokenKind::An) {
                    self.advance();
                    self.skip_expression()?;
                }
                if self.current_kind() == Some(TokenKind::Mkay) {
                    self.advance();
                }
            }
            TokenKind::Not => {
                self.advance();
                self.skip_expression()?;
            }
            TokenKind::Maek => {
                self.advance();
                self.skip_expression()?;
                if self.current_kind() == Some(TokenKind::A) {
                    self.advance();
                }
                self.advance();
            }
            TokenKind::IIz => {
                self.advance();
                self.advance();
                while self.current_kind() == Some(TokenKind::Yr) {
                    self.advance();
                    self.skip_expression()?;
                    if self.current_kind() == Some(TokenKind::An) {
                        self.advance();
                    }
                }
                if self.current_kind() == Some(TokenKind::Mkay) {
                    self.advance();
                }
            }
            _ => self.advance(),
        }

        Ok(())
    }

    /// Skip forward to the next token in `stop`, stepping over nested
    /// `O RLY?`/`WTF?` ... `OIC` regions so inner delimiters stay invisible.
    fn skip_block(&mut self, stop: &[TokenKind]) {
        let mut depth = 0usize;
        while let Some(kind) = self.current_kind() {
            if depth == 0 && stop.contains(&kind) {
                return;
            }
            match kind {
                TokenKind::ORly | TokenKind::Wtf => depth += 1,
                TokenKind::Oic => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.advance();
        }
    }

    /// Find the closer matching the construct opened just before `from`,
    /// counting only opener/closer pairs of the same construct.
    fn find_matching(
        &self,
        from: usize,
        opener: TokenKind,
        closer: TokenKind,
    ) -> Option<usize> {
        let mut depth = 1usize;
        let mut index = from;

        while index < self.tokens.len() {
            let kind = self.tokens[index].kind;
            if kind == opener {
                depth += 1;
            } else if kind == closer {
                depth -= 1;
                if depth == 0 {
                    return Some(index);
                }
            }
            index += 1;
        }

        None
    }
}
