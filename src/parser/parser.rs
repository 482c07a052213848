use tracing::trace;

use crate::ast::{BinOp, BuiltinCall, Expr, FuncCall, FuncDef, Program, Stmt};
use crate::parser::error::{ParseError, ParseErrorKind};
use crate::stream::{TokenSource, TokenStream};
use crate::token::{Token, TokenKind};

/// Recursive-descent parser for Corgi: one procedure per non-terminal,
/// predictive with a single token of lookahead. Each procedure consumes
/// exactly one instance of its non-terminal and leaves the stream
/// positioned just past it, or fails with the first grammar violation.
pub struct Parser<S: TokenSource> {
    source: S,
}

impl Parser<TokenStream> {
    pub fn from_tokens(tokens: Vec<Token>) -> Result<Program, ParseError> {
        Parser::new(TokenStream::new(tokens)).parse_program()
    }
}

impl<S: TokenSource> Parser<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// <program> -> <funcCall> <funcDefs>?
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        trace!("parsing <program>");
        let entry = self.parse_func_call()?;

        let token = self.source.next();
        if token.is_eof() {
            return Ok(Program {
                entry,
                defs: Vec::new(),
            });
        }
        self.source.push_back(token);
        let defs = self.parse_func_defs()?;
        Ok(Program { entry, defs })
    }

    /// <funcDefs> -> <funcDef>+, running to end of input.
    fn parse_func_defs(&mut self) -> Result<Vec<FuncDef>, ParseError> {
        trace!("parsing <funcDefs>");
        let mut defs = Vec::new();
        loop {
            defs.push(self.parse_func_def()?);
            let token = self.source.next();
            if token.is_eof() {
                return Ok(defs);
            }
            self.source.push_back(token);
        }
    }

    /// <funcDef> -> `def` name `(` <params>? `)` <statements>? `end`
    fn parse_func_def(&mut self) -> Result<FuncDef, ParseError> {
        trace!("parsing <funcDef>");
        self.expect_keyword("def")?;
        let name = self.expect_ident()?;
        self.expect_single('(')?;

        let token = self.source.next();
        let params = if token.is_single(')') {
            Vec::new()
        } else {
            self.source.push_back(token);
            let params = self.parse_params()?;
            self.expect_single(')')?;
            params
        };

        let token = self.source.next();
        let body = if token.is_keyword("end") {
            None
        } else {
            self.source.push_back(token);
            let stmts = self.parse_statements()?;
            self.expect_keyword("end")?;
            Some(stmts)
        };

        Ok(FuncDef { name, params, body })
    }

    /// <params> -> name (`,` name)*
    ///
    /// Stops as soon as the token after a name is not a comma; the
    /// closing `)` belongs to the caller.
    fn parse_params(&mut self) -> Result<Vec<String>, ParseError> {
        trace!("parsing <params>");
        let mut names = Vec::new();
        loop {
            names.push(self.expect_ident()?);
            let token = self.source.next();
            if !token.is_single(',') {
                self.source.push_back(token);
                return Ok(names);
            }
        }
    }

    /// <statements> -> <statement>+, terminated by end of input or by an
    /// `else`/`end` that closes the enclosing construct (pushed back for
    /// the caller to consume).
    fn parse_statements(&mut self) -> Result<Vec<Stmt>, ParseError> {
        trace!("parsing <statements>");
        let mut stmts = Vec::new();
        loop {
            stmts.push(self.parse_statement()?);
            let token = self.source.next();
            let done = token.is_eof() || token.is_keyword("else") || token.is_keyword("end");
            self.source.push_back(token);
            if done {
                return Ok(stmts);
            }
        }
    }

    /// <statement> — dispatch on the first token.
    pub fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        let token = self.source.next();
        trace!(token = %token.kind, "parsing <statement>");
        match token.kind {
            TokenKind::Str(text) => Ok(Stmt::PrintStr(text)),

            TokenKind::Bif0(name) if name == "nl" => {
                self.expect_single('(')?;
                self.expect_single(')')?;
                Ok(Stmt::Newline)
            }

            TokenKind::Bif1(name) if name == "print" => {
                self.expect_single('(')?;
                let value = self.parse_expr()?;
                self.expect_single(')')?;
                Ok(Stmt::Print(value))
            }

            // Other built-ins used in statement position take the same
            // argument shape as in expressions.
            TokenKind::Bif0(name) => Ok(Stmt::Builtin(self.parse_builtin_call(name, 0)?)),
            TokenKind::Bif1(name) => Ok(Stmt::Builtin(self.parse_builtin_call(name, 1)?)),
            TokenKind::Bif2(name) => Ok(Stmt::Builtin(self.parse_builtin_call(name, 2)?)),

            TokenKind::Var(name) if name == "return" => {
                let value = self.parse_expr()?;
                Ok(Stmt::Return(value))
            }

            TokenKind::Var(name) if name == "if" => self.parse_if(),

            // A plain identifier starts either an assignment or a call;
            // the token after it decides which.
            TokenKind::Var(name) => {
                let next = self.source.next();
                if next.is_single('=') {
                    let value = self.parse_expr()?;
                    Ok(Stmt::Assign { name, value })
                } else if next.is_single('(') {
                    self.source.push_back(next);
                    Ok(Stmt::Call(self.parse_call_tail(name)?))
                } else {
                    let found = next.kind.to_string();
                    Err(ParseError::new(
                        ParseErrorKind::ExpectedToken("`=` or `(`"),
                        next.span,
                        format!("Expected `=` or `(` after `{}`, found {}", name, found),
                    ))
                }
            }

            kind => {
                let found = kind.to_string();
                Err(ParseError::new(
                    ParseErrorKind::UnexpectedToken(kind),
                    token.span,
                    format!("{} cannot begin a statement", found),
                ))
            }
        }
    }

    /// `if` <expr> <statements>? (`else` <statements>?)? `end`
    ///
    /// Absent branches stay `None` so a consumer can tell "no else" from
    /// a malformed node.
    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        trace!("parsing <if>");
        let cond = self.parse_expr()?;

        let token = self.source.next();
        if token.is_keyword("else") {
            // No then-branch at all.
            let peek = self.source.next();
            if peek.is_keyword("end") {
                return Ok(Stmt::If {
                    cond,
                    then_branch: None,
                    else_branch: None,
                });
            }
            self.source.push_back(peek);
            let else_branch = self.parse_statements()?;
            self.expect_keyword("end")?;
            return Ok(Stmt::If {
                cond,
                then_branch: None,
                else_branch: Some(else_branch),
            });
        }

        self.source.push_back(token);
        let then_branch = self.parse_statements()?;

        let token = self.source.next();
        if token.is_keyword("end") {
            return Ok(Stmt::If {
                cond,
                then_branch: Some(then_branch),
                else_branch: None,
            });
        }
        if token.is_keyword("else") {
            let peek = self.source.next();
            if peek.is_keyword("end") {
                // `else end` — the else-branch is absent, not empty.
                return Ok(Stmt::If {
                    cond,
                    then_branch: Some(then_branch),
                    else_branch: None,
                });
            }
            self.source.push_back(peek);
            let else_branch = self.parse_statements()?;
            self.expect_keyword("end")?;
            return Ok(Stmt::If {
                cond,
                then_branch: Some(then_branch),
                else_branch: Some(else_branch),
            });
        }

        let found = token.kind.to_string();
        Err(ParseError::new(
            ParseErrorKind::ExpectedToken("`else` or `end`"),
            token.span,
            format!("Expected `else` or `end` in `if`, found {}", found),
        ))
    }

    /// <expr> -> <term> ((`+`|`-`) <expr>)?
    ///
    /// The tail recurses on the full expression, so both levels of the
    /// grammar are right-associative: `a - b - c` is `a - (b - c)`.
    pub fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        trace!("parsing <expr>");
        let first = self.parse_term()?;

        let token = self.source.next();
        let op = match token.kind {
            TokenKind::Single('+') => BinOp::Add,
            TokenKind::Single('-') => BinOp::Sub,
            _ => {
                self.source.push_back(token);
                return Ok(first);
            }
        };
        let rest = self.parse_expr()?;
        Ok(Expr::Binary {
            op,
            left: Box::new(first),
            right: Box::new(rest),
        })
    }

    /// <term> -> <factor> ((`*`|`/`) <term>)?
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        trace!("parsing <term>");
        let first = self.parse_factor()?;

        let token = self.source.next();
        let op = match token.kind {
            TokenKind::Single('*') => BinOp::Mul,
            TokenKind::Single('/') => BinOp::Div,
            _ => {
                self.source.push_back(token);
                return Ok(first);
            }
        };
        let rest = self.parse_term()?;
        Ok(Expr::Binary {
            op,
            left: Box::new(first),
            right: Box::new(rest),
        })
    }

    /// <factor> — literals, variables, nested calls, built-ins,
    /// parenthesized expressions, unary negation.
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        let token = self.source.next();
        trace!(token = %token.kind, "parsing <factor>");
        match token.kind {
            TokenKind::Num(text) => Ok(Expr::Num(text)),

            TokenKind::Var(name) => {
                // An identifier followed by `(` starts a nested call.
                let next = self.source.next();
                if next.is_single('(') {
                    self.source.push_back(next);
                    Ok(Expr::Call(self.parse_call_tail(name)?))
                } else {
                    self.source.push_back(next);
                    Ok(Expr::Var(name))
                }
            }

            TokenKind::Single('(') => {
                // Parentheses group; they leave no node of their own.
                let inner = self.parse_expr()?;
                self.expect_single(')')?;
                Ok(inner)
            }

            TokenKind::Single('-') => {
                let operand = self.parse_factor()?;
                Ok(Expr::Neg(Box::new(operand)))
            }

            TokenKind::Bif0(name) => Ok(Expr::Builtin(self.parse_builtin_call(name, 0)?)),
            TokenKind::Bif1(name) => Ok(Expr::Builtin(self.parse_builtin_call(name, 1)?)),
            TokenKind::Bif2(name) => Ok(Expr::Builtin(self.parse_builtin_call(name, 2)?)),

            kind => {
                let found = kind.to_string();
                Err(ParseError::new(
                    ParseErrorKind::UnexpectedToken(kind),
                    token.span,
                    format!("{} cannot start a factor", found),
                ))
            }
        }
    }

    /// <funcCall> -> name `(` <args>? `)`
    fn parse_func_call(&mut self) -> Result<FuncCall, ParseError> {
        let name = self.expect_ident()?;
        self.parse_call_tail(name)
    }

    /// The `(` <args>? `)` part of a call, once the name is in hand.
    /// Entered from contexts that already consumed the name as lookahead,
    /// which keeps the pushback depth at one.
    fn parse_call_tail(&mut self, name: String) -> Result<FuncCall, ParseError> {
        trace!(function = %name, "parsing <funcCall>");
        self.expect_single('(')?;

        let token = self.source.next();
        if token.is_single(')') {
            return Ok(FuncCall {
                name,
                args: Vec::new(),
            });
        }
        self.source.push_back(token);
        let args = self.parse_args()?;
        self.expect_single(')')?;
        Ok(FuncCall { name, args })
    }

    /// <args> -> <expr> (`,` <expr>)*
    fn parse_args(&mut self) -> Result<Vec<Expr>, ParseError> {
        trace!("parsing <args>");
        let mut args = Vec::new();
        loop {
            args.push(self.parse_expr()?);
            let token = self.source.next();
            if !token.is_single(',') {
                self.source.push_back(token);
                return Ok(args);
            }
        }
    }

    /// Built-in invocation; the arity is fixed by the name's token kind.
    fn parse_builtin_call(&mut self, name: String, arity: usize) -> Result<BuiltinCall, ParseError> {
        trace!(builtin = %name, arity, "parsing built-in call");
        self.expect_single('(')?;
        let mut args = Vec::new();
        if arity >= 1 {
            args.push(self.parse_expr()?);
        }
        if arity == 2 {
            self.expect_single(',')?;
            args.push(self.parse_expr()?);
        }
        self.expect_single(')')?;
        Ok(BuiltinCall { name, args })
    }

    fn expect_ident(&mut self) -> Result<String, ParseError> {
        let token = self.source.next();
        match token.kind {
            TokenKind::Var(name) => Ok(name),
            kind => {
                let found = kind.to_string();
                Err(ParseError::new(
                    self.expectation_kind(&kind, "identifier"),
                    token.span,
                    format!("Expected identifier, found {}", found),
                ))
            }
        }
    }

    fn expect_single(&mut self, ch: char) -> Result<(), ParseError> {
        let token = self.source.next();
        if token.is_single(ch) {
            return Ok(());
        }
        let found = token.kind.to_string();
        Err(ParseError::new(
            self.expectation_kind(&token.kind, single_name(ch)),
            token.span,
            format!("Expected `{}`, found {}", ch, found),
        ))
    }

    fn expect_keyword(&mut self, word: &'static str) -> Result<(), ParseError> {
        let token = self.source.next();
        if token.is_keyword(word) {
            return Ok(());
        }
        let found = token.kind.to_string();
        Err(ParseError::new(
            self.expectation_kind(&token.kind, word),
            token.span,
            format!("Expected `{}`, found {}", word, found),
        ))
    }

    fn expectation_kind(&self, found: &TokenKind, expected: &'static str) -> ParseErrorKind {
        if matches!(found, TokenKind::Eof) {
            ParseErrorKind::UnexpectedEof
        } else {
            ParseErrorKind::ExpectedToken(expected)
        }
    }
}

fn single_name(ch: char) -> &'static str {
    match ch {
        '(' => "(",
        ')' => ")",
        ',' => ",",
        '=' => "=",
        '+' => "+",
        '-' => "-",
        '*' => "*",
        '/' => "/",
        _ => "punctuation",
    }
}
