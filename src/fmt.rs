//! Reconstructs Corgi source text from an AST. Re-parsing the output
//! yields a structurally identical tree, so operands are parenthesized
//! wherever the bare text would re-parse with a different shape (the
//! binary operators are right-associative).

use crate::ast::{BinOp, BuiltinCall, Expr, FuncCall, FuncDef, Program, Stmt};

pub fn format_program(program: &Program) -> String {
    let mut formatter = Formatter::new();
    formatter.write_line(&format_call(&program.entry));
    for def in &program.defs {
        formatter.blank_line();
        formatter.format_def(def);
    }
    formatter.finish()
}

struct Formatter {
    out: String,
    indent: usize,
}

impl Formatter {
    fn new() -> Self {
        Self {
            out: String::new(),
            indent: 0,
        }
    }

    fn finish(self) -> String {
        self.out
    }

    fn blank_line(&mut self) {
        self.out.push('\n');
    }

    fn write_line(&mut self, line: &str) {
        for _ in 0..self.indent {
            self.out.push_str("    ");
        }
        self.out.push_str(line);
        self.out.push('\n');
    }

    fn format_def(&mut self, def: &FuncDef) {
        self.write_line(&format!("def {}({})", def.name, def.params.join(", ")));
        if let Some(body) = &def.body {
            self.indent += 1;
            for stmt in body {
                self.format_stmt(stmt);
            }
            self.indent -= 1;
        }
        self.write_line("end");
    }

    fn format_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::PrintStr(text) => {
                self.write_line(&format!("\"{}\"", escape(text)));
            }
            Stmt::Newline => self.write_line("nl()"),
            Stmt::Print(value) => {
                self.write_line(&format!("print({})", format_expr(value)));
            }
            Stmt::Return(value) => {
                self.write_line(&format!("return {}", format_expr(value)));
            }
            Stmt::Assign { name, value } => {
                self.write_line(&format!("{} = {}", name, format_expr(value)));
            }
            Stmt::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.write_line(&format!("if {}", format_expr(cond)));
                if let Some(then_branch) = then_branch {
                    self.indent += 1;
                    for stmt in then_branch {
                        self.format_stmt(stmt);
                    }
                    self.indent -= 1;
                }
                // `if c else end` is how a then-less conditional is
                // spelled; only the fully branch-less form keeps `else`.
                match else_branch {
                    Some(else_branch) => {
                        self.write_line("else");
                        self.indent += 1;
                        for stmt in else_branch {
                            self.format_stmt(stmt);
                        }
                        self.indent -= 1;
                    }
                    None if then_branch.is_none() => self.write_line("else"),
                    None => {}
                }
                self.write_line("end");
            }
            Stmt::Call(call) => self.write_line(&format_call(call)),
            Stmt::Builtin(call) => self.write_line(&format_builtin(call)),
        }
    }
}

pub fn format_expr(expr: &Expr) -> String {
    match expr {
        Expr::Binary {
            op: op @ (BinOp::Add | BinOp::Sub),
            left,
            right,
        } => format!("{} {} {}", format_term(left), op.symbol(), format_expr(right)),
        _ => format_term(expr),
    }
}

/// Prints `expr` in a term slot; additive nodes need parentheses there.
fn format_term(expr: &Expr) -> String {
    match expr {
        Expr::Binary {
            op: op @ (BinOp::Mul | BinOp::Div),
            left,
            right,
        } => format!(
            "{} {} {}",
            format_factor(left),
            op.symbol(),
            format_term(right)
        ),
        _ => format_factor(expr),
    }
}

/// Prints `expr` in a factor slot; any binary node gets parenthesized
/// so the grouping survives re-parsing.
fn format_factor(expr: &Expr) -> String {
    match expr {
        Expr::Num(text) => text.clone(),
        Expr::Var(name) => name.clone(),
        Expr::Neg(operand) => format!("-{}", format_factor(operand)),
        Expr::Binary { .. } => format!("({})", format_expr(expr)),
        Expr::Call(call) => format_call(call),
        Expr::Builtin(call) => format_builtin(call),
    }
}

fn format_call(call: &FuncCall) -> String {
    format!("{}({})", call.name, format_arg_list(&call.args))
}

fn format_builtin(call: &BuiltinCall) -> String {
    format!("{}({})", call.name, format_arg_list(&call.args))
}

fn format_arg_list(args: &[Expr]) -> String {
    args.iter()
        .map(format_expr)
        .collect::<Vec<_>>()
        .join(", ")
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}
