use serde::Serialize;

/// A Corgi program: one entry function call, then the function
/// definitions. A call-only program has an empty `defs`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    pub entry: FuncCall,
    pub defs: Vec<FuncDef>,
}

/// `def name(params) body end`. `body` is `None` when the definition
/// closes immediately with `end`; statement lists are never empty, so
/// the two cases stay distinguishable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuncDef {
    pub name: String,
    pub params: Vec<String>,
    pub body: Option<Vec<Stmt>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuncCall {
    pub name: String,
    pub args: Vec<Expr>,
}

/// A built-in invocation; arity (0, 1, or 2) is fixed by the name at
/// lex time and enforced by the parser.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuiltinCall {
    pub name: String,
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Stmt {
    /// A bare string literal, printed verbatim.
    PrintStr(String),
    /// `nl()`
    Newline,
    /// `print(expr)`
    Print(Expr),
    Return(Expr),
    Assign {
        name: String,
        value: Expr,
    },
    /// `None` branches were absent in the source; a present branch is a
    /// non-empty statement list.
    If {
        cond: Expr,
        then_branch: Option<Vec<Stmt>>,
        else_branch: Option<Vec<Stmt>>,
    },
    Call(FuncCall),
    Builtin(BuiltinCall),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    /// Numeric literal, text preserved as written.
    Num(String),
    Var(String),
    /// Unary negation.
    Neg(Box<Expr>),
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Call(FuncCall),
    Builtin(BuiltinCall),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
        }
    }
}
