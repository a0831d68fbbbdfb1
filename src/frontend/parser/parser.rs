//! Nom parsers used to generate the Clear AST.

pub mod error;
mod nomutil;
mod types;

use nom::character::complete::{none_of, one_of, char, digit1};
use nom::bytes::complete::{tag, escaped};
use nom::combinator::{recognize, opt, all_consuming, map, map_opt};
use nom::multi::many0;
use nom::branch::alt;
use nom::sequence::{tuple, pair, delimited, preceded, terminated};
use tracing::debug;
use crate::Line;
use crate::frontend::ast::*;
use types::{Input, Output, Failure, Position, LineIndex};
use error::{ParseResult, ParseErrorKind};
use nomutil::*;

/// Expression tree as produced by the grammar. Lowered into a [Program] arena once the whole input parsed.
#[derive(Debug)]
enum Parsed {
    Literal(LiteralValue, Position),
    Unary(UnaryOperator, Box<Parsed>, Position),
    Binary(BinaryOperator, Box<Parsed>, Box<Parsed>, Position),
}

impl Parsed {
    /// A childless node, used in place of children that were moved out.
    fn empty() -> Box<Parsed> {
        Box::new(Parsed::Literal(LiteralValue::Numeric(0.0), Position(0)))
    }
    /// Moves the node's children onto the given stack, right child first.
    fn take_children(self: &mut Self, pending: &mut Vec<Box<Parsed>>) {
        match self {
            Parsed::Literal(..) => { },
            Parsed::Unary(_, operand, _) => pending.push(std::mem::replace(operand, Parsed::empty())),
            Parsed::Binary(_, left, right, _) => {
                pending.push(std::mem::replace(right, Parsed::empty()));
                pending.push(std::mem::replace(left, Parsed::empty()));
            },
        }
    }
}

impl Drop for Parsed {
    // operator chains have no depth limit, children are released iteratively
    fn drop(self: &mut Self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.take_children(&mut pending);
        }
    }
}

/// Pending work while lowering a parsed tree.
enum Lower {
    Visit(Box<Parsed>),
    Unary(UnaryOperator, Line),
    Binary(BinaryOperator, Line),
}

// literal numerical (3, 1.5, 2e10, 6.02E+23)

fn numerical(i: Input<'_>) -> Output<Parsed> {
    let position = i.position();

    let (remaining, numerical) = recognize(tuple((
        digit1,
        opt(pair(char('.'), digit1)),
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    )))(i.clone())?;

    // a numeral running into identifier characters or a dangling fraction is not a valid literal
    let invalid_tail = remaining.chars().next().map_or(false, |c| c.is_alphanumeric() || c == '_' || c == '.');

    match str::parse::<f64>(*numerical) {
        Ok(value) if !invalid_tail => Ok((remaining, Parsed::Literal(LiteralValue::Numeric(value), position))),
        _ => Err(nom::Err::Failure(Failure { input: i, kind: ParseErrorKind::InvalidNumerical })),
    }
}

// literal boolean (true, false)

fn boolean(i: Input<'_>) -> Output<Parsed> {
    let position = i.position();
    map(alt((tag("true"), tag("false"))), move |m: Input<'_>| {
        Parsed::Literal(LiteralValue::Bool(*m == "true"), position)
    })(i)
}

// literal string ("hello world")

fn string(i: Input<'_>) -> Output<Parsed> {
    let position = i.position();
    map(
        delimited(char('"'), opt(escaped(none_of("\\\""), '\\', one_of("\"n\\"))), char('"')),
        move |m: Option<Input<'_>>| {
            Parsed::Literal(LiteralValue::String(m.map_or(String::new(), |s| s.data.to_string())), position)
        }
    )(i)
}

// expression

fn parens(i: Input<'_>) -> Output<Parsed> {
    delimited(ws(char('(')), nested(term), ws(char(')')))(i)
}

fn primary(i: Input<'_>) -> Output<Parsed> {
    ws(alt((
        numerical,
        string,
        boolean,
        parens,
    )))(i)
}

fn unary(i: Input<'_>) -> Output<Parsed> {
    alt((
        map(
            pair(positioned(map_opt(alt((tag("-"), tag("!"))), |o: Input<'_>| UnaryOperator::from_string(*o))), nested(unary)),
            |((op, position), operand)| Parsed::Unary(op, Box::new(operand), position)
        ),
        primary,
    ))(i)
}

fn factor(i: Input<'_>) -> Output<Parsed> {
    let (i, init) = unary(i)?;
    fold_many0_mut(
        pair(positioned(map_opt(alt((tag("*"), tag("/"))), |o: Input<'_>| BinaryOperator::from_string(*o))), unary),
        init,
        |acc, ((op, position), right)| Parsed::Binary(op, Box::new(acc), Box::new(right), position)
    )(i)
}

fn term(i: Input<'_>) -> Output<Parsed> {
    let (i, init) = factor(i)?;
    fold_many0_mut(
        pair(positioned(map_opt(alt((tag("+"), tag("-"))), |o: Input<'_>| BinaryOperator::from_string(*o))), factor),
        init,
        |acc, ((op, position), right)| Parsed::Binary(op, Box::new(acc), Box::new(right), position)
    )(i)
}

// root

fn statement(i: Input<'_>) -> Output<Parsed> {
    terminated(term, ws(opt(char(';'))))(i)
}

fn root(i: Input<'_>) -> Output<Vec<Parsed>> {
    all_consuming(preceded(space0, many0(statement)))(i)
}

/// Moves a parsed expression into the arena. Children are stored before their parent.
fn lower(builder: &mut ProgramBuilder, lines: &LineIndex<'_>, parsed: Parsed) -> ExprId {
    let mut tasks = vec![ Lower::Visit(Box::new(parsed)) ];
    let mut ids = Vec::new();
    while let Some(task) = tasks.pop() {
        match task {
            Lower::Visit(mut node) => {
                let mut children = Vec::new();
                node.take_children(&mut children);
                match &mut *node {
                    Parsed::Literal(value, position) => {
                        let value = std::mem::replace(value, LiteralValue::Numeric(0.0));
                        ids.push(builder.literal(value, lines.line(*position)));
                    },
                    Parsed::Unary(op, _, position) => tasks.push(Lower::Unary(*op, lines.line(*position))),
                    Parsed::Binary(op, _, _, position) => tasks.push(Lower::Binary(*op, lines.line(*position))),
                }
                // children were taken right first, so the left child is visited first
                tasks.extend(children.into_iter().map(Lower::Visit));
            },
            Lower::Unary(op, line) => {
                let operand = ids.pop().unwrap_or(ExprId::from(0));
                ids.push(builder.unary(op, operand, line));
            },
            Lower::Binary(op, line) => {
                let right = ids.pop().unwrap_or(ExprId::from(0));
                let left = ids.pop().unwrap_or(ExprId::from(0));
                ids.push(builder.binary(op, left, right, line));
            },
        }
    }
    ids.pop().unwrap_or(ExprId::from(0))
}

/// Parses Clear source code into a program AST structure.
///
/// Statements are separated by `;` or whitespace. Each node is tagged with the 1-based source line it starts on,
/// binary operations with the line of their operator.
///
/// ```
/// use clear::parser;
///
/// let program = parser::parse("1 + 2; 3 * 4").unwrap();
/// assert_eq!(program.statements().len(), 2);
/// ```
pub fn parse(src: &str) -> ParseResult<Program> {
    let input = Input::new(src);
    let lines = LineIndex::new(src);
    match root(input.clone()) {
        Ok((_, statements)) => {
            let mut builder = ProgramBuilder::new();
            for parsed in statements {
                let root = lower(&mut builder, &lines, parsed);
                builder.statement(root);
            }
            let program = builder.finish();
            debug!(target: "clear::parser", statements = program.statements().len(), nodes = program.nodes().len(), "parsed program");
            Ok(program)
        },
        Err(nom::Err::Failure(failure)) => {
            // a failure generated by a literal parser
            Err(lines.error(failure.kind, failure.input.position()))
        },
        Err(_) => {
            // nom error is useless to us, but we stored the highest parsed offset on the input which is the most likely error position
            Err(lines.error(ParseErrorKind::SyntaxError, input.max_parsed()))
        },
    }
}
