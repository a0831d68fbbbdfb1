use std::ops::{RangeFrom, RangeTo};
use std::str::{Chars, CharIndices};
use nom::{Compare, CompareResult, FindSubstring, InputIter, InputLength, InputTake, Needed, Offset, Parser, Slice};
use nom::bytes::complete::{take, take_while, take_until, take_while1, tag};
use nom::combinator::recognize;
use nom::multi::many0;
use nom::branch::alt;
use nom::sequence::{preceded, terminated};
use crate::frontend::parser::types::{Input, Output, Failure, Position};
use crate::frontend::parser::error::ParseErrorKind;

impl<'a> nom::error::ParseError<Input<'a>> for Failure<'a> {
    fn from_error_kind(input: Input<'a>, _: nom::error::ErrorKind) -> Self {
        input.track_error();
        Failure { input, kind: ParseErrorKind::SyntaxError }
    }
    fn append(_: Input<'a>, _: nom::error::ErrorKind, other: Self) -> Self {
        other.input.track_error();
        other
    }
}

impl<'a> nom::UnspecializedInput for Input<'a> { }

impl<'a> InputLength for Input<'a> {
    #[inline]
    fn input_len(&self) -> usize {
        self.data.len()
    }
}

impl<'a> InputTake for Input<'a> {
    #[inline]
    fn take(&self, count: usize) -> Self {
        self.from_str(&self.data[..count])
    }
    #[inline]
    fn take_split(&self, count: usize) -> (Self, Self) {
        (self.from_str(&self.data[count..]), self.from_str(&self.data[..count]))
    }
}

impl<'a> InputIter for Input<'a> {
    type Item = char;
    type Iter = CharIndices<'a>;
    type IterElem = Chars<'a>;
    #[inline]
    fn iter_indices(&self) -> Self::Iter {
        self.data.char_indices()
    }
    #[inline]
    fn iter_elements(&self) -> Self::IterElem {
        self.data.chars()
    }
    fn position<P>(&self, predicate: P) -> Option<usize> where P: Fn(Self::Item) -> bool {
        self.data.position(predicate)
    }
    #[inline]
    fn slice_index(&self, count: usize) -> Result<usize, Needed> {
        self.data.slice_index(count)
    }
}

impl<'a, 'b> Compare<&'b str> for Input<'a> {
    #[inline(always)]
    fn compare(&self, t: &'b str) -> CompareResult {
        self.data.compare(t)
    }
    #[inline(always)]
    fn compare_no_case(&self, t: &'b str) -> CompareResult {
        self.data.compare_no_case(t)
    }
}

impl<'a, 'b> FindSubstring<&'b str> for Input<'a> {
    fn find_substring(&self, substr: &'b str) -> Option<usize> {
        self.data.find_substring(substr)
    }
}

impl<'a> Offset for Input<'a> {
    fn offset(&self, second: &Self) -> usize {
        self.data.offset(second.data)
    }
}

impl<'a> Slice<RangeTo<usize>> for Input<'a> {
    fn slice(&self, range: RangeTo<usize>) -> Self {
        self.from_str(&self.data[range])
    }
}

impl<'a> Slice<RangeFrom<usize>> for Input<'a> {
    fn slice(&self, range: RangeFrom<usize>) -> Self {
        self.from_str(&self.data[range])
    }
}

/// Fixes nom-provided fold_many0 implementation to take its initial value by move instead of via closure.
pub(super) fn fold_many0_mut<I, O, E, F, G, R>(mut f: F, init: R, mut g: G) -> impl FnOnce(I) -> nom::IResult<I, R, E>
where
    I: Clone + PartialEq,
    F: Parser<I, O, E>,
    G: FnMut(R, O) -> R,
    E: nom::error::ParseError<I>
{
    move |i: I| {
        let mut res = init;
        let mut input = i;

        loop {
            let i_ = input.clone();
            match f.parse(i_) {
                Ok((i, o)) => {
                    // loop trip must always consume (otherwise infinite loops)
                    if i == input {
                        return Err(nom::Err::Error(E::from_error_kind(input, nom::error::ErrorKind::Many0)));
                    }

                    res = g(res, o);
                    input = i;
                }
                Err(nom::Err::Error(_)) => {
                    return Ok((input, res));
                }
                Err(e) => {
                    return Err(e);
                }
            }
        }
    }
}

/// Consumes 0 or more whitespace characters or comments
pub(super) fn space0(input: Input<'_>) -> Output<Input<'_>> {
    recognize(many0(alt((
        preceded(tag("//"), take_while(not_eol)),
        preceded(tag("/*"), terminated(take_until("*/"), take(2u8))),
        take_while1(is_whitespace)
    ))))(input)
}

/// Wraps the given parser in optional surrounding whitespace.
pub(super) fn ws<'a, O, P>(mut parser: P) -> impl FnMut(Input<'a>) -> Output<'a, O>
where
    P: Parser<Input<'a>, O, Failure<'a>>
{
    move |i: Input<'a>| {
        let (i, _) = space0(i)?;
        let (i, o) = parser.parse(i)?;
        let (i, _) = space0(i)?;
        Ok((i, o))
    }
}

/// Skips leading whitespace, then returns the result of the given parser along with the position it started at.
pub(super) fn positioned<'a, O, P>(mut parser: P) -> impl FnMut(Input<'a>) -> Output<'a, (O, Position)>
where
    P: Parser<Input<'a>, O, Failure<'a>>
{
    move |i: Input<'a>| {
        let (i, _) = space0(i)?;
        let position = i.position();
        let (i, o) = parser.parse(i)?;
        Ok((i, (o, position)))
    }
}

/// Runs the given parser one nesting level deeper. Fails once the maximum nesting depth is reached.
pub(super) fn nested<'a, O, P>(mut parser: P) -> impl FnMut(Input<'a>) -> Output<'a, O>
where
    P: Parser<Input<'a>, O, Failure<'a>>
{
    move |i: Input<'a>| {
        if !i.enter() {
            return Err(nom::Err::Failure(Failure { input: i, kind: ParseErrorKind::NestingTooDeep }));
        }
        let result = parser.parse(i.clone());
        i.leave();
        result
    }
}

/// returns true if given character is a whitespace character
fn is_whitespace(chr: char) -> bool {
    chr == ' ' || chr == '\t' || chr == '\r' || chr == '\n'
}

/// returns true if given character is not an end of line character
fn not_eol(chr: char) -> bool {
    chr != '\r' && chr != '\n'
}
