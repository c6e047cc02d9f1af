//! Hand-written recursive-descent parser that reports every rule attempt.
//!
//! ```text
//! expr   = term (add_op term)*
//! term   = factor (mul_op factor)*
//! factor = ws (number / paren) ws
//! paren  = "(" expr ")"
//! number = [0-9]+
//! add_op = "+" / "-"
//! mul_op = "*" / "/"
//! ws     = [ \t\n]*
//! ```

use tracegraph::{Location, Position, TraceEvent, TraceSink};

use crate::ParseError;
use crate::ast::{BinOp, Expr};

/// `Ok(None)` is an ordinary rule failure the caller may backtrack from.
type Attempt<T> = Result<Option<T>, ParseError>;

pub struct Parser<'s, 't> {
    source: &'s str,
    pos: usize,
    line_starts: Vec<usize>,
    sink: &'t mut dyn TraceSink,
    furthest: usize,
    expected: Vec<String>,
}

impl<'s, 't> Parser<'s, 't> {
    pub fn new(source: &'s str, sink: &'t mut dyn TraceSink) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(idx, _)| idx + 1))
            .collect();
        Self {
            source,
            pos: 0,
            line_starts,
            sink,
            furthest: 0,
            expected: Vec::new(),
        }
    }

    /// Parses the whole source as one expression.
    pub fn parse(mut self) -> Result<Expr, ParseError> {
        match self.expr()? {
            Some(expr) if self.pos == self.source.len() => Ok(expr),
            Some(_) => {
                self.expect("end of input");
                Err(self.syntax_error())
            }
            None => Err(self.syntax_error()),
        }
    }

    fn position(&self, pos: usize) -> Position {
        let line = self.line_starts.partition_point(|&start| start <= pos);
        let line_start = self.line_starts[line.saturating_sub(1)];
        Position::new(
            self.source[..pos].chars().count(),
            line,
            self.source[line_start..pos].chars().count() + 1,
        )
    }

    fn rest(&self) -> &'s str {
        &self.source[self.pos..]
    }

    /// Runs `body` as rule `name`, bracketing it with trace events and
    /// rewinding the input when it fails.
    fn rule<T>(
        &mut self,
        name: &'static str,
        body: impl FnOnce(&mut Self) -> Attempt<T>,
    ) -> Attempt<T> {
        let start = self.pos;
        let at = self.position(start);
        self.sink
            .trace(&TraceEvent::enter(name, Location::new(at, at)))?;

        match body(self)? {
            Some(value) => {
                let end = self.position(self.pos);
                self.sink
                    .trace(&TraceEvent::matched(name, Location::new(at, end)))?;
                Ok(Some(value))
            }
            None => {
                self.pos = start;
                self.sink
                    .trace(&TraceEvent::failed(name, Location::new(at, at)))?;
                Ok(None)
            }
        }
    }

    fn expect(&mut self, what: impl Into<String>) {
        if self.pos > self.furthest {
            self.furthest = self.pos;
            self.expected.clear();
        }
        if self.pos == self.furthest {
            self.expected.push(what.into());
        }
    }

    fn literal(&mut self, text: &str) -> bool {
        if self.rest().starts_with(text) {
            self.pos += text.len();
            true
        } else {
            self.expect(format!("{text:?}"));
            false
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'s str {
        let rest = self.rest();
        let len = rest.find(|c| !pred(c)).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    fn syntax_error(&self) -> ParseError {
        let at = self.position(self.furthest);
        let mut expected = self.expected.clone();
        expected.sort();
        expected.dedup();
        let found = self.source[self.furthest..]
            .chars()
            .next()
            .map_or_else(|| "end of input".to_string(), |c| format!("{c:?}"));
        ParseError::Syntax {
            line: at.line,
            column: at.column,
            expected,
            found,
        }
    }

    fn expr(&mut self) -> Attempt<Expr> {
        self.rule("expr", |p| p.chain(Self::add_op, Self::term))
    }

    fn term(&mut self) -> Attempt<Expr> {
        self.rule("term", |p| p.chain(Self::mul_op, Self::factor))
    }

    /// `operand (op operand)*`, folded to the left.
    fn chain(
        &mut self,
        operator: fn(&mut Self) -> Attempt<BinOp>,
        operand: fn(&mut Self) -> Attempt<Expr>,
    ) -> Attempt<Expr> {
        let Some(mut lhs) = operand(self)? else {
            return Ok(None);
        };
        loop {
            let checkpoint = self.pos;
            let Some(op) = operator(self)? else { break };
            let Some(rhs) = operand(self)? else {
                self.pos = checkpoint;
                break;
            };
            lhs = Expr::binary(op, lhs, rhs);
        }
        Ok(Some(lhs))
    }

    fn add_op(&mut self) -> Attempt<BinOp> {
        self.rule("add_op", |p| Ok(p.operator(&["+", "-"])))
    }

    fn mul_op(&mut self) -> Attempt<BinOp> {
        self.rule("mul_op", |p| Ok(p.operator(&["*", "/"])))
    }

    fn operator(&mut self, symbols: &[&str]) -> Option<BinOp> {
        symbols
            .iter()
            .find(|symbol| self.literal(symbol))
            .and_then(|symbol| symbol.chars().next())
            .and_then(BinOp::from_symbol)
    }

    fn factor(&mut self) -> Attempt<Expr> {
        self.rule("factor", |p| {
            p.ws()?;
            let value = match p.number()? {
                Some(number) => Some(number),
                None => p.paren()?,
            };
            if value.is_some() {
                p.ws()?;
            }
            Ok(value)
        })
    }

    fn paren(&mut self) -> Attempt<Expr> {
        self.rule("paren", |p| {
            if !p.literal("(") {
                return Ok(None);
            }
            let Some(inner) = p.expr()? else {
                return Ok(None);
            };
            Ok(p.literal(")").then_some(inner))
        })
    }

    fn number(&mut self) -> Attempt<Expr> {
        self.rule("number", |p| {
            let digits = p.take_while(|c| c.is_ascii_digit());
            if digits.is_empty() {
                p.expect("digit");
                return Ok(None);
            }
            match digits.parse() {
                Ok(value) => Ok(Some(Expr::Number(value))),
                Err(_) => {
                    p.pos -= digits.len();
                    p.expect("number that fits in 64 bits");
                    Ok(None)
                }
            }
        })
    }

    fn ws(&mut self) -> Attempt<()> {
        self.rule("ws", |p| {
            p.take_while(|c| matches!(c, ' ' | '\t' | '\n'));
            Ok(Some(()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(source: &str) -> Vec<TraceEvent> {
        let mut recorded: Vec<TraceEvent> = Vec::new();
        let _ = Parser::new(source, &mut recorded).parse();
        recorded
    }

    #[test]
    fn test_position_tracks_lines() {
        let mut sink: Vec<TraceEvent> = Vec::new();
        let parser = Parser::new("1\n22\n3", &mut sink);
        assert_eq!(parser.position(0), Position::new(0, 1, 1));
        assert_eq!(parser.position(3), Position::new(3, 2, 2));
        assert_eq!(parser.position(5), Position::new(5, 3, 1));
        assert_eq!(parser.position(6), Position::new(6, 3, 2));
    }

    #[test]
    fn test_events_are_balanced() {
        let events = events("2+(3/4)");
        let mut depth = 0usize;
        for event in &events {
            match event.kind {
                tracegraph::EventKind::Enter => depth += 1,
                _ => depth -= 1,
            }
        }
        assert_eq!(depth, 0);
        assert_eq!(events.first().map(|e| e.rule.as_str()), Some("expr"));
        assert_eq!(events.last().map(|e| e.rule.as_str()), Some("expr"));
    }

    #[test]
    fn test_failed_rule_rewinds() {
        let mut sink: Vec<TraceEvent> = Vec::new();
        let mut parser = Parser::new("(1", &mut sink);
        assert_eq!(parser.paren().unwrap(), None);
        assert_eq!(parser.pos, 0);
        assert_eq!(parser.furthest, 2);
        assert_eq!(parser.expected, [r#""*""#, r#""/""#, r#""+""#, r#""-""#, r#"")""#]);
    }
}
