//! Recursive-descent parser for parenthesized connect descriptors.
//!
//! ```text
//! node  := '(' key '=' (value | node+) ')'
//! key   := text up to '='
//! value := text up to the matching ')'
//! ```
//!
//! Whitespace around keys, values and between sibling nodes is ignored.

use tracing::trace;

use super::node::DescriptorNode;
use crate::error::{ResolveError, ResolveResult};

/// Deepest nesting the parser accepts before giving up.
pub const MAX_DEPTH: usize = 64;

/// Ceiling for any configured depth limit. Parsing recurses once per level,
/// so this bounds stack use regardless of configuration.
pub const MAX_DEPTH_LIMIT: usize = 256;

/// Parse a descriptor such as `(DESCRIPTION=(ADDRESS=(HOST=h)(PORT=1)))`.
///
/// ```rust
/// use tnsurl_core::descriptor::parse_descriptor;
///
/// let root = parse_descriptor("(CONNECT_DATA=(SID=XE))").unwrap();
/// assert_eq!(root.key(), "CONNECT_DATA");
/// assert_eq!(root.child_nodes()[0].as_scalar(), Some("XE"));
/// ```
pub fn parse_descriptor(input: &str) -> ResolveResult<DescriptorNode> {
    DescriptorParser::new(input).parse()
}

/// Parser state over one descriptor string.
#[derive(Debug)]
pub struct DescriptorParser<'a> {
    input: &'a str,
    pos: usize,
    max_depth: usize,
}

impl<'a> DescriptorParser<'a> {
    /// Create a parser with the default depth limit.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            max_depth: MAX_DEPTH,
        }
    }

    /// Override the nesting limit, clamped to [`MAX_DEPTH_LIMIT`].
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_DEPTH_LIMIT);
        self
    }

    /// Parse exactly one root node, allowing only whitespace around it.
    pub fn parse(mut self) -> ResolveResult<DescriptorNode> {
        self.skip_whitespace();
        let root = self.parse_node(1)?;
        self.skip_whitespace();
        if self.pos < self.input.len() {
            return Err(ResolveError::unbalanced(
                self.pos,
                "unexpected text after the closing ')'",
            ));
        }
        trace!(key = root.key(), "descriptor parsed");
        Ok(root)
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, expected: u8) -> ResolveResult<()> {
        match self.peek() {
            Some(b) if b == expected => {
                self.pos += 1;
                Ok(())
            }
            Some(_) => Err(ResolveError::unbalanced(
                self.pos,
                format!("expected '{}'", expected as char),
            )),
            None => Err(ResolveError::unbalanced(
                self.pos,
                format!("unexpected end of input, expected '{}'", expected as char),
            )),
        }
    }

    fn parse_node(&mut self, depth: usize) -> ResolveResult<DescriptorNode> {
        if depth > self.max_depth {
            return Err(ResolveError::NestingTooDeep {
                limit: self.max_depth,
            });
        }

        self.expect(b'(')?;
        let key = self.read_key()?;
        self.skip_whitespace();

        if self.peek() == Some(b'(') {
            let children = self.read_children(depth)?;
            return Ok(DescriptorNode::children(key, children));
        }

        let text = self.read_scalar(depth)?;
        if text.is_empty() {
            Ok(DescriptorNode::children(key, Vec::new()))
        } else {
            Ok(DescriptorNode::scalar(key, text))
        }
    }

    fn read_key(&mut self) -> ResolveResult<&'a str> {
        let start = self.pos;
        loop {
            match self.peek() {
                Some(b'=') => break,
                Some(b'(') | Some(b')') => {
                    return Err(ResolveError::unbalanced(
                        self.pos,
                        "expected '=' after key",
                    ));
                }
                Some(_) => self.pos += 1,
                None => {
                    return Err(ResolveError::unbalanced(
                        self.pos,
                        "unexpected end of input, expected '='",
                    ));
                }
            }
        }

        let input = self.input;
        let key = input[start..self.pos].trim();
        if key.is_empty() {
            return Err(ResolveError::unbalanced(start, "empty key"));
        }
        // '='
        self.pos += 1;
        Ok(key)
    }

    fn read_children(&mut self, depth: usize) -> ResolveResult<Vec<DescriptorNode>> {
        let mut children = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b'(') => children.push(self.parse_node(depth + 1)?),
                Some(b')') => {
                    self.pos += 1;
                    return Ok(children);
                }
                Some(_) => {
                    return Err(ResolveError::unbalanced(
                        self.pos,
                        "expected '(' or ')' between child nodes",
                    ));
                }
                None => {
                    return Err(ResolveError::unbalanced(
                        self.pos,
                        "unexpected end of input, expected ')'",
                    ));
                }
            }
        }
    }

    /// Read up to the ')' that closes the current node and consume it.
    ///
    /// Parentheses inside the value must balance.
    fn read_scalar(&mut self, depth: usize) -> ResolveResult<&'a str> {
        let start = self.pos;
        let mut nested = 0usize;
        loop {
            match self.peek() {
                Some(b'(') => {
                    nested += 1;
                    if depth + nested > self.max_depth {
                        return Err(ResolveError::NestingTooDeep {
                            limit: self.max_depth,
                        });
                    }
                }
                Some(b')') if nested == 0 => break,
                Some(b')') => nested -= 1,
                Some(_) => {}
                None => {
                    return Err(ResolveError::unbalanced(
                        self.pos,
                        "unexpected end of input, expected ')'",
                    ));
                }
            }
            self.pos += 1;
        }

        let input = self.input;
        let text = input[start..self.pos].trim();
        // ')'
        self.pos += 1;
        Ok(text)
    }
}
