//! Text parsing.
//!
//! Turns a Yamlet document into a [`Node`] tree in a single forward pass.
//! Block structure is recovered from indentation; inline (flow) structure
//! from `[...]` and `{...}` brackets, which may span lines. Blank lines,
//! `#` comments and a leading `---` marker are skipped. Scalars stay as
//! text in the tree; nothing is converted to numbers or booleans here.
//!
//! Errors carry the 1-based line and column where parsing stopped.

use crate::error::{Error, Result};
use crate::map::Mapping;
use crate::value::Node;

/// Parses a complete document into a [`Node`] tree.
pub(crate) fn parse_str(input: &str) -> Result<Node> {
    Parser::new(input).parse_document()
}

struct Parser<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Parser {
            input,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        if let Some(ch) = self.input[self.position..].chars().next() {
            self.position += ch.len_utf8();
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            Some(ch)
        } else {
            None
        }
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// The remainder of the current line, excluding the newline.
    fn rest_of_line(&self) -> &str {
        let rest = &self.input[self.position..];
        match rest.find('\n') {
            Some(idx) => &rest[..idx],
            None => rest,
        }
    }

    fn invalid_here(&self, msg: &str) -> Error {
        Error::invalid(self.line, self.column, msg)
    }

    fn skip_spaces(&mut self) {
        while matches!(self.peek_char(), Some(' ' | '\t' | '\r')) {
            self.next_char();
        }
    }

    fn skip_to_eol(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch == '\n' {
                break;
            }
            self.next_char();
        }
    }

    /// Skips blank and comment lines, stopping at the first content
    /// character. Only spaces may indent a line.
    fn advance_to_content(&mut self) -> Result<()> {
        loop {
            loop {
                match self.peek_char() {
                    Some(' ' | '\r') => {
                        self.next_char();
                    }
                    Some('\t') => return Err(self.invalid_here("tab character in indentation")),
                    _ => break,
                }
            }
            match self.peek_char() {
                None => return Ok(()),
                Some('\n') => {
                    self.next_char();
                }
                Some('#') => self.skip_to_eol(),
                Some(_) => return Ok(()),
            }
        }
    }

    /// Indent of the content the cursor stands on, or `None` at end of
    /// input. Valid right after [`advance_to_content`](Self::advance_to_content).
    fn content_indent(&self) -> Option<usize> {
        if self.at_end() {
            None
        } else {
            Some(self.column - 1)
        }
    }

    /// Consumes trailing spaces and an optional comment, then the newline.
    fn finish_line(&mut self) -> Result<()> {
        self.skip_spaces();
        if self.peek_char() == Some('#') {
            self.skip_to_eol();
        }
        match self.peek_char() {
            None => Ok(()),
            Some('\n') => {
                self.next_char();
                Ok(())
            }
            Some(_) => Err(self.invalid_here("unexpected trailing characters")),
        }
    }

    fn at_eol_or_comment(&self) -> bool {
        matches!(self.peek_char(), None | Some('\n' | '#'))
    }

    /// A `-` introduces a sequence item only when followed by whitespace
    /// or the end of the line; `-5` is scalar text.
    fn at_seq_marker(&self) -> bool {
        let rest = self.rest_of_line().as_bytes();
        rest.first() == Some(&b'-') && matches!(rest.get(1), None | Some(b' ' | b'\t' | b'\r'))
    }

    fn at_doc_start_marker(&self) -> bool {
        let rest = self.rest_of_line().as_bytes();
        rest.starts_with(b"---")
            && matches!(rest.get(3), None | Some(b' ' | b'\t' | b'\r' | b'#'))
    }

    /// Whether the current line is a mapping entry: a plain or quoted key
    /// followed by `:` and whitespace (or the end of the line). Looks
    /// ahead without consuming. A `:` inside quotes or after a comment
    /// start does not count.
    fn line_has_key_split(&self) -> bool {
        let bytes = self.rest_of_line().as_bytes();
        let mut i = 0;
        if bytes.first() == Some(&b'"') {
            i = 1;
            loop {
                match bytes.get(i) {
                    None => return false,
                    Some(b'\\') => i += 2,
                    Some(b'"') => {
                        i += 1;
                        break;
                    }
                    Some(_) => i += 1,
                }
            }
            while matches!(bytes.get(i), Some(b' ' | b'\t')) {
                i += 1;
            }
            return bytes.get(i) == Some(&b':');
        }
        while i < bytes.len() {
            match bytes[i] {
                b':' => match bytes.get(i + 1) {
                    None | Some(b' ' | b'\t' | b'\r') => return true,
                    _ => {}
                },
                b'#' if i > 0 && matches!(bytes[i - 1], b' ' | b'\t') => return false,
                _ => {}
            }
            i += 1;
        }
        false
    }

    fn parse_document(&mut self) -> Result<Node> {
        if self.peek_char() == Some('\u{feff}') {
            self.next_char();
        }
        self.advance_to_content()?;
        if self.at_doc_start_marker() {
            for _ in 0..3 {
                self.next_char();
            }
            self.finish_line()?;
            self.advance_to_content()?;
        }
        if self.at_end() {
            return Err(self.invalid_here("empty document"));
        }
        let indent = self.column - 1;
        let node = self.parse_block_value(indent)?;
        if !self.at_end() {
            return Err(self.invalid_here("unexpected trailing content"));
        }
        Ok(node)
    }

    /// Parses the value starting at the cursor. On return the cursor
    /// stands at the next content character (or the end of input).
    fn parse_block_value(&mut self, indent: usize) -> Result<Node> {
        match self.peek_char() {
            None => Err(self.invalid_here("expected a value")),
            Some('-') if self.at_seq_marker() => self.parse_block_sequence(indent),
            Some('[' | '{') => {
                let node = self.parse_flow()?;
                self.finish_line()?;
                self.advance_to_content()?;
                Ok(node)
            }
            _ if self.line_has_key_split() => self.parse_block_mapping(indent),
            Some('"') => {
                let text = self.parse_quoted()?;
                self.finish_line()?;
                self.advance_to_content()?;
                Ok(Node::Scalar(text))
            }
            Some(_) => {
                let text = self.parse_plain_block();
                self.finish_line()?;
                self.advance_to_content()?;
                Ok(resolve_plain(&text))
            }
        }
    }

    fn parse_block_sequence(&mut self, indent: usize) -> Result<Node> {
        let mut items = Vec::new();
        loop {
            self.next_char(); // the marker
            self.skip_spaces();
            let item = if self.at_eol_or_comment() {
                self.finish_line()?;
                self.advance_to_content()?;
                match self.content_indent() {
                    Some(child) if child > indent => self.parse_block_value(child)?,
                    _ => Node::Null,
                }
            } else {
                // the item continues the marker line; its children align
                // under this column
                let child = self.column - 1;
                self.parse_block_value(child)?
            };
            items.push(item);
            match self.content_indent() {
                None => break,
                Some(next) if next < indent => break,
                Some(next) if next > indent => {
                    return Err(self.invalid_here("unexpected indentation"))
                }
                Some(_) => {
                    if !self.at_seq_marker() {
                        break;
                    }
                }
            }
        }
        Ok(Node::Sequence(items))
    }

    fn parse_block_mapping(&mut self, indent: usize) -> Result<Node> {
        let mut entries = Mapping::new();
        loop {
            let key = self.parse_key()?;
            self.skip_spaces();
            let value = if self.at_eol_or_comment() {
                self.finish_line()?;
                self.advance_to_content()?;
                match self.content_indent() {
                    Some(child) if child > indent => self.parse_block_value(child)?,
                    _ => Node::Null,
                }
            } else {
                self.parse_value_line()?
            };
            entries.insert(key, value);
            match self.content_indent() {
                None => break,
                Some(next) if next < indent => break,
                Some(next) if next > indent => {
                    return Err(self.invalid_here("unexpected indentation"))
                }
                Some(_) => {
                    if self.at_seq_marker() || !self.line_has_key_split() {
                        break;
                    }
                }
            }
        }
        Ok(Node::Mapping(entries))
    }

    /// Parses a key and consumes the `:` separator. Quoted keys keep
    /// their text verbatim; plain keys are trimmed and never resolve to
    /// null.
    fn parse_key(&mut self) -> Result<Node> {
        if self.peek_char() == Some('"') {
            let text = self.parse_quoted()?;
            self.skip_spaces();
            match self.peek_char() {
                Some(':') => {
                    self.next_char();
                    Ok(Node::Scalar(text))
                }
                _ => Err(self.invalid_here("expected ':' after key")),
            }
        } else {
            let mut text = String::new();
            loop {
                match self.peek_char() {
                    Some(':') => {
                        let rest = self.rest_of_line().as_bytes();
                        match rest.get(1) {
                            None | Some(b' ' | b'\t' | b'\r') => {
                                self.next_char();
                                break;
                            }
                            _ => {
                                text.push(':');
                                self.next_char();
                            }
                        }
                    }
                    None | Some('\n') => return Err(self.invalid_here("expected ':' after key")),
                    Some(ch) => {
                        text.push(ch);
                        self.next_char();
                    }
                }
            }
            let key = text.trim_end();
            if key.is_empty() {
                return Err(self.invalid_here("missing key before ':'"));
            }
            Ok(Node::Scalar(key.to_string()))
        }
    }

    /// A scalar or inline container on the same line as its key.
    fn parse_value_line(&mut self) -> Result<Node> {
        let node = match self.peek_char() {
            Some('[' | '{') => self.parse_flow()?,
            Some('"') => Node::Scalar(self.parse_quoted()?),
            _ => resolve_plain(&self.parse_plain_block()),
        };
        self.finish_line()?;
        self.advance_to_content()?;
        Ok(node)
    }

    /// Plain scalar text up to the end of the line or a comment.
    fn parse_plain_block(&mut self) -> String {
        let mut text = String::new();
        let mut prev_ws = false;
        while let Some(ch) = self.peek_char() {
            if ch == '\n' || (ch == '#' && prev_ws) {
                break;
            }
            prev_ws = ch == ' ' || ch == '\t';
            text.push(ch);
            self.next_char();
        }
        text.trim_end().to_string()
    }

    fn parse_quoted(&mut self) -> Result<String> {
        self.next_char(); // opening quote
        let mut result = String::new();
        while let Some(ch) = self.next_char() {
            match ch {
                '"' => return Ok(result),
                '\\' => match self.next_char() {
                    Some('\\') => result.push('\\'),
                    Some('"') => result.push('"'),
                    Some('n') => result.push('\n'),
                    Some('r') => result.push('\r'),
                    Some('t') => result.push('\t'),
                    Some('b') => result.push('\u{0008}'),
                    Some('f') => result.push('\u{000C}'),
                    Some('0') => result.push('\0'),
                    Some('u') => {
                        let mut hex = String::new();
                        for _ in 0..4 {
                            match self.next_char() {
                                Some(ch) if ch.is_ascii_hexdigit() => hex.push(ch),
                                _ => {
                                    return Err(self.invalid_here(
                                        "invalid unicode escape (expected 4 hex digits)",
                                    ))
                                }
                            }
                        }
                        let code = u32::from_str_radix(&hex, 16)
                            .map_err(|_| self.invalid_here("invalid unicode escape"))?;
                        match char::from_u32(code) {
                            Some(ch) => result.push(ch),
                            None => return Err(self.invalid_here("invalid unicode code point")),
                        }
                    }
                    // unknown escapes are preserved literally
                    Some(other) => {
                        result.push('\\');
                        result.push(other);
                    }
                    None => return Err(self.invalid_here("unexpected end of input in string")),
                },
                other => result.push(other),
            }
        }
        Err(self.invalid_here("unterminated string"))
    }

    /// Inline container; newlines inside the brackets are plain whitespace.
    fn parse_flow(&mut self) -> Result<Node> {
        match self.peek_char() {
            Some('[') => self.parse_flow_sequence(),
            _ => self.parse_flow_mapping(),
        }
    }

    fn skip_flow_ws(&mut self) {
        loop {
            match self.peek_char() {
                Some(' ' | '\t' | '\r' | '\n') => {
                    self.next_char();
                }
                Some('#') => self.skip_to_eol(),
                _ => break,
            }
        }
    }

    fn parse_flow_sequence(&mut self) -> Result<Node> {
        self.next_char(); // '['
        let mut items = Vec::new();
        loop {
            self.skip_flow_ws();
            if self.peek_char() == Some(']') {
                self.next_char();
                break;
            }
            items.push(self.parse_flow_value()?);
            self.skip_flow_ws();
            match self.peek_char() {
                Some(',') => {
                    self.next_char();
                }
                Some(']') => {
                    self.next_char();
                    break;
                }
                _ => return Err(self.invalid_here("expected ',' or ']' in inline sequence")),
            }
        }
        Ok(Node::Sequence(items))
    }

    fn parse_flow_mapping(&mut self) -> Result<Node> {
        self.next_char(); // '{'
        let mut entries = Mapping::new();
        loop {
            self.skip_flow_ws();
            if self.peek_char() == Some('}') {
                self.next_char();
                break;
            }
            let key = if self.peek_char() == Some('"') {
                Node::Scalar(self.parse_quoted()?)
            } else {
                let text = self.parse_flow_plain(true);
                if text.is_empty() {
                    return Err(self.invalid_here("expected a key"));
                }
                Node::Scalar(text)
            };
            self.skip_flow_ws();
            let value = if self.peek_char() == Some(':') {
                self.next_char();
                self.skip_flow_ws();
                self.parse_flow_value()?
            } else {
                // a bare key maps to null
                Node::Null
            };
            entries.insert(key, value);
            self.skip_flow_ws();
            match self.peek_char() {
                Some(',') => {
                    self.next_char();
                }
                Some('}') => {
                    self.next_char();
                    break;
                }
                _ => return Err(self.invalid_here("expected ',' or '}' in inline mapping")),
            }
        }
        Ok(Node::Mapping(entries))
    }

    fn parse_flow_value(&mut self) -> Result<Node> {
        match self.peek_char() {
            Some('[') => self.parse_flow_sequence(),
            Some('{') => self.parse_flow_mapping(),
            Some('"') => Ok(Node::Scalar(self.parse_quoted()?)),
            _ => {
                let text = self.parse_flow_plain(false);
                if text.is_empty() {
                    return Err(self.invalid_here("expected a value"));
                }
                Ok(resolve_plain(&text))
            }
        }
    }

    /// Plain scalar text inside a flow container. Keys additionally stop
    /// at `:`; values may contain it (`http://...`).
    fn parse_flow_plain(&mut self, stop_at_colon: bool) -> String {
        let mut text = String::new();
        let mut prev_ws = false;
        while let Some(ch) = self.peek_char() {
            match ch {
                ',' | ']' | '}' | '\n' => break,
                ':' if stop_at_colon => break,
                '#' if prev_ws => break,
                _ => {
                    prev_ws = ch == ' ' || ch == '\t';
                    text.push(ch);
                    self.next_char();
                }
            }
        }
        text.trim_end().to_string()
    }
}

fn resolve_plain(text: &str) -> Node {
    if crate::value::is_null_text(text) {
        Node::Null
    } else {
        Node::Scalar(text.to_string())
    }
}
