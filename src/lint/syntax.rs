//! Python syntax validation.
//!
//! tree-sitter finds token and grammar errors but recovers silently from
//! bad indentation and accepts Python 2 statements. Two extra passes reject
//! what CPython would: an indentation pass over logical lines and a scan for
//! `print_statement` / `exec_statement` nodes.

use std::fmt;

use tree_sitter::Node;

use crate::types::{AgentError, Result};

/// Tab stops used by the CPython tokenizer
const TAB_SIZE: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    Invalid,
    /// Token kind the parser had to insert
    Missing(String),
    UnexpectedIndent,
    ExpectedIndent,
    UnindentMismatch,
    /// Python 2 `print` / `exec` statement
    Python2Statement(String),
}

/// First syntax problem found in a source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// 1-based line
    pub line: usize,
    /// 0-based column
    pub column: usize,
    pub kind: SyntaxErrorKind,
}

impl SyntaxError {
    fn new(line: usize, column: usize, kind: SyntaxErrorKind) -> Self {
        Self { line, column, kind }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            SyntaxErrorKind::Invalid => write!(f, "invalid syntax")?,
            SyntaxErrorKind::Missing(kind) => write!(f, "missing '{}'", kind)?,
            SyntaxErrorKind::UnexpectedIndent => write!(f, "unexpected indent")?,
            SyntaxErrorKind::ExpectedIndent => write!(f, "expected an indented block")?,
            SyntaxErrorKind::UnindentMismatch => {
                write!(f, "unindent does not match any outer indentation level")?
            }
            SyntaxErrorKind::Python2Statement(keyword) => {
                write!(f, "Missing parentheses in call to '{}'", keyword)?
            }
        }
        write!(f, " (line {}, column {})", self.line, self.column)
    }
}

pub struct PythonSyntax {
    parser: tree_sitter::Parser,
}

impl PythonSyntax {
    pub fn new() -> Result<Self> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|e| AgentError::Parse {
                message: format!("Failed to set Python language: {}", e),
                path: String::new(),
            })?;
        Ok(Self { parser })
    }

    /// `None` when the source is valid; otherwise the earliest error found
    pub fn check(&mut self, source: &str) -> Option<SyntaxError> {
        let Some(tree) = self.parser.parse(source, None) else {
            return Some(SyntaxError::new(1, 0, SyntaxErrorKind::Invalid));
        };

        let root = tree.root_node();
        let grammar = root.has_error().then(|| {
            let node = first_error(root).unwrap_or(root);
            let kind = if node.is_missing() {
                SyntaxErrorKind::Missing(node.kind().to_string())
            } else {
                SyntaxErrorKind::Invalid
            };
            at_node(node, kind)
        });

        [check_indentation(source), python2_statement(root, source), grammar]
            .into_iter()
            .flatten()
            .min_by_key(|e| (e.line, e.column))
    }
}

fn at_node(node: Node<'_>, kind: SyntaxErrorKind) -> SyntaxError {
    let position = node.start_position();
    SyntaxError::new(position.row + 1, position.column, kind)
}

/// Depth-first search for the first ERROR or MISSING node
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error(child) {
            return Some(found);
        }
    }
    None
}

/// First `print x` / `exec x` statement.
///
/// `print (x)` can also land in these nodes and is valid Python 3, so a
/// statement whose argument opens with a parenthesis is accepted.
fn python2_statement(node: Node<'_>, source: &str) -> Option<SyntaxError> {
    let keyword = match node.kind() {
        "print_statement" => Some("print"),
        "exec_statement" => Some("exec"),
        _ => None,
    };
    if let Some(keyword) = keyword {
        let text = source.get(node.byte_range()).unwrap_or_default();
        let argument = text.strip_prefix(keyword).unwrap_or(text).trim_start();
        if !argument.starts_with('(') {
            return Some(at_node(
                node,
                SyntaxErrorKind::Python2Statement(keyword.to_string()),
            ));
        }
    }

    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .find_map(|child| python2_statement(child, source));
    found
}

// =============================================================================
// Indentation
// =============================================================================

/// Lexical state carried across physical lines
#[derive(Debug, Default)]
struct LineScanner {
    /// Open `(`, `[`, `{`
    depth: usize,
    /// Open string: quote character and whether it is triple-quoted
    string: Option<(char, bool)>,
    /// Previous line ended with a backslash
    continued: bool,
    /// Last character outside strings and comments
    last: Option<char>,
}

impl LineScanner {
    fn in_logical_line(&self) -> bool {
        self.depth > 0 || self.string.is_some() || self.continued
    }

    fn scan(&mut self, line: &str) {
        let chars: Vec<char> = line.chars().collect();
        let mut i = 0;
        self.continued = false;

        while i < chars.len() {
            let c = chars[i];
            if let Some((quote, triple)) = self.string {
                if c == '\\' {
                    if i + 1 == chars.len() {
                        self.continued = !triple;
                    }
                    i += 2;
                    continue;
                }
                if c == quote {
                    if !triple {
                        self.string = None;
                    } else if chars.get(i + 1) == Some(&quote) && chars.get(i + 2) == Some(&quote)
                    {
                        self.string = None;
                        i += 3;
                        continue;
                    }
                }
                i += 1;
                continue;
            }

            match c {
                '#' => break,
                '\'' | '"' => {
                    let triple = chars.get(i + 1) == Some(&c) && chars.get(i + 2) == Some(&c);
                    self.string = Some((c, triple));
                    self.last = Some(c);
                    i += if triple { 3 } else { 1 };
                    continue;
                }
                '(' | '[' | '{' => self.depth += 1,
                ')' | ']' | '}' => self.depth = self.depth.saturating_sub(1),
                '\\' if i + 1 == chars.len() => {
                    self.continued = true;
                    break;
                }
                _ => {}
            }
            if !c.is_whitespace() {
                self.last = Some(c);
            }
            i += 1;
        }

        // An unterminated single-quoted string ends with its line
        if matches!(self.string, Some((_, false))) && !self.continued {
            self.string = None;
        }
    }
}

fn indent_width(line: &str) -> (usize, &str) {
    let mut width = 0;
    for (i, c) in line.char_indices() {
        match c {
            ' ' => width += 1,
            '\t' => width = (width / TAB_SIZE + 1) * TAB_SIZE,
            '\x0c' => width = 0,
            _ => return (width, &line[i..]),
        }
    }
    (width, "")
}

/// Indentation errors the way the CPython tokenizer and parser report them
fn check_indentation(source: &str) -> Option<SyntaxError> {
    let mut scanner = LineScanner::default();
    let mut levels = vec![0usize];
    let mut expect_block = false;
    let mut last_line = 0;

    for (index, raw) in source.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        if scanner.in_logical_line() {
            scanner.scan(line);
        } else {
            let (width, rest) = indent_width(line);
            if rest.is_empty() || rest.starts_with('#') {
                continue;
            }
            last_line = line_no;

            let top = levels.last().copied().unwrap_or(0);
            if width > top {
                if !expect_block {
                    return Some(SyntaxError::new(
                        line_no,
                        width,
                        SyntaxErrorKind::UnexpectedIndent,
                    ));
                }
                levels.push(width);
            } else if expect_block {
                return Some(SyntaxError::new(
                    line_no,
                    width,
                    SyntaxErrorKind::ExpectedIndent,
                ));
            } else if width < top {
                while levels.last().is_some_and(|&level| level > width) {
                    levels.pop();
                }
                if levels.last() != Some(&width) {
                    return Some(SyntaxError::new(
                        line_no,
                        width,
                        SyntaxErrorKind::UnindentMismatch,
                    ));
                }
            }

            scanner.last = None;
            scanner.scan(rest);
        }

        if !scanner.in_logical_line() {
            expect_block = scanner.last == Some(':');
        }
    }

    expect_block.then(|| SyntaxError::new(last_line + 1, 0, SyntaxErrorKind::ExpectedIndent))
}
