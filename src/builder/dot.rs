/*!
A reader for graphs written in (a subset of) the dot language.

The subset read is:

```none
graph     := ["strict"] "digraph" [ID] "{" statement* "}"
statement := ID ("->" ID)* attrs* [";"]
           | ID "=" ID [";"]
           | ("graph" | "node" | "edge") attrs* [";"]
attrs     := "[" (ID ["=" ID] [","|";"])* "]"
```

Where an ID is a name (letters, digits, `_` and `.`), a number, or a quoted string.
Comments may be written with `//` or `/* … */`, and lines beginning with `#` are skipped.

- A statement with a single ID declares a vertex, and the attributes `initial` and `final` mark the vertex as the source or target, unless given the value `0` or `false`.
  The attribute `label` sets the name of the vertex, though the vertex is still referred to by its ID.
- A statement with a chain of IDs declares an edge between each consecutive pair, and declares any vertex not already declared.
- Any other statement or attribute is read and ignored.

```rust
# use equal_path::structures::graph::{Graph, GraphSource};
let graph = Graph::from_dot_str(r#"
digraph example {
    // The source and target.
    s [initial=1, shape=circle];
    t [final=1];

    s -> "a b" -> t;
    s -> t [label="direct"];
}"#).unwrap();

assert_eq!(graph.name(), "example");
assert_eq!(graph.order(), 3);
assert_eq!(graph.name_of(2), "a b");
assert!(graph.is_source(0) && graph.is_target(1));
assert!(graph.is_edge(0, 2) && graph.is_edge(2, 1) && graph.is_edge(0, 1));
```
*/

use std::io::BufRead;

use crate::{
    misc::log::targets,
    structures::graph::{Graph, GraphBuilder, GraphSource},
    types::err::{self, ErrorKind},
};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Token {
    Id(String),
    Arrow,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    Semicolon,
    Comma,
    Equals,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Arrow => write!(f, "->"),
            Self::OpenBrace => write!(f, "{{"),
            Self::CloseBrace => write!(f, "}}"),
            Self::OpenBracket => write!(f, "["),
            Self::CloseBracket => write!(f, "]"),
            Self::Semicolon => write!(f, ";"),
            Self::Comma => write!(f, ","),
            Self::Equals => write!(f, "="),
        }
    }
}

fn is_id_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.'
}

/// Splits `line` into tokens, noting whether the line ends within a block comment.
fn tokenize_line(
    line: &str,
    line_number: usize,
    in_comment: &mut bool,
    tokens: &mut Vec<(Token, usize)>,
) -> Result<(), err::ParseError> {
    if !*in_comment && line.trim_start().starts_with('#') {
        return Ok(());
    }

    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if *in_comment {
            if c == '*' && chars.peek() == Some(&'/') {
                chars.next();
                *in_comment = false;
            }
            continue;
        }

        match c {
            _ if c.is_whitespace() => {}

            '/' => match chars.next() {
                Some('/') => return Ok(()),
                Some('*') => *in_comment = true,
                _ => {
                    return Err(err::ParseError::Unexpected {
                        line: line_number,
                        found: "/".to_owned(),
                    })
                }
            },

            '-' if chars.peek() == Some(&'>') => {
                chars.next();
                tokens.push((Token::Arrow, line_number));
            }

            '{' => tokens.push((Token::OpenBrace, line_number)),
            '}' => tokens.push((Token::CloseBrace, line_number)),
            '[' => tokens.push((Token::OpenBracket, line_number)),
            ']' => tokens.push((Token::CloseBracket, line_number)),
            ';' => tokens.push((Token::Semicolon, line_number)),
            ',' => tokens.push((Token::Comma, line_number)),
            '=' => tokens.push((Token::Equals, line_number)),

            '"' => {
                let mut id = String::default();
                let mut closed = false;
                while let Some(c) = chars.next() {
                    match c {
                        '"' => {
                            closed = true;
                            break;
                        }
                        '\\' => match chars.next() {
                            Some(escaped) => id.push(escaped),
                            None => break,
                        },
                        _ => id.push(c),
                    }
                }
                if !closed {
                    return Err(err::ParseError::Unterminated(line_number));
                }
                tokens.push((Token::Id(id), line_number));
            }

            _ if is_id_char(c) || c == '-' => {
                let mut id = String::from(c);
                while let Some(next) = chars.peek() {
                    if !is_id_char(*next) {
                        break;
                    }
                    id.push(*next);
                    chars.next();
                }
                if id == "-" {
                    return Err(err::ParseError::Unexpected {
                        line: line_number,
                        found: id,
                    });
                }
                tokens.push((Token::Id(id), line_number));
            }

            _ => {
                return Err(err::ParseError::Unexpected {
                    line: line_number,
                    found: c.to_string(),
                })
            }
        }
    }

    Ok(())
}

/// A cursor through tokens.
struct Parser {
    tokens: Vec<(Token, usize)>,
    index: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index).map(|(token, _)| token)
    }

    fn next(&mut self) -> Result<(Token, usize), err::ParseError> {
        match self.tokens.get(self.index) {
            Some(token) => {
                self.index += 1;
                Ok(token.clone())
            }
            None => Err(err::ParseError::UnexpectedEnd),
        }
    }

    fn expect(&mut self, expected: Token) -> Result<(), err::ParseError> {
        match self.next()? {
            (token, _) if token == expected => Ok(()),
            (token, line) => Err(err::ParseError::Unexpected {
                line,
                found: token.to_string(),
            }),
        }
    }

    fn id(&mut self) -> Result<String, err::ParseError> {
        match self.next()? {
            (Token::Id(id), _) => Ok(id),
            (token, line) => Err(err::ParseError::Unexpected {
                line,
                found: token.to_string(),
            }),
        }
    }

    /// Any number of attribute lists, as (key, value) pairs.
    fn attributes(&mut self) -> Result<Vec<(String, Option<String>)>, err::ParseError> {
        let mut attributes = Vec::default();

        while self.peek() == Some(&Token::OpenBracket) {
            self.next()?;
            loop {
                match self.next()? {
                    (Token::CloseBracket, _) => break,

                    (Token::Comma | Token::Semicolon, _) => {}

                    (Token::Id(key), _) => {
                        let value = match self.peek() {
                            Some(Token::Equals) => {
                                self.next()?;
                                Some(self.id()?)
                            }
                            _ => None,
                        };
                        attributes.push((key, value));
                    }

                    (token, line) => {
                        return Err(err::ParseError::Unexpected {
                            line,
                            found: token.to_string(),
                        })
                    }
                }
            }
        }

        Ok(attributes)
    }
}

/// Whether an attribute set on a vertex holds.
fn flag_holds(value: &Option<String>) -> bool {
    match value.as_deref() {
        None => true,
        Some(value) => !(value == "0" || value.eq_ignore_ascii_case("false")),
    }
}

/// Reads a graph from `reader`, named `fallback` if the graph has no name.
pub fn read_dot(mut reader: impl BufRead, fallback: &str) -> Result<Graph, ErrorKind> {
    let mut buffer = String::with_capacity(1024);
    let mut tokens = Vec::default();
    let mut in_comment = false;
    let mut comment_start = 0;
    let mut line_counter = 0;

    loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => line_counter += 1,
            Err(_) => return Err(err::ParseError::Line(line_counter + 1).into()),
        }

        let was_in_comment = in_comment;
        tokenize_line(&buffer, line_counter, &mut in_comment, &mut tokens)?;
        if in_comment && !was_in_comment {
            comment_start = line_counter;
        }
    }

    if in_comment {
        return Err(err::ParseError::Unterminated(comment_start).into());
    }

    log::trace!(target: targets::PARSE, "{} tokens from {line_counter} lines", tokens.len());

    let mut parser = Parser { tokens, index: 0 };

    if matches!(parser.peek(), Some(Token::Id(id)) if id.eq_ignore_ascii_case("strict")) {
        parser.next()?;
    }
    match parser.next() {
        Ok((Token::Id(id), _)) if id.eq_ignore_ascii_case("digraph") => {}
        _ => return Err(err::ParseError::MissingHeader.into()),
    }

    let name = match parser.peek() {
        Some(Token::Id(_)) => parser.id()?,
        _ => fallback.to_owned(),
    };
    parser.expect(Token::OpenBrace)?;

    let mut builder = GraphBuilder::new(&name);

    loop {
        let (token, line) = parser.next()?;
        let first = match token {
            Token::CloseBrace => break,
            Token::Semicolon => continue,
            Token::Id(id) => id,
            token => {
                return Err(err::ParseError::Unexpected {
                    line,
                    found: token.to_string(),
                }
                .into())
            }
        };

        if ["graph", "node", "edge"]
            .iter()
            .any(|keyword| first.eq_ignore_ascii_case(keyword))
        {
            parser.attributes()?;
            continue;
        }

        if first.eq_ignore_ascii_case("subgraph") {
            return Err(err::ParseError::Unexpected { line, found: first }.into());
        }

        if parser.peek() == Some(&Token::Equals) {
            parser.next()?;
            parser.id()?;
            continue;
        }

        let mut chain = vec![first];
        while parser.peek() == Some(&Token::Arrow) {
            parser.next()?;
            chain.push(parser.id()?);
        }
        let attributes = parser.attributes()?;

        let vertices = chain
            .iter()
            .map(|name| builder.vertex(name))
            .collect::<Vec<_>>();

        match vertices.as_slice() {
            [vertex] => {
                for (key, value) in &attributes {
                    match key.as_str() {
                        "initial" if flag_holds(value) => builder.mark_source(*vertex),
                        "final" if flag_holds(value) => builder.mark_target(*vertex),
                        "label" => {
                            if let Some(label) = value {
                                builder.label(*vertex, label);
                            }
                        }
                        _ => {}
                    }
                }
            }

            _ => {
                for pair in vertices.windows(2) {
                    builder.edge(pair[0], pair[1]);
                }
            }
        }
    }

    if let Some((token, line)) = parser.tokens.get(parser.index) {
        return Err(err::ParseError::Unexpected {
            line: *line,
            found: token.to_string(),
        }
        .into());
    }

    let graph = builder.build();
    log::info!(target: targets::PARSE, "Read graph '{name}' with {} vertices and {} edges", graph.order(), graph.size());
    Ok(graph)
}

impl Graph {
    /// Reads a graph from a string in the dot language, named `G` if the graph has no name.
    pub fn from_dot_str(dot: &str) -> Result<Self, ErrorKind> {
        read_dot(dot.as_bytes(), "G")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_attributes() {
        let graph = Graph::from_dot_str(
            "# a preprocessor line
            strict digraph {
                rankdir = LR; /* a comment
                over lines */
                node [shape=circle];
                a [initial=true]; b [final=1, initial=0]
                a -> b -> c // trailing
                c -> a [weight=-2.5]
            }",
        )
        .unwrap();

        assert_eq!(graph.name(), "G");
        assert_eq!(graph.order(), 3);
        assert!(graph.is_source(0) && !graph.is_source(1));
        assert!(graph.is_target(1));
        assert!(graph.is_edge(0, 1) && graph.is_edge(1, 2) && graph.is_edge(2, 0));
        assert_eq!(graph.size(), 3);
    }

    #[test]
    fn missing_header() {
        assert_eq!(
            Graph::from_dot_str("graph g { a; }").unwrap_err(),
            ErrorKind::Parse(err::ParseError::MissingHeader)
        );
        assert_eq!(
            Graph::from_dot_str("").unwrap_err(),
            ErrorKind::Parse(err::ParseError::MissingHeader)
        );
    }

    #[test]
    fn malformed() {
        assert_eq!(
            Graph::from_dot_str("digraph g {\n a -> ;\n}").unwrap_err(),
            ErrorKind::Parse(err::ParseError::Unexpected {
                line: 2,
                found: ";".to_owned()
            })
        );
        assert_eq!(
            Graph::from_dot_str("digraph g {\n a [label=\"open\n}").unwrap_err(),
            ErrorKind::Parse(err::ParseError::Unterminated(2))
        );
        assert_eq!(
            Graph::from_dot_str("digraph g { /* open").unwrap_err(),
            ErrorKind::Parse(err::ParseError::Unterminated(1))
        );
        assert_eq!(
            Graph::from_dot_str("digraph g { a -> b").unwrap_err(),
            ErrorKind::Parse(err::ParseError::UnexpectedEnd)
        );
        assert!(Graph::from_dot_str("digraph g { a } b").is_err());
    }

    #[test]
    fn repeated_declarations() {
        let graph = Graph::from_dot_str(
            "digraph g { a -> b; a -> b; a [initial=1]; b [final=1]; b [color=red]; }",
        )
        .unwrap();
        assert_eq!(graph.order(), 2);
        assert_eq!(graph.size(), 1);
        assert!(graph.is_source(0) && graph.is_target(1));
    }

    #[test]
    fn labels_name_vertices() {
        let graph = Graph::from_dot_str(
            "digraph {
                0 [ label = \"s\" initial=1 ]
                1 [ label = \"say \\\"t\\\"\" final=1 ]
                0 -> 1 [ label = \"edge\" ]
                2 -> 1
            }",
        )
        .unwrap();

        assert_eq!(graph.order(), 3);
        assert_eq!(graph.name_of(0), "s");
        assert_eq!(graph.name_of(1), "say \"t\"");
        assert_eq!(graph.name_of(2), "2");
        assert!(graph.is_edge(0, 1) && graph.is_edge(2, 1));
    }
}
