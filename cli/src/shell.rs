//! Input parsing for the CLI: link arguments and interactive shell commands

use std::str::FromStr;

/// A link given on the command line as `FROM:TO[:COLOUR]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkSpec {
    pub from: u32,
    pub to: u32,
    pub colour: u32,
}

impl FromStr for LinkSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let (from, to, colour) = match parts.as_slice() {
            [from, to] => (*from, *to, "0"),
            [from, to, colour] => (*from, *to, *colour),
            _ => return Err(format!("expected FROM:TO[:COLOUR], got '{}'", s)),
        };
        Ok(LinkSpec {
            from: parse_number(from, "station")?,
            to: parse_number(to, "station")?,
            colour: parse_number(colour, "colour")?,
        })
    }
}

/// One line of input in the interactive shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Route { from: u32, to: u32 },
    Critical { root: Option<u32> },
    InsertLink(LinkSpec),
    DeleteLink(LinkSpec),
    InsertStation(u32),
    Edges,
    Components,
    Help,
    Quit,
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&head, args)) = words.split_first() else {
            return Err("empty command".to_string());
        };

        match (head, args) {
            (":quit" | ":exit" | ":q" | "0", []) => Ok(ShellCommand::Quit),
            (":help" | ":h", []) => Ok(ShellCommand::Help),
            ("route" | "1", [from, to]) => Ok(ShellCommand::Route {
                from: parse_number(from, "station")?,
                to: parse_number(to, "station")?,
            }),
            ("critical" | "2", []) => Ok(ShellCommand::Critical { root: None }),
            ("critical" | "2", [root]) => Ok(ShellCommand::Critical {
                root: Some(parse_number(root, "station")?),
            }),
            ("delete" | "3", [from, to, colour]) => Ok(ShellCommand::DeleteLink(LinkSpec {
                from: parse_number(from, "station")?,
                to: parse_number(to, "station")?,
                colour: parse_number(colour, "colour")?,
            })),
            ("insert" | "4", [from, to, rest @ ..]) if rest.len() <= 1 => {
                Ok(ShellCommand::InsertLink(LinkSpec {
                    from: parse_number(from, "station")?,
                    to: parse_number(to, "station")?,
                    colour: match rest.first() {
                        Some(colour) => parse_number(colour, "colour")?,
                        None => 0,
                    },
                }))
            }
            ("station", [name]) => Ok(ShellCommand::InsertStation(parse_number(name, "station")?)),
            ("edges", []) => Ok(ShellCommand::Edges),
            ("components", []) => Ok(ShellCommand::Components),
            _ => Err(format!("unrecognized command '{}' (try :help)", line.trim())),
        }
    }
}

fn parse_number(value: &str, what: &str) -> Result<u32, String> {
    value
        .parse()
        .map_err(|_| format!("invalid {} '{}': expected a non-negative integer", what, value))
}
