use crate::engine::Engine;

const COMMAND_DELIMITER: char = '\t';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search { query: String },
    Diff { protein_a: String, protein_b: String },
    Mode { protein: String },
    /// Unrecognised command name or wrong number of fields
    Unknown { name: String },
}

impl ShellCommand {
    pub fn preview(&self) -> String {
        match self {
            Self::Search { query } => format!("search for chains containing '{query}'"),
            Self::Diff {
                protein_a,
                protein_b,
            } => format!("difference between '{protein_a}' and '{protein_b}'"),
            Self::Mode { protein } => format!("most frequent amino acid of '{protein}'"),
            Self::Unknown { name } if name.is_empty() => "empty command".to_string(),
            Self::Unknown { name } => format!("unrecognised command '{name}'"),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown { .. })
    }
}

pub fn shell_help_text() -> &'static str {
    "GeneSearch commands (fields separated by TAB):\n\
search\tENCODED_QUERY\n\
diff\tPROTEIN_A\tPROTEIN_B\n\
mode\tPROTEIN\n\
ENCODED_QUERY is run-length encoded, e.g. 3A2BC"
}

pub fn parse_shell_tokens(tokens: &[&str]) -> ShellCommand {
    let Some(cmd) = tokens.first() else {
        return ShellCommand::Unknown {
            name: String::new(),
        };
    };
    match (*cmd, tokens.len()) {
        ("search", 2) => ShellCommand::Search {
            query: tokens[1].to_string(),
        },
        ("diff", 3) => ShellCommand::Diff {
            protein_a: tokens[1].trim().to_string(),
            protein_b: tokens[2].trim().to_string(),
        },
        ("mode", 2) => ShellCommand::Mode {
            protein: tokens[1].trim().to_string(),
        },
        (other, _) => ShellCommand::Unknown {
            name: other.to_string(),
        },
    }
}

pub fn parse_shell_line(line: &str) -> ShellCommand {
    let tokens: Vec<&str> = line.split(COMMAND_DELIMITER).collect();
    parse_shell_tokens(&tokens)
}

pub fn execute_shell_command<E: Engine + ?Sized>(engine: &E, command: &ShellCommand) -> String {
    match command {
        ShellCommand::Search { query } => engine.search(query),
        ShellCommand::Diff {
            protein_a,
            protein_b,
        } => engine.diff(protein_a, protein_b),
        ShellCommand::Mode { protein } => engine.mode(protein),
        ShellCommand::Unknown { .. } => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{engine::GeneEngine, record_store::RecordStore};

    #[test]
    fn parse_known_commands() {
        assert_eq!(
            parse_shell_line("search\t2A B"),
            ShellCommand::Search {
                query: "2A B".to_string()
            }
        );
        assert_eq!(
            parse_shell_line("diff\t ProtA \tProtB "),
            ShellCommand::Diff {
                protein_a: "ProtA".to_string(),
                protein_b: "ProtB".to_string()
            }
        );
        assert_eq!(
            parse_shell_line("mode\tProtA"),
            ShellCommand::Mode {
                protein: "ProtA".to_string()
            }
        );
    }

    #[test]
    fn parse_wrong_arity_is_unknown() {
        let cmd = parse_shell_line("diff\tProtA");
        assert_eq!(
            cmd,
            ShellCommand::Unknown {
                name: "diff".to_string()
            }
        );
        assert!(!cmd.is_known());
        assert!(!parse_shell_line("mode\tA\tB").is_known());
        assert!(!parse_shell_line("search 3A").is_known());
        assert!(!parse_shell_line("").is_known());
        assert!(!parse_shell_line("Search\tA").is_known());
    }

    #[test]
    fn execute_unknown_is_empty() {
        let store = RecordStore::from_lines(["H. sapiens\tProtA\t2A2B2C"]);
        let engine = GeneEngine::new(&store);
        let cmd = parse_shell_line("translate\tProtA");
        assert_eq!(execute_shell_command(&engine, &cmd), "");
        assert_eq!(cmd.preview(), "unrecognised command 'translate'");
    }

    #[test]
    fn execute_dispatches_to_engine() {
        let store = RecordStore::from_lines(["H. sapiens\tProtA\t2A3B2C"]);
        let engine = GeneEngine::new(&store);
        let run = |line: &str| execute_shell_command(&engine, &parse_shell_line(line));
        assert_eq!(run("search\t3B"), "H. sapiens ProtA\n");
        assert_eq!(run("mode\tProtA "), "amino-acid occurs: B 3");
        assert_eq!(run("diff\tProtA\tProtA"), "amino-acids difference: 0");
    }
}
