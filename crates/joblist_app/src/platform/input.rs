use joblist_core::Msg;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    Dispatch(Msg),
    Help,
    Quit,
}

/// Maps one line of terminal input to a command. An empty line stands in for
/// scrolling past the end of the list.
pub fn parse_command(line: &str) -> UserCommand {
    match line.trim().to_ascii_lowercase().as_str() {
        "" | "m" | "more" => UserCommand::Dispatch(Msg::LoadMoreRequested),
        "r" | "retry" => UserCommand::Dispatch(Msg::RetryRequested),
        "q" | "quit" | "exit" => UserCommand::Quit,
        _ => UserCommand::Help,
    }
}
