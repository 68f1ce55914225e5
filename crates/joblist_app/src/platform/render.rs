use std::io::{self, Write};

use joblist_core::{ItemKey, LoadPhase, LoaderSnapshot};

pub const EMPTY_TEXT: &str = "No jobs available.";
pub const HELP_TEXT: &str = "Enter/m: more   r: retry   q: quit";

/// Appends newly arrived cards and a status line. The list is append-only, so
/// only rows past the last rendered position are written.
#[derive(Debug, Default)]
pub struct Renderer {
    rendered_rows: usize,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, view: &LoaderSnapshot, out: &mut impl Write) -> io::Result<()> {
        for row in view.rows().into_iter().skip(self.rendered_rows) {
            let key = match &row.key {
                ItemKey::Id(id) => format!("#{id}"),
                ItemKey::Position(index) => format!("({})", index + 1),
            };
            writeln!(out, "{key:>8}  {}", row.title)?;
            writeln!(out, "{:>8}  {}", "", row.place)?;
        }
        self.rendered_rows = view.items.len();

        match view.phase {
            LoadPhase::Loading => writeln!(out, "Loading page {}...", view.next_page)?,
            LoadPhase::Errored => {
                let message = view.error.as_deref().unwrap_or_default();
                writeln!(out, "{message} Press r to retry.")?;
                if view.items.is_empty() {
                    writeln!(out, "{EMPTY_TEXT}")?;
                }
            }
            LoadPhase::Exhausted if view.items.is_empty() => writeln!(out, "{EMPTY_TEXT}")?,
            LoadPhase::Exhausted => writeln!(out, "End of list ({} jobs).", view.items.len())?,
            LoadPhase::Idle if view.is_empty_and_settled() => writeln!(out, "{EMPTY_TEXT}")?,
            LoadPhase::Idle => writeln!(out, "{HELP_TEXT}")?,
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use joblist_core::{update, Item, LoaderState, Msg, PageFailure, PageResult};
    use pretty_assertions::assert_eq;

    fn render_to_string(renderer: &mut Renderer, state: &LoaderState) -> String {
        let mut out = Vec::new();
        renderer.render(&state.view(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_new_rows_once_then_status() {
        let mut renderer = Renderer::new();
        let (state, _) = update(LoaderState::new(), Msg::LoadMoreRequested);
        assert_eq!(render_to_string(&mut renderer, &state), "Loading page 1...\n");

        let (state, _) = update(
            state,
            Msg::PageLoaded {
                page: 1,
                result: PageResult::new(vec![
                    Item::new(Some("7".into()), "Painter", Some("Agra".into())),
                    Item::new(None, "Driver", None),
                ]),
            },
        );
        assert_eq!(
            render_to_string(&mut renderer, &state),
            format!(
                "      #7  Painter\n          Agra\n     (2)  Driver\n          Location not specified\n{HELP_TEXT}\n"
            )
        );
        assert_eq!(render_to_string(&mut renderer, &state), format!("{HELP_TEXT}\n"));
    }

    #[test]
    fn renders_error_with_retry_hint() {
        let mut renderer = Renderer::new();
        let (state, _) = update(LoaderState::new(), Msg::LoadMoreRequested);
        let (state, _) = update(
            state,
            Msg::PageFailed {
                page: 1,
                failure: PageFailure::Network,
            },
        );

        assert_eq!(
            render_to_string(&mut renderer, &state),
            format!("Failed to fetch jobs. Press r to retry.\n{EMPTY_TEXT}\n")
        );
    }

    #[test]
    fn error_after_items_keeps_list_without_placeholder() {
        let mut renderer = Renderer::new();
        let (state, _) = update(LoaderState::new(), Msg::LoadMoreRequested);
        let (state, _) = update(
            state,
            Msg::PageLoaded {
                page: 1,
                result: PageResult::new(vec![Item::new(Some("1".into()), "Mason", None)]),
            },
        );
        render_to_string(&mut renderer, &state);
        let (state, _) = update(state, Msg::LoadMoreRequested);
        let (state, _) = update(
            state,
            Msg::PageFailed {
                page: 2,
                failure: PageFailure::HttpStatus(502),
            },
        );

        assert_eq!(
            render_to_string(&mut renderer, &state),
            "Failed to fetch jobs. Press r to retry.\n"
        );
    }

    #[test]
    fn renders_empty_placeholder_when_first_page_is_empty() {
        let mut renderer = Renderer::new();
        let (state, _) = update(LoaderState::new(), Msg::LoadMoreRequested);
        let (state, _) = update(
            state,
            Msg::PageLoaded {
                page: 1,
                result: PageResult::default(),
            },
        );

        assert_eq!(render_to_string(&mut renderer, &state), format!("{EMPTY_TEXT}\n"));
    }
}
