use crate::runtime::command::Command;
use crate::runtime::effect::Effect;
use crate::state::{ExitMode, FocusTarget, Session};
use crate::widgets::traits::InteractionResult;

pub struct Reducer;

impl Reducer {
    pub fn reduce(session: &mut Session, command: Command) -> Vec<Effect> {
        match command {
            Command::Exit => {
                session.request_exit(ExitMode::Abort);
                vec![]
            }
            Command::ExportAndQuit => {
                session.request_exit(ExitMode::Export);
                vec![]
            }
            Command::Cancel => {
                if session.close_dialog() {
                    vec![Effect::RequestRender]
                } else {
                    vec![]
                }
            }
            Command::ToggleDialog => {
                session.toggle_dialog();
                vec![Effect::RequestRender]
            }
            // Grid and page commands are inert while the dialog holds focus.
            _ if session.has_dialog() && command.targets_grid() => vec![],
            Command::AddField => {
                session.add_field();
                vec![Effect::RequestRender]
            }
            Command::RemoveField => render_if(session.remove_field()),
            Command::ToggleRequired => {
                session.toggle_required();
                vec![Effect::RequestRender]
            }
            Command::ToggleSearchable => {
                session.toggle_searchable();
                vec![Effect::RequestRender]
            }
            Command::PageBackward => render_if(session.page_backward()),
            Command::PageForward => render_if(session.page_forward()),
            Command::Navigate(direction) => {
                session.navigate(direction);
                vec![Effect::RequestRender]
            }
            Command::InputKey(key) => {
                let (target, result) = session.dispatch_key_to_focused(key);
                collect_effects(target, result)
            }
            Command::TextAction(action) => {
                let (target, result) = session.dispatch_text_action_to_focused(action);
                collect_effects(target, result)
            }
        }
    }
}

impl Command {
    fn targets_grid(&self) -> bool {
        matches!(
            self,
            Self::AddField
                | Self::RemoveField
                | Self::ToggleRequired
                | Self::ToggleSearchable
                | Self::PageBackward
                | Self::PageForward
        )
    }
}

fn render_if(changed: bool) -> Vec<Effect> {
    if changed {
        vec![Effect::RequestRender]
    } else {
        vec![]
    }
}

fn collect_effects(target: FocusTarget, result: InteractionResult) -> Vec<Effect> {
    let mut effects: Vec<Effect> = result
        .actions
        .into_iter()
        .map(|action| Effect::Action { target, action })
        .collect();
    if result.request_render {
        effects.push(Effect::RequestRender);
    }
    effects
}
