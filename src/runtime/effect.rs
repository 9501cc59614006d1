use crate::state::FocusTarget;
use crate::widgets::traits::WidgetAction;

#[derive(Debug, Clone)]
pub enum Effect {
    Action {
        target: FocusTarget,
        action: WidgetAction,
    },
    RequestRender,
}
