use crate::runtime::command::Command;
use crate::runtime::effect::Effect;
use crate::runtime::key_bindings::KeyBindings;
use crate::runtime::reducer::Reducer;
use crate::state::Session;
use crate::terminal::{Terminal, TerminalEvent};
use crate::ui::renderer::Renderer;
use std::io;
use std::time::Duration;

const POLL_TIMEOUT: Duration = Duration::from_millis(250);

pub struct Runtime {
    session: Session,
    terminal: Terminal,
    key_bindings: KeyBindings,
    renderer: Renderer,
}

impl Runtime {
    pub fn new(session: Session, terminal: Terminal) -> Self {
        Self {
            session,
            terminal,
            key_bindings: KeyBindings::new(),
            renderer: Renderer::default(),
        }
    }

    /// Runs the event loop until an exit is requested. The terminal is
    /// restored even when the loop fails.
    pub fn run(&mut self) -> io::Result<()> {
        self.terminal.enter()?;

        let run_result = (|| -> io::Result<()> {
            self.render()?;

            while !self.session.should_exit() {
                let event = self.terminal.poll_event(POLL_TIMEOUT)?;
                self.dispatch_event(event)?;
            }

            Ok(())
        })();

        let exit_result = self.terminal.exit();
        run_result.and(exit_result)
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    fn dispatch_event(&mut self, event: TerminalEvent) -> io::Result<()> {
        match event {
            TerminalEvent::Resize(size) => {
                self.terminal.set_size(size);
                self.render()
            }
            TerminalEvent::Key(key) => {
                let command = self
                    .key_bindings
                    .resolve(key)
                    .unwrap_or(Command::InputKey(key));
                self.process_command(command)
            }
            TerminalEvent::Tick => Ok(()),
        }
    }

    fn process_command(&mut self, command: Command) -> io::Result<()> {
        tracing::trace!(?command, "command");
        let effects = Reducer::reduce(&mut self.session, command);
        self.apply_effects(effects)
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) -> io::Result<()> {
        let mut render_requested = false;

        for effect in effects {
            match effect {
                Effect::Action { target, action } => {
                    render_requested |= self.session.apply_action(target, action);
                }
                Effect::RequestRender => {
                    render_requested = true;
                }
            }
        }

        if render_requested && !self.session.should_exit() {
            self.render()?;
        }

        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let frame = self.renderer.render(&self.session, self.terminal.size());
        self.terminal.render_frame(&frame)
    }
}
