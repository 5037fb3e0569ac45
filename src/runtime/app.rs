use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Ime, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::ModifiersState;
use winit::window::{Window, WindowId};

use labelfast::config::AppConfig;
use labelfast::effects::{Dispatcher, Flow, LogSink};
use labelfast::geometry::WindowLayout;
use labelfast::keymap::{keystroke_from_winit, load_default_keymap, Keymap, Modifiers};
use labelfast::messages::{AppMsg, EditMsg, Msg};
use labelfast::model::AppModel;
use labelfast::SentencePair;

use super::input::{click_msgs, key_msgs, pointer_target, text_msgs, PointerTarget};
use crate::view::{Renderer, ViewState};

const DOUBLE_CLICK_TIME: Duration = Duration::from_millis(300);

pub struct App {
    model: AppModel,
    keymap: Keymap,
    dispatcher: Dispatcher<LogSink>,
    view: ViewState,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    modifiers: ModifiersState,
    mouse_position: Option<(f64, f64)>,
    last_click_time: Instant,
    last_click_target: Option<PointerTarget>,
    /// Whether the window currently accepts input method text
    ime_allowed: bool,
    /// Startup failure inside the event loop, reported once it exits
    error: Option<anyhow::Error>,
}

impl App {
    pub fn new(pairs: Vec<SentencePair>, start_index: usize, config: AppConfig) -> Self {
        let (width, height) = (config.window_width, config.window_height);
        let model = AppModel::new(width, height, pairs, start_index, config);
        let keymap = Keymap::with_bindings(load_default_keymap());
        let view = ViewState::new(WindowLayout::compute(
            width as f32,
            height as f32,
            model.line_height as f32,
        ));

        Self {
            model,
            keymap,
            dispatcher: Dispatcher::new(LogSink),
            view,
            renderer: None,
            window: None,
            context: None,
            modifiers: ModifiersState::empty(),
            mouse_position: None,
            last_click_time: Instant::now(),
            last_click_target: None,
            ime_allowed: false,
            error: None,
        }
    }

    /// The error that stopped the event loop, if any
    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title("LabelFast")
            .with_inner_size(LogicalSize::new(
                self.model.config.window_width,
                self.model.config.window_height,
            ));

        let window = Rc::new(event_loop.create_window(window_attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow!("Failed to create graphics context: {}", e))?;
        let renderer = Renderer::new(Rc::clone(&window), &context, &self.model.config)?;

        let size = window.inner_size();
        self.model.window_size = (size.width, size.height);
        self.model.line_height = renderer.line_height();
        self.model.set_char_width(renderer.char_width());
        self.view.layout = WindowLayout::compute(
            size.width as f32,
            size.height as f32,
            self.model.line_height as f32,
        );

        self.renderer = Some(renderer);
        self.window = Some(window);
        self.context = Some(context);
        Ok(())
    }

    /// Run messages in order; stops early on quit
    fn dispatch_all(&mut self, msgs: Vec<Msg>) -> Flow {
        for msg in msgs {
            if self.dispatcher.dispatch(&mut self.model, msg, &mut self.view) == Flow::Quit {
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Flow {
        match event {
            WindowEvent::Resized(size) => {
                self.dispatch_all(vec![Msg::App(AppMsg::Resize(size.width, size.height))])
            }
            WindowEvent::ModifiersChanged(mods) => {
                self.modifiers = mods.state();
                Flow::Continue
            }
            WindowEvent::Focused(false) => self.dispatch_all(vec![Msg::Edit(EditMsg::FocusLost)]),
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                let keystroke =
                    keystroke_from_winit(&event.logical_key, event.physical_key, self.modifiers);
                let mods = Modifiers::new(
                    self.modifiers.control_key(),
                    self.modifiers.shift_key(),
                    self.modifiers.alt_key(),
                    self.modifiers.super_key(),
                );
                let msgs = key_msgs(
                    &self.keymap,
                    &self.model,
                    keystroke,
                    mods,
                    event.text.as_deref(),
                );
                self.dispatch_all(msgs)
            }
            WindowEvent::Ime(Ime::Commit(text)) => {
                let msgs = text_msgs(&self.model, text);
                self.dispatch_all(msgs)
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_position = Some((position.x, position.y));
                Flow::Continue
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let Some((x, y)) = self.mouse_position else {
                    return Flow::Continue;
                };
                let target = pointer_target(&self.model, &self.view, x as f32, y as f32);

                let now = Instant::now();
                let double_click = matches!(target, PointerTarget::Chip(_))
                    && self.last_click_target == Some(target)
                    && now.duration_since(self.last_click_time) < DOUBLE_CLICK_TIME;
                self.last_click_time = now;
                // A double click starts a fresh pair
                self.last_click_target = if double_click { None } else { Some(target) };

                let msgs = click_msgs(&self.model, target, double_click);
                self.dispatch_all(msgs)
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * self.model.line_height as f32 * 2.0,
                    MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
                };
                if dy != 0.0 && !self.model.session.is_completed() {
                    self.view.scroll_by(dy);
                }
                Flow::Continue
            }
            WindowEvent::RedrawRequested => {
                if let Some(renderer) = &mut self.renderer {
                    if let Err(e) = renderer.render(&self.model, &self.keymap, &mut self.view) {
                        tracing::error!("Render error: {}", e);
                    }
                }
                Flow::Continue
            }
            _ => Flow::Continue,
        }
    }

    /// Input methods are only enabled while a word is being edited
    fn sync_ime(&mut self) {
        let editing = self.model.session.is_editing();
        if editing == self.ime_allowed {
            return;
        }
        if let Some(window) = &self.window {
            window.set_ime_allowed(editing);
            self.ime_allowed = editing;
        }
    }

    fn request_redraw_if_needed(&mut self) {
        if self.view.take_redraw() {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            self.error = Some(e);
            event_loop.exit();
            return;
        }
        self.request_redraw_if_needed();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(window) = &self.window else {
            return;
        };
        if window_id != window.id() {
            return;
        }

        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        if self.handle_event(&event) == Flow::Quit {
            event_loop.exit();
            return;
        }

        self.sync_ime();
        self.request_redraw_if_needed();
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);

        if self.dispatcher.flush_deferred(&mut self.model, &mut self.view) == Flow::Quit {
            event_loop.exit();
            return;
        }
        self.sync_ime();
        self.request_redraw_if_needed();
    }
}
