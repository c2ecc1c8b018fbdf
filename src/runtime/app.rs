use std::rc::Rc;

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{CursorIcon, Window, WindowId};

use easel::commands::Cmd;
use easel::config::PlaygroundConfig;
use easel::messages::{AppMsg, Msg, PanelMsg, PointerMsg};
use easel::model::{AppModel, Vec2};
use easel::update::update;
use easel::view::{cursor_style, hit_test_ui, CursorStyle, HitTarget, Renderer};

pub struct App {
    model: AppModel,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    /// Last pointer position in logical pixels
    pointer: Option<Vec2>,
    cursor: CursorStyle,
}

impl App {
    pub fn new(config: PlaygroundConfig) -> Self {
        Self {
            model: AppModel::new(config),
            renderer: None,
            window: None,
            context: None,
            pointer: None,
            cursor: CursorStyle::Default,
        }
    }

    fn scale_factor(&self) -> f64 {
        self.window.as_ref().map_or(1.0, |w| w.scale_factor())
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let size = &self.model.config.window;
        let window_attributes = Window::default_attributes()
            .with_title("Easel")
            .with_inner_size(LogicalSize::new(size.width, size.height));

        let window = Rc::new(event_loop.create_window(window_attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create graphics context: {}", e))?;
        let renderer = Renderer::new(Rc::clone(&window), &context)?;

        // The window may not get the requested size; lay out for what it got
        let logical = window.inner_size().to_logical::<f32>(window.scale_factor());
        update(
            &mut self.model,
            Msg::App(AppMsg::Resize(logical.width, logical.height)),
        );

        tracing::info!(
            width = logical.width,
            height = logical.height,
            scale = window.scale_factor(),
            "window created"
        );

        self.renderer = Some(renderer);
        self.window = Some(window);
        self.context = Some(context);
        Ok(())
    }

    /// Refresh the pointer icon for the current hover target and gesture
    fn update_cursor_icon(&mut self) {
        let Some(window) = &self.window else { return };
        let hit = self.pointer.and_then(|p| hit_test_ui(&self.model, p));
        let style = cursor_style(&self.model, hit);
        if style != self.cursor {
            self.cursor = style;
            window.set_cursor(cursor_icon(style));
        }
    }

    fn on_left_press(&mut self) -> Option<Cmd> {
        let pointer = self.pointer?;
        let hit = hit_test_ui(&self.model, pointer);

        let msg = match hit {
            Some(HitTarget::PanelMinimize { handle, .. }) => {
                Msg::Panel(PanelMsg::ToggleMinimize(handle))
            }
            _ => Msg::Pointer(PointerMsg::Down {
                x: pointer.x,
                y: pointer.y,
                origin: hit.and_then(|h| h.origin()),
            }),
        };
        update(&mut self.model, msg)
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    if let Err(e) = renderer.resize(size.width, size.height) {
                        tracing::error!("Resize error: {}", e);
                    }
                }
                let logical = size.to_logical::<f32>(self.scale_factor());
                update(
                    &mut self.model,
                    Msg::App(AppMsg::Resize(logical.width, logical.height)),
                )
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.set_scale_factor(*scale_factor);
                }
                // A Resized event with the new physical size follows
                Some(Cmd::Redraw)
            }
            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f32>(self.scale_factor());
                let pointer = Vec2::new(logical.x, logical.y);
                self.pointer = Some(pointer);

                let cmd = update(
                    &mut self.model,
                    Msg::Pointer(PointerMsg::Move {
                        x: pointer.x,
                        y: pointer.y,
                    }),
                );
                self.update_cursor_icon();
                cmd
            }
            WindowEvent::CursorLeft { .. } => {
                self.pointer = None;
                None
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let cmd = match state {
                    ElementState::Pressed => self.on_left_press(),
                    ElementState::Released => {
                        update(&mut self.model, Msg::Pointer(PointerMsg::Up))
                    }
                };
                self.update_cursor_icon();
                cmd
            }
            WindowEvent::RedrawRequested => {
                if let Some(renderer) = &mut self.renderer {
                    if let Err(e) = renderer.render(&self.model) {
                        tracing::error!("Render error: {}", e);
                    }
                }
                None
            }
            _ => None,
        }
    }
}

fn cursor_icon(style: CursorStyle) -> CursorIcon {
    match style {
        CursorStyle::Default => CursorIcon::Default,
        CursorStyle::Grab => CursorIcon::Grab,
        CursorStyle::Grabbing => CursorIcon::Grabbing,
        CursorStyle::NwseResize => CursorIcon::NwseResize,
        CursorStyle::EResize => CursorIcon::EResize,
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            tracing::error!("Failed to initialize window: {:#}", e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let is_ours = self.window.as_ref().is_some_and(|w| w.id() == window_id);
        if !is_ours {
            return;
        }

        if matches!(event, WindowEvent::CloseRequested) {
            tracing::info!("close requested");
            event_loop.exit();
            return;
        }

        let needs_redraw = self
            .handle_event(&event)
            .is_some_and(|cmd| cmd.needs_redraw());
        if needs_redraw {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Nothing animates; sleep until the next input
        event_loop.set_control_flow(ControlFlow::Wait);
    }
}
