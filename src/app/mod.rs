mod window;

pub use window::WindowConfig;

use std::ffi::{CStr, CString};
use color_eyre::eyre::eyre;
use color_eyre::{Report, Result};
use raw_window_handle::HasDisplayHandle;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};
use crate::context::config::ContextConfig;
use crate::context::vk::AshApi;
use crate::context::GraphicsContext;

pub struct App {
    config: ContextConfig,
    window_config: WindowConfig,

    // Dropped in declaration order: the context goes before the window
    context: Option<GraphicsContext<AshApi>>,
    window: Option<Window>,

    // State
    error: Option<Report>,
    close_requested: bool,
}

impl App {
    pub fn new(
        config: ContextConfig,
        window_config: WindowConfig,
    ) -> Self {
        Self {
            config,
            window_config,
            context: None,
            window: None,
            error: None,
            close_requested: false,
        }
    }

    /// Runs the event loop until the window is closed. Returns the initialization error, if any.
    pub fn run(mut self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self)?;

        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn init_context(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let platform_extensions = required_platform_extensions(event_loop)?;
        log::debug!("Platform instance extensions: {:?}", platform_extensions);

        // Stored before initializing, so a partially built chain is still released on exit
        let context = self.context.insert(GraphicsContext::new(AshApi::load()?));
        context.initialize(&self.config, &platform_extensions)?;

        let queue = context
            .graphics_queue()
            .ok_or_else(|| eyre!("Context initialized without a graphics queue"))?;
        log::info!(
            "Graphics queue family {} on {} (compute: {}, transfer: {})",
            queue.family.index,
            context.adapter_info().map_or("<unknown>", |info| info.name.as_str()),
            queue.family.supports_compute(),
            queue.family.supports_transfer(),
        );

        Ok(())
    }

    fn shutdown(&mut self) {
        if let Some(mut context) = self.context.take() {
            context.shutdown();
        }
        self.window = None;
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            match event_loop.create_window(self.window_config.attributes()) {
                Ok(window) => self.window = Some(window),
                Err(err) => {
                    self.error = Some(eyre!("Failed to create window: {}", err));
                    event_loop.exit();
                    return;
                }
            }
        }

        if self.context.is_none() {
            if let Err(err) = self.init_context(event_loop) {
                log::error!("{}", err);
                self.error = Some(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.window.as_ref().map(|w| w.id()) != Some(window_id) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                self.close_requested = true;
            }
            WindowEvent::KeyboardInput {
                event:
                KeyEvent {
                    logical_key: Key::Named(NamedKey::Escape),
                    state: ElementState::Pressed,
                    ..
                },
                ..
            } => {
                self.close_requested = true;
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.close_requested {
            event_loop.exit();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}

fn required_platform_extensions(event_loop: &ActiveEventLoop) -> Result<Vec<CString>> {
    let display_handle = event_loop.display_handle()?.as_raw();
    Ok(ash_window::enumerate_required_extensions(display_handle)?
        .iter()
        .map(|ext| unsafe { CStr::from_ptr(*ext) }.to_owned())
        .collect())
}
