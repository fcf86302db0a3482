use std::sync::mpsc;

use carousel_core::config::CarouselConfig;
use carousel_core::error::Result;
use carousel_core::input::{Direction, InputEvent};
use carousel_core::render::present;
use carousel_core::session::Session;
use carousel_core::source::ImageList;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{TrackState, UIState};
use crate::workers::{self, LoadGeneration};

pub struct CarouselApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub load_generation: LoadGeneration,
    pub config: CarouselConfig,
    pub session: Option<Session>,
    pub track: TrackState,
    pub ui_state: UIState,
    pub show_about: bool,
}

impl CarouselApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let load_generation = LoadGeneration::default();
        let cmd_tx = workers::spawn_worker(result_tx.clone(), ctx.clone(), load_generation.clone());

        let app = Self {
            cmd_tx,
            result_tx,
            result_rx,
            load_generation,
            config: CarouselConfig::default(),
            session: None,
            track: TrackState::default(),
            ui_state: UIState::default(),
            show_about: false,
        };
        app.load_source(app.config.source.location.clone());
        app
    }

    /// Ask the worker to fetch `location`, replacing the current session.
    /// Downloads still queued for the previous source are skipped.
    pub fn load_source(&self, location: String) {
        self.send_command(WorkerCommand::LoadSource {
            generation: self.load_generation.advance(),
            location,
            allowed_hosts: self.config.allowed_hosts.clone(),
        });
    }

    /// Switch to `config` and reload its source so the session matches it.
    pub fn apply_config(&mut self, config: CarouselConfig) {
        self.config = config;
        self.load_source(self.config.source.location.clone());
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    /// Route one input event to the session and push any resulting view.
    pub fn dispatch(&mut self, event: InputEvent) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Some(view) = session.dispatch(event) {
            present(&view, &mut self.track);
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::LoadStarted {
                    generation,
                    source_name,
                } => {
                    self.ui_state.reset_for(generation);
                    self.track = TrackState::default();
                    self.ui_state.add_log(format!("Loading {source_name}..."));
                    self.session = Some(Session::begin(source_name, self.config.swipe.clone()));
                }
                WorkerResult::LoadComplete { generation, result } => {
                    if generation == self.ui_state.generation {
                        self.complete_load(result);
                    }
                }
                WorkerResult::SlideLoaded {
                    generation,
                    index,
                    image,
                } => {
                    if generation != self.ui_state.generation {
                        continue;
                    }
                    let texture =
                        ctx.load_texture(format!("slide-{index}"), image, egui::TextureOptions::LINEAR);
                    self.track.set_loaded(index, texture);
                    self.ui_state.slides_settled += 1;
                }
                WorkerResult::SlideFailed {
                    generation,
                    index,
                    reason,
                } => {
                    if generation != self.ui_state.generation {
                        continue;
                    }
                    self.track.set_failed(index);
                    self.ui_state.slides_settled += 1;
                    self.ui_state.add_log(format!("Image {} failed: {reason}", index + 1));
                }
                WorkerResult::ConfigImported { config } => {
                    self.ui_state.add_log(format!(
                        "Config imported (source: {}, hosts: {})",
                        config.source.location, config.allowed_hosts
                    ));
                    self.apply_config(config);
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    fn complete_load(&mut self, result: Result<ImageList>) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Err(e) = &result {
            self.ui_state.add_log(format!("ERROR: {e}"));
        }
        if !session.complete(result) {
            return;
        }
        session.render(&mut self.track);

        let generation = self.ui_state.generation;
        for slide in &self.track.slides {
            let _ = self.cmd_tx.send(WorkerCommand::FetchSlide {
                generation,
                index: slide.spec.index,
                url: slide.spec.url.clone(),
            });
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let keys = [
            (egui::Key::ArrowLeft, Direction::Left),
            (egui::Key::ArrowRight, Direction::Right),
            (egui::Key::ArrowUp, Direction::Up),
            (egui::Key::ArrowDown, Direction::Down),
        ];
        for (key, direction) in keys {
            if ctx.input(|i| i.key_pressed(key)) {
                self.dispatch(InputEvent::Key(direction));
            }
        }
    }
}

impl eframe::App for CarouselApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        self.handle_keys(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::navigation::show(ctx, self);
        panels::viewport::show(ctx, self);

        if self.show_about {
            egui::Window::new("About Carousel")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Carousel");
                        ui.label("Image slideshow viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
