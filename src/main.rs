use chrono::Local;
use eframe::{App, Frame, CreationContext, egui};
use egui::{Ui, ScrollArea, RichText, Layout, Align};
use log::{error, info};

mod controller;
mod countdown;
mod dial;
mod exercises;
mod models;
use controller::{Controller, DisplayMode, PRESET_MINUTES, shortcut_for};
use dial::DialStyle;

const APP_NAME: &str = "Pauskollen";
const WEBSITE: &str = "https://github.com/yeager/pauskollen";

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting {} {}", APP_NAME, env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([500.0, 600.0])
            .with_title(APP_NAME),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(|cc| match PauseApp::new(cc) {
            Ok(app) => Ok(Box::new(app)),
            Err(e) => {
                error!("Failed to load exercises: {}", e);
                Err(format!("Failed to load exercises: {}", e).into())
            }
        }),
    )
}

struct PauseApp {
    controller: Controller,
    dial_style: DialStyle,
    show_about: bool,
}

impl PauseApp {
    fn new(_cc: &CreationContext) -> Result<Self, models::CatalogError> {
        let catalog = exercises::builtin_catalog()?;
        Ok(PauseApp {
            controller: Controller::new(catalog),
            dial_style: DialStyle::default(),
            show_about: false,
        })
    }
}

impl App for PauseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let now = Local::now();

        let shortcuts: Vec<_> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key { key, pressed: true, repeat: false, .. } => shortcut_for(*key),
                    _ => None,
                })
                .collect()
        });
        for shortcut in shortcuts {
            self.controller.apply_shortcut(shortcut, now);
        }

        self.controller.poll(now);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let mode = self.controller.display_mode;
                if ui.selectable_label(mode == DisplayMode::Timer, "⏱ Timer").clicked() {
                    self.controller.display_mode = DisplayMode::Timer;
                }
                if ui.selectable_label(mode == DisplayMode::Exercises, "🧘 Exercises").clicked() {
                    self.controller.display_mode = DisplayMode::Exercises;
                }
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.menu_button("☰", |ui| {
                        if ui.button("About").clicked() {
                            self.show_about = true;
                            ui.close_menu();
                        }
                    });
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.with_layout(Layout::top_down(Align::Center), |ui| {
                ui.add_space(24.0);
                match self.controller.display_mode {
                    DisplayMode::Timer => self.show_timer_display(ui, now),
                    DisplayMode::Exercises => self.show_exercises_display(ui, now),
                }
            });
        });

        self.show_about_window(ctx);

        if let Some(wait) = self.controller.until_next_tick(Local::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}

impl PauseApp {
    fn show_timer_display(&mut self, ui: &mut Ui, now: chrono::DateTime<Local>) {
        dial::paint(ui, self.controller.snapshot(), &self.dial_style);
        ui.add_space(16.0);
        ui.label(
            RichText::new(self.controller.status_text())
                .size(22.0)
                .strong(),
        );

        if let Some(progress) = self.controller.exercise_progress() {
            ui.add_space(8.0);
            if let Some(prompt) = self.controller.exercise_prompt() {
                ui.label(RichText::new(prompt).size(20.0));
            }
            ui.add(egui::ProgressBar::new(progress.fraction).desired_width(300.0));
        }

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            for minutes in PRESET_MINUTES {
                if ui.button(RichText::new(format!("{} min", minutes)).size(18.0)).clicked() {
                    self.controller.select_preset(minutes);
                }
            }
        });

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            let start = egui::Button::new(RichText::new("Start").size(20.0));
            if ui.add_enabled(self.controller.can_start(), start).clicked() {
                self.controller.start(now);
            }
            let stop = egui::Button::new(RichText::new("Stop").size(20.0));
            if ui.add_enabled(self.controller.can_stop(), stop).clicked() {
                self.controller.stop();
            }
            if ui.button(RichText::new("Reset").size(20.0)).clicked() {
                self.controller.reset();
            }
        });
    }

    fn show_exercises_display(&mut self, ui: &mut Ui, now: chrono::DateTime<Local>) {
        ui.label(RichText::new("Pause Exercises").heading().size(28.0).strong());
        ui.add_space(12.0);

        let mut chosen = None;
        ScrollArea::vertical().show(ui, |ui| {
            ui.set_width(ui.available_width());
            for (index, exercise) in self.controller.catalog().iter().enumerate() {
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new(&exercise.icon).size(32.0));
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&exercise.name).size(20.0).strong());
                        ui.label(
                            RichText::new(format!("{} seconds", exercise.total_seconds()))
                                .weak(),
                        );
                    });
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.button("Start").clicked() {
                            chosen = Some(index);
                        }
                    });
                });
                ui.separator();
            }
        });

        if let Some(index) = chosen {
            self.controller.start_exercise(index, now);
        }
    }

    fn show_about_window(&mut self, ctx: &egui::Context) {
        egui::Window::new(format!("About {}", APP_NAME))
            .open(&mut self.show_about)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(APP_NAME).heading().strong());
                    ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                    ui.add_space(8.0);
                    ui.label("Visual timer and regulation exercises for children with ADHD/NPF");
                    ui.add_space(8.0);
                    ui.label("Daniel Nylander");
                    ui.label("License: GPL-3.0");
                    ui.hyperlink(WEBSITE);
                });
            });
    }
}
