//! Desktop preview app for fibonacci-reel patterns
//!
//! Renders the spiral board in a window. The two hardware buttons are
//! simulated through a release latch, exactly like the debouncer interrupts
//! on the device.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use fibonacci_reel::{
    Button, Command, Direction, Instant, OutputConfig, OutputFilters, PatternId, Rand16,
    ReelConfig, ReleaseLatch, Renderer, Rgb, color::BLACK, filter::UNCORRECTED,
};

/// Number of pixels on the simulated board
const LED_COUNT: usize = 64;

/// Diameter of each LED dot in pixels
const LED_SIZE: f32 = 14.0;

/// Button edges shared between the UI and the renderer
static BUTTONS: ReleaseLatch = ReleaseLatch::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    /// Pixels at their spiral positions
    Spiral,
    /// Pixels in strip order, wrapped to the window width
    Strip,
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 760.0])
            .with_title("Fibonacci Reel Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "fibonacci-reel-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    renderer: Renderer<Rand16, LED_COUNT>,
    filters: OutputFilters,
    output: [Rgb; LED_COUNT],
    /// Color correction toggle, rebuilds `filters` when changed
    corrected: bool,

    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    led_size: f32,
    layout: Layout,
}

impl PreviewApp {
    fn new() -> Self {
        let output_config = OutputConfig::default();
        Self {
            renderer: Renderer::new(&ReelConfig::default(), Rand16::default(), Instant::from_millis(0)),
            filters: OutputFilters::new(&output_config),
            output: [BLACK; LED_COUNT],
            corrected: true,
            t_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            led_size: LED_SIZE,
            layout: Layout::Spiral,
        }
    }

    fn output_config(&self) -> OutputConfig {
        if self.corrected {
            OutputConfig::default()
        } else {
            OutputConfig {
                color_correction: UNCORRECTED,
                ..OutputConfig::default()
            }
        }
    }

    /// Step the pattern the way the pattern button does, in either direction
    fn step_pattern(&mut self, direction: Direction) {
        let _ = self.renderer.push_command(Command::DisableAutoplay);
        let _ = self
            .renderer
            .push_command(Command::AdvancePattern(direction));
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                delta_ms_f64.max(0.0)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }

    /// Render one frame and run it through the output filters
    fn render_frame(&mut self) -> u8 {
        let now = Instant::from_millis(self.t_ms);
        #[allow(clippy::cast_possible_truncation)]
        let entropy = self.t_ms as u16;
        let mut input = &BUTTONS;
        self.renderer.render(now, entropy, &mut input);
        self.filters.apply(
            self.renderer.frame(),
            self.renderer.brightness(),
            &mut self.output,
        )
    }

    fn draw_spiral(&self, ui: &mut egui::Ui) {
        let side = ui.available_width().min(ui.available_height()).max(64.0);
        let (response, painter) =
            ui.allocate_painter(egui::vec2(side, side), egui::Sense::hover());
        let origin = response.rect.min;
        let radius = self.led_size / 2.0;
        let span = side - self.led_size;

        painter.rect_filled(response.rect, 8.0, egui::Color32::from_gray(16));

        let layout = self.renderer.layout();
        for (physical, pixel) in self.output.iter().enumerate() {
            let x = origin.x + radius + f32::from(layout.x()[physical]) / 255.0 * span;
            let y = origin.y + radius + f32::from(layout.y()[physical]) / 255.0 * span;
            let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
            painter.circle_filled(egui::pos2(x, y), radius, color);
        }
    }

    fn draw_strip(&self, ui: &mut egui::Ui) {
        let available_width = ui.available_width();
        let led_pitch = self.led_size + 2.0;

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
        let rows = LED_COUNT.div_ceil(leds_per_row);
        #[allow(clippy::cast_precision_loss)]
        let height = rows as f32 * led_pitch;

        let (response, painter) =
            ui.allocate_painter(egui::vec2(available_width, height), egui::Sense::hover());
        let origin = response.rect.min;

        #[allow(clippy::cast_precision_loss)]
        for (i, pixel) in self.output.iter().enumerate() {
            let x = origin.x + (i % leds_per_row) as f32 * led_pitch;
            let y = origin.y + (i / leds_per_row) as f32 * led_pitch;
            let rect = egui::Rect::from_min_size(
                egui::pos2(x, y),
                egui::vec2(self.led_size, self.led_size),
            );
            let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
            painter.rect_filled(rect, 3.0, color);
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        let applied_brightness = self.render_frame();

        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <PlaybackControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui.button("⏮ Reset").clicked() {
                            self.t_ms = 0;
                            self.last_frame = StdInstant::now();
                        }
                        if ui
                            .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                            .clicked()
                        {
                            self.playing = !self.playing;
                        }
                    });

                    ui.add_space(4.0);

                    let secs = self.t_ms / 1000;
                    let ms = self.t_ms % 1000;
                    ui.label(format!("Time: {secs}.{ms:03}s"));

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Speed:");
                        ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));
                    });
                });
                // </PlaybackControls>
                ui.add_space(16.0);
                // <LayoutSelector>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label("Size:");
                        ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Layout:");
                        ui.selectable_value(&mut self.layout, Layout::Spiral, "spiral");
                        ui.selectable_value(&mut self.layout, Layout::Strip, "strip");
                    });

                    ui.add_space(4.0);

                    if ui.checkbox(&mut self.corrected, "SMD5050 correction").changed() {
                        self.filters = OutputFilters::new(&self.output_config());
                    }
                });
                // </LayoutSelector>
            });

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui.button("◀").clicked() {
                    self.step_pattern(Direction::Backward);
                }
                let pattern: PatternId = self.renderer.pattern();
                ui.label(format!(
                    "Pattern {}/{}: {}",
                    pattern.raw() + 1,
                    PatternId::COUNT,
                    pattern.as_str()
                ));
                if ui.button("▶").clicked() {
                    self.step_pattern(Direction::Forward);
                }
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                if ui.button("Pattern button").clicked() {
                    BUTTONS.release(Button::Pattern);
                }
                if ui.button("Brightness button").clicked() {
                    BUTTONS.release(Button::Brightness);
                }

                let mut power = self.renderer.power();
                if ui.checkbox(&mut power, "Power").changed() {
                    let _ = self.renderer.push_command(Command::SetPower(power));
                }
            });

            ui.add_space(4.0);

            let autoplay = if self.renderer.scheduler().autoplay_enabled() {
                "on"
            } else {
                "off"
            };
            ui.label(format!(
                "Brightness: {} (applied {applied_brightness})  Autoplay: {autoplay}  Palette: {}",
                self.renderer.brightness(),
                self.renderer.palettes().store().selected().name,
            ));

            ui.add_space(16.0);

            match self.layout {
                Layout::Spiral => self.draw_spiral(ui),
                Layout::Strip => self.draw_strip(ui),
            }
        });
    }
}
