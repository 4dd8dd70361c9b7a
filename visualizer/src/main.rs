use iced::{
    mouse, time,
    widget::{
        button,
        canvas::{self, Canvas, Frame, Geometry, Path, Stroke},
        column, row, scrollable, text, Column, Container,
    },
    Alignment, Color, Element, Length, Point, Rectangle, Renderer, Subscription, Task, Theme,
};
use std::time::Duration;
use sweepcore::math::Vec2;
use sweepcore::prelude::RadarConfig;
use sweepcore::scene::{Blip, SweepLine, Target};
use sweepcore::sim::SimState;
use sweepcore::store::{BlipArchive, MemoryStore};
use sweepcore::telemetry::{BlipLog, TableLog};

const FRAME_INTERVAL_MS: u64 = 16;
const TRAIL_STEPS: usize = 45;
const SEED: u64 = 7;

fn main() -> iced::Result {
    iced::application(RadarApp::boot, RadarApp::update, RadarApp::view)
        .title(application_title)
        .subscription(application_subscription)
        .theme(application_theme)
        .run()
}

fn application_title(_: &RadarApp) -> String {
    "Radar Sweep".into()
}

fn application_subscription(state: &RadarApp) -> Subscription<Message> {
    if state.running {
        time::every(Duration::from_millis(FRAME_INTERVAL_MS)).map(|_| Message::Tick)
    } else {
        Subscription::none()
    }
}

fn application_theme(_: &RadarApp) -> Theme {
    Theme::Dark
}

struct RadarApp {
    sim: SimState,
    archive: BlipArchive,
    log: TableLog,
    status: String,
    running: bool,
}

#[derive(Debug, Clone, Copy)]
enum Message {
    Tick,
    TogglePause,
    Reset,
}

impl RadarApp {
    fn boot() -> (Self, Task<Message>) {
        let mut archive = BlipArchive::new(Box::new(MemoryStore::new()));
        let mut log = TableLog::new();
        let mut status = "Sweeping...".to_string();

        // Startup sequence: clear the slot, then replay what it holds into
        // the log view only.
        if let Err(err) = archive.reset() {
            status = format!("store error: {err}");
        }
        for blip in archive.load_all() {
            log.append(&blip);
        }

        (
            RadarApp {
                sim: SimState::new(RadarConfig::default(), SEED),
                archive,
                log,
                status,
                running: true,
            },
            Task::none(),
        )
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                let fired = state.sim.step();
                for blip in &fired {
                    if let Err(err) = state.archive.append(blip) {
                        state.status = format!("store error: {err}");
                        continue;
                    }
                    state.log.append(blip);
                    state.status = format!(
                        "blip {} at ({:.2}, {:.2})",
                        blip.classification.label(),
                        blip.x,
                        blip.y
                    );
                }
                Task::none()
            }
            Message::TogglePause => {
                state.running = !state.running;
                state.status = if state.running {
                    "Sweeping...".into()
                } else {
                    "Paused".into()
                };
                Task::none()
            }
            Message::Reset => {
                state.sim = SimState::new(RadarConfig::default(), SEED);
                state.log = TableLog::new();
                if let Err(err) = state.archive.reset() {
                    state.status = format!("store error: {err}");
                } else {
                    state.status = "Reset".into();
                }
                Task::none()
            }
        }
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let scope = Canvas::new(Scope {
            config: state.sim.config.clone(),
            targets: state.sim.targets.clone(),
            blips: state.sim.blips.clone(),
            sweep: state.sim.sweep.clone(),
        })
        .width(Length::Fixed(420.0))
        .height(Length::Fixed(420.0));

        let pause_label = if state.running { "Pause" } else { "Resume" };
        let controls = row![
            button(pause_label).on_press(Message::TogglePause).padding(8),
            button("Reset").on_press(Message::Reset).padding(8),
        ]
        .spacing(10);

        let table = if state.log.is_empty() {
            Column::new().push(text("No detections yet").size(12))
        } else {
            state
                .log
                .rows()
                .iter()
                .rev()
                .fold(Column::new().spacing(2), |col, blip_row| {
                    col.push(
                        text(format!(
                            "{:<10} {:>8} {:>8}",
                            blip_row.classification, blip_row.x, blip_row.y
                        ))
                        .size(12),
                    )
                })
        };

        let side_column = column![
            text("Radar Sweep").size(26),
            controls,
            text(&state.status).size(14),
            text(format!(
                "Targets: {} | Live blips: {}",
                state.sim.targets.len(),
                state.sim.blips.len()
            ))
            .size(14),
            text("Detections").size(18),
            text(format!("{:<10} {:>8} {:>8}", "type", "x", "y")).size(12),
            Container::new(scrollable(table).height(Length::Fixed(320.0))).padding(6),
        ]
        .spacing(10)
        .padding(16)
        .width(Length::Fixed(320.0));

        let layout = row![scope, side_column]
            .spacing(20)
            .align_y(Alignment::Start)
            .padding(20);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}

/// Canvas program painting one frame of the scope. Detection already
/// happened in the simulation step; this only draws.
struct Scope {
    config: RadarConfig,
    targets: Vec<Target>,
    blips: Vec<Blip>,
    sweep: SweepLine,
}

impl Scope {
    fn to_canvas(&self, point: Vec2, scale: f32) -> Point {
        Point::new(point.x * scale, point.y * scale)
    }
}

impl canvas::Program<Message> for Scope {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let scale = bounds.width.min(bounds.height) / self.config.surface_size();
        let center = self.to_canvas(self.sweep.origin, scale);
        let radius = self.config.radar_radius * scale;

        // Scope backdrop.
        let backdrop = Path::new(|builder| builder.circle(center, radius));
        frame.fill(&backdrop, Color::from_rgb(0.06, 0.01, 0.01));

        // Afterglow trail behind the beam, standing in for the low-alpha
        // overlay an accumulating surface would leave.
        for step in 1..=TRAIL_STEPS {
            let angle = self.sweep.angle - step as f32 * self.sweep.speed;
            let alpha = 0.30 * (1.0 - step as f32 / TRAIL_STEPS as f32);
            let tip = Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            );
            let ray = Path::new(|builder| {
                builder.move_to(center);
                builder.line_to(tip);
            });
            frame.stroke(
                &ray,
                Stroke::default()
                    .with_width(2.0)
                    .with_color(Color::from_rgba(0.2, 0.53, 0.2, alpha)),
            );
        }

        // Targets.
        for target in &self.targets {
            let marker = Path::new(|builder| {
                builder.circle(
                    self.to_canvas(target.position, scale),
                    target.radius * scale,
                )
            });
            frame.fill(&marker, Color::from_rgb(1.0, 0.73, 0.0));
        }

        // Sweep line.
        let beam = Path::new(|builder| {
            builder.move_to(center);
            builder.line_to(self.to_canvas(self.sweep.end, scale));
        });
        frame.stroke(
            &beam,
            Stroke::default()
                .with_width(2.0)
                .with_color(Color::from_rgb(0.2, 0.53, 0.2)),
        );

        // Blips, alpha tracking the fade value.
        for blip in &self.blips {
            let marker = Path::new(|builder| {
                builder.circle(
                    self.to_canvas(Vec2::new(blip.x, blip.y), scale),
                    2.0 * scale,
                )
            });
            frame.fill(&marker, Color::from_rgba(0.1, 1.0, 0.1, blip.fade));
        }

        // Chrome: full-opacity outer ring, then four guide rings every 40
        // surface units at half opacity.
        let outer = Path::new(|builder| builder.circle(center, radius));
        frame.stroke(
            &outer,
            Stroke::default()
                .with_width(5.0)
                .with_color(Color::from_rgb(0.31, 0.31, 0.31)),
        );
        for ring in 1..5 {
            let guide = Path::new(|builder| builder.circle(center, 40.0 * ring as f32 * scale));
            frame.stroke(
                &guide,
                Stroke::default()
                    .with_width(1.0)
                    .with_color(Color::from_rgba(0.12, 0.31, 0.12, 0.5)),
            );
        }

        vec![frame.into_geometry()]
    }
}
