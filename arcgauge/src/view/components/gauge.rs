//! Circular gauge widget: two stroked arcs with a centered readout.

use arcgauge_common::{ArcShape, GaugeColors, GaugeConfig, GaugeFrame, Label, Scene, render};
use iced::widget::canvas::{self, Frame, Geometry, LineCap, Path, Stroke};
use iced::widget::{Canvas, center, column, stack, text};
use iced::{Alignment, Element, Font, Length, Point, Radians, Rectangle, Renderer, Theme, font};

/// A circular gauge showing one sampled frame of a [`GaugeState`].
///
/// [`GaugeState`]: arcgauge_common::GaugeState
pub struct Gauge {
    scene: Scene,
    size: f32,
}

impl Gauge {
    /// Describe the gauge for `frame` at the configured canvas size.
    pub fn new(config: &GaugeConfig, colors: &GaugeColors, frame: &GaugeFrame) -> Self {
        let size = config.canvas_size;
        Self {
            scene: render(config, colors, frame, size, size),
            size,
        }
    }

    /// The scene this gauge will draw.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The canvas program stroking the scene's arcs in draw order.
    fn arcs(&self) -> GaugeArcs {
        GaugeArcs {
            arcs: self.scene.arcs().map(|arc| *arc),
        }
    }

    /// Render the gauge as an Iced element.
    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let caption = label_text(&self.scene.caption);
        let readout = label_text(&self.scene.readout);

        let arcs = Canvas::new(self.arcs())
            .width(Length::Fixed(self.size))
            .height(Length::Fixed(self.size));

        let labels = center(column![caption, readout].align_x(Alignment::Center));

        stack![arcs, labels]
            .width(Length::Fixed(self.size))
            .height(Length::Fixed(self.size))
            .into()
    }
}

fn label_text<'a>(label: &Label) -> iced::widget::Text<'a> {
    let weight = if label.bold {
        font::Weight::Bold
    } else {
        font::Weight::Normal
    };

    text(label.text.clone())
        .size(label.size)
        .color(label.color)
        .font(Font {
            weight,
            ..Font::DEFAULT
        })
}

/// Internal canvas program stroking the background track and the progress arc.
struct GaugeArcs {
    arcs: [ArcShape; 2],
}

impl<Message> canvas::Program<Message, Theme, Renderer> for GaugeArcs {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry<Renderer>> {
        let mut frame = Frame::new(renderer, bounds.size());

        for arc in &self.arcs {
            stroke_arc(&mut frame, arc);
        }

        vec![frame.into_geometry()]
    }
}

fn stroke_arc(frame: &mut Frame, arc: &ArcShape) {
    // A zero sweep with round caps would still leave a dot.
    if !arc.is_visible() {
        return;
    }

    let path = Path::new(|builder| {
        builder.arc(canvas::path::Arc {
            center: Point::new(arc.center.x, arc.center.y),
            radius: arc.radius,
            start_angle: Radians(arc.start_angle.to_radians()),
            end_angle: Radians(arc.end_angle().to_radians()),
        });
    });

    frame.stroke(
        &path,
        Stroke::default()
            .with_color(arc.color)
            .with_width(arc.stroke_width)
            .with_line_cap(LineCap::Round),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcgauge_common::Palette;
    use iced::Color;

    fn colors() -> GaugeColors {
        GaugeConfig::default().resolve_colors(&Palette {
            on_surface: Color::WHITE,
            primary: Color::from_rgb(0.3, 0.6, 0.9),
        })
    }

    #[test]
    fn test_gauge_uses_canvas_size() {
        let config = GaugeConfig {
            canvas_size: 200.0,
            ..GaugeConfig::default()
        };
        let colors = colors();
        let frame = GaugeFrame {
            raw: 50,
            clamped: 50,
            readout: 50,
            sweep: 120.0,
            label_color: colors.big_text,
        };

        let gauge = Gauge::new(&config, &colors, &frame);
        let scene = gauge.scene();

        assert_eq!(scene.background.center.x, 100.0);
        assert!((scene.background.radius - 80.0).abs() < 1e-4);
        assert_eq!(scene.foreground.sweep, 120.0);
        assert_eq!(scene.readout.text, "50 GB");
    }

    #[test]
    fn test_canvas_strokes_scene_arcs_in_order() {
        let colors = colors();
        let frame = GaugeFrame {
            raw: 10,
            clamped: 10,
            readout: 10,
            sweep: 24.0,
            label_color: colors.big_text,
        };

        let gauge = Gauge::new(&GaugeConfig::default(), &colors, &frame);
        let [track, progress] = gauge.arcs().arcs;

        assert_eq!(track, gauge.scene().background);
        assert_eq!(progress, gauge.scene().foreground);
        assert_eq!(progress.color, colors.foreground_arc);
    }
}
