use std::{fmt, io, path};

use crate::{Point3, TriangleCollector, VertexPool, debug, export};

pub(crate) struct SvgContext {
    pub output_path: path::PathBuf,
    pub view_x_min: f32,
    pub view_x_max: f32,
    pub view_y_min: f32,
    pub view_y_max: f32,
    pub show_labels: bool,
}

impl SvgContext {
    /// Frames every vertex of `pool`, if SVG output is enabled
    pub fn from_env(pool: &VertexPool) -> Option<Self> {
        let output_path = debug::env::svg::output_path()?;
        let show_labels = debug::env::svg::show_labels();
        if pool.is_empty() {
            return None;
        }

        let mut view_x_min = f32::MAX;
        let mut view_x_max = f32::MIN;
        let mut view_y_min = f32::MAX;
        let mut view_y_max = f32::MIN;
        for (_, p) in pool.iter() {
            view_x_min = view_x_min.min(p.x as f32);
            view_x_max = view_x_max.max(p.x as f32);
            view_y_min = view_y_min.min(p.y as f32);
            view_y_max = view_y_max.max(p.y as f32);
        }

        let w = view_x_max - view_x_min;
        let h = view_y_max - view_y_min;
        let margin_scale = 0.1;
        view_x_min -= w * margin_scale;
        view_x_max += w * margin_scale;
        view_y_min -= h * margin_scale;
        view_y_max += h * margin_scale;

        Some(Self {
            output_path,
            view_x_min,
            view_x_max,
            view_y_min,
            view_y_max,
            show_labels,
        })
    }

    pub fn view_w(&self) -> f32 { self.view_x_max - self.view_x_min }
    pub fn view_h(&self) -> f32 { self.view_y_max - self.view_y_min }

    pub fn view_min_size(&self) -> f32 { self.view_w().min(self.view_h()) }

    pub fn percent(&self, p: f32) -> f32 { self.view_min_size() * p / 100.0 }
}

pub(crate) struct SvgOutput<'a> {
    pub context: &'a SvgContext,
    content: String,
}

impl<'a> SvgOutput<'a> {
    pub fn new(context: &'a SvgContext) -> Self {
        Self {
            context,
            content: String::new(),
        }
    }

    /// Draws the collected triangles (degenerate ones in red) over the pool's vertices
    /// (synthesized ones in orange)
    pub fn append_drive(&mut self, pool: &VertexPool, triangles: &TriangleCollector) -> fmt::Result {
        use fmt::Write;
        use svg_fmt::*;

        let stroke_width = self.context.percent(0.2);
        for triangle in triangles {
            let ps: Vec<Point3> = triangle.vertices().iter().filter_map(|&vr| pool.at(vr)).collect();
            if let [p0, p1, p2] = ps.as_slice() {
                let color = if export::is_degenerate(p0, p1, p2) {
                    red()
                } else {
                    rgb(0, 0, 255)
                };
                let vs: Vec<[f32; 2]> = ps.iter().map(|p| [p.x as f32, p.y as f32]).collect();
                writeln!(self, "{}",
                    polygon(&vs)
                        .fill(Fill::None)
                        .stroke(Stroke::Color(color, stroke_width))
                )?;
            }
        }

        let r = self.context.percent(0.5);
        for (vr, p) in pool.iter() {
            let color = if vr.index() < pool.loaded() {
                green()
            } else {
                rgb(255, 126, 0)
            };
            writeln!(self, "{}", circle(p.x as f32, p.y as f32, r).fill(Fill::Color(color)))?;
            if self.context.show_labels {
                writeln!(self, "{}", text(p.x as f32 + r, p.y as f32 - r, format!("{}", vr)).size(r * 3.0))?;
            }
        }
        Ok(())
    }

    pub fn save<P: AsRef<path::Path>>(self, file_name: P) -> io::Result<()> {
        use std::io::Write;

        let path = self.context.output_path.join(file_name);
        let f = std::fs::File::create(path)?;
        let mut w = io::BufWriter::new(&f);

        writeln!(w, "<svg viewBox=\"{}, {}, {}, {}\" xmlns=\"http://www.w3.org/2000/svg\">", self.context.view_x_min, self.context.view_y_min, self.context.view_w(), self.context.view_h())?;
        writeln!(w, "{}", self.content)?;
        writeln!(w, "</svg>")?;
        Ok(())
    }
}

impl<'a> fmt::Write for SvgOutput<'a> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.content.write_str(s)
    }
}

// svg_fmt is missing a function for Circle
pub(crate) fn circle(x: f32, y: f32, r: f32) -> svg_fmt::Circle {
    svg_fmt::Circle {
        x,
        y,
        radius: r,
        style: svg_fmt::Style::default(),
    }
}
