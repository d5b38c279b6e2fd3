//! Canvas 2D drawing of a `FrameView`

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::palette;
use super::projection::Projection;
use crate::sim::{FrameView, InstanceKind};

/// Road half-width in world units
const ROAD_HALF_WIDTH: f32 = 6.0;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    proj: Projection,
    min_speed: f32,
    max_speed: f32,
}

impl CanvasRenderer {
    pub fn new(
        canvas: &HtmlCanvasElement,
        min_speed: f32,
        max_speed: f32,
    ) -> Result<Self, wasm_bindgen::JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| wasm_bindgen::JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let proj = Projection::new(canvas.width() as f32, canvas.height() as f32);
        Ok(Self {
            ctx,
            proj,
            min_speed,
            max_speed,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.proj = Projection::new(width as f32, height as f32);
    }

    fn rect(&self, color: &str, x: f32, z: f32, w: f32, d: f32) {
        // (x, z) is the center of the footprint
        let top_left = self.proj.to_screen(x - w / 2.0, z + d / 2.0);
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(
            top_left.x as f64,
            top_left.y as f64,
            (w * self.proj.scale_x()) as f64,
            (d * self.proj.scale_z()) as f64,
        );
    }

    pub fn render(&self, view: &FrameView) {
        let ctx = &self.ctx;
        let (w, h) = (self.proj.width as f64, self.proj.height as f64);

        ctx.set_fill_style_str(palette::GRASS);
        ctx.fill_rect(0.0, 0.0, w, h);

        // Road segments, alternating shade so the scroll is visible
        let len = view.segment_length;
        for (i, z) in view.segments.iter().enumerate() {
            if !self.proj.is_visible(*z, z + len) {
                continue;
            }
            let color = if i % 2 == 0 { palette::ROAD } else { palette::ROAD_ALT };
            self.rect(color, 0.0, z + len / 2.0, ROAD_HALF_WIDTH * 2.0, len);
            // Lane marking at the segment start
            let marking = palette::speed_color(view.speed, self.min_speed, self.max_speed);
            self.rect(&marking, 0.0, *z, 0.3, 2.0);
        }

        for inst in &view.instances {
            let half = inst.extent.z / 2.0;
            if !self.proj.is_visible(inst.pos.z - half, inst.pos.z + half) {
                continue;
            }
            match inst.kind {
                InstanceKind::Building => {
                    self.rect(palette::BUILDING, inst.pos.x, inst.pos.z, inst.extent.x, inst.extent.z)
                }
                InstanceKind::Obstacle => {
                    self.rect(palette::OBSTACLE, inst.pos.x, inst.pos.z, inst.extent.x, inst.extent.z)
                }
                InstanceKind::Coin => {
                    let c = self.proj.to_screen(inst.pos.x, inst.pos.z);
                    let r = (inst.extent.x / 2.0 * self.proj.scale_x()) as f64;
                    ctx.set_fill_style_str(palette::COIN);
                    ctx.begin_path();
                    let _ = ctx.arc(c.x as f64, c.y as f64, r, 0.0, TAU);
                    ctx.fill();
                }
            }
        }

        self.draw_player(view);
    }

    fn draw_player(&self, view: &FrameView) {
        let ctx = &self.ctx;
        let p = self.proj.to_screen(view.player_pos.x, view.player_pos.z);
        // Airborne runners are drawn larger
        let lift = 1.0 + view.player_pos.y as f64 * 0.25;
        let body_w = self.proj.scale_x() as f64 * lift;
        let body_d = self.proj.scale_z() as f64 * lift;

        ctx.save();
        let _ = ctx.translate(p.x as f64, p.y as f64);
        let _ = ctx.rotate(view.player_tilt as f64);
        ctx.set_fill_style_str(palette::PLAYER);
        ctx.fill_rect(-body_w / 2.0, -body_d / 2.0, body_w, body_d);
        ctx.set_fill_style_str(palette::PLAYER_HEAD);
        ctx.begin_path();
        let _ = ctx.arc(0.0, 0.0, body_w / 2.0, 0.0, TAU);
        ctx.fill();
        ctx.restore();
    }
}
