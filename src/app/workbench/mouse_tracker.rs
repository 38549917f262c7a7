//! Editor mouse state machine for click granularity detection.
//!
//! Tracks double-click / triple-click using screen coordinates and timestamps,
//! keeping this input-device concern out of the kernel.

use crate::models::Granularity;
use std::time::Instant;

const CLICK_SLOP: u16 = 1;

#[derive(Debug)]
pub(crate) struct EditorMouseTracker {
    last_click: Option<(u16, u16, Instant)>,
    click_count: u8,
    dragging: bool,
}

impl EditorMouseTracker {
    pub fn new() -> Self {
        Self {
            last_click: None,
            click_count: 0,
            dragging: false,
        }
    }

    /// Register a click at screen coordinates, returning the detected granularity.
    ///
    /// The second click must land within `double_click_ms` of the first; the
    /// third within `triple_click_ms` of the second.
    pub fn click(
        &mut self,
        x: u16,
        y: u16,
        now: Instant,
        double_click_ms: u64,
        triple_click_ms: u64,
    ) -> Granularity {
        let repeated = self.last_click.is_some_and(|(lx, ly, lt)| {
            let dx = (x as i32 - lx as i32).abs();
            let dy = (y as i32 - ly as i32).abs();
            let dt = now.duration_since(lt).as_millis() as u64;
            let window = if self.click_count == 1 {
                double_click_ms
            } else {
                triple_click_ms
            };
            dx <= CLICK_SLOP as i32 && dy <= CLICK_SLOP as i32 && dt < window
        });

        self.click_count = if repeated {
            (self.click_count % 3) + 1
        } else {
            1
        };
        self.last_click = Some((x, y, now));
        self.dragging = true;

        match self.click_count {
            1 => Granularity::Char,
            2 => Granularity::Word,
            _ => Granularity::Line,
        }
    }

    pub fn dragging(&self) -> bool {
        self.dragging
    }

    pub fn stop_drag(&mut self) {
        self.dragging = false;
    }
}
