use crate::coords::{Rect, Size};
use crate::paint::{BitmapHandle, FontPaint};

/// What a node draws.
///
/// Extending the node set:
/// - add a variant here
/// - add its draw routine to `render::draw` and map it in `draw_fn`
/// - if it animates by itself, handle it in [`NodeKind::update`]
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NodeKind {
    /// Grouping node; draws nothing.
    #[default]
    Plain,
    Rectangle,
    Ellipse,
    Text(TextContent),
    Sprite(Sprite),
}

impl NodeKind {
    pub fn text(text: impl Into<String>, font: FontPaint) -> Self {
        NodeKind::Text(TextContent { text: text.into(), font })
    }

    /// Per-frame visual update. Runs before rendering, never during it.
    pub fn update(&mut self, interval: f64) {
        if let NodeKind::Sprite(sprite) = self {
            sprite.advance(interval);
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Plain => "plain",
            NodeKind::Rectangle => "rectangle",
            NodeKind::Ellipse => "ellipse",
            NodeKind::Text(_) => "text",
            NodeKind::Sprite(_) => "sprite",
        }
    }
}

/// Text payload. The fill color comes from the node's transform.
#[derive(Debug, Clone, PartialEq)]
pub struct TextContent {
    pub text: String,
    pub font: FontPaint,
}

/// Frame-based bitmap animation.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub bitmap: BitmapHandle,
    pub looping: bool,
    frames: Vec<Rect>,
    frame_duration: f64,
    current: usize,
    elapsed: f64,
}

impl Sprite {
    /// `frames` are source rectangles inside `bitmap`; each is shown for `frame_duration`
    /// seconds. Loops by default.
    pub fn new(bitmap: BitmapHandle, frames: Vec<Rect>, frame_duration: f64) -> Self {
        Self { bitmap, looping: true, frames, frame_duration, current: 0, elapsed: 0.0 }
    }

    /// Single-frame sprite.
    pub fn still(bitmap: BitmapHandle, source: Rect) -> Self {
        Self::new(bitmap, vec![source], 0.0)
    }

    /// Slices `count` frames of `frame` size out of a sheet laid out row-major in
    /// `columns` columns.
    pub fn from_grid(
        bitmap: BitmapHandle,
        frame: Size,
        columns: u32,
        count: u32,
        frame_duration: f64,
    ) -> Self {
        let columns = columns.max(1);
        let frames = (0..count)
            .map(|i| {
                let (col, row) = ((i % columns) as f64, (i / columns) as f64);
                Rect::new(col * frame.width, row * frame.height, frame.width, frame.height)
            })
            .collect();
        Self::new(bitmap, frames, frame_duration)
    }

    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    #[inline]
    pub fn frame_index(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn current_frame(&self) -> Option<Rect> {
        self.frames.get(self.current).copied()
    }

    /// Advances the frame clock; a non-looping sprite holds its last frame.
    ///
    /// Runs in constant time however many frames `interval` spans. Non-finite intervals are
    /// ignored.
    pub fn advance(&mut self, interval: f64) {
        if self.frames.len() < 2 || !(self.frame_duration > 0.0) {
            return;
        }
        if !interval.is_finite() {
            log::debug!("sprite: ignoring non-finite interval {interval}");
            return;
        }

        self.elapsed += interval.max(0.0);
        if self.elapsed < self.frame_duration {
            return;
        }
        let steps = (self.elapsed / self.frame_duration).floor();
        self.elapsed %= self.frame_duration;

        let len = self.frames.len();
        if self.looping {
            let steps = (steps % len as f64) as usize;
            self.current = (self.current + steps) % len;
            return;
        }

        let remaining = (len - 1 - self.current) as f64;
        if steps > remaining {
            self.current = len - 1;
            self.elapsed = 0.0;
        } else {
            self.current += steps as usize;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> Sprite {
        Sprite::from_grid(BitmapHandle(7), Size::new(16.0, 8.0), 2, 3, 0.1)
    }

    #[test]
    fn grid_slices_row_major() {
        let s = sheet();
        assert_eq!(s.frame_count(), 3);
        assert_eq!(s.frames[1], Rect::new(16.0, 0.0, 16.0, 8.0));
        assert_eq!(s.frames[2], Rect::new(0.0, 8.0, 16.0, 8.0));
    }

    #[test]
    fn advance_steps_and_loops() {
        let mut s = sheet();
        s.advance(0.15);
        assert_eq!(s.frame_index(), 1);
        s.advance(0.1);
        assert_eq!(s.frame_index(), 2);
        s.advance(0.1);
        assert_eq!(s.frame_index(), 0);
    }

    #[test]
    fn non_looping_holds_last_frame() {
        let mut s = sheet().with_looping(false);
        s.advance(10.0);
        assert_eq!(s.frame_index(), 2);
        assert_eq!(s.current_frame(), Some(Rect::new(0.0, 8.0, 16.0, 8.0)));
    }

    #[test]
    fn long_interval_jumps_straight_to_frame() {
        let mut s = Sprite::from_grid(BitmapHandle(2), Size::new(8.0, 8.0), 4, 4, 0.5);
        // 3001 whole frames: 3001 % 4 == 1.
        s.advance(1500.75);
        assert_eq!(s.frame_index(), 1);

        let mut tiny = Sprite::new(
            BitmapHandle(2),
            vec![Rect::new(0.0, 0.0, 1.0, 1.0); 3],
            1e-9,
        );
        tiny.advance(0.25);
        assert!(tiny.frame_index() < 3);
    }

    #[test]
    fn long_interval_clamps_non_looping_sprite() {
        let mut s = sheet().with_looping(false);
        s.advance(1e12);
        assert_eq!(s.frame_index(), 2);
        s.advance(1e12);
        assert_eq!(s.frame_index(), 2);
    }

    #[test]
    fn non_finite_interval_is_ignored() {
        let mut s = sheet();
        s.advance(0.15);
        s.advance(f64::INFINITY);
        s.advance(f64::NAN);
        assert_eq!(s.frame_index(), 1);
    }

    #[test]
    fn still_sprite_never_advances() {
        let mut s = Sprite::still(BitmapHandle(1), Rect::new(0.0, 0.0, 4.0, 4.0));
        s.advance(5.0);
        assert_eq!(s.frame_index(), 0);
    }

    #[test]
    fn kind_update_only_touches_sprites() {
        let mut kind = NodeKind::Sprite(sheet());
        kind.update(0.1);
        let NodeKind::Sprite(s) = &kind else { unreachable!() };
        assert_eq!(s.frame_index(), 1);

        let mut plain = NodeKind::Plain;
        plain.update(1.0);
        assert_eq!(plain, NodeKind::Plain);
    }
}
