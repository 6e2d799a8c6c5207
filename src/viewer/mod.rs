//! Full-screen zoomable image viewer state.
//!
//! The viewer keeps the page scroll locked through a [`ModalGuard`] for as long as
//! it exists. Closing it, or dropping it on any other path, unlocks the page.

pub mod modal;

use crate::viewer::modal::{ModalGuard, ScrollLock};

pub const MIN_SCALE: f64 = 0.5;
pub const MAX_SCALE: f64 = 5.0;
/// Factor applied by the zoom buttons and keys.
pub const ZOOM_STEP: f64 = 1.5;
const WHEEL_DOWN: f64 = 0.9;
const WHEEL_UP: f64 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Keyboard commands understood by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    Close,
    ZoomIn,
    ZoomOut,
    Reset,
}

impl ViewerAction {
    /// Maps a key name (`"Escape"`, `"+"`, `"="`, `"-"`, `"0"`) to its action.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(ViewerAction::Close),
            "+" | "=" => Some(ViewerAction::ZoomIn),
            "-" => Some(ViewerAction::ZoomOut),
            "0" => Some(ViewerAction::Reset),
            _ => None,
        }
    }
}

/// Pointer shape hint for the image area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Wait,
    Grabbing,
    Grab,
    ZoomIn,
}

impl Cursor {
    /// CSS cursor name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Cursor::Wait => "wait",
            Cursor::Grabbing => "grabbing",
            Cursor::Grab => "grab",
            Cursor::ZoomIn => "zoom-in",
        }
    }
}

/// An open viewer showing one image.
pub struct ImageViewer<'a, L: ScrollLock + ?Sized> {
    source: String,
    scale: f64,
    position: Point,
    drag_origin: Option<Point>,
    loaded: bool,
    guard: ModalGuard<'a, L>,
}

impl<'a, L: ScrollLock + ?Sized> ImageViewer<'a, L> {
    /// Opens the viewer at scale 1 and locks page scrolling.
    pub fn open(lock: &'a mut L, source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            scale: 1.0,
            position: Point::default(),
            drag_origin: None,
            loaded: false,
            guard: ModalGuard::acquire(lock),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    /// Called once the image has finished loading.
    pub fn mark_loaded(&mut self) {
        self.loaded = true;
    }

    pub fn zoom_in(&mut self) {
        self.set_scale(self.scale * ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_scale(self.scale / ZOOM_STEP);
    }

    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.position = Point::default();
    }

    /// Zooms by one wheel notch. Scrolling down (`delta_y > 0`) zooms out.
    /// Ignored until the image is loaded.
    pub fn wheel(&mut self, delta_y: f64) {
        if !self.loaded {
            return;
        }
        let factor = if delta_y > 0.0 { WHEEL_DOWN } else { WHEEL_UP };
        self.set_scale(self.scale * factor);
    }

    fn set_scale(&mut self, scale: f64) {
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Starts panning at `pointer`. Only possible on a loaded, zoomed-in image.
    pub fn begin_drag(&mut self, pointer: Point) -> bool {
        if !self.loaded || self.scale <= 1.0 {
            return false;
        }
        self.drag_origin = Some(Point::new(
            pointer.x - self.position.x,
            pointer.y - self.position.y,
        ));
        true
    }

    pub fn drag_to(&mut self, pointer: Point) {
        if let Some(origin) = self.drag_origin {
            self.position = Point::new(pointer.x - origin.x, pointer.y - origin.y);
        }
    }

    pub fn end_drag(&mut self) {
        self.drag_origin = None;
    }

    /// Applies the action bound to `key`.
    ///
    /// Returns [`ViewerAction::Close`] without acting on it; the caller closes the
    /// viewer with [`ImageViewer::close`].
    pub fn handle_key(&mut self, key: &str) -> Option<ViewerAction> {
        let action = ViewerAction::from_key(key)?;
        match action {
            ViewerAction::ZoomIn => self.zoom_in(),
            ViewerAction::ZoomOut => self.zoom_out(),
            ViewerAction::Reset => self.reset(),
            ViewerAction::Close => {}
        }
        Some(action)
    }

    pub fn cursor(&self) -> Cursor {
        if !self.loaded {
            Cursor::Wait
        } else if self.is_dragging() {
            Cursor::Grabbing
        } else if self.scale > 1.0 {
            Cursor::Grab
        } else {
            Cursor::ZoomIn
        }
    }

    /// Closes the viewer and unlocks page scrolling.
    pub fn close(mut self) {
        self.guard.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer::modal::tests::Page;
    use crate::viewer::modal::Overflow;

    fn close_enough(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut page = Page::default();
        let mut viewer = ImageViewer::open(&mut page, "/m/t2.png");
        for _ in 0..10 {
            viewer.zoom_in();
        }
        assert!(close_enough(viewer.scale(), MAX_SCALE));
        for _ in 0..10 {
            viewer.zoom_out();
        }
        assert!(close_enough(viewer.scale(), MIN_SCALE));
        viewer.reset();
        assert!(close_enough(viewer.scale(), 1.0));
    }

    #[test]
    fn test_wheel_waits_for_image() {
        let mut page = Page::default();
        let mut viewer = ImageViewer::open(&mut page, "/m/t2.png");
        viewer.wheel(-1.0);
        assert!(close_enough(viewer.scale(), 1.0));
        assert_eq!(viewer.cursor(), Cursor::Wait);

        viewer.mark_loaded();
        viewer.wheel(-1.0);
        assert!(close_enough(viewer.scale(), 1.1));
        viewer.wheel(3.0);
        assert!(close_enough(viewer.scale(), 0.99));
        assert_eq!(viewer.cursor(), Cursor::ZoomIn);
    }

    #[test]
    fn test_drag_only_when_zoomed_in() {
        let mut page = Page::default();
        let mut viewer = ImageViewer::open(&mut page, "/m/t2.png");
        viewer.mark_loaded();
        assert!(!viewer.begin_drag(Point::new(10.0, 10.0)));

        viewer.zoom_in();
        assert_eq!(viewer.cursor(), Cursor::Grab);
        assert!(viewer.begin_drag(Point::new(10.0, 10.0)));
        assert_eq!(viewer.cursor(), Cursor::Grabbing);
        viewer.drag_to(Point::new(40.0, -5.0));
        assert_eq!(viewer.position(), Point::new(30.0, -15.0));
        viewer.end_drag();

        // A second drag continues from the current offset.
        assert!(viewer.begin_drag(Point::new(0.0, 0.0)));
        viewer.drag_to(Point::new(5.0, 5.0));
        assert_eq!(viewer.position(), Point::new(35.0, -10.0));
        assert_eq!(viewer.cursor().as_str(), "grabbing");
    }

    #[test]
    fn test_keys() {
        let mut page = Page::default();
        let mut viewer = ImageViewer::open(&mut page, "/m/t2.png");
        assert_eq!(viewer.handle_key("="), Some(ViewerAction::ZoomIn));
        assert!(close_enough(viewer.scale(), 1.5));
        assert_eq!(viewer.handle_key("-"), Some(ViewerAction::ZoomOut));
        assert!(close_enough(viewer.scale(), 1.0));
        viewer.handle_key("+");
        assert_eq!(viewer.handle_key("0"), Some(ViewerAction::Reset));
        assert!(close_enough(viewer.scale(), 1.0));
        assert_eq!(viewer.handle_key("x"), None);
        assert_eq!(viewer.handle_key("Escape"), Some(ViewerAction::Close));
        viewer.close();
        assert_eq!(page.overflow, Overflow::Visible);
    }

    #[test]
    fn test_every_exit_path_unlocks_scrolling() {
        let mut page = Page {
            overflow: Overflow::Auto,
            ..Page::default()
        };

        let viewer = ImageViewer::open(&mut page, "/a.png");
        viewer.close();
        assert_eq!(page.overflow, Overflow::Auto);

        {
            let viewer = ImageViewer::open(&mut page, "/b.png");
            assert_eq!(viewer.source(), "/b.png");
        }
        assert_eq!(page.overflow, Overflow::Auto);

        assert_eq!(
            page.changes,
            [Overflow::Hidden, Overflow::Auto, Overflow::Hidden, Overflow::Auto]
        );
    }
}
