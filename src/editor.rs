//! The interactive editor: point manipulation and painting.

use kurbo::{Circle, Point, Size};
use rand::{Rng, RngCore};

use crate::input::{Button, Command, EditorEvent, MenuAction};
use crate::options::EditorOptions;
use crate::points::ControlPoints;
use crate::readout::{self, Readout};
use crate::surface::Surface;

/// The state of an in-progress pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    /// A point is being dragged; holds its index.
    Dragging(usize),
}

impl Default for InteractionState {
    fn default() -> Self {
        InteractionState::Idle
    }
}

/// An editor for a single Bézier curve.
///
/// The editor owns the control points and paints them, together with the
/// control polygon and the curve, onto the surface it was constructed
/// with. After every change to the points the formatted coordinates are
/// written to the readout.
pub struct Editor<S, R> {
    points: ControlPoints,
    state: InteractionState,
    surface: S,
    readout: R,
    rng: Box<dyn RngCore>,
    options: EditorOptions,
}

impl<S: Surface, R: Readout> Editor<S, R> {
    /// Create an editor with the default options.
    pub fn new(surface: S, readout: R) -> Editor<S, R> {
        Editor::with_options(surface, readout, EditorOptions::default())
    }

    pub fn with_options(surface: S, readout: R, options: EditorOptions) -> Editor<S, R> {
        let mut editor = Editor {
            points: ControlPoints::new(),
            state: InteractionState::Idle,
            surface,
            readout,
            rng: Box::new(rand::thread_rng()),
            options: options.sanitized(),
        };
        editor.reset();
        editor
    }

    /// Replace the source of randomness used by [`add_random_point`].
    ///
    /// [`add_random_point`]: Editor::add_random_point
    pub fn with_rng(mut self, rng: impl RngCore + 'static) -> Editor<S, R> {
        self.rng = Box::new(rng);
        self
    }

    pub fn points(&self) -> &ControlPoints {
        &self.points
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn readout(&self) -> &R {
        &self.readout
    }

    /// Remove every point.
    pub fn reset(&mut self) {
        log::debug!("reset, dropping {} points", self.points.len());
        self.points.clear();
        self.state = InteractionState::Idle;
        self.publish();
    }

    /// Append a point at a uniformly random position on the surface.
    pub fn add_random_point(&mut self) {
        let size = self.surface.size();
        let x = self.rng.gen::<f64>() * size.width.max(0.0);
        let y = self.rng.gen::<f64>() * size.height.max(0.0);
        let pt = Point::new(x, y);
        log::debug!("add random point {:?}", pt);
        self.points.push(pt);
        self.publish();
    }

    /// Remove the last point, if any.
    pub fn remove_last_point(&mut self) {
        if let Some(pt) = self.points.pop() {
            log::debug!("remove last point {:?}", pt);
            if self.state == InteractionState::Dragging(self.points.len()) {
                self.end_drag();
            }
        }
        self.publish();
    }

    /// Handle a button press at `pos`.
    ///
    /// A press on a point starts dragging it. A primary press anywhere else
    /// appends a new point.
    pub fn pointer_down(&mut self, pos: Point, button: Button) {
        match self.points.hit_test(pos, self.options.hit_radius) {
            Some(idx) => {
                log::debug!("drag start, point {}", idx);
                self.state = InteractionState::Dragging(idx);
            }
            None if button == Button::Primary => {
                log::debug!("add point {:?}", pos);
                self.points.push(pos);
                self.publish();
            }
            None => (),
        }
    }

    pub fn pointer_move(&mut self, pos: Point) {
        if let InteractionState::Dragging(idx) = self.state {
            if self.points.set(idx, pos) {
                self.publish();
            }
        }
    }

    pub fn pointer_up(&mut self) {
        self.end_drag();
    }

    /// Handle a context-menu request at `pos`: remove the point under it.
    ///
    /// The host should not show its own menu.
    pub fn context_action(&mut self, pos: Point) -> MenuAction {
        if let Some(idx) = self.points.hit_test(pos, self.options.hit_radius) {
            log::debug!("remove point {}", idx);
            self.points.remove(idx);
            // the dragged point is gone or has shifted
            if matches!(self.state, InteractionState::Dragging(d) if d >= idx) {
                self.end_drag();
            }
            self.publish();
        }
        MenuAction::SuppressDefault
    }

    /// Match the surface's pixel size to its displayed size.
    ///
    /// Existing points keep their pixel coordinates, even if they end up
    /// outside the new bounds.
    pub fn resize(&mut self, displayed: Size) {
        if self.surface.size() != displayed {
            log::debug!("resize {:?} -> {:?}", self.surface.size(), displayed);
            self.surface.resize(displayed);
        }
    }

    pub fn command(&mut self, command: Command) {
        match command {
            Command::Reset => self.reset(),
            Command::AddRandomPoint => self.add_random_point(),
            Command::RemoveLastPoint => self.remove_last_point(),
        }
    }

    /// Dispatch a host event to the matching operation.
    pub fn handle(&mut self, event: EditorEvent) -> Option<MenuAction> {
        match event {
            EditorEvent::Down(pos, button) => self.pointer_down(pos, button),
            EditorEvent::Move(pos) => self.pointer_move(pos),
            EditorEvent::Up => self.pointer_up(),
            EditorEvent::ContextMenu(pos) => return Some(self.context_action(pos)),
            EditorEvent::Command(cmd) => self.command(cmd),
            EditorEvent::Resize(size) => self.resize(size),
        }
        None
    }

    /// Paint one frame: the control polygon, the curve, then the markers.
    pub fn render(&mut self) {
        let Editor {
            points,
            surface,
            options,
            ..
        } = self;
        surface.clear();
        if points.has_curve() {
            surface.stroke(&points.polygon(), &options.polygon);
            match points.curve(options.curve_segments) {
                Ok(curve) => surface.stroke(&curve, &options.curve),
                Err(e) => log::error!("failed to flatten curve: {}", e),
            }
        }
        for (i, pt) in points.iter().enumerate() {
            let style = options.marker(points.is_endpoint(i));
            surface.fill_circle(Circle::new(pt, options.marker_radius), style);
        }
    }

    fn end_drag(&mut self) {
        if let InteractionState::Dragging(idx) = self.state {
            log::debug!("drag end, point {}", idx);
        }
        self.state = InteractionState::Idle;
    }

    fn publish(&mut self) {
        let text = readout::format_points(&self.points);
        self.readout.show(&text);
    }
}
