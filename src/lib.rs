//! An editor core for Bézier curves of arbitrary degree.
//!
//! The curve is defined by an ordered list of control points and evaluated
//! with de Casteljau's algorithm ([`casteljau`]). The [`Editor`] owns the
//! points and turns pointer input and commands into edits: a primary press
//! on empty space adds a point, pressing on a point drags it, and a context
//! action on a point removes it. Every frame the editor paints the dashed
//! control polygon, the curve and the point markers onto a host-supplied
//! [`Surface`]; a [`RenderLoop`] drives those frames.
//!
//! The crate knows nothing about windows or event loops. A host adapts
//! its canvas to [`Surface`] (or paints from a recorded [`Scene`]) and
//! forwards its events.

pub mod casteljau;
mod editor;
mod error;
mod input;
mod options;
mod points;
pub mod readout;
mod render_loop;
mod scene;
mod surface;

pub use editor::{Editor, InteractionState};
pub use error::CurveError;
pub use input::{Button, Command, EditorEvent, MenuAction};
pub use options::{EditorOptions, CURVE_SEGMENTS, HIT_RADIUS, MARKER_RADIUS};
pub use points::ControlPoints;
pub use readout::Readout;
pub use render_loop::RenderLoop;
pub use scene::{DrawOp, Scene};
pub use surface::{Fill, Rgba, Stroke, Surface};
