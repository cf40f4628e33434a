#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod document;
pub mod geometry;
pub mod input;
pub mod model;
pub mod panels;
pub mod renderer;
pub mod shape;
pub mod state;
pub mod style;
pub mod surface;

pub use app::PaintApp;
pub use command::{Command, CommandError, CommandHistory, CommandKind, CommandResult};
pub use config::{ConfigError, PaintConfig};
pub use document::Document;
pub use geometry::{Bounds, Point};
pub use input::{CanvasController, InputEvent, Tool};
pub use model::PaintModel;
pub use renderer::PainterSurface;
pub use shape::{Shape, ShapeId, ShapeKind, ShapeType};
pub use state::EditorState;
pub use style::{Brush, Pen};
pub use surface::{DrawCall, RecordingSurface, Surface};
