//! Figure construction for a finished run.

pub mod image;
pub mod svg;

pub use image::{Annotation, Outline, OutlineShape, Placeholder, PlotImage, ScatterSeries, render};
pub use svg::to_svg;
