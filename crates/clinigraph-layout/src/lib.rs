pub mod common;
pub mod spring;

pub use common::{GraphView, LayoutError};
pub use spring::{spring_layout, Point, SpringLayoutConfig};
