//! Key hints

pub mod help_line_render;
