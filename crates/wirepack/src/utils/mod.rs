pub mod chunk;
pub mod export_path;
pub mod normalize_options;
pub mod render_wire_module;
