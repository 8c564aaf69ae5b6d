#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{
    init_tracing, render_scene_to_image, render_scene_to_svg, save_scene, save_scene_png,
    save_scene_svg,
};
