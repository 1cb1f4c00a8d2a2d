mod battle_scene;

// Used by the binary's `mod ui`; unused from the library, which keeps `ui` private.
#[allow(unused_imports)]
pub use battle_scene::draw_battle_scene;
