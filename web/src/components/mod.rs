pub mod nav_bar;
pub mod preference_inputs;
pub mod theme_toggle;
