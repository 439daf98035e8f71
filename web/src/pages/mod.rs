pub mod preferences_page;
