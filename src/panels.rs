pub mod profile_data_panel;
