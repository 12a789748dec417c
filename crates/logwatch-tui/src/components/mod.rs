pub mod filter_panel;
pub mod group_list;
