pub mod selected_view;

pub use selected_view::SelectedView;
